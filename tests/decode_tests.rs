mod common;
use common::{DbImage, day, gzip, node, pack_date, sample_db, tree_db, zlib};
use rptexport::db::cursor::ByteCursor;
use rptexport::db::decompress::decompress;
use rptexport::{DecodeError, PackedDate, ValidationError, decode, decode_buffer};

#[test]
fn test_cursor_reads_little_endian_in_sequence() {
    let buf = [0x01, 0x34, 0x12, 0x78, 0x56, 0x34, 0x12, b'a', b'b', 0, 0xff];
    let mut cur = ByteCursor::new(&buf);

    assert_eq!(cur.read_u8().unwrap(), 0x01);
    assert_eq!(cur.read_u16_le().unwrap(), 0x1234);
    assert_eq!(cur.read_u32_le().unwrap(), 0x12345678);
    assert_eq!(cur.read_cstring().unwrap(), "ab");
    assert_eq!(cur.position(), 10);
    assert_eq!(cur.remaining(), 1);
    assert_eq!(cur.read_fixed(1).unwrap(), &[0xff]);
    assert_eq!(cur.remaining(), 0);
}

#[test]
fn test_cursor_out_of_bounds_does_not_advance() {
    let buf = [1, 2, 3];
    let mut cur = ByteCursor::new(&buf);

    match cur.read_u32_le() {
        Err(DecodeError::OutOfBounds {
            offset,
            wanted,
            remaining,
        }) => {
            assert_eq!(offset, 0);
            assert_eq!(wanted, 4);
            assert_eq!(remaining, 3);
        }
        other => panic!("expected OutOfBounds, got {other:?}"),
    }

    assert_eq!(cur.position(), 0);
    assert_eq!(cur.read_u16_le().unwrap(), 0x0201);
}

#[test]
fn test_cursor_cstring_without_terminator() {
    let buf = *b"no-nul";
    let mut cur = ByteCursor::new(&buf);

    assert!(matches!(
        cur.read_cstring(),
        Err(DecodeError::OutOfBounds { .. })
    ));
}

#[test]
fn test_cursor_empty_cstring() {
    let buf = [0u8, b'x', 0];
    let mut cur = ByteCursor::new(&buf);

    assert_eq!(cur.read_cstring().unwrap(), "");
    assert_eq!(cur.read_cstring().unwrap(), "x");
}

#[test]
fn test_packed_date_unpacking() {
    let d: u16 = (25 << 9) | (1 << 5) | 1;
    let date = PackedDate::unpack(d);

    assert_eq!(date.year, 2025);
    assert_eq!(date.month, 1);
    assert_eq!(date.day, 1);
    assert_eq!(date.to_string(), "2025-01-01");

    let buf = pack_date(2019, 6, 9).to_le_bytes();
    let mut cur = ByteCursor::new(&buf);
    assert_eq!(cur.read_packed_date().unwrap().to_string(), "2019-06-09");
}

#[test]
fn test_packed_date_without_calendar_meaning() {
    let date = PackedDate::unpack(0);

    assert_eq!(date.to_string(), "2000-00-00");
    assert!(date.to_naive().is_none());
}

#[test]
fn test_decode_sample_database() {
    let db = decode_buffer(&sample_db().to_bytes()).expect("decode");

    assert_eq!(db.version, 13);
    assert_eq!(db.magic, "PTFF");
    assert_eq!(db.numtags, 1);
    assert_eq!(db.tags[0].name(), "work");
    assert_eq!(db.tags[0].id_hex(), "0x1");
    assert_eq!(db.prefs, [0; 10]);

    assert_eq!(db.root.name, "root");
    assert_eq!(db.root.tagindex, 0);
    assert!(!db.root.is_hidden);
    assert!(db.root.children.is_empty());

    let d = &db.root.days[0];
    assert_eq!(d.date_str(), "2025-01-01");
    assert_eq!(d.first_used_str(), "20:45:00");
    assert_eq!(d.active_str(), "01:50:10");
    assert_eq!(d.semi_idle_str(), "00:00:00");
}

#[test]
fn test_header_passthrough_fields() {
    let mut image = sample_db();
    image.version = 14;
    image.minifilter = 7;
    image.foldlevel = 0xdead;
    image.prefs = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10];

    let db = decode_buffer(&image.to_bytes()).expect("decode");

    assert_eq!(db.version, 14);
    assert_eq!(db.minifilter, 7);
    assert_eq!(db.foldlevel, 0xdead);
    assert_eq!(db.prefs, [1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
}

#[test]
fn test_tree_structure_follows_byte_order() {
    let db = decode_buffer(&tree_db().to_bytes()).expect("decode");

    let root = &db.root;
    assert_eq!(root.children.len(), 2);

    let firefox = &root.children[0];
    assert_eq!(firefox.name, "firefox.exe");
    assert_eq!(firefox.tagindex, 1);
    assert_eq!(firefox.days.len(), 2);
    assert_eq!(firefox.days[0].key, 10);
    assert_eq!(firefox.days[0].lmb, 20);
    assert_eq!(firefox.days[0].rmb, 3);
    assert_eq!(firefox.days[0].scrollwheel, 4);
    assert_eq!(firefox.children[0].name, "github.com");
    assert!(firefox.children[0].days.is_empty());

    let games = &root.children[1];
    assert!(games.is_hidden);
    assert_eq!(games.children[0].name, "solitaire.exe");
    assert_eq!(games.children[0].days[0].date_str(), "2024-12-31");

    assert_eq!(db.tags[1].name(), "browsing");
    assert_eq!(db.tags[1].id_hex(), "0xbeef");
}

#[test]
fn test_total_active_seconds_includes_descendants() {
    let db = decode_buffer(&tree_db().to_bytes()).expect("decode");

    assert_eq!(db.root.children[0].total_active_seconds(), 3600 + 59);
    assert_eq!(db.root.total_active_seconds(), 6610 + 3600 + 59 + 1);
}

#[test]
fn test_version_12_is_rejected_regardless_of_content() {
    let mut image = sample_db();
    image.version = 12;

    let err = decode_buffer(&image.to_bytes()).unwrap_err();
    assert!(matches!(
        err,
        DecodeError::Validation(ValidationError::UnsupportedVersion(12))
    ));

    // nothing but the version field
    let err = decode_buffer(&12u32.to_le_bytes()).unwrap_err();
    assert!(matches!(
        err,
        DecodeError::Validation(ValidationError::UnsupportedVersion(12))
    ));
}

#[test]
fn test_wrong_magic_is_rejected() {
    let mut image = sample_db();
    image.magic = *b"PTFF"; // not reversed

    match decode_buffer(&image.to_bytes()) {
        Err(DecodeError::Validation(ValidationError::BadMagic(m))) => assert_eq!(m, "FFTP"),
        other => panic!("expected BadMagic, got {other:?}"),
    }
}

#[test]
fn test_tag_index_out_of_range_is_rejected() {
    let image = DbImage::new(node("root").child(node("bad").tag(3)));

    match decode_buffer(&image.to_bytes()) {
        Err(DecodeError::Validation(ValidationError::TagIndexOutOfRange {
            node,
            index,
            numtags,
        })) => {
            assert_eq!(node, "bad");
            assert_eq!(index, 3);
            assert_eq!(numtags, 1);
        }
        other => panic!("expected TagIndexOutOfRange, got {other:?}"),
    }
}

#[test]
fn test_every_truncation_is_out_of_bounds() {
    let bytes = tree_db().to_bytes();

    for cut in 0..bytes.len() {
        match decode_buffer(&bytes[..cut]) {
            Err(DecodeError::OutOfBounds { .. }) => {}
            other => panic!("cut at {cut}: expected OutOfBounds, got {other:?}"),
        }
    }

    assert!(decode_buffer(&bytes).is_ok());
}

#[test]
fn test_huge_declared_counts_fail_cleanly() {
    let mut bytes = sample_db().header_bytes();
    bytes.extend(b"root\0");
    bytes.extend(0u32.to_le_bytes());
    bytes.push(0);
    bytes.extend(u32::MAX.to_le_bytes()); // days

    assert!(matches!(
        decode_buffer(&bytes),
        Err(DecodeError::OutOfBounds { .. })
    ));
}

#[test]
fn test_deeply_nested_tree() {
    const DEPTH: usize = 100_000;

    let mut bytes = sample_db().header_bytes();
    for i in 0..DEPTH {
        bytes.extend(format!("n{i}\0").as_bytes());
        bytes.extend(0u32.to_le_bytes());
        bytes.push(0);
        bytes.extend(0u32.to_le_bytes());
        let children: u32 = if i + 1 < DEPTH { 1 } else { 0 };
        bytes.extend(children.to_le_bytes());
    }

    let db = decode_buffer(&bytes).expect("decode deep tree");
    let stats = rptexport::core::stats::TreeStats::collect(&db.root);

    assert_eq!(stats.nodes, DEPTH);
    assert_eq!(stats.max_depth, DEPTH - 1);
    assert_eq!(rptexport::flatten(&db).len(), DEPTH);
}

#[test]
fn test_decode_gzip_and_zlib_payloads() {
    let bytes = sample_db().to_bytes();

    let from_gzip = decode(&gzip(&bytes)).expect("gzip");
    let from_zlib = decode(&zlib(&bytes)).expect("zlib");

    assert_eq!(from_gzip, from_zlib);
    assert_eq!(from_gzip.root.name, "root");
}

#[test]
fn test_corrupt_or_truncated_payload() {
    let bytes = tree_db().to_bytes();

    let gz = gzip(&bytes);
    assert!(matches!(
        decompress(&gz[..gz.len() / 2]),
        Err(DecodeError::Decompression(_))
    ));

    let z = zlib(&bytes);
    assert!(matches!(
        decompress(&z[..z.len() / 2]),
        Err(DecodeError::Decompression(_))
    ));

    assert!(matches!(
        decode(b"definitely not compressed"),
        Err(DecodeError::Decompression(_))
    ));
}

#[test]
fn test_stats_over_tree() {
    let db = decode_buffer(&tree_db().to_bytes()).expect("decode");
    let stats = rptexport::core::stats::TreeStats::collect(&db.root);

    assert_eq!(stats.nodes, 5);
    assert_eq!(stats.hidden_nodes, 1);
    assert_eq!(stats.days, 4);
    assert_eq!(stats.max_depth, 2);
    assert_eq!(stats.semi_idle_seconds, 181);
    assert_eq!(stats.first_date.unwrap().to_string(), "2024-12-31");
    assert_eq!(stats.last_date.unwrap().to_string(), "2025-02-03");
}

#[test]
fn test_day_builder_matches_decoder() {
    let image = DbImage::new(node("x").day(day(2030, 12, 31, 0, 0, 86_399)));
    let db = decode_buffer(&image.to_bytes()).expect("decode");

    assert_eq!(db.root.days[0].date_str(), "2030-12-31");
    assert_eq!(db.root.days[0].first_used_str(), "00:00:00");
    assert_eq!(db.root.days[0].semi_idle_str(), "23:59:59");
}

#[test]
fn test_packed_dates_order_chronologically() {
    let earlier = PackedDate::unpack(pack_date(2024, 12, 31));
    let later = PackedDate::unpack(pack_date(2025, 1, 1));

    assert!(earlier < later);
    assert_eq!(later.to_naive().unwrap().to_string(), "2025-01-01");
}
