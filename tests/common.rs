#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use flate2::Compression;
use flate2::write::{GzEncoder, ZlibEncoder};
use std::env;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

/// Binary under test, isolated from any real configuration file.
pub fn rpt() -> Command {
    let mut cmd = cargo_bin_cmd!("rptexport");
    cmd.env(
        "RPTEXPORT_CONFIG_DIR",
        env::temp_dir().join("rptexport_tests_no_config"),
    );
    cmd
}

pub fn pack_date(year: u16, month: u16, day: u16) -> u16 {
    ((year - 2000) << 9) | (month << 5) | day
}

#[derive(Clone)]
pub struct DayRec {
    pub packed_date: u16,
    pub first_minute: u16,
    pub active: u32,
    pub semi_idle: u32,
    pub counters: [u32; 4],
}

pub fn day(year: u16, month: u16, d: u16, first_minute: u16, active: u32, semi_idle: u32) -> DayRec {
    DayRec {
        packed_date: pack_date(year, month, d),
        first_minute,
        active,
        semi_idle,
        counters: [0; 4],
    }
}

impl DayRec {
    pub fn counters(mut self, key: u32, lmb: u32, rmb: u32, scrollwheel: u32) -> Self {
        self.counters = [key, lmb, rmb, scrollwheel];
        self
    }

    fn write(&self, out: &mut Vec<u8>) {
        out.extend(self.packed_date.to_le_bytes());
        out.extend(self.first_minute.to_le_bytes());
        out.extend(self.active.to_le_bytes());
        out.extend(self.semi_idle.to_le_bytes());
        for c in self.counters {
            out.extend(c.to_le_bytes());
        }
    }
}

#[derive(Clone)]
pub struct NodeImage {
    pub name: String,
    pub tagindex: u32,
    pub hidden: bool,
    pub days: Vec<DayRec>,
    pub children: Vec<NodeImage>,
}

pub fn node(name: &str) -> NodeImage {
    NodeImage {
        name: name.to_string(),
        tagindex: 0,
        hidden: false,
        days: Vec::new(),
        children: Vec::new(),
    }
}

impl NodeImage {
    pub fn tag(mut self, index: u32) -> Self {
        self.tagindex = index;
        self
    }

    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }

    pub fn day(mut self, d: DayRec) -> Self {
        self.days.push(d);
        self
    }

    pub fn child(mut self, c: NodeImage) -> Self {
        self.children.push(c);
        self
    }

    fn write(&self, out: &mut Vec<u8>) {
        out.extend(self.name.as_bytes());
        out.push(0);
        out.extend(self.tagindex.to_le_bytes());
        out.push(self.hidden as u8);
        out.extend((self.days.len() as u32).to_le_bytes());
        for d in &self.days {
            d.write(out);
        }
        out.extend((self.children.len() as u32).to_le_bytes());
        for c in &self.children {
            c.write(out);
        }
    }
}

/// Decompressed database image.
pub struct DbImage {
    pub version: u32,
    /// Magic as stored on disk (byte-reversed).
    pub magic: [u8; 4],
    pub tags: Vec<(String, u32)>,
    pub minifilter: u32,
    pub foldlevel: u32,
    pub prefs: [u32; 10],
    pub root: NodeImage,
}

impl DbImage {
    pub fn new(root: NodeImage) -> Self {
        Self {
            version: 13,
            magic: *b"FFTP",
            tags: vec![("work".to_string(), 1)],
            minifilter: 0,
            foldlevel: 0,
            prefs: [0; 10],
            root,
        }
    }

    pub fn tags(mut self, tags: &[(&str, u32)]) -> Self {
        self.tags = tags.iter().map(|(n, id)| (n.to_string(), *id)).collect();
        self
    }

    pub fn header_bytes(&self) -> Vec<u8> {
        let mut out = Vec::new();
        out.extend(self.version.to_le_bytes());
        out.extend(self.magic);
        out.extend((self.tags.len() as u32).to_le_bytes());
        for (name, id) in &self.tags {
            let mut field = [0u8; 32];
            field[..name.len()].copy_from_slice(name.as_bytes());
            out.extend(field);
            out.extend(id.to_le_bytes());
        }
        out.extend(self.minifilter.to_le_bytes());
        out.extend(self.foldlevel.to_le_bytes());
        for p in self.prefs {
            out.extend(p.to_le_bytes());
        }
        out
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = self.header_bytes();
        self.root.write(&mut out);
        out
    }
}

/// The single-row database used throughout the tests.
pub fn sample_db() -> DbImage {
    DbImage::new(node("root").day(day(2025, 1, 1, 1245, 6610, 0)))
}

/// A small tree: days, nested children, a day-less node and a hidden one.
pub fn tree_db() -> DbImage {
    let root = node("root")
        .day(day(2025, 1, 1, 1245, 6610, 0))
        .child(
            node("firefox.exe")
                .tag(1)
                .day(day(2025, 1, 2, 540, 3600, 120).counters(10, 20, 3, 4))
                .day(day(2025, 2, 3, 600, 59, 61))
                .child(node("github.com")),
        )
        .child(node("games").hidden().child(node("solitaire.exe").day(day(2024, 12, 31, 0, 1, 0))));

    DbImage::new(root).tags(&[("work", 1), ("browsing", 0xbeef)])
}

pub fn gzip(bytes: &[u8]) -> Vec<u8> {
    let mut enc = GzEncoder::new(Vec::new(), Compression::default());
    enc.write_all(bytes).expect("gzip write");
    enc.finish().expect("gzip finish")
}

pub fn zlib(bytes: &[u8]) -> Vec<u8> {
    let mut enc = ZlibEncoder::new(Vec::new(), Compression::default());
    enc.write_all(bytes).expect("zlib write");
    enc.finish().expect("zlib finish")
}

/// Write a gzip-compressed database into the temp dir and return its path.
pub fn write_db_file(name: &str, image: &DbImage) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rptexport_db.PT", name));
    fs::write(&path, gzip(&image.to_bytes())).expect("write db file");
    path.to_string_lossy().to_string()
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rptexport_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}
