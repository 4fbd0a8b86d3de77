// src/export/model.rs

use crate::models::Day;
use serde::Serialize;

/// Flat projection of one (node, day) pair, or of a node without days.
///
/// Counters are `None` on placeholder rows: an empty CSV field, `null` in JSON.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct ExportRow {
    pub date: String,
    pub time: String,
    pub name: String,
    pub tag: String,
    pub active: String,
    pub semi_idle: String,
    pub key: Option<u32>,
    pub lmb: Option<u32>,
    pub rmb: Option<u32>,
    pub scrollwheel: Option<u32>,
}

impl ExportRow {
    /// Row for a node that exists in the tree but has no recorded activity.
    pub fn placeholder(name: &str) -> Self {
        Self {
            date: String::new(),
            time: String::new(),
            name: name.to_string(),
            tag: String::new(),
            active: String::new(),
            semi_idle: String::new(),
            key: None,
            lmb: None,
            rmb: None,
            scrollwheel: None,
        }
    }

    pub fn from_day(day: &Day, name: &str, tag: &str) -> Self {
        Self {
            date: day.date_str(),
            time: day.first_used_str(),
            name: name.to_string(),
            tag: tag.to_string(),
            active: day.active_str(),
            semi_idle: day.semi_idle_str(),
            key: Some(day.key),
            lmb: Some(day.lmb),
            rmb: Some(day.rmb),
            scrollwheel: Some(day.scrollwheel),
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.date.is_empty()
    }

    /// The ten fields as text, in header order.
    pub fn to_record(&self) -> Vec<String> {
        let counter = |c: Option<u32>| c.map(|v| v.to_string()).unwrap_or_default();

        vec![
            self.date.clone(),
            self.time.clone(),
            self.name.clone(),
            self.tag.clone(),
            self.active.clone(),
            self.semi_idle.clone(),
            counter(self.key),
            counter(self.lmb),
            counter(self.rmb),
            counter(self.scrollwheel),
        ]
    }
}

/// Header for CSV / JSON / XLSX and the terminal table.
pub fn get_headers() -> Vec<&'static str> {
    vec![
        "date",
        "time",
        "name",
        "tag",
        "active",
        "semi_idle",
        "key",
        "lmb",
        "rmb",
        "scrollwheel",
    ]
}

pub(crate) fn rows_to_table(rows: &[ExportRow]) -> Vec<Vec<String>> {
    rows.iter().map(ExportRow::to_record).collect()
}
