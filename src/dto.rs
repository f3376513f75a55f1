use std::fmt;

use serde::{Deserialize, Serialize};

pub const ITEM_HEADERS: [&str; 8] = [
    "status",
    "name",
    "location",
    "description",
    "reporter",
    "finder",
    "value",
    "unique_id",
];

pub const SCORE_HEADERS: [&str; 2] = ["username", "score"];

/// Item lifecycle status. Text that is not one of the known statuses is
/// kept verbatim in `Other` so it survives a rewrite of the file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(from = "String", into = "String")]
pub enum ItemStatus {
    Lost,
    Found,
    /// Excluded from unreturned listings. Nothing sets it yet.
    Returned,
    Other(String),
}

impl From<String> for ItemStatus {
    fn from(text: String) -> Self {
        match text.as_str() {
            "Lost" => ItemStatus::Lost,
            "Found" => ItemStatus::Found,
            "Returned" => ItemStatus::Returned,
            _ => ItemStatus::Other(text),
        }
    }
}

impl From<ItemStatus> for String {
    fn from(status: ItemStatus) -> Self {
        status.to_string()
    }
}

impl fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemStatus::Lost => write!(f, "Lost"),
            ItemStatus::Found => write!(f, "Found"),
            ItemStatus::Returned => write!(f, "Returned"),
            ItemStatus::Other(text) => write!(f, "{}", text),
        }
    }
}

/// What a reporter tells us about a lost item.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemReport {
    pub name: String,
    pub location: String,
    pub description: String,
    pub reporter: String,
    pub value: String,
}

/// One row of the items table. Field order is the column order on disk.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Item {
    pub status: ItemStatus,
    pub name: String,
    pub location: String,
    pub description: String,
    pub reporter: String,
    pub finder: String,
    pub value: String,
    pub unique_id: String,
}

impl Item {
    /// Builds a freshly reported item: status Lost, no finder, new v4 id.
    pub fn lost(report: ItemReport) -> Self {
        Self {
            status: ItemStatus::Lost,
            name: report.name,
            location: report.location,
            description: report.description,
            reporter: report.reporter,
            finder: String::new(),
            value: report.value,
            unique_id: uuid::Uuid::new_v4().to_string(),
        }
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Name: {}, Location: {}, Status: {}, ID: {}",
            self.name, self.location, self.status, self.unique_id
        )
    }
}

/// One row of the scores table. The score stays text so corrupt values survive a load.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScoreRow {
    pub username: String,
    pub score: String,
}

/// A parsed scoreboard line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreEntry {
    pub username: String,
    pub score: i128,
}

impl fmt::Display for ScoreEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} points", self.username, self.score)
    }
}
