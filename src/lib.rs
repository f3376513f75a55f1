mod config;
mod csv_utils;
mod dto;
mod error;
mod stores;
mod tracker;

pub use config::{Config, DEFAULT_ITEMS_FILE, DEFAULT_SCORES_FILE};
pub use dto::{Item, ItemReport, ItemStatus, ScoreEntry, ScoreRow};
pub use error::{Error, Result};
pub use stores::{Award, AwardKind, ItemStore, ScoreStore};
pub use tracker::Tracker;
