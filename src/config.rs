use std::path::PathBuf;

pub const DEFAULT_ITEMS_FILE: &str = "lost_items.csv";
pub const DEFAULT_SCORES_FILE: &str = "user_scores.csv";

/// Locations of the two backing files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub items_path: PathBuf,
    pub scores_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            items_path: PathBuf::from(DEFAULT_ITEMS_FILE),
            scores_path: PathBuf::from(DEFAULT_SCORES_FILE),
        }
    }
}
