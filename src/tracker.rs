use crate::{
    stores::{Award, ItemStore, ScoreStore},
    Config, Item, ItemReport, Result, ScoreEntry,
};

/// Both stores opened from one [`Config`].
///
/// Callers that only need one table can open an [`ItemStore`] or
/// [`ScoreStore`] directly; this type just saves passing two handles around.
#[derive(Debug, Clone)]
pub struct Tracker {
    items: ItemStore,
    scores: ScoreStore,
}

impl Tracker {
    /// Opens both stores, creating header-only files for any that are missing.
    pub fn open(config: &Config) -> Result<Self> {
        Ok(Self {
            items: ItemStore::open(&config.items_path)?,
            scores: ScoreStore::open(&config.scores_path)?,
        })
    }

    pub fn items(&self) -> &ItemStore {
        &self.items
    }

    pub fn scores(&self) -> &ScoreStore {
        &self.scores
    }

    pub fn report(&self, report: ItemReport) -> Result<String> {
        self.items.report(report)
    }

    pub fn mark_found(&self, unique_id: &str, finder: &str) -> Result<()> {
        self.items.mark_found(unique_id, finder)
    }

    pub fn remove(&self, unique_id: &str) -> Result<()> {
        self.items.remove(unique_id)
    }

    pub fn list_unreturned(&self) -> impl Iterator<Item = Item> {
        self.items.list_unreturned()
    }

    pub fn award(&self, username: &str, points: i128) -> Result<Award> {
        self.scores.award(username, points)
    }

    pub fn ranked(&self) -> Result<Vec<ScoreEntry>> {
        self.scores.ranked()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ItemStatus;
    use tempfile::TempDir;

    fn config(dir: &TempDir) -> Config {
        Config {
            items_path: dir.path().join("lost_items.csv"),
            scores_path: dir.path().join("user_scores.csv"),
        }
    }

    #[test]
    fn test_open_creates_both_files() {
        let dir = TempDir::new().unwrap();
        let config = config(&dir);
        Tracker::open(&config).unwrap();

        assert!(config.items_path.exists());
        assert!(config.scores_path.exists());
    }

    #[test]
    fn test_stores_are_independent() {
        let dir = TempDir::new().unwrap();
        let tracker = Tracker::open(&config(&dir)).unwrap();

        let id = tracker
            .report(ItemReport {
                name: "Wallet".into(),
                reporter: "Ann".into(),
                ..Default::default()
            })
            .unwrap();
        tracker.mark_found(&id, "bob").unwrap();
        tracker.award("bob", 5).unwrap();

        let items: Vec<Item> = tracker.list_unreturned().collect();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].status, ItemStatus::Found);
        assert_eq!(tracker.ranked().unwrap()[0].score, 5);

        tracker.remove(&id).unwrap();
        assert_eq!(tracker.list_unreturned().count(), 0);
        assert_eq!(tracker.ranked().unwrap().len(), 1);
    }
}
