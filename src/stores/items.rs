//! Lost and found item records backed by a single CSV file.
//!
//! Every operation reads the whole file, works on the in-memory set and
//! writes the whole set back. Nothing is cached between calls.

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::csv_utils::{ensure_csv_exists, read_all, write_csv_file};
use crate::dto::{Item, ItemReport, ItemStatus, ITEM_HEADERS};
use crate::error::{Error, Result};

#[derive(Debug, Clone)]
pub struct ItemStore {
    path: PathBuf,
}

impl ItemStore {
    /// Opens the store at `path`, creating a header-only file if none exists.
    pub fn open<P: Into<PathBuf>>(path: P) -> Result<Self> {
        let path = path.into();
        let created = ensure_csv_exists(&path, &ITEM_HEADERS).map_err(|source| {
            Error::StoreUnwritable {
                path: path.clone(),
                source,
            }
        })?;
        if created {
            info!(path = %path.display(), "Created items file");
        }
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Records a new lost item and returns its generated id.
    pub fn report(&self, report: ItemReport) -> Result<String> {
        let item = Item::lost(report);
        let unique_id = item.unique_id.clone();

        let mut items = self.load();
        items.push(item);
        self.save(&items)?;

        debug!(unique_id = %unique_id, total = items.len(), "Reported lost item");
        Ok(unique_id)
    }

    /// Marks the first Lost item with `unique_id` as Found by `finder`.
    /// Items already Found are left alone.
    pub fn mark_found(&self, unique_id: &str, finder: &str) -> Result<()> {
        let mut items = self.load();
        let item = items
            .iter_mut()
            .find(|item| item.unique_id == unique_id && item.status == ItemStatus::Lost)
            .ok_or_else(|| Error::RecordNotFound {
                unique_id: unique_id.to_owned(),
            })?;
        item.status = ItemStatus::Found;
        item.finder = finder.to_owned();

        self.save(&items)?;
        debug!(unique_id, finder, "Marked item found");
        Ok(())
    }

    /// Deletes every item carrying `unique_id`.
    /// The file is only rewritten when something was removed.
    pub fn remove(&self, unique_id: &str) -> Result<()> {
        let mut items = self.load();
        let before = items.len();
        items.retain(|item| item.unique_id != unique_id);
        let removed = before - items.len();
        if removed == 0 {
            return Err(Error::RecordNotFound {
                unique_id: unique_id.to_owned(),
            });
        }

        self.save(&items)?;
        debug!(unique_id, removed, "Removed item");
        Ok(())
    }

    /// Yields every item that is not Returned, in file order.
    /// Each call re-reads the file.
    pub fn list_unreturned(&self) -> impl Iterator<Item = Item> {
        self.load()
            .into_iter()
            .filter(|item| item.status != ItemStatus::Returned)
    }

    /// Loads the full set, treating an unreadable file as empty.
    fn load(&self) -> Vec<Item> {
        self.try_load().unwrap_or_else(|err| {
            warn!(error = %err, "Treating items store as empty");
            Vec::new()
        })
    }

    fn try_load(&self) -> Result<Vec<Item>> {
        read_all(&self.path).map_err(|source| Error::StoreUnreadable {
            path: self.path.clone(),
            source,
        })
    }

    fn save(&self, items: &[Item]) -> Result<()> {
        write_csv_file(&self.path, &ITEM_HEADERS, items.iter()).map_err(|source| {
            Error::StoreUnwritable {
                path: self.path.clone(),
                source,
            }
        })
    }
}
