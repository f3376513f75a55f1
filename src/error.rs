//! Errors surfaced by the item and score stores.
//!
//! - Backing file problems (unreadable, unwritable)
//! - Lookup misses for item ids
//! - Corrupt score values met by the strict ranking path
//!
//! Unreadable stores are recovered inside the stores themselves, so callers
//! only ever see the other three kinds.

use std::num::ParseIntError;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot read store {}: {source}", .path.display())]
    StoreUnreadable {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("cannot write store {}: {source}", .path.display())]
    StoreUnwritable {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("no matching record for id {unique_id}")]
    RecordNotFound { unique_id: String },

    #[error("score of user '{username}' is not an integer: '{value}'")]
    ParseError {
        username: String,
        value: String,
        #[source]
        source: ParseIntError,
    },
}
