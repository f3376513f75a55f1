//! Storage layer for the lost and found tracker. Provides storage for:
//! - Lost and found item records ([`ItemStore`])
//! - Finder point totals ([`ScoreStore`])
//!
//! The two stores share no state. Each one owns a single CSV file and
//! re-reads it on every operation, assuming exclusive access for the
//! duration of the call.

mod items;
mod scores;

pub use items::ItemStore;
pub use scores::{Award, AwardKind, ScoreStore};
