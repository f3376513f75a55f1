//! Per-user finder points backed by a single CSV file.

use std::num::ParseIntError;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::csv_utils::{ensure_csv_exists, read_all, write_csv_file};
use crate::dto::{ScoreEntry, ScoreRow, SCORE_HEADERS};
use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AwardKind {
    /// First award for the user.
    Created,
    /// Points added to a valid stored score.
    Added,
    /// Stored score was not an integer and was replaced by the points.
    Reset,
}

/// Outcome of [`ScoreStore::award`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Award {
    pub username: String,
    /// The delta requested by the caller, whichever path was taken.
    pub points: i128,
    /// The total now stored for the user.
    pub score: i128,
    pub kind: AwardKind,
}

#[derive(Debug, Clone)]
pub struct ScoreStore {
    path: PathBuf,
}

impl ScoreStore {
    /// Opens the store at `path`, creating a header-only file if none exists.
    pub fn open<P: Into<PathBuf>>(path: P) -> Result<Self> {
        let path = path.into();
        let created = ensure_csv_exists(&path, &SCORE_HEADERS).map_err(|source| {
            Error::StoreUnwritable {
                path: path.clone(),
                source,
            }
        })?;
        if created {
            info!(path = %path.display(), "Created scores file");
        }
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Adds `points` to the user's score, creating the user on first award.
    /// A corrupt stored score is reset to `points` instead of failing.
    pub fn award(&self, username: &str, points: i128) -> Result<Award> {
        let mut rows = self.load();

        let (score, kind) = match rows.iter_mut().find(|row| row.username == username) {
            Some(row) => {
                let (score, kind) = match parse_score(&row.score) {
                    Ok(current) => (current.saturating_add(points), AwardKind::Added),
                    Err(err) => {
                        warn!(username, value = %row.score, error = %err, "Resetting corrupt score");
                        (points, AwardKind::Reset)
                    }
                };
                row.score = score.to_string();
                (score, kind)
            }
            None => {
                rows.push(ScoreRow {
                    username: username.to_owned(),
                    score: points.to_string(),
                });
                (points, AwardKind::Created)
            }
        };

        self.save(&rows)?;
        debug!(username, points = %points, score = %score, kind = ?kind, "Awarded points");
        Ok(Award {
            username: username.to_owned(),
            points,
            score,
            kind,
        })
    }

    /// Returns all users by score, highest first. Ties keep file order.
    /// Fails on the first stored score that is not an integer.
    pub fn ranked(&self) -> Result<Vec<ScoreEntry>> {
        let mut entries = self
            .load()
            .into_iter()
            .map(|row| match parse_score(&row.score) {
                Ok(score) => Ok(ScoreEntry {
                    username: row.username,
                    score,
                }),
                Err(source) => Err(Error::ParseError {
                    username: row.username,
                    value: row.score,
                    source,
                }),
            })
            .collect::<Result<Vec<_>>>()?;

        // sort_by is stable
        entries.sort_by(|a, b| b.score.cmp(&a.score));
        Ok(entries)
    }

    fn load(&self) -> Vec<ScoreRow> {
        read_all(&self.path).unwrap_or_else(|source| {
            let err = Error::StoreUnreadable {
                path: self.path.clone(),
                source,
            };
            warn!(error = %err, "Treating scores store as empty");
            Vec::new()
        })
    }

    fn save(&self, rows: &[ScoreRow]) -> Result<()> {
        write_csv_file(&self.path, &SCORE_HEADERS, rows.iter()).map_err(|source| {
            Error::StoreUnwritable {
                path: self.path.clone(),
                source,
            }
        })
    }
}

/// Parses a stored score, ignoring surrounding whitespace.
fn parse_score(text: &str) -> std::result::Result<i128, ParseIntError> {
    text.trim().parse()
}
