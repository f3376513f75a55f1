//! CSV serialization and deserialization utilities.
//!
//! Provides generic functions for reading and writing whole CSV tables.
//! Fields are never trimmed, so values round-trip byte for byte.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tracing::warn;

/// Reads every record of a file.
///
/// Short rows are padded with empty fields up to the header width. A row that
/// still does not deserialize is logged and skipped, so one bad row never
/// hides the rest of the table. I/O and UTF-8 errors fail the whole read.
pub fn read_all<T, P>(path: P) -> csv::Result<Vec<T>>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)?;
    let headers = rdr.headers()?.clone();

    let mut rows = Vec::new();
    for (index, record) in rdr.records().enumerate() {
        let mut record = record?;
        while record.len() < headers.len() {
            record.push_field("");
        }
        match record.deserialize(Some(&headers)) {
            Ok(row) => rows.push(row),
            Err(err) => warn!(row = index + 1, error = %err, "Skipping unreadable row"),
        }
    }
    Ok(rows)
}

/// Writes the header row followed by every record.
/// The header is written even when there are no records.
pub fn write_csv<T, W>(
    writer: W,
    headers: &[&str],
    records: impl Iterator<Item = T>,
) -> csv::Result<()>
where
    T: Serialize,
    W: Write,
{
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    wtr.write_record(headers)?;
    for record in records {
        wtr.serialize(record)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Replaces the whole file at `path` with the header and records.
pub fn write_csv_file<T, P>(
    path: P,
    headers: &[&str],
    records: impl Iterator<Item = T>,
) -> csv::Result<()>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let file = File::create(path)?;
    write_csv(file, headers, records)
}

/// Creates a header-only file if nothing exists at `path`.
/// Returns whether a file was created.
pub fn ensure_csv_exists<P: AsRef<Path>>(path: P, headers: &[&str]) -> csv::Result<bool> {
    let path = path.as_ref();
    if path.exists() {
        return Ok(false);
    }
    write_csv_file(path, headers, std::iter::empty::<()>())?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::{Item, ItemStatus, ScoreRow, ITEM_HEADERS, SCORE_HEADERS};
    use tempfile::TempDir;

    #[test]
    fn test_read_csv() -> csv::Result<()> {
        let items: Vec<Item> = read_all("data/sample_items.csv")?;

        assert_eq!(items.len(), 3);
        assert_eq!(items[0].status, ItemStatus::Lost);
        assert_eq!(items[0].name, "Water bottle");
        assert_eq!(items[0].finder, "");
        assert_eq!(items[1].status, ItemStatus::Found);
        assert_eq!(items[1].description, "Blue, with \"CS\" sticker");
        assert_eq!(items[1].finder, "Bob");
        assert_eq!(items[2].status, ItemStatus::Returned);
        assert_eq!(items[2].description, "Two keys\non a red ring");
        assert_eq!(items[2].value, "");
        Ok(())
    }

    #[test]
    fn test_write_empty_set_keeps_header() -> csv::Result<()> {
        let mut output = Vec::new();
        write_csv(&mut output, &SCORE_HEADERS, std::iter::empty::<ScoreRow>())?;
        assert_eq!(String::from_utf8(output).unwrap(), "username,score\n");
        Ok(())
    }

    #[test]
    fn test_write_quotes_delimiters() -> csv::Result<()> {
        let rows = vec![ScoreRow {
            username: "smith, \"js\"".into(),
            score: "3".into(),
        }];
        let mut output = Vec::new();
        write_csv(&mut output, &SCORE_HEADERS, rows.iter())?;
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "username,score\n\"smith, \"\"js\"\"\",3\n"
        );
        Ok(())
    }

    #[test]
    fn test_file_round_trip() -> csv::Result<()> {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("items.csv");
        let original: Vec<Item> = read_all("data/sample_items.csv")?;

        write_csv_file(&path, &ITEM_HEADERS, original.iter())?;
        let reread: Vec<Item> = read_all(&path)?;

        assert_eq!(reread, original);
        Ok(())
    }

    #[test]
    fn test_ensure_csv_exists() -> csv::Result<()> {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("scores.csv");

        assert!(ensure_csv_exists(&path, &SCORE_HEADERS)?);
        assert_eq!(std::fs::read_to_string(&path)?, "username,score\n");

        std::fs::write(&path, "username,score\nann,4\n")?;
        assert!(!ensure_csv_exists(&path, &SCORE_HEADERS)?);
        assert_eq!(std::fs::read_to_string(&path)?, "username,score\nann,4\n");
        Ok(())
    }

    #[test]
    fn test_read_pads_short_rows() -> csv::Result<()> {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("scores.csv");
        std::fs::write(&path, "username,score\nann,40\ncarl\n")?;

        let rows: Vec<ScoreRow> = read_all(&path)?;
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].username, "carl");
        assert_eq!(rows[1].score, "");
        Ok(())
    }

    #[test]
    fn test_read_skips_only_bad_rows() -> csv::Result<()> {
        #[derive(Debug, serde::Deserialize, PartialEq)]
        struct Counted {
            name: String,
            count: u32,
        }

        let dir = TempDir::new().unwrap();
        let path = dir.path().join("counts.csv");
        std::fs::write(&path, "name,count\na,1\nb,many\nc,3\n")?;

        let rows: Vec<Counted> = read_all(&path)?;
        let names: Vec<&str> = rows.iter().map(|row| row.name.as_str()).collect();
        assert_eq!(names, vec!["a", "c"]);
        assert_eq!(rows[1].count, 3);
        Ok(())
    }

    #[test]
    fn test_read_invalid_utf8_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("scores.csv");
        std::fs::write(&path, b"username,score\nann,\xff\xfe\n").unwrap();

        let result: csv::Result<Vec<ScoreRow>> = read_all(&path);
        assert!(result.is_err());
    }

    #[test]
    fn test_read_missing_file() {
        let dir = TempDir::new().unwrap();
        let result: csv::Result<Vec<ScoreRow>> = read_all(dir.path().join("absent.csv"));
        assert!(result.is_err());
    }
}
