//! Fixed-column CSV export of normalized records.

use std::path::{Path, PathBuf};

use pnkstr_core::NormalizedRecord;

use crate::error::ReportError;

/// Header row, in column order. Matches the field order of [`NormalizedRecord`].
pub const CSV_COLUMNS: [&str; 14] = [
    "query",
    "tweet_id",
    "created_at",
    "text",
    "author_id",
    "author_username",
    "author_name",
    "author_verified",
    "likes",
    "retweets",
    "replies",
    "quotes",
    "impressions",
    "language",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    /// There were no records; no file was created.
    Skipped,
    Written { path: PathBuf, rows: usize },
}

/// Writes `records` to `path` as CSV with a header row.
///
/// An empty slice writes nothing at all, not even a header. The parent
/// directory is created when missing; an existing file is overwritten.
///
/// # Errors
///
/// Returns [`ReportError`] if the directory or file cannot be created or written.
pub fn export_csv(records: &[NormalizedRecord], path: &Path) -> Result<ExportOutcome, ReportError> {
    if records.is_empty() {
        tracing::debug!(path = %path.display(), "no records; skipping CSV export");
        return Ok(ExportOutcome::Skipped);
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    // The header row comes from the record's field names on the first row.
    let mut writer = csv::Writer::from_path(path)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;

    tracing::info!(path = %path.display(), rows = records.len(), "wrote CSV export");
    Ok(ExportOutcome::Written {
        path: path.to_path_buf(),
        rows: records.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(text: &str) -> NormalizedRecord {
        NormalizedRecord {
            query: "PNKSTR".to_string(),
            tweet_id: "1866".to_string(),
            created_at: "2025-01-15T12:00:00.000Z".to_string(),
            text: text.to_string(),
            author_id: "u1".to_string(),
            author_username: "alice".to_string(),
            author_name: "Alice".to_string(),
            author_verified: true,
            likes: 3,
            retweets: 2,
            replies: 1,
            quotes: 0,
            impressions: 0,
            language: "en".to_string(),
        }
    }

    #[test]
    fn empty_records_write_no_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let outcome = export_csv(&[], &path).unwrap();
        assert_eq!(outcome, ExportOutcome::Skipped);
        assert!(!path.exists());
    }

    #[test]
    fn single_record_writes_header_and_one_row() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let outcome = export_csv(&[record("hello world")], &path).unwrap();
        assert_eq!(
            outcome,
            ExportOutcome::Written {
                path: path.clone(),
                rows: 1
            }
        );

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], CSV_COLUMNS.join(","));
        assert_eq!(
            lines[0],
            "query,tweet_id,created_at,text,author_id,author_username,author_name,\
             author_verified,likes,retweets,replies,quotes,impressions,language"
        );
        assert_eq!(
            lines[1],
            "PNKSTR,1866,2025-01-15T12:00:00.000Z,hello world,u1,alice,Alice,true,3,2,1,0,0,en"
        );
    }

    #[test]
    fn embedded_commas_and_quotes_are_quoted() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        export_csv(&[record(r#"gm, "fam""#)], &path).unwrap();

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let rows: Vec<csv::StringRecord> = reader.records().map(Result::unwrap).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][3], r#"gm, "fam""#);
        assert_eq!(rows[0].len(), CSV_COLUMNS.len());
    }

    #[test]
    fn creates_missing_parent_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data").join("nested").join("out.csv");
        export_csv(&[record("x")], &path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn rows_follow_input_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let mut second = record("second");
        second.tweet_id = "2".to_string();
        export_csv(&[record("first"), second], &path).unwrap();

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let ids: Vec<String> = reader
            .records()
            .map(|r| r.unwrap()[1].to_string())
            .collect();
        assert_eq!(ids, ["1866", "2"]);
    }
}
