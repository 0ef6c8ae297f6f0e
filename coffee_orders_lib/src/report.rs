//! CSV order report.

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use crate::types::ReportRow;

/// Column headers, always written as the first line.
pub const REPORT_HEADER: [&str; 5] = ["User", "Title", "Link", "Price", "Image"];

#[derive(thiserror::Error, Debug)]
pub enum ReportError {
    #[error("cannot create {path}: {source}")]
    Create { path: PathBuf, source: io::Error },
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// Writes the header followed by one record per row, in order.
pub fn write_rows<W: io::Write>(writer: W, rows: &[ReportRow]) -> Result<(), ReportError> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    wtr.write_record(REPORT_HEADER)?;
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Writes the report to `path`, replacing any existing file. A failure part
/// way through can leave a partial file behind.
pub fn write_report(path: &Path, rows: &[ReportRow]) -> Result<(), ReportError> {
    let file = File::create(path).map_err(|source| ReportError::Create {
        path: path.to_path_buf(),
        source,
    })?;
    write_rows(file, rows)?;
    tracing::info!("Orders saved to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(author: &str, title: &str, url: &str, price: &str, image: &str) -> ReportRow {
        ReportRow {
            author: author.to_string(),
            title: title.to_string(),
            url: url.to_string(),
            price: price.to_string(),
            image_ref: image.to_string(),
        }
    }

    fn csv_from_rows(rows: &[ReportRow]) -> String {
        let mut buf = Vec::new();
        write_rows(&mut buf, rows).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn single_row_layout() {
        let csv = csv_from_rows(&[row("Alice", "T", "u1", "$5", "img.png")]);
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines, vec!["User,Title,Link,Price,Image", "Alice,T,u1,$5,img.png"]);
    }

    #[test]
    fn empty_report_still_has_header() {
        let csv = csv_from_rows(&[]);
        assert_eq!(csv.lines().collect::<Vec<_>>(), vec!["User,Title,Link,Price,Image"]);
    }

    #[test]
    fn quotes_fields_with_separators() {
        let csv = csv_from_rows(&[row("Bob Dvorak", "Kolumbie, Huila", "u2", "329 Kč", "")]);
        let data = csv.lines().nth(1).unwrap();
        assert_eq!(data, "Bob Dvorak,\"Kolumbie, Huila\",u2,329 Kč,");
    }

    #[test]
    fn keeps_row_order_and_duplicates() {
        let rows = vec![
            row("A", "One", "u1", "1", ""),
            row("B", "One", "u1", "1", ""),
            row("A", "Two", "u2", "2", ""),
        ];
        let csv = csv_from_rows(&rows);
        let lines: Vec<&str> = csv.lines().skip(1).collect();
        assert_eq!(lines, vec!["A,One,u1,1,", "B,One,u1,1,", "A,Two,u2,2,"]);
    }

    #[test]
    fn write_report_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("orders.csv");
        std::fs::write(&path, "stale contents\nmore stale\nlines\n").unwrap();

        write_report(&path, &[row("Alice", "T", "u1", "$5", "img.png")]).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written.lines().count(), 2);
        assert!(!written.contains("stale"));
    }

    #[test]
    fn write_report_to_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no-such-dir").join("orders.csv");
        let err = write_report(&path, &[]).unwrap_err();
        assert!(matches!(err, ReportError::Create { .. }));
    }
}
