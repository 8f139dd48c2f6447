//! Table loading utilities
//!
//! Reads tab-separated rows from files, for tables that are not compiled in.

use super::{Record, TableError, try_records};
use std::fs;
use std::path::Path;

/// Split tab-separated content into rows, skipping blank lines
#[must_use]
pub fn parse_tsv(content: &str) -> Vec<Vec<String>> {
    content
        .lines()
        .map(|line| line.trim_end_matches('\r'))
        .filter(|line| !line.is_empty())
        .map(|line| line.split('\t').map(str::to_string).collect())
        .collect()
}

/// Load rows from a TSV file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read.
pub fn load_tsv<P: AsRef<Path>>(path: P) -> Result<Vec<Vec<String>>, TableError> {
    let content = fs::read_to_string(path)?;
    Ok(parse_tsv(&content))
}

/// Load typed records from a TSV file
///
/// # Errors
///
/// Returns an error if the file cannot be read or any row does not match the schema.
pub fn load_records<R: Record, P: AsRef<Path>>(path: P) -> Result<Vec<R>, TableError> {
    let rows = load_tsv(path)?;
    try_records(&rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_tsv_splits_fields() {
        let rows = parse_tsv("A\t.-\r\n\nB\t-...\n");
        assert_eq!(
            rows,
            vec![
                vec!["A".to_string(), ".-".to_string()],
                vec!["B".to_string(), "-...".to_string()]
            ]
        );
    }

    #[test]
    fn parse_tsv_empty() {
        assert!(parse_tsv("").is_empty());
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_tsv("/nonexistent/table.tsv").unwrap_err();
        assert!(matches!(err, TableError::Io(_)));
    }
}
