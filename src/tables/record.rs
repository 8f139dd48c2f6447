//! Typed records over table rows
//!
//! A record type declares its schema once; loading yields a list of records,
//! and lookup maps are built once afterwards with [`index_by`].

use rustc_hash::FxHashMap;
use std::hash::Hash;
use std::str::FromStr;
use thiserror::Error;

/// Error type for table loading
#[derive(Debug, Error)]
pub enum TableError {
    #[error("row {row}: expected {expected} fields, got {found}")]
    WrongWidth {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("bad value {value:?} for field '{field}'")]
    BadField { field: &'static str, value: String },

    #[error("no table named '{0}'")]
    UnknownTable(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// A typed view of one table row
pub trait Record: Sized {
    /// Field names, in column order
    const FIELDS: &'static [&'static str];

    /// Build a record from exactly `FIELDS.len()` fields
    ///
    /// # Errors
    /// Returns `TableError::BadField` if a field does not parse.
    fn from_fields(fields: &[&str]) -> Result<Self, TableError>;
}

/// Parse a field with `FromStr`
///
/// # Errors
/// Returns `TableError::BadField` if the value does not parse.
pub fn parse_field<T: FromStr>(field: &'static str, value: &str) -> Result<T, TableError> {
    value.parse().map_err(|_| TableError::BadField {
        field,
        value: value.to_string(),
    })
}

/// Parse a field holding exactly one character
///
/// # Errors
/// Returns `TableError::BadField` unless the value is a single character.
pub fn parse_char(field: &'static str, value: &str) -> Result<char, TableError> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(TableError::BadField {
            field,
            value: value.to_string(),
        }),
    }
}

fn record_from_row<R: Record, S: AsRef<str>>(index: usize, row: &[S]) -> Result<R, TableError> {
    if row.len() != R::FIELDS.len() {
        return Err(TableError::WrongWidth {
            row: index,
            expected: R::FIELDS.len(),
            found: row.len(),
        });
    }
    let fields: Vec<&str> = row.iter().map(AsRef::as_ref).collect();
    R::from_fields(&fields)
}

/// Convert every row, failing on the first bad one
///
/// # Errors
/// Returns the first width or field error.
pub fn try_records<R, Row, S>(rows: &[Row]) -> Result<Vec<R>, TableError>
where
    R: Record,
    Row: AsRef<[S]>,
    S: AsRef<str>,
{
    rows.iter()
        .enumerate()
        .map(|(i, row)| record_from_row(i, row.as_ref()))
        .collect()
}

/// Convert rows into records, skipping any invalid entries
#[must_use]
pub fn records<R, Row, S>(rows: &[Row]) -> Vec<R>
where
    R: Record,
    Row: AsRef<[S]>,
    S: AsRef<str>,
{
    rows.iter()
        .enumerate()
        .filter_map(|(i, row)| match record_from_row(i, row.as_ref()) {
            Ok(record) => Some(record),
            Err(e) => {
                tracing::warn!(error = %e, "skipping table row");
                None
            }
        })
        .collect()
}

/// Build a lookup map from one field to its record
///
/// Later records never replace earlier ones with the same key.
pub fn index_by<'a, R, K, F>(items: &'a [R], key: F) -> FxHashMap<K, &'a R>
where
    K: Eq + Hash,
    F: Fn(&'a R) -> K,
{
    let mut map = FxHashMap::default();
    for item in items {
        map.entry(key(item)).or_insert(item);
    }
    map
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Pair {
        letter: char,
        number: u32,
    }

    impl Record for Pair {
        const FIELDS: &'static [&'static str] = &["letter", "number"];

        fn from_fields(fields: &[&str]) -> Result<Self, TableError> {
            Ok(Self {
                letter: parse_char("letter", fields[0])?,
                number: parse_field("number", fields[1])?,
            })
        }
    }

    #[test]
    fn try_records_converts_valid_rows() {
        let rows: &[&[&str]] = &[&["A", "1"], &["B", "2"]];
        let pairs: Vec<Pair> = try_records(rows).unwrap();
        assert_eq!(
            pairs,
            vec![
                Pair {
                    letter: 'A',
                    number: 1
                },
                Pair {
                    letter: 'B',
                    number: 2
                }
            ]
        );
    }

    #[test]
    fn try_records_reports_width() {
        let rows: &[&[&str]] = &[&["A", "1"], &["B"]];
        let err = try_records::<Pair, _, _>(rows).unwrap_err();
        assert!(matches!(
            err,
            TableError::WrongWidth {
                row: 1,
                expected: 2,
                found: 1
            }
        ));
    }

    #[test]
    fn records_skips_invalid() {
        let rows = vec![
            vec!["A".to_string(), "1".to_string()],
            vec!["BB".to_string(), "2".to_string()],
            vec!["C".to_string(), "x".to_string()],
            vec!["D".to_string(), "4".to_string()],
        ];
        let pairs: Vec<Pair> = records(&rows);
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[1].letter, 'D');
    }

    #[test]
    fn index_keeps_first_duplicate() {
        let items = [
            Pair {
                letter: 'X',
                number: 1,
            },
            Pair {
                letter: 'X',
                number: 2,
            },
        ];
        let by_letter = index_by(&items, |p| p.letter);
        assert_eq!(by_letter[&'X'].number, 1);
    }
}
