//! Reference tables for the domain codes
//!
//! Rows are compiled in from tab-separated data files. Each table is an
//! ordered sequence of fixed-width rows of string fields; typed views are
//! built with [`Record`].

mod embedded;
pub mod loader;
mod record;

pub use embedded::{
    AMINO, AMINO_COUNT, AMINO_EXTRA, AMINO_EXTRA_COUNT, ELEMENTS, ELEMENTS_COUNT, GENETIC_CODE,
    GENETIC_CODE_COUNT, MORSE, MORSE_COUNT, SEMAPHORE, SEMAPHORE_COUNT, TABLES,
};
pub use record::{Record, TableError, index_by, parse_char, parse_field, records, try_records};

/// A table of rows, each a fixed-width list of fields
pub type Rows = &'static [&'static [&'static str]];

/// Look up an embedded table by name
///
/// # Errors
/// Returns `TableError::UnknownTable` if no table has that name.
///
/// # Examples
/// ```
/// use puzzle_codes::tables::rows;
///
/// let morse = rows("morse").unwrap();
/// assert_eq!(morse[0], ["A", ".-"]);
/// ```
pub fn rows(name: &str) -> Result<Rows, TableError> {
    TABLES
        .iter()
        .find(|(table, _)| *table == name)
        .map(|&(_, rows)| rows)
        .ok_or_else(|| TableError::UnknownTable(name.to_string()))
}

/// Names of all embedded tables
#[must_use]
pub fn table_names() -> Vec<&'static str> {
    TABLES.iter().map(|&(name, _)| name).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_match_consts() {
        assert_eq!(MORSE.len(), MORSE_COUNT);
        assert_eq!(SEMAPHORE.len(), SEMAPHORE_COUNT);
        assert_eq!(AMINO.len(), AMINO_COUNT);
        assert_eq!(AMINO_EXTRA.len(), AMINO_EXTRA_COUNT);
        assert_eq!(GENETIC_CODE.len(), GENETIC_CODE_COUNT);
        assert_eq!(ELEMENTS.len(), ELEMENTS_COUNT);
    }

    #[test]
    fn expected_counts() {
        assert_eq!(MORSE_COUNT, 50);
        assert_eq!(SEMAPHORE_COUNT, 28);
        assert_eq!(AMINO_COUNT, 20);
        assert_eq!(GENETIC_CODE_COUNT, 64, "Expected every codon");
        assert_eq!(ELEMENTS_COUNT, 118);
    }

    #[test]
    fn rows_are_fixed_width() {
        for &(name, rows) in TABLES {
            let width = rows[0].len();
            for row in rows {
                assert_eq!(row.len(), width, "Ragged row {row:?} in table '{name}'");
            }
        }
    }

    #[test]
    fn rows_by_name() {
        assert_eq!(rows("genetic_code").unwrap()[0], ["TTT", "F"]);
        assert!(matches!(
            rows("subway"),
            Err(TableError::UnknownTable(name)) if name == "subway"
        ));
        assert_eq!(table_names().len(), TABLES.len());
    }
}
