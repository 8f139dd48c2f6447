//! Table file checking command
//!
//! Loads a tab-separated file against the schema of one of the built-in
//! tables, so a replacement table can be checked before it is used.

use crate::codes::amino::{AminoAcid, CodonEntry};
use crate::codes::morse::MorseEntry;
use crate::codes::semaphore::SemaphoreEntry;
use crate::tables::{self, Record, TableError, loader};
use crate::words::ChemicalElement;
use std::path::Path;
use tracing::debug;

/// Result of checking a table file
#[derive(Debug)]
pub struct TableCheck {
    pub table: &'static str,
    pub rows: usize,
    /// Row count of the compiled-in table of the same name
    pub embedded_rows: usize,
}

fn count_records<R: Record>(path: &Path) -> Result<usize, TableError> {
    loader::load_records::<R, _>(path).map(|records| records.len())
}

/// Check that every row of `path` fits the schema of table `table`
///
/// # Errors
///
/// Returns an error if the table name is unknown, the file cannot be read,
/// or a row does not match the schema.
pub fn check_table_file(table: &str, path: &Path) -> Result<TableCheck, String> {
    let names = tables::table_names();
    let Some(&name) = names.iter().find(|&&n| n == table) else {
        return Err(format!(
            "Unknown table '{table}' (known: {})",
            names.join(", ")
        ));
    };

    let rows = match name {
        "morse" => count_records::<MorseEntry>(path),
        "semaphore" => count_records::<SemaphoreEntry>(path),
        "amino" | "amino_extra" => count_records::<AminoAcid>(path),
        "genetic_code" => count_records::<CodonEntry>(path),
        "elements" => count_records::<ChemicalElement>(path),
        _ => loader::load_tsv(path).map(|rows| rows.len()),
    }
    .map_err(|e| format!("{}: {e}", path.display()))?;

    let embedded_rows = tables::rows(name).map_err(|e| e.to_string())?.len();
    debug!(table = name, rows, embedded_rows, "checked table file");

    Ok(TableCheck {
        table: name,
        rows,
        embedded_rows,
    })
}
