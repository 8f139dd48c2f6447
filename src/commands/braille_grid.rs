//! Braille grid reading command
//!
//! Reads a dot grid typed as text, splits it into cells and lists the
//! letters each cell could be.

use crate::codes::braille::{cell_mask, divide_grid, possible_letters};

/// One cell of the grid with its candidate letters
#[derive(Debug)]
pub struct GridCell {
    pub dots: [Option<bool>; 6],
    pub letters: Vec<char>,
}

/// Result of reading a grid
#[derive(Debug)]
pub struct GridResult {
    pub rows: usize,
    pub columns: usize,
    pub cells: Vec<GridCell>,
}

impl GridResult {
    /// The letters of fully determined cells, `?` elsewhere
    #[must_use]
    pub fn reading(&self) -> String {
        self.cells
            .iter()
            .map(|cell| match cell.letters.as_slice() {
                [only] => *only,
                _ => '?',
            })
            .collect()
    }
}

fn parse_dot(c: char) -> Option<Option<bool>> {
    match c {
        '1' | '#' | 'x' | 'X' | '*' | 'o' | 'O' | '\u{25cf}' => Some(Some(true)),
        '0' | '.' | '-' | '_' | '\u{25cb}' => Some(Some(false)),
        '?' => Some(None),
        _ => None,
    }
}

/// Parse grid text: one row per line (or per `/`), whitespace ignored
///
/// Raised dots are `1 # x * o`, flat dots `0 . - _`, unknown dots `?`.
///
/// # Errors
///
/// Returns an error on an unrecognized character.
pub fn parse_grid(text: &str) -> Result<Vec<Vec<Option<bool>>>, String> {
    text.split(['\n', '/'])
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| {
            line.chars()
                .filter(|c| !c.is_whitespace())
                .map(|c| parse_dot(c).ok_or_else(|| format!("Unrecognized dot '{c}'")))
                .collect::<Result<Vec<_>, String>>()
        })
        .collect()
}

/// Read a Braille grid into candidate letters per cell
///
/// # Errors
///
/// Returns an error if the text does not parse or the grid is not made of
/// whole 3x2 cells.
pub fn read_braille_grid(text: &str) -> Result<GridResult, String> {
    let grid = parse_grid(text)?;
    let cells = divide_grid(&grid).map_err(|e| format!("Bad grid shape: {e}"))?;

    let cells = cells
        .into_iter()
        .map(|dots| {
            let (code, mask) = cell_mask(&dots);
            GridCell {
                dots,
                letters: possible_letters(code, mask),
            }
        })
        .collect();

    Ok(GridResult {
        rows: grid.len(),
        columns: grid.first().map_or(0, Vec::len),
        cells,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_known_cells() {
        let result = read_braille_grid("10 01\n00 10\n00 10").unwrap();
        assert_eq!(result.rows, 3);
        assert_eq!(result.columns, 4);
        assert_eq!(result.reading(), "AS");
    }

    #[test]
    fn unknown_dots_widen_candidates() {
        let result = read_braille_grid("1?/#./..").unwrap();
        assert_eq!(result.cells.len(), 1);
        // dots 1 and 2 raised, dot 4 unknown
        assert_eq!(result.cells[0].letters, ['B', 'F']);
        assert_eq!(result.reading(), "?");
    }

    #[test]
    fn rejects_bad_input() {
        assert!(read_braille_grid("1z\n00\n00").is_err());
        assert!(read_braille_grid("10\n00").is_err());
        assert!(parse_grid("").unwrap().is_empty());
    }
}
