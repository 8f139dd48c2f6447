//! Braille in several representations
//!
//! The eight dots of extended Braille are numbered
//! ```text
//! 1 4
//! 2 5
//! 3 6
//! 7 8
//! ```
//! Traditional Braille uses only the first six. In binary form bit `i` is
//! dot `i + 1`, so the letter D (dots 1, 4, 5) is `0b011001`, or 25.
//!
//! Every representation pivots through binary: unicode cells
//! (`U+2800 + binary`) and dot lists are children of the binary code, and
//! binary's parent is the plain alphabet (letters A-Z).

use crate::core::{ALPHABET, Code, CodeConverter, CodeError, SequenceKind, Symbol};

/// Binary patterns of the letters A-Z
pub const LETTER_PATTERNS: [u8; 26] = [
    0x01, 0x03, 0x09, 0x19, 0x11, 0x0b, 0x1b, 0x13, 0x0a, 0x1a, // A-J
    0x05, 0x07, 0x0d, 0x1d, 0x15, 0x0f, 0x1f, 0x17, 0x0e, 0x1e, // K-T
    0x25, 0x27, 0x3a, 0x2d, 0x3d, 0x35, // U-Z
];

const UNICODE_BASE: u32 = 0x2800;

/// Binary Braille: an integer whose bit `i` is dot `i + 1`
///
/// The 6-dot and 8-dot variants are the same conversion node; they differ
/// only in which values they accept.
#[derive(Debug, Clone, Copy)]
pub struct BrailleBinary {
    pub extended: bool,
}

/// 6-dot binary Braille, 0-63
pub static BRAILLE_BINARY: BrailleBinary = BrailleBinary { extended: false };

/// 8-dot binary Braille, 0-255
pub static BRAILLE_BINARY_EXTENDED: BrailleBinary = BrailleBinary { extended: true };

impl BrailleBinary {
    const fn limit(self) -> i64 {
        if self.extended { 0x100 } else { 0x40 }
    }
}

impl Code for BrailleBinary {
    fn name(&self) -> &'static str {
        "braille-binary"
    }

    fn parent(&self) -> &'static dyn Code {
        &ALPHABET
    }

    fn to_parent(&self, symbol: Symbol) -> Result<Symbol, CodeError> {
        symbol
            .as_int()
            .and_then(|n| LETTER_PATTERNS.iter().position(|&p| i64::from(p) == n))
            .map(|i| Symbol::Char(char::from(b'A' + i as u8)))
            .ok_or_else(|| CodeError::invalid(self.name(), &symbol))
    }

    fn from_parent(&self, symbol: Symbol) -> Result<Symbol, CodeError> {
        symbol
            .as_char()
            .map(|c| c.to_ascii_uppercase())
            .filter(char::is_ascii_uppercase)
            .map(|c| Symbol::Int(i64::from(LETTER_PATTERNS[(c as u8 - b'A') as usize])))
            .ok_or_else(|| CodeError::invalid(self.name(), &symbol))
    }

    fn validate(&self, symbol: &Symbol) -> Result<(), CodeError> {
        match symbol.as_int() {
            Some(n) if (0..self.limit()).contains(&n) => Ok(()),
            _ => Err(CodeError::invalid(self.name(), symbol)),
        }
    }

    fn parse_token(&self, token: &str) -> Result<Symbol, CodeError> {
        let parsed = match token.strip_prefix("0b") {
            Some(bits) => i64::from_str_radix(bits, 2),
            None => token.parse(),
        };
        parsed
            .map(Symbol::Int)
            .map_err(|_| CodeError::invalid(self.name(), token))
    }
}

/// Unicode Braille cells, U+2800 to U+28FF
#[derive(Debug, Clone, Copy, Default)]
pub struct BrailleUnicode;

pub static BRAILLE_UNICODE: BrailleUnicode = BrailleUnicode;

impl Code for BrailleUnicode {
    fn name(&self) -> &'static str {
        "braille-unicode"
    }

    fn parent(&self) -> &'static dyn Code {
        &BRAILLE_BINARY_EXTENDED
    }

    fn to_parent(&self, symbol: Symbol) -> Result<Symbol, CodeError> {
        symbol
            .as_char()
            .map(u32::from)
            .filter(|&c| (UNICODE_BASE..UNICODE_BASE + 0x100).contains(&c))
            .map(|c| Symbol::Int(i64::from(c - UNICODE_BASE)))
            .ok_or_else(|| CodeError::invalid(self.name(), &symbol))
    }

    fn from_parent(&self, symbol: Symbol) -> Result<Symbol, CodeError> {
        symbol
            .as_int()
            .filter(|n| (0..0x100).contains(n))
            .and_then(|n| char::from_u32(UNICODE_BASE + n as u32))
            .map(Symbol::Char)
            .ok_or_else(|| CodeError::invalid(self.name(), &symbol))
    }

    fn sequence_kind(&self) -> SequenceKind {
        SequenceKind::Concat
    }

    fn parse_token(&self, token: &str) -> Result<Symbol, CodeError> {
        ALPHABET.parse_token(token)
    }
}

/// Dot lists: raised/flat flags in dot-number order, 6 or 8 long
#[derive(Debug, Clone, Copy, Default)]
pub struct BrailleDots;

pub static BRAILLE_DOTS: BrailleDots = BrailleDots;

impl Code for BrailleDots {
    fn name(&self) -> &'static str {
        "braille-dots"
    }

    fn parent(&self) -> &'static dyn Code {
        &BRAILLE_BINARY_EXTENDED
    }

    fn to_parent(&self, symbol: Symbol) -> Result<Symbol, CodeError> {
        match &symbol {
            Symbol::Dots(dots) if dots.len() == 6 || dots.len() == 8 => Ok(Symbol::Int(
                dots.iter()
                    .enumerate()
                    .filter(|&(_, &raised)| raised)
                    .map(|(i, _)| 1i64 << i)
                    .sum(),
            )),
            _ => Err(CodeError::invalid(self.name(), &symbol)),
        }
    }

    /// Patterns using dots 7 or 8 come back as 8-long lists; all others as 6.
    fn from_parent(&self, symbol: Symbol) -> Result<Symbol, CodeError> {
        match symbol.as_int() {
            Some(n) if (0..0x100).contains(&n) => {
                let len = if n < 0x40 { 6 } else { 8 };
                Ok(Symbol::Dots((0..len).map(|i| (n >> i) & 1 == 1).collect()))
            }
            _ => Err(CodeError::invalid(self.name(), &symbol)),
        }
    }

    fn parse_token(&self, token: &str) -> Result<Symbol, CodeError> {
        token
            .chars()
            .map(|c| match c {
                '1' => Some(true),
                '0' => Some(false),
                _ => None,
            })
            .collect::<Option<Vec<bool>>>()
            .map(Symbol::Dots)
            .ok_or_else(|| CodeError::invalid(self.name(), token))
    }
}

/// A converter between two Braille representations through the chosen binary pivot
///
/// With `extended == false` any pattern using dots 7 or 8 is rejected.
///
/// # Errors
/// Returns `CodeError::NoCommonAncestor` if either code is not reachable from binary.
///
/// # Examples
/// ```
/// use puzzle_codes::codes::braille::{self, BRAILLE_BINARY, BRAILLE_UNICODE};
/// use puzzle_codes::core::{ALPHABET, Symbol};
///
/// let to_letter = braille::converter(&BRAILLE_BINARY, &ALPHABET, false).unwrap();
/// assert_eq!(to_letter.convert_symbol(Symbol::Int(0b011001)).unwrap(), Symbol::Char('D'));
///
/// let to_binary = braille::converter(&BRAILLE_UNICODE, &BRAILLE_BINARY, true).unwrap();
/// assert_eq!(to_binary.convert_symbol(Symbol::Char('\u{2819}')).unwrap(), Symbol::Int(25));
/// ```
pub fn converter(
    from: &'static dyn Code,
    to: &'static dyn Code,
    extended: bool,
) -> Result<CodeConverter, CodeError> {
    let pivot: &'static dyn Code = if extended {
        &BRAILLE_BINARY_EXTENDED
    } else {
        &BRAILLE_BINARY
    };
    CodeConverter::new(from, pivot)?.then(CodeConverter::new(pivot, to)?)
}

/// Binary pattern and known-dot mask for a partially read 6-dot cell
///
/// `Some(true)` is a raised dot, `Some(false)` a flat one, `None` unknown.
/// Unknown dots count as flat in the pattern and are cleared in the mask.
#[must_use]
pub fn cell_mask(cell: &[Option<bool>; 6]) -> (u8, u8) {
    cell.iter()
        .enumerate()
        .fold((0, 0), |(code, mask), (i, dot)| match dot {
            Some(true) => (code | 1 << i, mask | 1 << i),
            Some(false) => (code, mask | 1 << i),
            None => (code, mask),
        })
}

/// Letters consistent with a partially known cell
///
/// `code` holds the dots known to be raised; `mask` the dots that are known.
///
/// # Examples
/// ```
/// use puzzle_codes::codes::braille::possible_letters;
///
/// // dots 2, 3, 4 raised, dot 1 unknown
/// assert_eq!(possible_letters(0b001110, 0b111110), vec!['P', 'S']);
/// ```
#[must_use]
pub fn possible_letters(code: u8, mask: u8) -> Vec<char> {
    LETTER_PATTERNS
        .iter()
        .enumerate()
        .filter(|&(_, &pattern)| pattern & mask == code & mask)
        .map(|(i, _)| char::from(b'A' + i as u8))
        .collect()
}

/// Split a row-major dot grid into 3x2 cells, left to right then top to bottom
///
/// Each cell lists its dots in dot-number order: left column top to bottom,
/// then right column.
///
/// # Errors
/// Returns `CodeError::InvalidSymbol` if the grid is ragged or its height is
/// not a multiple of 3 or its width not a multiple of 2.
pub fn divide_grid(grid: &[Vec<Option<bool>>]) -> Result<Vec<[Option<bool>; 6]>, CodeError> {
    let width = grid.first().map_or(0, Vec::len);
    if grid.len() % 3 != 0 || width % 2 != 0 || grid.iter().any(|row| row.len() != width) {
        return Err(CodeError::invalid(
            "braille-grid",
            format!("{}x{}", grid.len(), width),
        ));
    }

    let mut cells = Vec::with_capacity(grid.len() / 3 * width / 2);
    for y in (0..grid.len()).step_by(3) {
        for x in (0..width).step_by(2) {
            let mut cell = [None; 6];
            for i in 0..2 {
                for j in 0..3 {
                    cell[i * 3 + j] = grid[y + j][x + i];
                }
            }
            cells.push(cell);
        }
    }
    Ok(cells)
}
