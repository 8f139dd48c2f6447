//! International Morse code
//!
//! Symbols are dot/hyphen strings such as `"-.-."`; the parent is the plain
//! alphabet (letters, digits, and a fixed punctuation set).

use crate::core::{ALPHABET, Code, CodeError, Symbol};
use crate::tables::{self, Record, TableError, parse_char};
use rustc_hash::FxHashMap;
use std::sync::LazyLock;

/// One row of the Morse table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MorseEntry {
    pub character: char,
    pub code: String,
}

impl Record for MorseEntry {
    const FIELDS: &'static [&'static str] = &["character", "code"];

    fn from_fields(fields: &[&str]) -> Result<Self, TableError> {
        let code = fields[1];
        if code.is_empty() || !code.chars().all(|c| c == '.' || c == '-') {
            return Err(TableError::BadField {
                field: "code",
                value: code.to_string(),
            });
        }
        Ok(Self {
            character: parse_char("character", fields[0])?,
            code: code.to_string(),
        })
    }
}

struct MorseTable {
    to_code: FxHashMap<char, String>,
    to_char: FxHashMap<String, char>,
}

static TABLE: LazyLock<MorseTable> = LazyLock::new(|| {
    let entries: Vec<MorseEntry> = tables::records(tables::MORSE);
    let mut to_code = FxHashMap::default();
    let mut to_char = FxHashMap::default();
    for entry in entries {
        // '×' shares its code with 'X'; the letter wins on decode
        to_char.entry(entry.code.clone()).or_insert(entry.character);
        to_code.entry(entry.character).or_insert(entry.code);
    }
    MorseTable { to_code, to_char }
});

/// Replace typographic dashes (en dash, minus sign, ...) with hyphens
#[must_use]
pub fn dash_to_hyphen(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            '\u{2010}'..='\u{2015}' | '\u{2043}' | '\u{2212}' | '\u{ff0d}' => '-',
            other => other,
        })
        .collect()
}

/// Morse code over the plain alphabet
///
/// # Examples
/// ```
/// use puzzle_codes::codes::MORSE;
/// use puzzle_codes::text::{StringDecoder, StringEncoder};
///
/// let mut enc = StringEncoder::for_code(&MORSE).unwrap();
/// assert_eq!(enc.encode("hello").unwrap(), ".... . .-.. .-.. ---");
///
/// let mut dec = StringDecoder::for_code(&MORSE).unwrap();
/// assert_eq!(dec.decode("-- --- .-. ... . / -.-. --- -.. .").unwrap(), "MORSE CODE");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Morse;

pub static MORSE: Morse = Morse;

impl Code for Morse {
    fn name(&self) -> &'static str {
        "morse"
    }

    fn parent(&self) -> &'static dyn Code {
        &ALPHABET
    }

    fn to_parent(&self, symbol: Symbol) -> Result<Symbol, CodeError> {
        symbol
            .as_str()
            .and_then(|code| TABLE.to_char.get(code))
            .map(|&c| Symbol::Char(c))
            .ok_or_else(|| CodeError::invalid(self.name(), &symbol))
    }

    fn from_parent(&self, symbol: Symbol) -> Result<Symbol, CodeError> {
        symbol
            .as_char()
            .and_then(|c| c.to_uppercase().next())
            .and_then(|c| TABLE.to_code.get(&c))
            .map(|code| Symbol::Text(code.clone()))
            .ok_or_else(|| CodeError::invalid(self.name(), &symbol))
    }

    fn parse_token(&self, token: &str) -> Result<Symbol, CodeError> {
        Ok(Symbol::Text(dash_to_hyphen(token)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CodeConverter;

    #[test]
    fn letters_round_trip_through_alphabet() {
        let encode = CodeConverter::new(&ALPHABET, &MORSE).unwrap();
        let decode = CodeConverter::new(&MORSE, &ALPHABET).unwrap();
        for c in ('A'..='Z').chain('0'..='9').chain(".,:?'-/()\"=+@".chars()) {
            let code = encode.convert_symbol(Symbol::Char(c)).unwrap();
            assert_eq!(decode.convert_symbol(code).unwrap(), Symbol::Char(c));
        }
    }

    #[test]
    fn lowercase_encodes_like_uppercase() {
        assert_eq!(
            MORSE.from_parent(Symbol::Char('s')).unwrap(),
            Symbol::from("...")
        );
    }

    #[test]
    fn times_sign_encodes_but_decodes_as_x() {
        assert_eq!(
            MORSE.from_parent(Symbol::Char('\u{d7}')).unwrap(),
            Symbol::from("-..-")
        );
        assert_eq!(
            MORSE.to_parent(Symbol::from("-..-")).unwrap(),
            Symbol::Char('X')
        );
    }

    #[test]
    fn unknown_code_is_invalid() {
        assert!(MORSE.to_parent(Symbol::from("........")).is_err());
        assert!(MORSE.from_parent(Symbol::Char('#')).is_err());
    }

    #[test]
    fn dashes_normalized() {
        assert_eq!(dash_to_hyphen("\u{2013}.\u{2212}"), "-.-");
        assert_eq!(
            MORSE.parse_token("\u{2014}\u{2014}").unwrap(),
            Symbol::from("--")
        );
    }
}
