//! Flag semaphore
//!
//! Directions are an 8-way compass enumeration. The canonical order starts at
//! "right" and turns towards "up": E, NE, N, NW, W, SW, S, SE. Unicode arrows
//! are the pivot notation; numpad, phone keypad, rogue keys, compass points
//! and unit vectors are children of it.
//!
//! A semaphore sign is an unordered pair of directions. The stateful
//! encoder/decoder handles the numeric shift: `#` switches to digits (A-I
//! read as 1-9, K as 0) and J switches back to letters.
//!
//! # Examples
//! ```
//! use puzzle_codes::codes::{DIRECTION_NUMPAD, DIRECTION_ROGUE};
//! use puzzle_codes::codes::semaphore::{SemaphoreDecoder, SemaphoreEncoder};
//! use puzzle_codes::text::{StringDecoder, StringEncoder};
//!
//! let mut enc = StringEncoder::new(SemaphoreEncoder::new(&DIRECTION_ROGUE).unwrap());
//! assert_eq!(enc.encode("hello").unwrap(), "HB JU UB UB HY");
//!
//! let mut dec = StringDecoder::new(SemaphoreDecoder::new(&DIRECTION_NUMPAD).unwrap());
//! assert_eq!(
//!     dec.decode("62 19 21 23 / 34 29 61 21 48 41 47 64 29").unwrap(),
//!     "FLAG SEMAPHORE"
//! );
//! ```

use crate::core::{ALPHABET, Code, CodeConverter, CodeError, SequenceKind, Symbol};
use crate::tables::{self, Record, TableError};
use crate::text::{WordDecoder, WordEncoder};
use std::sync::LazyLock;

/// One of the eight semaphore directions, in canonical order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    East,
    NorthEast,
    North,
    NorthWest,
    West,
    SouthWest,
    South,
    SouthEast,
}

impl Direction {
    pub const ALL: [Self; 8] = [
        Self::East,
        Self::NorthEast,
        Self::North,
        Self::NorthWest,
        Self::West,
        Self::SouthWest,
        Self::South,
        Self::SouthEast,
    ];

    const ARROWS: [char; 8] = [
        '\u{2192}', '\u{2197}', '\u{2191}', '\u{2196}', '\u{2190}', '\u{2199}', '\u{2193}',
        '\u{2198}',
    ];

    const COMPASS: [&'static str; 8] = ["E", "NE", "N", "NW", "W", "SW", "S", "SE"];

    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[must_use]
    pub const fn arrow(self) -> char {
        Self::ARROWS[self as usize]
    }

    #[must_use]
    pub fn from_arrow(c: char) -> Option<Self> {
        Self::ARROWS
            .iter()
            .position(|&a| a == c)
            .map(|i| Self::ALL[i])
    }

    #[must_use]
    pub fn from_compass(s: &str) -> Option<Self> {
        Self::COMPASS
            .iter()
            .position(|&name| name.eq_ignore_ascii_case(s))
            .map(|i| Self::ALL[i])
    }
}

/// Unicode arrows; the pivot for every direction notation
#[derive(Debug, Clone, Copy, Default)]
pub struct DirectionArrows;

pub static DIRECTION_ARROWS: DirectionArrows = DirectionArrows;

impl Code for DirectionArrows {
    fn name(&self) -> &'static str {
        "arrows"
    }

    fn parent(&self) -> &'static dyn Code {
        &ALPHABET
    }

    fn to_parent(&self, symbol: Symbol) -> Result<Symbol, CodeError> {
        self.validate(&symbol)?;
        Ok(symbol)
    }

    fn from_parent(&self, symbol: Symbol) -> Result<Symbol, CodeError> {
        self.validate(&symbol)?;
        Ok(symbol)
    }

    fn validate(&self, symbol: &Symbol) -> Result<(), CodeError> {
        match symbol.as_char().and_then(Direction::from_arrow) {
            Some(_) => Ok(()),
            None => Err(CodeError::invalid(self.name(), symbol)),
        }
    }

    fn sequence_kind(&self) -> SequenceKind {
        SequenceKind::Concat
    }

    fn parse_token(&self, token: &str) -> Result<Symbol, CodeError> {
        ALPHABET.parse_token(token)
    }
}

/// How a notation spells the eight directions, in canonical order
#[derive(Debug, Clone, Copy)]
enum Notation {
    Chars([char; 8]),
    Words([&'static str; 8]),
    Vectors([(i8, i8); 8]),
}

/// A direction notation other than the arrows
#[derive(Debug, Clone, Copy)]
pub struct DirectionNotation {
    name: &'static str,
    notation: Notation,
}

/// Numeric keypad digits (8 is up)
pub static DIRECTION_NUMPAD: DirectionNotation = DirectionNotation {
    name: "numpad",
    notation: Notation::Chars(['6', '9', '8', '7', '4', '1', '2', '3']),
};

/// Phone keypad digits (2 is up)
pub static DIRECTION_PHONEPAD: DirectionNotation = DirectionNotation {
    name: "phonepad",
    notation: Notation::Chars(['6', '3', '2', '1', '4', '7', '8', '9']),
};

/// Rogue/vi movement keys
pub static DIRECTION_ROGUE: DirectionNotation = DirectionNotation {
    name: "rogue",
    notation: Notation::Chars(['L', 'U', 'K', 'Y', 'H', 'B', 'J', 'N']),
};

/// Compass abbreviations
pub static DIRECTION_COMPASS: DirectionNotation = DirectionNotation {
    name: "compass",
    notation: Notation::Words(Direction::COMPASS),
};

/// Unit vectors, y pointing up
pub static DIRECTION_CARTESIAN: DirectionNotation = DirectionNotation {
    name: "cartesian",
    notation: Notation::Vectors([
        (1, 0),
        (1, 1),
        (0, 1),
        (-1, 1),
        (-1, 0),
        (-1, -1),
        (0, -1),
        (1, -1),
    ]),
};

impl DirectionNotation {
    fn symbol(&self, direction: Direction) -> Symbol {
        let i = direction.index();
        match self.notation {
            Notation::Chars(chars) => Symbol::Char(chars[i]),
            Notation::Words(words) => Symbol::from(words[i]),
            Notation::Vectors(vectors) => Symbol::Vector(vectors[i].0, vectors[i].1),
        }
    }

    fn direction(&self, symbol: &Symbol) -> Option<Direction> {
        let position = match (self.notation, symbol) {
            (Notation::Chars(chars), Symbol::Char(c)) => {
                let c = c.to_ascii_uppercase();
                chars.iter().position(|&x| x == c)
            }
            (Notation::Words(words), Symbol::Text(s)) => {
                words.iter().position(|w| w.eq_ignore_ascii_case(s))
            }
            (Notation::Vectors(vectors), &Symbol::Vector(x, y)) => {
                vectors.iter().position(|&v| v == (x, y))
            }
            _ => None,
        };
        position.map(|i| Direction::ALL[i])
    }
}

fn parse_vector(token: &str) -> Option<(i8, i8)> {
    let inner = token.trim().trim_start_matches('(').trim_end_matches(')');
    let (x, y) = inner.split_once(',')?;
    Some((x.trim().parse().ok()?, y.trim().parse().ok()?))
}

impl Code for DirectionNotation {
    fn name(&self) -> &'static str {
        self.name
    }

    fn parent(&self) -> &'static dyn Code {
        &DIRECTION_ARROWS
    }

    fn to_parent(&self, symbol: Symbol) -> Result<Symbol, CodeError> {
        self.direction(&symbol)
            .map(|d| Symbol::Char(d.arrow()))
            .ok_or_else(|| CodeError::invalid(self.name, &symbol))
    }

    fn from_parent(&self, symbol: Symbol) -> Result<Symbol, CodeError> {
        symbol
            .as_char()
            .and_then(Direction::from_arrow)
            .map(|d| self.symbol(d))
            .ok_or_else(|| CodeError::invalid(self.name, &symbol))
    }

    fn sequence_kind(&self) -> SequenceKind {
        match self.notation {
            Notation::Chars(_) => SequenceKind::Concat,
            Notation::Words(_) | Notation::Vectors(_) => SequenceKind::List,
        }
    }

    fn parse_token(&self, token: &str) -> Result<Symbol, CodeError> {
        match self.notation {
            Notation::Chars(_) => ALPHABET.parse_token(token),
            Notation::Words(_) => Ok(Symbol::Text(token.to_ascii_uppercase())),
            Notation::Vectors(_) => parse_vector(token)
                .map(|(x, y)| Symbol::Vector(x, y))
                .ok_or_else(|| CodeError::invalid(self.name, token)),
        }
    }
}

/// A semaphore sign
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sign {
    Letter(char),
    /// Numeric shift-in (`#`)
    Numerals,
    /// Annul the previous sign
    Cancel,
}

/// One row of the semaphore table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SemaphoreEntry {
    pub sign: Sign,
    /// Flag directions, sorted by arrow code point
    pub flags: [Direction; 2],
}

impl Record for SemaphoreEntry {
    const FIELDS: &'static [&'static str] = &["sign", "first", "second"];

    fn from_fields(fields: &[&str]) -> Result<Self, TableError> {
        let sign = match fields[0] {
            "#" => Sign::Numerals,
            "CANCEL" => Sign::Cancel,
            s => Sign::Letter(tables::parse_char("sign", s)?),
        };
        let direction = |field: &'static str, value: &str| {
            Direction::from_compass(value).ok_or_else(|| TableError::BadField {
                field,
                value: value.to_string(),
            })
        };
        let mut flags = [direction("first", fields[1])?, direction("second", fields[2])?];
        if flags[0] == flags[1] {
            return Err(TableError::BadField {
                field: "second",
                value: fields[2].to_string(),
            });
        }
        flags.sort_by_key(|d| d.arrow());
        Ok(Self { sign, flags })
    }
}

static SIGNS: LazyLock<Vec<SemaphoreEntry>> =
    LazyLock::new(|| tables::records(tables::SEMAPHORE));

fn flags_for(sign: Sign) -> Option<[Direction; 2]> {
    SIGNS.iter().find(|e| e.sign == sign).map(|e| e.flags)
}

fn sign_for(mut flags: [Direction; 2]) -> Option<Sign> {
    flags.sort_by_key(|d| d.arrow());
    SIGNS.iter().find(|e| e.flags == flags).map(|e| e.sign)
}

/// Separator between the two flags of a token in list-style notations
const FLAG_SEP: char = '+';

/// Encodes letters and digits as semaphore tokens in a chosen notation
///
/// Holds the numeric-mode flag; one instance per message. The flag is
/// cleared by [`WordEncoder::reset`], which `StringEncoder` calls at the
/// start of every string.
#[derive(Debug, Clone)]
pub struct SemaphoreEncoder {
    to_notation: CodeConverter,
    numeric: bool,
}

impl SemaphoreEncoder {
    /// # Errors
    /// Returns `CodeError::NoCommonAncestor` if `notation` is not a direction code.
    pub fn new(notation: &'static dyn Code) -> Result<Self, CodeError> {
        Ok(Self {
            to_notation: CodeConverter::new(&DIRECTION_ARROWS, notation)?,
            numeric: false,
        })
    }

    fn token(&self, sign: Sign) -> Result<String, CodeError> {
        let flags = flags_for(sign).ok_or_else(|| CodeError::invalid("semaphore", sign_text(sign)))?;
        let parts = self
            .to_notation
            .convert_each(flags.iter().map(|d| Symbol::Char(d.arrow())))?;
        let sep = match self.to_notation.to_code().sequence_kind() {
            SequenceKind::Concat => String::new(),
            SequenceKind::List => FLAG_SEP.to_string(),
        };
        Ok(parts
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(&sep))
    }
}

fn sign_text(sign: Sign) -> String {
    match sign {
        Sign::Letter(c) => c.to_string(),
        Sign::Numerals => "#".to_string(),
        Sign::Cancel => "CANCEL".to_string(),
    }
}

impl WordEncoder for SemaphoreEncoder {
    fn reset(&mut self) {
        self.numeric = false;
    }

    fn encode_word(&mut self, word: &[char]) -> Result<Vec<String>, CodeError> {
        let mut tokens = Vec::with_capacity(word.len());
        for &c in word {
            if let Some(digit) = c.to_digit(10) {
                if !self.numeric {
                    tokens.push(self.token(Sign::Numerals)?);
                    self.numeric = true;
                }
                let letter = if digit == 0 {
                    'K'
                } else {
                    char::from(b'A' + digit as u8 - 1)
                };
                tokens.push(self.token(Sign::Letter(letter))?);
            } else {
                if self.numeric {
                    tokens.push(self.token(Sign::Letter('J'))?);
                    self.numeric = false;
                }
                tokens.push(self.token(Sign::Letter(c.to_ascii_uppercase()))?);
            }
        }
        Ok(tokens)
    }
}

/// Decodes semaphore tokens in a chosen notation back to letters and digits
///
/// Shift-in and shift-out tokens emit nothing; a cancel token removes the
/// previously decoded character of the current word.
#[derive(Debug, Clone)]
pub struct SemaphoreDecoder {
    from_notation: CodeConverter,
    numeric: bool,
}

impl SemaphoreDecoder {
    /// # Errors
    /// Returns `CodeError::NoCommonAncestor` if `notation` is not a direction code.
    pub fn new(notation: &'static dyn Code) -> Result<Self, CodeError> {
        Ok(Self {
            from_notation: CodeConverter::new(notation, &DIRECTION_ARROWS)?,
            numeric: false,
        })
    }

    fn flags(&self, token: &str) -> Result<[Direction; 2], CodeError> {
        let notation = self.from_notation.from_code();
        let parts: Vec<Symbol> = match notation.sequence_kind() {
            SequenceKind::Concat => token.chars().map(Symbol::Char).collect(),
            SequenceKind::List => token
                .split(FLAG_SEP)
                .map(|part| notation.parse_token(part))
                .collect::<Result<_, _>>()?,
        };
        let arrows = self.from_notation.convert_each(parts)?;
        match arrows.as_slice() {
            [a, b] => a
                .as_char()
                .and_then(Direction::from_arrow)
                .zip(b.as_char().and_then(Direction::from_arrow))
                .map(|(a, b)| [a, b])
                .ok_or_else(|| CodeError::invalid("semaphore", token)),
            _ => Err(CodeError::invalid("semaphore", token)),
        }
    }
}

impl WordDecoder for SemaphoreDecoder {
    fn reset(&mut self) {
        self.numeric = false;
    }

    fn decode_word(&mut self, tokens: &[&str]) -> Result<String, CodeError> {
        let mut out = String::new();
        for &token in tokens {
            let sign =
                sign_for(self.flags(token)?).ok_or_else(|| CodeError::invalid("semaphore", token))?;
            match sign {
                Sign::Numerals => self.numeric = true,
                Sign::Cancel => {
                    out.pop();
                }
                Sign::Letter('J') if self.numeric => self.numeric = false,
                Sign::Letter('K') if self.numeric => out.push('0'),
                Sign::Letter(c @ 'A'..='I') if self.numeric => {
                    out.push(char::from(c as u8 - b'A' + b'1'));
                }
                Sign::Letter(_) if self.numeric => {
                    return Err(CodeError::invalid("semaphore", token));
                }
                Sign::Letter(c) => out.push(c),
            }
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::{StringDecoder, StringEncoder};

    #[test]
    fn table_has_every_letter() {
        for c in 'A'..='Z' {
            assert!(flags_for(Sign::Letter(c)).is_some(), "missing {c}");
        }
        assert!(flags_for(Sign::Numerals).is_some());
        assert!(flags_for(Sign::Cancel).is_some());
    }

    #[test]
    fn signs_are_distinct() {
        let mut seen = std::collections::HashSet::new();
        for entry in SIGNS.iter() {
            assert!(seen.insert(entry.flags), "duplicate flags for {:?}", entry.sign);
        }
    }

    #[test]
    fn notations_round_trip_through_arrows() {
        let notations: [&'static dyn Code; 5] = [
            &DIRECTION_NUMPAD,
            &DIRECTION_PHONEPAD,
            &DIRECTION_ROGUE,
            &DIRECTION_COMPASS,
            &DIRECTION_CARTESIAN,
        ];
        for notation in notations {
            let there = CodeConverter::new(&DIRECTION_ARROWS, notation).unwrap();
            let back = CodeConverter::new(notation, &DIRECTION_ARROWS).unwrap();
            for d in Direction::ALL {
                let arrow = Symbol::Char(d.arrow());
                let spelled = there.convert_symbol(arrow.clone()).unwrap();
                assert_eq!(back.convert_symbol(spelled).unwrap(), arrow);
            }
        }
    }

    #[test]
    fn notations_agree_on_up() {
        let to_numpad = CodeConverter::new(&DIRECTION_CARTESIAN, &DIRECTION_NUMPAD).unwrap();
        assert_eq!(
            to_numpad.convert_symbol(Symbol::Vector(0, 1)).unwrap(),
            Symbol::Char('8')
        );
        let to_phone = CodeConverter::new(&DIRECTION_COMPASS, &DIRECTION_PHONEPAD).unwrap();
        assert_eq!(
            to_phone.convert_symbol(Symbol::from("N")).unwrap(),
            Symbol::Char('2')
        );
    }

    #[test]
    fn numeric_mode_shifts_in_and_out() {
        let mut enc = StringEncoder::new(SemaphoreEncoder::new(&DIRECTION_COMPASS).unwrap());
        let encoded = enc.encode("a10b").unwrap();
        let tokens: Vec<&str> = encoded.split(' ').collect();
        // A, #, 1 (as A), 0 (as K), J, B
        assert_eq!(tokens.len(), 6);
        assert_eq!(tokens[1], enc_token(Sign::Numerals));
        assert_eq!(tokens[2], tokens[0]);
        assert_eq!(tokens[3], enc_token(Sign::Letter('K')));
        assert_eq!(tokens[4], enc_token(Sign::Letter('J')));

        let mut dec = StringDecoder::new(SemaphoreDecoder::new(&DIRECTION_COMPASS).unwrap());
        assert_eq!(dec.decode(&encoded).unwrap(), "A10B");
    }

    fn enc_token(sign: Sign) -> String {
        SemaphoreEncoder::new(&DIRECTION_COMPASS)
            .unwrap()
            .token(sign)
            .unwrap()
    }

    #[test]
    fn numeric_mode_spans_words_and_resets_per_call() {
        let mut enc = StringEncoder::new(SemaphoreEncoder::new(&DIRECTION_NUMPAD).unwrap());
        let mut dec = StringDecoder::new(SemaphoreDecoder::new(&DIRECTION_NUMPAD).unwrap());

        let encoded = enc.encode("R2 D2").unwrap();
        assert_eq!(dec.decode(&encoded).unwrap(), "R2 D2");

        // A second call starts in letter mode again
        let again = enc.encode("9").unwrap();
        assert_eq!(again.split(' ').count(), 2);
        assert_eq!(dec.decode(&again).unwrap(), "9");
        assert_eq!(dec.decode("21").unwrap(), "A");
    }

    #[test]
    fn every_letter_and_digit_round_trips_in_every_notation() {
        let notations: [&'static dyn Code; 6] = [
            &DIRECTION_ARROWS,
            &DIRECTION_NUMPAD,
            &DIRECTION_PHONEPAD,
            &DIRECTION_ROGUE,
            &DIRECTION_COMPASS,
            &DIRECTION_CARTESIAN,
        ];
        // J and K sit next to each shift
        let text = "ABCDEFGHIJKLMNOPQRSTUVWXYZ 0123456789 J1J K0K";
        for notation in notations {
            let mut enc = StringEncoder::new(SemaphoreEncoder::new(notation).unwrap());
            let mut dec = StringDecoder::new(SemaphoreDecoder::new(notation).unwrap());
            let encoded = enc.encode(text).unwrap();
            assert_eq!(dec.decode(&encoded).unwrap(), text, "{}", notation.name());
        }
    }

    #[test]
    fn cartesian_tokens_use_plus() {
        let mut enc = StringEncoder::new(SemaphoreEncoder::new(&DIRECTION_CARTESIAN).unwrap());
        // D is N + S
        assert_eq!(enc.encode("d").unwrap(), "(0,1)+(0,-1)");
        let mut dec = StringDecoder::new(SemaphoreDecoder::new(&DIRECTION_CARTESIAN).unwrap());
        assert_eq!(dec.decode("(0,-1)+(0,1)").unwrap(), "D");
    }

    #[test]
    fn cancel_removes_previous_letter() {
        let cancel = enc_token(Sign::Cancel);
        let a = enc_token(Sign::Letter('A'));
        let b = enc_token(Sign::Letter('B'));
        let mut dec = StringDecoder::new(SemaphoreDecoder::new(&DIRECTION_COMPASS).unwrap());
        assert_eq!(dec.decode(&format!("{a} {b} {cancel}")).unwrap(), "A");
    }

    #[test]
    fn unknown_combinations_fail() {
        let mut dec = StringDecoder::new(SemaphoreDecoder::new(&DIRECTION_NUMPAD).unwrap());
        // same flag twice
        assert!(matches!(
            dec.decode("66"),
            Err(CodeError::UndecodableSymbol(_))
        ));
        // not a numpad direction
        assert!(dec.decode("65").is_err());
        // three flags
        assert!(dec.decode("621").is_err());
        // L has no digit value in numeric mode
        let shift = "98";
        assert!(dec.decode(&format!("{shift} 19")).is_err());
    }

    #[test]
    fn unencodable_character() {
        let mut enc = StringEncoder::new(SemaphoreEncoder::new(&DIRECTION_NUMPAD).unwrap());
        assert!(matches!(
            enc.encode("\u{e9}"),
            Err(CodeError::UnencodableSymbol(_))
        ));
    }
}
