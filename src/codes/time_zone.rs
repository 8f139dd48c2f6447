//! Military time zone letters
//!
//! A-I are UTC+1 to +9, K-M are +10 to +12, N-Y are -1 to -12 and Z is UTC.
//! J ("local time") has no offset.

use crate::core::{ALPHABET, Code, CodeError, Symbol};

/// UTC offsets in whole hours over zone letters
#[derive(Debug, Clone, Copy, Default)]
pub struct TimeZone;

pub static TIME_ZONE: TimeZone = TimeZone;

fn offset_of(letter: char) -> Option<i64> {
    let n = i64::from(u32::from(letter.to_ascii_uppercase())) - 0x40;
    match n {
        1..=9 => Some(n),
        11..=13 => Some(n - 1),
        14..=25 => Some(13 - n),
        26 => Some(0),
        _ => None,
    }
}

fn letter_of(offset: i64) -> Option<char> {
    let code = match offset {
        -12..=-1 => 0x4d - offset,
        0 => i64::from(b'Z'),
        1..=9 => 0x40 + offset,
        10..=12 => 0x41 + offset,
        _ => return None,
    };
    u8::try_from(code).ok().map(char::from)
}

impl Code for TimeZone {
    fn name(&self) -> &'static str {
        "time-zone"
    }

    fn parent(&self) -> &'static dyn Code {
        &ALPHABET
    }

    fn to_parent(&self, symbol: Symbol) -> Result<Symbol, CodeError> {
        symbol
            .as_int()
            .and_then(letter_of)
            .map(Symbol::Char)
            .ok_or_else(|| CodeError::invalid(self.name(), &symbol))
    }

    fn from_parent(&self, symbol: Symbol) -> Result<Symbol, CodeError> {
        symbol
            .as_char()
            .and_then(offset_of)
            .map(Symbol::Int)
            .ok_or_else(|| CodeError::invalid(self.name(), &symbol))
    }

    fn validate(&self, symbol: &Symbol) -> Result<(), CodeError> {
        match symbol.as_int() {
            Some(-12..=12) => Ok(()),
            _ => Err(CodeError::invalid(self.name(), symbol)),
        }
    }

    fn parse_token(&self, token: &str) -> Result<Symbol, CodeError> {
        token
            .trim_start_matches('+')
            .parse()
            .map(Symbol::Int)
            .map_err(|_| CodeError::invalid(self.name(), token))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CodeConverter;

    #[test]
    fn every_letter_but_j_has_a_zone() {
        for c in 'A'..='Z' {
            assert_eq!(offset_of(c).is_none(), c == 'J', "letter {c}");
        }
    }

    #[test]
    fn known_zones() {
        assert_eq!(offset_of('A'), Some(1));
        assert_eq!(offset_of('K'), Some(10));
        assert_eq!(offset_of('m'), Some(12));
        assert_eq!(offset_of('N'), Some(-1));
        assert_eq!(offset_of('Y'), Some(-12));
        assert_eq!(offset_of('Z'), Some(0));
    }

    #[test]
    fn offsets_round_trip() {
        for offset in -12..=12 {
            let letter = letter_of(offset).unwrap();
            assert_eq!(offset_of(letter), Some(offset));
        }
        assert_eq!(letter_of(13), None);
    }

    #[test]
    fn converts_through_alphabet() {
        let decode = CodeConverter::new(&TIME_ZONE, &ALPHABET).unwrap();
        assert_eq!(
            decode.convert_symbol(Symbol::Int(-5)).unwrap(),
            Symbol::Char('R')
        );
        assert!(decode.convert_symbol(Symbol::Int(14)).is_err());

        let encode = CodeConverter::new(&ALPHABET, &TIME_ZONE).unwrap();
        assert!(encode.convert_symbol(Symbol::Char('J')).is_err());
        assert_eq!(TIME_ZONE.parse_token("+9").unwrap(), Symbol::Int(9));
    }
}
