//! Domain codes and the name registry
//!
//! Every code here hangs off [`ALPHABET`](crate::core::ALPHABET), directly or
//! through an intermediate pivot (binary Braille, Unicode arrows).

pub mod amino;
pub mod braille;
pub mod morse;
pub mod semaphore;
pub mod time_zone;

pub use amino::{AMINO_ABBR, CODON};
pub use braille::{BRAILLE_BINARY, BRAILLE_BINARY_EXTENDED, BRAILLE_DOTS, BRAILLE_UNICODE};
pub use morse::MORSE;
pub use semaphore::{
    DIRECTION_ARROWS, DIRECTION_CARTESIAN, DIRECTION_COMPASS, DIRECTION_NUMPAD,
    DIRECTION_PHONEPAD, DIRECTION_ROGUE,
};
pub use time_zone::TIME_ZONE;

use crate::core::{ALPHABET, Code};

/// Registered codes by lookup name, with a one-line description
pub static REGISTRY: &[(&str, &dyn Code, &str)] = &[
    ("alphabet", &ALPHABET, "plain characters"),
    ("morse", &MORSE, "International Morse code"),
    ("braille", &BRAILLE_BINARY, "6-dot Braille as a bit pattern"),
    (
        "braille-extended",
        &BRAILLE_BINARY_EXTENDED,
        "8-dot Braille as a bit pattern",
    ),
    ("braille-unicode", &BRAILLE_UNICODE, "Unicode Braille cells"),
    ("braille-dots", &BRAILLE_DOTS, "raised dots as 0/1 digits"),
    ("amino", &AMINO_ABBR, "three-letter amino acid abbreviations"),
    ("codon", &CODON, "DNA codons"),
    ("time-zone", &TIME_ZONE, "military time zone UTC offsets"),
    ("arrows", &DIRECTION_ARROWS, "Unicode arrows"),
    ("numpad", &DIRECTION_NUMPAD, "numeric keypad directions"),
    ("phonepad", &DIRECTION_PHONEPAD, "phone keypad directions"),
    ("rogue", &DIRECTION_ROGUE, "rogue/vi movement keys"),
    ("compass", &DIRECTION_COMPASS, "compass points"),
    ("cartesian", &DIRECTION_CARTESIAN, "unit vectors"),
];

/// Look up a registry entry, returning its canonical name and code
///
/// The binary Braille variants share a graph node name, so callers that
/// need to tell them apart keep the registry name.
#[must_use]
pub fn entry(name: &str) -> Option<(&'static str, &'static dyn Code)> {
    REGISTRY
        .iter()
        .find(|(key, _, _)| key.eq_ignore_ascii_case(name))
        .map(|&(key, code, _)| (key, code))
}

/// Look up a code by registry name
#[must_use]
pub fn by_name(name: &str) -> Option<&'static dyn Code> {
    entry(name).map(|(_, code)| code)
}

/// Registered names, in registry order
#[must_use]
pub fn code_names() -> Vec<&'static str> {
    REGISTRY.iter().map(|&(name, _, _)| name).collect()
}

/// Direction notations usable with the semaphore text codec
#[must_use]
pub fn is_direction(code: &'static dyn Code) -> bool {
    crate::core::ancestors(code)
        .iter()
        .any(|c| c.name() == DIRECTION_ARROWS.name())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CodeConverter;

    #[test]
    fn names_are_unique() {
        let mut names = code_names();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), REGISTRY.len());
    }

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(by_name("Morse").map(|c| c.name()), Some("morse"));
        assert!(by_name("semaphore").is_none());
    }

    #[test]
    fn every_code_reaches_alphabet() {
        for &(name, code, _) in REGISTRY {
            let conv = CodeConverter::new(code, &ALPHABET);
            assert!(conv.is_ok(), "{name} does not reach the alphabet");
        }
    }

    #[test]
    fn direction_codes() {
        assert!(is_direction(&DIRECTION_ROGUE));
        assert!(is_direction(&DIRECTION_ARROWS));
        assert!(!is_direction(&MORSE));
    }
}
