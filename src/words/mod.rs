//! Word utilities for puzzle answers
//!
//! Normalization to plain uppercase alphanumerics, substitution-cipher and
//! sub-anagram checks, and spelling words with chemical element symbols.

pub mod elements;

pub use elements::{ChemicalElement, ELEMENTS, parse_as_element_symbols};

use rustc_hash::FxHashMap;
use unicode_normalization::UnicodeNormalization;

/// Reduce text to uppercase ASCII letters, digits and single spaces
///
/// Accents are stripped, `&` reads as `AND`, and `/`, `_` and `-` separate
/// words. Characters with no ASCII decomposition are dropped.
///
/// # Examples
/// ```
/// use puzzle_codes::words::normalize_alnum;
///
/// assert_eq!(normalize_alnum("Café au-lait & crème"), "CAFE AU LAIT AND CREME");
/// ```
#[must_use]
pub fn normalize_alnum(s: &str) -> String {
    let mut spaced = String::with_capacity(s.len());
    for c in s.nfkd() {
        match c {
            '&' => spaced.push_str(" AND "),
            '/' | '_' | '-' => spaced.push(' '),
            c if c.is_ascii_alphanumeric() => spaced.push(c.to_ascii_uppercase()),
            c if c.is_whitespace() => spaced.push(' '),
            _ => {}
        }
    }
    spaced.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Whether one word maps onto the other by a one-to-one letter substitution
///
/// # Examples
/// ```
/// use puzzle_codes::words::is_cipher;
///
/// assert!(is_cipher("oceanfront", "asburypark"));
/// assert!(!is_cipher("oceanfront", "nineteenth"));
/// ```
#[must_use]
pub fn is_cipher(w1: &str, w2: &str) -> bool {
    if w1.chars().count() != w2.chars().count() {
        return false;
    }
    let mut forward = FxHashMap::default();
    let mut backward = FxHashMap::default();
    w1.chars().zip(w2.chars()).all(|(a, b)| {
        *forward.entry(a).or_insert(b) == b && *backward.entry(b).or_insert(a) == a
    })
}

/// Whether `w1` can be spelled with a subset of the letters of `w2`
///
/// # Examples
/// ```
/// use puzzle_codes::words::is_sub_anagram;
///
/// assert!(is_sub_anagram("inches", "cohesion"));
/// assert!(!is_sub_anagram("cheese", "cohesion"));
/// ```
#[must_use]
pub fn is_sub_anagram(w1: &str, w2: &str) -> bool {
    let mut available: FxHashMap<char, usize> = FxHashMap::default();
    for c in w2.chars() {
        *available.entry(c).or_default() += 1;
    }
    w1.chars().all(|c| match available.get_mut(&c) {
        Some(n) if *n > 0 => {
            *n -= 1;
            true
        }
        _ => false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_separators_and_symbols() {
        assert_eq!(normalize_alnum("  Rock/n_Roll!! "), "ROCK N ROLL");
        assert_eq!(normalize_alnum("AT&T"), "AT AND T");
        assert_eq!(normalize_alnum("Pokémon\tX--Y"), "POKEMON X Y");
        assert_eq!(normalize_alnum("?!"), "");
    }

    #[test]
    fn normalize_compatibility_forms() {
        // fullwidth letters and the fi ligature decompose
        assert_eq!(normalize_alnum("\u{ff21}\u{ff22} \u{fb01}ne"), "AB FINE");
    }

    #[test]
    fn cipher_is_one_to_one() {
        assert!(is_cipher("abc", "xyz"));
        assert!(is_cipher("", ""));
        assert!(!is_cipher("ab", "xx"));
        assert!(!is_cipher("aa", "xy"));
        assert!(!is_cipher("abc", "xy"));
    }

    #[test]
    fn sub_anagram_counts_letters() {
        assert!(is_sub_anagram("", "abc"));
        assert!(is_sub_anagram("noise", "cohesion"));
        assert!(!is_sub_anagram("noon", "cohesion"));
    }
}
