//! Chemical elements and element-symbol spellings

use crate::tables::{self, Record, TableError, parse_field};
use rustc_hash::FxHashSet;
use std::fmt;
use std::sync::LazyLock;

/// One element of the periodic table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChemicalElement {
    pub number: u8,
    pub symbol: String,
    pub name: String,
}

impl Record for ChemicalElement {
    const FIELDS: &'static [&'static str] = &["number", "symbol", "name"];

    fn from_fields(fields: &[&str]) -> Result<Self, TableError> {
        Ok(Self {
            number: parse_field("number", fields[0])?,
            symbol: fields[1].to_string(),
            name: fields[2].to_string(),
        })
    }
}

impl fmt::Display for ChemicalElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.symbol)
    }
}

/// All elements, by atomic number
pub static ELEMENTS: LazyLock<Vec<ChemicalElement>> =
    LazyLock::new(|| tables::records(tables::ELEMENTS));

static SHORT_SYMBOLS: LazyLock<FxHashSet<String>> = LazyLock::new(|| {
    ELEMENTS
        .iter()
        .filter(|e| e.symbol.chars().count() <= 2)
        .map(|e| e.symbol.clone())
        .collect()
});

/// Title-case a one- or two-letter fragment: `"TH"` becomes `"Th"`
fn title(fragment: &[char]) -> String {
    fragment
        .iter()
        .enumerate()
        .flat_map(|(i, c)| {
            if i == 0 {
                c.to_uppercase().collect::<Vec<_>>()
            } else {
                c.to_lowercase().collect()
            }
        })
        .collect()
}

/// Count the ways to spell the letters of `s` as element symbols
///
/// Non-letters are ignored. Returns the count and one spelling, or `None`
/// when there is none. When both a one- and a two-letter symbol end at the
/// same position, the witness takes the two-letter one.
///
/// # Examples
/// ```
/// use puzzle_codes::words::parse_as_element_symbols;
///
/// let (count, spelling) = parse_as_element_symbols("the south");
/// assert_eq!(count, 1);
/// assert_eq!(spelling.unwrap(), ["Th", "Es", "O", "U", "Th"]);
/// ```
#[must_use]
pub fn parse_as_element_symbols(s: &str) -> (u64, Option<Vec<String>>) {
    let letters: Vec<char> = s.chars().filter(|c| c.is_alphabetic()).collect();

    // ways/witness for the prefix ending here and one letter earlier
    let (mut count1, mut path1): (u64, Option<Vec<String>>) = (1, Some(Vec::new()));
    let (mut count2, mut path2): (u64, Option<Vec<String>>) = (0, None);

    for i in 0..letters.len() {
        let one = title(&letters[i..=i]);
        let two = (i > 0).then(|| title(&letters[i - 1..=i]));

        let one_works = path1.is_some() && SHORT_SYMBOLS.contains(&one);
        let two_works = path2.is_some() && two.as_ref().is_some_and(|t| SHORT_SYMBOLS.contains(t));

        let path = match (two_works, one_works) {
            (true, _) => path2.clone().zip(two).map(|(mut p, t)| {
                p.push(t);
                p
            }),
            (false, true) => path1.clone().map(|mut p| {
                p.push(one);
                p
            }),
            (false, false) => None,
        };
        let count = (if one_works { count1 } else { 0 })
            .saturating_add(if two_works { count2 } else { 0 });

        count2 = count1;
        count1 = count;
        path2 = std::mem::replace(&mut path1, path);
    }

    (count1, path1)
}
