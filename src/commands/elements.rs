//! Element-symbol spelling command

use crate::words::{ELEMENTS, parse_as_element_symbols};

/// One word spelled with element symbols
#[derive(Debug)]
pub struct ElementSpelling {
    pub word: String,
    pub count: u64,
    pub symbols: Option<Vec<String>>,
    /// Atomic numbers of `symbols`, in order
    pub numbers: Vec<u8>,
}

/// Spell each word with element symbols
#[must_use]
pub fn spell_with_elements(words: &[String]) -> Vec<ElementSpelling> {
    words
        .iter()
        .map(|word| {
            let (count, symbols) = parse_as_element_symbols(word);
            let numbers = symbols
                .iter()
                .flatten()
                .filter_map(|symbol| {
                    ELEMENTS
                        .iter()
                        .find(|e| e.symbol == *symbol)
                        .map(|e| e.number)
                })
                .collect();
            ElementSpelling {
                word: word.clone(),
                count,
                symbols,
                numbers,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spells_with_numbers() {
        let results = spell_with_elements(&["bacon".to_string(), "jazz".to_string()]);
        assert_eq!(results.len(), 2);

        let bacon = &results[0];
        assert!(bacon.count >= 1);
        let symbols = bacon.symbols.as_ref().unwrap();
        assert_eq!(symbols.concat().to_lowercase(), "bacon");
        assert_eq!(bacon.numbers.len(), symbols.len());

        let jazz = &results[1];
        assert_eq!(jazz.count, 0);
        assert!(jazz.symbols.is_none());
        assert!(jazz.numbers.is_empty());
    }

    #[test]
    fn numbers_follow_symbols() {
        let results = spell_with_elements(&["the south".to_string()]);
        // Th Es O U Th
        assert_eq!(results[0].numbers, [90, 99, 8, 92, 90]);
    }
}
