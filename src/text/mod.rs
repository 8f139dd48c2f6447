//! Whole-text encoding and decoding
//!
//! [`StringEncoder`] splits text into words with a preprocessor, encodes each
//! word with a [`WordEncoder`], and joins tokens with `sep` and words with
//! `sep + wsep + sep`. [`StringDecoder`] reverses this. The word-level traits
//! are the seam for stateful codecs such as the semaphore numeric shift;
//! a plain [`CodeConverter`] implements both.

mod decoder;
mod encoder;

pub use decoder::StringDecoder;
pub use encoder::StringEncoder;

use crate::core::{CodeConverter, CodeError, Symbol};

/// Default separator between the tokens of one word
pub const DEFAULT_SEP: &str = " ";

/// Default word separator; words are joined by `sep + wsep + sep`
pub const DEFAULT_WSEP: &str = "/";

/// Classifies one input character: `Some` keeps it (possibly transformed)
/// inside a word, `None` makes it a word boundary
pub type Preprocessor = fn(char) -> Option<char>;

fn uppercase(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}

/// Letters and digits, uppercased; everything else separates words
#[must_use]
pub fn alphanumeric(c: char) -> Option<char> {
    c.is_alphanumeric().then(|| uppercase(c))
}

/// Any non-whitespace character, uppercased
#[must_use]
pub fn non_whitespace(c: char) -> Option<char> {
    (!c.is_whitespace()).then(|| uppercase(c))
}

/// Encodes one word's characters into tokens
pub trait WordEncoder {
    /// Clear any state carried between words; called at the start of each text
    fn reset(&mut self) {}

    /// # Errors
    /// Returns `CodeError::InvalidSymbol` for a character with no encoding.
    fn encode_word(&mut self, word: &[char]) -> Result<Vec<String>, CodeError>;
}

/// Decodes one word's tokens into characters
pub trait WordDecoder {
    /// Clear any state carried between words; called at the start of each text
    fn reset(&mut self) {}

    /// # Errors
    /// Returns `CodeError::InvalidSymbol` for a token with no matching symbol.
    fn decode_word(&mut self, tokens: &[&str]) -> Result<String, CodeError>;
}

impl WordEncoder for CodeConverter {
    fn encode_word(&mut self, word: &[char]) -> Result<Vec<String>, CodeError> {
        word.iter()
            .map(|&c| {
                self.convert_symbol(Symbol::Char(c))
                    .map(|symbol| symbol.to_string())
            })
            .collect()
    }
}

impl WordDecoder for CodeConverter {
    fn decode_word(&mut self, tokens: &[&str]) -> Result<String, CodeError> {
        let from = self.from_code();
        tokens
            .iter()
            .map(|token| {
                let symbol = from.parse_token(token)?;
                self.convert_symbol(symbol).map(|s| s.to_string())
            })
            .collect()
    }
}

impl<E: WordEncoder + ?Sized> WordEncoder for Box<E> {
    fn reset(&mut self) {
        (**self).reset();
    }

    fn encode_word(&mut self, word: &[char]) -> Result<Vec<String>, CodeError> {
        (**self).encode_word(word)
    }
}

impl<D: WordDecoder + ?Sized> WordDecoder for Box<D> {
    fn reset(&mut self) {
        (**self).reset();
    }

    fn decode_word(&mut self, tokens: &[&str]) -> Result<String, CodeError> {
        (**self).decode_word(tokens)
    }
}

/// A stateless encoder from a per-character function
///
/// # Examples
/// ```
/// use puzzle_codes::core::CodeError;
/// use puzzle_codes::text::{FnEncoder, StringEncoder};
///
/// let a1z26 = FnEncoder(|c: char| match c {
///     'A'..='Z' => Ok((c as u32 - 'A' as u32 + 1).to_string()),
///     _ => Err(CodeError::UnencodableSymbol(c.to_string())),
/// });
/// let mut enc = StringEncoder::new(a1z26).with_sep("-");
/// assert_eq!(enc.encode("Big cat").unwrap(), "2-9-7-/-3-1-20");
/// ```
#[derive(Debug, Clone)]
pub struct FnEncoder<F>(pub F);

impl<F> WordEncoder for FnEncoder<F>
where
    F: FnMut(char) -> Result<String, CodeError>,
{
    fn encode_word(&mut self, word: &[char]) -> Result<Vec<String>, CodeError> {
        word.iter().map(|&c| (self.0)(c)).collect()
    }
}

/// A stateless decoder from a per-token function
#[derive(Debug, Clone)]
pub struct FnDecoder<F>(pub F);

impl<F> WordDecoder for FnDecoder<F>
where
    F: FnMut(&str) -> Result<String, CodeError>,
{
    fn decode_word(&mut self, tokens: &[&str]) -> Result<String, CodeError> {
        tokens.iter().map(|&token| (self.0)(token)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preprocessors() {
        assert_eq!(alphanumeric('q'), Some('Q'));
        assert_eq!(alphanumeric('7'), Some('7'));
        assert_eq!(alphanumeric('?'), None);
        assert_eq!(non_whitespace('?'), Some('?'));
        assert_eq!(non_whitespace('\t'), None);
        // no single-char uppercase: kept as is
        assert_eq!(alphanumeric('\u{df}'), Some('\u{df}'));
    }

    #[test]
    fn boxed_codecs_forward() {
        let lower = FnDecoder(|t: &str| Ok::<_, CodeError>(t.to_lowercase()));
        let mut boxed: Box<dyn WordDecoder> = Box::new(lower);
        assert_eq!(boxed.decode_word(&["A", "B"]).unwrap(), "ab");
    }
}
