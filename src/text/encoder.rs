use super::{DEFAULT_SEP, DEFAULT_WSEP, Preprocessor, WordEncoder, alphanumeric};
use crate::core::{ALPHABET, Code, CodeConverter, CodeError};

/// Encodes whole strings word by word
#[derive(Debug, Clone)]
pub struct StringEncoder<E> {
    encoder: E,
    sep: String,
    wsep: String,
    preprocess: Preprocessor,
}

impl StringEncoder<CodeConverter> {
    /// Encoder from plain text into `code`
    ///
    /// # Errors
    /// Returns `CodeError::NoCommonAncestor` if `code` does not reach the alphabet.
    pub fn for_code(code: &'static dyn Code) -> Result<Self, CodeError> {
        Ok(Self::new(CodeConverter::new(&ALPHABET, code)?))
    }
}

impl<E: WordEncoder> StringEncoder<E> {
    #[must_use]
    pub fn new(encoder: E) -> Self {
        Self {
            encoder,
            sep: DEFAULT_SEP.to_string(),
            wsep: DEFAULT_WSEP.to_string(),
            preprocess: alphanumeric,
        }
    }

    #[must_use]
    pub fn with_sep(mut self, sep: impl Into<String>) -> Self {
        self.sep = sep.into();
        self
    }

    #[must_use]
    pub fn with_wsep(mut self, wsep: impl Into<String>) -> Self {
        self.wsep = wsep.into();
        self
    }

    #[must_use]
    pub fn with_preprocessor(mut self, preprocess: Preprocessor) -> Self {
        self.preprocess = preprocess;
        self
    }

    /// Split text into words of preprocessed characters
    ///
    /// Runs of boundary characters collapse into one break and never produce
    /// an empty word.
    #[must_use]
    pub fn words(&self, text: &str) -> Vec<Vec<char>> {
        let mut words = Vec::new();
        let mut current = Vec::new();
        for c in text.chars() {
            match (self.preprocess)(c) {
                Some(kept) => current.push(kept),
                None if !current.is_empty() => words.push(std::mem::take(&mut current)),
                None => {}
            }
        }
        if !current.is_empty() {
            words.push(current);
        }
        words
    }

    /// Encode `text`, resetting the word encoder first
    ///
    /// # Errors
    /// Returns `CodeError::UnencodableSymbol` for a kept character with no encoding.
    pub fn encode(&mut self, text: &str) -> Result<String, CodeError> {
        self.encoder.reset();
        let words = self.words(text);
        let mut encoded = Vec::with_capacity(words.len());
        for word in &words {
            let tokens = self
                .encoder
                .encode_word(word)
                .map_err(CodeError::into_unencodable)?;
            encoded.push(tokens.join(&self.sep));
        }
        let word_sep = format!("{}{}{}", self.sep, self.wsep, self.sep);
        Ok(encoded.join(&word_sep))
    }
}
