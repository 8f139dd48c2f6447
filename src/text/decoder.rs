use super::{DEFAULT_SEP, DEFAULT_WSEP, WordDecoder};
use crate::core::{ALPHABET, Code, CodeConverter, CodeError};

/// Decodes whole strings of separated tokens
#[derive(Debug, Clone)]
pub struct StringDecoder<D> {
    decoder: D,
    sep: String,
    wsep: String,
}

impl StringDecoder<CodeConverter> {
    /// Decoder from `code` back into plain text
    ///
    /// # Errors
    /// Returns `CodeError::NoCommonAncestor` if `code` does not reach the alphabet.
    pub fn for_code(code: &'static dyn Code) -> Result<Self, CodeError> {
        Ok(Self::new(CodeConverter::new(code, &ALPHABET)?))
    }
}

impl<D: WordDecoder> StringDecoder<D> {
    #[must_use]
    pub fn new(decoder: D) -> Self {
        Self {
            decoder,
            sep: DEFAULT_SEP.to_string(),
            wsep: DEFAULT_WSEP.to_string(),
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

    /// Tokens of one word segment; padding and empty tokens are dropped
    fn tokens<'a>(&self, segment: &'a str) -> Vec<&'a str> {
        let tokens: Vec<&str> = if self.sep.is_empty() {
            segment
                .char_indices()
                .map(|(i, c)| &segment[i..i + c.len_utf8()])
                .collect()
        } else {
            segment.split(self.sep.as_str()).collect()
        };
        tokens
            .into_iter()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .collect()
    }

    /// Decode `text`, resetting the word decoder first
    ///
    /// Words are joined with a single space. Segments without tokens are
    /// skipped, so empty words collapse: `"... / / ---"` reads as `"S O"`.
    ///
    /// # Errors
    /// Returns `CodeError::UndecodableSymbol` for a token with no matching symbol.
    pub fn decode(&mut self, text: &str) -> Result<String, CodeError> {
        self.decoder.reset();
        let mut words = Vec::new();
        let segments: Vec<&str> = if self.wsep.is_empty() {
            vec![text]
        } else {
            text.split(self.wsep.as_str()).collect()
        };
        for segment in segments {
            let tokens = self.tokens(segment);
            if tokens.is_empty() {
                continue;
            }
            let word = self
                .decoder
                .decode_word(&tokens)
                .map_err(CodeError::into_undecodable)?;
            words.push(word);
        }
        Ok(words.join(" "))
    }
}
