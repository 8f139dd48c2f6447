//! Scheme selection shared by the text commands
//!
//! A scheme is either a registered code used through a plain converter, or
//! the stateful semaphore codec over one of the direction notations.

use crate::codes::semaphore::{SemaphoreDecoder, SemaphoreEncoder};
use crate::codes::{self, DIRECTION_ARROWS};
use crate::core::{ALPHABET, Code, CodeConverter, CodeError};
use crate::text::{
    self, DEFAULT_SEP, DEFAULT_WSEP, Preprocessor, StringDecoder, StringEncoder, WordDecoder,
    WordEncoder,
};
use std::fmt;

const SEMAPHORE_PREFIX: &str = "semaphore";

/// A text codec chosen by name
#[derive(Debug, Clone, Copy)]
pub enum Scheme {
    /// Any registered code, converted letter by letter through the alphabet
    Code(&'static str, &'static dyn Code),
    /// Semaphore signs with numeric shift, spelled in a direction notation
    Semaphore(&'static str, &'static dyn Code),
}

/// Encode or decode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Encode,
    Decode,
}

impl Mode {
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Encode => Self::Decode,
            Self::Decode => Self::Encode,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Encode => f.write_str("encode"),
            Self::Decode => f.write_str("decode"),
        }
    }
}

/// Separator and preprocessing choices for the text layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextOptions {
    pub sep: String,
    pub wsep: String,
    pub keep_punctuation: bool,
}

impl Default for TextOptions {
    fn default() -> Self {
        Self {
            sep: DEFAULT_SEP.to_string(),
            wsep: DEFAULT_WSEP.to_string(),
            keep_punctuation: false,
        }
    }
}

impl TextOptions {
    #[must_use]
    pub fn preprocessor(&self) -> Preprocessor {
        if self.keep_punctuation {
            text::non_whitespace
        } else {
            text::alphanumeric
        }
    }
}

impl Scheme {
    /// Parse a registry name or `semaphore[:<notation>]`
    ///
    /// # Errors
    /// Returns an error message naming the unknown code or non-direction notation.
    pub fn parse(name: &str) -> Result<Self, String> {
        if let Some(rest) = name.strip_prefix(SEMAPHORE_PREFIX) {
            let (label, notation) = match rest.strip_prefix(':') {
                Some(notation) => codes::entry(notation)
                    .ok_or_else(|| format!("Unknown notation '{notation}'"))?,
                None if rest.is_empty() => ("arrows", &DIRECTION_ARROWS as &'static dyn Code),
                None => return Err(format!("Unknown code '{name}'")),
            };
            if !codes::is_direction(notation) {
                return Err(format!("'{label}' is not a direction notation"));
            }
            return Ok(Self::Semaphore(label, notation));
        }
        codes::entry(name)
            .map(|(label, code)| Self::Code(label, code))
            .ok_or_else(|| {
                format!(
                    "Unknown code '{name}' (known: {})",
                    codes::code_names().join(", ")
                )
            })
    }

    /// Every scheme offered in the live view
    #[must_use]
    pub fn all() -> Vec<Self> {
        let mut schemes: Vec<Self> = codes::REGISTRY
            .iter()
            .filter(|(_, code, _)| code.name() != ALPHABET.name())
            .map(|&(label, code, _)| Self::Code(label, code))
            .collect();
        schemes.extend(
            codes::REGISTRY
                .iter()
                .filter(|&&(_, code, _)| codes::is_direction(code))
                .map(|&(label, code, _)| Self::Semaphore(label, code)),
        );
        schemes
    }

    /// A plain string encoder for this scheme
    ///
    /// # Errors
    /// Returns `CodeError::NoCommonAncestor` if the code cannot be reached.
    pub fn encoder(
        &self,
        options: &TextOptions,
    ) -> Result<StringEncoder<Box<dyn WordEncoder>>, CodeError> {
        let inner: Box<dyn WordEncoder> = match *self {
            Self::Code(_, code) => Box::new(CodeConverter::new(&ALPHABET, code)?),
            Self::Semaphore(_, notation) => Box::new(SemaphoreEncoder::new(notation)?),
        };
        Ok(StringEncoder::new(inner)
            .with_sep(options.sep.as_str())
            .with_wsep(options.wsep.as_str())
            .with_preprocessor(options.preprocessor()))
    }

    /// A string decoder for this scheme
    ///
    /// # Errors
    /// Returns `CodeError::NoCommonAncestor` if the code cannot be reached.
    pub fn decoder(
        &self,
        options: &TextOptions,
    ) -> Result<StringDecoder<Box<dyn WordDecoder>>, CodeError> {
        let inner: Box<dyn WordDecoder> = match *self {
            Self::Code(_, code) => Box::new(CodeConverter::new(code, &ALPHABET)?),
            Self::Semaphore(_, notation) => Box::new(SemaphoreDecoder::new(notation)?),
        };
        Ok(StringDecoder::new(inner)
            .with_sep(options.sep.as_str())
            .with_wsep(options.wsep.as_str()))
    }

    /// Encode or decode one text with a fresh codec
    ///
    /// # Errors
    /// Returns the text-level `CodeError` of the failing character or token.
    pub fn transcode(
        &self,
        options: &TextOptions,
        mode: Mode,
        text: &str,
    ) -> Result<String, CodeError> {
        match mode {
            Mode::Encode => self.encoder(options)?.encode(text),
            Mode::Decode => self.decoder(options)?.decode(text),
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Code(label, _) => f.write_str(label),
            Self::Semaphore("arrows", _) => f.write_str(SEMAPHORE_PREFIX),
            Self::Semaphore(label, _) => write!(f, "{SEMAPHORE_PREFIX}:{label}"),
        }
    }
}
