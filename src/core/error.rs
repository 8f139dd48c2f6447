//! Error type shared by every code and text codec

use thiserror::Error;

/// Failure of a conversion step or of text-level wrapping
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodeError {
    /// A symbol has no representation in the named code
    #[error("invalid {code} symbol: {symbol}")]
    InvalidSymbol { code: &'static str, symbol: String },

    /// Two codes whose parent chains never meet
    #[error("codes '{from}' and '{to}' share no common ancestor")]
    NoCommonAncestor {
        from: &'static str,
        to: &'static str,
    },

    /// Text encoding met a character with no encoding
    #[error("cannot encode {0:?}")]
    UnencodableSymbol(String),

    /// Text decoding met a token with no matching symbol
    #[error("cannot decode token {0:?}")]
    UndecodableSymbol(String),
}

impl CodeError {
    pub(crate) fn invalid(code: &'static str, symbol: impl ToString) -> Self {
        Self::InvalidSymbol {
            code,
            symbol: symbol.to_string(),
        }
    }

    /// Re-tag a symbol failure as an encoding failure
    #[must_use]
    pub fn into_unencodable(self) -> Self {
        match self {
            Self::InvalidSymbol { symbol, .. } => Self::UnencodableSymbol(symbol),
            other => other,
        }
    }

    /// Re-tag a symbol failure as a decoding failure
    #[must_use]
    pub fn into_undecodable(self) -> Self {
        match self {
            Self::InvalidSymbol { symbol, .. } => Self::UndecodableSymbol(symbol),
            other => other,
        }
    }
}
