//! The `Code` capability contract and the `Alphabet` root

use super::{CodeError, SequenceKind, Symbol};
use std::fmt;

/// A named symbol system with a designated parent system
///
/// Codes are identified by [`Code::name`]: two code values with the same
/// name are the same node of the conversion graph, even if they validate
/// differently (6-dot and 8-dot binary Braille share one node).
pub trait Code: fmt::Debug + Send + Sync {
    /// Unique name of this node in the conversion graph
    fn name(&self) -> &'static str;

    /// The code this one converts through; `Alphabet` is its own parent
    fn parent(&self) -> &'static dyn Code;

    /// Map one symbol of this code into the parent's symbol space
    ///
    /// # Errors
    /// Returns `CodeError::InvalidSymbol` if the symbol has no parent representation.
    fn to_parent(&self, symbol: Symbol) -> Result<Symbol, CodeError>;

    /// Map one parent symbol into this code
    ///
    /// # Errors
    /// Returns `CodeError::InvalidSymbol` if the parent symbol has no representation here.
    fn from_parent(&self, symbol: Symbol) -> Result<Symbol, CodeError>;

    /// Reject symbols outside this code's legal domain
    ///
    /// # Errors
    /// Returns `CodeError::InvalidSymbol` for out-of-domain symbols.
    fn validate(&self, _symbol: &Symbol) -> Result<(), CodeError> {
        Ok(())
    }

    /// How converted symbols of this code are joined together
    fn sequence_kind(&self) -> SequenceKind {
        SequenceKind::List
    }

    /// Read one text token as a symbol of this code
    ///
    /// # Errors
    /// Returns `CodeError::InvalidSymbol` if the token cannot be read.
    fn parse_token(&self, token: &str) -> Result<Symbol, CodeError> {
        Ok(Symbol::Text(token.to_string()))
    }

    /// Whether this code terminates its own parent chain
    fn is_root(&self) -> bool {
        self.parent().name() == self.name()
    }
}

/// Plain natural-language characters; the universal pivot
#[derive(Debug, Clone, Copy, Default)]
pub struct Alphabet;

pub static ALPHABET: Alphabet = Alphabet;

impl Code for Alphabet {
    fn name(&self) -> &'static str {
        "alphabet"
    }

    fn parent(&self) -> &'static dyn Code {
        &ALPHABET
    }

    fn to_parent(&self, symbol: Symbol) -> Result<Symbol, CodeError> {
        Ok(symbol)
    }

    fn from_parent(&self, symbol: Symbol) -> Result<Symbol, CodeError> {
        Ok(symbol)
    }

    fn validate(&self, symbol: &Symbol) -> Result<(), CodeError> {
        match symbol {
            Symbol::Char(_) => Ok(()),
            other => Err(CodeError::invalid(self.name(), other)),
        }
    }

    fn sequence_kind(&self) -> SequenceKind {
        SequenceKind::Concat
    }

    fn parse_token(&self, token: &str) -> Result<Symbol, CodeError> {
        let mut chars = token.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(Symbol::Char(c)),
            _ => Err(CodeError::invalid(self.name(), token)),
        }
    }
}

/// The ancestor chain `[code, code.parent, ..., root]`
///
/// Stops at a code that is its own parent. A chain that revisits a code is
/// cut at the repeat, so it will not end at `Alphabet` and conversions
/// through it fail with `NoCommonAncestor`.
#[must_use]
pub fn ancestors(code: &'static dyn Code) -> Vec<&'static dyn Code> {
    let mut chain = vec![code];
    let mut current = code;

    while !current.is_root() {
        current = current.parent();
        if chain.iter().any(|seen| seen.name() == current.name()) {
            tracing::warn!(
                code = code.name(),
                repeated = current.name(),
                "cyclic parent chain"
            );
            break;
        }
        chain.push(current);
    }

    chain
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Loop;
    #[derive(Debug)]
    struct Pool;
    static LOOP: Loop = Loop;
    static POOL: Pool = Pool;

    macro_rules! identity_code {
        ($ty:ty, $name:literal, $parent:expr) => {
            impl Code for $ty {
                fn name(&self) -> &'static str {
                    $name
                }
                fn parent(&self) -> &'static dyn Code {
                    $parent
                }
                fn to_parent(&self, symbol: Symbol) -> Result<Symbol, CodeError> {
                    Ok(symbol)
                }
                fn from_parent(&self, symbol: Symbol) -> Result<Symbol, CodeError> {
                    Ok(symbol)
                }
            }
        };
    }

    identity_code!(Loop, "loop", &POOL);
    identity_code!(Pool, "pool", &LOOP);

    #[test]
    fn alphabet_is_root() {
        assert!(ALPHABET.is_root());
        let chain = ancestors(&ALPHABET);
        assert_eq!(chain.len(), 1);
        assert_eq!(chain[0].name(), "alphabet");
    }

    #[test]
    fn cyclic_chain_is_cut() {
        let chain = ancestors(&LOOP);
        let names: Vec<_> = chain.iter().map(|c| c.name()).collect();
        assert_eq!(names, ["loop", "pool"]);
    }

    #[test]
    fn alphabet_tokens_are_single_chars() {
        assert_eq!(ALPHABET.parse_token("Q"), Ok(Symbol::Char('Q')));
        assert!(ALPHABET.parse_token("QQ").is_err());
        assert!(ALPHABET.parse_token("").is_err());
    }

    #[test]
    fn alphabet_validates_chars_only() {
        assert!(ALPHABET.validate(&Symbol::Char('a')).is_ok());
        assert!(ALPHABET.validate(&Symbol::Int(1)).is_err());
    }
}
