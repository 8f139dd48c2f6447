//! Symbol values flowing through codes
//!
//! Codes disagree on what a symbol is: a letter, a dot/hyphen string, a
//! binary Braille pattern, a list of raised dots, a unit vector. `Symbol`
//! carries any of these so converters can chain heterogeneous codes.

use std::fmt;

/// A single value in some code's symbol space
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Symbol {
    /// One character (plain letters, arrows, Braille cells, keypad digits)
    Char(char),
    /// A multi-character token (Morse codes, amino abbreviations, compass points)
    Text(String),
    /// An integer (binary Braille, UTC offsets)
    Int(i64),
    /// Raised/flat dots in dot-number order
    Dots(Vec<bool>),
    /// A grid step such as `(1, -1)`
    Vector(i8, i8),
    /// An ordered run of symbols
    Seq(Vec<Symbol>),
}

impl Symbol {
    #[must_use]
    pub const fn as_char(&self) -> Option<char> {
        match self {
            Self::Char(c) => Some(*c),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Split a composite symbol into its elements
    ///
    /// Text splits into characters and sequences into their items; atomic
    /// symbols have no elements.
    #[must_use]
    pub fn elements(&self) -> Option<Vec<Symbol>> {
        match self {
            Self::Text(s) => Some(s.chars().map(Self::Char).collect()),
            Self::Seq(items) => Some(items.clone()),
            _ => None,
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Char(c) => write!(f, "{c}"),
            Self::Text(s) => f.write_str(s),
            Self::Int(n) => write!(f, "{n}"),
            Self::Dots(dots) => {
                for &raised in dots {
                    f.write_str(if raised { "1" } else { "0" })?;
                }
                Ok(())
            }
            Self::Vector(x, y) => write!(f, "({x},{y})"),
            Self::Seq(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{item}")?;
                }
                Ok(())
            }
        }
    }
}

impl From<char> for Symbol {
    fn from(c: char) -> Self {
        Self::Char(c)
    }
}

impl From<&str> for Symbol {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for Symbol {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<i64> for Symbol {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

/// How a code assembles several converted symbols into one value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceKind {
    /// Keep an ordered `Symbol::Seq`
    List,
    /// Concatenate the rendered symbols into one `Symbol::Text`
    Concat,
}

impl SequenceKind {
    #[must_use]
    pub fn assemble(self, items: Vec<Symbol>) -> Symbol {
        match self {
            Self::List => Symbol::Seq(items),
            Self::Concat => Symbol::Text(items.iter().map(ToString::to_string).collect()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_renders_each_shape() {
        assert_eq!(Symbol::Char('D').to_string(), "D");
        assert_eq!(Symbol::from("-..").to_string(), "-..");
        assert_eq!(Symbol::Int(25).to_string(), "25");
        assert_eq!(
            Symbol::Dots(vec![true, false, false, true, true, false]).to_string(),
            "100110"
        );
        assert_eq!(Symbol::Vector(-1, 1).to_string(), "(-1,1)");
        assert_eq!(
            Symbol::Seq(vec![Symbol::from("ASP"), Symbol::from("ILE")]).to_string(),
            "ASP ILE"
        );
    }

    #[test]
    fn elements_of_text_are_chars() {
        let elements = Symbol::from("DIA").elements().unwrap();
        assert_eq!(
            elements,
            vec![Symbol::Char('D'), Symbol::Char('I'), Symbol::Char('A')]
        );
        assert!(Symbol::Int(3).elements().is_none());
    }

    #[test]
    fn assemble_by_kind() {
        let items = vec![Symbol::Char('\u{2801}'), Symbol::Char('\u{2803}')];
        assert_eq!(
            SequenceKind::Concat.assemble(items.clone()),
            Symbol::from("\u{2801}\u{2803}")
        );
        assert_eq!(SequenceKind::List.assemble(items.clone()), Symbol::Seq(items));
    }
}
