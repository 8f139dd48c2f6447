//! Core conversion framework
//!
//! A `Code` is a symbol system with a parent system and two elementary maps
//! to and from that parent. Every code's parent chain ends at [`Alphabet`],
//! so any two codes can be converted through their nearest shared ancestor
//! with a [`CodeConverter`].

mod code;
mod converter;
mod error;
mod symbol;

pub use code::{ALPHABET, Alphabet, Code, ancestors};
pub use converter::CodeConverter;
pub use error::CodeError;
pub use symbol::{SequenceKind, Symbol};
