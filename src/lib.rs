//! Puzzle Codes
//!
//! Composable codecs for puzzle hunts: Morse, Braille, flag semaphore,
//! amino acids and military time zones, all converting through a shared
//! alphabet so any two codes can be chained.
//!
//! # Quick Start
//!
//! ```rust
//! use puzzle_codes::codes::{BRAILLE_UNICODE, MORSE};
//! use puzzle_codes::core::{CodeConverter, Symbol};
//! use puzzle_codes::text::{StringDecoder, StringEncoder};
//!
//! // Whole strings
//! let mut encoder = StringEncoder::for_code(&MORSE).unwrap();
//! assert_eq!(encoder.encode("sos").unwrap(), "... --- ...");
//!
//! let mut decoder = StringDecoder::for_code(&MORSE).unwrap();
//! assert_eq!(decoder.decode("... --- ...").unwrap(), "SOS");
//!
//! // Symbol to symbol, through the nearest shared ancestor
//! let converter = CodeConverter::new(&MORSE, &BRAILLE_UNICODE).unwrap();
//! let cell = converter.convert_symbol(Symbol::from(".-")).unwrap();
//! assert_eq!(cell, Symbol::Char('\u{2801}'));
//! ```

// Conversion framework
pub mod core;

// Embedded data tables
pub mod tables;

// Concrete codes and the name registry
pub mod codes;

// Whole-text codecs
pub mod text;

// Word utilities
pub mod words;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
