//! Command implementations

pub mod batch;
pub mod braille_grid;
pub mod convert;
pub mod elements;
pub mod scheme;
pub mod tables;
pub mod translate;

pub use batch::{BatchResult, run_batch};
pub use braille_grid::{GridCell, GridResult, read_braille_grid};
pub use convert::{ConvertConfig, ConvertMode, ConvertResult, convert_tokens};
pub use elements::{ElementSpelling, spell_with_elements};
pub use scheme::{Mode, Scheme, TextOptions};
pub use tables::{TableCheck, check_table_file};
pub use translate::{TranslateResult, translate_sequence};
