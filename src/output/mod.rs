//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_batch_result, print_code_list, print_convert_result, print_elements_result,
    print_grid_result, print_table_check, print_transcode, print_translate_result,
};
