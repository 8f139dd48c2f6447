//! Embedded lookup tables
//!
//! Tables compiled into the binary at build time from `data/*.tsv`.

// Include generated tables from build script
include!(concat!(env!("OUT_DIR"), "/tables.rs"));
