//! Build script to generate embedded lookup tables
//!
//! Reads tab-separated data files and generates Rust source code with const row arrays.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

/// (file stem, const name, description)
const TABLES: &[(&str, &str, &str)] = &[
    ("morse", "MORSE", "International Morse code: character, dot/hyphen code"),
    ("semaphore", "SEMAPHORE", "Flag semaphore: sign, first direction, second direction"),
    ("amino", "AMINO", "Standard amino acids: letter, abbreviation, name"),
    ("amino_extra", "AMINO_EXTRA", "Special, wildcard and stop amino acid markers"),
    ("genetic_code", "GENETIC_CODE", "DNA codon to one-letter amino acid"),
    ("elements", "ELEMENTS", "Chemical elements: number, symbol, name"),
];

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let output_path = Path::new(&out_dir).join("tables.rs");

    let mut output = fs::File::create(&output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated lookup tables").unwrap();
    writeln!(output).unwrap();

    for &(stem, const_name, doc_comment) in TABLES {
        let input_path = format!("data/{stem}.tsv");
        generate_table(&mut output, &input_path, const_name, doc_comment);
        println!("cargo:rerun-if-changed={input_path}");
    }

    writeln!(output, "/// Table names paired with their rows, in declaration order").unwrap();
    writeln!(output, "pub const TABLES: &[(&str, &[&[&str]])] = &[").unwrap();
    for &(stem, const_name, _) in TABLES {
        writeln!(output, "    (\"{stem}\", {const_name}),").unwrap();
    }
    writeln!(output, "];").unwrap();
}

fn generate_table(output: &mut fs::File, input_path: &str, const_name: &str, doc_comment: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let rows: Vec<Vec<&str>> = content
        .lines()
        .map(|line| line.trim_end_matches('\r'))
        .filter(|line| !line.is_empty())
        .map(|line| line.split('\t').collect())
        .collect();

    writeln!(output, "/// {doc_comment}").unwrap();
    writeln!(output, "pub const {const_name}: &[&[&str]] = &[").unwrap();
    for row in &rows {
        let fields: Vec<String> = row.iter().map(|field| format!("{field:?}")).collect();
        writeln!(output, "    &[{}],", fields.join(", ")).unwrap();
    }
    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of rows in {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_COUNT: usize = {};", rows.len()).unwrap();
    writeln!(output).unwrap();
}
