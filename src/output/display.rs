//! Display functions for command results

use super::formatters::{braille_grid_lines, create_progress_bar};
use crate::codes::REGISTRY;
use crate::commands::{
    BatchResult, ConvertResult, ElementSpelling, GridResult, Mode, Scheme, TableCheck,
    TranslateResult,
};
use crate::tables;
use colored::Colorize;

fn banner(title: &str) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", title.bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());
}

/// Print every registered code with its parent and description
pub fn print_code_list() {
    banner("CODES");
    println!();
    for &(name, code, description) in REGISTRY {
        let parent = if code.is_root() {
            "-".to_string()
        } else {
            code.parent().name().to_string()
        };
        println!(
            "  {:<18} {:<16} {}",
            name.bright_yellow().bold(),
            parent.bright_black(),
            description
        );
    }
    println!(
        "\n  {} semaphore[:arrows|numpad|phonepad|rogue|compass|cartesian]",
        "Text schemes:".bright_cyan()
    );
    println!(
        "  {} {}",
        "Tables:".bright_cyan(),
        tables::table_names().join(", ")
    );
}

/// Print the result of encoding or decoding a text
pub fn print_transcode(scheme: &Scheme, mode: Mode, input: &str, output: &str, verbose: bool) {
    if verbose {
        println!("{} {} ({})", "Input:".bright_black(), input, scheme);
        println!("{} {}", format!("{mode}d:").bright_black(), output.green().bold());
    } else {
        println!("{output}");
    }
}

/// Print the result of a symbol conversion
pub fn print_convert_result(result: &ConvertResult) {
    println!(
        "{} {} {} {} {}",
        result.from.bright_yellow(),
        "→".cyan(),
        result.to.bright_yellow(),
        "via".bright_black(),
        result.pivot.bright_black()
    );

    if result.outputs.len() == result.inputs.len() {
        for (input, output) in result.inputs.iter().zip(&result.outputs) {
            println!("  {input:<16} {} {}", "→".cyan(), output.to_string().green());
        }
    } else {
        for output in &result.outputs {
            println!("  {}", output.to_string().green());
        }
    }
}

/// Print a translated strand
pub fn print_translate_result(result: &TranslateResult) {
    banner("TRANSLATION");

    let strand = if result.conjugated {
        "Reverse complement:"
    } else {
        "Strand:"
    };
    println!("\n   {:<20} {}", strand, result.dna);
    println!("   {:<20} {}", "RNA:", result.rna.bright_black());
    println!(
        "   {:<20} {}",
        "Start:",
        format!("{:?}", result.start).to_lowercase()
    );
    println!(
        "   {:<20} {}",
        "Amino acids:",
        result.amino.as_str().bright_yellow().bold()
    );
    if !result.long_form.is_empty() {
        println!("   {:<20} {}", "Long form:", result.long_form.join("-"));
    }
}

/// Print element-symbol spellings
pub fn print_elements_result(results: &[ElementSpelling]) {
    for spelling in results {
        match &spelling.symbols {
            Some(symbols) => {
                let numbers: Vec<String> = spelling.numbers.iter().map(u8::to_string).collect();
                println!(
                    "{} {} {}  ({})",
                    spelling.word.bright_yellow().bold(),
                    "→".cyan(),
                    symbols.join(" ").green(),
                    numbers.join(" ")
                );
                if spelling.count > 1 {
                    println!(
                        "  {}",
                        format!("{} spellings", spelling.count).bright_black()
                    );
                }
            }
            None => println!(
                "{} {} {}",
                spelling.word.bright_yellow().bold(),
                "→".cyan(),
                "no spelling".red()
            ),
        }
    }
}

/// Print a Braille grid reading, cell diagrams first
pub fn print_grid_result(result: &GridResult) {
    println!(
        "{} {}x{} dots, {} cells",
        "Grid:".bright_black(),
        result.rows,
        result.columns,
        result.cells.len()
    );

    let dots: Vec<[Option<bool>; 6]> = result.cells.iter().map(|cell| cell.dots).collect();
    for line in braille_grid_lines(&dots) {
        println!("  {line}");
    }

    println!();
    for (i, cell) in result.cells.iter().enumerate() {
        let letters = match cell.letters.as_slice() {
            [] => "none".red().to_string(),
            [only] => only.to_string().green().bold().to_string(),
            many => many.iter().collect::<String>().yellow().to_string(),
        };
        println!("  cell {:>2}: {letters}", i + 1);
    }
    println!("\n{} {}", "Reading:".bright_cyan(), result.reading().bold());
}

/// Print the outcome of checking a table file
pub fn print_table_check(check: &TableCheck) {
    println!(
        "{} {} rows match the '{}' schema",
        "OK".green().bold(),
        check.rows,
        check.table.bright_yellow()
    );
    if check.rows != check.embedded_rows {
        println!(
            "   {}",
            format!("built-in table has {} rows", check.embedded_rows).bright_black()
        );
    }
}

/// Print batch output lines followed by a summary on stderr
pub fn print_batch_result(result: &BatchResult) {
    for (i, output) in result.outputs.iter().enumerate() {
        match output {
            Ok(line) => println!("{line}"),
            Err(e) => {
                println!();
                eprintln!("{} line {}: {e}", "error:".red().bold(), i + 1);
            }
        }
    }

    let total = result.outputs.len();
    let ok = total - result.failures;
    eprintln!(
        "\n{} [{}] {ok}/{total} lines",
        "Done".bright_cyan().bold(),
        create_progress_bar(ok as f64, total as f64, 30).green()
    );
    eprintln!(
        "   {:.2}s, {:.1} lines/second",
        result.duration.as_secs_f64(),
        result.lines_per_second
    );
}
