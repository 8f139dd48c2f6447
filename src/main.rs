//! Puzzle Codes - CLI
//!
//! Encode, decode and convert between puzzle-hunt codes, with a live TUI
//! transcoder as the default mode.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use puzzle_codes::{
    codes::amino::StartBehavior,
    commands::{
        ConvertConfig, ConvertMode, Mode, Scheme, TextOptions, check_table_file, convert_tokens,
        read_braille_grid, run_batch, spell_with_elements, translate_sequence,
    },
    output::{
        print_batch_result, print_code_list, print_convert_result, print_elements_result,
        print_grid_result, print_table_check, print_transcode, print_translate_result,
    },
};
use std::io::{self, Read};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "puzzle_codes",
    about = "Morse, Braille, semaphore and amino-acid codecs for puzzle hunts",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Separator between the tokens of one word
    #[arg(long, global = true, default_value = " ")]
    sep: String,

    /// Word separator; words are joined by sep + wsep + sep
    #[arg(long, global = true, default_value = "/")]
    wsep: String,

    /// Encode punctuation instead of treating it as a word break
    #[arg(short = 'p', long, global = true)]
    keep_punctuation: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Live transcoder TUI (default)
    Live {
        /// Scheme to start on
        #[arg(short, long, default_value = "morse")]
        scheme: String,
    },

    /// List registered codes
    List,

    /// Encode plain text
    Encode {
        /// Code name, or semaphore[:<notation>]
        scheme: String,

        /// Text to encode (read from stdin when empty)
        text: Vec<String>,

        /// Echo the input and scheme alongside the result
        #[arg(short, long)]
        verbose: bool,
    },

    /// Decode tokens back to text
    Decode {
        /// Code name, or semaphore[:<notation>]
        scheme: String,

        /// Tokens to decode (read from stdin when empty)
        #[arg(allow_hyphen_values = true)]
        text: Vec<String>,

        /// Echo the input and scheme alongside the result
        #[arg(short, long)]
        verbose: bool,
    },

    /// Convert symbols between two codes
    Convert {
        /// Source code name
        from: String,

        /// Target code name
        to: String,

        /// Input symbols, one per argument
        #[arg(required = true, allow_hyphen_values = true)]
        tokens: Vec<String>,

        /// Treat all tokens as one sequence
        #[arg(long, conflicts_with = "auto")]
        sequence: bool,

        /// Try each token as one symbol, then as a sequence of characters
        #[arg(long)]
        auto: bool,
    },

    /// Translate a DNA or RNA strand into amino acids
    Translate {
        /// Nucleotide sequence
        sequence: String,

        /// Start behavior: keep, chop, search
        #[arg(short, long, default_value = "keep")]
        start: StartBehavior,

        /// Translate the reverse complement
        #[arg(short, long)]
        conjugate: bool,
    },

    /// Spell words with chemical element symbols
    Elements {
        /// Words to spell
        #[arg(required = true)]
        words: Vec<String>,
    },

    /// Read a grid of Braille dots
    BrailleGrid {
        /// Rows separated by '/' or newlines; '-' or nothing reads stdin
        grid: Option<String>,
    },

    /// Encode or decode every line of a file in parallel
    Batch {
        /// Code name, or semaphore[:<notation>]
        scheme: String,

        /// Input file, or '-' for stdin
        file: String,

        /// Decode instead of encode
        #[arg(short, long)]
        decode: bool,

        /// Hide the progress bar
        #[arg(long)]
        no_progress: bool,
    },

    /// Check a TSV file against the schema of a built-in table
    CheckTable {
        /// Table name, as shown by 'list'
        table: String,

        /// TSV file to check
        file: PathBuf,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let options = TextOptions {
        sep: cli.sep,
        wsep: cli.wsep,
        keep_punctuation: cli.keep_punctuation,
    };

    // Default to the live transcoder if no command given
    let command = cli.command.unwrap_or(Commands::Live {
        scheme: "morse".to_string(),
    });

    match command {
        Commands::Live { scheme } => run_live_command(&scheme, options),
        Commands::List => {
            print_code_list();
            Ok(())
        }
        Commands::Encode {
            scheme,
            text,
            verbose,
        } => run_transcode_command(&scheme, &options, Mode::Encode, &text, verbose),
        Commands::Decode {
            scheme,
            text,
            verbose,
        } => run_transcode_command(&scheme, &options, Mode::Decode, &text, verbose),
        Commands::Convert {
            from,
            to,
            tokens,
            sequence,
            auto,
        } => run_convert_command(from, to, tokens, sequence, auto),
        Commands::Translate {
            sequence,
            start,
            conjugate,
        } => {
            let result =
                translate_sequence(&sequence, start, conjugate).map_err(|e| anyhow::anyhow!(e))?;
            print_translate_result(&result);
            Ok(())
        }
        Commands::Elements { words } => {
            print_elements_result(&spell_with_elements(&words));
            Ok(())
        }
        Commands::BrailleGrid { grid } => run_braille_grid_command(grid),
        Commands::Batch {
            scheme,
            file,
            decode,
            no_progress,
        } => run_batch_command(&scheme, &options, &file, decode, !no_progress),
        Commands::CheckTable { table, file } => {
            let check = check_table_file(&table, &file).map_err(|e| anyhow::anyhow!(e))?;
            print_table_check(&check);
            Ok(())
        }
    }
}

fn read_stdin() -> Result<String> {
    let mut buf = String::new();
    io::stdin()
        .read_to_string(&mut buf)
        .context("Failed to read stdin")?;
    Ok(buf)
}

fn run_transcode_command(
    scheme_name: &str,
    options: &TextOptions,
    mode: Mode,
    text: &[String],
    verbose: bool,
) -> Result<()> {
    let scheme = Scheme::parse(scheme_name).map_err(|e| anyhow::anyhow!(e))?;
    let input = if text.is_empty() {
        read_stdin()?
    } else {
        text.join(" ")
    };

    let output = scheme
        .transcode(options, mode, input.trim_end())
        .with_context(|| format!("Failed to {mode} with {scheme}"))?;
    print_transcode(&scheme, mode, input.trim_end(), &output, verbose);
    Ok(())
}

fn run_convert_command(
    from: String,
    to: String,
    tokens: Vec<String>,
    sequence: bool,
    auto: bool,
) -> Result<()> {
    let mode = if sequence {
        ConvertMode::Sequence
    } else if auto {
        ConvertMode::Auto
    } else {
        ConvertMode::Each
    };
    let config = ConvertConfig {
        from,
        to,
        tokens,
        mode,
    };
    let result = convert_tokens(config).map_err(|e| anyhow::anyhow!(e))?;
    print_convert_result(&result);
    Ok(())
}

fn run_braille_grid_command(grid: Option<String>) -> Result<()> {
    let text = match grid.as_deref() {
        None | Some("-") => read_stdin()?,
        Some(text) => text.to_string(),
    };
    let result = read_braille_grid(&text).map_err(|e| anyhow::anyhow!(e))?;
    print_grid_result(&result);
    Ok(())
}

fn run_batch_command(
    scheme_name: &str,
    options: &TextOptions,
    file: &str,
    decode: bool,
    show_progress: bool,
) -> Result<()> {
    let scheme = Scheme::parse(scheme_name).map_err(|e| anyhow::anyhow!(e))?;
    let content = if file == "-" {
        read_stdin()?
    } else {
        std::fs::read_to_string(file).with_context(|| format!("Failed to read {file}"))?
    };
    let lines: Vec<String> = content.lines().map(str::to_string).collect();
    if lines.is_empty() {
        bail!("No input lines");
    }

    let mode = if decode { Mode::Decode } else { Mode::Encode };
    let result = run_batch(&scheme, options, mode, &lines, show_progress);
    print_batch_result(&result);
    Ok(())
}

fn run_live_command(scheme_name: &str, options: TextOptions) -> Result<()> {
    use puzzle_codes::interactive::{App, run_tui};

    let scheme = Scheme::parse(scheme_name).map_err(|e| anyhow::anyhow!(e))?;
    run_tui(App::new(scheme, options))
}
