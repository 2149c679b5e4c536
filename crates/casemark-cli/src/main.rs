//! `casemark` CLI — encode, decode, and analyze marked casing streams.
//!
//! ## Usage
//!
//! ```sh
//! # Encode text to a marked lowercase stream (stdin → stdout)
//! echo 'Hello WORLD' | casemark encode
//!
//! # Encode from file to file
//! casemark encode -i corpus.txt -o corpus.marked
//!
//! # Encode with a custom token pattern
//! echo 'Pi is 3.14' | casemark encode --pattern '\p{L}+'
//!
//! # Decode a marked stream back to cased text
//! casemark decode -i corpus.marked
//!
//! # Decode, failing on truncated streams with dangling markers
//! casemark decode --strict -i corpus.marked
//!
//! # Show marker statistics
//! casemark stats -i corpus.txt
//! casemark stats -i corpus.txt --json
//! ```

use anyhow::{Context, Result};
use casemark_core::{marker, WordTokenizer};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::io::{self, Read};

#[derive(Parser)]
#[command(
    name = "casemark",
    version,
    about = "Reversible casing normalization for lowercase token streams"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode text into a marked lowercase stream
    Encode {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Custom token pattern (a regex; tokens are its matches)
        #[arg(long)]
        pattern: Option<String>,
    },
    /// Decode a marked stream back into cased text
    Decode {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Fail on dangling markers instead of dropping them
        #[arg(long)]
        strict: bool,
    },
    /// Show marker statistics for a text
    Stats {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Emit the report as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Marker statistics for one encoded text.
#[derive(Serialize)]
struct Stats {
    tokens: usize,
    all_caps_markers: usize,
    capitalized_markers: usize,
    plain_bytes: usize,
    marked_bytes: usize,
    overhead_pct: f64,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Encode {
            input,
            output,
            pattern,
        } => {
            let text = read_input(input.as_deref())?;
            let marked = match pattern {
                Some(p) => {
                    let tokenizer = WordTokenizer::with_pattern(&p)
                        .with_context(|| format!("Invalid token pattern: {p}"))?;
                    casemark_core::encode_with(&tokenizer, &text)
                }
                None => casemark_core::encode(&text),
            };
            write_output(output.as_deref(), &marked)?;
        }
        Commands::Decode {
            input,
            output,
            strict,
        } => {
            let marked = read_input(input.as_deref())?;
            // Shells and editors append a final newline; it is not part of
            // the space-joined stream.
            let marked = marked.trim_end_matches('\n');
            let text = if strict {
                casemark_core::decode_strict(marked).context("Failed to decode marked stream")?
            } else {
                casemark_core::decode(marked)
            };
            write_output(output.as_deref(), &text)?;
        }
        Commands::Stats { input, json } => {
            let text = read_input(input.as_deref())?;
            let stats = compute_stats(&text);
            if json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
            } else {
                println!("Tokens:       {}", stats.tokens);
                println!("All-caps:     {}", stats.all_caps_markers);
                println!("Capitalized:  {}", stats.capitalized_markers);
                println!("Plain size:   {} bytes", stats.plain_bytes);
                println!("Marked size:  {} bytes", stats.marked_bytes);
                println!("Overhead:     {:.1}%", stats.overhead_pct);
            }
        }
    }

    Ok(())
}

/// Encode `text` and count what the markers cost.
fn compute_stats(text: &str) -> Stats {
    let marked = casemark_core::encode(text);

    let mut tokens = 0;
    let mut all_caps_markers = 0;
    let mut capitalized_markers = 0;
    for word in marked.split(' ').filter(|w| !w.is_empty()) {
        match word {
            marker::ALL_CAPS => all_caps_markers += 1,
            marker::CAPITALIZED => capitalized_markers += 1,
            _ => tokens += 1,
        }
    }

    let plain_bytes = text.len();
    let marked_bytes = marked.len();
    let overhead_pct = if plain_bytes > 0 {
        (marked_bytes as f64 / plain_bytes as f64 - 1.0) * 100.0
    } else {
        0.0
    };

    Stats {
        tokens,
        all_caps_markers,
        capitalized_markers,
        plain_bytes,
        marked_bytes,
        overhead_pct,
    }
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {path}"))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {path}"))?;
        }
        None => {
            print!("{content}");
        }
    }
    Ok(())
}
