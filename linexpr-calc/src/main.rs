//! Command-line interface (CLI) for linexpr-calc
//!
//! Reads expression candidates one per line from standard input (or a file)
//! and prints one report line per input line:
//!
//! - `recognize`: is the line an arithmetic expression (`+ - *`)?
//! - `evaluate`: the value of a sigil expression (`@ ^ !`).
//! - `tokens`: the token stream of each line, for debugging.
//!
//! Set `RUST_LOG=debug` to log every verdict, `RUST_LOG=trace` to follow the
//! tokenizer and the grammar rules.

use anyhow::Result;
use clap::{Parser as ClapParser, Subcommand};
use linexpr_calc::{CalcError, Grammar, dump_tokens, run};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

#[derive(ClapParser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Command
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Reports whether each line is an expression over `+ - *`
    Recognize {
        /// Input file (defaults to standard input)
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
    /// Evaluates each line over `@` (add), `^` (multiply), `!` (negate)
    Evaluate {
        /// Input file (defaults to standard input)
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
    /// Prints the tokens of each line
    Tokens {
        /// Operator table to tokenize with
        #[arg(short, long, value_enum, default_value_t = Grammar::Arith)]
        grammar: Grammar,
        /// Input file (defaults to standard input)
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
}

fn open_input(path: Option<&Path>) -> Result<(Box<dyn BufRead>, String), CalcError> {
    match path {
        Some(path) => {
            let file = File::open(path).map_err(|source| CalcError::Open {
                path: path.to_path_buf(),
                source,
            })?;
            Ok((Box::new(BufReader::new(file)), path.display().to_string()))
        }
        None => Ok((Box::new(io::stdin().lock()), "standard input".to_owned())),
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    let result = match args.command {
        Commands::Recognize { input } => judge_lines(Grammar::Arith, input.as_deref()),
        Commands::Evaluate { input } => judge_lines(Grammar::Sigil, input.as_deref()),
        Commands::Tokens { grammar, input } => {
            let (reader, name) = open_input(input.as_deref())?;
            dump_tokens(grammar, reader, &name, io::stdout().lock())
                .map(|stats| log::info!("Stats: {:?}", stats))
        }
    };

    match result {
        Ok(()) => Ok(()),
        // A read fault ends processing but is not a failed run; it is
        // reported alongside the per-line output.
        Err(err @ CalcError::Read { .. }) => {
            println!("{err}");
            Ok(())
        }
        Err(err) => Err(err.into()),
    }
}

fn judge_lines(grammar: Grammar, input: Option<&Path>) -> Result<(), CalcError> {
    let (reader, name) = open_input(input)?;
    let stats = run(grammar, reader, &name, io::stdout().lock())?;
    log::info!("Stats: {:?}", stats);
    Ok(())
}
