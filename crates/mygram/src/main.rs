//! Command-line interface for inspecting mygram search expressions.
//!
//! Every subcommand runs the same pipeline the client library exposes to
//! embedding callers; nothing here touches the network.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use mygram_query::SyntaxError;

/// Top-level CLI options.
#[derive(Parser)]
#[command(name = "mygram")]
#[command(about = "Convert web-style search expressions to MygramDB queries")]
struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    command: Commands,
}

/// Supported subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Print the backend query string for an expression
    Convert {
        /// Search expression
        #[arg(allow_hyphen_values = true)]
        expression: String,
    },

    /// Print the parsed expression structure
    Parse {
        /// Search expression
        #[arg(allow_hyphen_values = true)]
        expression: String,

        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },

    /// Print the token stream (debugging aid)
    Tokens {
        /// Search expression
        #[arg(allow_hyphen_values = true)]
        expression: String,
    },

    /// Print the flattened main/AND/NOT projection
    Simplify {
        /// Search expression
        #[arg(allow_hyphen_values = true)]
        expression: String,

        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Commands::Convert { expression } => run_convert(&expression),
        Commands::Parse { expression, json } => run_parse(&expression, json),
        Commands::Tokens { expression } => run_tokens(&expression),
        Commands::Simplify { expression, json } => run_simplify(&expression, json),
    }
}

/// Reports a syntax error and exits non-zero.
fn report(err: &SyntaxError) -> ExitCode {
    eprintln!("error: {err}");
    ExitCode::FAILURE
}

/// Prints a value as pretty JSON.
fn print_json<T: serde::Serialize>(value: &T) -> ExitCode {
    match serde_json::to_string_pretty(value) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: failed to serialize JSON: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Implements `mygram convert`.
fn run_convert(expression: &str) -> ExitCode {
    match mygram_query::convert(expression) {
        Ok(query) => {
            println!("{query}");
            ExitCode::SUCCESS
        }
        Err(e) => report(&e),
    }
}

/// Implements `mygram parse`.
fn run_parse(expression: &str, json: bool) -> ExitCode {
    let expr = match mygram_query::parse(expression) {
        Ok(expr) => expr,
        Err(e) => return report(&e),
    };

    if json {
        return print_json(&expr);
    }

    println!("{expr}");
    ExitCode::SUCCESS
}

/// Implements `mygram tokens`.
fn run_tokens(expression: &str) -> ExitCode {
    for token in mygram_query::tokenize(expression) {
        println!("{token:?}");
    }
    ExitCode::SUCCESS
}

/// Implements `mygram simplify`.
fn run_simplify(expression: &str, json: bool) -> ExitCode {
    match mygram_query::simplify(expression) {
        Ok(Some(simplified)) => {
            if json {
                return print_json(&simplified);
            }
            println!("main: {}", simplified.main_term);
            println!("and:  {:?}", simplified.and_terms);
            println!("not:  {:?}", simplified.not_terms);
            ExitCode::SUCCESS
        }
        Ok(None) => {
            eprintln!("no main term: expression has no required terms");
            ExitCode::FAILURE
        }
        Err(e) => report(&e),
    }
}
