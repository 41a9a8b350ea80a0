use std::process::ExitCode;

use clap::{Parser, Subcommand};
use factoradic::{from_factoradic, to_factoradic};
use num_bigint::BigInt;

/// Exit status for malformed input data (sysexits EX_DATAERR)
const EX_DATAERR: u8 = 65;

/// Convert to and from the factorial number system.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Convert an integer to its factoradic coefficients.
    FromInteger {
        /// The non-negative integer to convert.
        integer: String,

        /// Show the result as a mathematical expression.
        #[arg(short, long)]
        expression: bool,
    },

    /// Convert factoradic coefficients back to an integer.
    ToInteger {
        /// Coefficients, lowest place value first.
        #[arg(required = true)]
        coefficients: Vec<String>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Commands::FromInteger {
            integer,
            expression,
        } => from_integer(&integer, expression),
        Commands::ToInteger { coefficients } => to_integer(&coefficients),
    }
}

fn from_integer(text: &str, expression: bool) -> ExitCode {
    let Ok(n) = text.parse::<BigInt>() else {
        eprintln!("'{text}' is not an integer");
        return ExitCode::from(EX_DATAERR);
    };

    match to_factoradic(&n) {
        Ok(coefficients) => {
            if expression {
                println!("{}", render_expression(&coefficients));
            } else {
                println!("{}", render_digits(&coefficients));
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{e}");
            ExitCode::from(EX_DATAERR)
        }
    }
}

fn to_integer(texts: &[String]) -> ExitCode {
    let mut coefficients = Vec::with_capacity(texts.len());
    for text in texts {
        match text.parse::<u64>() {
            Ok(coefficient) => coefficients.push(coefficient),
            Err(_) => {
                eprintln!(
                    "Not all coefficients in {} are non-negative integers",
                    texts.join(" ")
                );
                return ExitCode::from(EX_DATAERR);
            }
        }
    }

    match from_factoradic(&coefficients) {
        Ok(value) => {
            println!("{value}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{e}");
            ExitCode::from(EX_DATAERR)
        }
    }
}

/// Space-separated digit list, index 0 first
fn render_digits(coefficients: &[u64]) -> String {
    coefficients
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Sum-of-terms rendering from the highest place value down, every term
/// included: "2*3! + 0*2! + 1*1! + 0*0!"
fn render_expression(coefficients: &[u64]) -> String {
    coefficients
        .iter()
        .enumerate()
        .rev()
        .map(|(index, coefficient)| format!("{coefficient}*{index}!"))
        .collect::<Vec<_>>()
        .join(" + ")
}
