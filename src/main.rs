use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process;

use flatwalk::eval::{self, EvalReport};
use flatwalk::{evaluate_str, parse_expression};

#[derive(Parser)]
#[command(
    name = "flatwalk",
    version,
    about = "Prefix-notation calculator over flat preorder trees"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Evaluate a prefix expression
    Eval {
        /// Expression to evaluate, e.g. "- x 3 5 / 8 2"
        expr: Option<String>,
        /// Read the expression from a file instead
        #[arg(short, long)]
        file: Option<PathBuf>,
        /// Print the result as a JSON report
        #[arg(long)]
        json: bool,
    },
    /// Print the ancestor chain of every node of the expression tree
    Paths {
        /// Expression to parse, e.g. "sqrt + pow 3 2 pow 4 2"
        expr: String,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Command::Eval { expr, file, json } => cmd_eval(expr, file, json),
        Command::Paths { expr } => cmd_paths(&expr),
    }
}

// --- flatwalk eval ---

fn cmd_eval(expr: Option<String>, file: Option<PathBuf>, json: bool) {
    let (source, filename) = match (expr, file) {
        (Some(expr), None) => (expr, "<expr>".to_string()),
        (None, Some(path)) => {
            let source = eval::read_expression(&path).unwrap_or_else(|err| {
                eprintln!("error: {}", err);
                process::exit(1);
            });
            (source, path.display().to_string())
        }
        _ => {
            eprintln!("error: provide an expression or --file, not both");
            process::exit(1);
        }
    };

    let source = source.trim().to_string();
    let value = match evaluate_str(&source, &filename) {
        Ok(value) => value,
        Err(_) => process::exit(1),
    };

    if json {
        let report = EvalReport {
            expression: source,
            value,
        };
        match serde_json::to_string_pretty(&report) {
            Ok(out) => println!("{}", out),
            Err(err) => {
                eprintln!("error: cannot serialize report: {}", err);
                process::exit(1);
            }
        }
    } else {
        println!("{} = {}", source, value);
    }
}

// --- flatwalk paths ---

fn cmd_paths(expr: &str) {
    let program = match parse_expression(expr) {
        Ok(program) => program,
        Err(errors) => {
            flatwalk::diagnostic::render_diagnostics(&errors, "<expr>", expr);
            process::exit(1);
        }
    };

    match eval::paths(&program) {
        Ok(lines) => {
            for line in lines {
                println!("{}", line);
            }
        }
        Err(errors) => {
            flatwalk::diagnostic::render_diagnostics(&errors, "<expr>", expr);
            process::exit(1);
        }
    }
}
