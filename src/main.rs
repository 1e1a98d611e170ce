use std::{fs, process::ExitCode};

use calc::{
    error::Error,
    interpreter::{
        evaluator::core::evaluate,
        lexer::tokenize,
        parser::core::{ParserOptions, parse_with},
        registry,
    },
};
use clap::{ArgAction, Parser};
use tracing::{Level, info};

/// calc evaluates arithmetic expressions such as `2*(3+sin(0))`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Treat the contents as a path and evaluate every non-blank line of that
    /// file.
    #[arg(short, long)]
    file: bool,

    /// Print the fully parenthesized syntax tree before each result.
    #[arg(short, long)]
    tree: bool,

    /// Let the power level also bind `/`, as older releases did.
    #[arg(long)]
    legacy_precedence: bool,

    /// List the available constants and functions, then exit.
    #[arg(short, long)]
    list: bool,

    /// Raise the log level; repeat for more detail.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// The expression, or a file path with `--file`.
    #[arg(required_unless_present = "list")]
    contents: Option<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let level = match args.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt().with_max_level(level)
                             .with_writer(std::io::stderr)
                             .init();

    if args.list {
        println!("constants: {}", registry::constant_names().join(", "));
        println!("functions: {}", registry::function_names().join(", "));
        return ExitCode::SUCCESS;
    }

    let contents = args.contents.unwrap_or_default();
    let script = if args.file {
        match fs::read_to_string(&contents) {
            Ok(script) => script,
            Err(e) => {
                eprintln!("Failed to read the input file '{contents}': {e}");
                return ExitCode::FAILURE;
            },
        }
    } else {
        contents
    };

    // A file is evaluated line by line; a command-line expression as a whole.
    let lines: Vec<&str> = if args.file {
        script.lines().map(str::trim).filter(|l| !l.is_empty()).collect()
    } else {
        vec![script.as_str()]
    };

    let options = ParserOptions { division_at_power_level: args.legacy_precedence };
    let mut failed = false;

    for line in lines {
        info!(line, "evaluating");
        match run_line(line, &options, args.tree) {
            Ok(value) => println!("{value}"),
            Err(e) => {
                eprintln!("{e}");
                failed = true;
            },
        }
    }

    if failed { ExitCode::FAILURE } else { ExitCode::SUCCESS }
}

/// Runs one line through the pipeline, printing its tree first if asked to.
fn run_line(line: &str, options: &ParserOptions, print_tree: bool) -> Result<f64, Error> {
    let tokens = tokenize(line)?;
    let program = parse_with(&tokens, options)?;
    if print_tree {
        println!("{program}");
    }
    Ok(evaluate(&program)?)
}
