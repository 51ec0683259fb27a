use std::fs;

use clap::Parser;
use petit::Interpreter;

/// petit is an interpreter for a small imperative language with variables,
/// arrays, conditionals, loops and an `afficher` print statement.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells petit to read a file instead of an inline program.
    #[arg(short, long)]
    file: bool,

    /// Caps every while loop at this many iterations instead of letting a
    /// non-terminating program spin forever.
    #[arg(short, long)]
    max_iterations: Option<u64>,

    contents: String,
}

fn main() {
    let args = Args::parse();

    let program = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            std::process::exit(1);
        })
    } else {
        args.contents
    };

    let mut interpreter = match args.max_iterations {
        Some(limit) => Interpreter::new().with_iteration_limit(limit),
        None => Interpreter::new(),
    };

    // Everything printed before a fault is still shown, then the error.
    let (outputs, error) = interpreter.run_partial(&program);

    for output in outputs {
        println!("{}", output.text);
    }

    if let Some(e) = error {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
