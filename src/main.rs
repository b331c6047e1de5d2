use std::fs;

use clap::Parser;
use polycalc::run;

/// polycalc is an interpreter for a small domain-specific language that
/// declares and evaluates integer polynomials.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells polycalc to look at a file instead of program text.
    #[arg(short, long)]
    file: bool,

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

    if let Err(e) = run(&program) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
