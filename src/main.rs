use std::{fs, io};

use clap::Parser;
use parenval::{error::InterpreterError, get_result};

/// parenval evaluates programs written in a fully parenthesized integer
/// expression language with recursive functions.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells parenval to read the program from the file named by `contents`.
    #[arg(short, long, requires = "contents")]
    file: bool,

    /// Prints the cause of a syntax error, with its position, to stderr.
    #[arg(short, long)]
    explain: bool,

    /// The program, or a path with `--file`. Without it the program is read
    /// from stdin up to the first empty line.
    contents: Option<String>,
}

/// Reads lines from `input` until the first empty line or end of input.
fn read_until_blank_line(input: impl io::BufRead) -> io::Result<String> {
    let mut source = String::new();
    for line in input.lines() {
        let line = line?;
        if line.is_empty() {
            break;
        }
        source.push_str(&line);
        source.push('\n');
    }
    Ok(source)
}

fn main() {
    let args = Args::parse();

    let script = match args.contents {
        Some(path) if args.file => fs::read_to_string(&path).unwrap_or_else(|_| {
                                       eprintln!("Failed to read the input file '{path}'. Perhaps this file does not exist?");
                                       std::process::exit(1);
                                   }),
        Some(contents) => contents,
        None => read_until_blank_line(io::stdin().lock()).unwrap_or_else(|e| {
                    eprintln!("Failed to read the program from stdin: {e}");
                    std::process::exit(1);
                }),
    };

    match get_result(&script) {
        Ok(value) => println!("{value}"),
        Err(e) => {
            println!("{e}");
            eprintln!("{e}");
            if args.explain
               && let InterpreterError::Parse(cause) = &e
            {
                eprintln!("{cause}");
            }
        },
    }
}
