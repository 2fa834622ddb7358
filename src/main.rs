use clap::Parser as _;
use std::{
    fs::read_to_string,
    path::{Path, PathBuf},
    process::exit,
    time::Instant,
};

use llexer::{display_error, lexer::lexer::tokenize};
use thiserror::Error;

#[derive(clap::Parser, Debug)]
#[command(name = "llex", about = "Lexer for L-code")]
struct Args {
    /// Path to file with L-code
    input: PathBuf,

    /// Only print the tokens, without the banner and timings
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

fn read_source(path: &Path) -> Result<String, CliError> {
    Ok(read_to_string(path)?)
}

fn main() {
    let args = Args::parse();

    let file_contents = match read_source(&args.input) {
        Ok(contents) => contents,
        Err(err) => {
            println!("Something went wrong:");
            println!("     {}", err);
            exit(1);
        }
    };

    let start = Instant::now();
    let tokens = tokenize(file_contents.clone());

    let tokens = match tokens {
        Ok(tokens) => tokens,
        Err(error) => {
            display_error(&error, &args.input.to_string_lossy(), &file_contents);
            exit(1);
        }
    };

    if !args.quiet {
        eprintln!("Tokenized in {:?}", start.elapsed());
        println!("----Code successfully parsed----");
    }

    for token in &tokens {
        println!("{}", token);
    }
}
