use std::{fs::read_to_string, path::PathBuf, process::ExitCode, time::Instant};

use clap::Parser;
use indentlex::{format_error, lexer::{lexer::tokenize, tokens::render}};
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

/// Prints the token stream of a source file, one `KIND<TAB>text` per line.
#[derive(Debug, Parser)]
#[command(name = "indentlex", about = "Tokenize an indentation-structured source file")]
struct Args {
    /// Source file to tokenize
    file: PathBuf,

    /// Log level used when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let file_contents = match read_to_string(&args.file) {
        Ok(contents) => contents,
        Err(err) => {
            error!(file = %args.file.display(), %err, "failed to read source file");
            return ExitCode::FAILURE;
        }
    };

    let file_name = args
        .file
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| args.file.to_string_lossy().into_owned());

    let start = Instant::now();

    match tokenize(&file_contents, Some(file_name)) {
        Ok(tokens) => {
            debug!(elapsed = ?start.elapsed(), "tokenized");
            print!("{}", render(&tokens));
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprint!("{}", format_error(&err, &file_contents));
            ExitCode::FAILURE
        }
    }
}
