use std::io::{self, Write};

use clap::Parser;
use regex_extractor::input::acquire_text;
use regex_extractor::output::print_extraction;
use regex_extractor::{Extractor, ExtractorError};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Extract emails, URLs, phone numbers and more from text
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Log extraction details to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<(), ExtractorError> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let extractor = Extractor::new()?;

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let text = acquire_text(&mut reader, &mut out)?;
    info!(bytes = text.len(), "extracting");

    let extracted = extractor.extract(&text);
    print_extraction(&extracted, &mut out)?;
    out.flush()?;

    Ok(())
}
