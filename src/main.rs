//! isbnkit - ISBN validator and classifier

use std::process::ExitCode;

use clap::Parser;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use isbnkit::{Isbn, LinguisticArea};

/// Shown when no ISBN is given on the command line.
const DEMO_ISBNS: [&str; 2] = ["978-4-621-06605-8", "9784621066058"];

#[derive(Parser)]
#[command(name = "isbnkit")]
#[command(version, about = "Validate ISBNs and classify their registration group", long_about = None)]
#[command(after_help = "EXAMPLES:
    isbnkit 978-4-8443-3667-9       Validate an ISBN-13 and show its area
    isbnkit 4-10-109205-2           Convert an ISBN-10 and show its area
    isbnkit --json 9784844336679    Print the ISBN elements as JSON")]
struct Cli {
    /// ISBN-10 or ISBN-13, hyphens allowed
    #[arg(value_name = "ISBN")]
    isbns: Vec<String>,

    /// Print one JSON object per ISBN
    #[arg(long)]
    json: bool,

    /// Only report errors; the exit status tells whether all ISBNs were valid
    #[arg(short, long)]
    quiet: bool,

    /// Log rejected input and conversions to stderr (overridden by RUST_LOG)
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Serialize)]
struct Report<'a> {
    isbn: &'a Isbn,
    normalized: &'a str,
    prefix: &'a str,
    group: &'a str,
    publisher: &'a str,
    book_name: &'a str,
    check_digit: &'a str,
    area: LinguisticArea,
}

impl<'a> Report<'a> {
    fn new(isbn: &'a Isbn) -> Self {
        Self {
            isbn,
            normalized: isbn.normalized(),
            prefix: isbn.prefix(),
            group: isbn.group(),
            publisher: isbn.publisher(),
            book_name: isbn.book_name(),
            check_digit: isbn.check_digit(),
            area: isbn.linguistic_area(),
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let inputs: Vec<&str> = if cli.isbns.is_empty() {
        DEMO_ISBNS.to_vec()
    } else {
        cli.isbns.iter().map(String::as_str).collect()
    };

    let mut failed = false;
    for input in inputs {
        if let Err(e) = check(input, &cli) {
            eprintln!("error: {e}");
            failed = true;
        }
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn check(input: &str, cli: &Cli) -> Result<(), String> {
    let isbn = Isbn::of(input).map_err(|e| e.to_string())?;
    if cli.quiet {
        return Ok(());
    }

    if cli.json {
        let json = serde_json::to_string(&Report::new(&isbn)).map_err(|e| e.to_string())?;
        println!("{json}");
    } else {
        println!("{isbn}: {}", isbn.linguistic_area());
    }
    Ok(())
}

fn init_logging(verbose: bool) {
    let default = if verbose { "isbnkit=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
