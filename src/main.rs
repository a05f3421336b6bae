//! Rental Store CLI
//!
//! Command-line interface for replaying rental store commands.
//!
//! # Usage
//!
//! ```bash
//! cargo run
//! cargo run -- --catalog data4movies.txt --accounts data4customers.txt --commands data4commands.txt
//! LOG=debug cargo run -- -v
//! ```
//!
//! The program loads the catalog and the account roster, replays every
//! command, and writes listings and per-command diagnostics to stdout.
//! Problems with the source files themselves are logged to stderr.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: A source file could not be opened, or stdout could not be written

use rental_store::cli;
use rental_store::runner::BatchRunner;
use rental_store::telemetry;
use std::process;

fn main() {
    // Parse command-line arguments using clap
    let args = cli::parse_args();
    telemetry::init(args.verbose);

    let paths = args.to_source_paths();
    let stdout = std::io::stdout();
    let mut output = stdout.lock();

    if let Err(e) = BatchRunner::new().run(&paths, &mut output) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
