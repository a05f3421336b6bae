use crate::runner::SourcePaths;
use clap::Parser;
use std::path::PathBuf;

/// Replay rental store commands against a movie catalog and account roster
#[derive(Parser, Debug)]
#[command(name = "rental-store")]
#[command(about = "Replay rental store commands against a movie catalog", long_about = None)]
pub struct CliArgs {
    /// Catalog source, one comma-delimited movie per line
    #[arg(
        long = "catalog",
        value_name = "PATH",
        default_value = "data4movies.txt",
        help = "Path to the movie catalog file"
    )]
    pub catalog: PathBuf,

    /// Account source, one `id last first` record per line
    #[arg(
        long = "accounts",
        value_name = "PATH",
        default_value = "data4customers.txt",
        help = "Path to the account roster file"
    )]
    pub accounts: PathBuf,

    /// Command source, one command per line
    #[arg(
        long = "commands",
        value_name = "PATH",
        default_value = "data4commands.txt",
        help = "Path to the command file"
    )]
    pub commands: PathBuf,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl CliArgs {
    /// Collect the three source paths for the batch runner
    pub fn to_source_paths(&self) -> SourcePaths {
        SourcePaths {
            catalog: self.catalog.clone(),
            accounts: self.accounts.clone(),
            commands: self.commands.clone(),
        }
    }
}
