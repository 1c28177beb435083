//! Command line interface definitions

use clap::Parser;

/// Command line arguments for the IssueTrack server
#[derive(Parser, Debug)]
#[command(name = "issuetrack-server")]
#[command(version)]
#[command(about = "HTTP API server for the IssueTrack issue store")]
#[command(long_about = "
issuetrack-server exposes an in-memory issue store over an HTTP JSON API:
create, fetch, and partially update issues, plus a list endpoint with
combinable filters, per-field sorting, and pagination. The store seeds
itself with a small set of sample issues on startup.

Example usage:
  issuetrack-server                      # Listen on 0.0.0.0:8000
  issuetrack-server --port 3000          # Custom port
  issuetrack-server --host 127.0.0.1 -v  # Local only, verbose logs
")]
pub struct Cli {
    /// Address to bind
    #[arg(long, default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, default_value_t = 8000)]
    pub port: u16,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Parse arguments from the process environment
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
