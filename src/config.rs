//! CLI argument handling for the driver binary

use clap::Parser;

/// CLI argument parsing structure
#[derive(Parser)]
#[command(name = "funbox")]
#[command(about = "Headless driver for the funbox modifier controller")]
#[command(version)]
pub struct Cli {
    /// Funbox modifier to activate
    #[arg(short, long, default_value = "memory")]
    pub funbox: String,

    /// Number of words in the simulated test
    #[arg(short, long, default_value = "10")]
    pub words: usize,

    /// Language of the simulated test
    #[arg(short, long, default_value = "english")]
    pub language: String,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Parse configuration from command line arguments
    pub fn parse_args() -> Self {
        Parser::parse()
    }

    /// Get the appropriate log level based on the verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else {
            "info"
        }
    }
}
