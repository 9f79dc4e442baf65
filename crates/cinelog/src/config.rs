//! Daemon configuration
//!
//! All settings come from command-line flags for now.

use clap::Parser;

/// Runtime settings for the cinelog daemon
#[derive(Debug, Clone, Parser)]
#[command(name = "cinelog")]
#[command(about = "Movie catalog JSON API daemon", long_about = None)]
pub struct Config {
    /// API server port
    #[arg(long, default_value_t = 4000)]
    pub port: u16,

    /// Operating environment (development|staging|production)
    #[arg(long, default_value = "development")]
    pub env: String,
}
