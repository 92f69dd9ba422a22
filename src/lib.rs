// Core modules
pub mod config;
pub mod data;
pub mod domain;
pub mod engine;
pub mod error;
pub mod utils;

// Re-export commonly used types outside of crate
pub use config::{ProtocolConfig, SONNE};
pub use data::{Collaborators, SnapshotSource};
pub use domain::DailyFeeResult;
pub use engine::FeeAdapter;
pub use error::{FeeError, FeeResult};

// CLI argument parsing
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Unix timestamp (seconds) whose UTC day is measured. Defaults to now.
    #[arg(long)]
    pub timestamp: Option<i64>,

    /// Chain snapshot (JSON) serving blocks, markets, prices, logs and gauge accounting
    #[arg(long)]
    pub fixture: PathBuf,

    /// Pretty-print the resulting record
    #[arg(long, default_value_t = false)]
    pub pretty: bool,
}
