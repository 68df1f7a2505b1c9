use std::time::Duration;

use catalog_core::DEFAULT_BASE_URL;
use clap::Parser;

/// Command-line and environment settings for the viewer.
#[derive(Debug, Clone, Parser)]
#[command(name = "catalog-view", version, about = "Browse the product catalog in the terminal")]
pub struct Config {
    /// Catalog API base URL; the viewer requests `<base-url>/products`.
    #[arg(long, env = "CATALOG_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Give up on the catalog request after this many seconds.
    #[arg(long, env = "CATALOG_TIMEOUT_SECS", default_value_t = 10)]
    pub timeout_secs: u64,

    /// Print the list once and exit instead of reading commands.
    #[arg(long)]
    pub no_interactive: bool,

    /// Do not tint the availability line.
    #[arg(long)]
    pub no_color: bool,
}

impl Config {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
