//! Order Storage Config

use std::path::PathBuf;

use clap::Args;

/// Order storage settings.
#[derive(Debug, Args)]
pub struct StorageConfig {
    /// Path of the JSON file holding placed orders
    #[arg(long, env = "ORDERS_FILE", default_value = "data/orders.json")]
    pub orders_file: PathBuf,
}
