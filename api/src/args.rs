use std::path::PathBuf;

use clap::Parser;
use nutriscan_core::domain::common::{NutriScanConfig, ReferenceDataConfig, StorageConfig};

#[derive(Debug, Clone, Parser)]
#[command(name = "nutriscan-api", version, about = "NutriScan product analysis API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub storage: StorageArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    #[arg(long = "host", env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long = "port", env = "SERVER_PORT", default_value_t = 3333)]
    pub port: u16,

    #[arg(long = "root-path", env = "SERVER_ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long = "allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:5173"
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, clap::Args)]
pub struct StorageArgs {
    #[arg(long = "data-dir", env = "NUTRISCAN_DATA_DIR", default_value = "./data")]
    pub data_dir: PathBuf,

    /// JSON file replacing the built-in allergen, diet and ingredient catalogs.
    #[arg(long = "reference-data", env = "NUTRISCAN_REFERENCE_DATA")]
    pub reference_data: Option<PathBuf>,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LogArgs {
    #[arg(long = "log-filter", env = "RUST_LOG", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON", default_value_t = false)]
    pub json: bool,
}

impl From<Args> for NutriScanConfig {
    fn from(args: Args) -> Self {
        NutriScanConfig {
            storage: StorageConfig {
                data_dir: args.storage.data_dir,
            },
            reference_data: ReferenceDataConfig {
                path: args.storage.reference_data,
            },
        }
    }
}
