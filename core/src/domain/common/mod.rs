use std::path::PathBuf;

use chrono::{DateTime, Local, NaiveDate, Utc};
use uuid::{NoContext, Timestamp};

pub mod entities;
pub mod services;

#[derive(Clone, Debug)]
pub struct NutriScanConfig {
    pub storage: StorageConfig,
    pub reference_data: ReferenceDataConfig,
}

#[derive(Clone, Debug)]
pub struct StorageConfig {
    pub data_dir: PathBuf,
}

#[derive(Clone, Debug, Default)]
pub struct ReferenceDataConfig {
    /// JSON file replacing the built-in catalogs and default goals.
    pub path: Option<PathBuf>,
}

pub fn generate_timestamp() -> (DateTime<Utc>, Timestamp) {
    let now = Utc::now();
    let seconds = now.timestamp().try_into().unwrap_or(0);
    let timestamp = Timestamp::from_unix(NoContext, seconds, 0);

    (now, timestamp)
}

/// Local calendar day the intake ledger is keyed by.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

