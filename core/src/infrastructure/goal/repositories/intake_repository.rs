use chrono::NaiveDate;
use tracing::warn;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        goal::{entities::DailyIntakeLedger, ports::IntakeLedgerRepository},
    },
    infrastructure::json_store::JsonStore,
};

fn ledger_file(date: NaiveDate) -> String {
    format!("intake/{}.json", date.format("%Y-%m-%d"))
}

/// One file per calendar day under `intake/`.
#[derive(Debug, Clone)]
pub struct FileIntakeLedgerRepository {
    pub store: JsonStore,
}

impl FileIntakeLedgerRepository {
    pub fn new(store: JsonStore) -> Self {
        Self { store }
    }
}

impl IntakeLedgerRepository for FileIntakeLedgerRepository {
    async fn get_ledger(&self, date: NaiveDate) -> Result<Option<DailyIntakeLedger>, CoreError> {
        let ledger: Option<DailyIntakeLedger> = self.store.read(&ledger_file(date)).await?;

        match ledger {
            Some(ledger) if ledger.date != date => {
                warn!(expected = %date, found = %ledger.date, "Ignoring ledger filed under the wrong day");
                Ok(None)
            }
            other => Ok(other),
        }
    }

    async fn save_ledger(&self, ledger: DailyIntakeLedger) -> Result<(), CoreError> {
        self.store.write(&ledger_file(ledger.date), &ledger).await
    }
}
