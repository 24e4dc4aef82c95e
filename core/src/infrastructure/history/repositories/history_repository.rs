use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        history::{entities::ScanHistory, ports::HistoryRepository},
    },
    infrastructure::json_store::JsonStore,
};

const HISTORY_FILE: &str = "history.json";

#[derive(Debug, Clone)]
pub struct FileHistoryRepository {
    pub store: JsonStore,
}

impl FileHistoryRepository {
    pub fn new(store: JsonStore) -> Self {
        Self { store }
    }
}

impl HistoryRepository for FileHistoryRepository {
    async fn get_history(&self) -> Result<Option<ScanHistory>, CoreError> {
        self.store.read(HISTORY_FILE).await
    }

    async fn save_history(&self, history: ScanHistory) -> Result<(), CoreError> {
        self.store.write(HISTORY_FILE, &history).await
    }
}
