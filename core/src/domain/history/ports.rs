use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    history::{
        entities::{HistoryEntry, ScanHistory},
        value_objects::{HistoryStats, ImportSummary, RecordScanInput},
    },
};

#[cfg_attr(test, mockall::automock)]
pub trait HistoryRepository: Send + Sync {
    fn get_history(&self) -> impl Future<Output = Result<Option<ScanHistory>, CoreError>> + Send;

    fn save_history(
        &self,
        history: ScanHistory,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}

pub trait HistoryService: Send + Sync {
    fn record_scan(
        &self,
        input: RecordScanInput,
    ) -> impl Future<Output = Result<HistoryEntry, CoreError>> + Send;

    fn recent_scans(
        &self,
        limit: usize,
    ) -> impl Future<Output = Result<Vec<HistoryEntry>, CoreError>> + Send;

    fn search_history(
        &self,
        query: String,
    ) -> impl Future<Output = Result<Vec<HistoryEntry>, CoreError>> + Send;

    /// Returns whether an entry with that barcode existed.
    fn remove_scan(&self, barcode: String) -> impl Future<Output = Result<bool, CoreError>> + Send;

    fn clear_history(&self) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn history_stats(&self) -> impl Future<Output = Result<HistoryStats, CoreError>> + Send;

    fn import_history(
        &self,
        entries: Vec<HistoryEntry>,
    ) -> impl Future<Output = Result<ImportSummary, CoreError>> + Send;

    fn export_history(&self) -> impl Future<Output = Result<Vec<HistoryEntry>, CoreError>> + Send;
}
