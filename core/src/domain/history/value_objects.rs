use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{history::entities::HistoryEntry, product::entities::ProductRecord};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct HistoryStats {
    pub total_scans: usize,
    pub avg_health_score: u8,
    /// Entries scanned within the last seven days.
    pub recent_activity: usize,
    pub recent_scans: Vec<HistoryEntry>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ImportSummary {
    pub imported: usize,
    pub total: usize,
}

#[derive(Debug, Clone)]
pub struct RecordScanInput {
    pub product: ProductRecord,
    pub health_score: u8,
}
