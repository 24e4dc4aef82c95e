use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{
    common::entities::app_errors::CoreError,
    history::value_objects::{HistoryStats, ImportSummary},
    product::entities::ProductRecord,
};

pub const MAX_HISTORY: usize = 100;
pub const DEFAULT_RECENT_LIMIT: usize = 10;
const STATS_RECENT_SCANS: usize = 5;
const RECENT_ACTIVITY_DAYS: i64 = 7;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct HistoryEntry {
    pub barcode: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub brand: String,
    #[serde(default)]
    pub health_score: Option<u8>,
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl HistoryEntry {
    pub fn from_product(product: &ProductRecord, health_score: u8, timestamp: DateTime<Utc>) -> Self {
        Self {
            barcode: product.barcode.clone(),
            name: product.name.clone(),
            brand: product.brand.clone(),
            health_score: Some(health_score),
            timestamp,
            image: product.image.clone(),
        }
    }

    fn matches(&self, lowered_query: &str, query: &str) -> bool {
        self.name.to_lowercase().contains(lowered_query)
            || self.brand.to_lowercase().contains(lowered_query)
            || self.barcode.contains(query)
    }
}

/// Scanned products, newest first, unique by barcode and capped at
/// [`MAX_HISTORY`] entries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScanHistory {
    pub entries: Vec<HistoryEntry>,
}

impl ScanHistory {
    pub fn new(entries: Vec<HistoryEntry>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// A rescanned barcode keeps its position; new barcodes go to the front.
    pub fn record(&mut self, entry: HistoryEntry) {
        match self
            .entries
            .iter_mut()
            .find(|existing| existing.barcode == entry.barcode)
        {
            Some(existing) => *existing = entry,
            None => self.entries.insert(0, entry),
        }
        self.entries.truncate(MAX_HISTORY);
    }

    pub fn recent(&self, limit: usize) -> &[HistoryEntry] {
        &self.entries[..limit.min(self.entries.len())]
    }

    /// Case-insensitive over name and brand, exact substring over barcode.
    pub fn search(&self, query: &str) -> Vec<HistoryEntry> {
        let lowered = query.to_lowercase();
        self.entries
            .iter()
            .filter(|entry| entry.matches(&lowered, query))
            .cloned()
            .collect()
    }

    pub fn remove(&mut self, barcode: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.barcode != barcode);
        self.entries.len() != before
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn stats(&self, now: DateTime<Utc>) -> HistoryStats {
        if self.entries.is_empty() {
            return HistoryStats::default();
        }

        let total = self.entries.len();
        let score_sum: u32 = self
            .entries
            .iter()
            .map(|entry| u32::from(entry.health_score.unwrap_or(0)))
            .sum();
        let since = now - Duration::days(RECENT_ACTIVITY_DAYS);

        HistoryStats {
            total_scans: total,
            avg_health_score: (f64::from(score_sum) / total as f64).round() as u8,
            recent_activity: self
                .entries
                .iter()
                .filter(|entry| entry.timestamp >= since)
                .count(),
            recent_scans: self.recent(STATS_RECENT_SCANS).to_vec(),
        }
    }

    /// Merges `imported` over the current entries. On a barcode clash the
    /// first imported entry wins. The result is re-sorted newest first.
    pub fn import(&mut self, imported: Vec<HistoryEntry>) -> Result<ImportSummary, CoreError> {
        if let Some(entry) = imported.iter().find(|e| e.barcode.trim().is_empty()) {
            return Err(CoreError::InvalidHistoryEntry(format!(
                "entry '{}' has no barcode",
                entry.name
            )));
        }

        let count = imported.len();
        let mut merged: Vec<HistoryEntry> = Vec::with_capacity(count + self.entries.len());
        for entry in imported.into_iter().chain(self.entries.drain(..)) {
            if !merged.iter().any(|e| e.barcode == entry.barcode) {
                merged.push(entry);
            }
        }

        merged.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        merged.truncate(MAX_HISTORY);
        self.entries = merged;

        Ok(ImportSummary {
            imported: count,
            total: self.entries.len(),
        })
    }
}
