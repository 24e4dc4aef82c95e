use tracing::{info, instrument};

use crate::domain::{
    common::{
        entities::app_errors::CoreError,
        generate_timestamp,
        services::{load_for_update, load_or_else, persist, Loaded, Service},
    },
    goal::ports::{GoalRepository, IntakeLedgerRepository},
    history::{
        entities::{HistoryEntry, ScanHistory},
        ports::{HistoryRepository, HistoryService},
        value_objects::{HistoryStats, ImportSummary, RecordScanInput},
    },
    profile::ports::ProfileRepository,
};

impl<P, G, L, H> Service<P, G, L, H>
where
    P: ProfileRepository,
    G: GoalRepository,
    L: IntakeLedgerRepository,
    H: HistoryRepository,
{
    async fn load_history(&self) -> ScanHistory {
        load_or_else(
            "scan history",
            self.history_repository.get_history(),
            ScanHistory::default,
        )
        .await
    }

    async fn load_history_for_update(&self) -> Loaded<ScanHistory> {
        load_for_update(
            "scan history",
            self.history_repository.get_history(),
            ScanHistory::default,
        )
        .await
    }

    async fn save_history(&self, history: &Loaded<ScanHistory>) {
        history
            .save(
                "scan history",
                self.history_repository.save_history(history.value.clone()),
            )
            .await;
    }
}

impl<P, G, L, H> HistoryService for Service<P, G, L, H>
where
    P: ProfileRepository,
    G: GoalRepository,
    L: IntakeLedgerRepository,
    H: HistoryRepository,
{
    #[instrument(skip(self, input), fields(barcode = %input.product.barcode))]
    async fn record_scan(&self, input: RecordScanInput) -> Result<HistoryEntry, CoreError> {
        let (now, _) = generate_timestamp();
        let entry = HistoryEntry::from_product(&input.product, input.health_score, now);

        let mut history = self.load_history_for_update().await;
        history.value.record(entry.clone());

        info!(total = history.value.len(), "scan recorded");
        self.save_history(&history).await;

        Ok(entry)
    }

    #[instrument(skip(self))]
    async fn recent_scans(&self, limit: usize) -> Result<Vec<HistoryEntry>, CoreError> {
        Ok(self.load_history().await.recent(limit).to_vec())
    }

    #[instrument(skip(self))]
    async fn search_history(&self, query: String) -> Result<Vec<HistoryEntry>, CoreError> {
        Ok(self.load_history().await.search(&query))
    }

    #[instrument(skip(self))]
    async fn remove_scan(&self, barcode: String) -> Result<bool, CoreError> {
        let mut history = self.load_history_for_update().await;
        let removed = history.value.remove(&barcode);

        if removed {
            info!(total = history.value.len(), "scan removed");
            self.save_history(&history).await;
        }

        Ok(removed)
    }

    #[instrument(skip(self))]
    async fn clear_history(&self) -> Result<(), CoreError> {
        info!("scan history cleared");
        persist(
            "scan history",
            self.history_repository.save_history(ScanHistory::default()),
        )
        .await;
        Ok(())
    }

    #[instrument(skip(self))]
    async fn history_stats(&self) -> Result<HistoryStats, CoreError> {
        let (now, _) = generate_timestamp();
        Ok(self.load_history().await.stats(now))
    }

    #[instrument(skip(self, entries), fields(count = entries.len()))]
    async fn import_history(&self, entries: Vec<HistoryEntry>) -> Result<ImportSummary, CoreError> {
        let mut history = self.load_history_for_update().await;
        let summary = history.value.import(entries)?;

        info!(imported = summary.imported, total = summary.total, "history imported");
        self.save_history(&history).await;

        Ok(summary)
    }

    #[instrument(skip(self))]
    async fn export_history(&self) -> Result<Vec<HistoryEntry>, CoreError> {
        Ok(self.load_history().await.entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        application::tests::{service_in, TestStore},
        domain::product::entities::ProductRecord,
    };

    fn product(barcode: &str, name: &str) -> ProductRecord {
        ProductRecord {
            barcode: barcode.to_string(),
            name: name.to_string(),
            brand: "Acme".to_string(),
            image: Some(format!("https://images.example.org/{}.jpg", barcode)),
            ..Default::default()
        }
    }

    async fn record(service: &crate::application::NutriScanService, barcode: &str, score: u8) {
        service
            .record_scan(RecordScanInput {
                product: product(barcode, &format!("Product {}", barcode)),
                health_score: score,
            })
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn records_survive_reload() {
        let store = TestStore::new();
        let service = service_in(&store);
        record(&service, "1", 80).await;
        record(&service, "2", 40).await;

        let reopened = service_in(&store);
        let recent = reopened.recent_scans(10).await.unwrap();
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].barcode, "2");
        assert_eq!(
            recent[1].image.as_deref(),
            Some("https://images.example.org/1.jpg")
        );

        let stats = reopened.history_stats().await.unwrap();
        assert_eq!(stats.total_scans, 2);
        assert_eq!(stats.avg_health_score, 60);
        assert_eq!(stats.recent_activity, 2);
    }

    #[tokio::test]
    async fn remove_search_and_clear() {
        let store = TestStore::new();
        let service = service_in(&store);
        record(&service, "111", 80).await;
        record(&service, "222", 40).await;

        assert_eq!(service.search_history("product 2".to_string()).await.unwrap().len(), 1);
        assert!(service.remove_scan("111".to_string()).await.unwrap());
        assert!(!service.remove_scan("111".to_string()).await.unwrap());
        assert_eq!(service.export_history().await.unwrap().len(), 1);

        service.clear_history().await.unwrap();
        assert!(service.export_history().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn import_merges_with_stored_history() {
        let store = TestStore::new();
        let service = service_in(&store);
        record(&service, "1", 80).await;

        let exported = service.export_history().await.unwrap();
        let other = TestStore::new();
        let target = service_in(&other);
        record(&target, "2", 30).await;

        let summary = target.import_history(exported).await.unwrap();

        assert_eq!(summary, ImportSummary { imported: 1, total: 2 });
        assert_eq!(target.export_history().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn corrupt_history_reads_as_empty() {
        let store = TestStore::new();
        store.write_raw("history.json", "[{\"barcode\": 12");

        assert!(service_in(&store).recent_scans(10).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn unreadable_history_is_not_overwritten() {
        let store = TestStore::new();
        let service = service_in(&store);
        record(&service, "1", 80).await;
        record(&service, "2", 40).await;

        let stored = std::fs::read_to_string(store.root.join("history.json")).unwrap();
        let truncated = &stored[..stored.len() - 5];
        store.write_raw("history.json", truncated);

        let entry = service
            .record_scan(RecordScanInput {
                product: product("3", "Product 3"),
                health_score: 55,
            })
            .await
            .unwrap();
        assert_eq!(entry.barcode, "3");
        assert!(!service.remove_scan("1".to_string()).await.unwrap());

        let after = std::fs::read_to_string(store.root.join("history.json")).unwrap();
        assert_eq!(after, truncated);
    }
}
