use std::{path::PathBuf, sync::Arc};

use tracing::info;

use crate::{
    domain::{
        catalog::ReferenceData,
        common::{entities::app_errors::CoreError, services::Service, NutriScanConfig},
    },
    infrastructure::{
        goal::repositories::{
            goal_repository::FileGoalRepository, intake_repository::FileIntakeLedgerRepository,
        },
        history::repositories::history_repository::FileHistoryRepository,
        json_store::JsonStore,
        profile::repositories::profile_repository::FileProfileRepository,
    },
};

pub type NutriScanService = Service<
    FileProfileRepository,
    FileGoalRepository,
    FileIntakeLedgerRepository,
    FileHistoryRepository,
>;

pub async fn load_reference_data(path: Option<&PathBuf>) -> Result<ReferenceData, CoreError> {
    let Some(path) = path else {
        return Ok(ReferenceData::builtin());
    };

    let raw = tokio::fs::read_to_string(path).await.map_err(|e| {
        CoreError::InvalidReferenceData(format!("cannot read {}: {}", path.display(), e))
    })?;

    ReferenceData::from_json(&raw)
}

pub fn build_service(data_dir: PathBuf, reference_data: Arc<ReferenceData>) -> NutriScanService {
    let store = JsonStore::new(data_dir);

    Service::new(
        FileProfileRepository::new(store.clone()),
        FileGoalRepository::new(store.clone()),
        FileIntakeLedgerRepository::new(store.clone()),
        FileHistoryRepository::new(store),
        reference_data,
    )
}

pub async fn create_service(config: NutriScanConfig) -> Result<NutriScanService, CoreError> {
    let reference_data = load_reference_data(config.reference_data.path.as_ref()).await?;

    info!(
        data_dir = %config.storage.data_dir.display(),
        reference_data = %reference_data.version,
        allergens = reference_data.allergens.allergens.len(),
        diets = reference_data.diets.diets.len(),
        "NutriScan service ready"
    );

    Ok(build_service(
        config.storage.data_dir,
        Arc::new(reference_data),
    ))
}
