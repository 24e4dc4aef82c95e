use std::{future::Future, sync::Arc};

use tracing::warn;

use crate::domain::{
    catalog::ReferenceData, common::entities::app_errors::CoreError,
    goal::ports::{GoalRepository, IntakeLedgerRepository},
    history::ports::HistoryRepository, profile::ports::ProfileRepository,
};

#[derive(Clone)]
pub struct Service<P, G, L, H>
where
    P: ProfileRepository,
    G: GoalRepository,
    L: IntakeLedgerRepository,
    H: HistoryRepository,
{
    pub(crate) profile_repository: P,
    pub(crate) goal_repository: G,
    pub(crate) intake_repository: L,
    pub(crate) history_repository: H,
    pub(crate) reference_data: Arc<ReferenceData>,
}

impl<P, G, L, H> Service<P, G, L, H>
where
    P: ProfileRepository,
    G: GoalRepository,
    L: IntakeLedgerRepository,
    H: HistoryRepository,
{
    pub fn new(
        profile_repository: P,
        goal_repository: G,
        intake_repository: L,
        history_repository: H,
        reference_data: Arc<ReferenceData>,
    ) -> Self {
        Self {
            profile_repository,
            goal_repository,
            intake_repository,
            history_repository,
            reference_data,
        }
    }

    pub fn reference_data(&self) -> &ReferenceData {
        &self.reference_data
    }
}

/// Awaits a store read. Absent records and read failures both yield the
/// fallback; failures are logged.
pub(crate) async fn load_or_else<T, F, D>(what: &str, load: F, fallback: D) -> T
where
    F: Future<Output = Result<Option<T>, CoreError>>,
    D: FnOnce() -> T,
{
    match load.await {
        Ok(Some(value)) => value,
        Ok(None) => fallback(),
        Err(e) => {
            warn!(error = %e, "failed to load {}, using defaults", what);
            fallback()
        }
    }
}

/// A record read ahead of a mutation. `unreadable` is set when the store
/// failed to read it, so `value` holds the fallback and must not replace the
/// stored copy.
pub(crate) struct Loaded<T> {
    pub value: T,
    pub unreadable: bool,
}

/// Like [`load_or_else`], but remembers whether the fallback stands in for a
/// record that exists and could not be read.
pub(crate) async fn load_for_update<T, F, D>(what: &str, load: F, fallback: D) -> Loaded<T>
where
    F: Future<Output = Result<Option<T>, CoreError>>,
    D: FnOnce() -> T,
{
    match load.await {
        Ok(Some(value)) => Loaded {
            value,
            unreadable: false,
        },
        Ok(None) => Loaded {
            value: fallback(),
            unreadable: false,
        },
        Err(e) => {
            warn!(error = %e, "failed to load {}, changes will not be saved", what);
            Loaded {
                value: fallback(),
                unreadable: true,
            }
        }
    }
}

impl<T> Loaded<T> {
    /// Persists through `save` unless the stored copy was unreadable, in
    /// which case the file is left as it is for manual recovery.
    pub(crate) async fn save<F>(&self, what: &str, save: F)
    where
        F: Future<Output = Result<(), CoreError>>,
    {
        if self.unreadable {
            warn!("stored {} is unreadable, keeping this change in memory only", what);
            return;
        }
        persist(what, save).await;
    }
}

/// Awaits a store write. A failed write is logged and swallowed so the
/// caller keeps its in-memory result.
pub(crate) async fn persist<F>(what: &str, save: F)
where
    F: Future<Output = Result<(), CoreError>>,
{
    if let Err(e) = save.await {
        warn!(error = %e, "failed to save {}", what);
    }
}
