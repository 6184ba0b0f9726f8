use metrics_exporter_prometheus::PrometheusHandle;
use mood_tracker::assessment::{
    RestSubmissionStore, StoreError, Submission, SubmissionStore,
};
use mood_tracker::config::StoreConfig;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Keeps submissions in process memory; used when no remote store is set.
#[derive(Default, Clone)]
pub(crate) struct InMemorySubmissionStore {
    records: Arc<Mutex<Vec<Submission>>>,
}

impl InMemorySubmissionStore {
    pub(crate) fn records(&self) -> Vec<Submission> {
        self.records
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone()
    }
}

impl SubmissionStore for InMemorySubmissionStore {
    async fn insert(&self, submission: Submission) -> Result<(), StoreError> {
        self.records
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .push(submission);
        Ok(())
    }
}

pub(crate) enum ConfiguredStore {
    Remote(RestSubmissionStore),
    Memory(InMemorySubmissionStore),
}

impl ConfiguredStore {
    pub(crate) fn from_config(config: &StoreConfig) -> Result<Self, StoreError> {
        Ok(match RestSubmissionStore::from_config(config)? {
            Some(store) => Self::Remote(store),
            None => Self::Memory(InMemorySubmissionStore::default()),
        })
    }

    pub(crate) fn describe(&self) -> String {
        match self {
            ConfiguredStore::Remote(store) => store.endpoint().to_string(),
            ConfiguredStore::Memory(_) => "in-memory".to_string(),
        }
    }
}

impl SubmissionStore for ConfiguredStore {
    async fn insert(&self, submission: Submission) -> Result<(), StoreError> {
        match self {
            ConfiguredStore::Remote(store) => store.insert(submission).await,
            ConfiguredStore::Memory(store) => store.insert(submission).await,
        }
    }
}
