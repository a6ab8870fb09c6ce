use async_trait::async_trait;
use thiserror::Error;

use crate::models::{NewPlanRecord, PlanRecord};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("Record not found")]
    NotFound,

    #[error("Database error: {0}")]
    Database(String),

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Persistence boundary for finalized plans.
///
/// The store is append-only: rows are written once at evaluation time and
/// never updated or deleted. A failed `append` is fatal for that submission
/// only; callers surface it and move on, nothing retries or compensates.
#[async_trait]
pub trait PlanStore: Send + Sync {
    /// Persist a finalized plan. The store stamps the row's timestamp at
    /// write time and returns the stored row.
    async fn append(&self, record: NewPlanRecord) -> Result<PlanRecord, StoreError>;

    async fn get(&self, id: i64) -> Result<PlanRecord, StoreError>;

    /// Every stored plan, newest first.
    async fn list(&self) -> Result<Vec<PlanRecord>, StoreError>;
}
