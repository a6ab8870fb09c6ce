use async_trait::async_trait;

use budget_core::db::{DbConfig, StoreFactory};
use budget_core::{PlanStore, StoreError};

use crate::repository::SqlitePlanStore;

/// [`StoreFactory`] for SQLite.
///
/// Register this with a [`budget_core::db::StoreRegistry`] to make the
/// `"sqlite"` backend available:
///
/// ```rust,no_run
/// use budget_core::db::StoreRegistry;
/// use budget_db_sqlite::SqlitePlanStoreFactory;
///
/// let mut registry = StoreRegistry::new();
/// registry.register(Box::new(SqlitePlanStoreFactory));
/// ```
pub struct SqlitePlanStoreFactory;

#[async_trait]
impl StoreFactory for SqlitePlanStoreFactory {
    fn backend_name(&self) -> &'static str {
        "sqlite"
    }

    /// Open the database described by `config.connection_string` and run
    /// the schema migration, so the returned store is ready for `append`.
    ///
    /// Accepted connection-string values:
    /// * A bare file path, e.g. `"plans.db"`, created if it does not exist.
    /// * `":memory:"`, an ephemeral in-memory database (useful for tests).
    async fn create(
        &self,
        config: &DbConfig,
    ) -> Result<Box<dyn PlanStore>, StoreError> {
        let store = SqlitePlanStore::new(&config.connection_string).await?;
        store.run_migrations().await?;
        Ok(Box::new(store))
    }
}
