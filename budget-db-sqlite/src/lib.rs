mod decimal;
mod factory;
mod repository;

pub use factory::SqlitePlanStoreFactory;
pub use repository::SqlitePlanStore;
