pub mod calculations;
pub mod db;
pub mod models;

pub use db::repository::{PlanStore, StoreError};
pub use models::*;
