use std::str::FromStr;

use async_trait::async_trait;
use budget_core::{
    ExpenseCategory, ExpenseSet, NewPlanRecord, PlanRecord, PlanStore, SavingsMode, StoreError,
};
use chrono::{DateTime, Utc};
use sqlx::Row;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqliteRow};
use tracing::debug;

use crate::decimal::{decimal_to_f64, get_decimal};

/// [`PlanStore`] backed by a SQLite file (or an in-memory database).
pub struct SqlitePlanStore {
    pool: SqlitePool,
}

impl SqlitePlanStore {
    /// Open the database at `connection_string`: a bare file path
    /// (created if missing), a `sqlite:` URL, or `:memory:`.
    pub async fn new(connection_string: &str) -> Result<Self, StoreError> {
        let options = SqliteConnectOptions::from_str(connection_string)
            .map_err(|e| {
                StoreError::Configuration(format!(
                    "invalid connection string '{}': {}",
                    connection_string, e
                ))
            })?
            .create_if_missing(true);

        let pool = SqlitePool::connect_with(options)
            .await
            .map_err(|e| StoreError::Connection(e.to_string()))?;
        Ok(Self { pool })
    }

    pub fn new_with_pool(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Idempotent schema setup.
    pub async fn run_migrations(&self) -> Result<(), StoreError> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .map_err(|e| StoreError::Database(e.to_string()))?;
        Ok(())
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

const SELECT_COLUMNS: &str =
    "SELECT id, created_at, pay_per_hour, hours_per_day, days_worked, target_savings,
            timeline_days, expenses, savings_mode, account_money, days_needed,
            max_category, max_category_value
     FROM financial_plans";

fn get_days(
    row: &SqliteRow,
    column: &str,
) -> Result<u32, StoreError> {
    let value: i64 = row
        .try_get(column)
        .map_err(|e| StoreError::Database(format!("Failed to get '{}': {}", column, e)))?;
    u32::try_from(value)
        .map_err(|_| StoreError::Database(format!("Negative value in column '{}'", column)))
}

fn row_to_plan(row: &SqliteRow) -> Result<PlanRecord, StoreError> {
    let mode_str: String = row
        .try_get("savings_mode")
        .map_err(|e| StoreError::Database(e.to_string()))?;
    let savings_mode = SavingsMode::parse(&mode_str)
        .ok_or_else(|| StoreError::Database(format!("Invalid savings mode: {}", mode_str)))?;

    let category_str: String = row
        .try_get("max_category")
        .map_err(|e| StoreError::Database(e.to_string()))?;
    let max_category = ExpenseCategory::parse(&category_str)
        .ok_or_else(|| StoreError::Database(format!("Invalid expense category: {}", category_str)))?;

    let expenses_str: String = row
        .try_get("expenses")
        .map_err(|e| StoreError::Database(e.to_string()))?;
    let expenses = ExpenseSet::decode(&expenses_str)
        .map_err(|e| StoreError::Database(format!("Failed to decode expenses: {}", e)))?;

    Ok(PlanRecord {
        id: row
            .try_get("id")
            .map_err(|e| StoreError::Database(e.to_string()))?,
        created_at: row
            .try_get::<DateTime<Utc>, _>("created_at")
            .map_err(|e| StoreError::Database(format!("Failed to get created_at: {}", e)))?,
        pay_per_hour: get_decimal(row, "pay_per_hour")?,
        hours_per_day: get_decimal(row, "hours_per_day")?,
        days_worked: get_days(row, "days_worked")?,
        target_savings: get_decimal(row, "target_savings")?,
        timeline_days: get_days(row, "timeline_days")?,
        expenses,
        savings_mode,
        account_money: get_decimal(row, "account_money")?,
        days_needed: get_decimal(row, "days_needed")?,
        max_category,
        max_category_value: get_decimal(row, "max_category_value")?,
    })
}

#[async_trait]
impl PlanStore for SqlitePlanStore {
    async fn append(
        &self,
        record: NewPlanRecord,
    ) -> Result<PlanRecord, StoreError> {
        let now = Utc::now();

        let result = sqlx::query(
            "INSERT INTO financial_plans (
                created_at, pay_per_hour, hours_per_day, days_worked, target_savings,
                timeline_days, expenses, savings_mode, account_money, days_needed,
                max_category, max_category_value
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(now)
        .bind(decimal_to_f64(record.pay_per_hour))
        .bind(decimal_to_f64(record.hours_per_day))
        .bind(i64::from(record.days_worked))
        .bind(decimal_to_f64(record.target_savings))
        .bind(i64::from(record.timeline_days))
        .bind(record.expenses.encode())
        .bind(record.savings_mode.as_str())
        .bind(decimal_to_f64(record.account_money))
        .bind(decimal_to_f64(record.days_needed))
        .bind(record.max_category.as_str())
        .bind(decimal_to_f64(record.max_category_value))
        .execute(&self.pool)
        .await
        .map_err(|e| StoreError::Database(e.to_string()))?;

        let id = result.last_insert_rowid();
        debug!(id, "plan appended");
        self.get(id).await
    }

    async fn get(
        &self,
        id: i64,
    ) -> Result<PlanRecord, StoreError> {
        let row = sqlx::query(&format!("{} WHERE id = ?", SELECT_COLUMNS))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| StoreError::Database(e.to_string()))?
            .ok_or(StoreError::NotFound)?;

        row_to_plan(&row)
    }

    async fn list(&self) -> Result<Vec<PlanRecord>, StoreError> {
        let rows = sqlx::query(&format!(
            "{} ORDER BY created_at DESC, id DESC",
            SELECT_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| StoreError::Database(e.to_string()))?;

        rows.iter().map(row_to_plan).collect()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;
    use sqlx::sqlite::SqlitePoolOptions;

    use super::*;

    async fn setup_test_store() -> SqlitePlanStore {
        let pool = SqlitePoolOptions::new()
            .connect("sqlite::memory:")
            .await
            .expect("Failed to create in-memory database");

        let store = SqlitePlanStore::new_with_pool(pool);
        store
            .run_migrations()
            .await
            .expect("Failed to run migrations");
        store
    }

    fn sample_record() -> NewPlanRecord {
        NewPlanRecord {
            pay_per_hour: dec!(15.0),
            hours_per_day: dec!(8.0),
            days_worked: 20,
            target_savings: dec!(5000.0),
            timeline_days: 90,
            expenses: ExpenseSet {
                grocery: dec!(300.00),
                rent: dec!(1200.00),
                mobile_bill: dec!(80.00),
                social_spending: dec!(200.00),
                travel: dec!(150.00),
                additional_spend: dec!(100.00),
            },
            savings_mode: SavingsMode::High,
            account_money: dec!(-470.00),
            days_needed: dec!(45.58),
            max_category: ExpenseCategory::Rent,
            max_category_value: dec!(1200.00),
        }
    }

    #[tokio::test]
    async fn append_and_get_round_trip() {
        let store = setup_test_store().await;

        let created = store
            .append(sample_record())
            .await
            .expect("Should append plan");

        assert!(created.id > 0);
        assert_eq!(created.pay_per_hour, dec!(15.0));
        assert_eq!(created.hours_per_day, dec!(8.0));
        assert_eq!(created.days_worked, 20);
        assert_eq!(created.target_savings, dec!(5000.0));
        assert_eq!(created.timeline_days, 90);
        assert_eq!(created.expenses, sample_record().expenses);
        assert_eq!(created.savings_mode, SavingsMode::High);
        assert_eq!(created.account_money, dec!(-470.00));
        assert_eq!(created.days_needed, dec!(45.58));
        assert_eq!(created.max_category, ExpenseCategory::Rent);
        assert_eq!(created.max_category_value, dec!(1200.00));

        let fetched = store.get(created.id).await.expect("Should fetch plan");
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn get_unknown_id_returns_not_found() {
        let store = setup_test_store().await;

        let result = store.get(99999).await;

        assert!(matches!(result, Err(StoreError::NotFound)));
    }

    #[tokio::test]
    async fn list_returns_newest_first() {
        let store = setup_test_store().await;

        let first = store.append(sample_record()).await.expect("append");
        let mut second_record = sample_record();
        second_record.savings_mode = SavingsMode::Medium;
        let second = store.append(second_record).await.expect("append");

        let all = store.list().await.expect("Should list plans");

        assert_eq!(all.len(), 2);
        assert_eq!(all[0].id, second.id);
        assert_eq!(all[0].savings_mode, SavingsMode::Medium);
        assert_eq!(all[1].id, first.id);
    }

    #[tokio::test]
    async fn list_on_empty_store_is_empty() {
        let store = setup_test_store().await;

        let all = store.list().await.expect("Should list plans");

        assert!(all.is_empty());
    }

    #[tokio::test]
    async fn migrations_are_idempotent() {
        let store = setup_test_store().await;

        store
            .run_migrations()
            .await
            .expect("Second migration run should be a no-op");

        store.append(sample_record()).await.expect("append");
        assert_eq!(store.list().await.expect("list").len(), 1);
    }

    #[tokio::test]
    async fn expense_text_survives_the_round_trip() {
        let store = setup_test_store().await;

        let created = store.append(sample_record()).await.expect("append");

        let raw: String = sqlx::query_scalar("SELECT expenses FROM financial_plans WHERE id = ?")
            .bind(created.id)
            .fetch_one(store.pool())
            .await
            .expect("Should read raw expenses text");

        assert_eq!(ExpenseSet::decode(&raw), Ok(sample_record().expenses));
    }
}
