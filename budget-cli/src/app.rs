//! Wires one submission through the pipeline: validate, evaluate, persist,
//! render. Each call runs to completion before the next submission; a
//! persistence failure is fatal for that submission only.

use anyhow::Context;
use tracing::info;

use budget_core::calculations::evaluate;
use budget_core::db::StoreRegistry;
use budget_core::{NewPlanRecord, PlanStore};
use budget_db_sqlite::SqlitePlanStoreFactory;

use crate::form::PlanForm;
use crate::presenter;

/// Registry with every backend this binary ships.
pub fn build_registry() -> StoreRegistry {
    let mut registry = StoreRegistry::new();
    registry.register(Box::new(SqlitePlanStoreFactory));
    registry
}

/// Evaluate one submission and persist the finalized plan.
///
/// An out-of-reach target renders a blocking alert and persists nothing;
/// that is a normal outcome, not an error. A store failure is.
pub async fn run_plan(
    store: &dyn PlanStore,
    form: &PlanForm,
) -> anyhow::Result<String> {
    let input = form
        .validate()
        .map_err(|errors| anyhow::anyhow!("invalid input: {}", errors.join("; ")))?;

    match evaluate(&input) {
        Err(report) => Ok(presenter::render_infeasible(&report)),
        Ok(evaluation) => {
            let record = NewPlanRecord::from_evaluation(
                &input.income,
                &input.target,
                &input.expenses,
                &evaluation.plan,
            );
            let saved = store
                .append(record)
                .await
                .context("failed to persist plan")?;
            info!(id = saved.id, "plan saved");
            Ok(presenter::render_evaluation(&evaluation))
        }
    }
}

/// Render every saved plan, newest first.
pub async fn run_history(store: &dyn PlanStore) -> anyhow::Result<String> {
    let plans = store.list().await.context("failed to load saved plans")?;
    Ok(presenter::render_history(&plans))
}
