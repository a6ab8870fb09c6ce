use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{ExpenseCategory, ExpenseSet, IncomeProfile, SavingsMode, SavingsTarget};

/// Everything one evaluation derives from the raw inputs. Computed once per
/// submission and never mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanResult {
    pub mode: SavingsMode,
    /// Earnings over the days already worked.
    pub income: Decimal,
    pub expenses_total: Decimal,
    /// Income diverted to savings under `mode`.
    pub savings: Decimal,
    /// Income remaining after expenses and savings.
    pub account_money: Decimal,
    /// Non-negative gap between the target and `account_money`.
    pub shortfall: Decimal,
    /// Further days of work, at current pay, needed to close the shortfall.
    pub days_needed: Decimal,
    pub max_category: ExpenseCategory,
    pub max_category_value: Decimal,
}

/// A finalized plan ready to persist (no id or timestamp yet).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPlanRecord {
    pub pay_per_hour: Decimal,
    pub hours_per_day: Decimal,
    pub days_worked: u32,
    pub target_savings: Decimal,
    pub timeline_days: u32,
    pub expenses: ExpenseSet,
    pub savings_mode: SavingsMode,
    pub account_money: Decimal,
    pub days_needed: Decimal,
    pub max_category: ExpenseCategory,
    pub max_category_value: Decimal,
}

impl NewPlanRecord {
    /// Pairs the raw inputs with their evaluation into the row shape the
    /// store persists verbatim.
    pub fn from_evaluation(
        income: &IncomeProfile,
        target: &SavingsTarget,
        expenses: &ExpenseSet,
        result: &PlanResult,
    ) -> Self {
        Self {
            pay_per_hour: income.pay_per_hour,
            hours_per_day: income.hours_per_day,
            days_worked: income.days_worked,
            target_savings: target.amount,
            timeline_days: target.timeline_days,
            expenses: *expenses,
            savings_mode: result.mode,
            account_money: result.account_money,
            days_needed: result.days_needed,
            max_category: result.max_category,
            max_category_value: result.max_category_value,
        }
    }
}

/// A stored plan as read back from the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanRecord {
    pub id: i64,
    pub created_at: DateTime<Utc>,
    pub pay_per_hour: Decimal,
    pub hours_per_day: Decimal,
    pub days_worked: u32,
    pub target_savings: Decimal,
    pub timeline_days: u32,
    pub expenses: ExpenseSet,
    pub savings_mode: SavingsMode,
    pub account_money: Decimal,
    pub days_needed: Decimal,
    pub max_category: ExpenseCategory,
    pub max_category_value: Decimal,
}
