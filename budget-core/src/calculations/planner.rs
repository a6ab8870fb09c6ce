//! Plan calculator: derives income, savings, leftover cash, and projected
//! days-to-target from the raw submission.
//!
//! The derivation, in order:
//!
//! | Step | Quantity |
//! |------|----------|
//! | 1    | Best-case income over days worked plus the full timeline |
//! | 2    | Income actually earned over the days worked |
//! | 3    | Savings diverted under the selected mode |
//! | 4    | Account money: income minus expenses and savings |
//! | 5    | Shortfall: non-negative gap between target and account money |
//! | 6    | Days needed: shortfall divided by one day's earnings |
//!
//! Step 1 is a feasibility gate: when even the best case cannot reach the
//! target, the evaluation stops before anything is computed or persisted.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use budget_core::calculations::{PlanCalculator, PlanInput};
//! use budget_core::{ExpenseCategory, ExpenseSet, IncomeProfile, SavingsMode, SavingsTarget};
//!
//! let input = PlanInput {
//!     income: IncomeProfile {
//!         pay_per_hour: dec!(15.0),
//!         hours_per_day: dec!(8.0),
//!         days_worked: 20,
//!     },
//!     target: SavingsTarget {
//!         amount: dec!(5000.0),
//!         timeline_days: 90,
//!     },
//!     expenses: ExpenseSet {
//!         grocery: dec!(300.0),
//!         rent: dec!(1200.0),
//!         mobile_bill: dec!(80.0),
//!         social_spending: dec!(200.0),
//!         travel: dec!(150.0),
//!         additional_spend: dec!(100.0),
//!     },
//!     mode: SavingsMode::High,
//! };
//!
//! let plan = PlanCalculator::new(&input).calculate().unwrap();
//!
//! assert_eq!(plan.income, dec!(2400.00));
//! assert_eq!(plan.savings, dec!(840.00));
//! assert_eq!(plan.account_money, dec!(-470.00));
//! assert_eq!(plan.max_category, ExpenseCategory::Rent);
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::calculations::common::{max, round_half_up};
use crate::models::{ExpenseSet, IncomeProfile, PlanResult, SavingsMode, SavingsTarget};

/// The raw submission, validated at the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanInput {
    pub income: IncomeProfile,
    pub target: SavingsTarget,
    pub expenses: ExpenseSet,
    pub mode: SavingsMode,
}

/// The target cannot be met even with zero expenses and zero savings
/// deduction within the worked-days-plus-timeline window. Terminal for the
/// evaluation: no plan is computed or persisted.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("target {target} is out of reach: best-case income is {max_possible_income}")]
pub struct InfeasibleTarget {
    pub max_possible_income: Decimal,
    pub target: Decimal,
}

impl InfeasibleTarget {
    /// Gap size above which the presenter adds a hint to adjust the
    /// timeline or income. Informational only.
    pub const ADVISORY_GAP_DOLLARS: i64 = 1000;

    pub fn gap(&self) -> Decimal {
        self.target - self.max_possible_income
    }

    pub fn suggests_adjustment(&self) -> bool {
        self.gap() > Decimal::from(Self::ADVISORY_GAP_DOLLARS)
    }
}

/// Pure calculator over one submission. No side effects; identical inputs
/// yield identical results.
#[derive(Debug, Clone)]
pub struct PlanCalculator<'a> {
    input: &'a PlanInput,
}

impl<'a> PlanCalculator<'a> {
    pub fn new(input: &'a PlanInput) -> Self {
        Self { input }
    }

    /// Runs the full derivation.
    ///
    /// # Errors
    ///
    /// Returns [`InfeasibleTarget`] when best-case income over the worked
    /// days plus the timeline falls short of the target.
    pub fn calculate(&self) -> Result<PlanResult, InfeasibleTarget> {
        let max_possible_income = self.max_possible_income();
        if max_possible_income < self.input.target.amount {
            return Err(InfeasibleTarget {
                max_possible_income,
                target: self.input.target.amount,
            });
        }

        let income = round_half_up(self.input.income.total_income());
        let expenses_total = self.input.expenses.total();
        let savings = self.savings(income);
        let account_money = self.account_money(income, expenses_total, savings);
        let shortfall = self.shortfall(account_money);
        let days_needed = self.days_needed(shortfall);
        let (max_category, max_category_value) = self.input.expenses.max_category();

        Ok(PlanResult {
            mode: self.input.mode,
            income,
            expenses_total,
            savings,
            account_money,
            shortfall,
            days_needed,
            max_category,
            max_category_value,
        })
    }

    /// Earnings over the days already worked plus a full further timeline
    /// of working days.
    fn max_possible_income(&self) -> Decimal {
        let further = self.input.income.daily_income()
            * Decimal::from(self.input.target.timeline_days);
        round_half_up(self.input.income.total_income() + further)
    }

    fn savings(
        &self,
        income: Decimal,
    ) -> Decimal {
        round_half_up(income * self.input.mode.rate())
    }

    fn account_money(
        &self,
        income: Decimal,
        expenses_total: Decimal,
        savings: Decimal,
    ) -> Decimal {
        round_half_up(income - (expenses_total + savings))
    }

    fn shortfall(
        &self,
        account_money: Decimal,
    ) -> Decimal {
        max(self.input.target.amount - account_money, Decimal::ZERO)
    }

    /// Further days of work needed to close the shortfall. Zero when there
    /// is no earning power (the divide-by-zero guard treats the degenerate
    /// case as already done).
    fn days_needed(
        &self,
        shortfall: Decimal,
    ) -> Decimal {
        let daily = self.input.income.daily_income();
        if daily.is_zero() {
            Decimal::ZERO
        } else {
            shortfall / daily
        }
    }
}
