use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Hourly-wage income for the evaluation period.
///
/// Inputs arrive validated at the boundary (pay ≥ 7.25, hours ≥ 1); the
/// derived products here are the only income figures the calculator uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomeProfile {
    pub pay_per_hour: Decimal,
    pub hours_per_day: Decimal,
    pub days_worked: u32,
}

impl IncomeProfile {
    /// Earnings for one worked day.
    pub fn daily_income(&self) -> Decimal {
        self.pay_per_hour * self.hours_per_day
    }

    /// Earnings over the days already worked.
    pub fn total_income(&self) -> Decimal {
        self.daily_income() * Decimal::from(self.days_worked)
    }
}
