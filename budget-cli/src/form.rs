//! Input boundary. Range rules are enforced here, once; the core receives
//! inputs it can trust. This is also the only place a savings-mode string
//! is ever parsed into the typed enum.

use rust_decimal::Decimal;

use budget_core::calculations::PlanInput;
use budget_core::{ExpenseSet, IncomeProfile, SavingsMode, SavingsTarget};

/// Raw submission as it arrives from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanForm {
    pub pay_per_hour: Decimal,
    pub hours_per_day: Decimal,
    pub days_worked: u32,
    pub target_savings: Decimal,
    pub timeline_days: u32,
    pub grocery: Decimal,
    pub rent: Decimal,
    pub mobile_bill: Decimal,
    pub social_spending: Decimal,
    pub travel: Decimal,
    pub additional_spend: Decimal,
    pub mode: SavingsMode,
}

impl PlanForm {
    /// Checks every range rule and builds the typed input, collecting all
    /// violations rather than stopping at the first.
    pub fn validate(&self) -> Result<PlanInput, Vec<String>> {
        let minimum_pay = Decimal::new(725, 2);
        let mut errors = Vec::new();

        if self.pay_per_hour < minimum_pay {
            errors.push(format!("Pay per hour must be at least {minimum_pay}"));
        }
        if self.hours_per_day < Decimal::ONE {
            errors.push("Hours per day must be at least 1".to_string());
        }
        if self.timeline_days < 1 {
            errors.push("Timeline must be at least 1 day".to_string());
        }
        if self.target_savings < Decimal::ZERO {
            errors.push("Target savings must not be negative".to_string());
        }
        for (name, amount) in [
            ("Grocery", self.grocery),
            ("Rent", self.rent),
            ("Mobile Bill", self.mobile_bill),
            ("Social Spending", self.social_spending),
            ("Travel", self.travel),
            ("Additional Spend", self.additional_spend),
        ] {
            if amount < Decimal::ZERO {
                errors.push(format!("{name} must not be negative"));
            }
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(PlanInput {
            income: IncomeProfile {
                pay_per_hour: self.pay_per_hour,
                hours_per_day: self.hours_per_day,
                days_worked: self.days_worked,
            },
            target: SavingsTarget {
                amount: self.target_savings,
                timeline_days: self.timeline_days,
            },
            expenses: ExpenseSet {
                grocery: self.grocery,
                rent: self.rent,
                mobile_bill: self.mobile_bill,
                social_spending: self.social_spending,
                travel: self.travel,
                additional_spend: self.additional_spend,
            },
            mode: self.mode,
        })
    }
}

/// Parser for the `--mode` flag.
pub fn parse_mode(s: &str) -> Result<SavingsMode, String> {
    SavingsMode::parse(&s.to_lowercase())
        .ok_or_else(|| format!("unknown savings mode '{s}' (expected high, medium, low or none)"))
}
