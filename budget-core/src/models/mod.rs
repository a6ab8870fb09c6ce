mod expenses;
mod income;
mod plan;
mod savings_mode;
mod target;

pub use expenses::{ExpenseCategory, ExpenseDecodeError, ExpenseSet};
pub use income::IncomeProfile;
pub use plan::{NewPlanRecord, PlanRecord, PlanResult};
pub use savings_mode::SavingsMode;
pub use target::SavingsTarget;
