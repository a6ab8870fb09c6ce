use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// What the user wants to have saved, and by when.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavingsTarget {
    /// Amount to accumulate. Non-negative.
    pub amount: Decimal,
    /// Days allowed to get there. At least 1.
    pub timeline_days: u32,
}
