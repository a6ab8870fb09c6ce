use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A savings-rate tier. A fixed percentage of income is diverted to savings.
///
/// The declaration order (strictest first) is load-bearing for the
/// adjustment search, which only ever moves toward laxer tiers; [`ORDER`]
/// pins it as an explicit constant.
///
/// [`ORDER`]: SavingsMode::ORDER
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SavingsMode {
    High,
    Medium,
    Low,
    None,
}

impl SavingsMode {
    /// Every mode, strictest to laxest.
    pub const ORDER: [SavingsMode; 4] = [
        SavingsMode::High,
        SavingsMode::Medium,
        SavingsMode::Low,
        SavingsMode::None,
    ];

    /// Fraction of income diverted to savings under this mode.
    pub fn rate(&self) -> Decimal {
        match self {
            Self::High => Decimal::new(35, 2),
            Self::Medium => Decimal::new(15, 2),
            Self::Low => Decimal::new(5, 2),
            Self::None => Decimal::ZERO,
        }
    }

    /// Stable lowercase code used for persistence and CLI input.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
            Self::None => "none",
        }
    }

    /// Human-facing label with the rate spelled out.
    pub fn label(&self) -> &'static str {
        match self {
            Self::High => "High (35%)",
            Self::Medium => "Medium (15%)",
            Self::Low => "Low (5%)",
            Self::None => "None (0%)",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "high" => Some(Self::High),
            "medium" => Some(Self::Medium),
            "low" => Some(Self::Low),
            "none" => Some(Self::None),
            _ => None,
        }
    }

    /// Modes strictly after `self` in [`ORDER`], i.e. every laxer tier.
    /// Empty for [`SavingsMode::None`].
    ///
    /// [`ORDER`]: SavingsMode::ORDER
    pub fn laxer_modes(&self) -> &'static [SavingsMode] {
        let position = Self::ORDER
            .iter()
            .position(|mode| mode == self)
            .unwrap_or(Self::ORDER.len() - 1);
        &Self::ORDER[position + 1..]
    }
}
