use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Fixed spending categories. [`ALL`] fixes the enumeration order used for
/// iteration, tie-breaking, and the persisted text encoding.
///
/// [`ALL`]: ExpenseCategory::ALL
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExpenseCategory {
    Grocery,
    Rent,
    MobileBill,
    SocialSpending,
    Travel,
    AdditionalSpend,
}

impl ExpenseCategory {
    pub const ALL: [ExpenseCategory; 6] = [
        ExpenseCategory::Grocery,
        ExpenseCategory::Rent,
        ExpenseCategory::MobileBill,
        ExpenseCategory::SocialSpending,
        ExpenseCategory::Travel,
        ExpenseCategory::AdditionalSpend,
    ];

    /// Stable display/persistence name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Grocery => "Grocery",
            Self::Rent => "Rent",
            Self::MobileBill => "Mobile Bill",
            Self::SocialSpending => "Social Spending",
            Self::Travel => "Travel",
            Self::AdditionalSpend => "Additional Spend",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Grocery" => Some(Self::Grocery),
            "Rent" => Some(Self::Rent),
            "Mobile Bill" => Some(Self::MobileBill),
            "Social Spending" => Some(Self::SocialSpending),
            "Travel" => Some(Self::Travel),
            "Additional Spend" => Some(Self::AdditionalSpend),
            _ => None,
        }
    }
}

/// Errors decoding the persisted `Category=amount;...` expense text.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExpenseDecodeError {
    #[error("malformed expense pair '{0}'")]
    MalformedPair(String),

    #[error("unknown expense category '{0}'")]
    UnknownCategory(String),

    #[error("invalid amount '{1}' for category '{0}'")]
    InvalidAmount(&'static str, String),

    #[error("duplicate expense category '{0}'")]
    DuplicateCategory(&'static str),

    #[error("missing expense category '{0}'")]
    MissingCategory(&'static str),
}

/// One amount per category, every category present exactly once; the field
/// layout enforces the invariant by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseSet {
    pub grocery: Decimal,
    pub rent: Decimal,
    pub mobile_bill: Decimal,
    pub social_spending: Decimal,
    pub travel: Decimal,
    pub additional_spend: Decimal,
}

impl ExpenseSet {
    pub fn amount(&self, category: ExpenseCategory) -> Decimal {
        match category {
            ExpenseCategory::Grocery => self.grocery,
            ExpenseCategory::Rent => self.rent,
            ExpenseCategory::MobileBill => self.mobile_bill,
            ExpenseCategory::SocialSpending => self.social_spending,
            ExpenseCategory::Travel => self.travel,
            ExpenseCategory::AdditionalSpend => self.additional_spend,
        }
    }

    /// Category/amount pairs in [`ExpenseCategory::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (ExpenseCategory, Decimal)> + '_ {
        ExpenseCategory::ALL
            .into_iter()
            .map(|category| (category, self.amount(category)))
    }

    pub fn total(&self) -> Decimal {
        self.iter().map(|(_, amount)| amount).sum()
    }

    /// Category with the largest amount. Ties go to the first category in
    /// enumeration order.
    pub fn max_category(&self) -> (ExpenseCategory, Decimal) {
        let mut best = (ExpenseCategory::Grocery, self.grocery);
        for (category, amount) in self.iter().skip(1) {
            if amount > best.1 {
                best = (category, amount);
            }
        }
        best
    }

    /// Deterministic `Category=amount;...` text form, categories in
    /// enumeration order. [`decode`] reverses it exactly.
    ///
    /// [`decode`]: ExpenseSet::decode
    pub fn encode(&self) -> String {
        self.iter()
            .map(|(category, amount)| format!("{}={}", category.as_str(), amount))
            .collect::<Vec<_>>()
            .join(";")
    }

    pub fn decode(encoded: &str) -> Result<Self, ExpenseDecodeError> {
        let mut amounts: [Option<Decimal>; 6] = [None; 6];

        for pair in encoded.split(';').filter(|pair| !pair.is_empty()) {
            let (name, value) = pair
                .split_once('=')
                .ok_or_else(|| ExpenseDecodeError::MalformedPair(pair.to_string()))?;
            let category = ExpenseCategory::parse(name)
                .ok_or_else(|| ExpenseDecodeError::UnknownCategory(name.to_string()))?;
            let amount = value.parse::<Decimal>().map_err(|_| {
                ExpenseDecodeError::InvalidAmount(category.as_str(), value.to_string())
            })?;

            let slot = ExpenseCategory::ALL
                .iter()
                .position(|c| *c == category)
                .unwrap_or(0);
            if amounts[slot].replace(amount).is_some() {
                return Err(ExpenseDecodeError::DuplicateCategory(category.as_str()));
            }
        }

        for (slot, category) in ExpenseCategory::ALL.iter().enumerate() {
            if amounts[slot].is_none() {
                return Err(ExpenseDecodeError::MissingCategory(category.as_str()));
            }
        }

        Ok(Self {
            grocery: amounts[0].unwrap_or_default(),
            rent: amounts[1].unwrap_or_default(),
            mobile_bill: amounts[2].unwrap_or_default(),
            social_spending: amounts[3].unwrap_or_default(),
            travel: amounts[4].unwrap_or_default(),
            additional_spend: amounts[5].unwrap_or_default(),
        })
    }
}
