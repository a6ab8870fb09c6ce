//! Mode adjustment search.
//!
//! When a plan shows a cash deficit or a timeline shortfall, the search
//! walks the savings modes strictly after the selected one in
//! [`SavingsMode::ORDER`] (laxer tiers only, never stricter) and returns
//! the first that resolves the problem, together with a trace holding
//! exactly one entry per candidate examined. Laxer savings is the only
//! lever that frees cash, and under this projection stricter savings never
//! shortens the days needed, so candidates above the current tier are not
//! visited.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::common::round_half_up;
use crate::models::SavingsMode;

/// Which failure condition the search is trying to resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProblemKind {
    /// Account money went negative.
    CashDeficit,
    /// Projected days-to-target exceed the allowed timeline.
    TimelineShortfall,
}

/// What a candidate mode would change, in raw numbers. Rendering is the
/// presenter's job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttemptOutcome {
    /// Account money recomputed under the candidate mode.
    AccountMoney(Decimal),
    /// Projected days-to-target under the candidate mode. `None` when there
    /// is no earning power, so the target can never be reached.
    DaysNeeded(Option<Decimal>),
}

/// One examined candidate: the mode, the savings it would divert, and the
/// quantity that decides whether it resolves the problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdjustmentAttempt {
    pub mode: SavingsMode,
    pub savings: Decimal,
    pub outcome: AttemptOutcome,
}

/// Search result: the first resolving mode (if any) and the full trace of
/// every candidate examined, in order, including the final one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdjustmentOutcome {
    pub resolved: Option<SavingsMode>,
    pub log: Vec<AdjustmentAttempt>,
}

/// The fixed quantities the candidates are re-evaluated against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeAdjustmentSearch {
    pub income: Decimal,
    pub expenses_total: Decimal,
    pub target: Decimal,
    /// One day's earnings (pay times hours).
    pub daily_income: Decimal,
    pub timeline_days: u32,
}

impl ModeAdjustmentSearch {
    /// Walks the candidates after `current` in declaration order and stops
    /// at the first that resolves `problem`. Deterministic and
    /// side-effect-free; with `current` the laxest mode the candidate list
    /// is empty and the result is `(None, [])`.
    pub fn run(
        &self,
        current: SavingsMode,
        problem: ProblemKind,
    ) -> AdjustmentOutcome {
        let mut log = Vec::new();

        for &candidate in current.laxer_modes() {
            let savings = round_half_up(self.income * candidate.rate());

            match problem {
                ProblemKind::CashDeficit => {
                    let account_money =
                        round_half_up(self.income - (self.expenses_total + savings));
                    log.push(AdjustmentAttempt {
                        mode: candidate,
                        savings,
                        outcome: AttemptOutcome::AccountMoney(account_money),
                    });
                    if account_money >= Decimal::ZERO {
                        return AdjustmentOutcome {
                            resolved: Some(candidate),
                            log,
                        };
                    }
                }
                ProblemKind::TimelineShortfall => {
                    let days_needed = self.projected_days(savings);
                    log.push(AdjustmentAttempt {
                        mode: candidate,
                        savings,
                        outcome: AttemptOutcome::DaysNeeded(days_needed),
                    });
                    if let Some(days) = days_needed
                        && days <= Decimal::from(self.timeline_days)
                    {
                        return AdjustmentOutcome {
                            resolved: Some(candidate),
                            log,
                        };
                    }
                }
            }
        }

        AdjustmentOutcome {
            resolved: None,
            log,
        }
    }

    /// Days to close the gap left after expenses and the candidate's
    /// savings. Unlike the calculator's shortfall this gap is not clamped
    /// at zero: a surplus yields negative days, which trivially fit any
    /// timeline.
    fn projected_days(
        &self,
        savings: Decimal,
    ) -> Option<Decimal> {
        let gap = self.target - (self.income - self.expenses_total - savings);
        if self.daily_income.is_zero() {
            None
        } else {
            Some(gap / self.daily_income)
        }
    }
}
