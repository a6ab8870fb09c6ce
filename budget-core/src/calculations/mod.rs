//! Financial plan evaluation.
//!
//! One synchronous pipeline per submission: raw inputs go through the plan
//! calculator, a mode adjustment search runs when a problem is detected, and
//! the narrative layer folds both into a structured result for rendering
//! and persistence.

pub mod adjustment;
pub mod common;
pub mod narrative;
pub mod planner;

pub use adjustment::{
    AdjustmentAttempt, AdjustmentOutcome, AttemptOutcome, ModeAdjustmentSearch, ProblemKind,
};
pub use narrative::{DeficitAlert, PlanEvaluation, TimelineStatus, evaluate};
pub use planner::{InfeasibleTarget, PlanCalculator, PlanInput};
