//! Folds the calculator's numbers and the adjustment search's verdicts into
//! the structured result handed to the presenter and the store. All values
//! stay raw; formatting happens at the rendering layer.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calculations::adjustment::{AdjustmentOutcome, ModeAdjustmentSearch, ProblemKind};
use crate::calculations::planner::{InfeasibleTarget, PlanCalculator, PlanInput};
use crate::models::PlanResult;

/// Where the plan stands against its timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimelineStatus {
    /// No further days are needed. Carries the surplus over the target when
    /// there is one.
    AlreadyAchieved { surplus: Option<Decimal> },
    /// The timeline covers the projected days and the balance is positive.
    /// Carries the simplified extra-savings projection (account money times
    /// the spare days, not compounded) when positive.
    OnTrack { potential_extra: Option<Decimal> },
    /// The projection overruns the timeline by `extra_days`; the adjustment
    /// search ran against the shortfall.
    BehindSchedule {
        extra_days: Decimal,
        adjustment: AdjustmentOutcome,
    },
}

/// Fires independently of the timeline status whenever account money goes
/// negative; the adjustment search ran against the deficit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeficitAlert {
    /// Magnitude of the negative balance.
    pub deficit: Decimal,
    pub adjustment: AdjustmentOutcome,
}

/// The complete outcome of one submission.
///
/// `timeline` is `None` in exactly one case: the projection fits the
/// timeline but the balance is negative, where only the deficit alert
/// speaks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanEvaluation {
    pub plan: PlanResult,
    pub timeline: Option<TimelineStatus>,
    pub deficit: Option<DeficitAlert>,
}

/// Runs the full pipeline for one submission: calculator, then the
/// adjustment search where a problem was detected, then the fold into a
/// [`PlanEvaluation`].
///
/// # Errors
///
/// Propagates [`InfeasibleTarget`] from the calculator; nothing may be
/// persisted in that case.
pub fn evaluate(input: &PlanInput) -> Result<PlanEvaluation, InfeasibleTarget> {
    let plan = PlanCalculator::new(input).calculate()?;

    let search = ModeAdjustmentSearch {
        income: plan.income,
        expenses_total: plan.expenses_total,
        target: input.target.amount,
        daily_income: input.income.daily_income(),
        timeline_days: input.target.timeline_days,
    };

    let timeline = timeline_status(&plan, input.target.amount, input.target.timeline_days, &search);
    let deficit = (plan.account_money < Decimal::ZERO).then(|| DeficitAlert {
        deficit: -plan.account_money,
        adjustment: search.run(plan.mode, ProblemKind::CashDeficit),
    });

    debug!(
        account_money = %plan.account_money,
        days_needed = %plan.days_needed,
        deficit = deficit.is_some(),
        "plan evaluated"
    );

    Ok(PlanEvaluation {
        plan,
        timeline,
        deficit,
    })
}

fn timeline_status(
    plan: &PlanResult,
    target: Decimal,
    timeline_days: u32,
    search: &ModeAdjustmentSearch,
) -> Option<TimelineStatus> {
    let timeline = Decimal::from(timeline_days);

    if plan.days_needed.is_zero() {
        let surplus = plan.account_money - target;
        return Some(TimelineStatus::AlreadyAchieved {
            surplus: (surplus > Decimal::ZERO).then_some(surplus),
        });
    }

    if timeline >= plan.days_needed {
        if plan.account_money >= Decimal::ZERO {
            let extra = plan.account_money * (timeline - plan.days_needed);
            return Some(TimelineStatus::OnTrack {
                potential_extra: (extra > Decimal::ZERO).then_some(extra),
            });
        }
        // Fits the timeline but the balance is negative: the deficit alert
        // carries the whole message.
        return None;
    }

    Some(TimelineStatus::BehindSchedule {
        extra_days: plan.days_needed - timeline,
        adjustment: search.run(plan.mode, ProblemKind::TimelineShortfall),
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use crate::calculations::adjustment::AttemptOutcome;
    use crate::models::{ExpenseSet, IncomeProfile, SavingsMode, SavingsTarget};

    use super::*;

    fn base_input() -> PlanInput {
        PlanInput {
            income: IncomeProfile {
                pay_per_hour: dec!(15.0),
                hours_per_day: dec!(8.0),
                days_worked: 20,
            },
            target: SavingsTarget {
                amount: dec!(5000.0),
                timeline_days: 90,
            },
            expenses: ExpenseSet {
                grocery: dec!(300.0),
                rent: dec!(1200.0),
                mobile_bill: dec!(80.0),
                social_spending: dec!(200.0),
                travel: dec!(150.0),
                additional_spend: dec!(100.0),
            },
            mode: SavingsMode::High,
        }
    }

    #[test]
    fn deficit_alert_resolves_to_medium_with_single_log_entry() {
        let evaluation = evaluate(&base_input()).unwrap();

        // Timeline fits (45.6 of 90 days) but the balance is negative, so
        // only the deficit alert speaks.
        assert_eq!(evaluation.timeline, None);

        let alert = evaluation.deficit.expect("balance is -470");
        assert_eq!(alert.deficit, dec!(470.00));
        assert_eq!(alert.adjustment.resolved, Some(SavingsMode::Medium));
        assert_eq!(alert.adjustment.log.len(), 1);
        assert_eq!(
            alert.adjustment.log[0].outcome,
            AttemptOutcome::AccountMoney(dec!(10.00))
        );
    }

    #[test]
    fn achieved_target_reports_surplus() {
        let mut input = base_input();
        input.expenses = ExpenseSet {
            grocery: dec!(200.0),
            rent: dec!(0),
            mobile_bill: dec!(0),
            social_spending: dec!(0),
            travel: dec!(0),
            additional_spend: dec!(0),
        };
        input.target.amount = dec!(1000.0);
        input.mode = SavingsMode::None;

        let evaluation = evaluate(&input).unwrap();

        assert_eq!(
            evaluation.timeline,
            Some(TimelineStatus::AlreadyAchieved {
                surplus: Some(dec!(1200.00)),
            })
        );
        assert_eq!(evaluation.deficit, None);
    }

    #[test]
    fn achieved_target_without_surplus_reports_none() {
        let mut input = base_input();
        input.expenses = ExpenseSet {
            grocery: dec!(1400.0),
            rent: dec!(0),
            mobile_bill: dec!(0),
            social_spending: dec!(0),
            travel: dec!(0),
            additional_spend: dec!(0),
        };
        input.target.amount = dec!(1000.0);
        input.mode = SavingsMode::None;

        let evaluation = evaluate(&input).unwrap();

        // Account money 1000 equals the target exactly.
        assert_eq!(
            evaluation.timeline,
            Some(TimelineStatus::AlreadyAchieved { surplus: None })
        );
    }

    #[test]
    fn on_track_reports_potential_extra_savings() {
        let mut input = base_input();
        input.mode = SavingsMode::Medium;

        let evaluation = evaluate(&input).unwrap();

        // Account money 10, days needed 41.583..., timeline 90.
        let Some(TimelineStatus::OnTrack { potential_extra }) = evaluation.timeline else {
            panic!("expected on-track, got {:?}", evaluation.timeline);
        };
        let expected = dec!(10.00) * (dec!(90) - dec!(4990) / dec!(120));
        assert_eq!(potential_extra, Some(expected));
        assert_eq!(evaluation.deficit, None);
    }

    #[test]
    fn behind_schedule_and_deficit_both_fire() {
        let mut input = base_input();
        input.target.timeline_days = 30;

        let evaluation = evaluate(&input).unwrap();

        let Some(TimelineStatus::BehindSchedule {
            extra_days,
            adjustment,
        }) = evaluation.timeline
        else {
            panic!("expected behind-schedule, got {:?}", evaluation.timeline);
        };
        // Days needed 45.583... against a 30-day timeline.
        assert_eq!(extra_days, dec!(5470) / dec!(120) - dec!(30));
        // No laxer mode closes a 5000 target in 30 days here.
        assert_eq!(adjustment.resolved, None);
        assert_eq!(adjustment.log.len(), 3);

        assert!(evaluation.deficit.is_some());
    }

    #[test]
    fn behind_schedule_can_resolve_through_a_laxer_mode() {
        let mut input = base_input();
        input.expenses = ExpenseSet {
            grocery: dec!(0),
            rent: dec!(0),
            mobile_bill: dec!(0),
            social_spending: dec!(0),
            travel: dec!(0),
            additional_spend: dec!(0),
        };
        input.target.timeline_days = 24;

        let evaluation = evaluate(&input).unwrap();

        let Some(TimelineStatus::BehindSchedule { adjustment, .. }) = evaluation.timeline else {
            panic!("expected behind-schedule, got {:?}", evaluation.timeline);
        };
        assert_eq!(adjustment.resolved, Some(SavingsMode::Low));
    }

    #[test]
    fn infeasible_target_propagates_before_anything_is_evaluated() {
        let mut input = base_input();
        input.income = IncomeProfile {
            pay_per_hour: dec!(7.25),
            hours_per_day: dec!(1.0),
            days_worked: 0,
        };
        input.target = SavingsTarget {
            amount: dec!(5000.0),
            timeline_days: 1,
        };

        let result = evaluate(&input);

        assert_eq!(
            result,
            Err(InfeasibleTarget {
                max_possible_income: dec!(7.25),
                target: dec!(5000.0),
            })
        );
    }
}
