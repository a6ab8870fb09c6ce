//! Rendering. The core hands over raw numbers and structured verdicts;
//! everything user-facing (currency, day counts, message wording) is
//! produced here.

use rust_decimal::Decimal;

use budget_core::PlanRecord;
use budget_core::calculations::common::round_half_up;
use budget_core::calculations::{
    AdjustmentAttempt, AttemptOutcome, DeficitAlert, InfeasibleTarget, PlanEvaluation,
    TimelineStatus,
};
use budget_core::models::PlanResult;

/// `$1,234.56` with thousands separators; negatives as `-$470.00`.
pub fn format_currency(value: Decimal) -> String {
    let rounded = round_half_up(value);
    let sign = if rounded < Decimal::ZERO { "-" } else { "" };
    let text = format!("{:.2}", rounded.abs());
    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), "00"));
    format!("{sign}${}.{frac_part}", group_thousands(int_part))
}

/// Day counts to one decimal place.
pub fn format_days(value: Decimal) -> String {
    format!("{value:.1}")
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

fn metric(
    label: &str,
    value: &str,
) -> String {
    format!("  {label:<16} {value}")
}

pub fn render_evaluation(evaluation: &PlanEvaluation) -> String {
    let plan = &evaluation.plan;
    let mut lines = vec![
        "Financial results".to_string(),
        metric("Total income", &format_currency(plan.income)),
        metric("Total expenses", &format_currency(plan.expenses_total)),
        metric("Savings amount", &format_currency(plan.savings)),
        metric("Account money", &format_currency(plan.account_money)),
        metric("Days to target", &format_days(plan.days_needed)),
        format!(
            "Most expensive category: {} ({})",
            plan.max_category.as_str(),
            format_currency(plan.max_category_value)
        ),
    ];

    if let Some(status) = &evaluation.timeline {
        lines.push(String::new());
        render_timeline(status, plan, &mut lines);
    }
    if let Some(alert) = &evaluation.deficit {
        lines.push(String::new());
        render_deficit(alert, plan, &mut lines);
    }

    lines.join("\n")
}

fn render_timeline(
    status: &TimelineStatus,
    plan: &PlanResult,
    lines: &mut Vec<String>,
) {
    match status {
        TimelineStatus::AlreadyAchieved { surplus } => {
            lines.push("Target already achieved!".to_string());
            if let Some(surplus) = surplus {
                lines.push(format!(
                    "Extra {} available for investments.",
                    format_currency(*surplus)
                ));
            }
        }
        TimelineStatus::OnTrack { potential_extra } => {
            lines.push("You are on track. Maintain the balance.".to_string());
            if let Some(extra) = potential_extra {
                lines.push(format!(
                    "Potential extra savings: {}.",
                    format_currency(*extra)
                ));
            }
        }
        TimelineStatus::BehindSchedule {
            extra_days,
            adjustment,
        } => {
            lines.push(format!(
                "Behind schedule: {} extra days needed beyond the set timeline.",
                format_days(*extra_days)
            ));
            for attempt in &adjustment.log {
                lines.push(attempt_line(attempt));
            }
            match adjustment.resolved {
                Some(mode) => {
                    lines.push(format!("Solution: switch to {} savings mode.", mode.label()));
                }
                None => {
                    lines.push(
                        "Even the laxest savings mode is not enough. Radical changes needed."
                            .to_string(),
                    );
                    lines.push(format!(
                        "Drastically reduce {} ({}).",
                        plan.max_category.as_str(),
                        format_currency(plan.max_category_value)
                    ));
                }
            }
        }
    }
}

fn render_deficit(
    alert: &DeficitAlert,
    plan: &PlanResult,
    lines: &mut Vec<String>,
) {
    lines.push(format!(
        "Negative balance alert! Account money is short by {}.",
        format_currency(alert.deficit)
    ));
    for attempt in &alert.adjustment.log {
        lines.push(attempt_line(attempt));
    }
    match alert.adjustment.resolved {
        Some(mode) => {
            lines.push(format!(
                "Cash deficit solution: switch to {} savings mode.",
                mode.label()
            ));
        }
        None => {
            lines.push("No savings mode is enough. Critical cash deficit.".to_string());
            lines.push(format!(
                "Stop all savings and reduce {} ({}).",
                plan.max_category.as_str(),
                format_currency(plan.max_category_value)
            ));
        }
    }
}

fn attempt_line(attempt: &AdjustmentAttempt) -> String {
    match attempt.outcome {
        AttemptOutcome::AccountMoney(account_money) => format!(
            "  - {}: savings {}, new account money {}",
            attempt.mode.label(),
            format_currency(attempt.savings),
            format_currency(account_money)
        ),
        AttemptOutcome::DaysNeeded(Some(days)) => format!(
            "  - {}: savings {}, days needed {}",
            attempt.mode.label(),
            format_currency(attempt.savings),
            format_days(days)
        ),
        AttemptOutcome::DaysNeeded(None) => format!(
            "  - {}: savings {}, target unreachable at current pay",
            attempt.mode.label(),
            format_currency(attempt.savings)
        ),
    }
}

/// Blocking alert for an out-of-reach target. Nothing was saved.
pub fn render_infeasible(report: &InfeasibleTarget) -> String {
    let mut lines = vec![
        "Target impossible alert!".to_string(),
        format!(
            "Even working every timeline day with zero expenses and zero savings deductions, \
             you would earn {}.",
            format_currency(report.max_possible_income)
        ),
        format!("Your target requires {}.", format_currency(report.target)),
    ];
    if report.suggests_adjustment() {
        lines.push("Consider adjusting the timeline or increasing income.".to_string());
    }
    lines.join("\n")
}

/// Saved plans, newest first, with the decoded expense set.
pub fn render_history(plans: &[PlanRecord]) -> String {
    if plans.is_empty() {
        return "No plans saved yet.".to_string();
    }

    let mut lines = vec![format!("Saved plans ({})", plans.len())];
    for plan in plans {
        lines.push(format!(
            "#{}  {}  {}  account money {}  days needed {}",
            plan.id,
            plan.created_at.format("%Y-%m-%d %H:%M UTC"),
            plan.savings_mode.label(),
            format_currency(plan.account_money),
            format_days(plan.days_needed)
        ));
        let expenses = plan
            .expenses
            .iter()
            .map(|(category, amount)| format!("{} {}", category.as_str(), format_currency(amount)))
            .collect::<Vec<_>>()
            .join(", ");
        lines.push(format!(
            "    target {} over {} days; expenses: {}",
            format_currency(plan.target_savings),
            plan.timeline_days,
            expenses
        ));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use budget_core::calculations::{PlanInput, evaluate};
    use budget_core::{ExpenseSet, IncomeProfile, SavingsMode, SavingsTarget};

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
    fn currency_groups_thousands() {
        assert_eq!(format_currency(dec!(1234.56)), "$1,234.56");
        assert_eq!(format_currency(dec!(1234567.5)), "$1,234,567.50");
        assert_eq!(format_currency(dec!(999)), "$999.00");
        assert_eq!(format_currency(dec!(1000)), "$1,000.00");
    }

    #[test]
    fn currency_keeps_the_sign_outside_the_dollar() {
        assert_eq!(format_currency(dec!(-470.00)), "-$470.00");
    }

    #[test]
    fn currency_rounds_half_up_to_cents() {
        assert_eq!(format_currency(dec!(10.005)), "$10.01");
        assert_eq!(format_currency(Decimal::ZERO), "$0.00");
    }

    #[test]
    fn days_render_to_one_decimal() {
        assert_eq!(format_days(dec!(5470) / dec!(120)), "45.6");
        assert_eq!(format_days(dec!(0)), "0.0");
    }

    #[test]
    fn deficit_evaluation_renders_alert_and_solution() {
        let evaluation = evaluate(&base_input()).unwrap();

        let report = render_evaluation(&evaluation);

        assert!(report.contains("Account money    -$470.00"), "{report}");
        assert!(report.contains("Negative balance alert!"));
        assert!(report.contains("  - Medium (15%): savings $360.00, new account money $10.00"));
        assert!(report.contains("Cash deficit solution: switch to Medium (15%) savings mode."));
        assert!(report.contains("Most expensive category: Rent ($1,200.00)"));
    }

    #[test]
    fn unresolved_shortfall_cites_the_largest_expense() {
        let mut input = base_input();
        input.target.timeline_days = 30;

        let evaluation = evaluate(&input).unwrap();
        let report = render_evaluation(&evaluation);

        assert!(report.contains("Behind schedule:"));
        assert!(report.contains("Even the laxest savings mode is not enough."));
        assert!(report.contains("Drastically reduce Rent ($1,200.00)."));
    }

    #[test]
    fn infeasible_report_includes_advisory_for_large_gaps() {
        let report = render_infeasible(&InfeasibleTarget {
            max_possible_income: dec!(7.25),
            target: dec!(5000.0),
        });

        assert!(report.contains("Target impossible alert!"));
        assert!(report.contains("you would earn $7.25."));
        assert!(report.contains("Your target requires $5,000.00."));
        assert!(report.contains("Consider adjusting the timeline or increasing income."));
    }

    #[test]
    fn infeasible_report_omits_advisory_for_small_gaps() {
        let report = render_infeasible(&InfeasibleTarget {
            max_possible_income: dec!(4500.0),
            target: dec!(5000.0),
        });

        assert!(!report.contains("Consider adjusting"));
    }

    #[test]
    fn empty_history_has_a_placeholder() {
        assert_eq!(render_history(&[]), "No plans saved yet.");
    }
}
