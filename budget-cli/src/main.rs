use clap::{Args, Parser, Subcommand};
use rust_decimal::Decimal;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use budget_core::SavingsMode;
use budget_core::db::DbConfig;
use budget_cli::app;
use budget_cli::form::{PlanForm, parse_mode};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Personal budgeting calculator.
///
/// Evaluates a savings plan from income, expenses, a target, and a savings
/// mode; saves every evaluated plan to the configured database.
#[derive(Debug, Parser)]
struct Cli {
    /// Database backend to use.
    #[arg(long, default_value = "sqlite")]
    backend: String,

    /// Database connection string.
    /// For SQLite this is a file path (e.g. `plans.db`) or `:memory:`.
    #[arg(long, default_value = "plans.db")]
    db: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Evaluate a financial plan and save it.
    Plan(PlanArgs),
    /// List previously saved plans, newest first.
    History,
}

#[derive(Debug, Args)]
struct PlanArgs {
    /// Pay per hour ($).
    #[arg(long, default_value = "15.0")]
    pay: Decimal,

    /// Hours worked per day.
    #[arg(long, default_value = "8.0")]
    hours: Decimal,

    /// Days worked this month.
    #[arg(long, default_value = "20")]
    days: u32,

    /// Target savings ($).
    #[arg(long, default_value = "5000.0")]
    target: Decimal,

    /// Approximate timeline (days).
    #[arg(long, default_value = "90")]
    timeline: u32,

    /// Grocery spending ($).
    #[arg(long, default_value = "300.0")]
    grocery: Decimal,

    /// Rent ($).
    #[arg(long, default_value = "1200.0")]
    rent: Decimal,

    /// Mobile bill ($).
    #[arg(long, default_value = "80.0")]
    mobile_bill: Decimal,

    /// Social spending ($).
    #[arg(long, default_value = "200.0")]
    social_spending: Decimal,

    /// Travel ($).
    #[arg(long, default_value = "150.0")]
    travel: Decimal,

    /// Additional spending ($).
    #[arg(long, default_value = "100.0")]
    additional_spend: Decimal,

    /// Savings mode: high, medium, low or none.
    #[arg(long, default_value = "high", value_parser = parse_mode)]
    mode: SavingsMode,
}

impl PlanArgs {
    fn into_form(self) -> PlanForm {
        PlanForm {
            pay_per_hour: self.pay,
            hours_per_day: self.hours,
            days_worked: self.days,
            target_savings: self.target,
            timeline_days: self.timeline,
            grocery: self.grocery,
            rent: self.rent,
            mobile_bill: self.mobile_bill,
            social_spending: self.social_spending,
            travel: self.travel,
            additional_spend: self.additional_spend,
            mode: self.mode,
        }
    }
}

// ─── tracing ─────────────────────────────────────────────────────────────────

/// Initialise the tracing subscriber.
///
/// * Honours `RUST_LOG` when set.
/// * Falls back to `info` so normal runs are quiet.
/// * Strips timestamps and target names to keep CLI output clean.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::from("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .without_time()
        .with_target(false)
        .init();
}

// ─── entry point ─────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();

    let db_config = DbConfig {
        backend: cli.backend,
        connection_string: cli.db,
    };

    debug!("connecting to {} backend", db_config.backend);
    let registry = app::build_registry();
    let store = registry.create(&db_config).await?;

    let report = match cli.command {
        Command::Plan(args) => app::run_plan(&*store, &args.into_form()).await?,
        Command::History => app::run_history(&*store).await?,
    };

    println!("{report}");

    Ok(())
}
