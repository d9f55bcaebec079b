use std::path::PathBuf;
use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDate, Utc};
use clap::{Parser, Subcommand};
use vocabot_lib::analytics::MasterySummary;
use vocabot_lib::broadcast::{run_broadcast, BroadcastKind};
use vocabot_lib::config::BotConfig;
use vocabot_lib::curriculum::plan::build_daily_plan;
use vocabot_lib::logging::init_logging;
use vocabot_lib::messaging::format;
use vocabot_lib::progress::{compute_progress_with, DayBoundary};

#[derive(Parser)]
#[command(name = "vocabot", version, about = "Scheduled vocabulary-course delivery bot")]
struct Cli {
    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the bot: scheduled broadcasts and inbound commands
    Run,
    /// Show program position for a start date
    Progress {
        /// Enrollment date, YYYY-MM-DD (midnight UTC)
        #[arg(long)]
        start: String,
        /// Evaluation time, RFC 3339; defaults to now
        #[arg(long)]
        at: Option<String>,
        /// Count whole 24h periods instead of calendar dates
        #[arg(long)]
        rolling: bool,
    },
    /// Print the plan for one program day
    Plan {
        #[arg(long)]
        week: u32,
        #[arg(long)]
        day: u32,
    },
    /// Run one broadcast immediately over all active learners
    Broadcast {
        /// morning | review | practice | weekly
        kind: BroadcastKind,
    },
}

fn parse_start(value: &str) -> Result<DateTime<Utc>> {
    let date = NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .with_context(|| format!("invalid start date '{}'", value))?;
    date.and_hms_opt(0, 0, 0)
        .map(|t| t.and_utc())
        .context("invalid start time")
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.json_logs);

    let config = BotConfig::load(cli.config.as_deref()).await?;

    match cli.command {
        Command::Run => vocabot_lib::run(config).await?,
        Command::Progress { start, at, rolling } => {
            let enrolled_at = parse_start(&start)?;
            let now = match at {
                Some(at) => DateTime::parse_from_rfc3339(&at)
                    .with_context(|| format!("invalid --at '{}'", at))?
                    .with_timezone(&Utc),
                None => Utc::now(),
            };
            let boundary = if rolling { DayBoundary::Rolling } else { config.course.day_boundary };
            let progress = compute_progress_with(boundary, enrolled_at, now);
            println!("{}", serde_json::to_string_pretty(&progress)?);
            println!("{}", format::render_progress(&progress, &MasterySummary::default()));
        }
        Command::Plan { week, day } => {
            let curriculum = vocabot_lib::load_curriculum(&config).await?;
            // Reject out-of-range input before it reaches the planner.
            curriculum.entry(week, day)?;
            let plan = build_daily_plan(&curriculum, week, day)?;
            println!("{}", format::render_plan(&plan));
        }
        Command::Broadcast { kind } => {
            let (state, _) = vocabot_lib::build_state(config).await?;
            let report = run_broadcast(&state, kind, Utc::now(), None).await?;
            println!("{:?}", report);
        }
    }
    Ok(())
}
