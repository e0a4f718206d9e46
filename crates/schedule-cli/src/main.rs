//! `schedule` — print the appointments a set of schedule rules produces.
//!
//! ```text
//! schedule generate --schedules team.json --from 2012-05-01 --to 2012-06-30
//! schedule demo --format json
//! ```
//!
//! Appointments go to stdout; diagnostics go to stderr and are controlled by
//! `RUST_LOG` (default `warn`).

mod demo;
mod output;
mod settings;

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use schedule_engine::{generate_calendar_with_options, GeneratorOptions, Period, Schedule};
use tracing_subscriber::EnvFilter;

use crate::output::{write_appointments, Format};
use crate::settings::Settings;

#[derive(Parser)]
#[command(
    name = "schedule",
    version,
    about = "Generate appointments from single, interval, weekly and monthly schedules"
)]
struct Cli {
    /// TOML settings file (SCHEDULE_* environment variables take precedence)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate the calendar for a JSON file of schedule definitions
    Generate {
        /// Schedule definitions (JSON array), or `-` for stdin
        #[arg(short, long)]
        schedules: PathBuf,

        /// First day of the queried period (YYYY-MM-DD)
        #[arg(long)]
        from: NaiveDate,

        /// Last day of the queried period, included (YYYY-MM-DD)
        #[arg(long)]
        to: NaiveDate,

        #[arg(short, long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
    /// Print the calendar of the built-in sample schedules
    Demo {
        #[arg(long, default_value = "2012-05-01")]
        from: NaiveDate,

        #[arg(long, default_value = "2012-06-30")]
        to: NaiveDate,

        #[arg(short, long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
}

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let settings = Settings::load(cli.config.as_deref())?;
    tracing::debug!(?settings, "Settings loaded");
    let options = settings.generator_options();

    match cli.command {
        Command::Generate {
            schedules,
            from,
            to,
            format,
        } => {
            let definitions = read_schedules(&schedules)?;
            print_calendar(from, to, &definitions, &options, format)
        }
        Command::Demo { from, to, format } => {
            print_calendar(from, to, &demo::schedules()?, &options, format)
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn read_schedules(path: &Path) -> Result<Vec<Schedule>> {
    let text = if path == Path::new("-") {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read schedules from stdin")?;
        buf
    } else {
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?
    };

    let schedules: Vec<Schedule> = serde_json::from_str(&text)
        .with_context(|| format!("invalid schedule definitions in {}", path.display()))?;
    tracing::info!(count = schedules.len(), "Loaded schedules");
    Ok(schedules)
}

fn print_calendar(
    from: NaiveDate,
    to: NaiveDate,
    schedules: &[Schedule],
    options: &GeneratorOptions,
    format: Format,
) -> Result<()> {
    let period = Period::new(from, to)?;
    let appointments = generate_calendar_with_options(&period, schedules, options)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_appointments(&mut out, &appointments, format)?;
    out.flush()?;
    Ok(())
}
