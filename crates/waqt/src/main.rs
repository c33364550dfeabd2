//! `waqt` binary: locate, fetch today's prayer times, report ongoing and next.
//!
//! Logs go to stderr; the one-line summary goes to stdout.

use anyhow::{Context, Result};
use chrono::Local;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;
use waqt::cli::{self, Command, Options};
use waqt::network::{AladhanClient, IpGeolocationClient, ProviderConfig};
use waqt::{prayer_status, TimeOfDay};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if let Err(e) = dotenvy::dotenv() {
        warn!(error = %e, "no .env file loaded");
    }

    let window_env = std::env::var(cli::WINDOW_ENV).ok();
    let options = match cli::parse_args(std::env::args().skip(1), window_env.as_deref())? {
        Command::Help => {
            print!("{}", cli::USAGE);
            return Ok(());
        }
        Command::Run(options) => options,
    };

    run(options).await.map_err(|e| {
        error!(error = %e, "waqt failed");
        e
    })
}

async fn run(options: Options) -> Result<()> {
    let config = ProviderConfig::from_env()?;

    let geo = IpGeolocationClient::new(&config)?
        .locate()
        .await
        .context("Error getting geo location")?;

    let today = Local::now().date_naive();
    let prayers = AladhanClient::new(&config)?
        .prayer_set(today, &geo)
        .await
        .context("Error fetching prayers")?;

    if let Err(e) = prayers.validate_order() {
        warn!(error = %e, "provider times are not chronological, results may be off");
    }

    let current = options.at.unwrap_or_else(TimeOfDay::now);
    let status = prayer_status(&prayers, current, options.window_minutes);

    match status.ongoing {
        Some(event) => info!(
            name = %event.name,
            prayer_time = %event.time,
            current_time = %current,
            "Current ongoing prayer"
        ),
        None => info!(current_time = %current, "No ongoing prayer"),
    }
    info!(
        name = %status.next.name,
        time = %status.next.time,
        tomorrow = status.next_is_tomorrow,
        current_time = %current,
        "Next upcoming prayer"
    );

    println!("{}: {}", geo.display_name(), status);
    Ok(())
}
