//! Command line options for the `waqt` binary.

use waqt_schedule::{parse_current_time, DEFAULT_ONGOING_WINDOW_MINUTES};
use waqt_types::{TimeOfDay, WaqtError};

/// Environment variable holding the ongoing window in minutes.
pub const WINDOW_ENV: &str = "WAQT_ONGOING_WINDOW";

/// What the binary was asked to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Run(Options),
    Help,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Overrides the wall clock; `None` means "now".
    pub at: Option<TimeOfDay>,
    pub window_minutes: u32,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            at: None,
            window_minutes: DEFAULT_ONGOING_WINDOW_MINUTES,
        }
    }
}

pub const USAGE: &str = "\
waqt - which prayer is ongoing, and which is next

USAGE:
    waqt [OPTIONS]

OPTIONS:
    --at HH:MM          Use this time instead of the local clock
    --window MINUTES    How long a prayer counts as ongoing (default 60)
    -h, --help          Print this message

ENVIRONMENT:
    IPGEO_API_KEY       ipgeolocation.io key (required)
    X7X_API_KEY         Aladhan key (optional)
    WAQT_ONGOING_WINDOW Default for --window
    WAQT_GEO_URL, WAQT_TIMINGS_URL, WAQT_METHOD
    RUST_LOG            Log filter (default info)
";

/// Parses arguments (without the program name). `window_env` is the value of
/// [`WINDOW_ENV`], if set; it is only read when `--window` is absent, and
/// never for `--help`.
///
/// # Errors
/// `InvalidConfiguration` for unknown flags, missing values or bad numbers,
/// `InvalidTime` for a malformed `--at`.
pub fn parse_args<I, S>(args: I, window_env: Option<&str>) -> Result<Command, WaqtError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut options = Options::default();
    let mut window_flag = false;

    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_ref() {
            "-h" | "--help" => return Ok(Command::Help),
            "--at" => {
                let value = args
                    .next()
                    .ok_or_else(|| WaqtError::invalid_config("--at needs a HH:MM value"))?;
                options.at = Some(parse_current_time(value.as_ref())?);
            }
            "--window" => {
                let value = args
                    .next()
                    .ok_or_else(|| WaqtError::invalid_config("--window needs a number of minutes"))?;
                options.window_minutes = parse_window(value.as_ref())?;
                window_flag = true;
            }
            other => {
                return Err(WaqtError::invalid_config(format!("unknown argument {:?}", other)));
            }
        }
    }

    if !window_flag {
        if let Some(value) = window_env {
            options.window_minutes = parse_window(value)?;
        }
    }

    Ok(Command::Run(options))
}

fn parse_window(value: &str) -> Result<u32, WaqtError> {
    value.trim().parse().map_err(|_| {
        WaqtError::invalid_config(format!("ongoing window must be whole minutes, got {:?}", value))
    })
}
