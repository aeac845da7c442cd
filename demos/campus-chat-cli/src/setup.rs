// campus-connect/campus-chat-cli
//
// Copyright: 2026, Campus Connect contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result};
use secrecy::SecretString;
use tracing::metadata::LevelFilter;
use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{Layer, Registry};

/// Writes JSON logs to `demos/campus-chat-cli/logs` and warnings to stderr. The level of the
/// log file can be overridden with `CAMPUS_LOG_LEVEL`.
pub fn enable_debug_logging(default_level: Level) -> Result<()> {
    let max_level = env::var("CAMPUS_LOG_LEVEL")
        .ok()
        .and_then(|level| Level::from_str(&level).ok())
        .unwrap_or(default_level);

    let log_dir = demo_dir()?.join("logs");
    let log_filename = "campus-chat-cli.log";

    let log_file_path = log_dir.join(log_filename);
    if log_file_path.exists() {
        _ = std::fs::remove_file(log_file_path);
    }

    let appender = tracing_appender::rolling::never(log_dir, log_filename);

    let json_layer = tracing_subscriber::fmt::Layer::new()
        .json()
        .with_writer(appender)
        .with_ansi(false)
        .with_filter(LevelFilter::from_level(max_level));

    let stderr_layer = tracing_subscriber::fmt::Layer::new()
        .compact()
        .with_writer(std::io::stderr)
        .with_filter(LevelFilter::WARN);

    Registry::default()
        .with(json_layer)
        .with(stderr_layer)
        .try_init()?;

    Ok(())
}

/// The server URL and access token, taken from the command line or from
/// `demos/campus-chat-cli/.env` (`CAMPUS_API_URL`, `CAMPUS_ACCESS_TOKEN`).
pub fn load_credentials() -> Result<(String, SecretString)> {
    if let (Some(url), Some(token)) = (env::args().nth(1), env::args().nth(2)) {
        return Ok((url, SecretString::new(token)));
    }

    let path = demo_dir()?.join(".env");
    dotenvy::from_path(&path).with_context(|| format!("Missing .env file at {:?}.", path))?;

    let url = env::var("CAMPUS_API_URL").context("Missing CAMPUS_API_URL in .env")?;
    let token = env::var("CAMPUS_ACCESS_TOKEN").context("Missing CAMPUS_ACCESS_TOKEN in .env")?;

    Ok((url, SecretString::new(token)))
}

fn demo_dir() -> Result<PathBuf> {
    Ok(env::current_dir()
        .context("Cannot determine current directory")?
        .join("demos")
        .join("campus-chat-cli"))
}
