//! wobbles - terminal player for the procedural piece
//!
//! Run with: cargo run --bin wobbles [config.toml]
//!
//! Logs go to `wobbles.log` (the terminal belongs to the UI). Filter with
//! `RUST_LOG`, e.g. `RUST_LOG=wobble_dsp=debug`.

mod app;
mod ui;

use std::fs::File;
use std::path::Path;
use std::sync::Mutex;

use color_eyre::eyre::{eyre, Result as EyreResult, WrapErr};
use tracing_subscriber::EnvFilter;

use app::Wobbles;
use wobble_dsp::SynthConfig;

const LOG_FILE: &str = "wobbles.log";
const DEFAULT_LOG_FILTER: &str = "wobble_dsp=info,wobbles=info";

fn main() -> EyreResult<()> {
    color_eyre::install()?;
    init_logging()?;

    let config = match std::env::args().nth(1) {
        Some(path) => load_config(Path::new(&path))?,
        None => SynthConfig::default(),
    };

    Wobbles::new(config).run()
}

fn init_logging() -> EyreResult<()> {
    let file = File::create(LOG_FILE).wrap_err_with(|| format!("failed to create {LOG_FILE}"))?;
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|err| eyre!("failed to install log subscriber: {err}"))
}

/// Read a TOML config. Missing fields keep their defaults.
fn load_config(path: &Path) -> EyreResult<SynthConfig> {
    let text = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("failed to read config {}", path.display()))?;
    let config: SynthConfig = toml::from_str(&text)
        .wrap_err_with(|| format!("failed to parse config {}", path.display()))?;
    config
        .validate()
        .wrap_err_with(|| format!("invalid config {}", path.display()))?;
    tracing::info!(path = %path.display(), "loaded config");
    Ok(config)
}
