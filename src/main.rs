//! netmon: a live terminal network throughput monitor.
//!
//! Samples the host's cumulative interface byte counters once per tick,
//! turns them into RX/TX rates, keeps a one-minute rolling history and draws
//! it as a panel of fill bars plus the latest rate in Mbps.
//!
//! Logs go to `netmon.log` in the temp directory; `RUST_LOG` controls verbosity.
//! Keys: q / Esc / F10 quit.

#![allow(dead_code)]

mod app;
mod color_scheme;
mod config;
mod dashboard;
mod error;
mod input;
mod system;
mod terminal;
mod ui;

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use app::App;
use config::NetmonConfig;
use dashboard::Dashboard;
use system::collector::{MonotonicClock, SysinfoCounters};
use system::sampler::RateSampler;
use terminal::TerminalRenderer;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let (config, config_error) = match NetmonConfig::load() {
        Ok(cfg) => (cfg, None),
        Err(e) => (NetmonConfig::default(), Some(e)),
    };
    init_logging(&config.log_file);

    tracing::info!(
        scheme = config.color_scheme_id.name(),
        interval_ms = config.update_interval_ms,
        history = config.history_size,
        "netmon v{} starting",
        env!("CARGO_PKG_VERSION")
    );
    if let Some(e) = config_error {
        tracing::warn!(error = %e, "falling back to default config");
    }

    // Seed the baseline before taking over the terminal so a startup failure
    // prints a readable message.
    let source = SysinfoCounters::new().context("cannot open network counters")?;
    let sampler =
        RateSampler::new(source, MonotonicClock).context("cannot read initial network counters")?;
    let mut dashboard = Dashboard::new(sampler, config.history_size, config.update_interval());

    let mut renderer = TerminalRenderer::enter(App::new(&config))?;
    let result = dashboard.run(&mut renderer);
    renderer.leave()?;

    result?;
    tracing::info!("netmon stopped");
    Ok(())
}

/// Structured logging to a file; the terminal itself belongs to the UI.
fn init_logging(path: &Path) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_ansi(false);

    match OpenOptions::new().create(true).append(true).open(path) {
        Ok(file) => builder.with_writer(Mutex::new(file)).init(),
        Err(_) => builder.with_writer(std::io::sink).init(),
    }
}
