//! tallybox binary entrypoint kept minimal. The full runtime lives in `app`.

mod args;

use std::fmt;
use std::path::PathBuf;
use std::sync::OnceLock;

use clap::Parser;
use tallybox::{app, theme};

/// Log timestamp formatter: `YYYY-MM-DD-T HH:MM:SS` in local time.
struct TallyboxTimer;

impl tracing_subscriber::fmt::time::FormatTime for TallyboxTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> fmt::Result {
        let ts = chrono::Local::now().format("%Y-%m-%d-T %H:%M:%S");
        write!(w, "{ts}")
    }
}

/// Keeps the non-blocking log writer alive for the whole process.
static LOG_GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();

/// What: Initialize tracing, writing to `<config>/logs/tallybox.log`.
///
/// Inputs:
/// - `level`: Default filter when `RUST_LOG` is unset.
///
/// Details:
/// - Falls back to a stderr logger when the log file cannot be opened.
fn init_logging(level: &str) {
    let env_filter = || {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level))
    };
    let log_path = theme::logs_dir().join("tallybox.log");
    match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
    {
        Ok(file) => {
            let (non_blocking, guard) = tracing_appender::non_blocking(file);
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_target(false)
                .with_ansi(false)
                .with_writer(non_blocking)
                .with_timer(TallyboxTimer)
                .init();
            let _ = LOG_GUARD.set(guard);
            tracing::info!(path = %log_path.display(), "logging initialized");
        }
        Err(e) => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_target(false)
                .with_ansi(true)
                .with_writer(std::io::stderr)
                .with_timer(TallyboxTimer)
                .init();
            tracing::warn!(error = %e, "failed to open log file; using stderr");
        }
    }
}

#[tokio::main]
async fn main() {
    let args = args::Args::parse();

    if let Some(dir) = &args.config_dir {
        theme::set_config_dir_override(PathBuf::from(dir));
    }
    init_logging(&args::determine_log_level(&args));

    let options = args::process_args(&args);
    tracing::info!(
        persist = options.persist,
        history_file = ?options.history_file,
        "tallybox starting"
    );
    if let Err(err) = app::run(options).await {
        tracing::error!(error = ?err, "Application error");
        eprintln!("tallybox: {err}");
        std::process::exit(1);
    }
    tracing::info!("tallybox exited");
}
