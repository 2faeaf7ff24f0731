//! Tracing configuration for the CoinVest client
//!
//! ## Architecture / 架构
//!
//! - **stderr**: warnings only, so log lines do not interleave with prompts,
//!   unless `RUST_LOG` or `--verbose` asks for more
//! - **file**: everything the env filter lets through, `coinvest.log`
//! - **Sentry**: enabled when `SENTRY_DSN` is set

use std::{fs, io, path::Path, sync::OnceLock};

use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::{
    filter::LevelFilter, fmt, fmt::writer::BoxMakeWriter, prelude::*, registry, EnvFilter,
};

static LOG_GUARD: OnceLock<WorkerGuard> = OnceLock::new();
static SENTRY_GUARD: OnceLock<sentry::ClientInitGuard> = OnceLock::new();

const LOG_FILE_NAME: &str = "coinvest.log";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Check if running in development environment
fn is_development() -> bool {
    cfg!(debug_assertions)
}

/// Build the default filter directives for tracing
///
/// ## Behavior / 行为
/// - **Development**: debug level for our crates
/// - **Production**: info level for our crates
/// - HTTP stack internals stay at warn either way
fn build_filter_directives(is_dev: bool) -> Vec<String> {
    let ours = if is_dev { "debug" } else { "info" };
    vec![
        ours.to_string(),
        format!("cv_app={ours}"),
        format!("cv_infra={ours}"),
        format!("coinvest_lib={ours}"),
        "hyper=warn".to_string(),
        "hyper_util=warn".to_string(),
        "reqwest=warn".to_string(),
        "rustls=warn".to_string(),
    ]
}

/// Level passed through to stderr.
fn stderr_level(verbose: bool, rust_log_set: bool) -> LevelFilter {
    if verbose || rust_log_set {
        LevelFilter::TRACE
    } else {
        LevelFilter::WARN
    }
}

/// Initialize the tracing subscriber
///
/// Call once from `main`, after the config is loaded and before any use case
/// runs. `log_dir` receives `coinvest.log`; if it cannot be created the file
/// layer is skipped and logging continues on stderr.
///
/// 在 `main` 中调用一次。日志目录不可用时仅输出到 stderr。
///
/// ## Errors / 错误
///
/// Returns `Err` if a global subscriber is already registered.
pub fn init_tracing_subscriber(log_dir: &Path, verbose: bool) -> anyhow::Result<()> {
    let is_dev = is_development();

    // Step 1: environment filter, RUST_LOG wins over the defaults
    let rust_log_set = std::env::var_os(EnvFilter::DEFAULT_ENV).is_some();
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(build_filter_directives(is_dev).join(",")));

    // Step 2: Sentry, only if SENTRY_DSN is set; the guard must stay alive
    let sentry_layer = match std::env::var("SENTRY_DSN") {
        Ok(dsn) if !dsn.trim().is_empty() => {
            let guard = sentry::init((
                dsn,
                sentry::ClientOptions {
                    release: sentry::release_name!(),
                    traces_sample_rate: 1.0,
                    ..Default::default()
                },
            ));
            if SENTRY_GUARD.set(guard).is_err() {
                eprintln!("Sentry guard already initialized");
            }
            Some(sentry_tracing::layer())
        }
        _ => None,
    };

    // Step 3: writers and fmt layers
    // "2025-01-15 10:30:45.123 INFO [file.rs:42] [target] message"
    let stderr_layer = fmt::layer()
        .with_timer(fmt::time::ChronoUtc::new(TIMESTAMP_FORMAT.to_string()))
        .with_level(true)
        .with_target(true)
        .with_ansi(cfg!(not(test)))
        .with_writer(BoxMakeWriter::new(io::stderr))
        .with_filter(stderr_level(verbose, rust_log_set));

    let file_layer = match build_file_writer(log_dir) {
        Ok(writer) => Some(
            fmt::layer()
                .with_timer(fmt::time::ChronoUtc::new(TIMESTAMP_FORMAT.to_string()))
                .with_level(true)
                .with_file(true)
                .with_line_number(true)
                .with_target(true)
                .with_ansi(false)
                .with_writer(writer),
        ),
        Err(err) => {
            eprintln!("Failed to initialize file logging, continuing on stderr: {err}");
            None
        }
    };

    // Step 4: register the global subscriber
    registry()
        .with(env_filter)
        .with(sentry_layer)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()?;

    Ok(())
}

fn build_file_writer(log_dir: &Path) -> anyhow::Result<NonBlocking> {
    fs::create_dir_all(log_dir)?;

    let file_appender = tracing_appender::rolling::never(log_dir, LOG_FILE_NAME);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    LOG_GUARD
        .set(guard)
        .map_err(|_| anyhow::anyhow!("Tracing log guard already initialized"))?;

    Ok(non_blocking)
}
