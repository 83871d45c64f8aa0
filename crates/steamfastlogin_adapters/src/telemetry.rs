use std::path::Path;

use tracing::subscriber::set_global_default;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_log::LogTracer;
use tracing_subscriber::{fmt, layer::SubscriberExt, EnvFilter, Registry};

use crate::paths;

/// Installs the global subscriber: console output on stderr plus a daily
/// log file. `RUST_LOG` takes precedence over `env_filter`.
///
/// Keep the returned guard alive for the whole run or buffered file output
/// is lost.
pub fn init_subscriber(name: &str, env_filter: &str) -> anyhow::Result<WorkerGuard> {
    init_subscriber_in(name, env_filter, paths::log_dir())
}

/// Same as [`init_subscriber`] with the log files written to `log_dir`.
pub fn init_subscriber_in(
    name: &str,
    env_filter: &str,
    log_dir: impl AsRef<Path>,
) -> anyhow::Result<WorkerGuard> {
    // keyring backends log through the `log` facade
    LogTracer::init()?;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(env_filter));

    let formatting_layer = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact();

    let file_appender = tracing_appender::rolling::daily(log_dir, format!("{}.log", name));
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::layer().with_ansi(false).with_writer(non_blocking);

    let subscriber = Registry::default()
        .with(env_filter)
        .with(formatting_layer)
        .with(file_layer);

    set_global_default(subscriber)?;

    Ok(guard)
}
