use std::path::Path;
use std::sync::OnceLock;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::RollingFileAppender;
use tracing_appender::rolling::Rotation;
use tracing_subscriber::Layer;
use tracing_subscriber::prelude::*;

use super::filter::DebugOnlyFilter;
#[cfg(all(feature = "prod", not(feature = "dev")))]
use super::filter::ErrorOnlyFilter;
use super::filter::ErrorWarnFilter;
#[cfg(feature = "dev")]
use super::filter::InfoAndAboveFilter;
use super::format::AirdropFormat;
use crate::Result;
use crate::config::LoggingConfig;
use crate::err_with_loc;

// Keeps the non-blocking writers flushing for the lifetime of the process
static GUARDS: OnceLock<Vec<WorkerGuard>> = OnceLock::new();

pub fn setup_tracing(
    engine_name: &str,
    logging_config: &LoggingConfig,
) -> Result<()> {
    let base_logs_dir = Path::new(logging_config.directory.as_deref().unwrap_or(".logs"));

    let logs_dirs = [base_logs_dir.to_path_buf(), base_logs_dir.join("debug"), base_logs_dir.join("error")];
    for dir in &logs_dirs {
        if !dir.exists() {
            std::fs::create_dir_all(dir)
                .map_err(|e| err_with_loc!(format!("Failed to create logs directory {}: {}", dir.display(), e)))?;
        }
    }

    #[cfg(feature = "dev")]
    let info_appender = RollingFileAppender::new(Rotation::DAILY, base_logs_dir, format!("{}.log", engine_name));
    let debug_appender =
        RollingFileAppender::new(Rotation::DAILY, base_logs_dir.join("debug"), format!("{}.log", engine_name));
    let error_appender =
        RollingFileAppender::new(Rotation::DAILY, base_logs_dir.join("error"), format!("{}.log", engine_name));

    #[cfg(feature = "dev")]
    let (non_blocking_info, info_guard) = tracing_appender::non_blocking(info_appender);
    let (non_blocking_debug, debug_guard) = tracing_appender::non_blocking(debug_appender);
    let (non_blocking_error, error_guard) = tracing_appender::non_blocking(error_appender);

    let format = AirdropFormat {
        engine_name: engine_name.to_string(),
    };

    let subscriber = tracing_subscriber::registry()
        // DEBUG log file - debug only
        .with(
            tracing_subscriber::fmt::Layer::default()
                .with_ansi(false)
                .event_format(format.clone())
                .with_writer(non_blocking_debug)
                .with_filter(DebugOnlyFilter),
        )
        // ERROR log file - warn and error
        .with(
            tracing_subscriber::fmt::Layer::default()
                .with_ansi(false)
                .event_format(format.clone())
                .with_writer(non_blocking_error)
                .with_filter(ErrorWarnFilter),
        );

    // prod terminal: errors only, unless dev asks for more
    #[cfg(all(feature = "prod", not(feature = "dev")))]
    let subscriber = subscriber.with(
        tracing_subscriber::fmt::Layer::default()
            .with_ansi(true)
            .event_format(format.clone())
            .with_writer(std::io::stderr)
            .with_filter(ErrorOnlyFilter),
    );

    #[cfg(feature = "dev")]
    let subscriber = subscriber
        .with(
            tracing_subscriber::fmt::Layer::default()
                .with_ansi(true)
                .event_format(format.clone())
                .with_writer(std::io::stderr)
                .with_filter(InfoAndAboveFilter),
        )
        .with(
            tracing_subscriber::fmt::Layer::default()
                .with_ansi(false)
                .event_format(format.clone())
                .with_writer(non_blocking_info)
                .with_filter(InfoAndAboveFilter),
        );

    // try_init also bridges `log` records into tracing
    subscriber
        .try_init()
        .map_err(|e| err_with_loc!(format!("Error setting up logging: {}", e)))?;

    #[cfg(feature = "dev")]
    let guards = vec![info_guard, debug_guard, error_guard];
    #[cfg(not(feature = "dev"))]
    let guards = vec![debug_guard, error_guard];
    let _ = GUARDS.set(guards);

    tracing::info!(
        "{}_logging_started::debug_logs::{}",
        engine_name,
        base_logs_dir.join("debug").join(format!("{}.log", engine_name)).display()
    );
    tracing::info!(
        "{}_logging_started::error_logs::{}",
        engine_name,
        base_logs_dir.join("error").join(format!("{}.log", engine_name)).display()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_log_dirs_and_installs_once() {
        let dir = std::env::temp_dir().join(format!("airdrop-logs-{}", std::process::id()));
        let config = LoggingConfig {
            directory: Some(dir.display().to_string()),
        };

        assert!(setup_tracing("test", &config).is_ok());
        assert!(dir.join("debug").is_dir());
        assert!(dir.join("error").is_dir());

        let err = setup_tracing("test", &config).unwrap_err();
        assert!(format!("{:#}", err).contains("Error setting up logging"));
    }
}
