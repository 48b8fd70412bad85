use crate::error::{CliError, Result};
use std::fs::File;
use std::path::Path;
use tracing_subscriber::{
    filter::LevelFilter,
    fmt::{self},
    prelude::*,
};

/// Maps the repeatable `-v` flag onto a tracing level filter.
///
/// `--quiet` wins over any verbosity and silences console output entirely;
/// the file layer (when requested) is not affected by this filter's origin
/// since both share the same registry-level filter.
fn console_level(verbosity: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::OFF;
    }
    match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Installs the global tracing subscriber for the process.
///
/// Console output goes to stderr in a compact, colored format so report
/// output on stdout stays pipeable. When `log_file` is given, a second
/// plain-text layer mirrors events to that file with thread IDs and
/// targets for postmortem reading.
pub fn setup_logging(verbosity: u8, quiet: bool, log_file: Option<&Path>) -> Result<()> {
    let console = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .with_target(false)
        .compact();

    let registry = tracing_subscriber::registry()
        .with(console_level(verbosity, quiet))
        .with(console);

    match log_file {
        Some(path) => {
            let sink = File::create(path).map_err(CliError::Io)?;
            let file_layer = fmt::layer()
                .with_writer(sink)
                .with_ansi(false)
                .with_thread_ids(true)
                .with_target(true);
            registry.with(file_layer).init();
        }
        None => registry.init(),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::path::PathBuf;
    use std::sync::Once;
    use tracing::{debug, info, warn};

    static INIT: Once = Once::new();

    fn init_global_logger() {
        INIT.call_once(|| {
            setup_logging(3, false, None).expect("global test logger should initialize");
        });
    }

    #[test]
    fn quiet_flag_silences_all_levels() {
        assert_eq!(console_level(0, true), LevelFilter::OFF);
        assert_eq!(console_level(3, true), LevelFilter::OFF);
    }

    #[test]
    fn verbosity_scales_from_warn_to_trace() {
        assert_eq!(console_level(0, false), LevelFilter::WARN);
        assert_eq!(console_level(1, false), LevelFilter::INFO);
        assert_eq!(console_level(2, false), LevelFilter::DEBUG);
        assert_eq!(console_level(7, false), LevelFilter::TRACE);
    }

    #[test]
    #[serial]
    fn global_logger_accepts_events_at_every_level() {
        init_global_logger();

        warn!("low-exposure residue skipped");
        info!("surface classification finished");
        debug!(candidates = 5, "peptide generation complete");
    }

    #[test]
    #[serial]
    fn file_layer_records_events_with_thread_ids() {
        let temp_dir = tempfile::tempdir().unwrap();
        let log_path = temp_dir.path().join("peptigen.log");

        let sink = File::create(&log_path).unwrap();
        let file_layer = fmt::layer()
            .with_writer(sink)
            .with_ansi(false)
            .with_thread_ids(true);
        let subscriber = tracing_subscriber::registry().with(file_layer);

        tracing::subscriber::with_default(subscriber, || {
            debug!("anchored window clamped to sequence bounds");
        });

        let content = std::fs::read_to_string(&log_path).unwrap();
        assert!(content.contains("anchored window clamped to sequence bounds"));
        assert!(content.contains("DEBUG"));
        assert!(content.contains("ThreadId"));
    }

    #[test]
    #[serial]
    fn unwritable_log_file_is_an_io_error() {
        let directory_as_file = PathBuf::from("/");

        if cfg!(unix) && directory_as_file.is_dir() {
            let result = setup_logging(0, false, Some(&directory_as_file));
            assert!(matches!(result, Err(CliError::Io(_))));
        }
    }
}
