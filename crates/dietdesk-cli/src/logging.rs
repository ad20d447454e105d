use crate::types::LogLevel;
use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming};
use once_cell::sync::OnceCell;
use std::path::Path;

static LOGGER: OnceCell<LoggerHandle> = OnceCell::new();

/// Rolling file logs under `<data_dir>/logs`.
///
/// The notification center swallows its failures by contract, so the
/// log file is the only place they surface. Initialization failure is
/// non-fatal: the client runs unlogged rather than refusing to start.
/// Calling this twice is a no-op.
pub fn init(level: LogLevel, data_dir: &Path) {
    if LOGGER.get().is_some() {
        return;
    }

    let result = Logger::try_with_str(level.as_filter()).and_then(|logger| {
        logger
            .log_to_file(
                FileSpec::default()
                    .directory(data_dir.join("logs"))
                    .basename("dietdesk"),
            )
            .rotate(
                Criterion::Size(5 * 1024 * 1024),
                Naming::Numbers,
                Cleanup::KeepLogFiles(3),
            )
            .start()
    });

    match result {
        Ok(handle) => {
            let _ = LOGGER.set(handle);
        }
        Err(err) => eprintln!("Warning: file logging unavailable: {}", err),
    }
}
