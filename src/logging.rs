// src/logging.rs

use crate::errors::{RoutineError, RoutineResult};
use crate::models::ApiCallLog;
use flexi_logger::{FileSpec, Logger, LoggerHandle, WriteMode};
use std::path::Path;

/// Routes the `log` facade to a file. The terminal belongs to the UI.
pub fn init_logging(level: &str, log_dir: &Path) -> RoutineResult<LoggerHandle> {
    Logger::try_with_str(level)
        .map_err(|e| RoutineError::config_error(format!("Invalid log level '{}': {}", level, e)))?
        .log_to_file(
            FileSpec::default()
                .directory(log_dir)
                .basename("routine-builder"),
        )
        .write_mode(WriteMode::BufferAndFlush)
        .format(flexi_logger::detailed_format)
        .start()
        .map_err(|e| RoutineError::config_error(format!("Failed to start logger: {}", e)))
}

/// Records one completion API call.
pub fn log_api_call(log: &ApiCallLog) {
    log::info!(
        target: "api_calls",
        "[{}] {} - {} - Status: {} - Time: {}ms",
        log.timestamp.to_rfc3339(),
        log.endpoint,
        log.request_summary,
        log.response_status,
        log.response_time_ms
    );
}
