use std::error::Error;
use std::io;
use std::sync::Mutex;

use slog::error;
use slog::{Drain, Logger, o};

/// Builds a JSON logger writing to stdout.
pub fn get_logger() -> Logger {
    let drain = slog_json::Json::default(io::stdout()).fuse();
    let drain = Mutex::new(drain).fuse();
    Logger::root(drain, o!())
}

/// Logs an error with a short message describing where it happened.
pub fn error_context<E: Error + 'static>(logger: &Logger, context: &str, err: E) {
    error!(logger, "{}: {}", context, err);
}
