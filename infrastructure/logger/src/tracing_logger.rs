use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

/// Forwards domain log lines to `tracing` under a single target.
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "upcycle", "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "upcycle", "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "upcycle", "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "upcycle", "{}", message);
    }
}
