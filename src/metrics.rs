use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// Operations slower than this are logged at `warn`.
pub const SLOW_OPERATION: Duration = Duration::from_millis(500);

/// Logs how long a store operation took when it goes out of scope.
///
/// ```ignore
/// let _timer = OperationTimer::new("entity_create").kind(T::KIND);
/// ```
#[derive(Debug)]
pub struct OperationTimer {
    name: &'static str,
    kind: Option<&'static str>,
    start: Instant,
}

impl OperationTimer {
    #[must_use]
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            kind: None,
            start: Instant::now(),
        }
    }

    /// Attach the entity kind the operation works on.
    #[must_use]
    pub fn kind(mut self, kind: &'static str) -> Self {
        self.kind = Some(kind);
        self
    }

    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

impl Drop for OperationTimer {
    fn drop(&mut self) {
        let elapsed = self.start.elapsed();
        let duration_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX);
        let kind = self.kind.unwrap_or("-");
        if elapsed >= SLOW_OPERATION {
            warn!(operation = self.name, kind, duration_ms, "Slow operation");
        } else {
            debug!(operation = self.name, kind, duration_ms, "Operation completed");
        }
    }
}

/// Short hex id used to correlate the log lines of one HTTP request.
#[must_use]
pub fn generate_request_id() -> String {
    let id = uuid::Uuid::new_v4().simple().to_string();
    id.chars().take(12).collect()
}

#[cfg(test)]
#[path = "metrics_tests.rs"]
mod metrics_tests;
