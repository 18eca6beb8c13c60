//! Per-request warning log
//!
//! An ordered, append-only list of human-readable degradation notes shared by
//! every component of one extraction request. Cloning the handle shares the
//! same list, so parallel probes can append safely.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::debug;

#[derive(Debug, Clone, Default)]
pub struct WarningLog {
    entries: Arc<Mutex<Vec<String>>>,
}

impl WarningLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a warning
    pub fn push<S: Into<String>>(&self, message: S) {
        let message = message.into();
        debug!("Warning recorded: {}", message);
        self.lock().push(message);
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Whether any warning contains `needle`
    pub fn contains(&self, needle: &str) -> bool {
        self.lock().iter().any(|w| w.contains(needle))
    }

    /// Copy of all warnings in append order
    pub fn snapshot(&self) -> Vec<String> {
        self.lock().clone()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<String>> {
        // A panic while holding the lock cannot leave a Vec<String> half-written
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_order() {
        let log = WarningLog::new();
        assert!(log.is_empty());

        log.push("first");
        log.push(String::from("second"));

        assert_eq!(log.len(), 2);
        assert_eq!(log.snapshot(), vec!["first", "second"]);
        assert!(log.contains("sec"));
        assert!(!log.contains("third"));
    }

    #[test]
    fn test_clones_share_entries() {
        let log = WarningLog::new();
        let handle = log.clone();
        handle.push("from clone");
        assert_eq!(log.snapshot(), vec!["from clone"]);
    }

    #[tokio::test]
    async fn test_concurrent_append() {
        let log = WarningLog::new();
        let tasks: Vec<_> = (0..16)
            .map(|i| {
                let log = log.clone();
                tokio::spawn(async move { log.push(format!("probe {i} failed")) })
            })
            .collect();

        for task in tasks {
            task.await.unwrap();
        }

        assert_eq!(log.len(), 16);
    }
}
