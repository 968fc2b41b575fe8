//! Bundled reporter and navigator implementations.

use std::sync::{Mutex, PoisonError};

use tracing::{info, warn};

use crate::collaborators::{Navigator, Reporter};
use crate::notice::{Message, NoticeKind};

/// Reporter that emits notices as tracing events.
#[derive(Debug, Default)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn report(&self, kind: NoticeKind, message: Message) {
        if kind.is_destructive() {
            warn!(?kind, "{}: {}", message.title, message.description);
        } else {
            info!(?kind, "{}: {}", message.title, message.description);
        }
    }
}

/// Navigator that records every visited path, like a browser history stack.
#[derive(Debug, Default)]
pub struct HistoryNavigator {
    history: Mutex<Vec<String>>,
}

impl HistoryNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Visited paths, oldest first
    pub fn history(&self) -> Vec<String> {
        self.history
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Last visited path, if any
    pub fn current(&self) -> Option<String> {
        self.history
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .last()
            .cloned()
    }
}

impl Navigator for HistoryNavigator {
    fn navigate(&self, path: &str) {
        info!("Navigating to {}", path);
        self.history
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(path.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_navigator_records_in_order() {
        let navigator = HistoryNavigator::new();
        assert_eq!(navigator.current(), None);

        navigator.navigate("/signup");
        navigator.navigate("/");

        assert_eq!(navigator.history(), vec!["/signup".to_string(), "/".to_string()]);
        assert_eq!(navigator.current().as_deref(), Some("/"));
    }

    #[test]
    fn test_tracing_reporter_accepts_every_kind() {
        let reporter = TracingReporter;
        for kind in [
            NoticeKind::MissingFields,
            NoticeKind::PasswordMismatch,
            NoticeKind::WeakPassword,
            NoticeKind::SignedUp,
            NoticeKind::SignupFailed,
        ] {
            reporter.report(kind, kind.message());
        }
    }
}
