//! Signup Flow Library
//!
//! This crate drives the signup screen: it folds user input into the form,
//! validates it, calls the authentication service and reports the outcome.
//! Every collaborator (auth service, router, notifier) is injected.

pub mod client;
pub mod collaborators;
pub mod notice;
pub mod reporting;
pub mod service;

use std::sync::Arc;

use common::SignupConfig;
use tracing::debug;

pub use client::{AccountSummary, InMemoryAccounts};
pub use collaborators::{AuthGateway, Navigator, Reporter};
pub use notice::{Message, NoticeKind};
pub use reporting::{HistoryNavigator, TracingReporter};
pub use service::{SignupScreen, SubmitOutcome};

/// Build a screen wired to the bundled in-memory auth backend.
pub fn build_screen(
    config: &SignupConfig,
    accounts: Arc<InMemoryAccounts>,
    navigator: Arc<dyn Navigator>,
    reporter: Arc<dyn Reporter>,
) -> SignupScreen {
    accounts.set_available(config.auth_available);
    debug!(
        "Building signup screen (home: {}, auth available: {})",
        config.home_path, config.auth_available
    );
    SignupScreen::new(accounts, navigator, reporter).with_home_path(config.home_path.clone())
}
