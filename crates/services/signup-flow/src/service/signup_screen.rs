//! Signup screen - Holds the form and coordinates submission.
//!
//! A submission validates the form, calls the authentication service once,
//! then either navigates home or reports a failure. At most one call is in
//! flight per screen; the in-progress flag is cleared on every exit path.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde::Serialize;
use tracing::{debug, error, info, warn};

use common::SignupError;
use domain::{validate, FailureReason, FormEvent, SignupForm, HOME_PATH};

use crate::collaborators::{AuthGateway, Navigator, Reporter};
use crate::notice::NoticeKind;

/// How a call to [`SignupScreen::submit`] ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", content = "reason", rename_all = "snake_case")]
pub enum SubmitOutcome {
    /// Account created, navigated home
    SignedUp,
    /// Blocked by client-side validation
    Invalid(FailureReason),
    /// Auth service answered `false`
    Rejected,
    /// Auth service call failed
    Faulted,
    /// Another submission was already in flight
    Suppressed,
}

impl SubmitOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, SubmitOutcome::SignedUp)
    }
}

/// Signup screen state holder and submission coordinator.
pub struct SignupScreen {
    form: Mutex<SignupForm>,
    auth: Arc<dyn AuthGateway>,
    navigator: Arc<dyn Navigator>,
    reporter: Arc<dyn Reporter>,
    home_path: String,
}

/// Clears the in-progress flag when dropped, even if the call faulted or the
/// submit future was dropped mid-flight.
struct SubmissionGuard<'a> {
    form: &'a Mutex<SignupForm>,
}

impl Drop for SubmissionGuard<'_> {
    fn drop(&mut self) {
        apply(&mut lock(self.form), FormEvent::SubmissionFinished);
        debug!("Submission finished");
    }
}

fn lock(form: &Mutex<SignupForm>) -> MutexGuard<'_, SignupForm> {
    form.lock().unwrap_or_else(PoisonError::into_inner)
}

fn apply(form: &mut SignupForm, event: FormEvent) {
    let current = std::mem::take(form);
    *form = current.reduce(event);
}

impl SignupScreen {
    /// Create a screen with an empty form.
    pub fn new(
        auth: Arc<dyn AuthGateway>,
        navigator: Arc<dyn Navigator>,
        reporter: Arc<dyn Reporter>,
    ) -> Self {
        Self {
            form: Mutex::new(SignupForm::new()),
            auth,
            navigator,
            reporter,
            home_path: HOME_PATH.to_string(),
        }
    }

    /// Override the destination reached after a successful signup.
    pub fn with_home_path(mut self, home_path: impl Into<String>) -> Self {
        self.home_path = home_path.into();
        self
    }

    /// Apply a user input event and return the updated form.
    ///
    /// Submission transitions are ignored: only [`SignupScreen::submit`]
    /// moves the in-progress flag.
    pub fn dispatch(&self, event: FormEvent) -> SignupForm {
        let mut form = lock(&self.form);
        if event.is_submission_transition() {
            warn!(?event, "Ignoring submission transition from input");
            return form.clone();
        }
        debug!(?event, "Form event");
        apply(&mut form, event);
        form.clone()
    }

    /// Current form values.
    pub fn snapshot(&self) -> SignupForm {
        lock(&self.form).clone()
    }

    pub fn is_submitting(&self) -> bool {
        lock(&self.form).is_submitting
    }

    /// Validate the form and, if it passes, create the account.
    pub async fn submit(&self) -> SubmitOutcome {
        // Check-and-set under one lock so racing submits cannot both start
        let checked = {
            let mut form = lock(&self.form);
            if form.is_submitting {
                debug!("Submission already in flight, ignoring");
                return SubmitOutcome::Suppressed;
            }
            let checked = validate(&form);
            if checked.is_ok() {
                apply(&mut form, FormEvent::SubmissionStarted);
            }
            checked
        };

        let signup = match checked {
            Ok(signup) => signup,
            Err(reason) => {
                warn!("Signup blocked: {}", reason);
                self.report_error(&SignupError::from(reason));
                return SubmitOutcome::Invalid(reason);
            }
        };

        let _guard = SubmissionGuard { form: &self.form };
        debug!(email = %signup.email, role = %signup.role, "Submitting signup");

        let result = self
            .auth
            .signup(signup.full_name, signup.email, signup.password, signup.role)
            .await;

        match result {
            Ok(true) => {
                info!("Signup succeeded");
                self.report(NoticeKind::SignedUp);
                self.navigator.navigate(&self.home_path);
                SubmitOutcome::SignedUp
            }
            Ok(false) => {
                warn!("Signup rejected by authentication service");
                self.report_error(&SignupError::SignupRejected);
                SubmitOutcome::Rejected
            }
            Err(err) => {
                let err = SignupError::from(err);
                error!(code = err.code(), "Signup call failed: {}", err);
                self.report_error(&err);
                SubmitOutcome::Faulted
            }
        }
    }

    fn report(&self, kind: NoticeKind) {
        self.reporter.report(kind, kind.message());
    }

    fn report_error(&self, err: &SignupError) {
        debug!("Reporting {}", err.code());
        self.report(NoticeKind::from(err));
    }
}
