//! Signup form state and its reducer.
//!
//! The form is an immutable value: every user input and every submission
//! transition is a [`FormEvent`] folded into a new [`SignupForm`] by
//! [`SignupForm::reduce`].

use serde::Serialize;

use crate::password::{criteria_report, CriterionStatus, StrengthMeter};
use crate::role::Role;

/// Input events applied to the form.
#[derive(Clone, PartialEq, Eq)]
pub enum FormEvent {
    FullNameChanged(String),
    EmailChanged(String),
    PasswordChanged(String),
    ConfirmPasswordChanged(String),
    RoleSelected(Role),
    RoleCleared,
    PasswordVisibilityToggled,
    SubmissionStarted,
    SubmissionFinished,
}

// Don't expose typed passwords in debug output
impl std::fmt::Debug for FormEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FormEvent::FullNameChanged(v) => f.debug_tuple("FullNameChanged").field(v).finish(),
            FormEvent::EmailChanged(v) => f.debug_tuple("EmailChanged").field(v).finish(),
            FormEvent::PasswordChanged(_) => {
                f.debug_tuple("PasswordChanged").field(&"[REDACTED]").finish()
            }
            FormEvent::ConfirmPasswordChanged(_) => f
                .debug_tuple("ConfirmPasswordChanged")
                .field(&"[REDACTED]")
                .finish(),
            FormEvent::RoleSelected(role) => f.debug_tuple("RoleSelected").field(role).finish(),
            FormEvent::RoleCleared => f.write_str("RoleCleared"),
            FormEvent::PasswordVisibilityToggled => f.write_str("PasswordVisibilityToggled"),
            FormEvent::SubmissionStarted => f.write_str("SubmissionStarted"),
            FormEvent::SubmissionFinished => f.write_str("SubmissionFinished"),
        }
    }
}

impl FormEvent {
    /// Events that move the in-progress flag, owned by the submission flow
    pub fn is_submission_transition(&self) -> bool {
        matches!(
            self,
            FormEvent::SubmissionStarted | FormEvent::SubmissionFinished
        )
    }
}

/// How both password inputs are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PasswordInput {
    Masked,
    Text,
}

/// Current values of the signup form.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    /// `None` until the user picks a role
    pub role: Option<Role>,
    pub is_submitting: bool,
    pub password_visible: bool,
}

impl std::fmt::Debug for SignupForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignupForm")
            .field("full_name", &self.full_name)
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .field("confirm_password", &"[REDACTED]")
            .field("role", &self.role)
            .field("is_submitting", &self.is_submitting)
            .field("password_visible", &self.password_visible)
            .finish()
    }
}

impl SignupForm {
    /// Create an empty form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one event and return the resulting form.
    pub fn reduce(self, event: FormEvent) -> Self {
        match event {
            FormEvent::FullNameChanged(full_name) => Self { full_name, ..self },
            FormEvent::EmailChanged(email) => Self { email, ..self },
            FormEvent::PasswordChanged(password) => Self { password, ..self },
            FormEvent::ConfirmPasswordChanged(confirm_password) => Self {
                confirm_password,
                ..self
            },
            FormEvent::RoleSelected(role) => Self {
                role: Some(role),
                ..self
            },
            FormEvent::RoleCleared => Self { role: None, ..self },
            FormEvent::PasswordVisibilityToggled => Self {
                password_visible: !self.password_visible,
                ..self
            },
            FormEvent::SubmissionStarted => Self {
                is_submitting: true,
                ..self
            },
            FormEvent::SubmissionFinished => Self {
                is_submitting: false,
                ..self
            },
        }
    }

    /// Fold a sequence of events into the form.
    pub fn apply_all<I>(self, events: I) -> Self
    where
        I: IntoIterator<Item = FormEvent>,
    {
        events.into_iter().fold(self, Self::reduce)
    }

    /// Whether the submit control is enabled.
    pub fn can_submit(&self) -> bool {
        !self.is_submitting
    }

    /// Rendering mode shared by the password and confirmation inputs.
    pub fn input_kind(&self) -> PasswordInput {
        if self.password_visible {
            PasswordInput::Text
        } else {
            PasswordInput::Masked
        }
    }

    /// The checklist is only shown once something has been typed.
    pub fn show_checklist(&self) -> bool {
        !self.password.is_empty()
    }

    /// Inline hint under the confirmation field.
    pub fn confirmation_mismatch(&self) -> bool {
        !self.confirm_password.is_empty() && self.password != self.confirm_password
    }

    pub fn checklist(&self) -> Vec<CriterionStatus> {
        criteria_report(&self.password)
    }

    pub fn strength_meter(&self) -> StrengthMeter {
        StrengthMeter::for_password(&self.password)
    }
}
