//! User-facing notices emitted at the end of each submission.

use serde::Serialize;

use common::SignupError;
use domain::FailureReason;

/// Terminal outcome a notice is shown for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeKind {
    MissingFields,
    PasswordMismatch,
    WeakPassword,
    SignedUp,
    SignupFailed,
}

/// Title and description of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Message {
    pub title: &'static str,
    pub description: &'static str,
}

impl NoticeKind {
    /// Destructive notices are rendered as errors
    pub fn is_destructive(&self) -> bool {
        !matches!(self, NoticeKind::SignedUp)
    }

    pub fn message(&self) -> Message {
        let (title, description) = match self {
            NoticeKind::MissingFields => (
                "Champs manquants",
                "Veuillez remplir tous les champs, y compris votre rôle sur la plateforme.",
            ),
            NoticeKind::PasswordMismatch => ("Erreur", "Les mots de passe ne correspondent pas."),
            NoticeKind::WeakPassword => (
                "Mot de passe faible",
                "Veuillez respecter tous les critères de sécurité.",
            ),
            NoticeKind::SignedUp => (
                "Inscription réussie",
                "Votre compte a été créé avec succès.",
            ),
            NoticeKind::SignupFailed => (
                "Erreur d'inscription",
                "Une erreur s'est produite lors de l'inscription. Veuillez réessayer.",
            ),
        };
        Message { title, description }
    }
}

impl From<FailureReason> for NoticeKind {
    fn from(reason: FailureReason) -> Self {
        match reason {
            FailureReason::MissingFields => NoticeKind::MissingFields,
            FailureReason::PasswordMismatch => NoticeKind::PasswordMismatch,
            FailureReason::WeakPassword => NoticeKind::WeakPassword,
        }
    }
}

impl From<&SignupError> for NoticeKind {
    fn from(err: &SignupError) -> Self {
        match err {
            SignupError::MissingFields => NoticeKind::MissingFields,
            SignupError::PasswordMismatch => NoticeKind::PasswordMismatch,
            SignupError::WeakPassword => NoticeKind::WeakPassword,
            // Rejections and faults share one generic notice
            SignupError::SignupRejected | SignupError::SignupFault(_) => NoticeKind::SignupFailed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_success_is_not_destructive() {
        assert!(!NoticeKind::SignedUp.is_destructive());
        assert!(NoticeKind::MissingFields.is_destructive());
        assert!(NoticeKind::SignupFailed.is_destructive());
    }

    #[test]
    fn test_rejection_and_fault_share_notice() {
        let rejected = NoticeKind::from(&SignupError::SignupRejected);
        let fault = NoticeKind::from(&SignupError::SignupFault("timeout".into()));
        assert_eq!(rejected, fault);
        assert_eq!(rejected.message().title, "Erreur d'inscription");
    }

    #[test]
    fn test_fault_notice_hides_detail() {
        let err = SignupError::SignupFault("connection refused on 10.0.0.7".into());
        let message = NoticeKind::from(&err).message();
        assert!(!message.title.contains("10.0.0.7"));
        assert!(!message.description.contains("10.0.0.7"));
    }

    #[test]
    fn test_validation_notices_follow_reason() {
        let kind = NoticeKind::from(&SignupError::from(FailureReason::WeakPassword));
        assert_eq!(kind, NoticeKind::from(FailureReason::WeakPassword));
        assert_eq!(kind.message().title, "Mot de passe faible");
    }
}
