//! Client-side validation run before any signup call.

use crate::error::FailureReason;
use crate::form::SignupForm;
use crate::password::is_strong;
use crate::role::Role;

/// Form values that passed validation, ready for the authentication service.
#[derive(Clone, PartialEq, Eq)]
pub struct ValidSignup {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

impl std::fmt::Debug for ValidSignup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ValidSignup")
            .field("full_name", &self.full_name)
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .field("role", &self.role)
            .finish()
    }
}

/// Check the form in order: required fields, confirmation, strength.
///
/// The first failing check wins.
pub fn validate(form: &SignupForm) -> Result<ValidSignup, FailureReason> {
    let role = match form.role {
        Some(role)
            if !form.full_name.is_empty()
                && !form.email.is_empty()
                && !form.password.is_empty()
                && !form.confirm_password.is_empty() =>
        {
            role
        }
        _ => return Err(FailureReason::MissingFields),
    };

    if form.password != form.confirm_password {
        return Err(FailureReason::PasswordMismatch);
    }

    if !is_strong(&form.password) {
        return Err(FailureReason::WeakPassword);
    }

    Ok(ValidSignup {
        full_name: form.full_name.clone(),
        email: form.email.clone(),
        password: form.password.clone(),
        role,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::FormEvent;

    fn complete_form() -> SignupForm {
        SignupForm::new().apply_all([
            FormEvent::FullNameChanged("Awa Traoré".into()),
            FormEvent::EmailChanged("awa@example.com".into()),
            FormEvent::PasswordChanged("Abcdef1!".into()),
            FormEvent::ConfirmPasswordChanged("Abcdef1!".into()),
            FormEvent::RoleSelected(Role::Merchant),
        ])
    }

    #[test]
    fn test_complete_form_is_valid() {
        let valid = validate(&complete_form()).unwrap();
        assert_eq!(valid.full_name, "Awa Traoré");
        assert_eq!(valid.email, "awa@example.com");
        assert_eq!(valid.password, "Abcdef1!");
        assert_eq!(valid.role, Role::Merchant);
    }

    #[test]
    fn test_each_missing_field_is_reported() {
        let blanks = [
            FormEvent::FullNameChanged(String::new()),
            FormEvent::EmailChanged(String::new()),
            FormEvent::PasswordChanged(String::new()),
            FormEvent::ConfirmPasswordChanged(String::new()),
            FormEvent::RoleCleared,
        ];

        for blank in blanks {
            let form = complete_form().reduce(blank.clone());
            assert_eq!(
                validate(&form),
                Err(FailureReason::MissingFields),
                "blanking with {:?}",
                blank
            );
        }
    }

    #[test]
    fn test_missing_fields_wins_over_mismatch() {
        let form = complete_form().apply_all([
            FormEvent::EmailChanged(String::new()),
            FormEvent::ConfirmPasswordChanged("other".into()),
        ]);
        assert_eq!(validate(&form), Err(FailureReason::MissingFields));
    }

    #[test]
    fn test_mismatch_wins_over_weak_password() {
        let form = complete_form().apply_all([
            FormEvent::PasswordChanged("weak".into()),
            FormEvent::ConfirmPasswordChanged("weaker".into()),
        ]);
        assert_eq!(validate(&form), Err(FailureReason::PasswordMismatch));
    }

    #[test]
    fn test_weak_password_for_each_criterion() {
        // each fails exactly one criterion
        for password in ["Abcde1!", "abcdef1!", "Abcdefg!", "Abcdefg1"] {
            let form = complete_form().apply_all([
                FormEvent::PasswordChanged(password.into()),
                FormEvent::ConfirmPasswordChanged(password.into()),
            ]);
            assert_eq!(
                validate(&form),
                Err(FailureReason::WeakPassword),
                "password {:?}",
                password
            );
        }
    }

    #[test]
    fn test_whitespace_is_not_trimmed() {
        let form = complete_form().reduce(FormEvent::FullNameChanged(" ".into()));
        assert!(validate(&form).is_ok());
    }

    #[test]
    fn test_validation_ignores_submission_flags() {
        let form = complete_form().reduce(FormEvent::SubmissionStarted);
        assert!(validate(&form).is_ok());
    }
}
