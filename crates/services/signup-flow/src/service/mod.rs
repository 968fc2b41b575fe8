//! Signup screen business logic.

mod signup_screen;

pub use signup_screen::{SignupScreen, SubmitOutcome};
