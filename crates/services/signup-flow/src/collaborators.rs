//! Interfaces of the systems the signup screen depends on.

use async_trait::async_trait;

use common::AuthResult;
use domain::Role;

use crate::notice::{Message, NoticeKind};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Account creation on the authentication service.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait AuthGateway: Send + Sync {
    /// Create an account.
    ///
    /// Returns `Ok(true)` when the account was created, `Ok(false)` when the
    /// service declined it, and `Err` on any fault.
    async fn signup(
        &self,
        full_name: String,
        email: String,
        password: String,
        role: Role,
    ) -> AuthResult<bool>;
}

/// Router used to leave the screen.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait Navigator: Send + Sync {
    fn navigate(&self, path: &str);
}

/// Notification (toast) presentation.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait Reporter: Send + Sync {
    fn report(&self, kind: NoticeKind, message: Message);
}
