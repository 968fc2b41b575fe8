//! In-memory authentication backend.
//!
//! Stands in for the real authentication service in the command-line front
//! end and in tests. Emails are unique case-insensitively.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::RwLock;
use tracing::{debug, info};
use uuid::Uuid;

use common::{AuthError, AuthResult};
use domain::Role;

use super::password::HashedPassword;
use crate::collaborators::AuthGateway;

#[derive(Debug, Clone)]
struct Account {
    id: Uuid,
    full_name: String,
    email: String,
    role: Role,
    password: HashedPassword,
    created_at: DateTime<Utc>,
}

/// Account data safe to display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccountSummary {
    pub id: Uuid,
    pub full_name: String,
    pub email: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

impl From<&Account> for AccountSummary {
    fn from(account: &Account) -> Self {
        Self {
            id: account.id,
            full_name: account.full_name.clone(),
            email: account.email.clone(),
            role: account.role,
            created_at: account.created_at,
        }
    }
}

/// Account store kept in process memory.
#[derive(Debug)]
pub struct InMemoryAccounts {
    accounts: RwLock<HashMap<String, Account>>,
    available: AtomicBool,
}

impl Default for InMemoryAccounts {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryAccounts {
    pub fn new() -> Self {
        Self {
            accounts: RwLock::new(HashMap::new()),
            available: AtomicBool::new(true),
        }
    }

    /// Simulate the service going offline (calls fault) or coming back.
    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
    }

    pub fn is_available(&self) -> bool {
        self.available.load(Ordering::SeqCst)
    }

    pub async fn len(&self) -> usize {
        self.accounts.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.accounts.read().await.is_empty()
    }

    pub async fn find(&self, email: &str) -> Option<AccountSummary> {
        self.accounts
            .read()
            .await
            .get(&email_key(email))
            .map(AccountSummary::from)
    }

    /// Check a password against the stored hash.
    pub async fn verify_credentials(&self, email: &str, password: &str) -> bool {
        self.accounts
            .read()
            .await
            .get(&email_key(email))
            .map(|account| account.password.verify(password))
            .unwrap_or(false)
    }
}

fn email_key(email: &str) -> String {
    email.to_lowercase()
}

#[async_trait]
impl AuthGateway for InMemoryAccounts {
    async fn signup(
        &self,
        full_name: String,
        email: String,
        password: String,
        role: Role,
    ) -> AuthResult<bool> {
        if !self.is_available() {
            return Err(AuthError::unavailable("in-memory account store is offline"));
        }

        let key = email_key(&email);
        if self.accounts.read().await.contains_key(&key) {
            debug!("Signup declined, email already registered: {}", email);
            return Ok(false);
        }

        // Hash with no lock held; a racing signup may take the email meanwhile.
        let password = HashedPassword::new(&password)?;

        let mut accounts = self.accounts.write().await;
        if accounts.contains_key(&key) {
            debug!("Signup declined, email registered concurrently: {}", email);
            return Ok(false);
        }

        let account = Account {
            id: Uuid::new_v4(),
            full_name,
            email,
            role,
            password,
            created_at: Utc::now(),
        };
        info!("Created account {} ({}) as {}", account.id, account.email, account.role);
        accounts.insert(key, account);

        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_signup_creates_account() {
        let store = InMemoryAccounts::new();
        let created = store
            .signup(
                "Awa Traoré".into(),
                "awa@example.com".into(),
                "Abcdef1!".into(),
                Role::Merchant,
            )
            .await
            .unwrap();

        assert!(created);
        assert_eq!(store.len().await, 1);
        let account = store.find("awa@example.com").await.unwrap();
        assert_eq!(account.full_name, "Awa Traoré");
        assert_eq!(account.role, Role::Merchant);
        assert!(store.verify_credentials("awa@example.com", "Abcdef1!").await);
        assert!(!store.verify_credentials("awa@example.com", "nope").await);
    }

    #[tokio::test]
    async fn test_duplicate_email_is_declined() {
        let store = InMemoryAccounts::new();
        store
            .signup("Awa".into(), "awa@example.com".into(), "Abcdef1!".into(), Role::Merchant)
            .await
            .unwrap();

        let second = store
            .signup("Awa".into(), "AWA@example.com".into(), "Abcdef1!".into(), Role::Employer)
            .await
            .unwrap();

        assert!(!second);
        assert_eq!(store.len().await, 1);
        assert_eq!(store.find("awa@example.com").await.unwrap().role, Role::Merchant);
    }

    #[tokio::test]
    async fn test_concurrent_signups_for_one_email_create_one_account() {
        let store = InMemoryAccounts::new();

        let (first, second) = futures::join!(
            store.signup("Awa".into(), "awa@example.com".into(), "Abcdef1!".into(), Role::Merchant),
            store.signup("Awa".into(), "Awa@Example.com".into(), "Ghijkl2?".into(), Role::Employer),
        );

        let created = [first.unwrap(), second.unwrap()];
        assert_eq!(created.iter().filter(|c| **c).count(), 1);
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_offline_store_faults() {
        let store = InMemoryAccounts::new();
        store.set_available(false);

        let result = store
            .signup("Awa".into(), "awa@example.com".into(), "Abcdef1!".into(), Role::Merchant)
            .await;

        assert!(matches!(result, Err(AuthError::Unavailable(_))));
        assert!(store.is_empty().await);
    }
}
