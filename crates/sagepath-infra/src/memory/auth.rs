//! In-memory credential check.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::{Duration, Utc};
use uuid::Uuid;

use sagepath_core::domain::Session;
use sagepath_core::ports::{AuthError, AuthService};

struct Account {
    user_id: Uuid,
    password: String,
}

/// Accepts a fixed set of email/password pairs.
pub struct InMemoryAuthService {
    accounts: HashMap<String, Account>,
    lifetime: Duration,
    unavailable: AtomicBool,
    sign_in_calls: AtomicUsize,
}

impl InMemoryAuthService {
    pub fn new() -> Self {
        Self {
            accounts: HashMap::new(),
            lifetime: Duration::hours(1),
            unavailable: AtomicBool::new(false),
            sign_in_calls: AtomicUsize::new(0),
        }
    }

    pub fn with_account(mut self, email: &str, password: &str) -> Self {
        self.accounts.insert(
            email.to_lowercase(),
            Account {
                user_id: Uuid::new_v4(),
                password: password.to_string(),
            },
        );
        self
    }

    pub fn with_lifetime(mut self, lifetime: Duration) -> Self {
        self.lifetime = lifetime;
        self
    }

    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    pub fn sign_in_calls(&self) -> usize {
        self.sign_in_calls.load(Ordering::SeqCst)
    }
}

impl Default for InMemoryAuthService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AuthService for InMemoryAuthService {
    async fn sign_in(&self, email: &str, password: &str) -> Result<Session, AuthError> {
        self.sign_in_calls.fetch_add(1, Ordering::SeqCst);
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(AuthError::Unavailable("auth offline".to_string()));
        }

        match self.accounts.get(&email.to_lowercase()) {
            Some(account) if account.password == password => Ok(Session {
                user_id: account.user_id,
                email: email.to_string(),
                access_token: Uuid::new_v4().to_string(),
                expires_at: Utc::now() + self.lifetime,
            }),
            _ => Err(AuthError::Rejected("Invalid login credentials".to_string())),
        }
    }

    async fn sign_out(&self, _session: &Session) -> Result<(), AuthError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(AuthError::Unavailable("auth offline".to_string()));
        }
        Ok(())
    }
}
