//! Authentication service
//!
//! Business logic for member registration and login against an in-memory
//! account store. Passwords are stored as bcrypt hashes.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use uuid::Uuid;

use crate::core::flow::RegistrationRequest;

/// Authentication service error types
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Email already registered")]
    EmailAlreadyExists,

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl AuthError {
    /// i18n message key shown to the member for this rejection.
    pub fn message_key(&self) -> &'static str {
        match self {
            AuthError::EmailAlreadyExists => "error_email_exists",
            AuthError::InternalError(_) => "error_register_failed",
        }
    }
}

/// One registered account.
#[derive(Debug, Clone)]
struct UserRecord {
    #[allow(dead_code)]
    id: Uuid,
    #[allow(dead_code)]
    created_at: DateTime<Utc>,
    name: String,
    phone: String,
    password_hash: String,
}

/// In-memory account store keyed by email.
#[derive(Clone, Default)]
pub struct AuthService {
    users: Arc<DashMap<String, UserRecord>>,
}

impl AuthService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an account. Duplicate emails are rejected; field validation is
    /// the client's responsibility.
    pub fn register(&self, request: &RegistrationRequest) -> Result<(), AuthError> {
        if self.users.contains_key(&request.email) {
            return Err(AuthError::EmailAlreadyExists);
        }

        let password_hash = bcrypt::hash(&request.password, bcrypt::DEFAULT_COST)
            .map_err(|e| AuthError::InternalError(e.to_string()))?;

        let record = UserRecord {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            name: request.name.clone(),
            phone: request.phone.clone(),
            password_hash,
        };

        // A concurrent insert between the check and here would shadow one
        // registration; acceptable for an in-memory dev store.
        self.users.insert(request.email.clone(), record);

        tracing::info!(email = %request.email, "member registered");
        Ok(())
    }

    /// Verify credentials.
    pub fn login(&self, email: &str, password: &str) -> bool {
        match self.users.get(email) {
            Some(record) => bcrypt::verify(password, &record.password_hash).unwrap_or(false),
            None => false,
        }
    }

    /// Look up the stored profile fields for a member.
    pub fn member_profile(&self, email: &str) -> Option<(String, String)> {
        self.users
            .get(email)
            .map(|record| (record.name.clone(), record.phone.clone()))
    }
}
