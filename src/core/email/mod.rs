//! Email delivery abstractions and the registration welcome template.
//!
//! The modal talks to a [`Mailer`]; the client implementation posts an
//! [`EmailRequest`] to `POST /api/email/send`, where the server hands it to
//! the SMTP transport. Delivery is best effort: the registration success
//! screen is already shown before any of this runs.

use serde::{Deserialize, Serialize};

#[cfg(feature = "ssr")]
pub mod api;
#[cfg(feature = "ssr")]
pub mod smtp;

/// One outbound message plus the SMTP parameters to deliver it with.
/// Connection parameters travel with the request because the settings
/// collaborator owns them, not the email endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailRequest {
    pub smtp_host: String,
    pub smtp_port: u16,
    pub smtp_user: String,
    pub smtp_pass: String,
    pub to: String,
    /// Secondary recipient; empty means no carbon copy.
    pub cc: String,
    pub subject: String,
    pub text: String,
}

/// Wire response of the email endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailResponse {
    pub success: bool,
    pub error: Option<String>,
}

/// Error produced by a mailer. Shared between server and wasm builds, so it
/// carries plain text rather than transport-specific error types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailError(String);

impl MailError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

impl std::fmt::Display for MailError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for MailError {}

/// Email delivery collaborator.
pub trait Mailer {
    async fn send(&self, request: &EmailRequest) -> Result<(), MailError>;
}

/// Subject line of the registration notification.
pub fn welcome_subject() -> String {
    "[HomeWorth] Welcome aboard! Registration confirmed".to_string()
}

/// Plain-text body of the registration notification.
pub fn welcome_body(name: &str, email: &str, phone: &str) -> String {
    format!(
        "Dear {name},\n\n\
         Welcome to HomeWorth!\n\
         Your account has been created successfully.\n\n\
         Registration details:\n\
         Email: {email}\n\
         Phone: {phone}\n\n\
         (This message was sent automatically.)"
    )
}
