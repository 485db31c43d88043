//! SMTP delivery via lettre.
//!
//! The transport is the blocking `SmtpTransport`, run on the blocking thread
//! pool so the request handler stays async. No retry policy: a failed send
//! is reported back to the caller and rendered as an informational status.

use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};

use super::{EmailRequest, MailError};

/// Build the lettre message for a request. The From address is the SMTP
/// user; an empty `cc` is skipped.
pub fn build_message(request: &EmailRequest) -> Result<Message, MailError> {
    let from = request
        .smtp_user
        .parse()
        .map_err(|e| MailError::new(format!("invalid from address '{}': {e}", request.smtp_user)))?;
    let to = request
        .to
        .parse()
        .map_err(|e| MailError::new(format!("invalid recipient '{}': {e}", request.to)))?;

    let mut builder = Message::builder()
        .from(from)
        .to(to)
        .subject(&request.subject)
        .header(ContentType::TEXT_PLAIN);

    if !request.cc.is_empty() {
        let cc = request
            .cc
            .parse()
            .map_err(|e| MailError::new(format!("invalid cc address '{}': {e}", request.cc)))?;
        builder = builder.cc(cc);
    }

    builder
        .body(request.text.clone())
        .map_err(|e| MailError::new(format!("failed to build message: {e}")))
}

/// Deliver one message synchronously.
pub fn deliver(request: &EmailRequest) -> Result<(), MailError> {
    let message = build_message(request)?;

    let mailer = SmtpTransport::relay(&request.smtp_host)
        .map_err(|e| MailError::new(format!("invalid SMTP relay '{}': {e}", request.smtp_host)))?
        .port(request.smtp_port)
        .credentials(Credentials::new(
            request.smtp_user.clone(),
            request.smtp_pass.clone(),
        ))
        .build();

    mailer
        .send(&message)
        .map(|_| ())
        .map_err(|e| MailError::new(e.to_string()))
}

/// Deliver one message from an async context.
pub async fn deliver_blocking(request: EmailRequest) -> Result<(), MailError> {
    match tokio::task::spawn_blocking(move || deliver(&request)).await {
        Ok(result) => result,
        Err(e) => Err(MailError::new(format!("mail task failed: {e}"))),
    }
}
