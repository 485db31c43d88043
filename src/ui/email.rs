//! Client-side email collaborator.

use crate::core::email::{EmailRequest, MailError, Mailer};

/// Posts email requests to the server's `/api/email/send` endpoint.
pub struct HttpMailer;

#[cfg(not(feature = "ssr"))]
impl Mailer for HttpMailer {
    async fn send(&self, request: &EmailRequest) -> Result<(), MailError> {
        use crate::core::email::EmailResponse;

        let response = gloo_net::http::Request::post("/api/email/send")
            .json(request)
            .map_err(|e| MailError::new(e.to_string()))?
            .send()
            .await
            .map_err(|e| MailError::new(e.to_string()))?;

        let body: EmailResponse = response
            .json()
            .await
            .map_err(|e| MailError::new(e.to_string()))?;

        if body.success {
            Ok(())
        } else {
            Err(MailError::new(
                body.error.unwrap_or_else(|| "unknown error".to_string()),
            ))
        }
    }
}

#[cfg(feature = "ssr")]
impl Mailer for HttpMailer {
    async fn send(&self, _request: &EmailRequest) -> Result<(), MailError> {
        Err(MailError::new("email sending not available on the server"))
    }
}
