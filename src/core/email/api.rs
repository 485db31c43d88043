//! HTTP surface of the email collaborator.

use axum::routing::post;
use axum::{Json, Router};

use super::smtp;
use super::{EmailRequest, EmailResponse};

/// Router exposing `POST /api/email/send`.
pub fn email_router() -> Router {
    Router::new().route("/api/email/send", post(send_email))
}

/// Delivery failures are part of the response body, never an HTTP error:
/// the caller treats the outcome as an informational status.
async fn send_email(Json(request): Json<EmailRequest>) -> Json<EmailResponse> {
    let to = request.to.clone();
    match smtp::deliver_blocking(request).await {
        Ok(()) => {
            tracing::info!(to = %to, "notification email sent");
            Json(EmailResponse {
                success: true,
                error: None,
            })
        }
        Err(e) => {
            tracing::error!(to = %to, error = %e, "notification email failed");
            Json(EmailResponse {
                success: false,
                error: Some(e.to_string()),
            })
        }
    }
}
