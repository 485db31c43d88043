//! HTTP surface of the authentication collaborator.

use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use super::AuthService;
use crate::core::flow::RegistrationRequest;

#[derive(Debug, Deserialize)]
struct LoginRequest {
    email: String,
    password: String,
}

#[derive(Debug, Serialize)]
struct LoginResponse {
    success: bool,
}

#[derive(Debug, Serialize)]
struct RegisterResponse {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    message_key: Option<String>,
}

/// Router exposing `POST /api/auth/login` and `POST /api/auth/register`.
pub fn auth_router(service: AuthService) -> Router {
    Router::new()
        .route("/api/auth/login", post(login))
        .route("/api/auth/register", post(register))
        .with_state(service)
}

async fn login(
    State(service): State<AuthService>,
    Json(request): Json<LoginRequest>,
) -> Json<LoginResponse> {
    let success = service.login(&request.email, &request.password);
    if !success {
        tracing::debug!(email = %request.email, "login rejected");
    }
    Json(LoginResponse { success })
}

/// Rejections are part of the response body as a message key; the client
/// translates and displays them next to the form.
async fn register(
    State(service): State<AuthService>,
    Json(request): Json<RegistrationRequest>,
) -> Json<RegisterResponse> {
    match service.register(&request) {
        Ok(()) => Json(RegisterResponse {
            success: true,
            message_key: None,
        }),
        Err(e) => {
            tracing::debug!(email = %request.email, error = %e, "registration rejected");
            Json(RegisterResponse {
                success: false,
                message_key: Some(e.message_key().to_string()),
            })
        }
    }
}
