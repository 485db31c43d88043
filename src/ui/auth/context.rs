//! Auth context and the client-side authentication collaborator.
//!
//! The context carries only UI-visible state: whether the modal is open and
//! which email is signed in. There are no tokens or sessions to manage.

use leptos::prelude::*;
use serde::{Deserialize, Serialize};

use crate::core::flow::{Authenticator, RegisterOutcome, RegistrationRequest};

/// Auth context providing modal visibility and the signed-in member.
#[derive(Clone, Copy)]
pub struct AuthContext {
    pub modal_open: RwSignal<bool>,
    pub signed_in_as: RwSignal<Option<String>>,
}

impl AuthContext {
    pub fn open_modal(&self) {
        self.modal_open.set(true);
    }

    pub fn close_modal(&self) {
        self.modal_open.set(false);
    }

    pub fn is_signed_in(&self) -> bool {
        self.signed_in_as.with(|member| member.is_some())
    }
}

/// Provide the auth context to the component tree.
pub fn provide_auth_context() -> AuthContext {
    let ctx = AuthContext {
        modal_open: RwSignal::new(false),
        signed_in_as: RwSignal::new(None),
    };
    provide_context(ctx);
    ctx
}

/// Get the auth context from the component tree.
pub fn use_auth_context() -> AuthContext {
    expect_context::<AuthContext>()
}

#[derive(Debug, Serialize)]
#[allow(dead_code)]
struct LoginRequest {
    email: String,
    password: String,
}

#[derive(Debug, Deserialize)]
#[allow(dead_code)]
struct LoginResponse {
    success: bool,
}

#[derive(Debug, Deserialize)]
#[allow(dead_code)]
struct RegisterResponse {
    success: bool,
    message_key: Option<String>,
}

/// Authentication collaborator backed by the `/api/auth/*` endpoints.
pub struct HttpAuthenticator;

#[cfg(not(feature = "ssr"))]
impl Authenticator for HttpAuthenticator {
    /// Transport failures count as a failed login.
    async fn login(&self, email: &str, password: &str) -> bool {
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };

        let response = match gloo_net::http::Request::post("/api/auth/login").json(&request) {
            Ok(builder) => builder.send().await,
            Err(_) => return false,
        };

        match response {
            Ok(response) => response
                .json::<LoginResponse>()
                .await
                .map(|body| body.success)
                .unwrap_or(false),
            Err(_) => false,
        }
    }

    async fn register(&self, request: &RegistrationRequest) -> RegisterOutcome {
        let network_error = || RegisterOutcome::Rejected {
            message_key: "error_network".to_string(),
        };

        let response = match gloo_net::http::Request::post("/api/auth/register").json(request) {
            Ok(builder) => builder.send().await,
            Err(_) => return network_error(),
        };

        let Ok(response) = response else {
            return network_error();
        };

        match response.json::<RegisterResponse>().await {
            Ok(body) if body.success => RegisterOutcome::Accepted,
            Ok(body) => RegisterOutcome::Rejected {
                message_key: body
                    .message_key
                    .unwrap_or_else(|| "error_register_failed".to_string()),
            },
            Err(_) => network_error(),
        }
    }
}

#[cfg(feature = "ssr")]
impl Authenticator for HttpAuthenticator {
    async fn login(&self, _email: &str, _password: &str) -> bool {
        false
    }

    async fn register(&self, _request: &RegistrationRequest) -> RegisterOutcome {
        RegisterOutcome::Rejected {
            message_key: "error_register_failed".to_string(),
        }
    }
}
