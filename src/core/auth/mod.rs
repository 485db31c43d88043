//! Server-side authentication collaborator.
//!
//! Backs the `/api/auth/*` endpoints the modal's client collaborator calls.
//! Accounts live in process memory only; persistence and session management
//! are out of scope.

mod api;
mod service;

pub use api::auth_router;
pub use service::{AuthError, AuthService};
