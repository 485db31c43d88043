//! Membership UI module
//!
//! Provides the login/registration modal and the auth context that controls
//! its visibility and remembers who signed in.

mod context;
mod login_modal;

pub use context::{AuthContext, HttpAuthenticator, provide_auth_context, use_auth_context};
pub use login_modal::LoginModal;
