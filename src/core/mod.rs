//! Core domain logic: signup flow state machine, captcha, settings,
//! translations, and the server-side collaborator implementations.

#[cfg(feature = "ssr")]
pub mod auth;
pub mod captcha;
#[cfg(feature = "ssr")]
pub mod config;
pub mod email;
pub mod flow;
pub mod i18n;
pub mod settings;
