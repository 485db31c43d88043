pub mod auth;
pub mod email;
pub mod icon;
pub mod settings;

pub use icon::{Icon, icons};
