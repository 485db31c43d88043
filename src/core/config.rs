//! Application configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.

use crate::core::settings::{AppSettings, DEFAULT_SMTP_PORT};

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// UI language tag, e.g. "en" or "zh-TW"
    pub language: Option<String>,

    /// SMTP relay hostname
    /// Example: smtp.example.com
    pub smtp_host: Option<String>,

    /// SMTP submission port (defaults to 587 when unset or unparseable)
    pub smtp_port: Option<u16>,

    /// SMTP username, also used as the From address
    pub smtp_user: Option<String>,

    /// SMTP password
    pub smtp_pass: Option<String>,

    /// Administrator address carbon-copied on registration notifications
    pub system_email: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Self {
        Self {
            language: std::env::var("APP_LANGUAGE").ok(),
            smtp_host: std::env::var("SMTP_HOST").ok(),
            smtp_port: std::env::var("SMTP_PORT")
                .ok()
                .and_then(|port| port.parse().ok()),
            smtp_user: std::env::var("SMTP_USER").ok(),
            smtp_pass: std::env::var("SMTP_PASS").ok(),
            system_email: std::env::var("SYSTEM_EMAIL").ok(),
        }
    }

    /// Check if SMTP delivery is configured (host and user present)
    pub fn has_smtp(&self) -> bool {
        self.smtp_host.is_some() && self.smtp_user.is_some()
    }

    /// Check if a system (admin) email is configured
    pub fn has_system_email(&self) -> bool {
        self.system_email.is_some()
    }

    /// Materialize the settings served to the client. Absent values become
    /// empty strings so the client can treat "empty" as "not configured".
    pub fn app_settings(&self) -> AppSettings {
        AppSettings {
            language: self.language.clone().unwrap_or_else(|| "en".to_string()),
            smtp_host: self.smtp_host.clone().unwrap_or_default(),
            smtp_port: self.smtp_port.unwrap_or(DEFAULT_SMTP_PORT),
            smtp_user: self.smtp_user.clone().unwrap_or_default(),
            smtp_pass: self.smtp_pass.clone().unwrap_or_default(),
            system_email: self.system_email.clone().unwrap_or_default(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
