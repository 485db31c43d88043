//! Application settings shared between server and client.
//!
//! The server materializes [`AppSettings`] from environment configuration
//! and serves them at `GET /api/settings`; the client fetches them once
//! after hydration. The SMTP block mirrors what the email endpoint expects
//! in its request, so the modal can hand the parameters straight through.

use serde::{Deserialize, Serialize};

use crate::core::i18n::Language;

/// Default SMTP submission port.
pub const DEFAULT_SMTP_PORT: u16 = 587;

/// Settings the membership UI reads. Empty strings mean "not configured",
/// matching the env-var-absent case on the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppSettings {
    /// UI language tag, e.g. "en" or "zh-TW".
    pub language: String,
    pub smtp_host: String,
    pub smtp_port: u16,
    pub smtp_user: String,
    pub smtp_pass: String,
    /// Carbon-copy recipient for system notification mail.
    pub system_email: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            smtp_host: String::new(),
            smtp_port: DEFAULT_SMTP_PORT,
            smtp_user: String::new(),
            smtp_pass: String::new(),
            system_email: String::new(),
        }
    }
}

impl AppSettings {
    /// Whether enough SMTP configuration is present to attempt delivery.
    /// Host and user are required; password may legitimately be empty for
    /// unauthenticated relays.
    pub fn has_smtp(&self) -> bool {
        !self.smtp_host.is_empty() && !self.smtp_user.is_empty()
    }

    pub fn language(&self) -> Language {
        Language::from_tag(&self.language)
    }
}

/// Router exposing the settings collaborator to the client.
#[cfg(feature = "ssr")]
pub fn settings_router(settings: AppSettings) -> axum::Router {
    use axum::extract::State;
    use axum::routing::get;
    use axum::{Json, Router};

    async fn get_settings(State(settings): State<AppSettings>) -> Json<AppSettings> {
        Json(settings)
    }

    Router::new()
        .route("/api/settings", get(get_settings))
        .with_state(settings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings_have_no_smtp() {
        let settings = AppSettings::default();
        assert!(!settings.has_smtp());
        assert_eq!(settings.smtp_port, DEFAULT_SMTP_PORT);
        assert_eq!(settings.language(), Language::En);
    }

    #[test]
    fn has_smtp_requires_host_and_user() {
        let mut settings = AppSettings {
            smtp_host: "smtp.example.com".to_string(),
            smtp_user: "noreply@example.com".to_string(),
            ..AppSettings::default()
        };
        assert!(settings.has_smtp());

        settings.smtp_host.clear();
        assert!(!settings.has_smtp());

        settings.smtp_host = "smtp.example.com".to_string();
        settings.smtp_user.clear();
        assert!(!settings.has_smtp());
    }

    #[test]
    fn password_is_not_required_for_has_smtp() {
        let settings = AppSettings {
            smtp_host: "smtp.example.com".to_string(),
            smtp_user: "noreply@example.com".to_string(),
            smtp_pass: String::new(),
            ..AppSettings::default()
        };
        assert!(settings.has_smtp());
    }

    #[test]
    fn settings_survive_the_json_wire_format() {
        let settings = AppSettings {
            language: "zh-TW".to_string(),
            smtp_host: "smtp.example.com".to_string(),
            smtp_port: 2525,
            smtp_user: "noreply@example.com".to_string(),
            smtp_pass: "hunter2".to_string(),
            system_email: "admin@example.com".to_string(),
        };

        let json = serde_json::to_string(&settings).unwrap();
        let decoded: AppSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, settings);
        assert_eq!(decoded.language(), Language::ZhTw);
    }
}
