//! Settings context for the client.
//!
//! Server-rendered markup starts from default settings; after hydration the
//! client fetches the real settings from `/api/settings` and the UI reacts.

use leptos::prelude::*;

use crate::core::i18n::{self, Language};
use crate::core::settings::AppSettings;

/// Read-only settings context plus the translation helper.
#[derive(Clone, Copy)]
pub struct SettingsContext {
    pub settings: RwSignal<AppSettings>,
}

impl SettingsContext {
    /// Current UI language (reactive).
    pub fn language(&self) -> Language {
        self.settings.with(|s| s.language())
    }

    /// Translate a key for the current language (reactive).
    pub fn t(&self, key: &str) -> String {
        i18n::t(self.language(), key)
    }
}

/// Provide the settings context to the component tree.
pub fn provide_settings_context() -> SettingsContext {
    let settings = RwSignal::new(AppSettings::default());
    let ctx = SettingsContext { settings };

    // Fetch real settings after hydration (client-side only).
    #[cfg(not(feature = "ssr"))]
    {
        use leptos::task::spawn_local;

        Effect::new(move |_| {
            spawn_local(async move {
                if let Ok(fetched) = fetch_settings().await {
                    settings.set(fetched);
                }
            });
        });
    }

    provide_context(ctx);
    ctx
}

/// Get the settings context from the component tree.
pub fn use_settings_context() -> SettingsContext {
    expect_context::<SettingsContext>()
}

#[cfg(not(feature = "ssr"))]
async fn fetch_settings() -> Result<AppSettings, String> {
    let response = gloo_net::http::Request::get("/api/settings")
        .send()
        .await
        .map_err(|e| e.to_string())?;

    response
        .json::<AppSettings>()
        .await
        .map_err(|e| e.to_string())
}
