use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};

use crate::ui::auth::{LoginModal, provide_auth_context};
use crate::ui::icon::{Icon, icons};
use crate::ui::settings::provide_settings_context;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    // App-wide settings (language, SMTP configuration) and auth state
    let settings = provide_settings_context();
    let auth = provide_auth_context();

    view! {
        // injects a stylesheet into the document <head>
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/homeworth.css"/>

        // sets the document title
        <Title text="HomeWorth - AI Property Appraisal"/>

        <div class="min-h-screen bg-gray-50">
            <header class="flex items-center justify-between px-6 py-4 bg-white border-b">
                <h1 class="text-xl font-bold text-gray-800 flex items-center gap-2">
                    <Icon name=icons::SPARKLES class="h-6 w-6 text-blue-600"/>
                    "HomeWorth"
                </h1>
                {move || match auth.signed_in_as.get() {
                    Some(email) => view! {
                        <span class="text-sm text-gray-600">{email}</span>
                    }
                    .into_any(),
                    None => view! {
                        <button
                            class="px-4 py-2 bg-blue-600 hover:bg-blue-700 text-white rounded-lg text-sm"
                            on:click=move |_| auth.open_modal()
                        >
                            {move || settings.t("login")}
                        </button>
                    }
                    .into_any(),
                }}
            </header>

            <main class="max-w-3xl mx-auto px-6 py-16 text-center space-y-4">
                <h2 class="text-3xl font-bold text-gray-800">
                    "AI-assisted property valuation"
                </h2>
                <p class="text-gray-600">
                    "Sign in or create an account to start appraising properties."
                </p>
            </main>

            {move || auth.modal_open.get().then(|| view! { <LoginModal/> })}
        </div>
    }
}
