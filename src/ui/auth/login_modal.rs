//! Login/registration modal
//!
//! One modal, two modes. Registration adds name/phone fields and a 6-digit
//! captcha, and on success shows a confirmation screen while a welcome email
//! is sent in the background. All flow decisions live in
//! [`crate::core::flow`]; this component wires signals and markup.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::context::{HttpAuthenticator, use_auth_context};
use crate::core::flow::{SignupForm, SubmitOutcome, notify_registration};
use crate::ui::email::HttpMailer;
use crate::ui::icon::{Icon, icons};
use crate::ui::settings::use_settings_context;

/// Login/registration modal component
#[component]
pub fn LoginModal() -> impl IntoView {
    let auth = use_auth_context();
    let settings = use_settings_context();

    let form = RwSignal::new(SignupForm::new());

    // Handle form submission. The success screen renders as soon as the
    // form state is written back; the notification email is awaited after
    // that and only updates the auxiliary status line.
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        spawn_local(async move {
            let mut state = form.get_untracked();
            let outcome = state.submit(&HttpAuthenticator).await;
            form.set(state);

            match outcome {
                SubmitOutcome::LoggedIn => {
                    let email = form.with_untracked(|f| f.email.clone());
                    auth.signed_in_as.set(Some(email));
                    auth.close_modal();
                }
                SubmitOutcome::Registered { email, name, phone } => {
                    let snapshot = settings.settings.get_untracked();
                    let status =
                        notify_registration(&snapshot, &HttpMailer, &email, &name, &phone).await;
                    form.update(|f| f.email_status = status);
                }
                SubmitOutcome::Stayed => {}
            }
        });
    };

    let toggle_mode = move |_: leptos::ev::MouseEvent| {
        let language = settings.settings.get_untracked().language();
        form.update(|f| f.toggle(language));
    };

    let success_view = move || {
        view! {
            <div class="text-center space-y-6">
                <p class="text-lg font-bold text-green-600">
                    {move || settings.t("registration_success")}
                </p>
                <p class="text-gray-600">{move || settings.t("registration_success_prompt")}</p>
                {move || {
                    let status = form.with(|f| f.email_status.clone());
                    let class = if status.is_failure() {
                        "text-xs text-red-500"
                    } else {
                        "text-xs text-gray-500"
                    };
                    status.message(settings.language()).map(|message| {
                        view! { <p class=class>{message}</p> }
                    })
                }}
                <button
                    class="w-full px-4 py-3 bg-blue-600 hover:bg-blue-700 text-white rounded-lg"
                    on:click=move |_| form.update(|f| f.back_to_login())
                >
                    {move || settings.t("click_to_login")}
                </button>
            </div>
        }
    };

    let form_view = move || {
        view! {
            <form on:submit=on_submit class="space-y-4">
                {move || {
                    form.with(|f| f.is_register)
                        .then(|| {
                            view! {
                                <input
                                    type="text"
                                    placeholder=move || settings.t("name")
                                    class="w-full border p-2 rounded"
                                    prop:value=move || form.with(|f| f.name.clone())
                                    on:input=move |ev| {
                                        form.update(|f| f.name = event_target_value(&ev))
                                    }
                                />
                                <input
                                    type="text"
                                    placeholder=move || settings.t("phone")
                                    class="w-full border p-2 rounded"
                                    prop:value=move || form.with(|f| f.phone.clone())
                                    on:input=move |ev| {
                                        form.update(|f| f.phone = event_target_value(&ev))
                                    }
                                />
                            }
                        })
                }}

                <input
                    type="email"
                    placeholder=move || settings.t("email")
                    class="w-full border p-2 rounded"
                    prop:value=move || form.with(|f| f.email.clone())
                    on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                />
                <input
                    type="password"
                    placeholder=move || settings.t("password")
                    class="w-full border p-2 rounded"
                    prop:value=move || form.with(|f| f.password.clone())
                    on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                />

                // Captcha input with the generated challenge rendered beside it
                {move || {
                    form.with(|f| f.is_register)
                        .then(|| {
                            view! {
                                <div class="flex gap-2">
                                    <input
                                        type="text"
                                        placeholder=move || settings.t("captcha")
                                        class="w-full border p-2 rounded"
                                        prop:value=move || form.with(|f| f.captcha.clone())
                                        on:input=move |ev| {
                                            form.update(|f| f.captcha = event_target_value(&ev))
                                        }
                                    />
                                    <div class="bg-gray-200 p-2 rounded font-mono tracking-widest select-none">
                                        {move || form.with(|f| f.generated_captcha.clone())}
                                    </div>
                                </div>
                            }
                        })
                }}

                {move || {
                    form.with(|f| f.error.clone()).map(|key| {
                        view! { <p class="text-red-600 text-sm">{settings.t(&key)}</p> }
                    })
                }}

                <button
                    type="submit"
                    class="w-full bg-blue-600 hover:bg-blue-700 text-white p-3 rounded-lg"
                >
                    {move || {
                        if form.with(|f| f.is_register) {
                            settings.t("register")
                        } else {
                            settings.t("login")
                        }
                    }}
                </button>

                <p
                    class="text-center text-sm cursor-pointer text-blue-600 hover:text-blue-700"
                    on:click=toggle_mode
                >
                    {move || {
                        if form.with(|f| f.is_register) {
                            settings.t("click_to_login")
                        } else {
                            settings.t("click_to_register")
                        }
                    }}
                </p>
            </form>
        }
    };

    view! {
        <div
            class="fixed inset-0 bg-black/50 z-50 flex items-center justify-center p-4"
            on:click=move |_| auth.close_modal()
        >
            <div
                class="bg-white rounded-2xl shadow-xl w-full max-w-md flex flex-col overflow-hidden border border-orange-400"
                on:click=|ev| ev.stop_propagation()
            >
                <header class="flex items-center justify-between p-4 border-b">
                    <h2 class="text-xl font-bold text-gray-800 flex items-center gap-2">
                        <Icon name=icons::SPARKLES class="h-6 w-6 text-blue-600"/>
                        {move || {
                            if form.with(|f| f.is_register) {
                                settings.t("register_title")
                            } else {
                                settings.t("login_title")
                            }
                        }}
                    </h2>
                    <button
                        class="p-2 rounded-full hover:bg-gray-100"
                        on:click=move |_| auth.close_modal()
                    >
                        <Icon name=icons::X class="h-6 w-6"/>
                    </button>
                </header>

                <div class="p-6 space-y-4">
                    {move || {
                        if form.with(|f| f.registration_success) {
                            success_view().into_any()
                        } else {
                            form_view().into_any()
                        }
                    }}
                </div>
            </div>
        </div>
    }
}
