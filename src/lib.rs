//! HomeWorth - AI Property Appraisal
//!
//! A web application for AI-assisted property valuation, built with Leptos
//! and WebAssembly. Membership (login/registration with captcha and a
//! welcome-email notification) lives under `ui::auth`.

#![recursion_limit = "4096"]

pub mod app;
pub mod core;
pub mod ui;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
