//! 6-digit numeric captcha challenges.
//!
//! The challenge is rendered next to the input in the registration form and
//! must be re-typed exactly. A fresh value is drawn on entering registration
//! mode and after every failed attempt.

/// Lowest value a challenge can take (inclusive).
pub const CAPTCHA_MIN: u32 = 100_000;

/// Highest value a challenge can take (inclusive).
pub const CAPTCHA_MAX: u32 = 999_999;

/// Map a fraction in `[0, 1)` onto the 6-digit captcha range.
pub fn from_fraction(fraction: f64) -> String {
    let span = (CAPTCHA_MAX - CAPTCHA_MIN + 1) as f64;
    let value = CAPTCHA_MIN + (fraction.clamp(0.0, 1.0) * span) as u32;
    value.min(CAPTCHA_MAX).to_string()
}

/// Draw a new 6-digit challenge.
#[cfg(feature = "ssr")]
pub fn generate() -> String {
    use rand::Rng;
    rand::thread_rng()
        .gen_range(CAPTCHA_MIN..=CAPTCHA_MAX)
        .to_string()
}

/// Draw a new 6-digit challenge.
#[cfg(not(feature = "ssr"))]
pub fn generate() -> String {
    from_fraction(js_sys::Math::random())
}
