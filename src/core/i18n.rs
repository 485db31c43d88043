//! Translation lookup for the membership UI.
//!
//! Two locales are shipped: English (default) and Traditional Chinese
//! (`zh-TW`). Keys are stable identifiers; component state stores keys and
//! translates at render time so the flow logic stays locale-independent.

use serde::{Deserialize, Serialize};

/// Supported UI languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    En,
    ZhTw,
}

impl Language {
    /// Parse a BCP 47-ish tag as found in settings. Unknown tags fall back
    /// to English.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "zh-TW" | "zh-tw" | "zh_TW" => Language::ZhTw,
            _ => Language::En,
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::ZhTw => "zh-TW",
        }
    }
}

/// Phone-number prefix pre-filled when entering registration mode.
pub fn phone_prefix(language: Language) -> &'static str {
    match language {
        Language::ZhTw => "886-",
        Language::En => "",
    }
}

/// Look up a translation. Unknown keys echo back so a missing entry is
/// visible in the UI instead of rendering blank.
pub fn t(language: Language, key: &str) -> String {
    let (en, zh) = match key {
        "login_title" => ("Sign In", "會員登入"),
        "register_title" => ("Create Account", "會員註冊"),
        "login" => ("Sign In", "登入"),
        "register" => ("Register", "註冊"),
        "click_to_login" => ("Already have an account? Sign in", "已有帳號？點此登入"),
        "click_to_register" => ("No account yet? Register", "還沒有帳號？點此註冊"),
        "name" => ("Name", "姓名"),
        "phone" => ("Phone", "電話"),
        "email" => ("Email", "電子郵件"),
        "password" => ("Password", "密碼"),
        "captcha" => ("Captcha", "驗證碼"),
        "error_fill_email_password" => {
            ("Please fill in email and password", "請填寫電子郵件與密碼")
        }
        "error_fill_name_phone" => ("Please fill in name and phone", "請填寫姓名與電話"),
        "captcha_error" => ("Captcha does not match", "驗證碼錯誤"),
        "login_failed" => (
            "Login failed, please check your credentials",
            "登入失敗，請確認帳號密碼",
        ),
        "error_email_exists" => ("This email is already registered", "此電子郵件已註冊"),
        "error_register_failed" => (
            "Registration failed, please try again later",
            "註冊失敗，請稍後再試",
        ),
        "error_network" => ("Network error, please try again", "網路錯誤，請稍後再試"),
        "registration_success" => ("Registration successful!", "註冊成功！"),
        "registration_success_prompt" => (
            "Your account has been created. Sign in to continue.",
            "您的帳號已建立，請登入以繼續。",
        ),
        "email_status_not_configured" => (
            "SMTP is not configured; the notification email was not sent.",
            "未設定 SMTP，無法發送通知信。",
        ),
        "email_status_sending" => ("Sending notification email...", "正在發送通知信..."),
        "email_status_sent" => (
            "Welcome email and system notification sent.",
            "歡迎信與系統通知已發送成功。",
        ),
        "email_status_failed" => ("Notification email failed to send", "通知信發送失敗"),
        _ => return key.to_string(),
    };

    match language {
        Language::En => en.to_string(),
        Language::ZhTw => zh.to_string(),
    }
}
