//! Login/registration flow state machine.
//!
//! The modal component owns a [`SignupForm`] in a signal and delegates every
//! event to the methods here, so the whole flow is testable without a DOM.
//! Collaborators are injected: an [`Authenticator`] checks or creates
//! credentials, a [`Mailer`] (see [`crate::core::email`]) delivers the
//! registration notification.
//!
//! States are `Login`, `Register-editing` and `Register-success`
//! (`is_register` x `registration_success`). Failed submits stay in place
//! with an error annotation; only an accepted registration moves to the
//! success state, and only "click to login" leaves it.

use serde::{Deserialize, Serialize};

use crate::core::captcha;
use crate::core::email::{EmailRequest, Mailer, welcome_body, welcome_subject};
use crate::core::i18n::{self, Language};
use crate::core::settings::AppSettings;

/// Payload of a registration attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationRequest {
    pub email: String,
    pub password: String,
    pub name: String,
    pub phone: String,
}

/// Result of the authentication collaborator's register operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegisterOutcome {
    Accepted,
    /// Rejected with an i18n message key describing why.
    Rejected { message_key: String },
}

/// Credential checking/creation collaborator.
pub trait Authenticator {
    async fn login(&self, email: &str, password: &str) -> bool;
    async fn register(&self, request: &RegistrationRequest) -> RegisterOutcome;
}

/// Auxiliary status of the registration notification email. Purely
/// informational: it never affects the registration outcome.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EmailStatus {
    #[default]
    None,
    NotConfigured,
    Sending,
    Sent,
    Failed(String),
}

impl EmailStatus {
    /// Human-readable status line, `None` when there is nothing to show.
    pub fn message(&self, language: Language) -> Option<String> {
        match self {
            EmailStatus::None => None,
            EmailStatus::NotConfigured => {
                Some(i18n::t(language, "email_status_not_configured"))
            }
            EmailStatus::Sending => Some(i18n::t(language, "email_status_sending")),
            EmailStatus::Sent => Some(i18n::t(language, "email_status_sent")),
            EmailStatus::Failed(reason) => Some(format!(
                "{}: {reason}",
                i18n::t(language, "email_status_failed")
            )),
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, EmailStatus::Failed(_))
    }
}

/// What the caller should do after a submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation or collaborator failure; the error field explains it.
    Stayed,
    LoggedIn,
    /// Registration accepted; fire the notification with these values.
    Registered {
        email: String,
        name: String,
        phone: String,
    },
}

/// Modal state. All fields are ephemeral to the component's lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SignupForm {
    pub is_register: bool,
    pub email: String,
    pub password: String,
    pub name: String,
    pub phone: String,
    pub captcha: String,
    pub generated_captcha: String,
    pub registration_success: bool,
    /// i18n message key of the last error, translated at render time.
    pub error: Option<String>,
    pub email_status: EmailStatus,
}

impl SignupForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Switch between login and registration. Entering registration draws a
    /// fresh captcha and pre-fills the phone prefix for the locale; leaving
    /// it discards the success flag and email status.
    pub fn toggle(&mut self, language: Language) {
        self.is_register = !self.is_register;
        self.error = None;
        self.registration_success = false;

        if self.is_register {
            self.generated_captcha = captcha::generate();
            self.phone = i18n::phone_prefix(language).to_string();
        } else {
            self.email_status = EmailStatus::None;
        }
    }

    /// "Click to login" on the success screen.
    pub fn back_to_login(&mut self) {
        self.is_register = false;
        self.error = None;
        self.registration_success = false;
        self.email_status = EmailStatus::None;
    }

    /// Validate and submit the current mode. The collaborator is only
    /// invoked once all local checks pass.
    pub async fn submit(&mut self, auth: &impl Authenticator) -> SubmitOutcome {
        self.error = None;

        if self.email.is_empty() || self.password.is_empty() {
            self.error = Some("error_fill_email_password".to_string());
            return SubmitOutcome::Stayed;
        }

        if self.is_register {
            if self.name.trim().is_empty() || self.phone.trim().is_empty() {
                self.error = Some("error_fill_name_phone".to_string());
                return SubmitOutcome::Stayed;
            }

            if self.captcha != self.generated_captcha {
                // Regenerate so the stale challenge cannot be replayed.
                self.error = Some("captcha_error".to_string());
                self.generated_captcha = captcha::generate();
                return SubmitOutcome::Stayed;
            }

            let request = RegistrationRequest {
                email: self.email.clone(),
                password: self.password.clone(),
                name: self.name.clone(),
                phone: self.phone.clone(),
            };

            match auth.register(&request).await {
                RegisterOutcome::Accepted => {
                    self.registration_success = true;
                    self.email_status = EmailStatus::Sending;
                    SubmitOutcome::Registered {
                        email: request.email,
                        name: request.name,
                        phone: request.phone,
                    }
                }
                RegisterOutcome::Rejected { message_key } => {
                    self.error = Some(message_key);
                    self.generated_captcha = captcha::generate();
                    SubmitOutcome::Stayed
                }
            }
        } else if auth.login(&self.email, &self.password).await {
            SubmitOutcome::LoggedIn
        } else {
            self.error = Some("login_failed".to_string());
            SubmitOutcome::Stayed
        }
    }
}

/// Send the registration notification: To = the new member, Cc = the system
/// administrator. Checks the SMTP configuration before attempting delivery.
pub async fn notify_registration(
    settings: &AppSettings,
    mailer: &impl Mailer,
    email: &str,
    name: &str,
    phone: &str,
) -> EmailStatus {
    if !settings.has_smtp() {
        return EmailStatus::NotConfigured;
    }

    let request = EmailRequest {
        smtp_host: settings.smtp_host.clone(),
        smtp_port: settings.smtp_port,
        smtp_user: settings.smtp_user.clone(),
        smtp_pass: settings.smtp_pass.clone(),
        to: email.to_string(),
        cc: settings.system_email.clone(),
        subject: welcome_subject(),
        text: welcome_body(name, email, phone),
    };

    match mailer.send(&request).await {
        Ok(()) => EmailStatus::Sent,
        Err(e) => EmailStatus::Failed(e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::email::MailError;
    use futures::executor::block_on;
    use std::cell::RefCell;

    // The generator never produces this, so regeneration is observable.
    const SENTINEL_CAPTCHA: &str = "000000";

    #[derive(Default)]
    struct MockAuth {
        login_result: bool,
        register_result: Option<RegisterOutcome>,
        login_calls: RefCell<Vec<(String, String)>>,
        register_calls: RefCell<Vec<RegistrationRequest>>,
    }

    impl Authenticator for MockAuth {
        async fn login(&self, email: &str, password: &str) -> bool {
            self.login_calls
                .borrow_mut()
                .push((email.to_string(), password.to_string()));
            self.login_result
        }

        async fn register(&self, request: &RegistrationRequest) -> RegisterOutcome {
            self.register_calls.borrow_mut().push(request.clone());
            self.register_result
                .clone()
                .unwrap_or(RegisterOutcome::Accepted)
        }
    }

    #[derive(Default)]
    struct MockMailer {
        fail_with: Option<String>,
        sent: RefCell<Vec<EmailRequest>>,
    }

    impl Mailer for MockMailer {
        async fn send(&self, request: &EmailRequest) -> Result<(), MailError> {
            self.sent.borrow_mut().push(request.clone());
            match &self.fail_with {
                Some(reason) => Err(MailError::new(reason.clone())),
                None => Ok(()),
            }
        }
    }

    fn register_form() -> SignupForm {
        let mut form = SignupForm::new();
        form.toggle(Language::En);
        form.email = "amy@example.com".to_string();
        form.password = "secret".to_string();
        form.name = "Amy".to_string();
        form.phone = "886-912".to_string();
        form.captcha = form.generated_captcha.clone();
        form
    }

    fn smtp_settings() -> AppSettings {
        AppSettings {
            smtp_host: "smtp.example.com".to_string(),
            smtp_user: "noreply@example.com".to_string(),
            smtp_pass: "hunter2".to_string(),
            system_email: "admin@example.com".to_string(),
            ..AppSettings::default()
        }
    }

    #[test]
    fn toggling_into_register_generates_six_digit_captcha() {
        for _ in 0..20 {
            let mut form = SignupForm::new();
            form.toggle(Language::En);

            assert!(form.is_register);
            assert_eq!(form.generated_captcha.len(), 6);
            assert!(form.generated_captcha.chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn toggling_prefills_phone_for_zh_tw() {
        let mut form = SignupForm::new();
        form.toggle(Language::ZhTw);
        assert_eq!(form.phone, "886-");

        let mut form = SignupForm::new();
        form.toggle(Language::En);
        assert_eq!(form.phone, "");
    }

    #[test]
    fn toggling_back_to_login_clears_success_and_email_status() {
        let mut form = register_form();
        form.registration_success = true;
        form.email_status = EmailStatus::Sent;

        form.toggle(Language::En);

        assert!(!form.is_register);
        assert!(!form.registration_success);
        assert_eq!(form.email_status, EmailStatus::None);
        assert_eq!(form.error, None);
    }

    #[test]
    fn empty_credentials_never_reach_the_authenticator() {
        let auth = MockAuth::default();

        for is_register in [false, true] {
            let mut form = SignupForm::new();
            form.is_register = is_register;
            form.email = String::new();
            form.password = "x".to_string();

            let outcome = block_on(form.submit(&auth));
            assert_eq!(outcome, SubmitOutcome::Stayed);
            assert_eq!(form.error.as_deref(), Some("error_fill_email_password"));

            form.email = "a@b.com".to_string();
            form.password = String::new();
            let outcome = block_on(form.submit(&auth));
            assert_eq!(outcome, SubmitOutcome::Stayed);
            assert_eq!(form.error.as_deref(), Some("error_fill_email_password"));
        }

        assert!(auth.login_calls.borrow().is_empty());
        assert!(auth.register_calls.borrow().is_empty());
    }

    #[test]
    fn register_requires_name_and_phone() {
        let auth = MockAuth::default();
        let mut form = register_form();
        form.name = "   ".to_string();

        let outcome = block_on(form.submit(&auth));

        assert_eq!(outcome, SubmitOutcome::Stayed);
        assert_eq!(form.error.as_deref(), Some("error_fill_name_phone"));
        assert!(auth.register_calls.borrow().is_empty());
    }

    #[test]
    fn captcha_mismatch_regenerates_and_skips_the_backend() {
        let auth = MockAuth::default();
        let mut form = register_form();
        form.generated_captcha = SENTINEL_CAPTCHA.to_string();
        form.captcha = "123456".to_string();

        let outcome = block_on(form.submit(&auth));

        assert_eq!(outcome, SubmitOutcome::Stayed);
        assert_eq!(form.error.as_deref(), Some("captcha_error"));
        assert_ne!(form.generated_captcha, SENTINEL_CAPTCHA);
        assert_eq!(form.generated_captcha.len(), 6);
        assert!(auth.register_calls.borrow().is_empty());
        assert!(!form.registration_success);
    }

    #[test]
    fn backend_rejection_surfaces_key_and_regenerates_captcha() {
        let auth = MockAuth {
            register_result: Some(RegisterOutcome::Rejected {
                message_key: "error_email_exists".to_string(),
            }),
            ..MockAuth::default()
        };
        let mut form = register_form();
        form.generated_captcha = SENTINEL_CAPTCHA.to_string();
        form.captcha = SENTINEL_CAPTCHA.to_string();

        let outcome = block_on(form.submit(&auth));

        assert_eq!(outcome, SubmitOutcome::Stayed);
        assert_eq!(form.error.as_deref(), Some("error_email_exists"));
        assert_ne!(form.generated_captcha, SENTINEL_CAPTCHA);
        assert!(!form.registration_success);
        assert_eq!(auth.register_calls.borrow().len(), 1);
    }

    #[test]
    fn accepted_registration_moves_to_success_and_requests_notification() {
        let auth = MockAuth::default();
        let mut form = register_form();
        form.generated_captcha = "123456".to_string();
        form.captcha = "123456".to_string();

        let outcome = block_on(form.submit(&auth));

        assert_eq!(
            outcome,
            SubmitOutcome::Registered {
                email: "amy@example.com".to_string(),
                name: "Amy".to_string(),
                phone: "886-912".to_string(),
            }
        );
        assert!(form.registration_success);
        assert_eq!(form.email_status, EmailStatus::Sending);
        assert_eq!(form.error, None);

        let calls = auth.register_calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].email, "amy@example.com");
        assert_eq!(calls[0].password, "secret");
    }

    #[test]
    fn failed_login_shows_message_and_stays() {
        let auth = MockAuth {
            login_result: false,
            ..MockAuth::default()
        };
        let mut form = SignupForm::new();
        form.email = "a@b.com".to_string();
        form.password = "x".to_string();

        let outcome = block_on(form.submit(&auth));

        assert_eq!(outcome, SubmitOutcome::Stayed);
        assert_eq!(form.error.as_deref(), Some("login_failed"));
        assert!(!form.registration_success);
        assert_eq!(
            auth.login_calls.borrow()[0],
            ("a@b.com".to_string(), "x".to_string())
        );
    }

    #[test]
    fn successful_login_reports_logged_in() {
        let auth = MockAuth {
            login_result: true,
            ..MockAuth::default()
        };
        let mut form = SignupForm::new();
        form.email = "a@b.com".to_string();
        form.password = "x".to_string();

        let outcome = block_on(form.submit(&auth));

        assert_eq!(outcome, SubmitOutcome::LoggedIn);
        assert_eq!(form.error, None);
    }

    #[test]
    fn back_to_login_resets_the_success_screen() {
        let mut form = register_form();
        form.registration_success = true;
        form.email_status = EmailStatus::Failed("timeout".to_string());

        form.back_to_login();

        assert!(!form.is_register);
        assert!(!form.registration_success);
        assert_eq!(form.email_status, EmailStatus::None);
    }

    #[test]
    fn notify_without_smtp_config_skips_the_mailer() {
        let mailer = MockMailer::default();
        let settings = AppSettings::default(); // smtp_host is empty

        let status = block_on(notify_registration(
            &settings,
            &mailer,
            "amy@example.com",
            "Amy",
            "886-912",
        ));

        assert_eq!(status, EmailStatus::NotConfigured);
        assert!(mailer.sent.borrow().is_empty());
    }

    #[test]
    fn notify_sends_to_member_with_admin_in_cc() {
        let mailer = MockMailer::default();

        let status = block_on(notify_registration(
            &smtp_settings(),
            &mailer,
            "amy@example.com",
            "Amy",
            "886-912",
        ));

        assert_eq!(status, EmailStatus::Sent);
        let sent = mailer.sent.borrow();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].to, "amy@example.com");
        assert_eq!(sent[0].cc, "admin@example.com");
        assert_eq!(sent[0].smtp_host, "smtp.example.com");
        assert!(sent[0].subject.starts_with("[HomeWorth]"));
        assert!(sent[0].text.contains("Amy"));
        assert!(sent[0].text.contains("amy@example.com"));
        assert!(sent[0].text.contains("886-912"));
    }

    #[test]
    fn notify_failure_carries_the_mailer_error() {
        let mailer = MockMailer {
            fail_with: Some("timeout".to_string()),
            ..MockMailer::default()
        };

        let status = block_on(notify_registration(
            &smtp_settings(),
            &mailer,
            "amy@example.com",
            "Amy",
            "886-912",
        ));

        assert_eq!(status, EmailStatus::Failed("timeout".to_string()));
        assert!(status.is_failure());
        let message = status.message(Language::En).unwrap();
        assert!(message.contains("timeout"));
    }

    #[test]
    fn email_status_messages_follow_the_locale() {
        assert_eq!(EmailStatus::None.message(Language::En), None);
        assert_eq!(
            EmailStatus::NotConfigured.message(Language::ZhTw).unwrap(),
            "未設定 SMTP，無法發送通知信。"
        );
        assert!(
            EmailStatus::Sending
                .message(Language::En)
                .unwrap()
                .contains("Sending")
        );
        assert!(!EmailStatus::Sent.is_failure());
    }
}
