use std::sync::{Mutex, MutexGuard};

use super::*;

/// Serializes tests that touch process environment variables.
static ENV_LOCK: Mutex<()> = Mutex::new(());

/// # Safety
/// Callers must hold `ENV_LOCK` while the environment is mutated.
unsafe fn clear_mail_env() {
    unsafe {
        std::env::remove_var("RESEND_API_KEY");
        std::env::remove_var("FROM_EMAIL");
        std::env::remove_var("CONTACT_TO_EMAIL");
        std::env::remove_var("FORM_RELAY_URL");
        std::env::remove_var("MAIL_REQUEST_TIMEOUT_SECS");
        std::env::remove_var("MAIL_CONNECT_TIMEOUT_SECS");
    }
}

fn env_guard() -> MutexGuard<'static, ()> {
    let guard = ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
    unsafe { clear_mail_env() };
    guard
}

#[test]
fn from_env_defaults() {
    let _guard = env_guard();

    let cfg = MailConfig::from_env();
    assert_eq!(cfg.api_key, None);
    assert_eq!(cfg.from, DEFAULT_FROM_EMAIL);
    assert_eq!(cfg.default_to, None);
    assert_eq!(cfg.relay_url, DEFAULT_FORM_RELAY_URL);
    assert_eq!(
        cfg.timeouts,
        HttpTimeouts {
            request_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            connect_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
        }
    );
}

#[test]
fn from_env_parses_overrides() {
    let _guard = env_guard();
    unsafe {
        std::env::set_var("RESEND_API_KEY", "re_test_key");
        std::env::set_var("FROM_EMAIL", "Site <site@example.com>");
        std::env::set_var("CONTACT_TO_EMAIL", "owner@example.com");
        std::env::set_var("FORM_RELAY_URL", "https://relay.example.test/f/abc/");
        std::env::set_var("MAIL_REQUEST_TIMEOUT_SECS", "42");
        std::env::set_var("MAIL_CONNECT_TIMEOUT_SECS", "7");
    }

    let cfg = MailConfig::from_env();
    assert_eq!(cfg.api_key.as_deref(), Some("re_test_key"));
    assert_eq!(cfg.from, "Site <site@example.com>");
    assert_eq!(cfg.default_to.as_deref(), Some("owner@example.com"));
    assert_eq!(cfg.relay_url, "https://relay.example.test/f/abc");
    assert_eq!(cfg.timeouts, HttpTimeouts { request_secs: 42, connect_secs: 7 });

    unsafe { clear_mail_env() };
}

#[test]
fn from_env_trims_recipient_and_drops_blank() {
    let _guard = env_guard();
    unsafe { std::env::set_var("CONTACT_TO_EMAIL", "  owner@example.com  ") };
    assert_eq!(MailConfig::from_env().default_to.as_deref(), Some("owner@example.com"));

    unsafe { std::env::set_var("CONTACT_TO_EMAIL", "   ") };
    assert_eq!(MailConfig::from_env().default_to, None);

    unsafe { clear_mail_env() };
}

#[test]
fn from_env_ignores_blank_api_key() {
    let _guard = env_guard();
    unsafe { std::env::set_var("RESEND_API_KEY", "  ") };
    assert_eq!(MailConfig::from_env().api_key, None);

    unsafe { clear_mail_env() };
}

#[test]
fn from_env_ignores_unparsable_timeout() {
    let _guard = env_guard();
    unsafe { std::env::set_var("MAIL_REQUEST_TIMEOUT_SECS", "soon") };
    assert_eq!(MailConfig::from_env().timeouts.request_secs, DEFAULT_REQUEST_TIMEOUT_SECS);

    unsafe { clear_mail_env() };
}
