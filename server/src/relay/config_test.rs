use super::*;

/// # Safety
/// Tests must run with `--test-threads=1` to avoid env races.
unsafe fn clear_relay_env() {
    unsafe {
        for key in [
            "RELAY_PROVIDER",
            "EMAILJS_SERVICE_ID",
            "EMAILJS_PUBLIC_KEY",
            "EMAILJS_PRIVATE_KEY",
            "EMAILJS_CONTACT_TEMPLATE_ID",
            "EMAILJS_INTERNSHIP_TEMPLATE_ID",
            "EMAILJS_BASE_URL",
            "RESEND_API_KEY",
            "RESEND_FROM",
            "RELAY_RECIPIENT",
            "RELAY_REQUEST_TIMEOUT_SECS",
            "RELAY_CONNECT_TIMEOUT_SECS",
        ] {
            std::env::remove_var(key);
        }
    }
}

#[test]
fn from_env_defaults_to_emailjs() {
    unsafe {
        clear_relay_env();
        std::env::set_var("EMAILJS_SERVICE_ID", "service_labg6pe");
        std::env::set_var("EMAILJS_PUBLIC_KEY", "pk-test");
    }

    let cfg = RelayConfig::from_env().unwrap();
    let ProviderSettings::EmailJs(emailjs) = &cfg.provider else {
        panic!("expected emailjs settings");
    };
    assert_eq!(emailjs.service_id, "service_labg6pe");
    assert_eq!(emailjs.public_key, "pk-test");
    assert_eq!(emailjs.private_key, None);
    assert_eq!(emailjs.contact_template_id, DEFAULT_CONTACT_TEMPLATE_ID);
    assert_eq!(emailjs.internship_template_id, DEFAULT_INTERNSHIP_TEMPLATE_ID);
    assert_eq!(emailjs.base_url, DEFAULT_EMAILJS_BASE_URL);
    assert_eq!(
        cfg.timeouts,
        RelayTimeouts {
            request_secs: DEFAULT_RELAY_REQUEST_TIMEOUT_SECS,
            connect_secs: DEFAULT_RELAY_CONNECT_TIMEOUT_SECS
        }
    );

    unsafe { clear_relay_env() };
}

#[test]
fn from_env_parses_emailjs_overrides() {
    unsafe {
        clear_relay_env();
        std::env::set_var("EMAILJS_SERVICE_ID", "svc");
        std::env::set_var("EMAILJS_PUBLIC_KEY", "pk");
        std::env::set_var("EMAILJS_PRIVATE_KEY", "secret");
        std::env::set_var("EMAILJS_CONTACT_TEMPLATE_ID", "template_pf48q3m");
        std::env::set_var("EMAILJS_BASE_URL", "https://relay.test/");
        std::env::set_var("RELAY_REQUEST_TIMEOUT_SECS", "5");
        std::env::set_var("RELAY_CONNECT_TIMEOUT_SECS", "2");
    }

    let cfg = RelayConfig::from_env().unwrap();
    let ProviderSettings::EmailJs(emailjs) = &cfg.provider else {
        panic!("expected emailjs settings");
    };
    assert_eq!(emailjs.private_key.as_deref(), Some("secret"));
    assert_eq!(emailjs.contact_template_id, "template_pf48q3m");
    assert_eq!(emailjs.base_url, "https://relay.test");
    assert_eq!(cfg.timeouts, RelayTimeouts { request_secs: 5, connect_secs: 2 });

    unsafe { clear_relay_env() };
}

#[test]
fn from_env_emailjs_requires_service_and_key() {
    unsafe {
        clear_relay_env();
        std::env::set_var("EMAILJS_SERVICE_ID", "svc");
        std::env::set_var("EMAILJS_PUBLIC_KEY", "   ");
    }

    let err = RelayConfig::from_env().unwrap_err();
    assert_eq!(err, RelayConfigError::MissingVar { var: "EMAILJS_PUBLIC_KEY".into() });

    unsafe { clear_relay_env() };
}

#[test]
fn from_env_parses_resend() {
    unsafe {
        clear_relay_env();
        std::env::set_var("RELAY_PROVIDER", "resend");
        std::env::set_var("RESEND_API_KEY", "re_test");
        std::env::set_var("RESEND_FROM", "site@tektonika.ru");
        std::env::set_var("RELAY_RECIPIENT", "hr@tektonika.ru");
    }

    let cfg = RelayConfig::from_env().unwrap();
    assert_eq!(
        cfg.provider,
        ProviderSettings::Resend(ResendSettings {
            api_key: "re_test".into(),
            from: "site@tektonika.ru".into(),
            recipient: "hr@tektonika.ru".into(),
        })
    );

    unsafe { clear_relay_env() };
}

#[test]
fn from_env_unknown_provider_errors() {
    unsafe {
        clear_relay_env();
        std::env::set_var("RELAY_PROVIDER", "smtp");
    }

    let err = RelayConfig::from_env().unwrap_err();
    assert_eq!(err, RelayConfigError::ConfigParse("unknown RELAY_PROVIDER: smtp".into()));

    unsafe { clear_relay_env() };
}
