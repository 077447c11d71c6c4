use super::*;

// =============================================================================
// env_bool
// =============================================================================

#[test]
fn env_bool_true_variants() {
    for raw in ["1", "true", "YES", " on "] {
        unsafe { std::env::set_var("__TEST_TOLLGATE_BOOL_TRUE__", raw) };
        assert_eq!(env_bool("__TEST_TOLLGATE_BOOL_TRUE__"), Some(true), "{raw}");
    }
    unsafe { std::env::remove_var("__TEST_TOLLGATE_BOOL_TRUE__") };
}

#[test]
fn env_bool_false_and_unknown() {
    unsafe { std::env::set_var("__TEST_TOLLGATE_BOOL_FALSE__", "off") };
    assert_eq!(env_bool("__TEST_TOLLGATE_BOOL_FALSE__"), Some(false));
    unsafe { std::env::set_var("__TEST_TOLLGATE_BOOL_FALSE__", "maybe") };
    assert_eq!(env_bool("__TEST_TOLLGATE_BOOL_FALSE__"), None);
    unsafe { std::env::remove_var("__TEST_TOLLGATE_BOOL_FALSE__") };
    assert_eq!(env_bool("__TEST_TOLLGATE_BOOL_FALSE__"), None);
}

// =============================================================================
// URLs
// =============================================================================

#[test]
fn validate_url_trims_trailing_slash() {
    assert_eq!(validate_url("X", "https://api.example.com/").unwrap(), "https://api.example.com");
    assert_eq!(validate_url("X", "http://localhost:3000").unwrap(), "http://localhost:3000");
}

#[test]
fn validate_url_rejects_relative() {
    let err = validate_url("TOLLGATE_API_URL", "api.example.com").unwrap_err();
    assert!(matches!(err, ConfigError::InvalidUrl { key: "TOLLGATE_API_URL", .. }));
}

#[test]
fn env_url_uses_default_when_unset_or_blank() {
    unsafe { std::env::remove_var("__TEST_TOLLGATE_URL_UNSET__") };
    assert_eq!(env_url("__TEST_TOLLGATE_URL_UNSET__", "http://d").unwrap(), "http://d");
    unsafe { std::env::set_var("__TEST_TOLLGATE_URL_BLANK__", "   ") };
    assert_eq!(env_url("__TEST_TOLLGATE_URL_BLANK__", "").unwrap(), "");
    unsafe { std::env::remove_var("__TEST_TOLLGATE_URL_BLANK__") };
}

// =============================================================================
// from_env
// =============================================================================

// The only test touching the real keys, so it runs them in sequence.
#[test]
fn from_env_defaults_and_rejections() {
    unsafe {
        std::env::remove_var("PORT");
        std::env::remove_var("TOLLGATE_API_URL");
        std::env::remove_var("TOLLGATE_LOCAL_API_URL");
    }
    let cfg = HostConfig::from_env().unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.api_url, DEFAULT_API_BASE_URL);
    assert_eq!(cfg.local_api_url, "");
    assert_eq!(cfg.api_config(), ApiConfig::default());

    unsafe { std::env::set_var("PORT", "70000") };
    assert!(matches!(HostConfig::from_env(), Err(ConfigError::InvalidPort { .. })));

    unsafe {
        std::env::set_var("PORT", "9000");
        std::env::set_var("TOLLGATE_API_URL", "not a url");
    }
    assert!(matches!(HostConfig::from_env(), Err(ConfigError::InvalidUrl { key: "TOLLGATE_API_URL", .. })));

    unsafe { std::env::set_var("TOLLGATE_API_URL", "https://api.example.com/") };
    let cfg = HostConfig::from_env().unwrap();
    assert_eq!(cfg.port, 9000);
    assert_eq!(cfg.api_config().api_url("/gerbangs"), "https://api.example.com/gerbangs");

    unsafe {
        std::env::remove_var("PORT");
        std::env::remove_var("TOLLGATE_API_URL");
    }
}
