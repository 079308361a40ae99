use super::*;

#[test]
fn app_state_without_access_disables_login() {
    let state = AppState::new(None);
    assert!(state.access.is_none());
}

#[test]
fn app_state_wraps_access_config() {
    let state = AppState::new(Some(AccessConfig { access_code: "letmein".to_owned() }));
    assert_eq!(state.access.as_deref().map(|a| a.access_code.as_str()), Some("letmein"));
}

#[test]
fn app_state_is_cheaply_cloneable() {
    let state = AppState::new(Some(AccessConfig { access_code: "letmein".to_owned() }));
    let clone = state.clone();
    assert!(clone.access.is_some());
}

#[test]
fn access_config_from_env_reads_and_trims() {
    let key = "ACCESS_CODE";
    // from_env reads a fixed key; run the variants in one test to avoid
    // parallel races on the shared env var.
    unsafe { std::env::set_var(key, "  letmein  ") };
    let config = AccessConfig::from_env().expect("config should load");
    assert_eq!(config.access_code, "letmein");

    unsafe { std::env::set_var(key, "   ") };
    assert!(AccessConfig::from_env().is_none());

    unsafe { std::env::remove_var(key) };
    assert!(AccessConfig::from_env().is_none());
}
