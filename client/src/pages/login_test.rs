use super::*;

#[test]
fn validate_access_code_input_trims_and_requires_value() {
    assert_eq!(validate_access_code_input("  letmein  "), Ok("letmein".to_owned()));
    assert_eq!(
        validate_access_code_input("   "),
        Err("Enter your advisor access code first.")
    );
    assert_eq!(
        validate_access_code_input(""),
        Err("Enter your advisor access code first.")
    );
}

#[test]
fn next_target_uses_query_param_when_present() {
    assert_eq!(next_target(Some("/fna".to_owned())), "/fna");
    assert_eq!(next_target(Some("/prospect/123".to_owned())), "/prospect/123");
}

#[test]
fn next_target_defaults_to_home() {
    assert_eq!(next_target(None), "/dashboard");
    assert_eq!(next_target(Some(String::new())), "/dashboard");
}
