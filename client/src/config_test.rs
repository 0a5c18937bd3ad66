use super::*;

#[test]
fn default_config_is_same_origin() {
    let config = ApiConfig::default();
    assert_eq!(config.url("/api/employees"), "/api/employees");
}

#[test]
fn new_trims_trailing_slashes_and_whitespace() {
    let config = ApiConfig::new(" http://localhost:4000// ");
    assert_eq!(config.url("/api/login"), "http://localhost:4000/api/login");
}

#[test]
fn url_inserts_separator_for_relative_paths() {
    let config = ApiConfig::new("https://hr.example.com");
    assert_eq!(config.url("api/profile"), "https://hr.example.com/api/profile");
}
