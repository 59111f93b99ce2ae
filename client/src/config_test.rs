use std::collections::HashMap;

use super::*;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Result<String, VarError> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned().ok_or(VarError::NotPresent)
}

#[test]
fn empty_environment_uses_defaults() {
    let config = ClientConfig::from_lookup(lookup(&[]));
    assert_eq!(config.backend_url, "http://localhost:5005");
    assert_eq!(config.timeouts, Timeouts { request_secs: 30, connect_secs: 10 });
    assert!(config.token_file.ends_with(".presto/token"));
}

#[test]
fn explicit_values_override_defaults() {
    let config = ClientConfig::from_lookup(lookup(&[
        ("PRESTO_BACKEND_URL", "https://presto.example.com/"),
        ("PRESTO_TOKEN_FILE", "/tmp/presto-token"),
        ("PRESTO_REQUEST_TIMEOUT_SECS", "5"),
        ("PRESTO_CONNECT_TIMEOUT_SECS", " 2 "),
    ]));
    assert_eq!(config.backend_url, "https://presto.example.com");
    assert_eq!(config.token_file, PathBuf::from("/tmp/presto-token"));
    assert_eq!(config.timeouts, Timeouts { request_secs: 5, connect_secs: 2 });
}

#[test]
fn unparsable_timeout_falls_back() {
    let config = ClientConfig::from_lookup(lookup(&[("PRESTO_REQUEST_TIMEOUT_SECS", "soon")]));
    assert_eq!(config.timeouts.request_secs, DEFAULT_REQUEST_TIMEOUT_SECS);
}

#[test]
fn empty_token_file_uses_default() {
    let config = ClientConfig::from_lookup(lookup(&[("PRESTO_TOKEN_FILE", "")]));
    assert_eq!(config.token_file, default_token_file());
}

#[test]
fn with_backend_url_trims_trailing_slashes() {
    let config = ClientConfig::default().with_backend_url("http://127.0.0.1:9000//");
    assert_eq!(config.backend_url, "http://127.0.0.1:9000");
}
