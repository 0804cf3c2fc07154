use std::collections::HashMap;

use super::*;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_when_unset() {
    let cfg = HostConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(
        cfg,
        HostConfig {
            port: DEFAULT_PORT,
            backend_url: DEFAULT_BACKEND_URL.to_owned(),
            backend_timeout_secs: DEFAULT_BACKEND_TIMEOUT_SECS,
        }
    );
}

#[test]
fn backend_url_trailing_slash_is_trimmed() {
    let cfg = HostConfig::from_lookup(lookup(&[("BACKEND_URL", "https://vote.example.test/")])).unwrap();
    assert_eq!(cfg.backend_url, "https://vote.example.test");
}

#[test]
fn overrides_are_parsed() {
    let cfg = HostConfig::from_lookup(lookup(&[("PORT", "8080"), ("BACKEND_TIMEOUT_SECS", "5")])).unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.backend_timeout_secs, 5);
}

#[test]
fn bad_timeout_falls_back_to_default() {
    let cfg = HostConfig::from_lookup(lookup(&[("BACKEND_TIMEOUT_SECS", "soon")])).unwrap();
    assert_eq!(cfg.backend_timeout_secs, DEFAULT_BACKEND_TIMEOUT_SECS);
}

#[test]
fn invalid_port_is_an_error() {
    let err = HostConfig::from_lookup(lookup(&[("PORT", "http")])).unwrap_err();
    assert_eq!(err, ConfigError::Invalid { var: "PORT", value: "http".to_owned() });
}

#[test]
fn non_http_backend_is_rejected() {
    let err = HostConfig::from_lookup(lookup(&[("BACKEND_URL", "localhost:5000")])).unwrap_err();
    assert_eq!(err, ConfigError::BackendScheme("localhost:5000".to_owned()));
}
