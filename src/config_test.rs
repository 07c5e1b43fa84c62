use std::collections::HashMap;

use super::*;

fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = vars.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| vars.get(key).cloned()
}

#[test]
fn unset_variables_use_defaults() {
    let config = ServerConfig::from_lookup(lookup(&[])).expect("config");
    assert_eq!(config, ServerConfig::default());
    assert_eq!(config.bind_addr(), "0.0.0.0:3000");
}

#[test]
fn host_and_port_are_read() {
    let config = ServerConfig::from_lookup(lookup(&[("HOST", " 127.0.0.1 "), ("PORT", "8080")])).expect("config");
    assert_eq!(config.bind_addr(), "127.0.0.1:8080");
}

#[test]
fn invalid_port_is_an_error() {
    for raw in ["abc", "0", "70000", "-1"] {
        assert_eq!(
            ServerConfig::from_lookup(lookup(&[("PORT", raw)])),
            Err(ConfigError::InvalidPort { value: raw.to_owned() })
        );
    }
}

#[test]
fn blank_host_is_an_error() {
    assert_eq!(ServerConfig::from_lookup(lookup(&[("HOST", "  ")])), Err(ConfigError::EmptyHost));
}
