use std::collections::HashMap;

use super::*;

fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = vars.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_apply_when_nothing_is_set() {
    let cfg = ServerConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(cfg.host, DEFAULT_HOST);
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.site_root, None);
    assert_eq!(cfg.bind_addr().to_string(), "0.0.0.0:3000");
}

#[test]
fn overrides_are_parsed() {
    let cfg = ServerConfig::from_lookup(lookup(&[
        ("BRICKYARD_HOST", "127.0.0.1"),
        ("PORT", " 8080 "),
        ("BRICKYARD_SITE_ROOT", "/srv/brickyard"),
    ]))
    .unwrap();
    assert_eq!(cfg.bind_addr().to_string(), "127.0.0.1:8080");
    assert_eq!(cfg.site_root, Some(PathBuf::from("/srv/brickyard")));
}

#[test]
fn empty_values_count_as_unset() {
    let cfg = ServerConfig::from_lookup(lookup(&[("PORT", ""), ("BRICKYARD_SITE_ROOT", "  ")])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.site_root, None);
}

#[test]
fn invalid_port_is_rejected() {
    for raw in ["abc", "0", "70000", "-1"] {
        let err = ServerConfig::from_lookup(lookup(&[("PORT", raw)])).unwrap_err();
        assert_eq!(err, ConfigError::InvalidPort { value: raw.to_owned() });
    }
}

#[test]
fn invalid_host_is_rejected() {
    let err = ServerConfig::from_lookup(lookup(&[("BRICKYARD_HOST", "localhost:80")])).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidHost { .. }));
}
