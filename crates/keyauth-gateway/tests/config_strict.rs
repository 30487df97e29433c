#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use keyauth_gateway::config;

#[test]
fn deny_unknown_fields_nested() {
    let bad = r#"
version: 1
server:
  host: "127.0.0.1"
keys:
  env_vra: "KEYS" # typo should fail
"#;

    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.code().as_str(), "INVALID_CONFIG");
}

#[test]
fn ok_minimal_config() {
    let cfg = config::load_from_str("version: 1\n").expect("must parse");
    assert_eq!(cfg.version, 1);
    assert_eq!(cfg.server.host, "0.0.0.0");
    assert_eq!(cfg.server.port, 8081);
    assert_eq!(cfg.keys.env_var, "VALID_KEYS");
    assert!(!cfg.keys.require_keys);
    assert!(cfg.logging.log_headers);
}

#[test]
fn full_config() {
    let ok = r#"
version: 1
server:
  host: "127.0.0.1"
  port: 9000
service:
  name: "edge-auth"
keys:
  env_var: "EDGE_KEYS"
  require_keys: true
logging:
  log_headers: false
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    assert_eq!(cfg.server.port, 9000);
    assert_eq!(cfg.service.name, "edge-auth");
    assert_eq!(cfg.keys.env_var, "EDGE_KEYS");
    assert!(cfg.keys.require_keys);
    assert!(!cfg.logging.log_headers);
}

#[test]
fn unsupported_version_rejected() {
    let err = config::load_from_str("version: 2\n").expect_err("must fail");
    assert_eq!(err.code().as_str(), "UNSUPPORTED_VERSION");
}

#[test]
fn empty_values_rejected() {
    for bad in [
        "version: 1\nserver: { host: '  ' }\n",
        "version: 1\nservice: { name: '' }\n",
        "version: 1\nkeys: { env_var: '' }\n",
    ] {
        let err = config::load_from_str(bad).expect_err(bad);
        assert_eq!(err.code().as_str(), "INVALID_CONFIG", "{bad}");
    }
}

#[test]
fn port_out_of_range_rejected() {
    let err = config::load_from_str("version: 1\nserver: { port: 70000 }\n")
        .expect_err("must fail");
    assert_eq!(err.code().as_str(), "INVALID_CONFIG");
}
