#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use clap::Parser;
use keyauth_gateway::cli::Cli;

#[test]
fn defaults_without_flags() {
    let cli = Cli::try_parse_from(["keyauth-gateway"]).unwrap();
    assert!(!cli.debug);
    assert_eq!(cli.default_log_filter(), "info");

    let cfg = cli.resolve_config().unwrap();
    assert_eq!(cfg.server.host, "0.0.0.0");
    assert_eq!(cfg.server.port, 8081);
    assert!(!cfg.keys.require_keys);
}

#[test]
fn flags_override_config() {
    let cli = Cli::try_parse_from([
        "keyauth-gateway",
        "--host",
        "127.0.0.1",
        "--port",
        "9090",
        "--debug",
        "--require-keys",
        "--env-file",
        "/tmp/keys.env",
    ])
    .unwrap();

    assert_eq!(cli.default_log_filter(), "debug");
    assert_eq!(cli.env_file.as_deref(), Some(std::path::Path::new("/tmp/keys.env")));

    let cfg = cli.resolve_config().unwrap();
    assert_eq!(cfg.server.host, "127.0.0.1");
    assert_eq!(cfg.server.port, 9090);
    assert!(cfg.keys.require_keys);
}

#[test]
fn invalid_port_is_rejected() {
    assert!(Cli::try_parse_from(["keyauth-gateway", "--port", "not-a-port"]).is_err());
}

#[test]
fn missing_config_file_is_an_error() {
    let cli = Cli::try_parse_from([
        "keyauth-gateway",
        "--config",
        "/nonexistent/keyauth.yaml",
    ])
    .unwrap();
    let err = cli.resolve_config().expect_err("must fail");
    assert_eq!(err.code().as_str(), "INTERNAL");
}
