//! Configuration loading integration tests

use codesmith::config::{load_config, load_config_from_str};
use serial_test::serial;
use std::io::Write;

#[test]
fn test_defaults() {
    let config = load_config_from_str("").unwrap();
    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.server.port, 19420);
    assert_eq!(config.access.allowed_ips, vec!["127.0.0.1", "::1"]);
    assert!(config.generators.is_empty());
    assert_eq!(config.files.new_file_mode, 0o666);
}

#[test]
fn test_full_config_round_trip() {
    let toml = r#"
[server]
host = "0.0.0.0"
port = 8080
name = "scaffold-box"

[access]
allowed_ips = ["127.0.0.1", "::1", "192.168.0.*"]

[logging]
level = "debug"
format = "json"

[files]
new_file_mode = 420   # 0o644
new_dir_mode = 493    # 0o755

[generators.crud]
kind = "crud"
page_size = 50
"#;

    let config = load_config_from_str(toml).unwrap();
    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.server.name, "scaffold-box");
    assert_eq!(config.access.allowed_ips.len(), 3);
    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.files.new_file_mode, 0o644);
    assert_eq!(config.generators["crud"].options["page_size"], 50);
}

#[test]
fn test_explicit_config_file() {
    let mut file = tempfile::NamedTempFile::with_suffix(".toml").unwrap();
    writeln!(file, "[server]\nport = 9999").unwrap();

    let config = load_config(Some(file.path().to_str().unwrap())).unwrap();
    assert_eq!(config.server.port, 9999);
}

#[test]
fn test_missing_config_file_errors() {
    let result = load_config(Some("/nonexistent/codesmith.toml"));
    assert!(result.is_err());
}

#[test]
#[serial]
fn test_env_var_override() {
    // SAFETY: guarded by #[serial]; no other test thread touches the
    // environment while this one runs.
    unsafe {
        std::env::set_var("CODESMITH_SERVER__PORT", "8123");
    }

    let config = load_config(None).unwrap();
    assert_eq!(config.server.port, 8123);

    unsafe {
        std::env::remove_var("CODESMITH_SERVER__PORT");
    }
}

#[test]
#[serial]
fn test_env_var_overrides_file() {
    let mut file = tempfile::NamedTempFile::with_suffix(".toml").unwrap();
    writeln!(file, "[server]\nport = 9999").unwrap();

    unsafe {
        std::env::set_var("CODESMITH_SERVER__PORT", "8124");
    }

    let config = load_config(Some(file.path().to_str().unwrap())).unwrap();
    assert_eq!(config.server.port, 8124);

    unsafe {
        std::env::remove_var("CODESMITH_SERVER__PORT");
    }
}

#[test]
fn test_validation_rejects_bad_server_values() {
    assert!(load_config_from_str("[server]\nport = 0\n").is_err());
    assert!(load_config_from_str("[server]\nhost = \"\"\n").is_err());
}

#[test]
fn test_generator_descriptor_requires_kind() {
    let result = load_config_from_str("[generators.custom]\nkind = \"\"\n");
    assert!(result.is_err());
}
