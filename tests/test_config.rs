use clap::Parser;
use lantern::config::Config;
use std::path::PathBuf;

#[test]
fn test_config_defaults() {
    let cfg = Config::try_parse_from(["lantern"]).unwrap();

    assert_eq!(cfg.port, 4221);
    assert!(cfg.directory.is_none());
}

#[test]
fn test_config_directory_and_port_flags() {
    let cfg =
        Config::try_parse_from(["lantern", "--directory", "/tmp/files", "--port", "8080"]).unwrap();

    assert_eq!(cfg.directory, Some(PathBuf::from("/tmp/files")));
    assert_eq!(cfg.port, 8080);
}

#[test]
fn test_config_rejects_non_numeric_port() {
    assert!(Config::try_parse_from(["lantern", "--port", "http"]).is_err());
}
