use std::path::PathBuf;

use tinyhttpd::config::Config;
use tinyhttpd::http::encoding::ContentEncoding;

#[test]
fn test_config_defaults() {
    let cfg = Config::default();

    assert_eq!(cfg.listen_addr, "0.0.0.0:4221");
    assert_eq!(
        cfg.data_dir,
        PathBuf::from("/tmp/data/codecrafters.io/http-server-tester/")
    );
    assert_eq!(cfg.read_buffer_size, 1024);
    assert_eq!(cfg.encodings, vec![ContentEncoding::Gzip]);
}

#[test]
fn test_config_yaml_overrides_and_defaults() {
    let cfg = Config::from_yaml("listen_addr: 127.0.0.1:9000\ndata_dir: /srv/files\n").unwrap();

    assert_eq!(cfg.listen_addr, "127.0.0.1:9000");
    assert_eq!(cfg.data_dir, PathBuf::from("/srv/files"));
    assert_eq!(cfg.read_buffer_size, 1024);
    assert_eq!(cfg.encodings, vec![ContentEncoding::Gzip]);
}

#[test]
fn test_config_yaml_can_disable_encodings() {
    let cfg = Config::from_yaml("encodings: []\n").unwrap();

    assert!(cfg.encodings.is_empty());
}

#[test]
fn test_config_yaml_rejects_unknown_encoding() {
    assert!(Config::from_yaml("encodings: [brotli]\n").is_err());
}

#[test]
fn test_config_yaml_rejects_zero_buffer() {
    assert!(Config::from_yaml("read_buffer_size: 0\n").is_err());
}

#[test]
fn test_config_from_file() {
    let path = std::env::temp_dir().join(format!("tinyhttpd-config-{}.yaml", std::process::id()));
    std::fs::write(&path, "max_request_size: 4096\n").unwrap();

    let cfg = Config::from_file(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(cfg.max_request_size, 4096);
}

#[test]
fn test_config_from_missing_file() {
    assert!(Config::from_file("/nonexistent/tinyhttpd.yaml").is_err());
}
