use dmxp_fanout::Fanout::Structs::ConfigError;
use dmxp_fanout::{FanoutBuilder, FanoutConfig};
use std::fs;
use std::path::PathBuf;

fn write_config(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("dmxp_fanout_{}_{}.toml", name, std::process::id()));
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn builder_from_file() {
    let path = write_config(
        "rolling",
        r#"
        limit = 6
        read_from_start = true
        initial_bytes = [1, 2, 3]
        "#,
    );

    let w = FanoutBuilder::from_file(&path).unwrap().build();
    assert_eq!(w.limit(), 6);
    assert!(w.read_from_start());
    assert_eq!(w.retained(), 3);

    let mut r = w.new_reader();
    w.write(&[4, 5, 6, 7]).unwrap();
    let mut rb = [0u8; 8];
    assert_eq!(r.read(&mut rb), Ok(6));
    assert_eq!(&rb[..6], &[2, 3, 4, 5, 6, 7]);

    fs::remove_file(path).unwrap();
}

#[test]
fn partial_file_uses_defaults() {
    let path = write_config("partial", "limit = 128\n");
    let cfg = FanoutConfig::load(&path).unwrap();
    assert_eq!(cfg.limit, 128);
    assert!(!cfg.read_from_start);
    assert!(cfg.initial_bytes.is_empty());
    fs::remove_file(path).unwrap();
}

#[test]
fn builder_overrides_loaded_values() {
    let path = write_config("override", "limit = 128\nread_from_start = true\n");
    let w = FanoutBuilder::from_file(&path)
        .unwrap()
        .with_limit(0)
        .build();
    assert_eq!(w.limit(), 0);
    assert!(w.read_from_start());
    fs::remove_file(path).unwrap();
}

#[test]
fn malformed_file_is_a_parse_error() {
    let path = write_config("malformed", "limit = \"lots\"\n");
    let err = FanoutConfig::load(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
    fs::remove_file(path).unwrap();
}
