use super::*;
use serial_test::serial;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_config_default_values() {
    let cfg = Config::default();
    assert_eq!(cfg.texts.first.label, "rock");
    assert_eq!(cfg.texts.first.path, "i_wanna_rock.txt");
    assert_eq!(cfg.texts.second.label, "hamlet");
    assert_eq!(cfg.texts.second.path, "hamlet.txt");
    assert_eq!(cfg.timing.char_delay_ms, 3);
    assert_eq!(cfg.timing.grace_period_ms, 1000);
    assert_eq!(cfg.logging.level, LogLevel::Warn);
}

#[test]
#[serial]
fn test_load_existing_file_and_missing_file() {
    let dir = tempdir().expect("create temp dir");
    let mut cfg = Config::default();
    cfg.timing.char_delay_ms = 7;
    cfg.logging.level = LogLevel::Debug;

    let config_path = dir.path().join("cfg.toml");
    fs::write(&config_path, cfg.to_toml().expect("serialize config")).unwrap();

    let loaded = Config::load(&config_path).expect("load existing config");
    assert_eq!(loaded, cfg);

    // Nonexistent file should fall back to defaults
    let missing_path = dir.path().join("missing.toml");
    let default_loaded = Config::load(&missing_path).expect("load missing");
    assert_eq!(default_loaded, Config::default());
}

#[test]
#[serial]
fn test_partial_file_keeps_other_defaults() {
    let dir = tempdir().expect("create temp dir");
    let config_path = dir.path().join("partial.toml");
    fs::write(&config_path, "[timing]\nchar_delay_ms = 1\ngrace_period_ms = 5\n").unwrap();

    let loaded = Config::load(&config_path).expect("load partial config");
    assert_eq!(loaded.timing.char_delay_ms, 1);
    assert_eq!(loaded.timing.grace_period_ms, 5);
    assert_eq!(loaded.texts, TextsConfig::default());
}

#[test]
#[serial]
fn test_load_invalid_toml_fails() {
    let dir = tempdir().expect("create temp dir");
    let invalid_path = dir.path().join("bad.toml");
    fs::write(&invalid_path, "not = [valid\n").unwrap();

    let err = Config::load(&invalid_path).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { ref path, .. } if path == &invalid_path));
    assert!(err.to_string().contains("Failed to parse config file"));
}

#[test]
#[serial]
fn test_unreadable_file_is_a_read_error() {
    let dir = tempdir().expect("create temp dir");
    // A directory exists but cannot be read as a file.
    let err = Config::load(dir.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Read { .. }));
    assert!(err.to_string().starts_with("Failed to read config file"));
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
#[serial]
fn test_texts_cannot_be_configured_from_file() {
    let dir = tempdir().expect("create temp dir");
    let path = dir.path().join("texts.toml");
    fs::write(
        &path,
        "[texts.first]\nlabel = \"x\"\npath = \"x.txt\"\ntitle = \"X\"\n",
    )
    .unwrap();
    assert!(matches!(Config::load(&path), Err(ConfigError::Parse { .. })));

    let mut cfg = Config::default();
    cfg.texts.first.path = "elsewhere.txt".into();
    assert!(!cfg.to_toml().unwrap().contains("elsewhere.txt"));
}

#[test]
#[serial]
fn test_unknown_fields_rejected() {
    let dir = tempdir().expect("create temp dir");
    let path = dir.path().join("unknown.toml");
    fs::write(&path, "[timing]\nchar_delay_ms = 1\ngrace_period_ms = 1\nthreads = 8\n").unwrap();
    assert!(Config::load(&path).is_err());
}

#[test]
#[serial]
fn test_load_rejects_invalid_values() {
    let dir = tempdir().expect("create temp dir");
    let path = dir.path().join("slow.toml");
    fs::write(&path, "[timing]\nchar_delay_ms = 5000\ngrace_period_ms = 1\n").unwrap();
    let err = Config::load(&path).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidValue { .. }));
}

#[test]
#[serial]
fn test_apply_env_vars() {
    std::env::set_var("MD_LOGGING_LEVEL", "debug");
    std::env::set_var("MD_TIMING_CHAR_DELAY_MS", "11");
    std::env::set_var("MD_TIMING_GRACE_PERIOD_MS", " ");
    let mut cfg = Config::default();
    cfg.apply_env_vars().unwrap();
    assert_eq!(cfg.logging.level, LogLevel::Debug);
    assert_eq!(cfg.timing.char_delay_ms, 11);
    assert_eq!(cfg.timing.grace_period_ms, 1000);
    std::env::remove_var("MD_LOGGING_LEVEL");
    std::env::remove_var("MD_TIMING_CHAR_DELAY_MS");
    std::env::remove_var("MD_TIMING_GRACE_PERIOD_MS");

    std::env::set_var("MD_LOGGING_LEVEL", "bogus");
    let mut cfg = Config::default();
    assert!(cfg.apply_env_vars().is_err());
    std::env::remove_var("MD_LOGGING_LEVEL");

    std::env::set_var("MD_TIMING_GRACE_PERIOD_MS", "soon");
    let mut cfg = Config::default();
    assert!(cfg.apply_env_vars().is_err());
    std::env::remove_var("MD_TIMING_GRACE_PERIOD_MS");
}

#[test]
fn test_config_dir_returns_valid_path() {
    if let Some(path) = Config::config_dir() {
        assert!(Path::new(&path).ends_with("monitor-demo"));
    }
}

#[cfg(unix)]
#[test]
#[serial]
fn test_env_vars_tolerate_non_utf8_environment() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let latin1 = OsStr::from_bytes(b"caf\xe9");

    std::env::set_var("UNRELATED_LATIN1_VAR", latin1);
    let mut cfg = Config::default();
    cfg.apply_env_vars().expect("unrelated variables are ignored");
    assert_eq!(cfg, Config::default());
    std::env::remove_var("UNRELATED_LATIN1_VAR");

    std::env::set_var("MD_LOGGING_LEVEL", latin1);
    let mut cfg = Config::default();
    let err = cfg.apply_env_vars().unwrap_err();
    assert!(matches!(err, ConfigError::InvalidValue { ref field, .. } if field == "logging.level"));
    std::env::remove_var("MD_LOGGING_LEVEL");
}
