use std::io::Write;

use elevens_engine::config::{self, ConfigError, ValueSource, CONFIG_ENV, SEED_ENV};
use serial_test::serial;

fn clear_env() {
    std::env::remove_var(CONFIG_ENV);
    std::env::remove_var(SEED_ENV);
}

#[test]
#[serial]
fn defaults_without_env() {
    clear_env();
    let resolved = config::load_with_sources().unwrap();
    assert_eq!(resolved.config.seed, None);
    assert_eq!(resolved.sources.seed, ValueSource::Default);
}

#[test]
#[serial]
fn file_then_env_override() {
    clear_env();
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "seed = 11").unwrap();
    std::env::set_var(CONFIG_ENV, file.path());

    let resolved = config::load_with_sources().unwrap();
    assert_eq!(resolved.config.seed, Some(11));
    assert_eq!(resolved.sources.seed, ValueSource::File);

    std::env::set_var(SEED_ENV, "99");
    let resolved = config::load_with_sources().unwrap();
    assert_eq!(resolved.config.seed, Some(99));
    assert_eq!(resolved.sources.seed, ValueSource::Env);
    clear_env();
}

#[test]
#[serial]
fn invalid_seed_is_reported() {
    clear_env();
    std::env::set_var(SEED_ENV, "eleven");
    let err = config::load().unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
    assert!(err.to_string().contains("eleven"));
    clear_env();
}

#[test]
#[serial]
fn missing_config_file_is_io_error() {
    clear_env();
    let dir = tempfile::tempdir().unwrap();
    std::env::set_var(CONFIG_ENV, dir.path().join("absent.toml"));
    assert!(matches!(config::load(), Err(ConfigError::Io(_))));
    clear_env();
}
