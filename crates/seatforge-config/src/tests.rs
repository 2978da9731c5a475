//! Tests for engine configuration.

use super::*;

#[test]
fn test_toml_parsing() {
    let toml = r#"
        environment_mode = "reproducible"
        random_seed = 42

        [general_placement]
        max_trials = 3
        fallback = "first_free"
    "#;

    let config = SeatingConfig::from_toml_str(toml).unwrap();
    assert_eq!(config.environment_mode, EnvironmentMode::Reproducible);
    assert_eq!(config.random_seed, Some(42));
    assert_eq!(config.general_placement.max_trials, 3);
    assert_eq!(config.general_placement.fallback, FallbackType::FirstFree);
}

#[test]
fn test_yaml_parsing() {
    let yaml = r#"
        environment_mode: reproducible
        random_seed: 42
        general_placement:
          max_trials: 12
    "#;

    let config = SeatingConfig::from_yaml_str(yaml).unwrap();
    assert_eq!(config.environment_mode, EnvironmentMode::Reproducible);
    assert_eq!(config.random_seed, Some(42));
    assert_eq!(config.general_placement.max_trials, 12);
    assert_eq!(
        config.general_placement.fallback,
        FallbackType::FirstSafeThenFirstFree
    );
}

#[test]
fn test_empty_toml_uses_defaults() {
    let config = SeatingConfig::from_toml_str("").unwrap();
    assert_eq!(config, SeatingConfig::default());
    assert_eq!(config.general_placement.max_trials, DEFAULT_MAX_TRIALS);
    assert_eq!(config.environment_mode, EnvironmentMode::NonReproducible);
    assert_eq!(config.random_seed, None);
}

#[test]
fn test_reproducible_requires_seed() {
    let err = SeatingConfig::from_toml_str(r#"environment_mode = "reproducible""#).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
}

#[test]
fn test_unknown_fallback_is_rejected() {
    let toml = r#"
        [general_placement]
        fallback = "best_fit"
    "#;
    assert!(matches!(
        SeatingConfig::from_toml_str(toml),
        Err(ConfigError::Toml(_))
    ));
}

#[test]
fn test_missing_file() {
    let err = SeatingConfig::load("does/not/exist/seating.toml").unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}

#[test]
fn test_builder() {
    let config = SeatingConfig::new()
        .with_random_seed(123)
        .with_max_trials(0)
        .with_fallback(FallbackType::FirstFree);

    assert_eq!(config.random_seed, Some(123));
    assert_eq!(config.environment_mode, EnvironmentMode::Reproducible);
    assert_eq!(config.general_placement.max_trials, 0);
    assert!(config.validate().is_ok());
}
