use tempora::config::Config;
use tempora::error::TimerError;
use tempora::feature::{AuthContext, FeatureToggle};
use tempora::timer::Timer;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.environment, "dev");
    assert_eq!(config.timer.minutes_per_unit, 1.0);
    assert_eq!(config.timer.units.get("class_period"), Some(&50.0));
    assert_eq!(config.display.date_format, "%d/%m/%Y");
    assert!(!config.logging.enabled);
    assert!(config.features.is_empty());
}

#[test]
fn test_config_validation() {
    let mut config = Config::default();

    // Valid config should pass
    assert!(config.validate().is_ok());

    // Non-positive scale should fail
    config.timer.minutes_per_unit = 0.0;
    assert!(config.validate().is_err());

    // Reset and test a bad named unit
    config.timer.minutes_per_unit = 1.0;
    config.timer.units.insert("broken".to_string(), -5.0);
    assert!(config.validate().is_err());

    // Reset and test an unknown log level
    config.timer.units.remove("broken");
    config.logging.enabled = true;
    config.logging.level = "loud".to_string();
    assert!(config.validate().is_err());

    config.logging.level = "debug".to_string();
    assert!(config.validate().is_ok());
}

#[test]
fn test_invalid_date_format_is_rejected() {
    let mut config = Config::default();
    config.display.date_format = "%Q".to_string();
    assert!(config.validate().is_err());
}

#[test]
fn test_config_serialization() {
    let config = Config::default();
    let toml_str = toml::to_string_pretty(&config).unwrap();
    assert!(toml_str.contains("environment = \"dev\""));
    assert!(toml_str.contains("class_period = 50.0"));
}

#[test]
fn test_partial_config_deserialization() {
    // Partial TOML configs merge with defaults
    let partial_toml = r#"
environment = "prod"

[timer]
minutes_per_unit = 45.0

[logging]
enabled = true

[features]
new_dashboard = true
legacy_export = false
reports = { roles = ["admin"], users = [7, "42"], env = ["prod"] }
"#;

    let config: Config = toml::from_str(partial_toml).unwrap();

    assert_eq!(config.environment, "prod");
    assert_eq!(config.timer.minutes_per_unit, 45.0);
    assert!(config.logging.enabled);

    // Unspecified values use defaults
    assert_eq!(config.timer.units.get("class_period"), Some(&50.0));
    assert_eq!(config.logging.level, "info");
    assert_eq!(config.display.datetime_separator, " - ");

    assert_eq!(config.features.get("new_dashboard"), Some(&FeatureToggle::Flag(true)));
    match config.features.get("reports") {
        Some(FeatureToggle::Rules(rules)) => {
            assert_eq!(rules.roles, vec!["admin"]);
            assert_eq!(rules.users, vec!["7", "42"]);
            assert_eq!(rules.env, vec!["prod"]);
        }
        other => panic!("expected rules, got {:?}", other),
    }

    let admin = AuthContext::new("prod").with_user("7").with_role("admin");
    assert!(config.features().is_enabled("reports", &admin));
    assert!(!config.features().is_enabled("legacy_export", &admin));
}

#[test]
fn test_empty_config_deserialization() {
    let config: Config = toml::from_str("").unwrap();
    let default_config = Config::default();

    assert_eq!(config.environment, default_config.environment);
    assert_eq!(config.timer.minutes_per_unit, default_config.timer.minutes_per_unit);
    assert_eq!(config.logging.enabled, default_config.logging.enabled);
    assert_eq!(config.display.date_format, default_config.display.date_format);
}

#[test]
fn test_named_unit_lookup() {
    let config = Config::default();

    let minutes = Timer::with_named_unit(2.0, "class_period", &config.timer)
        .unwrap()
        .to_minutes();
    assert_eq!(minutes.get().magnitude(), Some(100.0));

    assert!(matches!(
        Timer::with_named_unit(1.0, "semester", &config.timer),
        Err(TimerError::ConfigurationMissing(_))
    ));
}

#[test]
fn test_generate_config_creates_directory() {
    use std::fs;

    let temp_dir = std::env::temp_dir().join("tempora_test_config");
    let config_path = temp_dir.join("nested").join("config.toml");

    if temp_dir.exists() {
        let _ = fs::remove_dir_all(&temp_dir);
    }
    assert!(!temp_dir.exists());

    let result = Config::generate_default_config(&config_path);
    assert!(result.is_ok());

    assert!(config_path.exists());

    let content = fs::read_to_string(&config_path).unwrap();
    assert!(content.contains("# Tempora Configuration File"));
    assert!(content.contains("environment = \"dev\""));

    // The generated file loads back and validates
    let loaded = Config::load_from_file(&config_path).unwrap();
    assert_eq!(loaded.timer.units.get("class_period"), Some(&50.0));

    let _ = fs::remove_dir_all(&temp_dir);
}

#[test]
fn test_load_located_reports_source() {
    let (config, path) = Config::load_located().unwrap();
    match path {
        Some(path) => {
            let from_file = Config::load_from_file(&path).unwrap();
            assert_eq!(config.environment, from_file.environment);
        }
        None => assert_eq!(config.environment, Config::default().environment),
    }
}

#[test]
fn test_misspelled_feature_rule_fails_to_load() {
    use std::fs;

    let toml_content = r#"
[features]
reports = { role = ["admin"] }
"#;
    assert!(toml::from_str::<Config>(toml_content).is_err());

    let temp_dir = std::env::temp_dir().join("tempora_test_bad_feature");
    let config_path = temp_dir.join("config.toml");
    fs::create_dir_all(&temp_dir).unwrap();
    fs::write(&config_path, toml_content).unwrap();

    assert!(Config::load_from_file(&config_path).is_err());

    let _ = fs::remove_dir_all(&temp_dir);
}
