use cilin_core::config::*;

#[test]
fn config_loads_from_empty_toml_with_all_defaults() {
    let config = CilinConfig::from_toml("").unwrap();

    // Thesaurus defaults
    assert_eq!(config.thesaurus.path, "model/cilin.txt");
    assert!(config.thesaurus.fail_open);

    // Scoring defaults
    assert_eq!(config.scoring.excluded_tags, vec!["u", "x", "w"]);

    // Observability defaults
    assert_eq!(config.observability.log_level, "info");
    assert!(!config.observability.json_logs);
}

#[test]
fn config_loads_partial_toml_with_overrides() {
    let toml = r#"
[thesaurus]
path = "/data/cilin_ex.txt"

[scoring]
excluded_tags = ["u", "w", "uj", "ul"]
"#;
    let config = CilinConfig::from_toml(toml).unwrap();
    assert_eq!(config.thesaurus.path, "/data/cilin_ex.txt");
    // Non-overridden fields keep defaults
    assert!(config.thesaurus.fail_open);
    assert_eq!(config.scoring.excluded_tags, vec!["u", "w", "uj", "ul"]);
    assert_eq!(config.observability.log_level, "info");
}

#[test]
fn config_rejects_invalid_toml() {
    let err = CilinConfig::from_toml("[thesaurus\npath = 1").unwrap_err();
    assert!(matches!(err, cilin_core::CilinError::ConfigError(_)));
}

#[test]
fn config_missing_file_is_config_error() {
    let err = CilinConfig::from_file("/definitely/not/here/cilin.toml").unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("/definitely/not/here/cilin.toml"));
}

#[test]
fn config_serde_roundtrip() {
    let config = CilinConfig::default();
    let toml_str = toml::to_string(&config).unwrap();
    let roundtripped = CilinConfig::from_toml(&toml_str).unwrap();
    assert_eq!(roundtripped.thesaurus.path, config.thesaurus.path);
    assert_eq!(
        roundtripped.scoring.excluded_tags,
        config.scoring.excluded_tags
    );
}
