use super::*;

#[test]
fn test_log_config_default() {
    let config = LogConfig::default();
    assert_eq!(config.log_level, Level::INFO);
    assert!(!config.json_format);
    assert_eq!(config.rotation, LogRotation::Daily);
    assert!(config.log_dir.ends_with(".aegis/logs"));
}

#[test]
fn test_log_file_path() {
    let config = LogConfig {
        log_dir: PathBuf::from("/tmp/aegis-logs"),
        ..LogConfig::default()
    };
    assert_eq!(config.log_file(), PathBuf::from("/tmp/aegis-logs/aegis-daemon.log"));
}

#[test]
fn test_rotation_deserializes_lowercase() {
    #[derive(Deserialize)]
    struct Wrapper {
        rotation: LogRotation,
    }
    let parsed: Wrapper = toml::from_str(r#"rotation = "hourly""#).unwrap();
    assert_eq!(parsed.rotation, LogRotation::Hourly);
    assert!(toml::from_str::<Wrapper>(r#"rotation = "weekly""#).is_err());
}

#[test]
fn test_rotation_maps_to_appender_rotation() {
    let never: Rotation = LogRotation::Never.into();
    assert_eq!(format!("{never:?}"), format!("{:?}", Rotation::NEVER));
    let hourly: Rotation = LogRotation::Hourly.into();
    assert_eq!(format!("{hourly:?}"), format!("{:?}", Rotation::HOURLY));
}
