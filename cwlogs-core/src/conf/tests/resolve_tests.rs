use crate::conf::{
    ConfigError, RunbookConfig, resolve_log_group, resolve_region, resolve_window,
};
use crate::window::WindowError;
use pretty_assertions::assert_eq;

fn restricted() -> RunbookConfig {
    RunbookConfig {
        log_groups: vec![
            "/aws/eks/myapp-prod/cluster".to_string(),
            "/aws/apigateway/capi".to_string(),
        ],
        ..Default::default()
    }
}

#[test]
fn requested_group_is_used_when_no_list_is_configured() {
    // Act
    let group = resolve_log_group(Some("/aws/lambda/x"), None, &RunbookConfig::default());

    // Assert
    assert_eq!(group.unwrap(), "/aws/lambda/x");
}

#[test]
fn env_override_wins_over_requested_group() {
    // Act
    let group = resolve_log_group(Some("/aws/apigateway/capi"), Some("/from/env"), &restricted());

    // Assert
    assert_eq!(group.unwrap(), "/from/env");
}

#[test]
fn blank_env_override_is_ignored() {
    // Act
    let group = resolve_log_group(Some("/aws/apigateway/capi"), Some("  "), &restricted());

    // Assert
    assert_eq!(group.unwrap(), "/aws/apigateway/capi");
}

#[test]
fn missing_group_is_an_error() {
    for requested in [None, Some(""), Some("   ")] {
        let err = resolve_log_group(requested, None, &RunbookConfig::default()).unwrap_err();
        assert!(matches!(err, ConfigError::MissingLogGroup));
    }
}

#[test]
fn group_outside_the_configured_list_is_rejected() {
    // Act
    let err = resolve_log_group(Some("/aws/other"), None, &restricted()).unwrap_err();

    // Assert
    match err {
        ConfigError::UnknownLogGroup { name, allowed } => {
            assert_eq!(name, "/aws/other");
            assert_eq!(allowed, restricted().log_groups);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn window_flag_beats_configured_default() {
    // Arrange
    let config = RunbookConfig {
        default_window: "1d".parse().unwrap(),
        ..Default::default()
    };

    // Act / Assert
    assert_eq!(resolve_window(Some("15m"), &config).unwrap().as_seconds(), 900);
    assert_eq!(resolve_window(None, &config).unwrap().as_seconds(), 86_400);
    assert_eq!(
        resolve_window(None, &RunbookConfig::default())
            .unwrap()
            .as_seconds(),
        300
    );
}

#[test]
fn invalid_window_flag_is_not_replaced_by_default() {
    // Act
    let err = resolve_window(Some("5 minutes"), &RunbookConfig::default()).unwrap_err();

    // Assert
    match err {
        ConfigError::InvalidWindow(WindowError::Unsupported { token }) => {
            assert_eq!(token, "5 minutes")
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn region_flag_beats_config() {
    // Arrange
    let config = RunbookConfig {
        region: Some("eu-west-1".to_string()),
        ..Default::default()
    };

    // Act / Assert
    assert_eq!(resolve_region(Some("us-east-2"), &config), Some("us-east-2"));
    assert_eq!(resolve_region(None, &config), Some("eu-west-1"));
    assert_eq!(resolve_region(Some(" "), &config), Some("eu-west-1"));
    assert_eq!(resolve_region(None, &RunbookConfig::default()), None);
}
