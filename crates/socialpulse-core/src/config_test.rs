use std::collections::HashMap;
use std::env::VarError;

use super::*;

fn lookup_from_map<'a>(
    map: &'a HashMap<&'a str, &'a str>,
) -> impl Fn(&str) -> Result<String, VarError> + 'a {
    move |key| {
        map.get(key)
            .map(|v| (*v).to_string())
            .ok_or(VarError::NotPresent)
    }
}

#[test]
fn parse_environment_development() {
    assert_eq!(
        parse_environment("development").unwrap(),
        Environment::Development
    );
}

#[test]
fn parse_environment_test() {
    assert_eq!(parse_environment("test").unwrap(), Environment::Test);
}

#[test]
fn parse_environment_production() {
    assert_eq!(
        parse_environment("production").unwrap(),
        Environment::Production
    );
}

#[test]
fn parse_environment_unknown_fails() {
    let err = parse_environment("staging").unwrap_err();
    assert!(matches!(err, ConfigError::InvalidEnvVar { ref var, .. } if var == "SOCIALPULSE_ENV"));
}

#[test]
fn build_app_config_uses_defaults_for_empty_env() {
    let map: HashMap<&str, &str> = HashMap::new();
    let result = build_app_config(lookup_from_map(&map));
    assert!(result.is_ok(), "expected Ok, got: {result:?}");
    let cfg = result.unwrap();
    assert_eq!(cfg.env, Environment::Development);
    assert_eq!(cfg.bind_addr.to_string(), "0.0.0.0:5000");
    assert_eq!(cfg.log_level, "info");
    assert_eq!(cfg.sample_post_count, 50);
    assert_eq!(cfg.sample_max_age_hours, 72);
    assert_eq!(cfg.engagement_days, 30);
}

#[test]
fn build_app_config_fails_with_invalid_bind_addr() {
    let mut map = HashMap::new();
    map.insert("SOCIALPULSE_BIND_ADDR", "not-a-socket-addr");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "SOCIALPULSE_BIND_ADDR"),
        "expected InvalidEnvVar(SOCIALPULSE_BIND_ADDR), got: {result:?}"
    );
}

#[test]
fn build_app_config_reads_overrides() {
    let mut map = HashMap::new();
    map.insert("SOCIALPULSE_ENV", "production");
    map.insert("SOCIALPULSE_BIND_ADDR", "127.0.0.1:8080");
    map.insert("SOCIALPULSE_LOG_LEVEL", "debug");
    map.insert("SOCIALPULSE_SAMPLE_POST_COUNT", "200");
    map.insert("SOCIALPULSE_SAMPLE_MAX_AGE_HOURS", "24");
    map.insert("SOCIALPULSE_ENGAGEMENT_DAYS", "14");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.env, Environment::Production);
    assert_eq!(cfg.bind_addr.to_string(), "127.0.0.1:8080");
    assert_eq!(cfg.log_level, "debug");
    assert_eq!(cfg.sample_post_count, 200);
    assert_eq!(cfg.sample_max_age_hours, 24);
    assert_eq!(cfg.engagement_days, 14);
}

#[test]
fn sample_post_count_zero_is_allowed() {
    let mut map = HashMap::new();
    map.insert("SOCIALPULSE_SAMPLE_POST_COUNT", "0");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.sample_post_count, 0);
}

#[test]
fn sample_post_count_invalid() {
    let mut map = HashMap::new();
    map.insert("SOCIALPULSE_SAMPLE_POST_COUNT", "lots");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "SOCIALPULSE_SAMPLE_POST_COUNT"),
        "expected InvalidEnvVar(SOCIALPULSE_SAMPLE_POST_COUNT), got: {result:?}"
    );
}

#[test]
fn sample_max_age_hours_rejects_zero() {
    let mut map = HashMap::new();
    map.insert("SOCIALPULSE_SAMPLE_MAX_AGE_HOURS", "0");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "SOCIALPULSE_SAMPLE_MAX_AGE_HOURS"),
        "expected InvalidEnvVar(SOCIALPULSE_SAMPLE_MAX_AGE_HOURS), got: {result:?}"
    );
}

#[test]
fn engagement_days_invalid() {
    let mut map = HashMap::new();
    map.insert("SOCIALPULSE_ENGAGEMENT_DAYS", "-3");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "SOCIALPULSE_ENGAGEMENT_DAYS"),
        "expected InvalidEnvVar(SOCIALPULSE_ENGAGEMENT_DAYS), got: {result:?}"
    );
}
