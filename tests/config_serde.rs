//! Loading strategies from configuration

#![cfg(feature = "serde")]

use serde::Deserialize;
use slackwater::{Backoff, Interval, Strategy};
use std::time::Duration;

#[derive(Debug, Deserialize)]
struct ClientConfig {
    endpoint: String,
    retry: Backoff,
}

#[test]
fn missing_fields_take_defaults() {
    let strategy: Strategy = serde_json::from_str(r#"{"exponential": {}}"#).unwrap();
    assert_eq!(strategy, Strategy::exponential());

    let strategy: Strategy = serde_json::from_str(r#"{"constant": {}}"#).unwrap();
    assert_eq!(strategy, Strategy::constant());
}

#[test]
fn explicit_fields_override_defaults() {
    let json = r#"{
        "constant": {
            "retry_limit": 2,
            "interval": {"finite": {"secs": 0, "nanos": 500000000}}
        }
    }"#;
    let strategy: Strategy = serde_json::from_str(json).unwrap();

    assert_eq!(strategy.maximum_retries(), 2);
    assert_eq!(strategy.base_duration(), Interval::milliseconds(500));
    assert_eq!(strategy.timeout(), Interval::MAX);
}

#[test]
fn never_interval_survives_serialization() {
    let strategy = Strategy::constant().with_timeout(Interval::Never);
    let json = serde_json::to_string(&strategy).unwrap();
    assert!(json.contains("\"never\""));

    let back: Strategy = serde_json::from_str(&json).unwrap();
    assert_eq!(back, strategy);
}

#[test]
fn backoff_embeds_in_larger_config() {
    let json = r#"{
        "endpoint": "https://example.invalid",
        "retry": {"exponential": {"retry_limit": 2, "multiplier": 3.0}}
    }"#;
    let config: ClientConfig = serde_json::from_str(json).unwrap();

    assert_eq!(config.endpoint, "https://example.invalid");
    let delays: Vec<Duration> = config.retry.delays().collect();
    assert_eq!(delays, vec![Duration::from_secs(2), Duration::from_secs(6)]);
}

#[test]
fn unknown_variant_is_rejected() {
    let result: Result<Strategy, _> = serde_json::from_str(r#"{"linear": {}}"#);
    assert!(result.is_err());
}
