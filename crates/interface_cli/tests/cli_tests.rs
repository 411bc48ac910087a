//! Tests for the command-line front end

use std::io::Cursor;

use interface_cli::config::{CliConfig, OutputFormat};
use interface_cli::error::CliError;
use interface_cli::{read_request, run};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use test_utils::DateFixtures;

const PLAIN_REQUEST: &str = r#"{
    "registration_date": "2021-01-01",
    "renewal_date": "2024-01-01",
    "zone": "A",
    "gvw_kg": 10000,
    "sum_insured": [
        { "category": "idv_vehicle", "amount": 300000 },
        { "category": "idv_vehicle", "amount": 200000 }
    ]
}"#;

fn run_with(config: &CliConfig, request: &str) -> Result<String, CliError> {
    let mut output = Vec::new();
    run(config, Cursor::new(request), &mut output, DateFixtures::today())?;
    Ok(String::from_utf8(output).expect("output is UTF-8"))
}

#[test]
fn test_read_request_defaults_missing_fields() {
    let request = read_request(Cursor::new("{}")).unwrap();

    assert!(request.registration_date.is_none());
    assert!(request.sum_insured.is_empty());
    assert!(!request.anti_theft);
}

#[test]
fn test_text_output() {
    let text = run_with(&CliConfig::default(), PLAIN_REQUEST).unwrap();

    assert!(text.starts_with("GCCV Premium Statement"));
    assert!(text.contains("  Basic OD: Rs 8,755.00"));
    assert!(text.contains("  Grand Total: Rs 40,779.22"));
    assert!(text.trim_end().ends_with("Grand Total: Rs 40,779"));
}

#[test]
fn test_json_output() {
    let config = CliConfig {
        output: OutputFormat::Json,
        ..Default::default()
    };
    let json = run_with(&config, PLAIN_REQUEST).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    let grand_total: Decimal = value["grand_total"].as_str().unwrap().parse().unwrap();
    assert_eq!(grand_total, dec!(40779.22));
    let basic_tp: Decimal = value["breakdown"]["liability"]["basic_tp"]
        .as_str()
        .unwrap()
        .parse()
        .unwrap();
    assert_eq!(basic_tp, dec!(27186));
    assert!(value["lines"].as_array().unwrap().iter().any(|line| line["label"] == "Basic OD"));
}

#[test]
fn test_invalid_json_rejected() {
    let err = run_with(&CliConfig::default(), "{ not json").unwrap_err();

    assert!(matches!(err, CliError::Json(_)));
    assert_eq!(err.to_response().error, "invalid_json");
}

#[test]
fn test_rating_error_reported() {
    let request = r#"{ "underwriter_discount_pct": 250 }"#;
    let err = run_with(&CliConfig::default(), request).unwrap_err();

    assert!(matches!(err, CliError::Rating(_)));
    assert_eq!(err.error_type(), "validation_error");
}

#[test]
fn test_consumables_switch_from_config() {
    let request = r#"{
        "registration_date": "2021-01-01",
        "renewal_date": "2024-01-01",
        "sum_insured": [{ "category": "idv_vehicle", "amount": 500000 }],
        "cng": "extra",
        "cng_value": 100000,
        "own_damage_covers": { "consumables": true }
    }"#;
    let config = CliConfig {
        consumable_includes_cng: false,
        ..Default::default()
    };

    assert!(run_with(&config, request).unwrap().contains("  Consumable: Rs 1,250.00"));
    assert!(run_with(&CliConfig::default(), request).unwrap().contains("  Consumable: Rs 1,500.00"));
}
