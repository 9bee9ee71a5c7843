//! Integration tests for the Bracket Tax Engine.
//!
//! This test suite covers the HTTP surface end to end:
//! - Total tax and breakdown for the reference scenarios
//! - Year fallback
//! - Summaries with deductions and credits
//! - Scenario and year-over-year comparisons
//! - Loading tables from the YAML configuration directory
//! - Error cases

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use rust_decimal::Decimal;
use serde_json::{Value, json};
use std::str::FromStr;
use tower::ServiceExt;

use bracket_tax_engine::api::{AppState, create_router};
use bracket_tax_engine::calculation::round_half_up;
use bracket_tax_engine::config::ConfigLoader;

// =============================================================================
// Test Helpers
// =============================================================================

fn create_test_state() -> AppState {
    let config = ConfigLoader::load("./config/brackets").expect("Failed to load config");
    AppState::new(config)
}

fn create_router_for_test() -> Router {
    create_router(create_test_state())
}

fn decimal(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn decimal_at(value: &Value) -> Decimal {
    decimal(value.as_str().expect("expected a decimal string"))
}

async fn post(router: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

fn assert_decimal_eq(actual: &Value, expected: &str) {
    assert_eq!(
        decimal_at(actual),
        decimal(expected),
        "Expected {}, got {}",
        expected,
        actual
    );
}

// =============================================================================
// Total tax
// =============================================================================

#[tokio::test]
async fn test_tax_for_50000_in_2025() {
    let (status, json) = post(
        create_router_for_test(),
        "/tax",
        json!({ "taxable_income": 50000, "year": "2025" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_decimal_eq(&json["tax"], "9017.75");
    assert_eq!(json["year_requested"], "2025");
    assert_eq!(json["year_applied"], "2025");
}

#[tokio::test]
async fn test_tax_on_first_threshold_is_zero() {
    let (status, json) = post(
        create_router_for_test(),
        "/tax",
        json!({ "taxable_income": 10064, "year": "2025" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_decimal_eq(&json["tax"], "0");
}

#[tokio::test]
async fn test_tax_for_zero_income_is_zero() {
    let (status, json) = post(
        create_router_for_test(),
        "/tax",
        json!({ "taxable_income": 0 }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_decimal_eq(&json["tax"], "0");
}

#[tokio::test]
async fn test_unknown_year_matches_default_year() {
    let (_, unknown) = post(
        create_router_for_test(),
        "/tax",
        json!({ "taxable_income": "123456.78", "year": "1987" }),
    )
    .await;
    let (_, default) = post(
        create_router_for_test(),
        "/tax",
        json!({ "taxable_income": "123456.78", "year": "2025" }),
    )
    .await;

    assert_eq!(unknown["year_requested"], "1987");
    assert_eq!(unknown["year_applied"], "2025");
    assert_eq!(decimal_at(&unknown["tax"]), decimal_at(&default["tax"]));
}

#[tokio::test]
async fn test_each_year_uses_its_own_table() {
    let expected = [
        ("2022", "15424.50"),
        ("2023", "15692.50"),
        ("2024", "15841.00"),
        ("2025", "16697.16"),
    ];

    for (year, tax) in expected {
        let (status, json) = post(
            create_router_for_test(),
            "/tax",
            json!({ "taxable_income": 75000, "year": year }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_decimal_eq(&json["tax"], tax);
    }
}

// =============================================================================
// Breakdown
// =============================================================================

#[tokio::test]
async fn test_breakdown_for_50000_in_2025() {
    let (status, json) = post(
        create_router_for_test(),
        "/breakdown",
        json!({ "taxable_income": 50000, "year": "2025" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);

    let entries = json["entries"].as_array().unwrap();
    assert_eq!(entries.len(), 3);

    assert_eq!(entries[0]["range_label"], "$0 - $10,064");
    assert_eq!(entries[0]["rate_label"], "0%");
    assert_decimal_eq(&entries[0]["tax_amount"], "0");

    assert_eq!(entries[1]["range_label"], "$10,064 - $25,659");
    assert_eq!(entries[1]["rate_label"], "11%");
    assert_decimal_eq(&entries[1]["taxable_amount"], "15595");
    assert_decimal_eq(&entries[1]["tax_amount"], "1715.45");

    assert_eq!(entries[2]["range_label"], "$25,659 - $73,369");
    assert_decimal_eq(&entries[2]["taxable_amount"], "24341");
    assert_decimal_eq(&entries[2]["tax_amount"], "7302.30");

    assert_decimal_eq(&json["total_tax"], "9017.75");
}

#[tokio::test]
async fn test_breakdown_top_bracket_is_open_ended() {
    let (_, json) = post(
        create_router_for_test(),
        "/breakdown",
        json!({ "taxable_income": 500000, "year": "2022" }),
    )
    .await;

    let entries = json["entries"].as_array().unwrap();
    assert_eq!(entries.len(), 5);
    assert_eq!(entries[4]["range_label"], "$148,000 and above");
    assert_eq!(entries[4]["rate_label"], "42%");
}

#[tokio::test]
async fn test_breakdown_sum_matches_tax_endpoint() {
    for income in ["0.01", "8900", "23850.99", "99999.99", "1000000"] {
        let body = json!({ "taxable_income": income, "year": "2023" });
        let (_, breakdown) = post(create_router_for_test(), "/breakdown", body.clone()).await;
        let (_, tax) = post(create_router_for_test(), "/tax", body).await;

        let sum: Decimal = breakdown["entries"]
            .as_array()
            .unwrap()
            .iter()
            .map(|entry| decimal_at(&entry["tax_amount"]))
            .sum();
        assert_eq!(
            round_half_up(sum),
            decimal_at(&tax["tax"]),
            "income {}",
            income
        );
    }
}

// =============================================================================
// Summary
// =============================================================================

#[tokio::test]
async fn test_summary_reference_scenario() {
    let (status, json) = post(
        create_router_for_test(),
        "/summary",
        json!({ "gross_income": 50000, "deductions": 0, "credits": 0, "year": "2025" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);

    let summary = &json["summary"];
    assert_decimal_eq(&summary["taxable_income"], "50000");
    assert_decimal_eq(&summary["total_tax"], "9017.75");
    assert_decimal_eq(&summary["effective_rate"], "18.04");
    assert_decimal_eq(&summary["net_income"], "40982.25");

    assert!(json["calculation_id"].is_string());
    assert!(json["audit_trace"]["steps"].as_array().unwrap().len() >= 4);
    assert!(json["audit_trace"]["warnings"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_summary_with_deductions_and_credits() {
    let (status, json) = post(
        create_router_for_test(),
        "/summary",
        json!({ "gross_income": 60000, "deductions": 10000, "credits": "1017.75", "year": "2025" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);

    let summary = &json["summary"];
    assert_decimal_eq(&summary["taxable_income"], "50000");
    assert_decimal_eq(&summary["gross_tax"], "9017.75");
    assert_decimal_eq(&summary["total_tax"], "8000.00");
    assert_decimal_eq(&summary["effective_rate"], "13.33");
    assert_decimal_eq(&summary["net_income"], "52000.00");
}

#[tokio::test]
async fn test_summary_unknown_year_warns() {
    let (status, json) = post(
        create_router_for_test(),
        "/summary",
        json!({ "gross_income": 50000, "year": "2099" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["summary"]["year_applied"], "2025");
    assert_eq!(json["audit_trace"]["warnings"][0]["code"], "YEAR_FALLBACK");
}

#[tokio::test]
async fn test_summary_negative_deductions_returns_400() {
    let (status, json) = post(
        create_router_for_test(),
        "/summary",
        json!({ "gross_income": 50000, "deductions": -5 }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "INVALID_INPUT");
    assert!(json["message"].as_str().unwrap().contains("deductions"));
}

// =============================================================================
// Comparisons
// =============================================================================

#[tokio::test]
async fn test_compare_scenarios() {
    let (status, json) = post(
        create_router_for_test(),
        "/compare/scenarios",
        json!({
            "scenarios": [
                { "gross_income": 50000 },
                { "gross_income": 50000, "deductions": 5000 },
                { "gross_income": 50000, "credits": 20000 }
            ]
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);

    let summaries = json["summaries"].as_array().unwrap();
    assert_eq!(summaries.len(), 3);
    assert_decimal_eq(&summaries[0]["total_tax"], "9017.75");
    // 5,000 less taxable income at 30%
    assert_decimal_eq(&summaries[1]["total_tax"], "7517.75");
    assert_decimal_eq(&summaries[2]["total_tax"], "0");
}

#[tokio::test]
async fn test_compare_scenarios_rejects_negative_scenario() {
    let (status, json) = post(
        create_router_for_test(),
        "/compare/scenarios",
        json!({ "scenarios": [{ "gross_income": 50000 }, { "gross_income": -1 }] }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(
        json["message"]
            .as_str()
            .unwrap()
            .contains("scenarios[1].gross_income")
    );
}

#[tokio::test]
async fn test_compare_years_at_75000() {
    let (status, json) = post(
        create_router_for_test(),
        "/compare/years",
        json!({ "income": 75000, "years": ["2025", "2022", "2024", "2023"] }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);

    let rows = json["rows"].as_array().unwrap();
    let years: Vec<&str> = rows.iter().map(|r| r["year"].as_str().unwrap()).collect();
    assert_eq!(years, vec!["2022", "2023", "2024", "2025"]);

    assert!(rows[0]["difference"].is_null());
    assert_decimal_eq(&rows[1]["difference"], "268.00");
    assert_decimal_eq(&rows[2]["difference"], "148.50");
    assert_decimal_eq(&rows[3]["difference"], "856.16");

    for pair in rows.windows(2) {
        let expected = decimal_at(&pair[1]["tax"]) - decimal_at(&pair[0]["tax"]);
        assert_eq!(decimal_at(&pair[1]["difference"]), expected);
    }
}

#[tokio::test]
async fn test_compare_years_rows_carry_breakdowns() {
    let (status, json) = post(
        create_router_for_test(),
        "/compare/years",
        json!({ "income": "75000.55", "years": ["2022", "2025"] }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);

    let registry = ConfigLoader::load("./config/brackets").unwrap().into_registry();
    let rows = json["rows"].as_array().unwrap();
    for row in rows {
        let year = row["year"].as_str().unwrap();
        let sum: Decimal = row["breakdown"]
            .as_array()
            .unwrap()
            .iter()
            .map(|entry| decimal_at(&entry["tax_amount"]))
            .sum();
        assert_eq!(sum, registry.compute_tax(decimal("75000.55"), year), "year {}", year);
        assert_eq!(round_half_up(sum), decimal_at(&row["tax"]), "year {}", year);
    }

    assert_eq!(rows[0]["breakdown"][3]["range_label"], "$68,500 - $148,000");
    assert_eq!(rows[1]["breakdown"][3]["range_label"], "$73,369 - $157,806");
    assert!(rows[0]["difference_label"].is_null());
    assert_eq!(rows[1]["difference_label"], "+$1,272.68 (+8.25%)");
}

#[tokio::test]
async fn test_compare_years_defaults_to_all_years() {
    let (status, json) = post(
        create_router_for_test(),
        "/compare/years",
        json!({ "income": 75000 }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["rows"].as_array().unwrap().len(), 4);
}

// =============================================================================
// Error cases
// =============================================================================

#[tokio::test]
async fn test_negative_taxable_income_returns_400() {
    let (status, json) = post(
        create_router_for_test(),
        "/tax",
        json!({ "taxable_income": -100 }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "INVALID_INPUT");
}

#[tokio::test]
async fn test_non_numeric_income_returns_400() {
    let (status, json) = post(
        create_router_for_test(),
        "/breakdown",
        json!({ "taxable_income": "lots" }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "MALFORMED_JSON");
}

#[tokio::test]
async fn test_missing_income_returns_validation_error() {
    let (status, json) = post(
        create_router_for_test(),
        "/compare/years",
        json!({ "years": ["2025"] }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
}
