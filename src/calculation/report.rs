//! Tax report generation.
//!
//! This module wraps [`summarize`] with validation, identity, and an audit
//! trace that records each decision taken to reach the summary.

use std::time::Instant;

use chrono::Utc;
use rust_decimal::Decimal;
use tracing::debug;
use uuid::Uuid;

use crate::config::BracketRegistry;
use crate::error::EngineResult;
use crate::format::{format_currency, format_percentage};
use crate::models::{AuditStep, AuditTrace, AuditWarning, TaxInput, TaxReport, TaxSummary};

use super::summary::summarize;

/// The version string stamped on every report.
pub const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Validates `input`, summarizes it, and records an audit trace.
///
/// # Errors
///
/// Returns [`EngineError::InvalidInput`](crate::error::EngineError::InvalidInput)
/// if any amount in the input is negative.
///
/// # Examples
///
/// ```
/// use bracket_tax_engine::calculation::generate_report;
/// use bracket_tax_engine::config::BracketRegistry;
/// use bracket_tax_engine::models::TaxInput;
/// use rust_decimal_macros::dec;
///
/// let registry = BracketRegistry::builtin().unwrap();
/// let report = generate_report(&TaxInput::new(dec!(50000), "2025"), &registry).unwrap();
///
/// assert_eq!(report.summary.total_tax, dec!(9017.75));
/// assert!(report.audit_trace.warnings.is_empty());
/// ```
pub fn generate_report(input: &TaxInput, registry: &BracketRegistry) -> EngineResult<TaxReport> {
    input.validate()?;

    let start_time = Instant::now();
    let summary = summarize(input, registry);
    let (steps, warnings) = audit(&summary);
    let duration = start_time.elapsed();

    let calculation_id = Uuid::new_v4();
    debug!(
        calculation_id = %calculation_id,
        year_applied = %summary.year_applied,
        total_tax = %summary.total_tax,
        warnings = warnings.len(),
        "Tax report generated"
    );

    Ok(TaxReport {
        calculation_id,
        timestamp: Utc::now(),
        engine_version: ENGINE_VERSION.to_string(),
        summary,
        audit_trace: AuditTrace {
            steps,
            warnings,
            duration_us: duration.as_micros() as u64,
        },
    })
}

fn audit(summary: &TaxSummary) -> (Vec<AuditStep>, Vec<AuditWarning>) {
    let mut steps = Vec::with_capacity(summary.breakdown.len() + 4);
    let mut warnings = Vec::new();
    let mut step_number: u32 = 1;

    let fell_back = summary.year_requested != summary.year_applied;
    steps.push(AuditStep {
        step_number,
        rule_id: "year_resolution".to_string(),
        rule_name: "Bracket Table Resolution".to_string(),
        input: serde_json::json!({ "year": summary.year_requested }),
        output: serde_json::json!({
            "year_applied": summary.year_applied,
            "fallback": fell_back
        }),
        reasoning: if fell_back {
            format!(
                "Year '{}' is not configured; using default year '{}'",
                summary.year_requested, summary.year_applied
            )
        } else {
            format!("Using brackets for year '{}'", summary.year_applied)
        },
    });
    step_number += 1;
    if fell_back {
        warnings.push(AuditWarning {
            code: "YEAR_FALLBACK".to_string(),
            message: format!(
                "Year '{}' is not configured; brackets for '{}' were applied",
                summary.year_requested, summary.year_applied
            ),
            severity: "low".to_string(),
        });
    }

    steps.push(AuditStep {
        step_number,
        rule_id: "taxable_income".to_string(),
        rule_name: "Taxable Income".to_string(),
        input: serde_json::json!({
            "gross_income": summary.gross_income.to_string(),
            "deductions": summary.deductions.to_string()
        }),
        output: serde_json::json!({
            "taxable_income": summary.taxable_income.to_string()
        }),
        reasoning: format!(
            "max(0, {} - {}) = {}",
            format_currency(summary.gross_income),
            format_currency(summary.deductions),
            format_currency(summary.taxable_income)
        ),
    });
    step_number += 1;

    for entry in &summary.breakdown {
        steps.push(AuditStep {
            step_number,
            rule_id: "marginal_bracket".to_string(),
            rule_name: "Marginal Bracket".to_string(),
            input: serde_json::json!({
                "range": entry.range_label,
                "rate": entry.rate.normalize().to_string()
            }),
            output: serde_json::json!({
                "taxable_amount": entry.taxable_amount.normalize().to_string(),
                "tax_amount": entry.tax_amount.normalize().to_string()
            }),
            reasoning: format!(
                "{} x {} = {}",
                format_currency(entry.taxable_amount),
                entry.rate_label,
                format_currency(entry.tax_amount)
            ),
        });
        step_number += 1;
    }

    steps.push(AuditStep {
        step_number,
        rule_id: "credit_application".to_string(),
        rule_name: "Credit Application".to_string(),
        input: serde_json::json!({
            "gross_tax": summary.gross_tax.to_string(),
            "credits": summary.credits.to_string()
        }),
        output: serde_json::json!({
            "total_tax": summary.total_tax.to_string()
        }),
        reasoning: format!(
            "max(0, {} - {}) = {}",
            format_currency(summary.gross_tax),
            format_currency(summary.credits),
            format_currency(summary.total_tax)
        ),
    });
    step_number += 1;
    if summary.credits > summary.gross_tax {
        warnings.push(AuditWarning {
            code: "CREDITS_EXCEED_TAX".to_string(),
            message: format!(
                "Credits of {} exceed the computed tax of {}; the unused {} is not refunded",
                format_currency(summary.credits),
                format_currency(summary.gross_tax),
                format_currency(summary.credits - summary.gross_tax)
            ),
            severity: "medium".to_string(),
        });
    }

    steps.push(AuditStep {
        step_number,
        rule_id: "effective_rate".to_string(),
        rule_name: "Effective Rate".to_string(),
        input: serde_json::json!({
            "total_tax": summary.total_tax.to_string(),
            "gross_income": summary.gross_income.to_string()
        }),
        output: serde_json::json!({
            "effective_rate": summary.effective_rate.to_string(),
            "net_income": summary.net_income.to_string()
        }),
        reasoning: if summary.gross_income > Decimal::ZERO {
            format!(
                "{} / {} = {}",
                format_currency(summary.total_tax),
                format_currency(summary.gross_income),
                format_percentage(summary.effective_rate)
            )
        } else {
            "No gross income; effective rate is 0%".to_string()
        },
    });

    (steps, warnings)
}
