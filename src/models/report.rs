//! Tax report models.
//!
//! This module contains the [`TaxReport`] type and the audit structures that
//! record how a summary was reached. A report is the complete, serializable
//! output that a rendering layer (tables, charts, PDF) consumes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::TaxSummary;

/// One recorded decision on the way from input to summary.
///
/// # Example
///
/// ```
/// use bracket_tax_engine::models::AuditStep;
///
/// let step = AuditStep {
///     step_number: 1,
///     rule_id: "taxable_income".to_string(),
///     rule_name: "Taxable Income".to_string(),
///     input: serde_json::json!({ "gross_income": "50000" }),
///     output: serde_json::json!({ "taxable_income": "50000" }),
///     reasoning: "$50,000.00 - $0.00 = $50,000.00".to_string(),
/// };
/// assert_eq!(step.step_number, 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// Position in the trace, starting at 1.
    pub step_number: u32,
    /// Stable identifier such as `marginal_bracket`.
    pub rule_id: String,
    /// Display name for the step.
    pub rule_name: String,
    /// Values the step consumed.
    pub input: serde_json::Value,
    /// Values the step produced.
    pub output: serde_json::Value,
    /// The arithmetic, written out in display form.
    pub reasoning: String,
}

/// Something a reader of the report should notice.
///
/// Warnings flag lenient behavior such as a year fallback or credits that
/// exceeded the computed tax.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// Warning code, e.g. `YEAR_FALLBACK`.
    pub code: String,
    /// Explanation of the warning.
    pub message: String,
    /// `low` or `medium`.
    pub severity: String,
}

/// Every step and warning recorded for one report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// Steps in the order they were taken.
    pub steps: Vec<AuditStep>,
    /// Warnings raised along the way.
    pub warnings: Vec<AuditWarning>,
    /// Time spent summarizing, in microseconds.
    pub duration_us: u64,
}

/// A summary together with its identity and audit trace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxReport {
    /// Random v4 id for this report.
    pub calculation_id: Uuid,
    /// When the report was generated.
    pub timestamp: DateTime<Utc>,
    /// Crate version that produced the report.
    pub engine_version: String,
    /// The computed summary.
    pub summary: TaxSummary,
    /// How the summary was reached.
    pub audit_trace: AuditTrace,
}
