//! Static table audit
//!
//! Inspects the matrix and the curated narratives for problems that the
//! engine itself deliberately does not correct.

use serde::Serialize;

use crate::domain::services::matrix::{self, SCORE_TIERS};
use crate::domain::services::narrative::AUTHORED_NARRATIVES;
use crate::domain::value_objects::{Grade, ZodiacAnimal};

/// Severity of an audit finding
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Error,
}

/// One finding from the audit
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    pub severity: Severity,
    pub code: &'static str,
    pub message: String,
}

impl Finding {
    fn error(code: &'static str, message: String) -> Self {
        Self {
            severity: Severity::Error,
            code,
            message,
        }
    }

    fn info(code: &'static str, message: String) -> Self {
        Self {
            severity: Severity::Info,
            code,
            message,
        }
    }
}

/// Number of matrix cells per tier score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TierCount {
    pub score: u8,
    pub grade: Grade,
    pub cells: usize,
}

/// Result of auditing the static tables
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuditReport {
    pub findings: Vec<Finding>,
    pub tier_coverage: Vec<TierCount>,
    pub authored_pairs: usize,
}

impl AuditReport {
    pub fn has_errors(&self) -> bool {
        self.findings.iter().any(|f| f.severity == Severity::Error)
    }

    pub fn error_count(&self) -> usize {
        self.findings
            .iter()
            .filter(|f| f.severity == Severity::Error)
            .count()
    }
}

/// Audit the compatibility matrix and curated narratives.
pub fn audit_tables() -> AuditReport {
    let mut findings = Vec::new();

    for cell in matrix::asymmetric_cells() {
        findings.push(Finding::error(
            "asymmetric_cell",
            format!(
                "{}/{} scores {} but {}/{} scores {}",
                cell.child, cell.parent, cell.score, cell.parent, cell.child, cell.mirrored
            ),
        ));
    }

    for (child, parent, score) in matrix::off_tier_cells() {
        findings.push(Finding::error(
            "off_tier_score",
            format!("{}/{} scores {}, not a tier value", child, parent, score),
        ));
    }

    for (i, a) in AUTHORED_NARRATIVES.iter().enumerate() {
        for b in &AUTHORED_NARRATIVES[i + 1..] {
            if a.first == b.second && a.second == b.first {
                findings.push(Finding::error(
                    "reversed_duplicate",
                    format!(
                        "narrative {}/{} is also authored as {}/{}",
                        a.first, a.second, b.first, b.second
                    ),
                ));
            }
        }
    }

    let tier_coverage = tier_coverage();
    for tier in &tier_coverage {
        let authored = AUTHORED_NARRATIVES
            .iter()
            .filter(|n| matrix::score(n.first, n.second) == tier.score)
            .count();
        if authored == 0 {
            findings.push(Finding::info(
                "uncurated_tier",
                format!("no curated narrative for score {} ({})", tier.score, tier.grade),
            ));
        }
    }

    let report = AuditReport {
        findings,
        tier_coverage,
        authored_pairs: AUTHORED_NARRATIVES.len(),
    };
    tracing::debug!(
        findings = report.findings.len(),
        errors = report.error_count(),
        "audited static tables"
    );
    report
}

fn tier_coverage() -> Vec<TierCount> {
    SCORE_TIERS
        .iter()
        .map(|&score| {
            let cells = ZodiacAnimal::ALL
                .iter()
                .map(|&a| matrix::row(a).iter().filter(|&&s| s == score).count())
                .sum();
            TierCount {
                score,
                grade: Grade::from_score(score),
                cells,
            }
        })
        .collect()
}
