use zodiac::domain::services::{AuditReport, Severity};

use super::tr;
use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::widgets::table::Table;

pub fn render_check(report: &AuditReport, ui: &UiContext) -> String {
    let locale = ui.locale;
    let mut out = String::new();

    let mut table = Table::new(vec![
        tr(locale, "점수", "score").to_string(),
        tr(locale, "등급", "grade").to_string(),
        tr(locale, "칸 수", "cells").to_string(),
    ]);
    for tier in &report.tier_coverage {
        table.add_row(vec![
            tier.score.to_string(),
            tier.grade.label(locale).to_string(),
            tier.cells.to_string(),
        ]);
    }
    out.push_str(&table.render());
    out.push_str(&format!(
        "{}: {}\n\n",
        tr(locale, "작성된 해설", "Curated narratives"),
        report.authored_pairs
    ));

    for finding in &report.findings {
        let icon = match finding.severity {
            Severity::Error => Icon::Error,
            Severity::Info => Icon::Info,
        };
        out.push_str(&format!(
            "{} [{}] {}\n",
            icon.colored(ui.color, ui.unicode),
            finding.code,
            finding.message
        ));
    }
    if !report.findings.is_empty() {
        out.push('\n');
    }

    if report.has_errors() {
        out.push_str(&format!(
            "{} {}\n",
            Icon::Error.colored(ui.color, ui.unicode),
            ColoredText::error(format!(
                "{} ({})",
                tr(locale, "검사 실패", "Check FAILED"),
                report.error_count()
            ))
            .bold()
            .render(ui.color)
        ));
    } else {
        out.push_str(&format!(
            "{} {}\n",
            Icon::Success.colored(ui.color, ui.unicode),
            ColoredText::success(tr(locale, "검사 통과", "Check PASSED"))
                .bold()
                .render(ui.color)
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::views::test_support::plain_ui;
    use zodiac::domain::services::{audit_tables, Finding};
    use zodiac::Locale;

    #[test]
    fn clean_report_passes() {
        let rendered = render_check(&audit_tables(), &plain_ui(Locale::En));
        assert!(rendered.contains("Check PASSED"));
        assert!(rendered.contains("Curated narratives"));
    }

    #[test]
    fn error_findings_fail() {
        let mut report = audit_tables();
        report.findings.push(Finding {
            severity: Severity::Error,
            code: "asymmetric_cell",
            message: "Rat/Ox scores 90 but Ox/Rat scores 70".to_string(),
        });
        let rendered = render_check(&report, &plain_ui(Locale::En));
        assert!(rendered.contains("✗ [asymmetric_cell]"));
        assert!(rendered.contains("Check FAILED (1)"));
    }
}
