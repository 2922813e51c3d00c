//! HTML report generation.

use chrono::Utc;

use crate::models::{RunSummary, ScanOutcome, ScanRecord};

const STYLE: &str = "table, th, td { border: 1px solid black; border-collapse: collapse; padding: 4px 10px; } \
                     .failed td { color: #b91c1c; } \
                     .footer { color: #6b7280; font-size: 0.85em; }";

/// Renders the report document: one table row per record, the
/// vulnerable / non-vulnerable tallies, and the embedded bar chart.
/// All interpolated values are escaped, so a hostile CSV cell cannot
/// inject markup into the report.
pub fn render(records: &[ScanRecord], summary: &RunSummary, chart_filename: &str) -> String {
    let mut report = String::new();
    report.push_str("<html><head><style>");
    report.push_str(STYLE);
    report.push_str("</style></head><body>\n");
    report.push_str("<h2>CORS Vulnerability Report</h2>\n");
    report.push_str(
        "<table>\n<tr><th>URL</th><th>Is Vulnerable</th><th>Confidence Level</th></tr>\n",
    );
    for record in records {
        report.push_str(&render_row(record));
    }
    report.push_str("</table>\n");

    report.push_str(&format!(
        "<p>Number of vulnerable URLs: {}</p>\n",
        summary.vulnerable
    ));
    report.push_str(&format!(
        "<p>Number of non-vulnerable URLs: {}</p>\n",
        summary.non_vulnerable
    ));
    if summary.failed > 0 {
        report.push_str(&format!(
            "<p>Number of URLs that could not be checked: {}</p>\n",
            summary.failed
        ));
    }

    report.push_str(&format!(
        "<img src='{}' alt='Vulnerability counts'/>\n",
        html_escape(chart_filename)
    ));
    report.push_str(&format!(
        "<p class='footer'>Generated by corsinator v{} on {}</p>\n",
        env!("CARGO_PKG_VERSION"),
        Utc::now().format("%Y-%m-%d %H:%M:%S UTC"),
    ));
    report.push_str("</body></html>\n");
    report
}

fn render_row(record: &ScanRecord) -> String {
    match &record.outcome {
        ScanOutcome::Checked {
            is_vulnerable,
            confidence,
        } => format!(
            "<tr><td>{}</td><td>{}</td><td>{:.2}</td></tr>\n",
            html_escape(&record.url),
            is_vulnerable,
            confidence,
        ),
        ScanOutcome::Failed { reason } => format!(
            "<tr class='failed'><td>{}</td><td colspan='2'>{}</td></tr>\n",
            html_escape(&record.url),
            html_escape(reason),
        ),
    }
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
