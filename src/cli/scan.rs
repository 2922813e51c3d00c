use std::path::PathBuf;

use console::style;
use tracing::{info, warn};

use crate::cli::commands::Cli;
use crate::cli::progress::ScanProgress;
use crate::errors::CorsinatorError;
use crate::input;
use crate::models::{RunSummary, ScanOutcome, ScanRecord};
use crate::report;
use crate::scanner::{normalize_url, CorsScanner};

/// Runs the full pipeline: load CSV, probe each URL in sequence,
/// render the chart and report, then print the run summary.
pub async fn handle_scan(args: Cli) -> Result<(), CorsinatorError> {
    let input_path = PathBuf::from(&args.input);
    let rows = input::load_rows(&input_path)?;
    info!(
        rows = rows.len(),
        timeout_secs = args.timeout,
        "Starting CORS scan"
    );

    let scanner = CorsScanner::new(args.timeout)?;
    let total = rows.len();
    let progress = ScanProgress::new(total as u64, args.quiet);

    let mut records = Vec::with_capacity(total);
    for (i, fields) in rows.into_iter().enumerate() {
        let Some(raw) = fields.first() else {
            warn!(row = i + 1, "Skipping row with no fields");
            records.push(ScanRecord {
                fields,
                url: String::new(),
                outcome: ScanOutcome::Failed {
                    reason: "empty row".to_string(),
                },
            });
            progress.inc();
            continue;
        };

        let url = normalize_url(raw);
        progress.checking(&url, i + 1, total);

        // Per-URL failure isolation: a dead host marks its own row and
        // the scan moves on.
        let outcome = match scanner.check(&url).await {
            Ok(outcome) => outcome,
            Err(e) => {
                warn!(url = %url, error = %e, "Request failed");
                ScanOutcome::Failed {
                    reason: e.to_string(),
                }
            }
        };

        records.push(ScanRecord { fields, url, outcome });
        progress.inc();
    }
    progress.finish();

    let summary = RunSummary::from_records(&records);

    // The chart is written first so the report's <img> reference is
    // valid the moment the report lands on disk.
    report::chart::render(
        summary.vulnerable,
        summary.non_vulnerable,
        &PathBuf::from(&args.chart),
    )?;

    let html = report::html::render(&records, &summary, &args.chart);
    tokio::fs::write(&args.output, html).await?;
    info!("HTML report saved to {}", args.output);

    if let Some(json_path) = &args.json {
        report::json::export(&records, &PathBuf::from(json_path))?;
    }

    if !args.quiet {
        println!(
            "{} {} vulnerable, {} non-vulnerable, {} failed. Report saved to {}",
            style("Scan complete:").green().bold(),
            summary.vulnerable,
            summary.non_vulnerable,
            summary.failed,
            args.output,
        );
    }

    Ok(())
}
