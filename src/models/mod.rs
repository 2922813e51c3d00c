use serde::{Deserialize, Serialize};

/// Response headers whose presence indicates an exposed CORS
/// configuration. Fixed at process start; confidence is the fraction
/// of these observed in a response.
pub const VULNERABLE_HEADERS: [&str; 4] = [
    "Access-Control-Allow-Origin",
    "Access-Control-Allow-Methods",
    "Access-Control-Allow-Headers",
    "Access-Control-Allow-Credentials",
];

/// Outcome of probing a single URL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "status")]
pub enum ScanOutcome {
    /// The HEAD request completed and the response headers were inspected.
    Checked { is_vulnerable: bool, confidence: f64 },
    /// The request could not be completed; the scan continued with the
    /// remaining URLs.
    Failed { reason: String },
}

/// One input row annotated with its scan outcome.
///
/// Constructed exactly once per row. The original CSV fields are kept
/// as-is rather than mutated in place, so the derived fields can never
/// be appended twice.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanRecord {
    /// Original CSV fields, unmodified.
    pub fields: Vec<String>,
    /// The URL actually requested, after scheme prefixing.
    pub url: String,
    pub outcome: ScanOutcome,
}

impl ScanRecord {
    /// Returns the original fields plus the two derived fields:
    /// (flag, confidence) for checked rows, ("error", reason) for
    /// failed ones.
    pub fn to_fields(&self) -> Vec<String> {
        let mut fields = self.fields.clone();
        match &self.outcome {
            ScanOutcome::Checked {
                is_vulnerable,
                confidence,
            } => {
                fields.push(is_vulnerable.to_string());
                fields.push(format!("{confidence:.2}"));
            }
            ScanOutcome::Failed { reason } => {
                fields.push("error".to_string());
                fields.push(reason.clone());
            }
        }
        fields
    }
}

/// Vulnerable / non-vulnerable / failed tallies for a completed run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    pub vulnerable: usize,
    pub non_vulnerable: usize,
    pub failed: usize,
}

impl RunSummary {
    /// Tallies records by their outcome flag.
    pub fn from_records(records: &[ScanRecord]) -> Self {
        let mut summary = Self::default();
        for record in records {
            match &record.outcome {
                ScanOutcome::Checked {
                    is_vulnerable: true,
                    ..
                } => summary.vulnerable += 1,
                ScanOutcome::Checked { .. } => summary.non_vulnerable += 1,
                ScanOutcome::Failed { .. } => summary.failed += 1,
            }
        }
        summary
    }

    /// Total number of records tallied.
    pub fn total(&self) -> usize {
        self.vulnerable + self.non_vulnerable + self.failed
    }
}
