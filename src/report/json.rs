//! JSON export of scan records.

use std::path::Path;

use tracing::info;

use crate::errors::CorsinatorError;
use crate::models::ScanRecord;

/// Writes the scan records as pretty-printed JSON.
pub fn export(records: &[ScanRecord], path: &Path) -> Result<(), CorsinatorError> {
    let json = serde_json::to_string_pretty(records)?;
    std::fs::write(path, json)?;
    info!("JSON results saved to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ScanOutcome;
    use tempfile::TempDir;

    #[test]
    fn test_export_round_trips() {
        let records = vec![ScanRecord {
            fields: vec!["example.com".to_string()],
            url: "https://example.com".to_string(),
            outcome: ScanOutcome::Checked {
                is_vulnerable: true,
                confidence: 0.25,
            },
        }];

        let dir = TempDir::new().unwrap();
        let path = dir.path().join("results.json");
        export(&records, &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let loaded: Vec<ScanRecord> = serde_json::from_str(&content).unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].url, "https://example.com");
        assert_eq!(
            loaded[0].outcome,
            ScanOutcome::Checked {
                is_vulnerable: true,
                confidence: 0.25
            }
        );
    }
}
