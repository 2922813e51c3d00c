use std::path::Path;

use csv::ReaderBuilder;
use tracing::debug;

use crate::errors::CorsinatorError;

/// Reads the input CSV into rows of string fields.
///
/// No header row is assumed or stripped, and rows may have any column
/// count. The first field of each row is treated as the target URL
/// downstream; rows are passed through without schema validation.
pub fn load_rows(path: &Path) -> Result<Vec<Vec<String>>, CorsinatorError> {
    if !path.exists() {
        return Err(CorsinatorError::Input(format!(
            "Input file not found: {}",
            path.display()
        )));
    }

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    debug!(rows = rows.len(), path = %path.display(), "Loaded input CSV");
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_rows_no_header_stripping() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "example.com,prod").unwrap();
        writeln!(file, "https://api.example.com,staging").unwrap();
        writeln!(file, "intranet.local,internal").unwrap();

        let rows = load_rows(file.path()).unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0], vec!["example.com", "prod"]);
        assert_eq!(rows[1][0], "https://api.example.com");
    }

    #[test]
    fn test_load_rows_flexible_column_counts() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "one.test").unwrap();
        writeln!(file, "two.test,extra,fields,here").unwrap();

        let rows = load_rows(file.path()).unwrap();
        assert_eq!(rows[0].len(), 1);
        assert_eq!(rows[1].len(), 4);
    }

    #[test]
    fn test_load_rows_missing_file() {
        let err = load_rows(Path::new("/nonexistent/urls.csv")).unwrap_err();
        assert!(matches!(err, CorsinatorError::Input(_)));
    }
}
