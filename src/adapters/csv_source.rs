use crate::domain::model::Value;
use crate::domain::ports::ValueSource;
use crate::utils::error::{CompareError, Result};
use std::collections::HashSet;

/// Reads a CSV document with a header row as an array of plain mappings.
/// Every cell stays a string.
#[derive(Debug, Clone, Copy)]
pub struct CsvSource {
    pub delimiter: u8,
}

impl Default for CsvSource {
    fn default() -> Self {
        Self { delimiter: b',' }
    }
}

impl CsvSource {
    pub fn tsv() -> Self {
        Self { delimiter: b'\t' }
    }
}

impl ValueSource for CsvSource {
    fn format_name(&self) -> &'static str {
        if self.delimiter == b'\t' {
            "tsv"
        } else {
            "csv"
        }
    }

    fn parse_str(&self, content: &str) -> Result<Value> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .delimiter(self.delimiter)
            .from_reader(content.as_bytes());
        let headers = reader.headers()?.clone();

        // Column names key the row mappings and must be unique.
        let mut seen = HashSet::new();
        if let Some(duplicate) = headers.iter().find(|header| !seen.insert(*header)) {
            return Err(CompareError::InvalidConfigValueError {
                field: format!("{} header", self.format_name()),
                value: duplicate.to_string(),
                reason: "Column names must be unique".to_string(),
            });
        }

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            rows.push(Value::object(
                headers
                    .iter()
                    .zip(record.iter())
                    .map(|(header, cell)| (header, Value::from(cell))),
            ));
        }
        tracing::debug!("Parsed {} {} rows", rows.len(), self.format_name());
        Ok(Value::Array(rows))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::equality::loose_equal;
    use serde_json::json;

    #[test]
    fn test_rows_become_objects() {
        let value = CsvSource::default()
            .parse_str("id,name\n1,alpha\n2,beta\n")
            .unwrap();
        let expected = Value::from(json!([
            {"id": 1, "name": "alpha"},
            {"id": 2, "name": "beta"}
        ]));
        assert!(loose_equal(&value, &expected));
    }

    #[test]
    fn test_tsv_delimiter() {
        let value = CsvSource::tsv().parse_str("a\tb\nx\ty\n").unwrap();
        assert!(loose_equal(&value, &Value::from(json!([{"a": "x", "b": "y"}]))));
    }

    #[test]
    fn test_duplicate_headers_are_rejected() {
        match CsvSource::default().parse_str("a,a\n1,2\n") {
            Err(CompareError::InvalidConfigValueError { field, value, .. }) => {
                assert_eq!(field, "csv header");
                assert_eq!(value, "a");
            }
            other => panic!("unexpected result: {:?}", other),
        }
        assert!(CsvSource::tsv().parse_str("x\ty\tx\n1\t2\t3\n").is_err());
    }

    #[test]
    fn test_ragged_rows_are_rejected() {
        assert!(CsvSource::default().parse_str("a,b\n1,2,3\n").is_err());
    }
}
