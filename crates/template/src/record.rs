//! Field access over a caller-supplied JSON record.
//!
//! Records arrive straight from the REST API and are treated as opaque:
//! templates pull the fields they interpolate and substitute fallback text
//! for anything absent, so a sparse record still renders a complete page.

use parchment_types::{DocKind, RecordId};
use serde_json::Value;

use crate::TemplateError;

/// The generic recognition sentence used when a certificate record carries
/// no description of its own.
pub const FALLBACK_RECOGNITION: &str =
    "This certificate is awarded in recognition of outstanding achievement and dedication.";

/// Fallback for an absent subject name.
pub const FALLBACK_NAME: &str = "Student";

/// A JSON record with dotted-path field access and fallback substitution.
#[derive(Debug, Clone)]
pub struct ExportableRecord {
    value: Value,
}

impl ExportableRecord {
    /// Wraps a JSON value. Only objects are usable as records.
    pub fn new(value: Value) -> Result<Self, TemplateError> {
        if !value.is_object() {
            return Err(TemplateError::NotAnObject(json_type_name(&value)));
        }
        Ok(Self { value })
    }

    pub fn as_value(&self) -> &Value {
        &self.value
    }

    /// Looks up a dotted path like `student.firstName`.
    pub fn get(&self, path: &str) -> Option<&Value> {
        let mut current = &self.value;
        for segment in path.split('.') {
            current = current.get(segment)?;
        }
        Some(current)
    }

    /// A non-empty string at `path`, if present.
    pub fn text(&self, path: &str) -> Option<&str> {
        self.get(path)
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    /// The first non-empty string among `paths`, or `fallback`.
    pub fn text_or<'a>(&'a self, paths: &[&str], fallback: &'a str) -> &'a str {
        paths.iter().find_map(|p| self.text(p)).unwrap_or(fallback)
    }

    pub fn number(&self, path: &str) -> Option<f64> {
        self.get(path).and_then(Value::as_f64)
    }

    /// The subject's first and last name, searched under the nesting shapes
    /// the API uses (`student.firstName`, `firstName`).
    pub fn subject_names(&self) -> (&str, &str) {
        let first = self.text_or(&["student.firstName", "firstName"], FALLBACK_NAME);
        let last = self.text_or(&["student.lastName", "lastName"], "");
        (first, last)
    }

    /// Derives the identity under which this record's export is tracked.
    ///
    /// Prefers an explicit identifier field; falls back to the subject name
    /// so a record without any id still gets a stable, deterministic key.
    pub fn record_id(&self, kind: DocKind) -> RecordId {
        let explicit = self
            .text("id")
            .or_else(|| self.text("_id"))
            .or_else(|| self.text("certificateNumber"))
            .or_else(|| self.text("student.studentId"))
            .or_else(|| self.text("studentId"));

        match explicit {
            Some(id) => RecordId::new(format!("{}:{}", kind, id)),
            None => {
                let (first, last) = self.subject_names();
                RecordId::new(format!("{}:{}_{}", kind, first, last))
            }
        }
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn rejects_non_objects() {
        assert!(ExportableRecord::new(json!([1, 2, 3])).is_err());
        assert!(ExportableRecord::new(json!("text")).is_err());
        assert!(ExportableRecord::new(json!({})).is_ok());
    }

    #[test]
    fn dotted_path_lookup() {
        let record =
            ExportableRecord::new(json!({"student": {"firstName": "Ana", "lastName": "Lee"}}))
                .unwrap();
        assert_eq!(record.text("student.firstName"), Some("Ana"));
        assert_eq!(record.text("student.middleName"), None);
        assert_eq!(record.subject_names(), ("Ana", "Lee"));
    }

    #[test]
    fn empty_strings_fall_through_to_fallback() {
        let record = ExportableRecord::new(json!({"firstName": "  "})).unwrap();
        assert_eq!(record.text_or(&["firstName"], FALLBACK_NAME), FALLBACK_NAME);
    }

    #[test]
    fn record_id_prefers_explicit_identifier() {
        let record = ExportableRecord::new(json!({
            "certificateNumber": "CERT-001",
            "student": {"firstName": "Ana", "lastName": "Lee"}
        }))
        .unwrap();
        assert_eq!(
            record.record_id(DocKind::Certificate).as_str(),
            "certificate:CERT-001"
        );
    }

    #[test]
    fn record_id_is_deterministic_without_identifier() {
        let record = ExportableRecord::new(json!({"firstName": "Ana"})).unwrap();
        let a = record.record_id(DocKind::Transcript);
        let b = record.record_id(DocKind::Transcript);
        assert_eq!(a, b);
        assert_eq!(a.as_str(), "transcript:Ana_");
    }
}
