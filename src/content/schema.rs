//! Declarative schema for collection entry metadata
//!
//! A schema is a table of [`FieldRule`]s. Validation checks every rule
//! against a metadata record (decoded frontmatter or an exported entry's
//! `data` object) and reports all violations at once.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use thiserror::Error;

/// Type of a metadata field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Any string
    Text,
    /// A string with at least one non-whitespace character
    NonEmptyText,
    /// A date or date-time string
    Date,
    /// A list of strings; a single string counts as a one-element list
    TextList,
}

/// One field of a schema
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRule {
    pub name: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

impl FieldRule {
    pub const fn required(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            required: true,
        }
    }

    pub const fn optional(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            required: false,
        }
    }
}

/// A named set of field rules
#[derive(Debug, Clone, Copy)]
pub struct Schema {
    pub name: &'static str,
    pub fields: &'static [FieldRule],
}

/// Schema shared by the `linux` and `web` collections
pub const POST_SCHEMA: Schema = Schema {
    name: "post",
    fields: &[
        FieldRule::required("title", FieldKind::NonEmptyText),
        FieldRule::optional("description", FieldKind::Text),
        FieldRule::optional("date", FieldKind::Date),
        FieldRule::optional("category", FieldKind::Text),
        FieldRule::optional("tags", FieldKind::TextList),
    ],
};

/// A single failed rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub field: String,
    pub message: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "`{}` {}", self.field, self.message)
    }
}

/// Metadata record rejected by a schema
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{} schema: {}", .schema, join_violations(.violations))]
pub struct SchemaError {
    pub schema: &'static str,
    pub violations: Vec<Violation>,
}

fn join_violations(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// A validated field value
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Date(DateTime<Utc>),
    TextList(Vec<String>),
}

/// Fields that passed validation, keyed by rule name. Absent optional
/// fields have no entry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    values: HashMap<&'static str, FieldValue>,
}

impl Record {
    pub fn text(&self, name: &str) -> Option<&str> {
        match self.values.get(name) {
            Some(FieldValue::Text(s)) => Some(s),
            _ => None,
        }
    }

    pub fn date(&self, name: &str) -> Option<DateTime<Utc>> {
        match self.values.get(name) {
            Some(FieldValue::Date(d)) => Some(*d),
            _ => None,
        }
    }

    /// List field, empty when absent
    pub fn list(&self, name: &str) -> Vec<String> {
        match self.values.get(name) {
            Some(FieldValue::TextList(items)) => items.clone(),
            _ => Vec::new(),
        }
    }
}

impl Schema {
    /// Check a metadata record against every rule.
    ///
    /// Unknown fields are ignored and `null` counts as absent.
    pub fn validate(&self, data: &Value) -> Result<Record, SchemaError> {
        let Some(map) = data.as_object() else {
            return Err(SchemaError {
                schema: self.name,
                violations: vec![Violation {
                    field: "data".to_string(),
                    message: format!("expected a mapping, found {}", type_name(data)),
                }],
            });
        };

        let mut record = Record::default();
        let mut violations = Vec::new();

        for rule in self.fields {
            let value = map.get(rule.name).filter(|v| !v.is_null());
            match value {
                None if rule.required => violations.push(Violation {
                    field: rule.name.to_string(),
                    message: "is required".to_string(),
                }),
                None => {}
                Some(value) => match check(rule.kind, value) {
                    Ok(parsed) => {
                        record.values.insert(rule.name, parsed);
                    }
                    Err(message) => violations.push(Violation {
                        field: rule.name.to_string(),
                        message,
                    }),
                },
            }
        }

        if violations.is_empty() {
            Ok(record)
        } else {
            Err(SchemaError {
                schema: self.name,
                violations,
            })
        }
    }
}

fn check(kind: FieldKind, value: &Value) -> Result<FieldValue, String> {
    match (kind, value) {
        (FieldKind::Text, Value::String(s)) => Ok(FieldValue::Text(s.clone())),
        (FieldKind::NonEmptyText, Value::String(s)) if s.trim().is_empty() => {
            Err("must not be empty".to_string())
        }
        (FieldKind::NonEmptyText, Value::String(s)) => Ok(FieldValue::Text(s.clone())),
        (FieldKind::Date, Value::String(s)) => parse_date(s)
            .map(FieldValue::Date)
            .ok_or_else(|| format!("is not a valid date: {:?}", s)),
        (FieldKind::TextList, Value::String(s)) => Ok(FieldValue::TextList(vec![s.clone()])),
        (FieldKind::TextList, Value::Array(items)) => items
            .iter()
            .map(|item| match item {
                Value::String(s) => Ok(s.clone()),
                other => Err(format!("must contain only strings, found {}", type_name(other))),
            })
            .collect::<Result<Vec<_>, _>>()
            .map(FieldValue::TextList),
        (FieldKind::TextList, other) => Err(format!(
            "expected a list of strings, found {}",
            type_name(other)
        )),
        (FieldKind::Date, other) => Err(format!("expected a date, found {}", type_name(other))),
        (_, other) => Err(format!("expected a string, found {}", type_name(other))),
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "a mapping",
    }
}

/// Parse a frontmatter date in the formats authors commonly write.
///
/// Values without an offset are read as UTC.
pub fn parse_date(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }

    let datetime_formats = [
        "%Y-%m-%d %H:%M:%S",
        "%Y/%m/%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y/%m/%d %H:%M",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M:%S%.f",
    ];
    for fmt in datetime_formats {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.and_utc());
        }
    }

    for fmt in ["%Y-%m-%d", "%Y/%m/%d"] {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return d.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc());
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn test_valid_record() {
        let data = json!({
            "title": "Installing Arch",
            "description": "From the live ISO to a desktop",
            "date": "2024-01-15",
            "category": "terminal",
            "tags": ["arch", "linux"],
            "heroImage": "ignored.png"
        });

        let record = POST_SCHEMA.validate(&data).unwrap();
        assert_eq!(record.text("title"), Some("Installing Arch"));
        assert_eq!(record.text("category"), Some("terminal"));
        assert_eq!(
            record.date("date"),
            Some(Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap())
        );
        assert_eq!(record.list("tags"), vec!["arch", "linux"]);
        assert_eq!(record.text("heroImage"), None);
    }

    #[test]
    fn test_optional_fields_may_be_missing_or_null() {
        let data = json!({ "title": "Only a title", "description": null });
        let record = POST_SCHEMA.validate(&data).unwrap();
        assert_eq!(record.text("description"), None);
        assert_eq!(record.date("date"), None);
        assert!(record.list("tags").is_empty());
    }

    #[test]
    fn test_single_string_tag() {
        let data = json!({ "title": "T", "tags": "nginx" });
        let record = POST_SCHEMA.validate(&data).unwrap();
        assert_eq!(record.list("tags"), vec!["nginx"]);
    }

    #[test]
    fn test_collects_all_violations() {
        let data = json!({
            "title": "   ",
            "date": "yesterday",
            "category": 3,
            "tags": ["ok", 1]
        });

        let err = POST_SCHEMA.validate(&data).unwrap_err();
        let fields: Vec<_> = err.violations.iter().map(|v| v.field.as_str()).collect();
        assert_eq!(fields, vec!["title", "date", "category", "tags"]);
        assert!(err.to_string().starts_with("post schema: `title` must not be empty"));
    }

    #[test]
    fn test_missing_title() {
        let err = POST_SCHEMA.validate(&json!({ "date": "2024-01-01" })).unwrap_err();
        assert_eq!(
            err.violations,
            vec![Violation {
                field: "title".to_string(),
                message: "is required".to_string()
            }]
        );
    }

    #[test]
    fn test_non_mapping_data() {
        let err = POST_SCHEMA.validate(&json!(["title"])).unwrap_err();
        assert_eq!(err.violations[0].field, "data");
    }

    #[test]
    fn test_parse_date_formats() {
        let midnight = Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap();
        assert_eq!(parse_date("2024-01-15"), Some(midnight));
        assert_eq!(parse_date("2024/01/15"), Some(midnight));

        let morning = Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap();
        assert_eq!(parse_date("2024-01-15 10:30:00"), Some(morning));
        assert_eq!(parse_date("2024-01-15 10:30"), Some(morning));
        assert_eq!(parse_date("2024-01-15T10:30:00"), Some(morning));
        assert_eq!(parse_date("2024-01-15T10:30:00Z"), Some(morning));
        assert_eq!(parse_date("2024-01-15T18:30:00+08:00"), Some(morning));

        assert_eq!(parse_date("15 January"), None);
    }
}
