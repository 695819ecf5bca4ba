//! Records: schemaless field bags.

use crate::error::{Error, Result};
use crate::value::{Value, NULL};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One row of tabular data, keyed by field name.
///
/// No schema is enforced; a column may read a field the record lacks, in
/// which case it sees [`Value::Null`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    fields: HashMap<String, Value>,
}

impl Record {
    /// Create an empty record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field.
    #[must_use]
    pub fn field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// Set a field in place.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.fields.insert(name.into(), value.into());
    }

    /// Get a field if present.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Get a field, treating a missing one as null.
    #[must_use]
    pub fn value(&self, name: &str) -> &Value {
        self.fields.get(name).unwrap_or(&NULL)
    }

    /// Number of fields present.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check if the record has no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Convert a JSON object into a record.
    ///
    /// `index` is only used to label errors.
    pub fn from_json(index: usize, json: &serde_json::Value) -> Result<Self> {
        let object = json.as_object().ok_or(Error::NotAnObject { index })?;
        let mut record = Self::new();
        for (name, value) in object {
            let value = match value {
                serde_json::Value::Null => Value::Null,
                serde_json::Value::Bool(b) => Value::Bool(*b),
                serde_json::Value::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
                serde_json::Value::String(s) => Value::Text(s.clone()),
                serde_json::Value::Array(_) | serde_json::Value::Object(_) => {
                    return Err(Error::NonScalarField {
                        index,
                        field: name.clone(),
                    });
                }
            };
            record.fields.insert(name.clone(), value);
        }
        Ok(record)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Convert a JSON array of objects into records.
pub fn records_from_json(json: &serde_json::Value) -> Result<Vec<Record>> {
    let rows = json.as_array().ok_or(Error::NotAnArray)?;
    rows.iter()
        .enumerate()
        .map(|(index, row)| Record::from_json(index, row))
        .collect()
}

/// Parse a JSON document holding an array of objects into records.
pub fn records_from_json_str(input: &str) -> Result<Vec<Record>> {
    let json: serde_json::Value = serde_json::from_str(input)?;
    records_from_json(&json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_record_builder() {
        let r = Record::new().field("name", "Amy").field("age", 25);
        assert_eq!(r.len(), 2);
        assert_eq!(r.get("name"), Some(&Value::from("Amy")));
        assert_eq!(r.value("age"), &Value::Number(25.0));
    }

    #[test]
    fn test_missing_field_is_null() {
        let r = Record::new();
        assert!(r.is_empty());
        assert!(r.get("nope").is_none());
        assert!(r.value("nope").is_null());
    }

    #[test]
    fn test_set_overwrites() {
        let mut r = Record::new().field("n", 1);
        r.set("n", 2);
        assert_eq!(r.value("n"), &Value::Number(2.0));
    }

    #[test]
    fn test_from_iterator() {
        let r: Record = [("a", 1), ("b", 2)].into_iter().collect();
        assert_eq!(r.value("b"), &Value::Number(2.0));
    }

    #[test]
    fn test_from_json_object() {
        let r = Record::from_json(0, &json!({"name": "Bob", "age": 30, "vip": true, "note": null}))
            .expect("scalar object");
        assert_eq!(r.value("name"), &Value::from("Bob"));
        assert_eq!(r.value("age"), &Value::Number(30.0));
        assert_eq!(r.value("vip"), &Value::Bool(true));
        assert!(r.value("note").is_null());
    }

    #[test]
    fn test_from_json_rejects_non_object() {
        let err = Record::from_json(3, &json!([1, 2])).unwrap_err();
        assert!(matches!(err, Error::NotAnObject { index: 3 }));
    }

    #[test]
    fn test_from_json_rejects_nested() {
        let err = Record::from_json(1, &json!({"tags": ["a"]})).unwrap_err();
        assert!(matches!(err, Error::NonScalarField { index: 1, ref field } if field == "tags"));
    }

    #[test]
    fn test_records_from_json_str() {
        let rows = records_from_json_str(r#"[{"name":"Amy"},{"name":"Cid"}]"#).expect("valid");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].value("name"), &Value::from("Cid"));
    }

    #[test]
    fn test_records_from_json_requires_array() {
        assert!(matches!(
            records_from_json(&json!({"name": "Amy"})),
            Err(Error::NotAnArray)
        ));
        assert!(matches!(records_from_json_str("{"), Err(Error::Json(_))));
    }

    #[test]
    fn test_serde_transparent() {
        let r: Record = serde_json::from_str(r#"{"x": 1}"#).expect("valid");
        assert_eq!(r.value("x"), &Value::Number(1.0));
    }
}
