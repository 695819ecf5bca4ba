//! Scalar cell values.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;

/// A displayable scalar stored in a record field.
///
/// Date-like values are carried as text; ISO-8601 strings sort correctly
/// under lexicographic comparison.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Absent or null
    #[default]
    Null,
    /// Boolean
    Bool(bool),
    /// Number
    Number(f64),
    /// Text, including date-like strings
    Text(String),
}

/// Shared null returned for missing fields.
pub(crate) static NULL: Value = Value::Null;

impl Value {
    /// Textual form used for display and filtering.
    ///
    /// Null renders as the empty string, booleans as `true`/`false`, and
    /// numbers in their shortest round-trip form (`30`, `2.5`, `NaN`,
    /// `Infinity`). Magnitudes of at least 1e21 or below 1e-6 switch to
    /// exponent form with an explicit sign (`1e+21`, `2.5e-7`).
    #[must_use]
    pub fn display(&self) -> Cow<'_, str> {
        match self {
            Self::Null => Cow::Borrowed(""),
            Self::Bool(true) => Cow::Borrowed("true"),
            Self::Bool(false) => Cow::Borrowed("false"),
            Self::Number(n) => Cow::Owned(format_number(*n)),
            Self::Text(s) => Cow::Borrowed(s),
        }
    }

    /// Check whether the value is null.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Compare two values for sorting.
    ///
    /// Two string-like values (text or null, null being the empty string)
    /// compare lexicographically. Any other pairing compares numerically after
    /// loose coercion: booleans become 0/1, blank text becomes 0, other text
    /// is parsed. Values that cannot be ordered (NaN, unparseable text against
    /// a number) compare as equal, which keeps their existing relative order
    /// under a stable sort. This relation is not transitive across mixed
    /// types.
    #[must_use]
    pub fn compare(&self, other: &Self) -> Ordering {
        match (self.as_text(), other.as_text()) {
            (Some(a), Some(b)) => a.cmp(b),
            _ => self
                .coerce_number()
                .partial_cmp(&other.coerce_number())
                .unwrap_or(Ordering::Equal),
        }
    }

    fn as_text(&self) -> Option<&str> {
        match self {
            Self::Null => Some(""),
            Self::Text(s) => Some(s),
            Self::Bool(_) | Self::Number(_) => None,
        }
    }

    fn coerce_number(&self) -> f64 {
        match self {
            Self::Null => 0.0,
            Self::Bool(b) => f64::from(u8::from(*b)),
            Self::Number(n) => *n,
            Self::Text(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    0.0
                } else {
                    trimmed.parse().unwrap_or(f64::NAN)
                }
            }
        }
    }
}

fn format_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        let sign = if n > 0.0 { "" } else { "-" };
        format!("{sign}Infinity")
    } else if n == 0.0 {
        // covers negative zero
        "0".to_string()
    } else if n.abs() >= 1e21 || n.abs() < 1e-6 {
        let exp = format!("{n:e}");
        match exp.split_once('e') {
            Some((mantissa, power)) if !power.starts_with('-') => format!("{mantissa}e+{power}"),
            _ => exp,
        }
    } else {
        format!("{n}")
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Self::Number(f64::from(n))
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Self::Number(f64::from(n))
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Self::Null, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_scalars() {
        assert_eq!(Value::Null.display(), "");
        assert_eq!(Value::Bool(true).display(), "true");
        assert_eq!(Value::Bool(false).display(), "false");
        assert_eq!(Value::from("Amy").display(), "Amy");
    }

    #[test]
    fn test_display_numbers() {
        assert_eq!(Value::from(30).display(), "30");
        assert_eq!(Value::from(2.5).display(), "2.5");
        assert_eq!(Value::from(-0.0).display(), "0");
        assert_eq!(Value::from(f64::NAN).display(), "NaN");
        assert_eq!(Value::from(f64::INFINITY).display(), "Infinity");
        assert_eq!(Value::from(f64::NEG_INFINITY).display(), "-Infinity");
    }

    #[test]
    fn test_display_exponent_thresholds() {
        assert_eq!(Value::from(1e21).display(), "1e+21");
        assert_eq!(Value::from(-2.5e22).display(), "-2.5e+22");
        assert_eq!(Value::from(1e-7).display(), "1e-7");
        assert_eq!(Value::from(1e20).display(), "100000000000000000000");
        assert_eq!(Value::from(0.000_001).display(), "0.000001");
    }

    #[test]
    fn test_display_trait_matches() {
        assert_eq!(Value::from(42).to_string(), "42");
    }

    #[test]
    fn test_compare_numbers() {
        assert_eq!(Value::from(2).compare(&Value::from(10)), Ordering::Less);
        assert_eq!(Value::from(10).compare(&Value::from(2)), Ordering::Greater);
        assert_eq!(Value::from(5).compare(&Value::from(5)), Ordering::Equal);
    }

    #[test]
    fn test_compare_text_is_lexicographic() {
        // "10" < "2" as strings
        assert_eq!(Value::from("10").compare(&Value::from("2")), Ordering::Less);
        assert_eq!(
            Value::from("2024-01-05").compare(&Value::from("2023-12-31")),
            Ordering::Greater
        );
    }

    #[test]
    fn test_compare_null_is_empty_text() {
        assert_eq!(Value::Null.compare(&Value::from("a")), Ordering::Less);
        assert_eq!(Value::Null.compare(&Value::from("")), Ordering::Equal);
    }

    #[test]
    fn test_compare_mixed_coerces() {
        assert_eq!(Value::from(3).compare(&Value::from("10")), Ordering::Less);
        assert_eq!(Value::from(" 4 ").compare(&Value::from(3)), Ordering::Greater);
        assert_eq!(Value::from("").compare(&Value::from(0)), Ordering::Equal);
        assert_eq!(Value::Bool(true).compare(&Value::from(0)), Ordering::Greater);
    }

    #[test]
    fn test_compare_incomparable_is_equal() {
        assert_eq!(Value::from("abc").compare(&Value::from(1)), Ordering::Equal);
        assert_eq!(Value::from(f64::NAN).compare(&Value::from(1)), Ordering::Equal);
    }

    #[test]
    fn test_from_option() {
        assert_eq!(Value::from(None::<&str>), Value::Null);
        assert_eq!(Value::from(Some(7)), Value::Number(7.0));
    }

    #[test]
    fn test_deserialize_untagged() {
        let values: Vec<Value> =
            serde_json::from_str(r#"[null, true, 1.5, "x"]"#).expect("valid json");
        assert_eq!(
            values,
            vec![
                Value::Null,
                Value::Bool(true),
                Value::Number(1.5),
                Value::Text("x".to_string())
            ]
        );
    }
}
