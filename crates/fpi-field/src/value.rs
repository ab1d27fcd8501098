//! Entered values and their evaluated inspection entries

use fpi_spec::InspectionStatus;
use serde::{Deserialize, Serialize};

/// A raw value entered by the inspector, one variant per field kind
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum FieldValue {
    /// Measured number
    Number(f64),

    /// Checkbox state
    Check(bool),

    /// Chosen select option
    Choice(String),
}

impl FieldValue {
    /// Render the value the way it appears on a report
    #[must_use]
    pub fn render(&self) -> String {
        match self {
            Self::Number(v) => format!("{v}"),
            Self::Check(true) => "yes".to_string(),
            Self::Check(false) => "no".to_string(),
            Self::Choice(choice) => choice.clone(),
        }
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Check(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Choice(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Choice(value)
    }
}

/// One evaluated entry on an inspection form
///
/// Only the form constructs these, so the stored status always matches
/// the stored value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InspectionValue {
    field_id: String,
    value: Option<FieldValue>,
    status: InspectionStatus,
}

impl InspectionValue {
    /// Internal constructor used by the form after evaluation
    pub(crate) fn evaluated(
        field_id: String,
        value: Option<FieldValue>,
        status: InspectionStatus,
    ) -> Self {
        Self {
            field_id,
            value,
            status,
        }
    }

    /// Synthesized default for a field nobody has touched yet
    pub(crate) fn untouched(field_id: &str) -> Self {
        Self {
            field_id: field_id.to_string(),
            value: None,
            status: InspectionStatus::Pending,
        }
    }

    /// Field this entry belongs to
    #[inline]
    #[must_use]
    pub fn field_id(&self) -> &str {
        &self.field_id
    }

    /// Entered value, if any
    #[inline]
    #[must_use]
    pub fn value(&self) -> Option<&FieldValue> {
        self.value.as_ref()
    }

    /// Evaluated status for the entered value
    #[inline]
    #[must_use]
    pub fn status(&self) -> InspectionStatus {
        self.status
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_per_variant() {
        assert_eq!(FieldValue::Number(0.5).render(), "0.5");
        assert_eq!(FieldValue::Check(true).render(), "yes");
        assert_eq!(FieldValue::Check(false).render(), "no");
        assert_eq!(FieldValue::Choice("304".into()).render(), "304");
    }

    #[test]
    fn from_conversions() {
        assert_eq!(FieldValue::from(1.5), FieldValue::Number(1.5));
        assert_eq!(FieldValue::from(true), FieldValue::Check(true));
        assert_eq!(FieldValue::from("316"), FieldValue::Choice("316".into()));
    }

    #[test]
    fn untouched_entry_is_pending() {
        let entry = InspectionValue::untouched("od");
        assert_eq!(entry.field_id(), "od");
        assert!(entry.value().is_none());
        assert!(entry.status().is_pending());
    }
}
