//! Per-part inspection configuration

use fpi_field::{DefinitionError, FieldDefinition, FieldKind};
use serde::{Deserialize, Serialize};

/// Configuration rejected by [`PartConfig::validate`]
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// Part number is empty or whitespace
    #[error("part number is blank")]
    BlankPartNumber,

    /// Part name is empty or whitespace
    #[error("part '{part_number}' has a blank name")]
    BlankPartName {
        /// Offending part
        part_number: String,
    },

    /// Two fields share one identifier
    #[error("part '{part_number}' repeats field id '{field_id}'")]
    DuplicateFieldId {
        /// Offending part
        part_number: String,
        /// Repeated identifier
        field_id: String,
    },

    /// A field definition failed its own checks
    #[error(transparent)]
    Field(#[from] DefinitionError),
}

/// Inspection checklist configuration for one part number
///
/// The validator reads the field list and never mutates it; edits go
/// through the store, which bumps `revision` on every replacement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartConfig {
    /// Part number as drawn, unique within the catalog
    pub part_number: String,

    /// Part display name
    pub part_name: String,

    /// Configuration revision, starting at 1
    pub revision: u32,

    /// Customer this part is made for, if dedicated
    pub customer: Option<String>,

    /// Inspectable fields, in checklist order
    pub fields: Vec<FieldDefinition>,
}

impl PartConfig {
    /// Create a first-revision configuration with no fields
    #[must_use]
    pub fn new(part_number: impl Into<String>, part_name: impl Into<String>) -> Self {
        Self {
            part_number: part_number.into(),
            part_name: part_name.into(),
            revision: 1,
            customer: None,
            fields: Vec::new(),
        }
    }

    /// With customer
    #[inline]
    #[must_use]
    pub fn with_customer(mut self, customer: impl Into<String>) -> Self {
        self.customer = Some(customer.into());
        self
    }

    /// With checklist fields
    #[inline]
    #[must_use]
    pub fn with_fields(mut self, fields: Vec<FieldDefinition>) -> Self {
        self.fields = fields;
        self
    }

    /// Append one field
    #[inline]
    #[must_use]
    pub fn with_field(mut self, field: FieldDefinition) -> Self {
        self.fields.push(field);
        self
    }

    /// Move to the next revision
    #[inline]
    pub fn bump_revision(&mut self) {
        self.revision = self.revision.saturating_add(1);
    }

    /// Check the part header and every field definition
    ///
    /// # Errors
    /// Returns [`ConfigError`] for a blank header, a repeated field id,
    /// or any field that fails its construction-time checks.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.part_number.trim().is_empty() {
            return Err(ConfigError::BlankPartNumber);
        }
        if self.part_name.trim().is_empty() {
            return Err(ConfigError::BlankPartName {
                part_number: self.part_number.clone(),
            });
        }

        let mut seen = std::collections::HashSet::new();
        for field in &self.fields {
            field.validate()?;
            if !seen.insert(field.id.as_str()) {
                return Err(ConfigError::DuplicateFieldId {
                    part_number: self.part_number.clone(),
                    field_id: field.id.clone(),
                });
            }
        }

        Ok(())
    }

    /// Look up one field definition by id
    #[must_use]
    pub fn field(&self, field_id: &str) -> Option<&FieldDefinition> {
        self.fields.iter().find(|f| f.id == field_id)
    }
}

/// Built-in sample catalog used when no persisted configuration loads
///
/// Covers every field kind so a demo session exercises each rule.
#[must_use]
pub fn demo_catalog() -> Vec<PartConfig> {
    vec![
        PartConfig::new("PN-1042", "Pivot Bushing")
            .with_customer("Acme Aerospace")
            .with_fields(vec![
                demo_field(
                    "od",
                    "Outer Diameter",
                    FieldKind::Numeric {
                        min: Some(0.47),
                        max: Some(0.53),
                    },
                )
                .with_required(true)
                .with_tool("Micrometer"),
                demo_field(
                    "length",
                    "Overall Length",
                    FieldKind::Numeric {
                        min: None,
                        max: Some(2.0),
                    },
                )
                .with_tool("Caliper"),
                demo_field(
                    "material",
                    "Material",
                    FieldKind::Select {
                        options: vec!["304 SS".into(), "316 SS".into(), "Brass".into()],
                    },
                )
                .with_required(true),
                demo_field("deburred", "Deburred", FieldKind::Checkbox),
            ]),
        PartConfig::new("PN-2077", "Flange Plate").with_fields(vec![
            demo_field(
                "thickness",
                "Thickness",
                FieldKind::Numeric {
                    min: Some(0.245),
                    max: Some(0.255),
                },
            )
            .with_required(true)
            .with_tool("Micrometer"),
            demo_field(
                "finish",
                "Surface Finish",
                FieldKind::Select {
                    options: vec!["Anodized".into(), "Bare".into()],
                },
            ),
            demo_field("edges_broken", "Edges Broken", FieldKind::Checkbox),
        ]),
    ]
}

fn demo_field(id: &str, name: &str, kind: FieldKind) -> FieldDefinition {
    FieldDefinition {
        id: id.into(),
        name: name.into(),
        kind,
        required: false,
        tool: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_catalog_is_valid_and_covers_all_kinds() {
        let catalog = demo_catalog();
        assert_eq!(catalog.len(), 2);

        for part in &catalog {
            part.validate().unwrap();
        }

        let bushing = &catalog[0];
        assert!(bushing.fields.iter().any(|f| f.kind.is_numeric()));
        assert!(bushing.fields.iter().any(|f| f.kind.is_select()));
        assert!(bushing.fields.iter().any(|f| f.kind.is_checkbox()));
    }

    #[test]
    fn blank_header_rejected() {
        assert_eq!(
            PartConfig::new("", "Name").validate().unwrap_err(),
            ConfigError::BlankPartNumber
        );
        assert!(matches!(
            PartConfig::new("PN-1", " ").validate().unwrap_err(),
            ConfigError::BlankPartName { .. }
        ));
    }

    #[test]
    fn duplicate_field_ids_rejected() {
        let part = PartConfig::new("PN-1", "Part")
            .with_field(FieldDefinition::new("x", "X", FieldKind::Checkbox).unwrap())
            .with_field(FieldDefinition::new("x", "X again", FieldKind::Checkbox).unwrap());

        assert!(matches!(
            part.validate().unwrap_err(),
            ConfigError::DuplicateFieldId { .. }
        ));
    }

    #[test]
    fn invalid_field_surfaces_through_part() {
        let bad = FieldDefinition {
            id: "depth".into(),
            name: "Depth".into(),
            kind: FieldKind::Numeric {
                min: Some(2.0),
                max: Some(1.0),
            },
            required: false,
            tool: None,
        };
        let part = PartConfig::new("PN-1", "Part").with_field(bad);

        assert!(matches!(
            part.validate().unwrap_err(),
            ConfigError::Field(DefinitionError::InvertedBounds { .. })
        ));
    }

    #[test]
    fn revision_bumps() {
        let mut part = PartConfig::new("PN-1", "Part");
        assert_eq!(part.revision, 1);

        part.bump_revision();
        assert_eq!(part.revision, 2);
    }

    #[test]
    fn field_lookup() {
        let part = demo_catalog().remove(0);
        assert!(part.field("od").is_some());
        assert!(part.field("missing").is_none());
    }
}
