//! Field definitions and their construction-time validation

use serde::{Deserialize, Serialize};

/// Validation rule attached to a field, one variant per entry widget
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FieldKind {
    /// Measured quantity with independently optional bounds
    Numeric {
        /// Lower bound, inclusive when present
        min: Option<f64>,
        /// Upper bound, inclusive when present
        max: Option<f64>,
    },

    /// Yes/no attribute check
    Checkbox,

    /// One choice out of a fixed catalog
    Select {
        /// Allowed choices, in display order
        options: Vec<String>,
    },
}

impl FieldKind {
    /// Check if this is a numeric field
    #[inline]
    #[must_use]
    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::Numeric { .. })
    }

    /// Check if this is a checkbox field
    #[inline]
    #[must_use]
    pub fn is_checkbox(&self) -> bool {
        matches!(self, Self::Checkbox)
    }

    /// Check if this is a select field
    #[inline]
    #[must_use]
    pub fn is_select(&self) -> bool {
        matches!(self, Self::Select { .. })
    }

    /// Kind name (for logging/serialization)
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Numeric { .. } => "numeric",
            Self::Checkbox => "checkbox",
            Self::Select { .. } => "select",
        }
    }
}

/// Definition rejected at construction time
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DefinitionError {
    /// Identifier is empty or whitespace
    #[error("field id is blank")]
    BlankId,

    /// Display name is empty or whitespace
    #[error("field '{id}' has a blank name")]
    BlankName {
        /// Offending field
        id: String,
    },

    /// A numeric bound is NaN or infinite
    #[error("field '{id}' has a non-finite bound")]
    NonFiniteBound {
        /// Offending field
        id: String,
    },

    /// Lower bound exceeds upper bound
    #[error("field '{id}' has inverted bounds: min {min} > max {max}")]
    InvertedBounds {
        /// Offending field
        id: String,
        /// Declared lower bound
        min: f64,
        /// Declared upper bound
        max: f64,
    },

    /// Select catalog is empty
    #[error("select field '{id}' has no options")]
    NoOptions {
        /// Offending field
        id: String,
    },

    /// Select catalog contains an empty choice
    #[error("select field '{id}' has a blank option")]
    BlankOption {
        /// Offending field
        id: String,
    },

    /// Select catalog repeats a choice
    #[error("select field '{id}' repeats option '{option}'")]
    DuplicateOption {
        /// Offending field
        id: String,
        /// Repeated choice
        option: String,
    },
}

/// A single inspectable field on a part's checklist
///
/// Definitions are per-part configuration, read by the validator and
/// never mutated by it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDefinition {
    /// Stable identifier, unique within a part
    pub id: String,

    /// Display name shown to the inspector
    pub name: String,

    /// Validation rule for entered values
    pub kind: FieldKind,

    /// Whether an answer is needed before the lot can complete
    pub required: bool,

    /// Measuring tool called out for this field, if any
    pub tool: Option<String>,
}

impl FieldDefinition {
    /// Create a validated definition (optional, no tool)
    ///
    /// # Errors
    /// Returns [`DefinitionError`] for blank identifiers, malformed
    /// numeric bounds, or a degenerate select catalog.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        kind: FieldKind,
    ) -> Result<Self, DefinitionError> {
        let definition = Self {
            id: id.into(),
            name: name.into(),
            kind,
            required: false,
            tool: None,
        };
        definition.validate()?;
        Ok(definition)
    }

    /// Mark this field as required
    #[inline]
    #[must_use]
    pub fn with_required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Attach a measuring tool call-out
    #[inline]
    #[must_use]
    pub fn with_tool(mut self, tool: impl Into<String>) -> Self {
        self.tool = Some(tool.into());
        self
    }

    /// Re-run construction-time checks (for definitions built from
    /// deserialized configuration)
    ///
    /// # Errors
    /// Same conditions as [`FieldDefinition::new`].
    pub fn validate(&self) -> Result<(), DefinitionError> {
        if self.id.trim().is_empty() {
            return Err(DefinitionError::BlankId);
        }
        if self.name.trim().is_empty() {
            return Err(DefinitionError::BlankName {
                id: self.id.clone(),
            });
        }

        match &self.kind {
            FieldKind::Numeric { min, max } => {
                for bound in [min, max].into_iter().flatten() {
                    if !bound.is_finite() {
                        return Err(DefinitionError::NonFiniteBound {
                            id: self.id.clone(),
                        });
                    }
                }
                if let (Some(min), Some(max)) = (min, max) {
                    if min > max {
                        return Err(DefinitionError::InvertedBounds {
                            id: self.id.clone(),
                            min: *min,
                            max: *max,
                        });
                    }
                }
            }
            FieldKind::Checkbox => {}
            FieldKind::Select { options } => {
                if options.is_empty() {
                    return Err(DefinitionError::NoOptions {
                        id: self.id.clone(),
                    });
                }
                let mut seen = std::collections::HashSet::new();
                for option in options {
                    if option.trim().is_empty() {
                        return Err(DefinitionError::BlankOption {
                            id: self.id.clone(),
                        });
                    }
                    if !seen.insert(option.as_str()) {
                        return Err(DefinitionError::DuplicateOption {
                            id: self.id.clone(),
                            option: option.clone(),
                        });
                    }
                }
            }
        }

        Ok(())
    }
}
