//! Flat conformance record handed to the document generator

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use ulid::Ulid;

/// Unique certificate identifier (ULID for sortability)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CertificateId(pub Ulid);

impl CertificateId {
    /// Generate new certificate ID
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self(Ulid::new())
    }
}

impl Default for CertificateId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for CertificateId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Everything a certificate of conformance states about one lot
///
/// Deliberately flat: the generator receives plain strings and numbers,
/// not validator types, so document layout stays decoupled from
/// inspection internals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CertificateRecord {
    /// Certificate identifier
    pub id: CertificateId,

    /// Customer the lot ships to
    pub customer: String,

    /// Part number as drawn
    pub part_number: String,

    /// Part display name
    pub part_name: String,

    /// Lot number under disposition
    pub lot_number: String,

    /// Heat number of the raw material, if tracked
    pub heat_number: Option<String>,

    /// Pieces in the lot
    pub quantity: u32,

    /// Pieces covered by this shipment, when partial
    pub quantity_shipped: Option<u32>,

    /// Inspector who released the lot
    pub inspector: String,

    /// Date the inspection was performed
    pub inspected_on: NaiveDate,

    /// When the record was assembled
    pub issued_at: DateTime<Utc>,

    /// One line per inspected characteristic, already rendered
    pub citations: Vec<String>,

    /// Free-form remarks block
    pub remarks: Option<String>,
}

impl CertificateRecord {
    /// Create a record for today's release
    #[must_use]
    pub fn new(
        customer: impl Into<String>,
        part_number: impl Into<String>,
        part_name: impl Into<String>,
        lot_number: impl Into<String>,
        quantity: u32,
        inspector: impl Into<String>,
    ) -> Self {
        let issued_at = Utc::now();
        Self {
            id: CertificateId::new(),
            customer: customer.into(),
            part_number: part_number.into(),
            part_name: part_name.into(),
            lot_number: lot_number.into(),
            heat_number: None,
            quantity,
            quantity_shipped: None,
            inspector: inspector.into(),
            inspected_on: issued_at.date_naive(),
            issued_at,
            citations: Vec::new(),
            remarks: None,
        }
    }

    /// With heat number
    #[inline]
    #[must_use]
    pub fn with_heat_number(mut self, heat_number: impl Into<String>) -> Self {
        self.heat_number = Some(heat_number.into());
        self
    }

    /// With a partial shipment quantity
    #[inline]
    #[must_use]
    pub fn with_quantity_shipped(mut self, shipped: u32) -> Self {
        self.quantity_shipped = Some(shipped);
        self
    }

    /// With rendered characteristic citations
    #[inline]
    #[must_use]
    pub fn with_citations(mut self, citations: Vec<String>) -> Self {
        self.citations = citations;
        self
    }

    /// With remarks block
    #[inline]
    #[must_use]
    pub fn with_remarks(mut self, remarks: impl Into<String>) -> Self {
        self.remarks = Some(remarks.into());
        self
    }
}
