//! Document generation from conformance records

use crate::{CertificateId, CertificateRecord};

/// Certificate generation failure
///
/// Generation is best-effort at the call site: a failed document never
/// blocks the release it describes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CertificateError {
    /// Record names no customer
    #[error("certificate record has no customer")]
    MissingCustomer,

    /// Record names no part number
    #[error("certificate record has no part number")]
    MissingPartNumber,

    /// Record names no lot number
    #[error("certificate record has no lot number")]
    MissingLotNumber,

    /// Generator-specific failure
    #[error("certificate generation failed: {0}")]
    Generation(String),
}

/// A rendered certificate ready to hand to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CertificateDocument {
    /// Identifier of the record this document renders
    pub id: CertificateId,

    /// Suggested download file name
    pub file_name: String,

    /// Full document body
    pub content: String,
}

/// Renders a [`CertificateRecord`] into a downloadable document
///
/// Implementations are pure over the record: no side effects, no
/// inspection state, so a failure can be reported and dropped without
/// touching the release decision.
pub trait CertificateGenerator: Send + Sync + std::fmt::Debug {
    /// Render the record into a document
    ///
    /// # Errors
    /// Returns [`CertificateError`] when the record is missing the
    /// identification a certificate cannot omit.
    fn generate(&self, record: &CertificateRecord) -> Result<CertificateDocument, CertificateError>;

    /// Output format name (for logging/selection)
    fn format(&self) -> &'static str;
}

/// Plain-text certificate generator
#[derive(Debug, Clone, Copy, Default)]
pub struct TextCertificateGenerator;

impl TextCertificateGenerator {
    /// Create a text generator
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl CertificateGenerator for TextCertificateGenerator {
    fn generate(&self, record: &CertificateRecord) -> Result<CertificateDocument, CertificateError> {
        check_identification(record)?;

        let mut lines = vec![
            "CERTIFICATE OF CONFORMANCE".to_string(),
            "==========================".to_string(),
            String::new(),
            format!("Certificate:  {}", record.id),
            format!("Customer:     {}", record.customer),
            format!("Part Number:  {}", record.part_number),
            format!("Part Name:    {}", record.part_name),
            format!("Lot Number:   {}", record.lot_number),
        ];

        if let Some(heat) = &record.heat_number {
            lines.push(format!("Heat Number:  {heat}"));
        }
        lines.push(format!("Quantity:     {}", record.quantity));
        if let Some(shipped) = record.quantity_shipped {
            lines.push(format!("Shipped:      {shipped}"));
        }
        lines.push(format!("Inspector:    {}", record.inspector));
        lines.push(format!("Inspected:    {}", record.inspected_on));
        lines.push(format!(
            "Issued:       {}",
            record.issued_at.format("%Y-%m-%d %H:%M UTC")
        ));

        if !record.citations.is_empty() {
            lines.push(String::new());
            lines.push("First Piece Inspection Results".to_string());
            lines.push("------------------------------".to_string());
            for citation in &record.citations {
                lines.push(format!("  {citation}"));
            }
        }

        if let Some(remarks) = &record.remarks {
            lines.push(String::new());
            lines.push("Remarks".to_string());
            lines.push("-------".to_string());
            lines.push(remarks.clone());
        }

        lines.push(String::new());
        lines.push(
            "We certify that the above parts conform to all applicable drawings and specifications."
                .to_string(),
        );

        Ok(CertificateDocument {
            id: record.id,
            file_name: format!("coc-{}.txt", file_stem(&record.lot_number)),
            content: lines.join("\n"),
        })
    }

    fn format(&self) -> &'static str {
        "text"
    }
}

fn check_identification(record: &CertificateRecord) -> Result<(), CertificateError> {
    if record.customer.trim().is_empty() {
        return Err(CertificateError::MissingCustomer);
    }
    if record.part_number.trim().is_empty() {
        return Err(CertificateError::MissingPartNumber);
    }
    if record.lot_number.trim().is_empty() {
        return Err(CertificateError::MissingLotNumber);
    }
    Ok(())
}

// Lot numbers come off scanners; keep file names shell-safe.
fn file_stem(lot_number: &str) -> String {
    let stem: String = lot_number
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
        .collect();

    if stem.chars().all(|c| c == '-') {
        "lot".to_string()
    } else {
        stem
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn record() -> CertificateRecord {
        CertificateRecord::new(
            "Acme Aerospace",
            "PN-1042",
            "Pivot Bushing",
            "L-240815",
            250,
            "R. Alvarez",
        )
    }

    #[test]
    fn generates_document_with_all_sections() {
        let record = record()
            .with_heat_number("H-7731")
            .with_citations(vec![
                "Diameter [0.47, 0.53] actual 0.5 PASS (Micrometer)".into(),
            ])
            .with_remarks("First article approved");

        let doc = TextCertificateGenerator::new().generate(&record).unwrap();

        assert_eq!(doc.id, record.id);
        assert_eq!(doc.file_name, "coc-L-240815.txt");
        assert!(doc.content.contains("CERTIFICATE OF CONFORMANCE"));
        assert!(doc.content.contains("Heat Number:  H-7731"));
        assert!(doc.content.contains("actual 0.5 PASS"));
        assert!(doc.content.contains("First article approved"));
    }

    #[test]
    fn blank_customer_refused() {
        let mut record = record();
        record.customer = "  ".to_string();

        let err = TextCertificateGenerator::new().generate(&record).unwrap_err();
        assert_eq!(err, CertificateError::MissingCustomer);
    }

    #[test]
    fn blank_part_and_lot_refused() {
        let mut record = record();
        record.part_number = String::new();
        assert_eq!(
            TextCertificateGenerator::new().generate(&record).unwrap_err(),
            CertificateError::MissingPartNumber
        );

        let mut record = self::record();
        record.lot_number = String::new();
        assert_eq!(
            TextCertificateGenerator::new().generate(&record).unwrap_err(),
            CertificateError::MissingLotNumber
        );
    }

    #[test]
    fn file_names_are_sanitized() {
        let mut record = record();
        record.lot_number = "L 2408/15#a".to_string();

        let doc = TextCertificateGenerator::new().generate(&record).unwrap();
        assert_eq!(doc.file_name, "coc-L-2408-15-a.txt");
    }

    #[test]
    fn format_name() {
        assert_eq!(TextCertificateGenerator::new().format(), "text");
    }
}
