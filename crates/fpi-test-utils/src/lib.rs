//! Testing utilities for FPI workspace
//!
//! Shared fixtures and test doubles.

#![allow(missing_docs)]

use fpi_cert::{CertificateDocument, CertificateError, CertificateGenerator, CertificateRecord};
use fpi_config::PartConfig;
use fpi_field::{FieldDefinition, FieldKind};
use fpi_spec::{CharacteristicSpec, SpecSheet, SpecTemplate};
use parking_lot::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

/// Three-row tolerance template used across the workspace tests
pub fn sample_template() -> SpecTemplate {
    SpecTemplate::new(vec![
        CharacteristicSpec::new(1, "Outer Diameter", "Micrometer", 0.47, 0.53),
        CharacteristicSpec::new(2, "Overall Length", "Caliper", 1.95, 2.05),
        CharacteristicSpec::new(3, "Bore Depth", "Depth Gauge", 0.24, 0.26),
    ])
    .unwrap()
}

pub fn sample_sheet() -> SpecSheet {
    SpecSheet::new(sample_template())
}

/// Part with one field of each kind
pub fn sample_part() -> PartConfig {
    PartConfig::new("PN-5500", "Guide Pin")
        .with_customer("Borealis Motion")
        .with_field(field(
            "diameter",
            "Pin Diameter",
            FieldKind::Numeric {
                min: Some(0.124),
                max: Some(0.126),
            },
        ))
        .with_field(field("straightness", "Straightness Checked", FieldKind::Checkbox))
        .with_field(field(
            "finish",
            "Surface Finish",
            FieldKind::Select {
                options: vec!["Polished".into(), "Ground".into()],
            },
        ))
}

fn field(id: &str, name: &str, kind: FieldKind) -> FieldDefinition {
    FieldDefinition::new(id, name, kind).unwrap()
}

/// Certificate generator double that records every call and can be
/// switched to fail on demand
#[derive(Debug, Default)]
pub struct RecordingCertifier {
    calls: Mutex<Vec<CertificateRecord>>,
    fail: AtomicBool,
}

impl RecordingCertifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        let certifier = Self::default();
        certifier.fail.store(true, Ordering::SeqCst);
        certifier
    }

    pub fn set_failing(&self, failing: bool) {
        self.fail.store(failing, Ordering::SeqCst);
    }

    /// Number of generate calls seen so far
    pub fn calls(&self) -> usize {
        self.calls.lock().len()
    }

    /// Every record passed to generate, oldest first
    pub fn records(&self) -> Vec<CertificateRecord> {
        self.calls.lock().clone()
    }
}

impl CertificateGenerator for RecordingCertifier {
    fn generate(
        &self,
        record: &CertificateRecord,
    ) -> Result<CertificateDocument, CertificateError> {
        self.calls.lock().push(record.clone());

        if self.fail.load(Ordering::SeqCst) {
            return Err(CertificateError::Generation(
                "switched off for this test".to_string(),
            ));
        }

        Ok(CertificateDocument {
            id: record.id,
            file_name: format!("coc-{}.txt", record.lot_number),
            content: format!("TEST CERTIFICATE {}", record.lot_number),
        })
    }

    fn format(&self) -> &'static str {
        "recording"
    }
}
