//! Inspection session orchestration
//!
//! The central coordinator that:
//! - Threads the signed-in role through every mutation gate
//! - Records measurements and checklist values on the active worksheet
//! - Drives lot disposition and one-shot certificate generation
//! - Tracks production reports and shipments for shift KPIs

use crate::context::SessionContext;
use crate::error::SessionError;
use crate::production::{KpiSummary, ProductionEntry};
use crate::scan::{LotInfo, LotScanner};
use crate::shift_log::{LoggedEvent, ShiftEvent, ShiftLog};
use crate::shipment::ShipmentLedger;
use crate::worksheet::{Worksheet, WorksheetSummary};
use crate::Role;
use fpi_cert::{
    CertificateDocument, CertificateGenerator, CertificateRecord, TextCertificateGenerator,
};
use fpi_config::{PartConfig, PartStore};
use fpi_disposition::{Disposition, DispositionError, LotState};
use fpi_field::FieldValue;
use fpi_spec::{InspectionStatus, SpecId};
use std::sync::Arc;

/// Session construction parameters
///
/// Who is signing in plus the certificate header details that do not
/// come from a part configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionConfig {
    /// Role signing in at the terminal
    pub role: Role,

    /// Signed-in person's name
    pub inspector: String,

    /// Customer used when the part config carries none
    pub customer: Option<String>,

    /// Part number and name for worksheets without a part config
    pub part_label: Option<(String, String)>,
}

impl SessionConfig {
    /// Config for a signed-in person
    #[must_use]
    pub fn new(role: Role, inspector: impl Into<String>) -> Self {
        Self {
            role,
            inspector: inspector.into(),
            customer: None,
            part_label: None,
        }
    }

    /// With a customer for the certificate header
    #[must_use]
    pub fn with_customer(mut self, customer: impl Into<String>) -> Self {
        self.customer = Some(customer.into());
        self
    }

    /// With part identification for worksheets without a part config
    #[must_use]
    pub fn with_part_label(
        mut self,
        part_number: impl Into<String>,
        part_name: impl Into<String>,
    ) -> Self {
        self.part_label = Some((part_number.into(), part_name.into()));
        self
    }
}

/// What [`InspectionSession::approve`] produced
///
/// Release and paperwork are reported separately: a lot can be
/// released while its certificate fails to render.
#[derive(Debug, Clone)]
pub struct ReleaseOutcome {
    /// Rendered certificate, when generation succeeded
    pub certificate: Option<CertificateDocument>,

    /// Why the certificate did not render, when it failed
    pub certificate_error: Option<String>,
}

impl ReleaseOutcome {
    /// Check if the certificate rendered
    #[inline]
    #[must_use]
    pub fn certified(&self) -> bool {
        self.certificate.is_some()
    }
}

/// The central session coordinator
///
/// Owns the worksheet, the lot state machine, and the shift
/// bookkeeping. Every mutation passes a role gate and a lot-state
/// gate before it touches the worksheet.
#[derive(Debug)]
pub struct InspectionSession {
    /// Who is signed in and what they scanned
    context: SessionContext,
    /// Active checklist
    worksheet: Worksheet,
    /// One-way lot state machine
    disposition: Disposition,
    /// Certificate renderer invoked once per release
    certifier: Arc<dyn CertificateGenerator>,
    /// Part catalog shared with the rest of the station
    store: Arc<PartStore>,
    /// Barcode scan front end
    scanner: LotScanner,
    /// Append-only record of this shift
    log: Arc<ShiftLog>,
    /// Production reports collected this shift
    production: Vec<ProductionEntry>,
    /// Ledger opened at release, drawn down per shipment
    shipments: Option<ShipmentLedger>,
    /// Certificate rendered at release, kept for reprints
    certificate: Option<CertificateDocument>,
    /// Customer used when the part config carries none
    customer: Option<String>,
    /// Part number and name for worksheets without a part config
    part_label: Option<(String, String)>,
}

impl InspectionSession {
    /// Start a session over a worksheet
    ///
    /// Comes up with demo collaborators (in-memory catalog, demo lot
    /// directory, plain-text certifier); swap them with the `with_*`
    /// builders.
    #[must_use]
    pub fn new(config: SessionConfig, worksheet: Worksheet) -> Self {
        Self {
            context: SessionContext::new(config.role, config.inspector),
            worksheet,
            disposition: Disposition::new(),
            certifier: Arc::new(TextCertificateGenerator::new()),
            store: Arc::new(PartStore::in_memory()),
            scanner: LotScanner::with_demo_directory(),
            log: Arc::new(ShiftLog::new()),
            production: Vec::new(),
            shipments: None,
            certificate: None,
            customer: config.customer,
            part_label: config.part_label,
        }
    }

    /// With a specific certificate renderer
    #[must_use]
    pub fn with_certifier(mut self, certifier: Arc<dyn CertificateGenerator>) -> Self {
        self.certifier = certifier;
        self
    }

    /// With a shared part catalog
    #[must_use]
    pub fn with_store(mut self, store: Arc<PartStore>) -> Self {
        self.store = store;
        self
    }

    /// With a specific lot scanner
    #[must_use]
    pub fn with_scanner(mut self, scanner: LotScanner) -> Self {
        self.scanner = scanner;
        self
    }

    /// Session identity and scanned lot
    #[inline]
    #[must_use]
    pub fn context(&self) -> &SessionContext {
        &self.context
    }

    /// The active worksheet
    #[inline]
    #[must_use]
    pub fn worksheet(&self) -> &Worksheet {
        &self.worksheet
    }

    /// Current lot verdict
    #[inline]
    #[must_use]
    pub fn verdict(&self) -> LotState {
        self.disposition.state()
    }

    /// Check if the lot was released
    #[inline]
    #[must_use]
    pub fn released(&self) -> bool {
        self.disposition.released()
    }

    /// Check if the lot was rejected
    #[inline]
    #[must_use]
    pub fn rejected(&self) -> bool {
        self.disposition.rejected()
    }

    /// Live worksheet counts
    #[must_use]
    pub fn summary(&self) -> WorksheetSummary {
        self.worksheet.summary()
    }

    /// Certificate rendered at release, if any
    #[must_use]
    pub fn certificate(&self) -> Option<&CertificateDocument> {
        self.certificate.as_ref()
    }

    /// Shipment ledger, open once the lot is released
    #[must_use]
    pub fn shipments(&self) -> Option<&ShipmentLedger> {
        self.shipments.as_ref()
    }

    /// Production reports collected this shift
    #[must_use]
    pub fn production(&self) -> &[ProductionEntry] {
        &self.production
    }

    /// Snapshot of the shift log, oldest first
    #[must_use]
    pub fn events(&self) -> Vec<LoggedEvent> {
        self.log.events()
    }

    /// Shift KPIs derived from the log
    #[must_use]
    pub fn kpis(&self) -> KpiSummary {
        KpiSummary::from_events(&self.log.events())
    }

    /// Scan a lot label and attach the resolved lot to the session
    ///
    /// # Errors
    /// [`DispositionError::AlreadyDecided`] once the lot is decided,
    /// otherwise the [`crate::LookupError`] from the scan stack.
    pub async fn scan_lot(&mut self, raw: &str) -> Result<LotInfo, SessionError> {
        self.ensure_open()?;

        let lot = self.scanner.scan(raw).await?;
        self.log.append(ShiftEvent::LotScanned {
            lot_number: lot.lot_number.clone(),
        });
        self.context.set_lot(lot.clone());
        Ok(lot)
    }

    /// Record a measured value against a fixed-tolerance row
    ///
    /// Returns the evaluated status, or `None` when the id is unknown
    /// to the worksheet (including part-driven worksheets, which have
    /// no tolerance rows).
    ///
    /// # Errors
    /// [`DispositionError::AlreadyDecided`] once the lot is decided,
    /// [`SessionError::ReadOnly`] for a non-measuring role.
    pub fn record_measurement(
        &mut self,
        id: SpecId,
        actual: Option<f64>,
    ) -> Result<Option<InspectionStatus>, SessionError> {
        self.ensure_open()?;
        self.ensure_measuring_role()?;

        let applied = self.worksheet.record_measurement(id, actual);
        if let Some(status) = applied {
            self.log.append(ShiftEvent::ValueRecorded {
                entry: id.to_string(),
                status: status.label().to_string(),
            });
        }
        Ok(applied)
    }

    /// Record a checklist value against a part-driven field
    ///
    /// Returns the evaluated status, or `None` when the field id is
    /// not in the part's checklist (including fixed worksheets, which
    /// have no fields).
    ///
    /// # Errors
    /// [`DispositionError::AlreadyDecided`] once the lot is decided,
    /// [`SessionError::ReadOnly`] for a non-measuring role.
    pub fn record_field(
        &mut self,
        field_id: &str,
        value: Option<FieldValue>,
    ) -> Result<Option<InspectionStatus>, SessionError> {
        self.ensure_open()?;
        self.ensure_measuring_role()?;

        let applied = self.worksheet.record_field(field_id, value);
        if let Some(status) = applied {
            self.log.append(ShiftEvent::ValueRecorded {
                entry: field_id.to_string(),
                status: status.label().to_string(),
            });
        }
        Ok(applied)
    }

    /// Release the lot under inspection
    ///
    /// This is the decision point of the whole session.
    ///
    /// # Workflow
    /// 1. Check the signed-in role may disposition
    /// 2. Drive the state machine with the live release check
    /// 3. Render the certificate, best effort, exactly once
    /// 4. Open the shipment ledger over the scanned lot quantity
    ///
    /// # Errors
    /// [`SessionError::ReadOnly`] for a non-dispositioning role,
    /// otherwise the [`DispositionError`] naming the first failed
    /// release guard.
    pub fn approve(&mut self) -> Result<ReleaseOutcome, SessionError> {
        self.ensure_disposition_role()?;

        // 1. One-way transition; refuses failures, pending rows, empty sheets
        let check = self.worksheet.summary().release_check();
        self.disposition.release(check)?;
        tracing::info!(
            "Lot {} released by {}",
            self.lot_label(),
            self.context.inspector
        );

        // 2. Certificate is best effort; a render failure never rolls back release
        let record = self.certificate_record();
        let (certificate, certificate_error) = match self.certifier.generate(&record) {
            Ok(document) => (Some(document), None),
            Err(e) => {
                tracing::warn!("Certificate for {} did not render: {}", self.lot_label(), e);
                (None, Some(e.to_string()))
            }
        };
        self.certificate = certificate.clone();
        self.log.append(ShiftEvent::LotReleased {
            lot_number: self.context.lot_number().map(ToOwned::to_owned),
            certificate: certificate.is_some(),
        });

        // 3. Shipments draw down the scanned quantity
        let lot_quantity = self.context.lot.as_ref().map_or(0, |lot| lot.quantity);
        self.shipments = Some(ShipmentLedger::new(lot_quantity));

        Ok(ReleaseOutcome {
            certificate,
            certificate_error,
        })
    }

    /// Reject the lot under inspection
    ///
    /// No completeness guard: a lot can be rejected at any point
    /// before it is decided.
    ///
    /// # Errors
    /// [`SessionError::ReadOnly`] for a non-dispositioning role,
    /// [`DispositionError::AlreadyDecided`] once the lot is decided.
    pub fn reject(&mut self) -> Result<(), SessionError> {
        self.ensure_disposition_role()?;

        self.disposition.reject()?;
        tracing::info!(
            "Lot {} rejected by {}",
            self.lot_label(),
            self.context.inspector
        );
        self.log.append(ShiftEvent::LotRejected {
            lot_number: self.context.lot_number().map(ToOwned::to_owned),
        });
        Ok(())
    }

    /// Ship pieces against the released lot
    ///
    /// # Errors
    /// [`SessionError::NotReleased`] before a release,
    /// [`SessionError::ReadOnly`] for a non-dispositioning role,
    /// otherwise the [`crate::ShipmentError`] from the ledger.
    pub fn ship(&mut self, quantity: u32) -> Result<(), SessionError> {
        self.ensure_disposition_role()?;

        let ledger = self.shipments.as_mut().ok_or(SessionError::NotReleased)?;
        ledger.record(quantity)?;
        let remaining = ledger.remaining();

        self.log.append(ShiftEvent::Shipped { quantity });
        tracing::info!(
            "Shipped {} of lot {} ({} remaining)",
            quantity,
            self.lot_label(),
            remaining
        );
        Ok(())
    }

    /// File a production report for this shift
    ///
    /// Any signed-in role may report counts; the numbers feed the
    /// shift KPIs, not the release decision.
    ///
    /// # Errors
    /// [`crate::ProductionError`] for a blank operator or a defective
    /// count above the produced count.
    pub fn report_production(
        &mut self,
        operator: impl Into<String>,
        produced: u32,
        defective: u32,
    ) -> Result<(), SessionError> {
        let entry = ProductionEntry::new(operator, produced, defective)?;
        self.log.append(ShiftEvent::ProductionReported {
            operator: entry.operator.clone(),
            produced: entry.produced,
            defective: entry.defective,
        });
        self.production.push(entry);
        Ok(())
    }

    /// Save a part configuration to the shared catalog
    ///
    /// # Errors
    /// [`SessionError::ReadOnly`] for a non-configuring role,
    /// otherwise the [`fpi_config::ConfigError`] from validation.
    pub fn save_part(&self, part: PartConfig) -> Result<(), SessionError> {
        if !self.context.role.can_configure() {
            return Err(SessionError::ReadOnly {
                role: self.context.role,
            });
        }
        self.store.upsert(part)?;
        Ok(())
    }

    /// Part catalog shared with the rest of the station
    #[must_use]
    pub fn store(&self) -> &Arc<PartStore> {
        &self.store
    }

    /// End-of-shift reset back to a clean slate
    ///
    /// Restores the worksheet to its untouched template, reopens the
    /// disposition, and drops the scanned lot, the certificate, the
    /// ledger, and the production reports. Idempotent: a second reset
    /// leaves the same clean slate. The shift log keeps its history
    /// with a reset marker appended.
    pub fn reset_shift(&mut self) {
        self.worksheet.reset();
        self.disposition.reset();
        self.context.clear_lot();
        self.shipments = None;
        self.certificate = None;
        self.production.clear();
        self.log.append(ShiftEvent::ShiftReset);
        tracing::info!("Shift reset by {}", self.context.inspector);
    }

    fn ensure_open(&self) -> Result<(), SessionError> {
        if self.disposition.is_decided() {
            return Err(DispositionError::AlreadyDecided(self.disposition.state()).into());
        }
        Ok(())
    }

    fn ensure_measuring_role(&self) -> Result<(), SessionError> {
        if self.context.role.can_measure() {
            Ok(())
        } else {
            Err(SessionError::ReadOnly {
                role: self.context.role,
            })
        }
    }

    fn ensure_disposition_role(&self) -> Result<(), SessionError> {
        if self.context.role.can_disposition() {
            Ok(())
        } else {
            Err(SessionError::ReadOnly {
                role: self.context.role,
            })
        }
    }

    fn lot_label(&self) -> &str {
        self.context.lot_number().unwrap_or("(unscanned)")
    }

    /// Assemble the certificate record from session state
    ///
    /// Identification falls back from the part config to the session
    /// overrides; whatever is still missing is the certifier's to
    /// refuse.
    fn certificate_record(&self) -> CertificateRecord {
        let (part_number, part_name) = self
            .worksheet
            .part()
            .map(|part| (part.part_number.clone(), part.part_name.clone()))
            .or_else(|| self.part_label.clone())
            .unwrap_or_default();

        let customer = self
            .customer
            .clone()
            .or_else(|| self.worksheet.part().and_then(|part| part.customer.clone()))
            .unwrap_or_default();

        let lot = self.context.lot.as_ref();
        let lot_number = lot.map_or_else(String::new, |lot| lot.lot_number.clone());
        let quantity = lot.map_or(0, |lot| lot.quantity);

        let mut record = CertificateRecord::new(
            customer,
            part_number,
            part_name,
            lot_number,
            quantity,
            self.context.inspector.clone(),
        )
        .with_citations(self.worksheet.citations());

        if let Some(heat) = lot.and_then(|lot| lot.heat_number.clone()) {
            record = record.with_heat_number(heat);
        }
        record
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fpi_spec::{CharacteristicSpec, SpecTemplate};

    fn fixed_session(role: Role) -> InspectionSession {
        let template = SpecTemplate::new(vec![
            CharacteristicSpec::new(1, "Bore Diameter", "Bore Gauge", 0.495, 0.505),
            CharacteristicSpec::new(2, "Face Runout", "Indicator", 0.0, 0.002),
        ])
        .unwrap();
        InspectionSession::new(
            SessionConfig::new(role, "R. Alvarez"),
            Worksheet::fixed(template),
        )
    }

    #[test]
    fn operator_cannot_record() {
        let mut session = fixed_session(Role::Operator);
        let err = session.record_measurement(SpecId(1), Some(0.5)).unwrap_err();
        assert!(matches!(err, SessionError::ReadOnly { role: Role::Operator }));
        assert_eq!(session.summary().pending, 2);
    }

    #[test]
    fn unknown_id_is_a_quiet_no_op() {
        let mut session = fixed_session(Role::Inspector);
        assert_eq!(session.record_measurement(SpecId(99), Some(0.5)).unwrap(), None);
        assert!(session.events().is_empty());
    }

    #[test]
    fn approve_refuses_incomplete_sheet() {
        let mut session = fixed_session(Role::Inspector);
        session.record_measurement(SpecId(1), Some(0.5)).unwrap();

        let err = session.approve().unwrap_err();
        assert_eq!(
            err,
            SessionError::Disposition(DispositionError::IncompleteInspection { pending: 1 })
        );
        assert!(!session.released());
    }

    #[test]
    fn manager_cannot_disposition() {
        let mut session = fixed_session(Role::Manager);
        let err = session.approve().unwrap_err();
        assert!(matches!(err, SessionError::ReadOnly { role: Role::Manager }));
    }

    #[test]
    fn ship_requires_release() {
        let mut session = fixed_session(Role::Inspector);
        assert_eq!(session.ship(10).unwrap_err(), SessionError::NotReleased);
    }

    #[test]
    fn production_report_feeds_kpis() {
        let mut session = fixed_session(Role::Operator);
        session.report_production("J. Okafor", 160, 8).unwrap();
        session.report_production("J. Okafor", 40, 0).unwrap();

        let kpis = session.kpis();
        assert_eq!(kpis.produced, 200);
        assert_eq!(kpis.defective, 8);
        assert_eq!(kpis.defect_rate, 0.04);
    }

    #[test]
    fn engineer_saves_parts_but_operator_cannot() {
        let engineer = fixed_session(Role::Engineer);
        let part = PartConfig::new("PN-9001", "Test Plug");
        engineer.save_part(part.clone()).unwrap();
        assert!(engineer.store().get("PN-9001").is_some());

        let operator = fixed_session(Role::Operator);
        let err = operator.save_part(part).unwrap_err();
        assert!(matches!(err, SessionError::ReadOnly { role: Role::Operator }));
    }
}
