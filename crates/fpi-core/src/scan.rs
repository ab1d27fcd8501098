//! Lot scanning: format validation, directory lookup, in-flight gate
//!
//! The directory lookup is the session's one asynchronous boundary.
//! Exactly one scan may be in flight: duplicate starts are suppressed
//! with [`LookupError::ScanInProgress`], never queued or cancelled.

use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

// Known barcode prefixes: lot, heat, work order, purchase order.
static PREFIXED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:LOT|HT|WO|PO)-?[0-9]{3,}$").unwrap());

// Fallback for unprefixed labels: 6+ chars, alphanumeric with
// internal dashes.
static GENERIC: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Z0-9][A-Z0-9-]{4,}[A-Z0-9]$").unwrap());

/// Minimum characters a scan can carry and still mean anything
pub const MIN_SCAN_LEN: usize = 4;

/// Lot metadata resolved from a scan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LotInfo {
    /// Normalized lot number
    pub lot_number: String,

    /// Heat number of the raw material, if tracked
    pub heat_number: Option<String>,

    /// Part number the lot was run against, if known
    pub part_number: Option<String>,

    /// Pieces in the lot
    pub quantity: u32,
}

impl LotInfo {
    /// Create lot metadata
    #[must_use]
    pub fn new(lot_number: impl Into<String>, quantity: u32) -> Self {
        Self {
            lot_number: lot_number.into(),
            heat_number: None,
            part_number: None,
            quantity,
        }
    }

    /// With heat number
    #[inline]
    #[must_use]
    pub fn with_heat_number(mut self, heat_number: impl Into<String>) -> Self {
        self.heat_number = Some(heat_number.into());
        self
    }

    /// With part number
    #[inline]
    #[must_use]
    pub fn with_part_number(mut self, part_number: impl Into<String>) -> Self {
        self.part_number = Some(part_number.into());
        self
    }
}

/// Scan or lookup failure, surfaced as a value with a user-facing message
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    /// Scanned string does not look like a lot label
    #[error("scan not recognized: {0}")]
    InvalidFormat(String),

    /// Directory has no such lot
    #[error("lot {0} not found")]
    NotFound(String),

    /// Directory could not be reached
    #[error("lot lookup unavailable: {0}")]
    ServiceUnavailable(String),

    /// A scan is already running; this one was suppressed
    #[error("scan already in progress")]
    ScanInProgress,
}

/// Validate and normalize a raw scan
///
/// Trims and uppercases, then accepts either a known-prefix label
/// (`LOT`/`HT`/`WO`/`PO` plus digits) or a generic 6+ character
/// alphanumeric label.
///
/// # Errors
/// [`LookupError::InvalidFormat`] with the reason the scan was refused.
pub fn validate_scan(raw: &str) -> Result<String, LookupError> {
    let normalized = raw.trim().to_ascii_uppercase();

    if normalized.len() < MIN_SCAN_LEN {
        return Err(LookupError::InvalidFormat(format!(
            "too short (minimum {MIN_SCAN_LEN} characters)"
        )));
    }
    if PREFIXED.is_match(&normalized) || GENERIC.is_match(&normalized) {
        Ok(normalized)
    } else {
        Err(LookupError::InvalidFormat(
            "not a recognized lot label".to_string(),
        ))
    }
}

/// Resolves normalized lot numbers to metadata
#[async_trait]
pub trait LotDirectory: Send + Sync + std::fmt::Debug {
    /// Look up one lot
    ///
    /// # Errors
    /// [`LookupError::NotFound`] or [`LookupError::ServiceUnavailable`].
    async fn find_lot(&self, lot_number: &str) -> Result<LotInfo, LookupError>;
}

/// In-memory lot directory with demo seeds and a switchable outage
#[derive(Debug)]
pub struct MockLotDirectory {
    lots: HashMap<String, LotInfo>,
    offline: AtomicBool,
}

impl MockLotDirectory {
    /// Create an empty directory
    #[must_use]
    pub fn new() -> Self {
        Self {
            lots: HashMap::new(),
            offline: AtomicBool::new(false),
        }
    }

    /// Directory seeded with demo lots matching the demo catalog
    #[must_use]
    pub fn with_demo_lots() -> Self {
        let mut directory = Self::new();
        directory.insert(
            LotInfo::new("LOT-240815", 250)
                .with_heat_number("H-7731")
                .with_part_number("PN-1042"),
        );
        directory.insert(
            LotInfo::new("LOT-240901", 100)
                .with_heat_number("H-7790")
                .with_part_number("PN-2077"),
        );
        directory.insert(LotInfo::new("WO-88012", 40).with_part_number("PN-1042"));
        directory
    }

    /// Add or replace a lot
    pub fn insert(&mut self, lot: LotInfo) {
        self.lots.insert(lot.lot_number.clone(), lot);
    }

    /// Simulate the backing service dropping out (or coming back)
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }
}

impl Default for MockLotDirectory {
    fn default() -> Self {
        Self::with_demo_lots()
    }
}

#[async_trait]
impl LotDirectory for MockLotDirectory {
    async fn find_lot(&self, lot_number: &str) -> Result<LotInfo, LookupError> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(LookupError::ServiceUnavailable(
                "directory offline".to_string(),
            ));
        }

        self.lots
            .get(lot_number)
            .cloned()
            .ok_or_else(|| LookupError::NotFound(lot_number.to_string()))
    }
}

/// Drives scans against a directory, one at a time
///
/// The gate is a plain boolean: a second `scan` while one is running is
/// refused immediately, and the caller retries after the first
/// completes.
#[derive(Debug, Clone)]
pub struct LotScanner {
    directory: Arc<dyn LotDirectory>,
    in_flight: Arc<AtomicBool>,
}

impl LotScanner {
    /// Create a scanner over a directory
    #[must_use]
    pub fn new(directory: Arc<dyn LotDirectory>) -> Self {
        Self {
            directory,
            in_flight: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Scanner over the demo directory
    #[must_use]
    pub fn with_demo_directory() -> Self {
        Self::new(Arc::new(MockLotDirectory::with_demo_lots()))
    }

    /// Check if a scan is currently running
    #[inline]
    #[must_use]
    pub fn is_scanning(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst)
    }

    /// Validate the raw scan and resolve it through the directory
    ///
    /// Format rejection happens before the gate, so a mistyped label
    /// never blocks the next attempt.
    ///
    /// # Errors
    /// [`LookupError`] for format, lookup, and duplicate-start failures.
    pub async fn scan(&self, raw: &str) -> Result<LotInfo, LookupError> {
        let lot_number = validate_scan(raw)?;

        if self.in_flight.swap(true, Ordering::SeqCst) {
            tracing::debug!("Suppressed duplicate scan of {}", lot_number);
            return Err(LookupError::ScanInProgress);
        }

        let result = self.directory.find_lot(&lot_number).await;
        self.in_flight.store(false, Ordering::SeqCst);

        match &result {
            Ok(lot) => tracing::info!("Scanned lot {} (qty {})", lot.lot_number, lot.quantity),
            Err(e) => tracing::warn!("Lot scan failed: {}", e),
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scan_format_accepts_prefixes_and_generic() {
        assert_eq!(validate_scan("LOT-240815").unwrap(), "LOT-240815");
        assert_eq!(validate_scan("lot-240815").unwrap(), "LOT-240815");
        assert_eq!(validate_scan("  HT-5521 ").unwrap(), "HT-5521");
        assert_eq!(validate_scan("WO88012").unwrap(), "WO88012");
        assert_eq!(validate_scan("PO-10077").unwrap(), "PO-10077");
        // Generic fallback: no known prefix, 6+ alphanumeric.
        assert_eq!(validate_scan("A1B2C3").unwrap(), "A1B2C3");
        assert_eq!(validate_scan("X-2024-117").unwrap(), "X-2024-117");
    }

    #[test]
    fn scan_format_rejections() {
        assert!(matches!(
            validate_scan("LO"),
            Err(LookupError::InvalidFormat(_))
        ));
        assert!(matches!(
            validate_scan("ABC12"),
            Err(LookupError::InvalidFormat(_))
        ));
        assert!(matches!(
            validate_scan("LOT 240815"),
            Err(LookupError::InvalidFormat(_))
        ));
        assert!(matches!(
            validate_scan("-ABC123-"),
            Err(LookupError::InvalidFormat(_))
        ));
    }

    #[tokio::test]
    async fn scanner_resolves_demo_lot() {
        let scanner = LotScanner::with_demo_directory();

        let lot = scanner.scan("lot-240815").await.unwrap();
        assert_eq!(lot.lot_number, "LOT-240815");
        assert_eq!(lot.part_number.as_deref(), Some("PN-1042"));
        assert!(!scanner.is_scanning());
    }

    #[tokio::test]
    async fn scanner_reports_unknown_lot() {
        let scanner = LotScanner::with_demo_directory();

        let err = scanner.scan("LOT-999999").await.unwrap_err();
        assert_eq!(err, LookupError::NotFound("LOT-999999".to_string()));
        // Gate released after the failure.
        assert!(!scanner.is_scanning());
    }

    #[tokio::test]
    async fn scanner_surfaces_outage_and_recovers() {
        let directory = Arc::new(MockLotDirectory::with_demo_lots());
        let scanner = LotScanner::new(directory.clone());

        directory.set_offline(true);
        assert!(matches!(
            scanner.scan("LOT-240815").await.unwrap_err(),
            LookupError::ServiceUnavailable(_)
        ));

        directory.set_offline(false);
        assert!(scanner.scan("LOT-240815").await.is_ok());
    }

    #[tokio::test]
    async fn duplicate_scan_suppressed_while_in_flight() {
        #[derive(Debug)]
        struct StallingDirectory {
            release: tokio::sync::Notify,
        }

        #[async_trait]
        impl LotDirectory for StallingDirectory {
            async fn find_lot(&self, lot_number: &str) -> Result<LotInfo, LookupError> {
                self.release.notified().await;
                Ok(LotInfo::new(lot_number, 1))
            }
        }

        let directory = Arc::new(StallingDirectory {
            release: tokio::sync::Notify::new(),
        });
        let scanner = LotScanner::new(directory.clone());

        let first = tokio::spawn({
            let scanner = scanner.clone();
            async move { scanner.scan("LOT-1001").await }
        });

        // Wait until the first scan holds the gate.
        while !scanner.is_scanning() {
            tokio::task::yield_now().await;
        }

        assert_eq!(
            scanner.scan("LOT-1001").await.unwrap_err(),
            LookupError::ScanInProgress
        );

        directory.release.notify_one();
        let lot = first.await.unwrap().unwrap();
        assert_eq!(lot.lot_number, "LOT-1001");
        assert!(!scanner.is_scanning());
    }

    #[tokio::test]
    async fn invalid_format_does_not_consume_gate() {
        let scanner = LotScanner::with_demo_directory();

        assert!(scanner.scan("??").await.is_err());
        assert!(!scanner.is_scanning());
        assert!(scanner.scan("LOT-240901").await.is_ok());
    }
}
