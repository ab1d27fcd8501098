//! Shipments drawn against a released lot

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Shipment refused by the ledger
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ShipmentError {
    /// Zero pieces is not a shipment
    #[error("shipment quantity must be positive")]
    ZeroQuantity,

    /// More pieces than the lot has left
    #[error("cannot ship {requested}: only {remaining} of {lot_quantity} remain")]
    ExceedsRemaining {
        /// Pieces requested
        requested: u32,
        /// Pieces still available
        remaining: u32,
        /// Pieces the lot started with
        lot_quantity: u32,
    },
}

/// One recorded shipment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shipment {
    /// Pieces in this shipment
    pub quantity: u32,

    /// When it was recorded
    pub shipped_at: DateTime<Utc>,
}

/// Running total of shipments against one lot's quantity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShipmentLedger {
    lot_quantity: u32,
    shipments: Vec<Shipment>,
}

impl ShipmentLedger {
    /// Open a ledger over a lot's piece count
    #[must_use]
    pub fn new(lot_quantity: u32) -> Self {
        Self {
            lot_quantity,
            shipments: Vec::new(),
        }
    }

    /// Record one shipment
    ///
    /// # Errors
    /// - [`ShipmentError::ZeroQuantity`] for an empty shipment
    /// - [`ShipmentError::ExceedsRemaining`] for over-shipment
    pub fn record(&mut self, quantity: u32) -> Result<(), ShipmentError> {
        if quantity == 0 {
            return Err(ShipmentError::ZeroQuantity);
        }

        let remaining = self.remaining();
        if quantity > remaining {
            return Err(ShipmentError::ExceedsRemaining {
                requested: quantity,
                remaining,
                lot_quantity: self.lot_quantity,
            });
        }

        self.shipments.push(Shipment {
            quantity,
            shipped_at: Utc::now(),
        });
        Ok(())
    }

    /// Pieces the lot started with
    #[inline]
    #[must_use]
    pub fn lot_quantity(&self) -> u32 {
        self.lot_quantity
    }

    /// Pieces shipped so far
    #[must_use]
    pub fn shipped(&self) -> u32 {
        self.shipments.iter().map(|s| s.quantity).sum()
    }

    /// Pieces still available to ship
    #[must_use]
    pub fn remaining(&self) -> u32 {
        self.lot_quantity.saturating_sub(self.shipped())
    }

    /// Check if nothing is left to ship
    #[must_use]
    pub fn fully_shipped(&self) -> bool {
        self.remaining() == 0
    }

    /// Every shipment, oldest first
    #[inline]
    #[must_use]
    pub fn shipments(&self) -> &[Shipment] {
        &self.shipments
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_shipments_accumulate() {
        let mut ledger = ShipmentLedger::new(100);

        ledger.record(60).unwrap();
        assert_eq!(ledger.shipped(), 60);
        assert_eq!(ledger.remaining(), 40);
        assert!(!ledger.fully_shipped());

        ledger.record(40).unwrap();
        assert!(ledger.fully_shipped());
        assert_eq!(ledger.shipments().len(), 2);
    }

    #[test]
    fn zero_shipment_refused() {
        let mut ledger = ShipmentLedger::new(100);
        assert_eq!(ledger.record(0).unwrap_err(), ShipmentError::ZeroQuantity);
    }

    #[test]
    fn over_shipment_refused() {
        let mut ledger = ShipmentLedger::new(100);
        ledger.record(70).unwrap();

        let err = ledger.record(31).unwrap_err();
        assert_eq!(
            err,
            ShipmentError::ExceedsRemaining {
                requested: 31,
                remaining: 30,
                lot_quantity: 100,
            }
        );
        assert_eq!(ledger.shipped(), 70);
    }

    #[test]
    fn empty_lot_accepts_nothing() {
        let mut ledger = ShipmentLedger::new(0);
        assert!(ledger.fully_shipped());
        assert!(matches!(
            ledger.record(1).unwrap_err(),
            ShipmentError::ExceedsRemaining { .. }
        ));
    }
}
