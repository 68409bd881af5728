//! Error types for station operations.

use thiserror::Error;

use crate::Amount;
use crate::ledger::StorageExhausted;
use crate::model::{FuelType, PumpId, PumpStatus};

/// Top-level error returned by [`Station::apply`](super::Station::apply).
#[derive(Debug, Error)]
pub enum StationError {
    #[error("sale failed: {0}")]
    Sale(#[from] SaleError),

    #[error("{0}")]
    Pump(#[from] UnknownPump),
}

/// Error during sale processing.
#[derive(Debug, Error)]
pub enum SaleError {
    #[error("unknown pump {0}")]
    UnknownPump(PumpId),

    #[error("pump {0} is not active (status: {1})")]
    PumpUnavailable(PumpId, PumpStatus),

    #[error("spend of {0:.2} is too small to dispense any fuel")]
    SpendTooSmall(Amount),

    #[error("{0}")]
    Stock(#[from] InsufficientStock),

    #[error("{0}")]
    Storage(#[from] StorageExhausted),
}

/// Requested more fuel than the inventory holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("insufficient {fuel} stock: available {available}, requested {requested}")]
pub struct InsufficientStock {
    pub fuel: FuelType,
    pub available: Amount,
    pub requested: Amount,
}

/// Pump id not present in the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unknown pump {0}")]
pub struct UnknownPump(pub PumpId);
