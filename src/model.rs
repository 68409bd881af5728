//! Core domain types for the fuel station.

use std::fmt;

use chrono::{DateTime, Datelike, Local, Timelike};
use serde::{Deserialize, Serialize};

use crate::Amount;

/// Pump identifier (1-based).
pub type PumpId = u8;

/// The three fuel grades the station dispenses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FuelType {
    Petrol,
    Diesel,
    Cng,
}

impl FuelType {
    pub const COUNT: usize = 3;
    pub const ALL: [FuelType; Self::COUNT] = [FuelType::Petrol, FuelType::Diesel, FuelType::Cng];

    pub const fn index(self) -> usize {
        self as usize
    }

    /// Fixed unit price per liter (Petrol, Diesel) or kg (CNG), in rupees.
    pub const fn unit_price(self) -> Amount {
        match self {
            FuelType::Petrol => Amount::from_scaled(1_025_000), // 102.50
            FuelType::Diesel => Amount::from_scaled(887_500),   // 88.75
            FuelType::Cng => Amount::from_scaled(750_000),      // 75.00
        }
    }

    /// Dispensing unit label for receipts and prompts.
    pub const fn unit(self) -> &'static str {
        match self {
            FuelType::Petrol | FuelType::Diesel => "liters",
            FuelType::Cng => "kg",
        }
    }
}

impl fmt::Display for FuelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FuelType::Petrol => "Petrol",
            FuelType::Diesel => "Diesel",
            FuelType::Cng => "CNG",
        };
        f.write_str(name)
    }
}

/// Operational state of a dispensing pump.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PumpStatus {
    Active,
    Inactive,
    Maintenance,
}

impl fmt::Display for PumpStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PumpStatus::Active => "Active",
            PumpStatus::Inactive => "Inactive",
            PumpStatus::Maintenance => "Maintenance",
        };
        f.write_str(name)
    }
}

/// Vehicle category served by a sale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VehicleType {
    TwoWheeler,
    FourWheeler,
    Commercial,
}

impl fmt::Display for VehicleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            VehicleType::TwoWheeler => "2-Wheeler",
            VehicleType::FourWheeler => "4-Wheeler",
            VehicleType::Commercial => "Commercial",
        };
        f.write_str(name)
    }
}

/// How a sale was paid for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentMode {
    Cash,
    Card,
    Wallet,
}

impl PaymentMode {
    pub const COUNT: usize = 3;
    pub const ALL: [PaymentMode; Self::COUNT] =
        [PaymentMode::Cash, PaymentMode::Card, PaymentMode::Wallet];

    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for PaymentMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PaymentMode::Cash => "Cash",
            PaymentMode::Card => "Credit Card",
            PaymentMode::Wallet => "Digital Wallet",
        };
        f.write_str(name)
    }
}

/// Ledger-assigned transaction identifier.
///
/// Format: `TXN` + 4-digit year + 2-digit month, day and hour + 5-digit
/// zero-padded sequence number. The sequence component alone guarantees
/// uniqueness; the time prefix keeps same-day ids lexicographically
/// non-decreasing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TxnId(String);

impl TxnId {
    pub fn new(at: DateTime<Local>, sequence: u64) -> Self {
        TxnId(format!(
            "TXN{:04}{:02}{:02}{:02}{:05}",
            at.year().rem_euclid(10_000),
            at.month(),
            at.day(),
            at.hour(),
            sequence
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TxnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A fully validated, not-yet-recorded sale.
///
/// Quantity and amount are both positive and already related by the unit
/// price; the ledger stores it verbatim and does not re-validate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sale {
    pub pump: PumpId,
    pub fuel: FuelType,
    pub vehicle: VehicleType,
    pub payment: PaymentMode,
    pub quantity: Amount,
    pub amount: Amount,
}

/// A recorded sale. Immutable once appended to the ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: TxnId,
    pub timestamp: DateTime<Local>,
    pub pump: PumpId,
    pub fuel: FuelType,
    pub vehicle: VehicleType,
    pub payment: PaymentMode,
    pub quantity: Amount,
    pub amount: Amount,
}

/// A sale as entered at the terminal, before validation and price math.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SaleRequest {
    pub pump: PumpId,
    pub vehicle: VehicleType,
    pub payment: PaymentMode,
    pub input: SaleInput,
}

/// Entry mode for a sale: dispense a quantity, or fill for a spend amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaleInput {
    Quantity(Amount),
    Spend(Amount),
}
