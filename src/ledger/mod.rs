//! The transaction ledger.
//!
//! An append-only record store plus four revenue projections (fuel-wise,
//! pump-wise, hour-wise, payment-mode-wise) maintained in lockstep with
//! every append, so reporting never re-scans the history.

use std::collections::HashMap;

use chrono::{DateTime, Local, Timelike};
use tracing::info;

use crate::Amount;
use crate::model::{FuelType, PaymentMode, PumpId, Sale, Transaction, TxnId};

mod error;
pub use error::StorageExhausted;

mod store;
pub use store::TxStore;

/// Dispensed quantity and billed amount accumulated for one bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Totals {
    pub quantity: Amount,
    pub amount: Amount,
}

/// Per-pump accumulators: how many sales, how much dispensed, how much billed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PumpTotals {
    pub transactions: u64,
    pub quantity: Amount,
    pub amount: Amount,
}

/// The append-only transaction ledger.
///
/// Owns the growable record store, the monotonic id sequence, and the four
/// aggregate projections. Recording is the sole mutation entry point; the
/// listing and snapshot accessors are pure reads.
pub struct TransactionLedger {
    store: TxStore,
    /// Strictly increases for the process lifetime; ids are never reused.
    sequence: u64,
    fuel_totals: [Totals; FuelType::COUNT],
    pump_totals: HashMap<PumpId, PumpTotals>,
    hour_totals: [Totals; 24],
    payment_totals: [Amount; PaymentMode::COUNT],
}

impl TransactionLedger {
    pub fn new() -> Self {
        Self::with_store(TxStore::new())
    }

    pub fn with_store(store: TxStore) -> Self {
        Self {
            store,
            sequence: 0,
            fuel_totals: [Totals::default(); FuelType::COUNT],
            pump_totals: HashMap::new(),
            hour_totals: [Totals::default(); 24],
            payment_totals: [Amount::default(); PaymentMode::COUNT],
        }
    }

    /// Record a validated sale, stamping the current wall-clock time.
    ///
    /// Assigns the next transaction id, appends to the store (growing it if
    /// full), and updates all four projections as one logical step. Returns
    /// the stored record so the caller can render a receipt directly.
    pub fn record(&mut self, sale: Sale) -> Result<&Transaction, StorageExhausted> {
        self.record_at(sale, Local::now())
    }

    /// [`record`](Self::record) with an explicit timestamp.
    ///
    /// Either the whole step succeeds, or the ledger is left exactly as it
    /// was: capacity is secured before the sequence, store or any
    /// projection is touched.
    pub fn record_at(
        &mut self,
        sale: Sale,
        at: DateTime<Local>,
    ) -> Result<&Transaction, StorageExhausted> {
        debug_assert!(sale.quantity.is_positive());
        debug_assert!(sale.amount.is_positive());

        self.store.ensure_capacity()?;

        self.sequence += 1;
        let tx = Transaction {
            id: TxnId::new(at, self.sequence),
            timestamp: at,
            pump: sale.pump,
            fuel: sale.fuel,
            vehicle: sale.vehicle,
            payment: sale.payment,
            quantity: sale.quantity,
            amount: sale.amount,
        };

        let fuel = &mut self.fuel_totals[tx.fuel.index()];
        fuel.quantity += tx.quantity;
        fuel.amount += tx.amount;

        let pump = self.pump_totals.entry(tx.pump).or_default();
        pump.transactions += 1;
        pump.quantity += tx.quantity;
        pump.amount += tx.amount;

        let hour = &mut self.hour_totals[tx.timestamp.hour() as usize];
        hour.quantity += tx.quantity;
        hour.amount += tx.amount;

        self.payment_totals[tx.payment.index()] += tx.amount;

        let stored = self.store.push(tx);
        info!(
            id = %stored.id,
            pump = stored.pump,
            fuel = %stored.fuel,
            quantity = %stored.quantity,
            amount = %stored.amount,
            "transaction recorded"
        );
        Ok(stored)
    }

    /// Recorded transactions, most recent first.
    ///
    /// Each call yields an independent traversal; nothing is mutated.
    pub fn recent(&self) -> impl Iterator<Item = &Transaction> {
        self.store.iter().rev()
    }

    /// Transaction at `index` in insertion order.
    pub fn get(&self, index: usize) -> Option<&Transaction> {
        self.store.get(index)
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.store.capacity()
    }

    /// Quantity and revenue dispensed for one fuel grade.
    pub fn fuel_total(&self, fuel: FuelType) -> Totals {
        self.fuel_totals[fuel.index()]
    }

    /// Sale count, quantity and revenue for one pump. Pumps the ledger has
    /// never seen report zeros.
    pub fn pump_total(&self, pump: PumpId) -> PumpTotals {
        self.pump_totals.get(&pump).copied().unwrap_or_default()
    }

    /// Quantity and revenue for one hour of the day (0–23). Out-of-range
    /// hours report zeros.
    pub fn hour_total(&self, hour: usize) -> Totals {
        self.hour_totals.get(hour).copied().unwrap_or_default()
    }

    /// Revenue collected through one payment mode.
    pub fn payment_total(&self, mode: PaymentMode) -> Amount {
        self.payment_totals[mode.index()]
    }

    /// Grand totals across every fuel grade.
    pub fn total_sales(&self) -> Totals {
        let mut totals = Totals::default();
        for per_fuel in &self.fuel_totals {
            totals.quantity += per_fuel.quantity;
            totals.amount += per_fuel.amount;
        }
        totals
    }
}

impl Default for TransactionLedger {
    fn default() -> Self {
        Self::new()
    }
}
