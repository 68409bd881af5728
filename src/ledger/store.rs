//! Growable backing store for recorded transactions.

use crate::model::Transaction;

use super::StorageExhausted;

/// Records preallocated at startup.
const INITIAL_CAPACITY: usize = 50;
/// Smaller increment tried once when doubling cannot be satisfied.
const FALLBACK_INCREMENT: usize = 50;

/// Append-only transaction storage with an explicit growth policy.
///
/// When full, capacity is doubled; if the doubling reservation fails, a
/// fixed +50 increment is tried once; if that fails too, the append is
/// refused with [`StorageExhausted`] and the store is unchanged. Growth
/// never moves or drops previously stored records.
#[derive(Debug)]
pub struct TxStore {
    entries: Vec<Transaction>,
    /// Hard ceiling on capacity, standing in for allocator refusal.
    grow_limit: Option<usize>,
}

impl TxStore {
    pub fn new() -> Self {
        Self::with_initial_capacity(INITIAL_CAPACITY)
    }

    /// Store starting at `initial` capacity. `initial` must be nonzero.
    pub fn with_initial_capacity(initial: usize) -> Self {
        debug_assert!(initial > 0);
        Self {
            entries: Vec::with_capacity(initial),
            grow_limit: None,
        }
    }

    /// Store whose capacity may never exceed `limit`.
    pub fn with_growth_limit(initial: usize, limit: usize) -> Self {
        let mut store = Self::with_initial_capacity(initial);
        store.grow_limit = Some(limit);
        store
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.entries.capacity()
    }

    pub fn get(&self, index: usize) -> Option<&Transaction> {
        self.entries.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Transaction> {
        self.entries.iter()
    }

    /// Make room for one more record, growing if the store is full.
    ///
    /// On failure nothing changes: length, capacity and every stored
    /// record are exactly as before the call.
    pub fn ensure_capacity(&mut self) -> Result<(), StorageExhausted> {
        let capacity = self.entries.capacity();
        if self.entries.len() < capacity {
            return Ok(());
        }
        if self.try_grow_to(capacity * 2) {
            return Ok(());
        }
        if self.try_grow_to(capacity + FALLBACK_INCREMENT) {
            return Ok(());
        }
        Err(StorageExhausted { capacity })
    }

    /// Append a record. Caller must have called [`ensure_capacity`] first;
    /// the append itself never reallocates.
    ///
    /// [`ensure_capacity`]: Self::ensure_capacity
    pub fn push(&mut self, tx: Transaction) -> &Transaction {
        debug_assert!(self.entries.len() < self.entries.capacity());
        let index = self.entries.len();
        self.entries.push(tx);
        &self.entries[index]
    }

    fn try_grow_to(&mut self, target: usize) -> bool {
        if let Some(limit) = self.grow_limit {
            if target > limit {
                return false;
            }
        }
        let additional = target - self.entries.len();
        self.entries.try_reserve_exact(additional).is_ok()
    }
}

impl Default for TxStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{FuelType, PaymentMode, Sale, TxnId, VehicleType};
    use crate::Amount;
    use chrono::{Local, TimeZone};

    fn sample_tx(seq: u64) -> Transaction {
        let at = Local.with_ymd_and_hms(2025, 11, 2, 12, 0, 0).unwrap();
        let sale = Sale {
            pump: 1,
            fuel: FuelType::Petrol,
            vehicle: VehicleType::FourWheeler,
            payment: PaymentMode::Cash,
            quantity: Amount::from_float(10.0),
            amount: Amount::from_float(1025.0),
        };
        Transaction {
            id: TxnId::new(at, seq),
            timestamp: at,
            pump: sale.pump,
            fuel: sale.fuel,
            vehicle: sale.vehicle,
            payment: sale.payment,
            quantity: sale.quantity,
            amount: sale.amount,
        }
    }

    fn fill(store: &mut TxStore, count: u64) {
        for seq in 1..=count {
            store.ensure_capacity().unwrap();
            store.push(sample_tx(seq));
        }
    }

    #[test]
    fn new_store_preallocates_fifty() {
        let store = TxStore::new();
        assert_eq!(store.len(), 0);
        assert!(store.is_empty());
        assert_eq!(store.capacity(), 50);
    }

    #[test]
    fn push_within_capacity_does_not_grow() {
        let mut store = TxStore::with_initial_capacity(4);
        fill(&mut store, 4);
        assert_eq!(store.len(), 4);
        assert_eq!(store.capacity(), 4);
    }

    #[test]
    fn full_store_doubles() {
        let mut store = TxStore::with_initial_capacity(4);
        fill(&mut store, 5);
        assert_eq!(store.len(), 5);
        assert!(store.capacity() >= 8);
    }

    #[test]
    fn growth_keeps_every_stored_record() {
        let mut store = TxStore::with_initial_capacity(4);
        fill(&mut store, 9);
        for (index, seq) in (1..=9u64).enumerate() {
            assert_eq!(store.get(index).unwrap().id, sample_tx(seq).id);
        }
        assert!(store.get(9).is_none());
    }

    #[test]
    fn fallback_increment_applies_when_doubling_is_refused() {
        // Doubling 60 -> 120 exceeds the limit; 60 + 50 = 110 does not.
        let mut store = TxStore::with_growth_limit(60, 115);
        fill(&mut store, 60);
        assert_eq!(store.capacity(), 60);

        store.ensure_capacity().unwrap();
        store.push(sample_tx(61));
        assert!(store.capacity() >= 110);
        assert!(store.capacity() <= 115);
        assert_eq!(store.len(), 61);
    }

    #[test]
    fn exhausted_store_is_left_untouched() {
        // Both the doubled and the fallback capacity exceed the limit.
        let mut store = TxStore::with_growth_limit(3, 3);
        fill(&mut store, 3);

        let err = store.ensure_capacity().unwrap_err();
        assert_eq!(err, StorageExhausted { capacity: 3 });
        assert_eq!(store.len(), 3);
        assert_eq!(store.capacity(), 3);
        for (index, seq) in (1..=3u64).enumerate() {
            assert_eq!(store.get(index).unwrap().id, sample_tx(seq).id);
        }
    }
}
