//! Per-fuel stock levels and prices.

use crate::Amount;
use crate::model::FuelType;

use super::InsufficientStock;

/// Stock below this many units triggers a low-stock warning.
const LOW_STOCK_THRESHOLD: Amount = Amount::from_scaled(50_000_000); // 5000.00

#[derive(Debug, Clone, Copy)]
struct FuelStock {
    price: Amount,
    opening: Amount,
    current: Amount,
}

/// Fuel inventory: opening stock, current stock and the unit price charged
/// for each grade. Prices are fixed for the lifetime of a run.
#[derive(Debug)]
pub struct Inventory {
    stocks: [FuelStock; FuelType::COUNT],
}

impl Inventory {
    /// Inventory at opening: 50 000 L petrol, 50 000 L diesel, 20 000 kg CNG.
    pub fn new() -> Self {
        let stocks = FuelType::ALL.map(|fuel| {
            let opening = match fuel {
                FuelType::Petrol | FuelType::Diesel => Amount::from_scaled(500_000_000),
                FuelType::Cng => Amount::from_scaled(200_000_000),
            };
            FuelStock {
                price: fuel.unit_price(),
                opening,
                current: opening,
            }
        });
        Self { stocks }
    }

    pub fn price(&self, fuel: FuelType) -> Amount {
        self.stocks[fuel.index()].price
    }

    pub fn opening_stock(&self, fuel: FuelType) -> Amount {
        self.stocks[fuel.index()].opening
    }

    pub fn current_stock(&self, fuel: FuelType) -> Amount {
        self.stocks[fuel.index()].current
    }

    /// Take `quantity` out of stock, refusing to go negative.
    pub fn deduct(&mut self, fuel: FuelType, quantity: Amount) -> Result<(), InsufficientStock> {
        let stock = &mut self.stocks[fuel.index()];
        if quantity > stock.current {
            return Err(InsufficientStock {
                fuel,
                available: stock.current,
                requested: quantity,
            });
        }
        stock.current -= quantity;
        Ok(())
    }

    /// Add a delivery to stock.
    pub fn add_supply(&mut self, fuel: FuelType, quantity: Amount) {
        self.stocks[fuel.index()].current += quantity;
    }

    /// Fuels currently below the low-stock threshold, with what is left.
    pub fn low_stock(&self) -> impl Iterator<Item = (FuelType, Amount)> + '_ {
        FuelType::ALL.into_iter().filter_map(|fuel| {
            let current = self.current_stock(fuel);
            (current < LOW_STOCK_THRESHOLD).then_some((fuel, current))
        })
    }
}

impl Default for Inventory {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opening_stock_levels() {
        let inventory = Inventory::new();
        assert_eq!(
            inventory.current_stock(FuelType::Petrol),
            Amount::from_float(50_000.0)
        );
        assert_eq!(
            inventory.current_stock(FuelType::Diesel),
            Amount::from_float(50_000.0)
        );
        assert_eq!(
            inventory.current_stock(FuelType::Cng),
            Amount::from_float(20_000.0)
        );
        for fuel in FuelType::ALL {
            assert_eq!(inventory.opening_stock(fuel), inventory.current_stock(fuel));
        }
    }

    #[test]
    fn deduct_reduces_stock() {
        let mut inventory = Inventory::new();
        inventory
            .deduct(FuelType::Diesel, Amount::from_float(25.0))
            .unwrap();
        assert_eq!(
            inventory.current_stock(FuelType::Diesel),
            Amount::from_float(49_975.0)
        );
    }

    #[test]
    fn deduct_exact_stock_succeeds() {
        let mut inventory = Inventory::new();
        inventory
            .deduct(FuelType::Cng, Amount::from_float(20_000.0))
            .unwrap();
        assert_eq!(inventory.current_stock(FuelType::Cng), Amount::default());
    }

    #[test]
    fn deduct_beyond_stock_fails_and_changes_nothing() {
        let mut inventory = Inventory::new();
        let err = inventory
            .deduct(FuelType::Cng, Amount::from_float(20_001.0))
            .unwrap_err();
        assert_eq!(err.fuel, FuelType::Cng);
        assert_eq!(err.available, Amount::from_float(20_000.0));
        assert_eq!(err.requested, Amount::from_float(20_001.0));
        assert_eq!(
            inventory.current_stock(FuelType::Cng),
            Amount::from_float(20_000.0)
        );
    }

    #[test]
    fn add_supply_raises_stock_but_not_opening() {
        let mut inventory = Inventory::new();
        inventory.add_supply(FuelType::Petrol, Amount::from_float(1_500.0));
        assert_eq!(
            inventory.current_stock(FuelType::Petrol),
            Amount::from_float(51_500.0)
        );
        assert_eq!(
            inventory.opening_stock(FuelType::Petrol),
            Amount::from_float(50_000.0)
        );
    }

    #[test]
    fn low_stock_flags_fuels_under_the_threshold() {
        let mut inventory = Inventory::new();
        assert_eq!(inventory.low_stock().count(), 0);

        inventory
            .deduct(FuelType::Diesel, Amount::from_float(45_500.0))
            .unwrap();
        let flagged: Vec<_> = inventory.low_stock().collect();
        assert_eq!(
            flagged,
            vec![(FuelType::Diesel, Amount::from_float(4_500.0))]
        );
    }

    #[test]
    fn stock_at_the_threshold_is_not_flagged() {
        let mut inventory = Inventory::new();
        inventory
            .deduct(FuelType::Petrol, Amount::from_float(45_000.0))
            .unwrap();
        assert_eq!(inventory.low_stock().count(), 0);
    }
}
