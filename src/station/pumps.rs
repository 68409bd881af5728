//! The fixed set of dispensing pumps.

use serde::{Deserialize, Serialize};

use crate::model::{FuelType, PumpId, PumpStatus};

use super::UnknownPump;

/// Number of pumps installed at the station.
pub const PUMP_COUNT: usize = 6;

/// One dispensing unit, bound to a single fuel grade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pump {
    pub id: PumpId,
    pub fuel: FuelType,
    pub status: PumpStatus,
}

/// The station's pumps: ids 1–2 petrol, 3–4 diesel, 5–6 CNG, all active
/// at startup. Per-sale statistics live in the ledger's pump-wise
/// projection, not here.
#[derive(Debug)]
pub struct PumpRegistry {
    pumps: Vec<Pump>,
}

impl PumpRegistry {
    pub fn new() -> Self {
        let pumps = (1..=PUMP_COUNT as PumpId)
            .map(|id| {
                let fuel = match id {
                    1 | 2 => FuelType::Petrol,
                    3 | 4 => FuelType::Diesel,
                    _ => FuelType::Cng,
                };
                Pump {
                    id,
                    fuel,
                    status: PumpStatus::Active,
                }
            })
            .collect();
        Self { pumps }
    }

    pub fn get(&self, id: PumpId) -> Option<&Pump> {
        self.pumps.iter().find(|pump| pump.id == id)
    }

    pub fn status_of(&self, id: PumpId) -> Option<PumpStatus> {
        self.get(id).map(|pump| pump.status)
    }

    pub fn fuel_type_of(&self, id: PumpId) -> Option<FuelType> {
        self.get(id).map(|pump| pump.fuel)
    }

    pub fn set_status(&mut self, id: PumpId, status: PumpStatus) -> Result<(), UnknownPump> {
        let pump = self
            .pumps
            .iter_mut()
            .find(|pump| pump.id == id)
            .ok_or(UnknownPump(id))?;
        pump.status = status;
        Ok(())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Pump> {
        self.pumps.iter()
    }
}

impl Default for PumpRegistry {
    fn default() -> Self {
        Self::new()
    }
}
