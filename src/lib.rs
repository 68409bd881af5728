pub mod amount;
pub mod cli;
pub mod ledger;
pub mod model;
pub mod report;
pub mod station;

pub use amount::Amount;
pub use ledger::TransactionLedger;
pub use model::{FuelType, PaymentMode, PumpId, PumpStatus, Sale, Transaction, TxnId, VehicleType};
pub use station::Station;
