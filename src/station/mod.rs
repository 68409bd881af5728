//! The station aggregate and its command loop.
//!
//! `Station` owns the inventory, the pump registry and the transaction
//! ledger, constructed once at startup and passed explicitly — there is no
//! process-wide state. Sales are validated here and handed to the ledger;
//! everything else is dispatch to the read-only reporting views.

use tokio_stream::{Stream, StreamExt};
use tracing::{info, warn};

use crate::cli::{self, Command};
use crate::ledger::TransactionLedger;
use crate::model::{PumpStatus, Sale, SaleInput, SaleRequest, Transaction};
use crate::report;

mod inventory;
pub use inventory::Inventory;

mod pumps;
pub use pumps::{PUMP_COUNT, Pump, PumpRegistry};

mod error;
pub use error::{InsufficientStock, SaleError, StationError, UnknownPump};

/// A fuel station: inventory, pumps and the transaction ledger.
pub struct Station {
    pub inventory: Inventory,
    pub pumps: PumpRegistry,
    pub ledger: TransactionLedger,
}

/// Public API
impl Station {
    pub fn new() -> Self {
        Self {
            inventory: Inventory::new(),
            pumps: PumpRegistry::new(),
            ledger: TransactionLedger::new(),
        }
    }

    /// Run the station with the given command stream, printing each
    /// command's output. Failed commands are logged and skipped; the
    /// session continues.
    pub async fn run(&mut self, mut commands: impl Stream<Item = Command> + Unpin) {
        while let Some(command) = commands.next().await {
            match self.apply(command) {
                Ok(output) => println!("{output}"),
                Err(error) => warn!("{error}"),
            }
        }
    }

    /// Apply a single command, returning its printable output.
    pub fn apply(&mut self, command: Command) -> Result<String, StationError> {
        match command {
            Command::Sale(request) => {
                let receipt = match self.process_sale(request) {
                    Ok(tx) => report::receipt(tx),
                    Err(error) => {
                        info!(pump = request.pump, reason = %error, "sale rejected");
                        return Err(StationError::Sale(error));
                    }
                };
                for (fuel, remaining) in self.inventory.low_stock() {
                    warn!(fuel = %fuel, remaining = %remaining, "low stock");
                }
                Ok(receipt)
            }
            Command::Supply { fuel, quantity } => {
                self.inventory.add_supply(fuel, quantity);
                let stock = self.inventory.current_stock(fuel);
                info!(fuel = %fuel, quantity = %quantity, "supply added");
                Ok(format!(
                    "Supply added. New stock for {fuel}: {stock:.2} {}",
                    fuel.unit()
                ))
            }
            Command::SetPumpStatus { pump, status } => {
                self.pumps.set_status(pump, status)?;
                Ok(format!("Pump {pump} status set to {status}"))
            }
            Command::ShowPumps => Ok(report::pump_listing(&self.pumps)),
            Command::FuelSummary => Ok(report::fuel_summary(&self.inventory, &self.ledger)),
            Command::ListTransactions => Ok(report::transaction_listing(&self.ledger)),
            Command::DailyReport => Ok(report::daily_report(
                &self.inventory,
                &self.pumps,
                &self.ledger,
            )),
            Command::HourlySales => Ok(report::hourly_sales(&self.ledger)),
            Command::PaymentBreakdown => Ok(report::payment_breakdown(&self.ledger)),
            Command::PumpPerformance => Ok(report::pump_performance(&self.pumps, &self.ledger)),
            Command::Help => Ok(cli::HELP.to_string()),
            Command::Exit => Ok("Exiting.".to_string()),
        }
    }

    /// Validate a sale request, work out quantity and amount from the
    /// entry mode, deduct stock, and record the result in the ledger.
    pub fn process_sale(&mut self, request: SaleRequest) -> Result<&Transaction, SaleError> {
        let pump = self
            .pumps
            .get(request.pump)
            .ok_or(SaleError::UnknownPump(request.pump))?;
        if pump.status != PumpStatus::Active {
            return Err(SaleError::PumpUnavailable(pump.id, pump.status));
        }
        let fuel = pump.fuel;

        let price = self.inventory.price(fuel);
        let (quantity, amount) = match request.input {
            SaleInput::Quantity(quantity) => (quantity, quantity * price),
            SaleInput::Spend(amount) => (amount / price, amount),
        };
        if !quantity.is_positive() {
            return Err(SaleError::SpendTooSmall(amount));
        }

        self.inventory.deduct(fuel, quantity)?;

        let sale = Sale {
            pump: request.pump,
            fuel,
            vehicle: request.vehicle,
            payment: request.payment,
            quantity,
            amount,
        };
        Ok(self.ledger.record(sale)?)
    }
}

impl Default for Station {
    fn default() -> Self {
        Self::new()
    }
}
