//! Line-oriented command parsing for the terminal frontend.
//!
//! Maps raw input lines onto [`Command`] values; anything malformed comes
//! back as a [`ParseError`] that the caller warns about and skips.

use thiserror::Error;

use crate::Amount;
use crate::model::{FuelType, PaymentMode, PumpId, PumpStatus, SaleInput, SaleRequest, VehicleType};

pub const HELP: &str = "\
Commands:
  sale <pump> <vehicle> <payment> <qty|amount> <value>
                                 Record a sale, e.g. 'sale 3 4w card qty 25'
  supply <fuel> <quantity>       Add a fuel delivery (petrol, diesel, cng)
  pump <id> <status>             Set pump status (active, inactive, maintenance)
  pumps                          List pumps
  stock                          Fuel-wise stock and sales summary
  list                           List transactions, most recent first
  report                         Generate the daily report
  hours                          Hour-wise sales analysis
  payments                       Payment mode breakdown
  performance                    Pump-wise performance
  help                           Show this help
  exit                           Quit";

const USAGE_SALE: &str = "sale <pump> <vehicle> <payment> <qty|amount> <value>";
const USAGE_SUPPLY: &str = "supply <fuel> <quantity>";
const USAGE_PUMP: &str = "pump <id> <active|inactive|maintenance>";

/// One parsed terminal command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Sale(SaleRequest),
    Supply { fuel: FuelType, quantity: Amount },
    SetPumpStatus { pump: PumpId, status: PumpStatus },
    ShowPumps,
    FuelSummary,
    ListTransactions,
    DailyReport,
    HourlySales,
    PaymentBreakdown,
    PumpPerformance,
    Help,
    Exit,
}

/// Errors that can occur when parsing a command line.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("empty command")]
    Empty,

    #[error("unknown command '{0}'; type 'help' for the command list")]
    UnknownCommand(String),

    #[error("usage: {0}")]
    Usage(&'static str),

    #[error("unknown fuel type '{0}' (petrol, diesel, cng)")]
    UnknownFuel(String),

    #[error("unknown vehicle type '{0}' (2w, 4w, commercial)")]
    UnknownVehicle(String),

    #[error("unknown payment mode '{0}' (cash, card, wallet)")]
    UnknownPayment(String),

    #[error("unknown pump status '{0}' (active, inactive, maintenance)")]
    UnknownStatus(String),

    #[error("unknown entry mode '{0}' (qty, amount)")]
    UnknownEntryMode(String),

    #[error("invalid pump id '{0}'")]
    InvalidPumpId(String),

    #[error("invalid {what} '{value}'")]
    InvalidNumber { what: &'static str, value: String },

    #[error("{what} must be positive")]
    NonPositive { what: &'static str },
}

/// Parse one input line into a command.
pub fn parse(line: &str) -> Result<Command, ParseError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let Some((keyword, args)) = tokens.split_first() else {
        return Err(ParseError::Empty);
    };

    match keyword.to_ascii_lowercase().as_str() {
        "sale" => {
            let &[pump, vehicle, payment, mode, value] = args else {
                return Err(ParseError::Usage(USAGE_SALE));
            };
            let input = match mode.to_ascii_lowercase().as_str() {
                "qty" | "quantity" => SaleInput::Quantity(parse_positive("quantity", value)?),
                "amount" | "amt" => SaleInput::Spend(parse_positive("amount", value)?),
                other => return Err(ParseError::UnknownEntryMode(other.to_string())),
            };
            Ok(Command::Sale(SaleRequest {
                pump: parse_pump_id(pump)?,
                vehicle: parse_vehicle(vehicle)?,
                payment: parse_payment(payment)?,
                input,
            }))
        }
        "supply" => {
            let &[fuel, quantity] = args else {
                return Err(ParseError::Usage(USAGE_SUPPLY));
            };
            Ok(Command::Supply {
                fuel: parse_fuel(fuel)?,
                quantity: parse_positive("quantity", quantity)?,
            })
        }
        "pump" => {
            let &[pump, status] = args else {
                return Err(ParseError::Usage(USAGE_PUMP));
            };
            Ok(Command::SetPumpStatus {
                pump: parse_pump_id(pump)?,
                status: parse_status(status)?,
            })
        }
        "pumps" => Ok(Command::ShowPumps),
        "stock" => Ok(Command::FuelSummary),
        "list" => Ok(Command::ListTransactions),
        "report" => Ok(Command::DailyReport),
        "hours" => Ok(Command::HourlySales),
        "payments" => Ok(Command::PaymentBreakdown),
        "performance" => Ok(Command::PumpPerformance),
        "help" => Ok(Command::Help),
        "exit" | "quit" => Ok(Command::Exit),
        other => Err(ParseError::UnknownCommand(other.to_string())),
    }
}

fn parse_fuel(token: &str) -> Result<FuelType, ParseError> {
    match token.to_ascii_lowercase().as_str() {
        "petrol" => Ok(FuelType::Petrol),
        "diesel" => Ok(FuelType::Diesel),
        "cng" => Ok(FuelType::Cng),
        other => Err(ParseError::UnknownFuel(other.to_string())),
    }
}

fn parse_vehicle(token: &str) -> Result<VehicleType, ParseError> {
    match token.to_ascii_lowercase().as_str() {
        "2w" => Ok(VehicleType::TwoWheeler),
        "4w" => Ok(VehicleType::FourWheeler),
        "commercial" | "comm" => Ok(VehicleType::Commercial),
        other => Err(ParseError::UnknownVehicle(other.to_string())),
    }
}

fn parse_payment(token: &str) -> Result<PaymentMode, ParseError> {
    match token.to_ascii_lowercase().as_str() {
        "cash" => Ok(PaymentMode::Cash),
        "card" => Ok(PaymentMode::Card),
        "wallet" => Ok(PaymentMode::Wallet),
        other => Err(ParseError::UnknownPayment(other.to_string())),
    }
}

fn parse_status(token: &str) -> Result<PumpStatus, ParseError> {
    match token.to_ascii_lowercase().as_str() {
        "active" => Ok(PumpStatus::Active),
        "inactive" => Ok(PumpStatus::Inactive),
        "maintenance" => Ok(PumpStatus::Maintenance),
        other => Err(ParseError::UnknownStatus(other.to_string())),
    }
}

fn parse_pump_id(token: &str) -> Result<PumpId, ParseError> {
    token
        .parse()
        .map_err(|_| ParseError::InvalidPumpId(token.to_string()))
}

fn parse_positive(what: &'static str, token: &str) -> Result<Amount, ParseError> {
    let value: f64 = token.parse().map_err(|_| ParseError::InvalidNumber {
        what,
        value: token.to_string(),
    })?;
    if !value.is_finite() {
        return Err(ParseError::InvalidNumber {
            what,
            value: token.to_string(),
        });
    }
    let amount = Amount::from_float(value);
    if !amount.is_positive() {
        return Err(ParseError::NonPositive { what });
    }
    Ok(amount)
}
