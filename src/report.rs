//! Read-only report rendering.
//!
//! Every renderer returns a string built from the ledger's listing and
//! snapshots plus live inventory and pump state; none of them touches raw
//! storage or mutates anything.

use std::fmt::Write as _;

use crate::ledger::TransactionLedger;
use crate::model::{FuelType, PaymentMode, Transaction};
use crate::station::{Inventory, PumpRegistry};

/// Receipt for one recorded sale.
pub fn receipt(tx: &Transaction) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "------------------- FUEL RECEIPT -------------------");
    let _ = writeln!(out, "Transaction ID : {}", tx.id);
    let _ = writeln!(
        out,
        "Date & Time    : {}",
        tx.timestamp.format("%Y-%m-%d %H:%M:%S")
    );
    let _ = writeln!(out, "Pump ID        : {}", tx.pump);
    let _ = writeln!(out, "Fuel Type      : {}", tx.fuel);
    let _ = writeln!(out, "Vehicle Type   : {}", tx.vehicle);
    let _ = writeln!(out, "Quantity       : {:.3} {}", tx.quantity, tx.fuel.unit());
    let _ = writeln!(out, "Amount (INR)   : {:.2}", tx.amount);
    let _ = writeln!(out, "Payment Mode   : {}", tx.payment);
    let _ = write!(out, "----------------------------------------------------");
    out
}

/// Pumps with their fuel binding and status.
pub fn pump_listing(pumps: &PumpRegistry) -> String {
    let mut out = String::from("Available Pumps:\n");
    for pump in pumps.iter() {
        let _ = writeln!(out, "Pump {} - {} ({})", pump.id, pump.fuel, pump.status);
    }
    out.pop();
    out
}

/// Per-pump sale count, dispensed quantity and revenue.
pub fn pump_performance(pumps: &PumpRegistry, ledger: &TransactionLedger) -> String {
    let mut out = String::from("----- Pump-wise Performance -----\n");
    for pump in pumps.iter() {
        let totals = ledger.pump_total(pump.id);
        let _ = writeln!(
            out,
            "Pump {} | Fuel: {} | Status: {} | Txns: {} | Qty: {:.3} | Revenue: ₹{:.2}",
            pump.id, pump.fuel, pump.status, totals.transactions, totals.quantity, totals.amount
        );
    }
    out.pop();
    out
}

/// Stock position and sales per fuel grade.
pub fn fuel_summary(inventory: &Inventory, ledger: &TransactionLedger) -> String {
    let mut out = String::from("----- Fuel-wise Summary -----\n");
    for fuel in FuelType::ALL {
        let totals = ledger.fuel_total(fuel);
        let _ = writeln!(
            out,
            "{} | Opening Stock: {:.2} | Current Stock: {:.2} | Sold Qty: {:.3} | Revenue: ₹{:.2}",
            fuel,
            inventory.opening_stock(fuel),
            inventory.current_stock(fuel),
            totals.quantity,
            totals.amount
        );
    }
    out.pop();
    out
}

/// Hour-of-day buckets with any sales, in order.
pub fn hourly_sales(ledger: &TransactionLedger) -> String {
    let mut out = String::from("----- Hour-wise Sales Analysis -----\n");
    for hour in 0..24 {
        let totals = ledger.hour_total(hour);
        if totals.quantity.is_positive() || totals.amount.is_positive() {
            let _ = writeln!(
                out,
                "Hour {hour:02}:00 - Qty: {:.3} | Revenue: ₹{:.2}",
                totals.quantity, totals.amount
            );
        }
    }
    out.pop();
    out
}

/// Revenue collected per payment mode.
pub fn payment_breakdown(ledger: &TransactionLedger) -> String {
    let mut out = String::from("----- Payment Mode Breakdown -----\n");
    for mode in PaymentMode::ALL {
        let _ = writeln!(out, "{}: ₹{:.2}", mode, ledger.payment_total(mode));
    }
    out.pop();
    out
}

/// Recorded transactions, most recent first.
pub fn transaction_listing(ledger: &TransactionLedger) -> String {
    if ledger.is_empty() {
        return "No transactions yet.".to_string();
    }
    let mut out = String::from("---- Transactions (most recent first) ----\n");
    for tx in ledger.recent() {
        let _ = writeln!(
            out,
            "{} | {} | Pump {} | Qty: {:.3} | ₹{:.2} | {}",
            tx.id,
            tx.timestamp.format("%Y-%m-%d %H:%M:%S"),
            tx.pump,
            tx.quantity,
            tx.amount,
            tx.payment
        );
    }
    out.pop();
    out
}

/// The end-of-day rollup: stock positions, grand totals, and every
/// per-dimension summary.
pub fn daily_report(
    inventory: &Inventory,
    pumps: &PumpRegistry,
    ledger: &TransactionLedger,
) -> String {
    let mut out = String::from("================= DAILY REPORT =================\n");
    let _ = writeln!(out, "Fuel Opening & Closing Stocks:");
    for fuel in FuelType::ALL {
        let _ = writeln!(
            out,
            "{}: Opening: {:.2} | Closing: {:.2}",
            fuel,
            inventory.opening_stock(fuel),
            inventory.current_stock(fuel)
        );
    }
    let totals = ledger.total_sales();
    let _ = writeln!(out, "Total Sales Quantity (all fuels): {:.3}", totals.quantity);
    let _ = writeln!(out, "Total Revenue (all fuels): ₹{:.2}", totals.amount);
    let _ = writeln!(out, "{}", fuel_summary(inventory, ledger));
    let _ = writeln!(out, "Number of transactions: {}", ledger.len());
    let _ = writeln!(out, "{}", payment_breakdown(ledger));
    let _ = writeln!(out, "{}", pump_performance(pumps, ledger));
    let _ = writeln!(out, "{}", hourly_sales(ledger));
    let _ = write!(out, "================================================");
    out
}
