use std::io::BufRead;

use station_pos::Station;
use station_pos::cli::{self, Command};
use tokio_stream::wrappers::ReceiverStream;
use tracing::warn;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("warn".parse().unwrap()))
        .with_writer(std::io::stderr)
        .init();

    println!("====== FUEL STATION POINT OF SALE ======");
    println!("{}", cli::HELP);

    let mut station = Station::new();
    let (command_sender, command_receiver) = tokio::sync::mpsc::channel(16);

    tokio::task::spawn_blocking(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            if line.trim().is_empty() {
                continue;
            }
            match cli::parse(&line) {
                Ok(Command::Exit) => break,
                Ok(command) => {
                    if command_sender.blocking_send(command).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    warn!("{e}");
                }
            }
        }
    });

    station.run(ReceiverStream::new(command_receiver)).await;

    println!("Exiting. {} transactions recorded.", station.ledger.len());
}
