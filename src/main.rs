use anyhow::Context;
use appointment_form::{book_appointment, init_logging, AppConfig};
use log::error;
use std::io;

fn run() -> anyhow::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    book_appointment(stdin.lock(), &mut out).context("Failed to run the appointment form")?;
    Ok(())
}

fn main() {
    let config = AppConfig::from_env();
    init_logging(&config);

    // Exit status stays 0 whatever happened on the console.
    if let Err(e) = run() {
        error!("{:#}", e);
    }
}
