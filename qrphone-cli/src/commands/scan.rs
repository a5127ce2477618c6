//! Scan Command
//!
//! Imports a contact from decoded QR text.

use std::io::{self, Read};

use anyhow::{bail, Result};
use dialoguer::Confirm;
use qrphone_core::api::{ScanOutcome, ScanSession};

use crate::config::CliConfig;
use crate::display;

use super::open_app;

/// Reads the scanned text from standard input.
pub fn read_stdin() -> Result<String> {
    let mut data = String::new();
    io::stdin().read_to_string(&mut data)?;
    Ok(data)
}

/// Validates `data` and imports it after confirmation.
///
/// A contact whose phone number is already known is reported, not added.
pub fn run(config: &CliConfig, data: &str, yes: bool) -> Result<()> {
    let mut app = open_app(config)?;

    let (scanner, session) = ScanSession::open();
    scanner.send(data);
    drop(scanner);

    let outcome = app.scan_mut().poll(&session);

    match outcome {
        None | Some(ScanOutcome::Ignored) => bail!("No QR data given."),
        Some(ScanOutcome::Rejected(reason)) => bail!(reason.user_message()),
        Some(ScanOutcome::Duplicate { profile, existing }) => {
            display::display_profile(&profile);
            display::warning("This phone number is already in your contacts:");
            display::display_duplicates(&existing);
            display::info("Contact not added.");
            return Ok(());
        }
        Some(ScanOutcome::Ready(profile)) => display::display_profile(&profile),
    }

    if !yes {
        let confirmed = Confirm::new()
            .with_prompt("Add this contact?")
            .default(true)
            .interact()?;
        if !confirmed {
            app.scan_mut().reset();
            display::info("Import cancelled.");
            return Ok(());
        }
    }

    let imported = app.scan_mut().confirm_import()?;
    display::success(&format!("Added {} to your contacts", imported.full_name()));

    Ok(())
}
