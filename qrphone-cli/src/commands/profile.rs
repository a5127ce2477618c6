//! Profile Commands
//!
//! Save, show, render and delete your own profile.

use std::fs;
use std::path::Path;

use anyhow::{bail, Result};
use dialoguer::{Confirm, Input};
use qrphone_core::payload::qr;
use qrphone_core::ProfileForm;

use crate::config::CliConfig;
use crate::display;

use super::open_app;

/// Pixel size of exported SVG codes.
const SVG_SIZE: u32 = 320;

fn prompt(label: &str, current: &str, allow_empty: bool) -> Result<String> {
    let mut input = Input::<String>::new()
        .with_prompt(label)
        .allow_empty(allow_empty);
    if !current.is_empty() {
        input = input.default(current.to_string());
    }
    Ok(input.interact_text()?)
}

/// Saves the profile, prompting for any field not given on the command line.
pub fn save(
    config: &CliConfig,
    first: Option<String>,
    last: Option<String>,
    phone: Option<String>,
    email: Option<String>,
) -> Result<()> {
    let mut app = open_app(config)?;
    let current = app.profile().profile().to_form();
    let interactive = first.is_none() || last.is_none() || phone.is_none();

    let first = match first {
        Some(v) => v,
        None => prompt("First name", &current.first_name, false)?,
    };
    let last = match last {
        Some(v) => v,
        None => prompt("Last name", &current.last_name, false)?,
    };
    let phone = match phone {
        Some(v) => v,
        None => prompt("Phone", &current.phone_number, false)?,
    };
    let email = match email {
        Some(v) => v,
        None if interactive => prompt(
            "Email (optional)",
            current.email.as_deref().unwrap_or(""),
            true,
        )?,
        None => String::new(),
    };

    let form = ProfileForm::new(first, last, phone).with_email(email);
    match app.profile_mut().save(&form) {
        Ok(profile) => {
            display::success("Profile saved");
            display::display_profile(profile);
            Ok(())
        }
        Err(e) => bail!(e.user_message()),
    }
}

/// Shows the saved profile.
pub fn show(config: &CliConfig, json: bool) -> Result<()> {
    let app = open_app(config)?;
    let controller = app.profile();

    if !controller.has_saved_profile() {
        display::info("No profile saved yet. Create one with:");
        println!("  qrphone save");
        return Ok(());
    }

    if json {
        println!("{}", serde_json::to_string_pretty(controller.profile())?);
    } else {
        display::display_profile(controller.profile());
    }

    Ok(())
}

/// Renders the profile as a QR code on the terminal or into an SVG file.
pub fn qr(config: &CliConfig, svg: Option<&Path>) -> Result<()> {
    let app = open_app(config)?;
    let controller = app.profile();

    let Some(payload) = controller.payload() else {
        bail!("No profile saved yet. Run 'qrphone save' first.");
    };

    match svg {
        Some(path) => {
            fs::write(path, qr::render_svg(&payload, SVG_SIZE)?)?;
            display::success(&format!("QR code written to {}", path.display()));
        }
        None => {
            if let Some(code) = controller.render_qr()? {
                println!("{}", code);
            }
            println!("  {}", controller.profile().full_name());
        }
    }

    Ok(())
}

/// Prints the raw payload.
pub fn payload(config: &CliConfig) -> Result<()> {
    let app = open_app(config)?;

    match app.profile().payload() {
        Some(payload) => {
            println!("{}", payload);
            Ok(())
        }
        None => bail!("No profile saved yet. Run 'qrphone save' first."),
    }
}

/// Deletes the saved profile.
pub fn delete(config: &CliConfig, yes: bool) -> Result<()> {
    let mut app = open_app(config)?;

    if !app.profile().has_saved_profile() {
        display::info("No profile saved.");
        return Ok(());
    }

    if !yes {
        let confirmed = Confirm::new()
            .with_prompt("Delete your saved profile?")
            .default(false)
            .interact()?;
        if !confirmed {
            display::info("Delete cancelled.");
            return Ok(());
        }
    }

    app.profile_mut().delete();
    display::success("Profile deleted");

    Ok(())
}
