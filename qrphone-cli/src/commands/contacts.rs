//! Contacts Command
//!
//! List imported contacts.

use anyhow::Result;

use crate::config::CliConfig;
use crate::display;
use crate::sink::VCardDirectory;

/// Lists all imported contacts.
pub fn list(config: &CliConfig) -> Result<()> {
    let contacts = VCardDirectory::new(config.contacts_dir()).list()?;

    if contacts.is_empty() {
        display::info("No contacts yet. Import one with:");
        println!("  qrphone scan <DATA>");
        return Ok(());
    }

    println!();
    println!("Contacts ({}):", contacts.len());
    println!();

    for (i, contact) in contacts.iter().enumerate() {
        display::display_contact_summary(contact, i + 1);
    }

    println!();

    Ok(())
}
