//! Display Helpers
//!
//! Terminal output formatting and styling.

use console::style;
use qrphone_core::contact::{ExistingContact, VCardContact};
use qrphone_core::Profile;

/// Prints a success message.
pub fn success(msg: &str) {
    println!("{} {}", style("✓").green().bold(), msg);
}

/// Prints an error message.
pub fn error(msg: &str) {
    eprintln!("{} {}", style("✗").red().bold(), msg);
}

/// Prints a warning message.
pub fn warning(msg: &str) {
    println!("{} {}", style("⚠").yellow().bold(), msg);
}

/// Prints an info message.
pub fn info(msg: &str) {
    println!("{} {}", style("ℹ").blue().bold(), msg);
}

/// Displays a profile in a formatted box.
pub fn display_profile(profile: &Profile) {
    let width = 40;

    println!("{}", "─".repeat(width));
    println!("  {}", style(profile.full_name()).bold().cyan());
    println!("{}", "─".repeat(width));

    println!("  {:6} {}", "phone", profile.phone_number());
    match profile.email() {
        Some(email) => println!("  {:6} {}", "mail", email),
        None => println!("  {:6} {}", "mail", style("(none)").dim()),
    }

    println!("{}", "─".repeat(width));
}

/// Lists contacts that already use a scanned phone number.
pub fn display_duplicates(existing: &[ExistingContact]) {
    for contact in existing {
        println!("  • {}", style(contact.full_name()).bold());
    }
}

/// Displays an imported contact in a compact format.
pub fn display_contact_summary(contact: &VCardContact, index: usize) {
    let name = format!("{} {}", contact.given_name, contact.family_name);
    let phones = contact.phone_numbers.join(", ");

    println!(
        "  {}. {}  {}",
        index,
        style(name.trim()).bold(),
        style(phones).dim()
    );
}
