//! CLI Commands

pub mod contacts;
pub mod profile;
pub mod scan;

use anyhow::Result;
use qrphone_core::api::{QrPhone, QrPhoneBuilder, QrPhoneConfig, QrPhoneEvent};

use crate::config::CliConfig;
use crate::display;
use crate::sink::VCardDirectory;

/// Opens QR Phone over the data directory.
///
/// Persistence failures are reported on the terminal as they happen.
pub fn open_app(config: &CliConfig) -> Result<QrPhone<VCardDirectory>> {
    let qr_config =
        QrPhoneConfig::default().with_file_secrets(config.secrets_dir(), config.storage_key()?);

    let app = QrPhoneBuilder::new()
        .config(qr_config)
        .contact_sink(VCardDirectory::new(config.contacts_dir()))
        .on_event(|event| {
            if let QrPhoneEvent::PersistenceFailed { operation } = event {
                display::warning(&format!(
                    "Could not {} the stored profile; changes last for this session only",
                    operation
                ));
            }
        })
        .build()?;

    Ok(app)
}
