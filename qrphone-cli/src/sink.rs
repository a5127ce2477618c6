//! vCard Directory Contact Book
//!
//! Imported contacts are kept as one `.vcf` file each in the contacts
//! directory.

use std::fs;
use std::path::{Path, PathBuf};

use qrphone_core::contact::{
    export_vcard, import_vcard, phones_match, ContactSink, ExistingContact, SinkError,
    VCardContact,
};
use qrphone_core::Profile;
use tracing::{debug, warn};

pub struct VCardDirectory {
    dir: PathBuf,
}

impl VCardDirectory {
    pub fn new(dir: PathBuf) -> Self {
        VCardDirectory { dir }
    }

    /// Reads every parsable contact, sorted by file name.
    pub fn list(&self) -> Result<Vec<VCardContact>, SinkError> {
        let mut paths = self.vcf_paths()?;
        paths.sort();

        Ok(paths
            .iter()
            .filter_map(|path| read_contact(path))
            .collect())
    }

    fn vcf_paths(&self) -> Result<Vec<PathBuf>, SinkError> {
        if !self.dir.exists() {
            return Ok(Vec::new());
        }

        let entries =
            fs::read_dir(&self.dir).map_err(|e| SinkError::Unavailable(e.to_string()))?;

        Ok(entries
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|path| path.extension().is_some_and(|ext| ext == "vcf"))
            .collect())
    }

    /// First free `<given>_<family>[_n].vcf` name.
    fn file_path_for(&self, profile: &Profile) -> PathBuf {
        let stem: String = format!("{}_{}", profile.first_name(), profile.last_name())
            .chars()
            .map(|c| if c.is_alphanumeric() { c } else { '_' })
            .collect();

        let mut path = self.dir.join(format!("{stem}.vcf"));
        let mut n = 2;
        while path.exists() {
            path = self.dir.join(format!("{stem}_{n}.vcf"));
            n += 1;
        }
        path
    }
}

fn read_contact(path: &Path) -> Option<VCardContact> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) => {
            warn!(error = %e, "skipping unreadable contact file");
            return None;
        }
    };

    match import_vcard(&text) {
        Ok(contact) => Some(contact),
        Err(e) => {
            warn!(error = %e, "skipping malformed contact file");
            None
        }
    }
}

impl ContactSink for VCardDirectory {
    fn find_by_phone(&self, phone: &str) -> Result<Vec<ExistingContact>, SinkError> {
        Ok(self
            .list()?
            .into_iter()
            .filter(|c| c.phone_numbers.iter().any(|p| phones_match(p, phone)))
            .map(|c| ExistingContact::new(c.given_name, c.family_name))
            .collect())
    }

    fn save_contact(&self, profile: &Profile) -> Result<(), SinkError> {
        fs::create_dir_all(&self.dir).map_err(|e| SinkError::Unavailable(e.to_string()))?;

        let path = self.file_path_for(profile);
        fs::write(&path, export_vcard(profile))
            .map_err(|e| SinkError::WriteFailed(e.to_string()))?;

        debug!("wrote contact file");
        Ok(())
    }
}
