//! Telephone directory service
//!
//! Owns the name-keyed contact store. Every operation writes its outcome
//! to the output stream handed in by the caller and also returns a value,
//! so the menu shows the same lines a test can capture.

use std::collections::btree_map::{self, BTreeMap};
use std::io::Write;
use std::path::Path;
use std::sync::Arc;

use tracing::{debug, info, instrument};

use crate::application::{ApplicationResult, FileMode, IoResultExt};
use crate::domain::{encode_contacts, parse_records, ColumnLayout, Contact};
use crate::infrastructure::traits::FileSystem;

/// Address given to persons rebuilt from a saved file.
pub const DEFAULT_PLACEHOLDER_ADDRESS: &str = "N/A";

/// Service holding the contacts, sorted by name.
pub struct DirectoryService {
    fs: Arc<dyn FileSystem>,
    layout: ColumnLayout,
    placeholder_address: String,
    contacts: BTreeMap<String, Contact>,
}

impl DirectoryService {
    /// Create an empty directory with default layout and placeholder.
    pub fn new(fs: Arc<dyn FileSystem>) -> Self {
        Self::with_options(fs, ColumnLayout::default(), DEFAULT_PLACEHOLDER_ADDRESS)
    }

    /// Create an empty directory with explicit rendering and load options.
    pub fn with_options(
        fs: Arc<dyn FileSystem>,
        layout: ColumnLayout,
        placeholder_address: impl Into<String>,
    ) -> Self {
        Self {
            fs,
            layout,
            placeholder_address: placeholder_address.into(),
            contacts: BTreeMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// Look up a contact without printing anything.
    pub fn get(&self, name: &str) -> Option<&Contact> {
        self.contacts.get(name)
    }

    /// Contacts in name order.
    pub fn contacts(&self) -> btree_map::Values<'_, String, Contact> {
        self.contacts.values()
    }

    /// Insert a contact, replacing any contact with the same name.
    ///
    /// Returns the replaced contact.
    #[instrument(skip(self, out), fields(name = %contact.name()))]
    pub fn add_contact(
        &mut self,
        contact: Contact,
        out: &mut dyn Write,
    ) -> ApplicationResult<Option<Contact>> {
        writeln!(out, "Contact added: {}", contact.render(&self.layout)).console()?;
        let replaced = self.contacts.insert(contact.name().to_string(), contact);
        if replaced.is_some() {
            debug!("add_contact: replaced existing entry");
        }
        Ok(replaced)
    }

    /// Exact, case-sensitive lookup.
    #[instrument(skip(self, out))]
    pub fn search_contact(
        &self,
        name: &str,
        out: &mut dyn Write,
    ) -> ApplicationResult<Option<&Contact>> {
        match self.contacts.get(name) {
            Some(contact) => {
                writeln!(out, "Contact found: {}", contact.render(&self.layout)).console()?;
                Ok(Some(contact))
            }
            None => {
                writeln!(out, "Contact not found for: {name}").console()?;
                Ok(None)
            }
        }
    }

    /// Print every contact in name order, or a note that there are none.
    pub fn display_contacts(&self, out: &mut dyn Write) -> ApplicationResult<()> {
        if self.contacts.is_empty() {
            writeln!(out, "Telephone Directory is empty.").console()?;
            return Ok(());
        }
        writeln!(out, "Telephone Directory:").console()?;
        for contact in self.contacts.values() {
            writeln!(out, "{}", contact.render(&self.layout)).console()?;
        }
        Ok(())
    }

    /// Remove a contact by exact name. Returns the removed contact.
    ///
    /// The confirmation is printed before removal; a console failure
    /// leaves the store unchanged, as with [`Self::add_contact`].
    #[instrument(skip(self, out))]
    pub fn delete_contact(
        &mut self,
        name: &str,
        out: &mut dyn Write,
    ) -> ApplicationResult<Option<Contact>> {
        let Some(contact) = self.contacts.get(name) else {
            writeln!(out, "Contact not found for deletion: {name}").console()?;
            return Ok(None);
        };
        writeln!(out, "Contact deleted: {}", contact.render(&self.layout)).console()?;
        Ok(self.contacts.remove(name))
    }

    /// Write `name,phoneNumber` lines in name order, replacing the file.
    ///
    /// Returns the number of contacts written. Fails with
    /// `FileUnavailable` when the file cannot be created (nothing is
    /// written) or when writing to it fails.
    #[instrument(skip(self, out))]
    pub fn save_contacts_to_file(
        &self,
        path: &Path,
        out: &mut dyn Write,
    ) -> ApplicationResult<usize> {
        let content = encode_contacts(self.contacts.values());
        self.fs
            .write(path, &content)
            .with_path_context(FileMode::Writing, path)?;
        info!("saved {} contacts to {}", self.contacts.len(), path.display());
        writeln!(out, "Contacts saved to file: {}", path.display()).console()?;
        Ok(self.contacts.len())
    }

    /// Add one person per non-empty line of the file, in file order.
    ///
    /// Every record goes through [`Self::add_contact`], so each line prints
    /// an add confirmation and later duplicates win. Returns the number of
    /// records read. The store is untouched when the file cannot be read.
    #[instrument(skip(self, out))]
    pub fn load_contacts_from_file(
        &mut self,
        path: &Path,
        out: &mut dyn Write,
    ) -> ApplicationResult<usize> {
        let content = self
            .fs
            .read_to_string(path)
            .with_path_context(FileMode::Reading, path)?;
        let records = parse_records(&content);
        debug!("load: {} records in {}", records.len(), path.display());

        let count = records.len();
        for record in records {
            let contact = record.into_person(self.placeholder_address.as_str());
            self.add_contact(contact, out)?;
        }
        info!("loaded {} contacts from {}", count, path.display());
        writeln!(out, "Contacts loaded from file: {}", path.display()).console()?;
        Ok(count)
    }
}
