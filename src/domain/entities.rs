//! Domain entities: core data structures

use std::fmt;

/// Default width of the name column in rendered contacts.
pub const DEFAULT_NAME_WIDTH: usize = 20;

/// Default width of the phone column in rendered contacts.
pub const DEFAULT_PHONE_WIDTH: usize = 15;

/// Variant-specific part of a contact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactDetails {
    /// An individual with a postal address
    Person { address: String },
    /// An organization with a company name
    Business { company_name: String },
}

/// Variant tag of a contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactKind {
    Person,
    Business,
}

impl fmt::Display for ContactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContactKind::Person => write!(f, "person"),
            ContactKind::Business => write!(f, "business"),
        }
    }
}

/// One directory entry.
///
/// Fields are fixed at construction. The directory replaces whole records,
/// it never edits one in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    name: String,
    phone_number: String,
    details: ContactDetails,
}

impl Contact {
    /// Create a person contact. Empty fields are accepted.
    pub fn person(
        name: impl Into<String>,
        phone_number: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            phone_number: phone_number.into(),
            details: ContactDetails::Person {
                address: address.into(),
            },
        }
    }

    /// Create a business contact. Empty fields are accepted.
    pub fn business(
        name: impl Into<String>,
        phone_number: impl Into<String>,
        company_name: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            phone_number: phone_number.into(),
            details: ContactDetails::Business {
                company_name: company_name.into(),
            },
        }
    }

    /// Name, also the directory key.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phone_number(&self) -> &str {
        &self.phone_number
    }

    pub fn details(&self) -> &ContactDetails {
        &self.details
    }

    pub fn kind(&self) -> ContactKind {
        match self.details {
            ContactDetails::Person { .. } => ContactKind::Person,
            ContactDetails::Business { .. } => ContactKind::Business,
        }
    }

    /// Render as a single line (without terminator) using the given layout.
    ///
    /// `Alice               phone_number -> 555-1111       Address -> 1 Main St`
    ///
    /// Values longer than their column are not cut, they push the rest of
    /// the line to the right. Widths count characters, not bytes.
    pub fn render(&self, layout: &ColumnLayout) -> String {
        let trailer = match &self.details {
            ContactDetails::Person { address } => format!("Address -> {address}"),
            ContactDetails::Business { company_name } => format!("Company-> {company_name}"),
        };
        format!(
            "{:<name_w$}phone_number -> {:<phone_w$}{}",
            self.name,
            self.phone_number,
            trailer,
            name_w = layout.name_width,
            phone_w = layout.phone_width,
        )
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&ColumnLayout::default()))
    }
}

/// Column widths used when rendering contacts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnLayout {
    pub name_width: usize,
    pub phone_width: usize,
}

impl ColumnLayout {
    pub fn new(name_width: usize, phone_width: usize) -> Self {
        Self {
            name_width,
            phone_width,
        }
    }
}

impl Default for ColumnLayout {
    fn default() -> Self {
        Self::new(DEFAULT_NAME_WIDTH, DEFAULT_PHONE_WIDTH)
    }
}

/// Expand environment variables in a path string.
///
/// Supports:
/// - `$VAR` syntax
/// - `${VAR}` syntax
/// - `~` for home directory
///
/// Falls back to the input unchanged when a variable is undefined.
pub fn expand_env_vars(path: &str) -> String {
    shellexpand::full(path)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| path.to_string())
}
