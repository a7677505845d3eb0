//! Flat-file line format for saved contacts
//!
//! One contact per line: `name,phoneNumber`. No header, no quoting.
//! Only name and phone number are stored, so the variant and its extra
//! field do not survive a save/load cycle. A comma inside a name or phone
//! number shifts the field boundary on reload.

use crate::domain::Contact;

/// Field separator.
pub const FIELD_SEPARATOR: char = ',';

/// The persisted part of a contact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactRecord {
    pub name: String,
    pub phone_number: String,
}

impl ContactRecord {
    /// Parse one line.
    ///
    /// The first field is the name, the second the phone number. Missing
    /// fields are empty, anything after the second separator is ignored.
    pub fn parse(line: &str) -> Self {
        let mut fields = line.splitn(3, FIELD_SEPARATOR);
        let name = fields.next().unwrap_or_default();
        let phone_number = fields.next().unwrap_or_default();
        Self {
            name: name.to_string(),
            phone_number: phone_number.to_string(),
        }
    }

    /// Encode as a line (without terminator).
    pub fn to_line(&self) -> String {
        format!("{}{}{}", self.name, FIELD_SEPARATOR, self.phone_number)
    }

    /// Rebuild a contact. Loaded records always become persons.
    pub fn into_person(self, address: impl Into<String>) -> Contact {
        Contact::person(self.name, self.phone_number, address)
    }
}

impl From<&Contact> for ContactRecord {
    fn from(contact: &Contact) -> Self {
        Self {
            name: contact.name().to_string(),
            phone_number: contact.phone_number().to_string(),
        }
    }
}

/// Encode contacts into file content, one terminated line each.
pub fn encode_contacts<'a>(contacts: impl IntoIterator<Item = &'a Contact>) -> String {
    let mut content = String::new();
    for contact in contacts {
        content.push_str(&ContactRecord::from(contact).to_line());
        content.push('\n');
    }
    content
}

/// Parse file content, skipping empty lines. Accepts `\n` and `\r\n`.
pub fn parse_records(content: &str) -> Vec<ContactRecord> {
    content
        .lines()
        .filter(|line| !line.is_empty())
        .map(ContactRecord::parse)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ContactKind;
    use rstest::rstest;

    #[rstest]
    #[case("Alice,555-1111", "Alice", "555-1111")]
    #[case("Alice", "Alice", "")]
    #[case("Alice,", "Alice", "")]
    #[case(",555", "", "555")]
    #[case("Alice,555,extra,fields", "Alice", "555")]
    #[case("Doe, John,555-3333", "Doe", " John")]
    fn given_line_when_parsing_then_takes_first_two_fields(
        #[case] line: &str,
        #[case] name: &str,
        #[case] phone: &str,
    ) {
        let record = ContactRecord::parse(line);

        assert_eq!(record.name, name);
        assert_eq!(record.phone_number, phone);
    }

    #[test]
    fn given_business_when_encoding_then_drops_company() {
        let contact = Contact::business("Acme", "555-2222", "Acme Corp");

        assert_eq!(encode_contacts([&contact]), "Acme,555-2222\n");
    }

    #[test]
    fn given_content_with_blank_and_crlf_lines_when_parsing_then_skips_blanks() {
        let records = parse_records("a,1\r\n\r\n\nb,2\n");

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].phone_number, "1");
        assert_eq!(records[1].name, "b");
    }

    #[test]
    fn given_record_when_rebuilding_then_is_person_with_given_address() {
        let contact = ContactRecord::parse("Acme,555").into_person("N/A");

        assert_eq!(contact.kind(), ContactKind::Person);
        assert!(contact.to_string().ends_with("Address -> N/A"));
    }
}
