use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

// ASCII digits only; `\d` would also accept other Unicode digit classes.
static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[0-9]{9,12}$").expect("valid phone regex"));

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Name cannot be empty")]
    EmptyName,

    #[error("Invalid phone number '{0}': expected 9 to 12 digits, optionally prefixed with '+'")]
    InvalidPhone(String),
}

/// Returns the trimmed name, or an error when nothing but whitespace is left.
pub fn validate_name(name: &str) -> Result<String, ValidationError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyName);
    }
    Ok(trimmed.to_string())
}

/// Checks the phone format. The number is returned verbatim.
pub fn validate_phone(phone: &str) -> Result<String, ValidationError> {
    if !PHONE_RE.is_match(phone) {
        return Err(ValidationError::InvalidPhone(phone.to_string()));
    }
    Ok(phone.to_string())
}

/// A stored contact entry.
///
/// Persisted as a three element JSON array `[name, phone, comment]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "(String, String, String)", into = "(String, String, String)")]
pub struct Record {
    pub name: String,
    pub phone: String,
    pub comment: String,
}

impl Record {
    pub fn new(
        name: impl Into<String>,
        phone: impl Into<String>,
        comment: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            comment: comment.into(),
        }
    }

    pub fn fields(&self) -> [&str; 3] {
        [&self.name, &self.phone, &self.comment]
    }

    pub fn field(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Phone => &self.phone,
            ContactField::Comment => &self.comment,
        }
    }
}

impl From<(String, String, String)> for Record {
    fn from((name, phone, comment): (String, String, String)) -> Self {
        Self {
            name,
            phone,
            comment,
        }
    }
}

impl From<Record> for (String, String, String) {
    fn from(record: Record) -> Self {
        (record.name, record.phone, record.comment)
    }
}

/// The record slot targeted by an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactField {
    Name,
    Phone,
    Comment,
}

impl ContactField {
    pub const ALL: [ContactField; 3] = [
        ContactField::Name,
        ContactField::Phone,
        ContactField::Comment,
    ];

    /// Validates and normalizes a new value for this field.
    pub fn validate(self, value: &str) -> Result<String, ValidationError> {
        match self {
            ContactField::Name => validate_name(value),
            ContactField::Phone => validate_phone(value),
            ContactField::Comment => Ok(value.to_string()),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Phone => "phone",
            ContactField::Comment => "comment",
        }
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContactField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "name" => Ok(ContactField::Name),
            "phone" => Ok(ContactField::Phone),
            "comment" => Ok(ContactField::Comment),
            other => Err(format!("Unknown contact field: {}", other)),
        }
    }
}

/// A validated contact. Only exists in a valid state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    name: String,
    phone: String,
    comment: Option<String>,
}

impl Contact {
    pub fn new(name: &str, phone: &str, comment: Option<&str>) -> Result<Self, ValidationError> {
        Ok(Self {
            name: validate_name(name)?,
            phone: validate_phone(phone)?,
            comment: comment.map(str::to_string),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn comment(&self) -> &str {
        self.comment.as_deref().unwrap_or_default()
    }

    pub fn to_record(&self) -> Record {
        Record::new(self.name.clone(), self.phone.clone(), self.comment())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_name() {
        let contact = Contact::new("  Alice  ", "123456789", None).unwrap();
        assert_eq!(contact.name(), "Alice");
    }

    #[test]
    fn rejects_blank_name() {
        assert_eq!(
            Contact::new("   ", "123456789", None),
            Err(ValidationError::EmptyName)
        );
        assert_eq!(validate_name(""), Err(ValidationError::EmptyName));
    }

    #[test]
    fn accepts_phone_bounds() {
        assert!(validate_phone("123456789").is_ok());
        assert!(validate_phone("123456789012").is_ok());
        assert!(validate_phone("+79991234567").is_ok());
    }

    #[test]
    fn rejects_bad_phones() {
        for phone in [
            "asd",
            "12345678",
            "1234567891011",
            "++123456789",
            "12345 6789",
            " 123456789",
            "",
            "١٢٣٤٥٦٧٨٩",
        ] {
            assert_eq!(
                validate_phone(phone),
                Err(ValidationError::InvalidPhone(phone.to_string())),
                "phone {:?} should be rejected",
                phone
            );
        }
    }

    #[test]
    fn phone_is_stored_verbatim() {
        let contact = Contact::new("Bob", "+123456789", Some("work")).unwrap();
        assert_eq!(contact.phone(), "+123456789");
    }

    #[test]
    fn missing_comment_exports_as_empty() {
        let contact = Contact::new("Bob", "123456789", None).unwrap();
        assert_eq!(contact.to_record(), Record::new("Bob", "123456789", ""));
    }

    #[test]
    fn comment_is_not_validated() {
        let contact = Contact::new("Bob", "123456789", Some("  ")).unwrap();
        assert_eq!(contact.to_record().comment, "  ");
    }

    #[test]
    fn record_serializes_as_array() {
        let record = Record::new("Иван", "123456789", "");
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"["Иван","123456789",""]"#);
    }

    #[test]
    fn record_rejects_wrong_arity() {
        assert!(serde_json::from_str::<Record>(r#"["a","b"]"#).is_err());
        assert!(serde_json::from_str::<Record>(r#"["a","b","c","d"]"#).is_err());
        assert!(serde_json::from_str::<Record>(r#"{"name":"a"}"#).is_err());
    }

    #[test]
    fn field_validation_mapping() {
        assert_eq!(ContactField::Name.validate(" x "), Ok("x".to_string()));
        assert!(ContactField::Phone.validate("x").is_err());
        assert_eq!(ContactField::Comment.validate(""), Ok(String::new()));
    }

    #[test]
    fn field_from_str() {
        assert_eq!("Phone".parse::<ContactField>(), Ok(ContactField::Phone));
        assert!("email".parse::<ContactField>().is_err());
    }
}
