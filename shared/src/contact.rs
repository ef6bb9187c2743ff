use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::validation::validate_not_blank;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ContactField {
    Name,
    Email,
    Phone,
    Note,
}

impl ContactField {
    pub const REQUIRED: [ContactField; 3] = [ContactField::Name, ContactField::Email, ContactField::Phone];

    pub fn key(&self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Phone => "phone",
            ContactField::Note => "note",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "name" => Some(ContactField::Name),
            "email" => Some(ContactField::Email),
            "phone" => Some(ContactField::Phone),
            "note" => Some(ContactField::Note),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ContactField::Name => "Name",
            ContactField::Email => "Email",
            ContactField::Phone => "Phone",
            ContactField::Note => "Note",
        }
    }
}

/// What the visitor has typed into the claim form, untrimmed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct ContactForm {
    #[validate(custom = "validate_not_blank")]
    pub name: String,
    #[validate(custom = "validate_not_blank")]
    pub email: String,
    #[validate(custom = "validate_not_blank")]
    pub phone: String,
    pub note: String,
}

impl ContactForm {
    pub fn value(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Phone => &self.phone,
            ContactField::Note => &self.note,
        }
    }

    pub fn set(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Phone => self.phone = value,
            ContactField::Note => self.note = value,
        }
    }

    /// Required fields that are empty once trimmed, in form order.
    pub fn missing_fields(&self) -> Vec<ContactField> {
        match self.validate() {
            Ok(()) => Vec::new(),
            Err(errors) => {
                let mut fields: Vec<ContactField> = errors
                    .field_errors()
                    .keys()
                    .filter_map(|key| ContactField::from_key(key))
                    .collect();
                fields.sort();
                fields
            }
        }
    }

    pub fn to_submission(&self, prize: &str, captured_at: DateTime<Utc>) -> ContactSubmission {
        ContactSubmission {
            prize: prize.to_string(),
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            note: self.note.trim().to_string(),
            timestamp: captured_at.to_rfc3339_opts(SecondsFormat::Millis, true),
            has_completed: true,
        }
    }
}

/// The record written to the store and mirrored to the local cache.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmission {
    pub prize: String,
    #[validate(custom = "validate_not_blank")]
    pub name: String,
    #[validate(custom = "validate_not_blank")]
    pub email: String,
    #[validate(custom = "validate_not_blank")]
    pub phone: String,
    #[serde(default)]
    pub note: String,
    pub timestamp: String,
    pub has_completed: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn filled() -> ContactForm {
        ContactForm {
            name: "  Asha Rao ".to_string(),
            email: "asha@example.com ".to_string(),
            phone: " +91 98765 43210".to_string(),
            note: String::new(),
        }
    }

    #[test]
    fn test_note_is_optional() {
        assert!(filled().missing_fields().is_empty());
    }

    #[test]
    fn test_blank_required_fields_reported_in_order() {
        let mut form = filled();
        form.phone = "   ".to_string();
        form.name = String::new();
        assert_eq!(form.missing_fields(), vec![ContactField::Name, ContactField::Phone]);
    }

    #[test]
    fn test_submission_is_trimmed_and_camel_cased() {
        let captured_at = Utc.with_ymd_and_hms(2024, 11, 2, 10, 30, 0).unwrap();
        let submission = filled().to_submission("Flat 10% off", captured_at);
        assert_eq!(submission.name, "Asha Rao");
        assert_eq!(submission.phone, "+91 98765 43210");

        let json = serde_json::to_value(&submission).unwrap();
        assert_eq!(json["hasCompleted"], true);
        assert_eq!(json["prize"], "Flat 10% off");
        assert_eq!(json["timestamp"], "2024-11-02T10:30:00.000Z");
    }
}
