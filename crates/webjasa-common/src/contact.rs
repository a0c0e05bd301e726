//! Contact form state.
//!
//! The form is a flat field → value mapping. Edits overwrite one field and
//! leave the rest alone; submitting only produces an acknowledgment. No field
//! is validated, and required markers exist for display only.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

/// Shown after every submission.
pub const ACK_MESSAGE: &str =
    "Terima kasih! Pesan Anda telah dikirim. Tim kami akan menghubungi Anda segera.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactField {
    Name,
    Email,
    Phone,
    Company,
    Service,
    Budget,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 7] = [
        ContactField::Name,
        ContactField::Email,
        ContactField::Phone,
        ContactField::Company,
        ContactField::Service,
        ContactField::Budget,
        ContactField::Message,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Phone => "phone",
            ContactField::Company => "company",
            ContactField::Service => "service",
            ContactField::Budget => "budget",
            ContactField::Message => "message",
        }
    }

    /// Whether the form shows a required marker next to this field.
    pub fn is_marked_required(&self) -> bool {
        !matches!(self, ContactField::Company | ContactField::Budget)
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown contact field: {0}")]
pub struct UnknownField(pub String);

impl FromStr for ContactField {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ContactField::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactForm {
    fields: BTreeMap<ContactField, String>,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self {
            fields: ContactField::ALL
                .into_iter()
                .map(|f| (f, String::new()))
                .collect(),
        }
    }
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: ContactField) -> &str {
        self.fields.get(&field).map(String::as_str).unwrap_or("")
    }

    pub fn set(&mut self, field: ContactField, value: impl Into<String>) {
        self.fields.insert(field, value.into());
    }

    pub fn with_edit(mut self, field: ContactField, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// Applies edits in order; the last edit to a field wins.
    pub fn apply_edits<I, V>(mut self, edits: I) -> Self
    where
        I: IntoIterator<Item = (ContactField, V)>,
        V: Into<String>,
    {
        for (field, value) in edits {
            self.set(field, value);
        }
        self
    }

    /// Field name → current value, for rendering.
    pub fn values(&self) -> BTreeMap<&'static str, String> {
        self.fields
            .iter()
            .map(|(f, v)| (f.as_str(), v.clone()))
            .collect()
    }

    /// Never fails and never clears the form.
    pub fn submit(&self) -> Acknowledgment {
        Acknowledgment {
            message: ACK_MESSAGE,
            inquiry: Inquiry {
                id: Uuid::new_v4(),
                received_at: Utc::now(),
                fields: self.values(),
            },
        }
    }
}

/// Snapshot of the form taken at submission.
#[derive(Debug, Clone, Serialize)]
pub struct Inquiry {
    pub id: Uuid,
    pub received_at: DateTime<Utc>,
    pub fields: BTreeMap<&'static str, String>,
}

impl Inquiry {
    pub fn field(&self, field: ContactField) -> &str {
        self.fields.get(field.as_str()).map(String::as_str).unwrap_or("")
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Acknowledgment {
    pub message: &'static str,
    pub inquiry: Inquiry,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use std::collections::HashMap;

    #[test]
    fn test_new_form_has_every_field_empty() {
        let form = ContactForm::new();
        for f in ContactField::ALL {
            assert_eq!(form.get(f), "");
        }
        assert_eq!(form.values().len(), 7);
    }

    #[test]
    fn test_edit_touches_only_one_field() {
        let form = ContactForm::new()
            .with_edit(ContactField::Name, "Budi")
            .with_edit(ContactField::Email, "budi@example.com")
            .with_edit(ContactField::Name, "Budi Santoso");
        assert_eq!(form.get(ContactField::Name), "Budi Santoso");
        assert_eq!(form.get(ContactField::Email), "budi@example.com");
        assert_eq!(form.get(ContactField::Message), "");
    }

    #[test]
    fn test_field_names_round_trip() {
        for f in ContactField::ALL {
            assert_eq!(f.as_str().parse::<ContactField>(), Ok(f));
        }
        assert_eq!(
            "website".parse::<ContactField>(),
            Err(UnknownField("website".into()))
        );
    }

    #[test]
    fn test_required_markers() {
        let marked: Vec<_> = ContactField::ALL
            .into_iter()
            .filter(ContactField::is_marked_required)
            .map(|f| f.as_str())
            .collect();
        assert_eq!(marked, vec!["name", "email", "phone", "service", "message"]);
    }

    #[test]
    fn test_submit_empty_form_still_acknowledges() {
        let form = ContactForm::new();
        let ack = form.submit();
        assert_eq!(ack.message, ACK_MESSAGE);
        assert_eq!(ack.inquiry.field(ContactField::Name), "");
    }

    #[test]
    fn test_submit_does_not_reset_form() {
        let form = ContactForm::new().with_edit(ContactField::Budget, "2-5jt");
        let ack = form.submit();
        assert_eq!(form.get(ContactField::Budget), "2-5jt");
        assert_eq!(ack.inquiry.field(ContactField::Budget), "2-5jt");
    }

    fn field_strategy() -> impl Strategy<Value = ContactField> {
        prop::sample::select(ContactField::ALL.to_vec())
    }

    proptest! {
        #[test]
        fn prop_last_write_wins(edits in prop::collection::vec((field_strategy(), ".{0,12}"), 0..48)) {
            let mut expected: HashMap<ContactField, String> = HashMap::new();
            for (f, v) in &edits {
                expected.insert(*f, v.clone());
            }
            let form = ContactForm::new().apply_edits(edits);
            for f in ContactField::ALL {
                let want = expected.get(&f).map(String::as_str).unwrap_or("");
                prop_assert_eq!(form.get(f), want);
            }
        }

        #[test]
        fn prop_submit_always_acknowledges(edits in prop::collection::vec((field_strategy(), "\\PC{0,40}"), 0..16)) {
            let form = ContactForm::new().apply_edits(edits);
            let ack = form.submit();
            prop_assert_eq!(ack.message, ACK_MESSAGE);
            prop_assert_eq!(ack.inquiry.fields.len(), ContactField::ALL.len());
        }
    }
}
