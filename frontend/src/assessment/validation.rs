use std::collections::BTreeMap;

use super::applicant::{ApplicantField, ApplicantRecord};

pub const REQUIRED_MESSAGE: &str = "This field is required";
pub const INCOMPLETE_FORM_MESSAGE: &str = "Please fill in all fields before submitting.";

/// Per-field messages. Only emptiness is checked; number bounds are left to
/// the input widgets.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ValidationErrors {
    messages: BTreeMap<ApplicantField, &'static str>,
}

impl ValidationErrors {
    pub fn revalidate_field(&mut self, field: ApplicantField, value: &str) {
        if value.is_empty() {
            self.messages.insert(field, REQUIRED_MESSAGE);
        } else {
            self.messages.remove(&field);
        }
    }

    pub fn message(&self, field: ApplicantField) -> Option<&'static str> {
        self.messages.get(&field).copied()
    }

    #[cfg(test)]
    pub fn fields(&self) -> impl Iterator<Item = ApplicantField> + '_ {
        self.messages.keys().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.messages.len()
    }
}

pub fn validate_record(record: &ApplicantRecord) -> ValidationErrors {
    ValidationErrors {
        messages: record
            .empty_fields()
            .map(|field| (field, REQUIRED_MESSAGE))
            .collect(),
    }
}
