//! Client-side form validation.
//!
//! Each form keeps its raw input as strings, validates into a [`FieldErrors`]
//! map keyed by the same field names the backend uses, and converts into the
//! request DTO only once that map is empty.

pub mod apply;
pub mod contact;
pub mod login;
pub mod organizer;
pub mod rules;
pub mod signup;

use std::collections::BTreeMap;

/// Field name to the first message that applies to it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.insert(field.into(), message.into());
    }

    /// Records `result` under `field` when it is an error.
    pub fn check(&mut self, field: &str, result: Result<(), String>) {
        if let Err(message) = result {
            self.insert(field, message);
        }
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn remove(&mut self, field: &str) -> Option<String> {
        self.0.remove(field)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn extend(&mut self, other: FieldErrors) {
        self.0.extend(other.0);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Message for the alphabetically first field, for a summary banner.
    pub fn first_message(&self) -> Option<&str> {
        self.0.values().next().map(String::as_str)
    }

    pub fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_only_records_failures() {
        let mut errors = FieldErrors::new();
        errors.check("name", Ok(()));
        errors.check("email", Err("Email is required".into()));
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("email"), Some("Email is required"));
        assert!(!errors.contains("name"));
        assert!(errors.clone().into_result().is_err());
        errors.remove("email");
        assert!(errors.into_result().is_ok());
    }
}
