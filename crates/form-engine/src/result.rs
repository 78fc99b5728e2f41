// File: src/result.rs
// Purpose: Validation results and the field -> message error map

use crate::field::Field;
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

/// Trait for values that can be validated
pub trait Validate {
    /// Returns Ok(()) if valid, or Err with one message per failing field
    fn validate(&self) -> Result<(), ErrorMap>;
}

/// One message per failing field, listed in schema order
///
/// Fields that passed are absent. A map is built once per validation run and not
/// changed afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorMap {
    entries: Vec<(Field, String)>,
}

impl ErrorMap {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Callers record at most one message per field
    pub(crate) fn insert(&mut self, field: Field, message: impl Into<String>) {
        debug_assert!(!self.contains(field), "{} reported twice", field);
        self.entries.push((field, message.into()));
    }

    /// Message for a field, if it failed
    pub fn get(&self, field: Field) -> Option<&str> {
        self.entries
            .iter()
            .find(|(failed, _)| *failed == field)
            .map(|(_, message)| message.as_str())
    }

    pub fn contains(&self, field: Field) -> bool {
        self.get(field).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.entries.iter().map(|(field, _)| *field)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.entries
            .iter()
            .map(|(field, message)| (*field, message.as_str()))
    }
}

impl Serialize for ErrorMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (field, message) in &self.entries {
            map.serialize_entry(field, message)?;
        }
        map.end()
    }
}

/// Outcome of one validation run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    pub valid: bool,
    pub errors: ErrorMap,
}

impl ValidationResult {
    /// Create a successful validation result
    pub fn success() -> Self {
        Self {
            valid: true,
            errors: ErrorMap::new(),
        }
    }

    /// `valid` is derived from the map, never set independently
    pub fn from_errors(errors: ErrorMap) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
        }
    }

    /// Check if there are any errors
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Get the error for a specific field
    pub fn get_error(&self, field: Field) -> Option<&str> {
        self.errors.get(field)
    }

    pub fn into_result(self) -> Result<(), ErrorMap> {
        if self.valid {
            Ok(())
        } else {
            Err(self.errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_map_keeps_insertion_order() {
        let mut errors = ErrorMap::new();
        errors.insert(Field::Email, "Invalid email format");
        errors.insert(Field::Age, "Age must be a number");
        errors.insert(Field::FirstName, "First name is required");

        let fields: Vec<_> = errors.fields().collect();
        assert_eq!(fields, vec![Field::Email, Field::Age, Field::FirstName]);
        assert_eq!(errors.get(Field::Age), Some("Age must be a number"));
        assert_eq!(errors.get(Field::Gender), None);
    }

    #[test]
    fn test_error_map_serializes_as_object() {
        let mut errors = ErrorMap::new();
        errors.insert(Field::ConfirmPassword, "Passwords should match");

        let json = serde_json::to_string(&errors).unwrap();
        assert_eq!(json, r#"{"confirmPassword":"Passwords should match"}"#);
    }

    #[test]
    fn test_validation_result() {
        let ok = ValidationResult::success();
        assert!(ok.valid);
        assert!(!ok.has_errors());
        assert!(ok.into_result().is_ok());

        let mut errors = ErrorMap::new();
        errors.insert(Field::Gender, "Gender is required");
        let failed = ValidationResult::from_errors(errors);
        assert!(!failed.valid);
        assert_eq!(failed.get_error(Field::Gender), Some("Gender is required"));
        assert_eq!(failed.into_result().unwrap_err().len(), 1);
    }

    #[test]
    fn test_result_json_shape() {
        let json = serde_json::to_value(ValidationResult::success()).unwrap();
        assert_eq!(json, serde_json::json!({ "valid": true, "errors": {} }));
    }
}
