// File: src/record.rs
// Purpose: Mutable record of raw field values owned by the form shell

use crate::field::{Field, ValueShape};
use crate::value::FieldValue;
use form_validators::dedup_preserving_order;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

/// Errors raised when a shell writes a value the record cannot hold
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("field `{field}` holds a {expected} value")]
    TypeMismatch { field: Field, expected: ValueShape },

    #[error("unknown field `{0}`")]
    UnknownField(String),
}

/// Current value of every form field
///
/// Every field is always present; an empty string or empty list means "unset".
/// Values are replaced whole, never edited in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    try_from = "BTreeMap<String, FieldValue>",
    into = "BTreeMap<Field, FieldValue>"
)]
pub struct FormRecord {
    values: [FieldValue; Field::COUNT],
}

impl FormRecord {
    /// A record with every field unset
    pub fn new() -> Self {
        Self {
            values: Field::ALL.map(|field| FieldValue::empty(field.shape())),
        }
    }

    /// Builder-style [`FormRecord::set`]
    pub fn with(
        mut self,
        field: Field,
        value: impl Into<FieldValue>,
    ) -> Result<Self, RecordError> {
        self.set(field, value)?;
        Ok(self)
    }

    pub fn get(&self, field: Field) -> &FieldValue {
        &self.values[field as usize]
    }

    /// Text of a text field; list fields read as ""
    pub fn text(&self, field: Field) -> &str {
        self.get(field).as_text().unwrap_or_default()
    }

    /// Items of a list field; text fields read as empty
    pub fn items(&self, field: Field) -> &[String] {
        self.get(field).as_list().unwrap_or_default()
    }

    /// Replace a field's value
    ///
    /// The value must have the field's shape. Repeated list entries are dropped.
    pub fn set(&mut self, field: Field, value: impl Into<FieldValue>) -> Result<(), RecordError> {
        let value = match value.into() {
            FieldValue::List(items) => FieldValue::List(dedup_preserving_order(items)),
            text => text,
        };

        if value.shape() != field.shape() {
            return Err(RecordError::TypeMismatch {
                field,
                expected: field.shape(),
            });
        }

        self.values[field as usize] = value;
        Ok(())
    }

    /// Replace a text field's value
    pub fn set_text(&mut self, field: Field, text: impl Into<String>) -> Result<(), RecordError> {
        self.set(field, FieldValue::Text(text.into()))
    }

    /// Checkbox edit on a list field
    ///
    /// Checking adds `item` unless it is already there; unchecking removes it, and
    /// unchecking an absent item does nothing.
    pub fn toggle(&mut self, field: Field, item: &str, checked: bool) -> Result<(), RecordError> {
        let FieldValue::List(current) = self.get(field) else {
            return Err(RecordError::TypeMismatch {
                field,
                expected: field.shape(),
            });
        };

        let updated: Vec<String> = if checked {
            if current.iter().any(|existing| existing == item) {
                return Ok(());
            }
            current
                .iter()
                .cloned()
                .chain(std::iter::once(item.to_string()))
                .collect()
        } else {
            current
                .iter()
                .filter(|existing| existing.as_str() != item)
                .cloned()
                .collect()
        };

        self.set(field, FieldValue::List(updated))
    }

    /// Fields with their values, in field order
    pub fn iter(&self) -> impl Iterator<Item = (Field, &FieldValue)> {
        Field::ALL.into_iter().zip(self.values.iter())
    }
}

impl Default for FormRecord {
    fn default() -> Self {
        Self::new()
    }
}

impl TryFrom<BTreeMap<String, FieldValue>> for FormRecord {
    type Error = RecordError;

    /// Missing fields stay unset
    fn try_from(raw: BTreeMap<String, FieldValue>) -> Result<Self, Self::Error> {
        let mut record = FormRecord::new();
        for (name, value) in raw {
            let field: Field = name.parse()?;
            record.set(field, value)?;
        }
        Ok(record)
    }
}

impl From<FormRecord> for BTreeMap<Field, FieldValue> {
    fn from(record: FormRecord) -> Self {
        Field::ALL.into_iter().zip(record.values).collect()
    }
}
