// File: src/session.rs
// Purpose: Submit flow for a form shell: edit the record, validate on submit, keep the latest errors

use crate::evaluator::{validate, validate_on, ValidateOptions};
use crate::field::Field;
use crate::record::{FormRecord, RecordError};
use crate::result::{ErrorMap, ValidationResult};
use crate::schema::Schema;
use crate::value::FieldValue;
use chrono::NaiveDate;
use tracing::{debug, info};

/// Result of a submit attempt
#[derive(Debug, PartialEq, Eq)]
pub enum Submission<'a> {
    /// Validation passed; the record is ready to hand on
    Accepted(&'a FormRecord),
    /// Validation failed; messages to show beside their fields
    Rejected(&'a ErrorMap),
}

impl<'a> Submission<'a> {
    /// Check if validation passed
    pub fn is_accepted(&self) -> bool {
        matches!(self, Submission::Accepted(_))
    }

    /// Extract the record if validation passed
    pub fn ok(self) -> Option<&'a FormRecord> {
        match self {
            Submission::Accepted(record) => Some(record),
            Submission::Rejected(_) => None,
        }
    }

    /// Extract the errors if validation failed
    pub fn err(self) -> Option<&'a ErrorMap> {
        match self {
            Submission::Accepted(_) => None,
            Submission::Rejected(errors) => Some(errors),
        }
    }
}

/// State a form shell keeps between events
///
/// Edits replace field values. Errors only change on submit: every submit
/// re-validates the whole record and replaces the previous errors outright.
#[derive(Debug, Clone)]
pub struct FormSession<'s> {
    schema: &'s Schema,
    options: ValidateOptions,
    record: FormRecord,
    last: Option<ValidationResult>,
}

impl<'s> FormSession<'s> {
    pub fn new(schema: &'s Schema) -> Self {
        Self::with_record(schema, FormRecord::new())
    }

    pub fn with_record(schema: &'s Schema, record: FormRecord) -> Self {
        Self {
            schema,
            options: ValidateOptions::default(),
            record,
            last: None,
        }
    }

    pub fn options(mut self, options: ValidateOptions) -> Self {
        self.options = options;
        self
    }

    pub fn record(&self) -> &FormRecord {
        &self.record
    }

    /// Text input or select change
    pub fn edit(&mut self, field: Field, value: impl Into<FieldValue>) -> Result<(), RecordError> {
        self.record.set(field, value)
    }

    /// Checkbox change
    pub fn toggle(&mut self, field: Field, item: &str, checked: bool) -> Result<(), RecordError> {
        self.record.toggle(field, item, checked)
    }

    /// Validate the current record against today's date
    pub fn submit(&mut self) -> Submission<'_> {
        let result = validate(self.schema, &self.record, self.options);
        self.finish(result)
    }

    /// Validate the current record as of `today`
    pub fn submit_on(&mut self, today: NaiveDate) -> Submission<'_> {
        let result = validate_on(self.schema, &self.record, self.options, today);
        self.finish(result)
    }

    fn finish(&mut self, result: ValidationResult) -> Submission<'_> {
        if result.valid {
            info!("form submitted");
        } else {
            debug!(error_count = result.errors.len(), "form submission rejected");
        }

        let last = self.last.insert(result);
        if last.valid {
            Submission::Accepted(&self.record)
        } else {
            Submission::Rejected(&last.errors)
        }
    }

    /// Message to render beside `field` after the latest submit
    pub fn error(&self, field: Field) -> Option<&str> {
        self.last.as_ref().and_then(|result| result.get_error(field))
    }

    /// Result of the latest submit, if any
    pub fn last_result(&self) -> Option<&ValidationResult> {
        self.last.as_ref()
    }
}
