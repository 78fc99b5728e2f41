// File: src/evaluator.rs
// Purpose: Run a schema against a record and collect one message per failing field

use crate::record::FormRecord;
use crate::result::{ErrorMap, Validate, ValidationResult};
use crate::rule::RuleContext;
use crate::schema::Schema;
use crate::signup::shared_signup_schema;
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// Evaluation switches
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidateOptions {
    /// Return as soon as one field fails instead of checking every field
    pub stop_on_first_field_error: bool,
}

/// Validate `record` against `schema`, judging dates against the local calendar date
pub fn validate(schema: &Schema, record: &FormRecord, options: ValidateOptions) -> ValidationResult {
    validate_on(schema, record, options, Local::now().date_naive())
}

/// Validate `record` against `schema` as of `today`
///
/// Every field's chain runs in schema order. Within a chain the first failing rule
/// supplies the field's message and the rest of that chain is skipped; other fields
/// are still checked unless `stop_on_first_field_error` is set. Neither argument is
/// modified and the returned map is freshly built.
pub fn validate_on(
    schema: &Schema,
    record: &FormRecord,
    options: ValidateOptions,
    today: NaiveDate,
) -> ValidationResult {
    let ctx = RuleContext { record, today };
    let mut errors = ErrorMap::new();

    for (field, chain) in schema.iter() {
        let value = record.get(field);

        let failed = chain.iter().find(|rule| {
            let passed = rule.passes(value, &ctx);
            trace!(%field, kind = %rule.kind(), passed, "rule evaluated");
            !passed
        });

        if let Some(rule) = failed {
            debug!(%field, kind = %rule.kind(), "field failed validation");
            errors.insert(field, rule.message());

            if options.stop_on_first_field_error {
                break;
            }
        }
    }

    debug!(error_count = errors.len(), "validation finished");
    ValidationResult::from_errors(errors)
}

impl Validate for FormRecord {
    /// Validate against the built-in signup schema
    fn validate(&self) -> Result<(), ErrorMap> {
        validate(shared_signup_schema(), self, ValidateOptions::default()).into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::Field;
    use crate::rule::Rule;
    use crate::signup::messages;
    use pretty_assertions::assert_eq;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    fn small_schema() -> Schema {
        Schema::new()
            .define(Field::FirstName, [Rule::required("First name is required")])
            .unwrap()
            .define(
                Field::Email,
                [Rule::required("Email is required"), Rule::email("Invalid email format")],
            )
            .unwrap()
            .define(Field::Gender, [Rule::required("Gender is required")])
            .unwrap()
    }

    #[test]
    fn test_all_fields_checked_by_default() {
        let result = validate_on(
            &small_schema(),
            &FormRecord::new(),
            ValidateOptions::default(),
            today(),
        );

        assert!(!result.valid);
        assert_eq!(
            result.errors.fields().collect::<Vec<_>>(),
            vec![Field::FirstName, Field::Email, Field::Gender]
        );
    }

    #[test]
    fn test_stop_on_first_field_error() {
        let options = ValidateOptions {
            stop_on_first_field_error: true,
        };
        let result = validate_on(&small_schema(), &FormRecord::new(), options, today());

        assert_eq!(result.errors.len(), 1);
        assert!(result.errors.contains(Field::FirstName));
    }

    #[test]
    fn test_chain_stops_at_first_failure() {
        let record = FormRecord::new().with(Field::FirstName, "Ada").unwrap();
        let result = validate_on(&small_schema(), &record, ValidateOptions::default(), today());

        // Empty email reports only the required message
        assert_eq!(result.get_error(Field::Email), Some("Email is required"));
    }

    #[test]
    fn test_fields_outside_schema_are_ignored() {
        let record = FormRecord::new()
            .with(Field::FirstName, "Ada")
            .unwrap()
            .with(Field::Email, "ada@example.com")
            .unwrap()
            .with(Field::Gender, "female")
            .unwrap();

        let result = validate_on(&small_schema(), &record, ValidateOptions::default(), today());
        assert_eq!(result, ValidationResult::success());
    }

    #[test]
    fn test_empty_schema_is_always_valid() {
        let result = validate_on(
            &Schema::new(),
            &FormRecord::new(),
            ValidateOptions::default(),
            today(),
        );
        assert!(result.valid);
    }

    #[test]
    fn test_validate_trait_uses_signup_schema() {
        let errors = FormRecord::new().validate().unwrap_err();
        assert_eq!(errors.len(), 10);
        assert_eq!(errors.get(Field::Age), Some(messages::AGE_REQUIRED));
    }

    #[test]
    fn test_options_from_toml() {
        let options: ValidateOptions = toml::from_str("stop_on_first_field_error = true").unwrap();
        assert!(options.stop_on_first_field_error);

        let defaults: ValidateOptions = toml::from_str("").unwrap();
        assert_eq!(defaults, ValidateOptions::default());
    }
}
