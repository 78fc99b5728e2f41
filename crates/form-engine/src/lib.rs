// File: src/lib.rs
// Purpose: Signup form validation engine

//! Validation engine for the signup form.
//!
//! A [`Schema`] holds an ordered rule chain per field. [`validate`] runs every
//! chain against a [`FormRecord`] and returns a [`ValidationResult`] whose
//! [`ErrorMap`] carries the first failing rule's message for each failing field.
//!
//! ```
//! use form_engine::{signup_schema, validate_on, Field, FormRecord, ValidateOptions};
//! use chrono::NaiveDate;
//!
//! let schema = signup_schema().unwrap();
//! let record = FormRecord::new().with(Field::Email, "not-an-email").unwrap();
//! let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
//!
//! let result = validate_on(&schema, &record, ValidateOptions::default(), today);
//! assert!(!result.valid);
//! assert_eq!(result.errors.get(Field::Email), Some("Invalid email format"));
//! ```

pub mod config;
pub mod evaluator;
pub mod field;
pub mod record;
pub mod result;
pub mod rule;
pub mod schema;
pub mod session;
pub mod signup;
pub mod value;

pub use config::EngineConfig;
pub use evaluator::{validate, validate_on, ValidateOptions};
pub use field::{Field, ValueShape};
pub use record::{FormRecord, RecordError};
pub use result::{ErrorMap, Validate, ValidationResult};
pub use rule::{Check, Rule, RuleContext, RuleKind};
pub use schema::{RuleChain, Schema, SchemaError};
pub use session::{FormSession, Submission};
pub use signup::{messages, shared_signup_schema, signup_schema, INTEREST_VOCABULARY};
pub use value::FieldValue;

// Re-export the primitive checks for custom rules and shells
pub use form_validators as validators;
