// File: src/signup.rs
// Purpose: Rule chains and messages of the signup form

use crate::field::Field;
use crate::rule::Rule;
use crate::schema::{Schema, SchemaError};
use form_validators::PasswordPolicy;
use once_cell::sync::Lazy;

/// Checkbox choices for `interests`
pub const INTEREST_VOCABULARY: &[&str] = &["coding", "sports", "reading"];

pub const MIN_AGE: i64 = 18;
pub const MAX_AGE: i64 = 100;
pub const PHONE_DIGITS: usize = 10;
pub const PASSWORD_MIN_LENGTH: usize = 8;

pub mod messages {
    pub const FIRST_NAME_REQUIRED: &str = "First name is required";
    pub const LAST_NAME_REQUIRED: &str = "Last name is required";
    pub const EMAIL_REQUIRED: &str = "Email is required";
    pub const EMAIL_FORMAT: &str = "Invalid email format";
    pub const PHONE_REQUIRED: &str = "Phone number is required";
    pub const PHONE_FORMAT: &str = "Phone number must be 10 digits";
    pub const PASSWORD_REQUIRED: &str = "Password is required";
    pub const PASSWORD_POLICY: &str = "Password must be at least 8 characters long and contain at least one symbol, one number, one uppercase letter, and one lowercase letter";
    pub const CONFIRM_PASSWORD_REQUIRED: &str = "Confirm password is required";
    pub const PASSWORDS_MATCH: &str = "Passwords should match";
    pub const AGE_REQUIRED: &str = "Age is required";
    pub const AGE_NOT_A_NUMBER: &str = "Age must be a number";
    pub const AGE_TOO_YOUNG: &str = "You must be at least 18 years old";
    pub const AGE_TOO_OLD: &str = "You cannot be older than 100 years";
    pub const GENDER_REQUIRED: &str = "Gender is required";
    pub const INTERESTS_REQUIRED: &str = "Select at least one interest";
    pub const BIRTH_DATE_REQUIRED: &str = "Date of birth is required";
    pub const BIRTH_DATE_INVALID: &str = "Date of birth must be a valid date";
    pub const BIRTH_DATE_FUTURE: &str = "Date of birth cannot be a future date";
}

/// Build the signup schema
///
/// Fields are defined in form order, which is also the order errors are listed in.
pub fn signup_schema() -> Result<Schema, SchemaError> {
    use self::messages::*;

    Schema::new()
        .define(Field::FirstName, [Rule::required(FIRST_NAME_REQUIRED)])?
        .define(Field::LastName, [Rule::required(LAST_NAME_REQUIRED)])?
        .define(
            Field::Email,
            [Rule::required(EMAIL_REQUIRED), Rule::email(EMAIL_FORMAT)],
        )?
        .define(
            Field::PhoneNumber,
            [
                Rule::required(PHONE_REQUIRED),
                Rule::digits(PHONE_DIGITS, PHONE_FORMAT),
            ],
        )?
        .define(
            Field::Password,
            [
                Rule::required(PASSWORD_REQUIRED),
                Rule::password(PasswordPolicy::new(PASSWORD_MIN_LENGTH), PASSWORD_POLICY),
            ],
        )?
        .define(
            Field::ConfirmPassword,
            [
                Rule::required(CONFIRM_PASSWORD_REQUIRED),
                Rule::equals_field(Field::Password, PASSWORDS_MATCH),
            ],
        )?
        .define(
            Field::Age,
            [
                Rule::required(AGE_REQUIRED),
                Rule::integer(AGE_NOT_A_NUMBER),
                Rule::min(MIN_AGE, AGE_TOO_YOUNG),
                Rule::max(MAX_AGE, AGE_TOO_OLD),
            ],
        )?
        .define(Field::Gender, [Rule::required(GENDER_REQUIRED)])?
        .define(
            Field::Interests,
            [Rule::min_members(1, INTEREST_VOCABULARY, INTERESTS_REQUIRED)],
        )?
        .define(
            Field::BirthDate,
            [
                Rule::required(BIRTH_DATE_REQUIRED),
                Rule::date(BIRTH_DATE_INVALID),
                Rule::not_future(BIRTH_DATE_FUTURE),
            ],
        )
}

static SIGNUP_SCHEMA: Lazy<Schema> =
    Lazy::new(|| signup_schema().expect("signup schema is well-formed"));

/// Shared, lazily built signup schema
pub fn shared_signup_schema() -> &'static Schema {
    &SIGNUP_SCHEMA
}
