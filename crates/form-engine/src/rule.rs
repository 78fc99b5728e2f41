// File: src/rule.rs
// Purpose: Typed rule predicates paired with their failure messages

use crate::field::Field;
use crate::record::FormRecord;
use crate::value::FieldValue;
use chrono::NaiveDate;
use form_validators as checks;
use form_validators::PasswordPolicy;
use serde::Serialize;
use std::borrow::Cow;
use std::fmt;

/// Category of a rule, reported alongside failures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum RuleKind {
    Required,
    Format,
    Range,
    Length,
    EqualsField,
    Membership,
    NotFuture,
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RuleKind::Required => "required",
            RuleKind::Format => "format",
            RuleKind::Range => "range",
            RuleKind::Length => "length",
            RuleKind::EqualsField => "equalsField",
            RuleKind::Membership => "membership",
            RuleKind::NotFuture => "notFuture",
        };
        f.write_str(name)
    }
}

/// The predicate half of a rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Check {
    /// Non-blank text or a non-empty list
    Required,
    Email,
    /// Exactly this many ASCII digits
    Digits(usize),
    /// Text coerces to an integer
    Integer,
    /// Text parses as a calendar date
    Date,
    Password(PasswordPolicy),
    Min(i64),
    Max(i64),
    /// Equal to the other field's value in the same record
    EqualsField(Field),
    /// At least `min` distinct list items drawn from `vocabulary`
    MinMembers {
        min: usize,
        vocabulary: &'static [&'static str],
    },
    /// Calendar date on or before the evaluation date
    NotFuture,
}

impl Check {
    pub fn kind(&self) -> RuleKind {
        match self {
            Check::Required => RuleKind::Required,
            Check::Email | Check::Digits(_) | Check::Integer | Check::Date => RuleKind::Format,
            Check::Password(_) => RuleKind::Length,
            Check::Min(_) | Check::Max(_) => RuleKind::Range,
            Check::EqualsField(_) => RuleKind::EqualsField,
            Check::MinMembers { .. } => RuleKind::Membership,
            Check::NotFuture => RuleKind::NotFuture,
        }
    }

    /// Format, range and date checks leave an unset value to `Required`
    fn skips_unset(&self) -> bool {
        !matches!(
            self,
            Check::Required | Check::EqualsField(_) | Check::MinMembers { .. }
        )
    }
}

impl fmt::Display for Check {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Check::Required => f.write_str("required"),
            Check::Email => f.write_str("email"),
            Check::Digits(n) => write!(f, "digits({})", n),
            Check::Integer => f.write_str("integer"),
            Check::Date => f.write_str("date"),
            Check::Password(policy) => write!(f, "password(min {})", policy.min_length),
            Check::Min(n) => write!(f, "min({})", n),
            Check::Max(n) => write!(f, "max({})", n),
            Check::EqualsField(other) => write!(f, "equalsField({})", other),
            Check::MinMembers { min, vocabulary } => {
                write!(f, "minMembers({} of {})", min, vocabulary.join("|"))
            }
            Check::NotFuture => f.write_str("notFuture"),
        }
    }
}

/// What a rule may read besides its own field's value
#[derive(Debug, Clone, Copy)]
pub struct RuleContext<'a> {
    pub record: &'a FormRecord,
    pub today: NaiveDate,
}

/// A check and the message shown when it fails
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    check: Check,
    message: Cow<'static, str>,
}

impl Rule {
    pub fn new(check: Check, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            check,
            message: message.into(),
        }
    }

    pub fn required(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(Check::Required, message)
    }

    pub fn email(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(Check::Email, message)
    }

    pub fn digits(count: usize, message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(Check::Digits(count), message)
    }

    pub fn integer(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(Check::Integer, message)
    }

    pub fn date(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(Check::Date, message)
    }

    pub fn password(policy: PasswordPolicy, message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(Check::Password(policy), message)
    }

    pub fn min(min: i64, message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(Check::Min(min), message)
    }

    pub fn max(max: i64, message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(Check::Max(max), message)
    }

    pub fn equals_field(other: Field, message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(Check::EqualsField(other), message)
    }

    pub fn min_members(
        min: usize,
        vocabulary: &'static [&'static str],
        message: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self::new(Check::MinMembers { min, vocabulary }, message)
    }

    pub fn not_future(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(Check::NotFuture, message)
    }

    pub fn check(&self) -> &Check {
        &self.check
    }

    pub fn kind(&self) -> RuleKind {
        self.check.kind()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Field this rule reads from the record, other than its own
    pub fn references(&self) -> Option<Field> {
        match self.check {
            Check::EqualsField(other) => Some(other),
            _ => None,
        }
    }

    /// Evaluate the predicate against a field value
    pub fn passes(&self, value: &FieldValue, ctx: &RuleContext<'_>) -> bool {
        if self.check.skips_unset() && value.is_unset() {
            return true;
        }

        match (&self.check, value) {
            (Check::Required, FieldValue::Text(text)) => checks::is_present(text),
            (Check::Required, FieldValue::List(items)) => !items.is_empty(),

            (Check::Email, FieldValue::Text(text)) => checks::is_valid_email(text),
            (Check::Digits(count), FieldValue::Text(text)) => {
                checks::has_exact_digits(text, *count)
            }
            (Check::Integer, FieldValue::Text(text)) => checks::parse_integer(text).is_some(),
            (Check::Date, FieldValue::Text(text)) => checks::parse_calendar_date(text).is_some(),
            (Check::Password(policy), FieldValue::Text(text)) => policy.is_satisfied_by(text),

            (Check::Min(min), FieldValue::Text(text)) => {
                checks::parse_integer(text).is_some_and(|n| checks::is_at_least(n, *min))
            }
            (Check::Max(max), FieldValue::Text(text)) => {
                checks::parse_integer(text).is_some_and(|n| checks::is_at_most(n, *max))
            }

            // Read the other field now, never a copy taken earlier
            (Check::EqualsField(other), value) => value == ctx.record.get(*other),

            (Check::MinMembers { min, vocabulary }, FieldValue::List(items)) => {
                checks::has_min_members(items.as_slice(), vocabulary, *min)
            }

            (Check::NotFuture, FieldValue::Text(text)) => checks::parse_calendar_date(text)
                .is_some_and(|date| checks::is_not_future(date, ctx.today)),

            // Value of the wrong shape for the check
            _ => false,
        }
    }
}
