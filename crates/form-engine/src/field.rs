// File: src/field.rs
// Purpose: The fixed set of signup form fields

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A field of the signup form
///
/// Serialized with the camelCase names the browser form posts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    FirstName,
    LastName,
    Email,
    PhoneNumber,
    Password,
    ConfirmPassword,
    Age,
    Gender,
    Interests,
    BirthDate,
}

/// Shape of the raw value a field holds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueShape {
    Text,
    List,
}

impl fmt::Display for ValueShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueShape::Text => f.write_str("text"),
            ValueShape::List => f.write_str("list"),
        }
    }
}

impl Field {
    pub const COUNT: usize = 10;

    pub const ALL: [Field; Field::COUNT] = [
        Field::FirstName,
        Field::LastName,
        Field::Email,
        Field::PhoneNumber,
        Field::Password,
        Field::ConfirmPassword,
        Field::Age,
        Field::Gender,
        Field::Interests,
        Field::BirthDate,
    ];

    /// Wire name of the field
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::FirstName => "firstName",
            Field::LastName => "lastName",
            Field::Email => "email",
            Field::PhoneNumber => "phoneNumber",
            Field::Password => "password",
            Field::ConfirmPassword => "confirmPassword",
            Field::Age => "age",
            Field::Gender => "gender",
            Field::Interests => "interests",
            Field::BirthDate => "birthDate",
        }
    }

    pub fn shape(&self) -> ValueShape {
        match self {
            Field::Interests => ValueShape::List,
            _ => ValueShape::Text,
        }
    }

    /// Values that must not be echoed back in output or logs
    pub fn is_secret(&self) -> bool {
        matches!(self, Field::Password | Field::ConfirmPassword)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = crate::record::RecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .iter()
            .copied()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| crate::record::RecordError::UnknownField(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names_round_trip() {
        for field in Field::ALL {
            assert_eq!(field.as_str().parse::<Field>().unwrap(), field);
        }
    }

    #[test]
    fn test_serde_name_matches_as_str() {
        for field in Field::ALL {
            let json = serde_json::to_string(&field).unwrap();
            assert_eq!(json, format!("\"{}\"", field.as_str()));
        }
    }

    #[test]
    fn test_unknown_field_name() {
        // Names are case-sensitive
        assert!("phoneNUmber".parse::<Field>().is_err());
    }

    #[test]
    fn test_only_interests_is_list_shaped() {
        let lists: Vec<_> = Field::ALL
            .iter()
            .filter(|f| f.shape() == ValueShape::List)
            .collect();
        assert_eq!(lists, vec![&Field::Interests]);
    }

    #[test]
    fn test_password_fields_are_secret() {
        let secret: Vec<_> = Field::ALL.into_iter().filter(Field::is_secret).collect();
        assert_eq!(secret, vec![Field::Password, Field::ConfirmPassword]);
    }
}
