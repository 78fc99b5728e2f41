//! Password validation functions

/// Punctuation accepted as the "symbol" class of a password
pub const PASSWORD_SYMBOLS: &[char] = &[
    '!', '@', '#', '$', '%', '^', '&', '*', '(', ')', ',', '.', '?', '"', ':', '{', '}', '|',
    '<', '>',
];

/// One requirement of a [`PasswordPolicy`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordRequirement {
    MinLength(usize),
    Symbol,
    Digit,
    Uppercase,
    Lowercase,
}

/// Composite password policy: a minimum length plus one character of each class
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordPolicy {
    pub min_length: usize,
}

impl PasswordPolicy {
    pub const fn new(min_length: usize) -> Self {
        Self { min_length }
    }

    /// Returns the first requirement the password does not meet
    ///
    /// Length is counted in characters, not bytes.
    pub fn check(&self, password: &str) -> Result<(), PasswordRequirement> {
        let checks = [
            (
                password.chars().count() >= self.min_length,
                PasswordRequirement::MinLength(self.min_length),
            ),
            (
                password.chars().any(|c| PASSWORD_SYMBOLS.contains(&c)),
                PasswordRequirement::Symbol,
            ),
            (
                password.chars().any(|c| c.is_ascii_digit()),
                PasswordRequirement::Digit,
            ),
            (
                password.chars().any(|c| c.is_ascii_uppercase()),
                PasswordRequirement::Uppercase,
            ),
            (
                password.chars().any(|c| c.is_ascii_lowercase()),
                PasswordRequirement::Lowercase,
            ),
        ];

        checks
            .iter()
            .find(|(valid, _)| !valid)
            .map(|(_, unmet)| Err(*unmet))
            .unwrap_or(Ok(()))
    }

    pub fn is_satisfied_by(&self, password: &str) -> bool {
        self.check(password).is_ok()
    }
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self::new(8)
    }
}
