// File: src/schema.rs
// Purpose: Ordered, immutable per-field rule chains

use crate::field::Field;
use crate::rule::Rule;
use thiserror::Error;

/// Errors raised while a schema is being put together
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    #[error("field `{0}` is defined twice")]
    DuplicateField(Field),

    #[error("rule on `{field}` references `{target}`, which is not defined")]
    UnknownReference { field: Field, target: Field },
}

/// Ordered rules for one field; the first failing rule wins
pub type RuleChain = Vec<Rule>;

/// Field rule chains in definition order
///
/// A schema is only extended through [`Schema::define`], which consumes it, so a
/// finished schema can be shared freely between evaluations and threads.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schema {
    chains: Vec<(Field, RuleChain)>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field's rule chain
    ///
    /// Fails if the field already has a chain, or if a cross-field rule names a
    /// field that has not been defined yet. The referenced value is read from the
    /// record at evaluation time.
    pub fn define(
        mut self,
        field: Field,
        rules: impl IntoIterator<Item = Rule>,
    ) -> Result<Self, SchemaError> {
        if self.contains(field) {
            return Err(SchemaError::DuplicateField(field));
        }

        let rules: RuleChain = rules.into_iter().collect();
        if let Some(target) = rules
            .iter()
            .filter_map(Rule::references)
            .find(|target| !self.contains(*target))
        {
            return Err(SchemaError::UnknownReference { field, target });
        }

        self.chains.push((field, rules));
        Ok(self)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.chains.iter().any(|(defined, _)| *defined == field)
    }

    pub fn chain(&self, field: Field) -> Option<&[Rule]> {
        self.chains
            .iter()
            .find(|(defined, _)| *defined == field)
            .map(|(_, rules)| rules.as_slice())
    }

    /// Fields in definition order
    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.chains.iter().map(|(field, _)| *field)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &[Rule])> {
        self.chains
            .iter()
            .map(|(field, rules)| (*field, rules.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.chains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chains.is_empty()
    }
}
