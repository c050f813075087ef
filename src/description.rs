//! Field description — derived names and phrases for one field
//!
//! A [`FieldDescription`] pairs a field name with its resolved type and
//! derives everything an assertion class needs to talk about the field:
//!
//! ```rust
//! use assertgen::{FieldDescription, TypeDescription};
//!
//! let field = FieldDescription::new("bad", TypeDescription::parse("boolean")?)?;
//! assert_eq!(field.predicate(), "isBad");
//! assert_eq!(field.negative_predicate(), "isNotBad");
//! assert_eq!(field.predicate_for_javadoc(), "is bad");
//! assert_eq!(field.predicate_for_error_message_part2(), "is not");
//! # Ok::<(), assertgen::Error>(())
//! ```

use crate::error::{Error, Result};
use crate::predicate::{PrefixFamily, PrefixTable};
use crate::types::{TypeCategory, TypeDescription};
use crate::util::{humanize, is_java_identifier};
use std::fmt;

/// A field of a class being described by the generator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescription {
    name: String,
    type_description: TypeDescription,
    prefixes: PrefixTable,
}

impl FieldDescription {
    /// Describe a field using the built-in predicate prefixes
    pub fn new(name: impl Into<String>, type_description: TypeDescription) -> Result<Self> {
        Self::with_prefixes(name, type_description, PrefixTable::builtin())
    }

    /// Describe a field using a custom prefix table
    pub fn with_prefixes(
        name: impl Into<String>,
        type_description: TypeDescription,
        prefixes: PrefixTable,
    ) -> Result<Self> {
        let name = name.into();
        // Keywords are allowed: the name is only ever used as a fragment.
        if !is_java_identifier(&name) {
            return Err(Error::InvalidName(name));
        }
        tracing::trace!(field = %name, ty = %type_description, "described field");
        Ok(Self {
            name,
            type_description,
            prefixes,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn type_description(&self) -> &TypeDescription {
        &self.type_description
    }

    /// Simple display name of the field type
    pub fn type_name(&self) -> String {
        self.type_description.simple_name()
    }

    pub fn fully_qualified_type_name(&self) -> String {
        self.type_description.fully_qualified_name()
    }

    /// Element type name as seen from `reference_package`, for arrays and
    /// iterables only
    pub fn element_type_name(&self, reference_package: &str) -> Option<String> {
        self.type_description
            .element_type()
            .map(|element| element.qualified_relative_to(reference_package))
    }

    pub fn is_real_number_type(&self) -> bool {
        self.type_description.category() == TypeCategory::FloatingNumeral
    }

    /// True for boolean fields, whatever their name looks like
    pub fn is_predicate(&self) -> bool {
        self.type_description.category() == TypeCategory::Boolean
    }

    /// Family the affirmative predicate belongs to
    pub fn prefix_family(&self) -> &PrefixFamily {
        self.prefixes
            .lookup(&self.name)
            .unwrap_or_else(|| self.prefixes.default_family())
    }

    /// Affirmative predicate: `bad` → `isBad`, `canBeGood` unchanged
    pub fn predicate(&self) -> String {
        match self.prefixes.lookup(&self.name) {
            Some(_) => self.name.clone(),
            None => self.prefixes.default_family().affirm(&self.name),
        }
    }

    /// Negative predicate: `isBad` → `isNotBad`, `canBeGood` → `cannotBeGood`
    pub fn negative_predicate(&self) -> String {
        self.prefix_family().negate(&self.predicate())
    }

    pub fn predicate_for_javadoc(&self) -> String {
        humanize(&self.predicate())
    }

    pub fn negative_predicate_for_javadoc(&self) -> String {
        humanize(&self.negative_predicate())
    }

    /// First half of a failure message: "is bad", "can be good"
    pub fn predicate_for_error_message_part1(&self) -> String {
        self.predicate_for_javadoc()
    }

    /// Second half of a failure message: "is not", "cannot"
    pub fn predicate_for_error_message_part2(&self) -> String {
        self.prefix_family().negated_phrase.clone()
    }
}

impl fmt::Display for FieldDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "FieldDescription[name={}, type={}]",
            self.name,
            self.type_description.fully_qualified_name()
        )
    }
}
