//! Predicate prefix families
//!
//! A boolean field is exposed through a predicate identifier (`isBad`,
//! `canBeGood`). The leading word of that identifier decides how it is
//! negated and how the negation reads in an error message:
//!
//! | prefix | negative prefix | negated phrase |
//! |--------|-----------------|----------------|
//! | `is`   | `isNot`         | `is not`       |
//! | `can`  | `cannot`        | `cannot`       |
//!
//! Families are checked in table order; the first entry is the default family
//! applied to names that carry no recognised prefix. Further families come
//! from configuration (see [`crate::config`]).

use crate::error::{Error, Result};
use crate::util::{capitalize_first, is_java_identifier};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One recognised predicate prefix and its negation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PrefixFamily {
    /// Leading word of the affirmative predicate (e.g. `is`)
    pub prefix: String,

    /// Replacement for `prefix` in the negative predicate (e.g. `isNot`)
    pub negative_prefix: String,

    /// Negated clause used in failure messages (e.g. `is not`)
    pub negated_phrase: String,
}

impl PrefixFamily {
    pub fn new(
        prefix: impl Into<String>,
        negative_prefix: impl Into<String>,
        negated_phrase: impl Into<String>,
    ) -> Self {
        Self {
            prefix: prefix.into(),
            negative_prefix: negative_prefix.into(),
            negated_phrase: negated_phrase.into(),
        }
    }

    /// The `is` family: `isBad` / `isNotBad` / "is not"
    pub fn is() -> Self {
        Self::new("is", "isNot", "is not")
    }

    /// The `can` family: `canBeGood` / `cannotBeGood` / "cannot"
    pub fn can() -> Self {
        Self::new("can", "cannot", "cannot")
    }

    /// Whether `name` is already a predicate in this family
    ///
    /// The prefix must be followed by an upper-case letter, so `island`
    /// does not count as `is` + `land`.
    pub fn matches(&self, name: &str) -> bool {
        name.strip_prefix(self.prefix.as_str())
            .and_then(|rest| rest.chars().next())
            .is_some_and(char::is_uppercase)
    }

    /// Build the affirmative predicate for a name carrying no prefix
    pub fn affirm(&self, name: &str) -> String {
        format!("{}{}", self.prefix, capitalize_first(name))
    }

    /// Swap the affirmative prefix of `predicate` for the negative one
    ///
    /// `predicate` must already match this family.
    pub fn negate(&self, predicate: &str) -> String {
        let rest = predicate
            .strip_prefix(self.prefix.as_str())
            .unwrap_or(predicate);
        format!("{}{}", self.negative_prefix, capitalize_first(rest))
    }

    fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("prefix", &self.prefix),
            ("negative_prefix", &self.negative_prefix),
        ] {
            let lower_camel = value.chars().next().is_some_and(char::is_lowercase);
            if !is_java_identifier(value) || !lower_camel {
                return Err(Error::Config(format!(
                    "predicate {} must be a lowerCamel identifier, got {:?}",
                    field, value
                )));
            }
        }
        if self.negative_prefix == self.prefix {
            return Err(Error::Config(format!(
                "negative_prefix for prefix {:?} must differ from the prefix",
                self.prefix
            )));
        }
        if self.negated_phrase.trim().is_empty() {
            return Err(Error::Config(format!(
                "negated_phrase for prefix {:?} must not be empty",
                self.prefix
            )));
        }
        Ok(())
    }
}

/// Ordered table of prefix families
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixTable {
    families: Vec<PrefixFamily>,
}

impl PrefixTable {
    /// The built-in table: `is`, then `can`
    pub fn builtin() -> Self {
        Self {
            families: vec![PrefixFamily::is(), PrefixFamily::can()],
        }
    }

    /// Build a table from explicit families, validated, in the given order
    pub fn from_families(families: Vec<PrefixFamily>) -> Result<Self> {
        if families.is_empty() {
            return Err(Error::Config(
                "predicate prefix table must not be empty".to_string(),
            ));
        }
        let mut table = Self {
            families: Vec::with_capacity(families.len()),
        };
        for family in families {
            table = table.with_family(family)?;
        }
        Ok(table)
    }

    /// Append a family, checked after every family already present
    pub fn with_family(mut self, family: PrefixFamily) -> Result<Self> {
        family.validate()?;
        if self.families.iter().any(|f| f.prefix == family.prefix) {
            return Err(Error::Config(format!(
                "duplicate predicate prefix {:?}",
                family.prefix
            )));
        }
        tracing::debug!(prefix = %family.prefix, "registered predicate prefix");
        self.families.push(family);
        Ok(self)
    }

    pub fn families(&self) -> &[PrefixFamily] {
        &self.families
    }

    /// Family applied to names without a recognised prefix
    pub fn default_family(&self) -> &PrefixFamily {
        &self.families[0]
    }

    /// First family whose prefix `name` already carries
    pub fn lookup(&self, name: &str) -> Option<&PrefixFamily> {
        self.families.iter().find(|f| f.matches(name))
    }
}

impl Default for PrefixTable {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_requires_word_boundary() {
        let is = PrefixFamily::is();
        assert!(is.matches("isBad"));
        assert!(is.matches("isSomething"));
        assert!(!is.matches("island"));
        assert!(!is.matches("is"));
        assert!(!is.matches("bad"));
    }

    #[test]
    fn test_affirm_and_negate() {
        let is = PrefixFamily::is();
        assert_eq!(is.affirm("bad"), "isBad");
        assert_eq!(is.negate("isBad"), "isNotBad");

        let can = PrefixFamily::can();
        assert_eq!(can.negate("canBeGood"), "cannotBeGood");
    }

    #[test]
    fn test_builtin_lookup_order() {
        let table = PrefixTable::builtin();
        assert_eq!(table.default_family().prefix, "is");
        assert_eq!(table.lookup("canBeGood").map(|f| f.prefix.as_str()), Some("can"));
        assert_eq!(table.lookup("isBad").map(|f| f.prefix.as_str()), Some("is"));
        assert!(table.lookup("hasPlayers").is_none());
        assert!(table.lookup("candidate").is_none());
    }

    #[test]
    fn test_with_family_extends_table() {
        let table = PrefixTable::builtin()
            .with_family(PrefixFamily::new("has", "doesNotHave", "does not have"))
            .unwrap();
        assert_eq!(table.families().len(), 3);
        assert_eq!(table.lookup("hasPlayers").unwrap().negate("hasPlayers"), "doesNotHavePlayers");
    }

    #[test]
    fn test_rejects_duplicate_prefix() {
        let err = PrefixTable::builtin()
            .with_family(PrefixFamily::new("is", "isNever", "is never"))
            .unwrap_err();
        assert!(err.to_string().contains("duplicate"));
    }

    #[test]
    fn test_rejects_invalid_family() {
        assert!(PrefixTable::builtin()
            .with_family(PrefixFamily::new("Has", "doesNotHave", "does not have"))
            .is_err());
        assert!(PrefixTable::builtin()
            .with_family(PrefixFamily::new("has", "", "does not have"))
            .is_err());
        assert!(PrefixTable::builtin()
            .with_family(PrefixFamily::new("has", "doesNotHave", "  "))
            .is_err());
        assert!(PrefixTable::from_families(vec![]).is_err());
    }

    #[test]
    fn test_rejects_negative_prefix_equal_to_prefix() {
        let err = PrefixTable::builtin()
            .with_family(PrefixFamily::new("was", "was", "was not"))
            .unwrap_err();
        assert!(matches!(err, Error::Config(_)));
        assert!(err.to_string().contains("must differ"));
    }
}
