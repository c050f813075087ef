//! Template context for a described field
//!
//! Flattens a [`FieldDescription`] into plain values so templates never
//! call back into the describer.

use crate::description::FieldDescription;
use crate::types::TypeCategory;
use serde::Serialize;

/// Every derived name and phrase of one field
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldContext {
    pub name: String,
    pub type_name: String,
    pub fully_qualified_type_name: String,
    pub element_type_name: Option<String>,
    pub category: TypeCategory,
    pub is_predicate: bool,
    pub is_real_number: bool,
    pub predicate: String,
    pub negative_predicate: String,
    pub predicate_for_javadoc: String,
    pub negative_predicate_for_javadoc: String,
    pub error_message_part1: String,
    pub error_message_part2: String,
}

impl FieldContext {
    /// Build the context as seen from code generated into `reference_package`
    pub fn from_field(field: &FieldDescription, reference_package: &str) -> Self {
        Self {
            name: field.name().to_string(),
            type_name: field.type_name(),
            fully_qualified_type_name: field.fully_qualified_type_name(),
            element_type_name: field.element_type_name(reference_package),
            category: field.type_description().category(),
            is_predicate: field.is_predicate(),
            is_real_number: field.is_real_number_type(),
            predicate: field.predicate(),
            negative_predicate: field.negative_predicate(),
            predicate_for_javadoc: field.predicate_for_javadoc(),
            negative_predicate_for_javadoc: field.negative_predicate_for_javadoc(),
            error_message_part1: field.predicate_for_error_message_part1(),
            error_message_part2: field.predicate_for_error_message_part2(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TypeDescription;

    #[test]
    fn test_from_field() {
        let field =
            FieldDescription::new("players", TypeDescription::parse("org.nba.Player[]").unwrap())
                .unwrap();
        let ctx = FieldContext::from_field(&field, "org.nba");
        assert_eq!(ctx.type_name, "Player[]");
        assert_eq!(ctx.element_type_name.as_deref(), Some("Player"));
        assert_eq!(ctx.category, TypeCategory::Reference);
        assert!(!ctx.is_predicate);
        assert_eq!(ctx.predicate, "isPlayers");
    }

    #[test]
    fn test_serializes_category_snake_case() {
        let field =
            FieldDescription::new("rating", TypeDescription::parse("double").unwrap()).unwrap();
        let json = serde_json::to_value(FieldContext::from_field(&field, "org.nba")).unwrap();
        assert_eq!(json["category"], "floating_numeral");
        assert_eq!(json["is_real_number"], true);
    }
}
