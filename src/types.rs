//! Type model — resolved field types
//!
//! The generator hands over a field's declared type either as a structured
//! [`TypeName`] or as declared-type text (`org.nba.Player`, `double`,
//! `java.util.List<org.nba.Player>`, `org.nba.Player[]`). Either way the type
//! is classified into a [`TypeCategory`] exactly once, when the
//! [`TypeDescription`] is built. Nothing downstream looks at type names again
//! to decide whether a field is a predicate or a real number.

use crate::error::{Error, Result};
use crate::util::{is_java_identifier, is_java_keyword};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Java primitive type keywords usable as field types
pub const PRIMITIVES: &[&str] = &[
    "boolean", "byte", "short", "int", "long", "char", "float", "double",
];

/// `java.lang` types usable without an import
const JAVA_LANG_TYPES: &[&str] = &[
    "Boolean", "Byte", "Short", "Integer", "Long", "Float", "Double", "Character", "String",
    "Object", "Number", "CharSequence", "Iterable",
];

/// Containers whose single type argument is an element type
const ITERABLE_CONTAINERS: &[&str] = &[
    "java.lang.Iterable",
    "java.util.Collection",
    "java.util.List",
    "java.util.Set",
    "java.util.SortedSet",
    "java.util.NavigableSet",
    "java.util.Queue",
    "java.util.Deque",
];

/// Fully qualified name → category. Anything absent is a reference type.
const CATEGORY_TABLE: &[(&str, TypeCategory)] = &[
    ("boolean", TypeCategory::Boolean),
    ("java.lang.Boolean", TypeCategory::Boolean),
    ("byte", TypeCategory::IntegralNumeral),
    ("short", TypeCategory::IntegralNumeral),
    ("int", TypeCategory::IntegralNumeral),
    ("long", TypeCategory::IntegralNumeral),
    ("java.lang.Byte", TypeCategory::IntegralNumeral),
    ("java.lang.Short", TypeCategory::IntegralNumeral),
    ("java.lang.Integer", TypeCategory::IntegralNumeral),
    ("java.lang.Long", TypeCategory::IntegralNumeral),
    ("java.math.BigInteger", TypeCategory::IntegralNumeral),
    ("float", TypeCategory::FloatingNumeral),
    ("double", TypeCategory::FloatingNumeral),
    ("java.lang.Float", TypeCategory::FloatingNumeral),
    ("java.lang.Double", TypeCategory::FloatingNumeral),
    ("java.math.BigDecimal", TypeCategory::FloatingNumeral),
];

/// A package-qualified type name
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeName {
    package: String,
    simple_name: String,
}

impl TypeName {
    /// Build a type name from its package and simple name
    ///
    /// An empty package means a primitive or a type in the default package.
    pub fn new(package: impl Into<String>, simple_name: impl Into<String>) -> Result<Self> {
        let package = package.into();
        let simple_name = simple_name.into();

        let valid_package = package.is_empty()
            || package
                .split('.')
                .all(|seg| is_java_identifier(seg) && !is_java_keyword(seg));
        let valid_simple = is_java_identifier(&simple_name)
            && (!is_java_keyword(&simple_name)
                || (package.is_empty() && PRIMITIVES.contains(&simple_name.as_str())));

        if !valid_package || !valid_simple {
            let text = if package.is_empty() {
                simple_name
            } else {
                format!("{}.{}", package, simple_name)
            };
            return Err(Error::UnresolvedType(text));
        }

        Ok(Self {
            package,
            simple_name,
        })
    }

    /// Parse a fully qualified name such as `org.nba.Player`
    ///
    /// Unqualified `java.lang` names (`Double`, `Boolean`) resolve to
    /// `java.lang`, as they do in Java source.
    pub fn parse(fully_qualified: &str) -> Result<Self> {
        let text = fully_qualified.trim();
        match text.rsplit_once('.') {
            Some((package, simple)) => Self::new(package, simple),
            None if JAVA_LANG_TYPES.contains(&text) => Self::new("java.lang", text),
            None => Self::new("", text),
        }
    }

    /// A primitive type such as `double` or `boolean`
    pub fn primitive(keyword: &str) -> Result<Self> {
        if PRIMITIVES.contains(&keyword) {
            Self::new("", keyword)
        } else {
            Err(Error::UnresolvedType(keyword.to_string()))
        }
    }

    pub fn package(&self) -> &str {
        &self.package
    }

    pub fn simple_name(&self) -> &str {
        &self.simple_name
    }

    pub fn is_primitive(&self) -> bool {
        self.package.is_empty() && PRIMITIVES.contains(&self.simple_name.as_str())
    }

    /// `package.SimpleName`, or just the simple name without a package
    pub fn fully_qualified(&self) -> String {
        if self.package.is_empty() {
            self.simple_name.clone()
        } else {
            format!("{}.{}", self.package, self.simple_name)
        }
    }

    /// Name as written from code living in `reference_package`
    ///
    /// Unqualified when the type has no package or shares the reference
    /// package; fully qualified otherwise.
    pub fn qualified_relative_to(&self, reference_package: &str) -> String {
        if self.package.is_empty() || self.package == reference_package {
            self.simple_name.clone()
        } else {
            self.fully_qualified()
        }
    }
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.fully_qualified())
    }
}

/// Coarse classification of a field's declared type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeCategory {
    Boolean,
    IntegralNumeral,
    FloatingNumeral,
    Reference,
}

impl TypeCategory {
    /// Classify a plain (non-container) type, primitive or boxed
    pub fn classify(type_name: &TypeName) -> Self {
        let fqn = type_name.fully_qualified();
        CATEGORY_TABLE
            .iter()
            .find(|(name, _)| *name == fqn)
            .map(|(_, category)| *category)
            .unwrap_or(TypeCategory::Reference)
    }
}

/// Structural shape of a declared type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeShape {
    /// A single named type
    Plain(TypeName),
    /// `Element[]`
    Array(TypeName),
    /// `Container<Element>` for an iterable container
    Iterable { container: TypeName, element: TypeName },
}

/// A resolved field type: its shape plus its category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDescription {
    shape: TypeShape,
    category: TypeCategory,
}

impl TypeDescription {
    /// Describe a plain type, classifying it once
    pub fn of(type_name: TypeName) -> Self {
        let category = TypeCategory::classify(&type_name);
        Self {
            shape: TypeShape::Plain(type_name),
            category,
        }
    }

    /// Describe `element[]`
    pub fn array_of(element: TypeName) -> Self {
        Self {
            shape: TypeShape::Array(element),
            category: TypeCategory::Reference,
        }
    }

    /// Describe `container<element>`; primitives cannot be type arguments
    pub fn iterable_of(container: TypeName, element: TypeName) -> Result<Self> {
        if element.is_primitive() {
            return Err(Error::UnresolvedType(format!(
                "{}<{}>",
                container.fully_qualified(),
                element.simple_name()
            )));
        }
        Ok(Self {
            shape: TypeShape::Iterable { container, element },
            category: TypeCategory::Reference,
        })
    }

    /// Resolve declared-type text
    ///
    /// Accepts plain names, one level of `[]`, and single-argument iterable
    /// containers. Type arguments of other generic types are erased.
    pub fn parse(declared: &str) -> Result<Self> {
        let text = declared.trim();
        if text.is_empty() {
            return Err(Error::UnresolvedType(declared.to_string()));
        }

        let description = if let Some(element) = text.strip_suffix("[]") {
            if element.contains('[') || element.contains('<') {
                return Err(Error::UnresolvedType(text.to_string()));
            }
            Self::array_of(TypeName::parse(element)?)
        } else if let Some((raw, args)) = split_type_arguments(text)? {
            let container = TypeName::parse(raw)?;
            let is_iterable = ITERABLE_CONTAINERS.contains(&container.fully_qualified().as_str());
            if is_iterable && !args.contains(',') {
                Self::iterable_of(container, TypeName::parse(args)?)?
            } else {
                tracing::debug!(declared = text, "erasing type arguments");
                Self::of(container)
            }
        } else {
            Self::of(TypeName::parse(text)?)
        };

        tracing::trace!(declared = text, category = ?description.category, "resolved type");
        Ok(description)
    }

    pub fn shape(&self) -> &TypeShape {
        &self.shape
    }

    pub fn category(&self) -> TypeCategory {
        self.category
    }

    /// Simple display name: `Player`, `double`, `Player[]`, `List<Player>`
    pub fn simple_name(&self) -> String {
        match &self.shape {
            TypeShape::Plain(name) => name.simple_name().to_string(),
            TypeShape::Array(element) => format!("{}[]", element.simple_name()),
            TypeShape::Iterable { container, element } => {
                format!("{}<{}>", container.simple_name(), element.simple_name())
            }
        }
    }

    /// Fully qualified name, type arguments included
    pub fn fully_qualified_name(&self) -> String {
        match &self.shape {
            TypeShape::Plain(name) => name.fully_qualified(),
            TypeShape::Array(element) => format!("{}[]", element.fully_qualified()),
            TypeShape::Iterable { container, element } => {
                format!("{}<{}>", container.fully_qualified(), element.fully_qualified())
            }
        }
    }

    /// Element type for arrays and iterables
    pub fn element_type(&self) -> Option<&TypeName> {
        match &self.shape {
            TypeShape::Plain(_) => None,
            TypeShape::Array(element) | TypeShape::Iterable { element, .. } => Some(element),
        }
    }
}

impl fmt::Display for TypeDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.fully_qualified_name())
    }
}

/// Split `Raw<Args>` into `("Raw", "Args")`; `None` when there are no arguments
fn split_type_arguments(text: &str) -> Result<Option<(&str, &str)>> {
    let Some(open) = text.find('<') else {
        return Ok(None);
    };
    let args = text[open + 1..]
        .strip_suffix('>')
        .ok_or_else(|| Error::UnresolvedType(text.to_string()))?;
    if args.contains('<') || args.trim().is_empty() {
        return Err(Error::UnresolvedType(text.to_string()));
    }
    Ok(Some((text[..open].trim(), args.trim())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_type_name() {
        let name = TypeName::parse("org.nba.Player").unwrap();
        assert_eq!(name.package(), "org.nba");
        assert_eq!(name.simple_name(), "Player");
        assert_eq!(name.fully_qualified(), "org.nba.Player");
        assert!(!name.is_primitive());
    }

    #[test]
    fn test_parse_resolves_java_lang() {
        let name = TypeName::parse("Double").unwrap();
        assert_eq!(name.fully_qualified(), "java.lang.Double");
        assert_eq!(TypeName::parse("String").unwrap().package(), "java.lang");
        assert_eq!(TypeName::parse("Player").unwrap().package(), "");
    }

    #[test]
    fn test_primitive_type_name() {
        let name = TypeName::primitive("double").unwrap();
        assert_eq!(name.package(), "");
        assert_eq!(name.fully_qualified(), "double");
        assert!(name.is_primitive());
        assert!(TypeName::primitive("void").is_err());
        assert!(TypeName::primitive("Double").is_err());
    }

    #[test]
    fn test_rejects_unresolvable_names() {
        assert!(TypeName::parse("").is_err());
        assert!(TypeName::parse("org..Player").is_err());
        assert!(TypeName::parse("org.nba.").is_err());
        assert!(TypeName::parse("void").is_err());
        assert!(TypeName::parse("class").is_err());
        assert!(TypeName::parse("org.class.Player").is_err());
        assert!(TypeName::new("org.nba", "double").is_err());
    }

    #[test]
    fn test_qualified_relative_to() {
        let name = TypeName::parse("org.nba.Player").unwrap();
        assert_eq!(name.qualified_relative_to("org.nba"), "Player");
        assert_eq!(name.qualified_relative_to("org.other"), "org.nba.Player");
        let prim = TypeName::primitive("int").unwrap();
        assert_eq!(prim.qualified_relative_to("org.nba"), "int");
    }

    #[test]
    fn test_classify() {
        let classify = |s: &str| TypeCategory::classify(&TypeName::parse(s).unwrap());
        assert_eq!(classify("boolean"), TypeCategory::Boolean);
        assert_eq!(classify("java.lang.Boolean"), TypeCategory::Boolean);
        assert_eq!(classify("int"), TypeCategory::IntegralNumeral);
        assert_eq!(classify("java.lang.Long"), TypeCategory::IntegralNumeral);
        assert_eq!(classify("double"), TypeCategory::FloatingNumeral);
        assert_eq!(classify("java.lang.Float"), TypeCategory::FloatingNumeral);
        assert_eq!(classify("char"), TypeCategory::Reference);
        assert_eq!(classify("java.lang.String"), TypeCategory::Reference);
        // simple name alone is not enough
        assert_eq!(classify("org.nba.Double"), TypeCategory::Reference);
    }

    #[test]
    fn test_parse_array() {
        let desc = TypeDescription::parse("org.nba.Player[]").unwrap();
        assert_eq!(desc.simple_name(), "Player[]");
        assert_eq!(desc.fully_qualified_name(), "org.nba.Player[]");
        assert_eq!(desc.category(), TypeCategory::Reference);
        assert_eq!(desc.element_type().unwrap().simple_name(), "Player");

        let prims = TypeDescription::parse("double[]").unwrap();
        assert_eq!(prims.category(), TypeCategory::Reference);
        assert!(TypeDescription::parse("int[][]").is_err());
    }

    #[test]
    fn test_parse_iterable() {
        let desc = TypeDescription::parse("java.util.List<org.nba.Player>").unwrap();
        assert_eq!(desc.simple_name(), "List<Player>");
        assert_eq!(
            desc.fully_qualified_name(),
            "java.util.List<org.nba.Player>"
        );
        assert_eq!(
            desc.element_type().map(TypeName::fully_qualified),
            Some("org.nba.Player".to_string())
        );
        assert!(TypeDescription::parse("java.util.List<int>").is_err());
        assert!(TypeDescription::parse("java.util.List<").is_err());
        assert!(TypeDescription::parse("java.util.List<>").is_err());
    }

    #[test]
    fn test_parse_erases_other_generics() {
        let desc =
            TypeDescription::parse("java.util.Map<java.lang.String, java.lang.Integer>").unwrap();
        assert_eq!(desc.simple_name(), "Map");
        assert!(desc.element_type().is_none());
    }

    #[test]
    fn test_parse_plain() {
        let desc = TypeDescription::parse("  java.lang.Double ").unwrap();
        assert_eq!(desc.category(), TypeCategory::FloatingNumeral);
        assert_eq!(desc.simple_name(), "Double");
        assert!(desc.element_type().is_none());
        assert!(TypeDescription::parse("   ").is_err());
    }
}
