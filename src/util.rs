//! Shared utility functions
//!
//! Case handling used by predicate derivation, the type model and the
//! template filters.

/// Upper-case the first character, leaving the rest untouched
///
/// # Examples
/// ```
/// use assertgen::util::capitalize_first;
/// assert_eq!(capitalize_first("bad"), "Bad");
/// assert_eq!(capitalize_first("bestPlayer"), "BestPlayer");
/// ```
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) => c.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Lower-case the first character, leaving the rest untouched
///
/// # Examples
/// ```
/// use assertgen::util::uncapitalize_first;
/// assert_eq!(uncapitalize_first("Bad"), "bad");
/// ```
pub fn uncapitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) => c.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Split a camelCase or PascalCase identifier into its words
///
/// Runs of capitals stay together as one word (`isURLValid` gives
/// `is`, `URL`, `Valid`). Underscores and `$` are treated as separators.
///
/// # Examples
/// ```
/// use assertgen::util::split_camel_case;
/// assert_eq!(split_camel_case("isNotBad"), vec!["is", "Not", "Bad"]);
/// ```
pub fn split_camel_case(s: &str) -> Vec<String> {
    let chars: Vec<char> = s.chars().collect();
    let mut words = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        if c == '_' || c == '$' {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            continue;
        }
        if c.is_uppercase() && !current.is_empty() {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            if !prev.is_uppercase() || next_is_lower {
                words.push(std::mem::take(&mut current));
            }
        }
        current.push(c);
    }
    if !current.is_empty() {
        words.push(current);
    }
    words
}

/// Render an identifier as a lower-cased, space-separated phrase
///
/// # Examples
/// ```
/// use assertgen::util::humanize;
/// assert_eq!(humanize("isNotBad"), "is not bad");
/// assert_eq!(humanize("canBeGood"), "can be good");
/// ```
pub fn humanize(s: &str) -> String {
    split_camel_case(s)
        .iter()
        .map(|word| word.to_lowercase())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Java reserved words that can never name a field or a type
const JAVA_KEYWORDS: &[&str] = &[
    "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char", "class", "const",
    "continue", "default", "do", "double", "else", "enum", "extends", "false", "final",
    "finally", "float", "for", "goto", "if", "implements", "import", "instanceof", "int",
    "interface", "long", "native", "new", "null", "package", "private", "protected", "public",
    "return", "short", "static", "strictfp", "super", "switch", "synchronized", "this", "throw",
    "throws", "transient", "true", "try", "void", "volatile", "while",
];

/// Check whether `s` is a syntactically valid Java identifier
///
/// Keywords are accepted here; use [`is_java_keyword`] to exclude them.
pub fn is_java_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
}

/// Check whether `s` is a Java reserved word
pub fn is_java_keyword(s: &str) -> bool {
    JAVA_KEYWORDS.contains(&s)
}
