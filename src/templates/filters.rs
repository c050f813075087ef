//! Custom MiniJinja filters for assertion templates
//!
//! These filters expose the naming rules to template authors:
//! - Case conversion (capitalize_first, uncapitalize_first)
//! - Humanized phrases for prose
//! - Javadoc-safe escaping

use crate::util;
use minijinja::Environment;

/// Register all custom filters with the environment
pub fn register_filters(env: &mut Environment<'_>) {
    env.add_filter("capitalize_first", filter_capitalize_first);
    env.add_filter("uncapitalize_first", filter_uncapitalize_first);
    env.add_filter("humanize", filter_humanize);
    env.add_filter("escape_javadoc", escape_javadoc);
}

// Filter wrappers that delegate to shared util functions
fn filter_capitalize_first(value: &str) -> String {
    util::capitalize_first(value)
}

fn filter_uncapitalize_first(value: &str) -> String {
    util::uncapitalize_first(value)
}

fn filter_humanize(value: &str) -> String {
    util::humanize(value)
}

/// Escape text for use inside a Javadoc comment
fn escape_javadoc(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace("*/", "*&#47;")
}
