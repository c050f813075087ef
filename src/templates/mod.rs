//! Template bridge for the assertion generator
//!
//! The generator keeps its own templates; this module hands them a
//! [`FieldContext`] and a shared MiniJinja environment with the naming
//! filters registered.
//!
//! ```rust
//! use assertgen::templates::{render_field, FieldContext};
//! use assertgen::{FieldDescription, TypeDescription};
//!
//! let field = FieldDescription::new("bad", TypeDescription::parse("boolean")?)?;
//! let ctx = FieldContext::from_field(&field, "org.nba");
//! let doc = render_field("Verifies that the actual value {{ predicate_for_javadoc }}.", &ctx)?;
//! assert_eq!(doc, "Verifies that the actual value is bad.");
//! # Ok::<(), assertgen::Error>(())
//! ```

pub mod context;
pub mod filters;

use minijinja::Environment;
use std::sync::OnceLock;

use crate::error::Result;

pub use context::FieldContext;

/// Template engine singleton
static ENGINE: OnceLock<Environment<'static>> = OnceLock::new();

fn init_engine() -> Environment<'static> {
    let mut env = Environment::new();
    filters::register_filters(&mut env);
    env
}

/// Get the global template engine
pub fn engine() -> &'static Environment<'static> {
    ENGINE.get_or_init(init_engine)
}

/// Render a template source against one field
pub fn render_field(source: &str, ctx: &FieldContext) -> Result<String> {
    Ok(engine().render_str(source, ctx)?)
}
