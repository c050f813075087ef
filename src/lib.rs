// Production-quality lints
#![warn(
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro,
    clippy::print_stdout,
    clippy::print_stderr
)]
// Deny truly dangerous patterns
#![deny(clippy::mem_forget)]
// Allow common patterns in library code
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

//! # assertgen — field and predicate naming for generated assertions
//!
//! A fluent-assertion generator walks the fields of a Java class and emits an
//! assertion class for it. For every field it needs a handful of names and
//! phrases: the assertion method for a boolean field (`isBad` / `isNotBad`),
//! the same thing in prose for Javadoc (`is bad`), and the two halves of the
//! failure message (`is bad` / `is not`). This crate derives them.
//!
//! ## Quick Start
//!
//! ```rust
//! use assertgen::{FieldDescription, TypeDescription};
//!
//! let field = FieldDescription::new("canBeGood", TypeDescription::parse("boolean")?)?;
//! assert!(field.is_predicate());
//! assert_eq!(field.negative_predicate(), "cannotBeGood");
//! assert_eq!(field.predicate_for_error_message_part1(), "can be good");
//! assert_eq!(field.predicate_for_error_message_part2(), "cannot");
//! # Ok::<(), assertgen::Error>(())
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                                                             │
//! │  declared type ──► TypeDescription (category resolved once) │
//! │                            │                                │
//! │  field name ───────────────┼──► FieldDescription            │
//! │                            │         │                      │
//! │  .assertgen.yaml ──► PrefixTable ────┘                      │
//! │                                      │                      │
//! │                                      ├──► derived strings   │
//! │                                      │                      │
//! │                                      └──► FieldContext      │
//! │                                             (templates)     │
//! │                                                             │
//! └─────────────────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod description;
pub mod error;
pub mod predicate;
pub mod templates;
pub mod types;
pub mod util;

// Re-exports
pub use config::{config_schema, GeneratorConfig, PredicateConfig};
pub use description::FieldDescription;
pub use error::{Error, Result};
pub use predicate::{PrefixFamily, PrefixTable};
pub use templates::{render_field, FieldContext};
pub use types::{TypeCategory, TypeDescription, TypeName, TypeShape};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
