//! Generator configuration
//!
//! Handles loading `.assertgen.yaml`, which lets a project teach the
//! describer additional predicate prefixes:
//!
//! ```yaml
//! version: 1
//! predicates:
//!   prefixes:
//!     - prefix: has
//!       negative_prefix: doesNotHave
//!       negated_phrase: does not have
//! ```

use crate::error::{Error, Result};
use crate::predicate::{PrefixFamily, PrefixTable};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Config file name looked up by [`GeneratorConfig::load_from_dir`]
pub const CONFIG_FILE: &str = ".assertgen.yaml";

/// Root configuration (`.assertgen.yaml`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[schemars(title = "assertgen config", description = "Assertion generator configuration")]
pub struct GeneratorConfig {
    /// Schema version for migrations
    #[serde(default = "default_version")]
    pub version: u32,

    /// Predicate naming rules
    #[serde(default)]
    pub predicates: PredicateConfig,
}

fn default_version() -> u32 {
    1
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            predicates: PredicateConfig::default(),
        }
    }
}

/// Predicate naming rules
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PredicateConfig {
    /// Additional prefix families, checked after the built-in ones
    #[serde(default)]
    pub prefixes: Vec<PrefixFamily>,

    /// Use only the configured families; the first becomes the default
    #[serde(default)]
    pub replace_builtin: bool,
}

impl GeneratorConfig {
    /// Parse and validate config YAML
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: GeneratorConfig = serde_norway::from_str(yaml)?;

        if config.version != 1 {
            return Err(Error::Config(format!(
                "Unsupported config version: {}",
                config.version
            )));
        }

        // Prefix families are validated here, not at first use
        config.prefix_table()?;
        Ok(config)
    }

    /// Load `.assertgen.yaml` from a directory, if present
    pub fn load_from_dir(dir: &Path) -> Result<Option<Self>> {
        let path = dir.join(CONFIG_FILE);
        if !path.exists() {
            tracing::debug!(dir = %dir.display(), "no config file, using defaults");
            return Ok(None);
        }

        let content = std::fs::read_to_string(&path)?;
        let config = Self::from_yaml(&content)
            .map_err(|e| Error::Config(format!("Failed to load {}: {}", path.display(), e)))?;
        tracing::debug!(
            path = %path.display(),
            prefixes = config.predicates.prefixes.len(),
            "loaded config"
        );
        Ok(Some(config))
    }

    /// Prefix table described by this config
    pub fn prefix_table(&self) -> Result<PrefixTable> {
        let mut configured = self.predicates.prefixes.iter().cloned();
        if self.predicates.replace_builtin {
            PrefixTable::from_families(configured.collect())
        } else {
            configured.try_fold(PrefixTable::builtin(), PrefixTable::with_family)
        }
    }

    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_norway::to_string(self)?)
    }
}

/// JSON schema for `.assertgen.yaml`, pretty-printed
pub fn config_schema() -> Result<String> {
    let schema = schemars::schema_for!(GeneratorConfig);
    Ok(serde_json::to_string_pretty(&schema)?)
}
