//! Engine configuration
//!
//! ```
//! use lagrand_core::EngineConfig;
//!
//! let config = EngineConfig::from_json(r#"{ "seed": "caves-of-qud" }"#).unwrap();
//! let engine = config.build();
//! assert_eq!(engine.seed(), "caves-of-qud");
//! ```

use crate::engine::RandomEngine;
use crate::error::{RandomError, Result};
use crate::seed::Seed;
use serde::{Deserialize, Serialize};

/// Settings an engine is built from
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Seed text; a fresh seed is synthesized when absent
    pub seed: Option<String>,
}

impl EngineConfig {
    pub fn with_seed(seed: impl Into<String>) -> Self {
        Self {
            seed: Some(seed.into()),
        }
    }

    /// Parse a JSON configuration document
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| RandomError::Config(format!("Config deserialization failed: {}", e)))
    }

    /// Seed this configuration resolves to
    pub fn seed(&self) -> Seed {
        match &self.seed {
            Some(text) => Seed::parse(text.clone()),
            None => Seed::random(),
        }
    }

    /// Construct an engine
    pub fn build(&self) -> RandomEngine {
        RandomEngine::with_seed(self.seed())
    }
}
