//! Engine configuration
//!
//! Options the host passes in as YAML or JSON: default clef, key signature,
//! whether to write the key signature after the clef, and which scale types
//! are dealt. Missing fields take their defaults.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::errors::{NotationError, Result};
use crate::models::{ClefKind, KeySignature, ScaleType};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NotationConfig {
    pub default_clef: ClefKind,
    /// Signed sharp (+) / flat (-) count
    pub key_signature: i32,
    pub show_key_signature: bool,
    /// Keys of the enabled scale types
    pub scale_types: Vec<char>,
}

impl Default for NotationConfig {
    fn default() -> Self {
        Self {
            default_clef: ClefKind::Treble,
            key_signature: 0,
            show_key_signature: false,
            scale_types: ScaleType::all().iter().map(|t| t.key).collect(),
        }
    }
}

impl NotationConfig {
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)
            .map_err(|e| NotationError::Config(format!("YAML: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| NotationError::Config(format!("JSON: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a `.yaml`, `.yml` or `.json` file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .map_err(|e| NotationError::Config(format!("{}: {}", path.display(), e)))?;

        let config = match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml_str(&contents)?,
            Some("json") => Self::from_json_str(&contents)?,
            _ => {
                return Err(NotationError::Config(format!(
                    "{}: unsupported config format (expected .yaml, .yml or .json)",
                    path.display()
                )))
            }
        };

        log::info!("Loaded notation config from {}", path.display());
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        KeySignature::new(self.key_signature)?;
        for key in &self.scale_types {
            ScaleType::by_key(*key)?;
        }
        Ok(())
    }

    pub fn key_signature(&self) -> Result<KeySignature> {
        KeySignature::new(self.key_signature)
    }

    /// Enabled scale types, in table order
    pub fn enabled_scale_types(&self) -> Vec<&'static ScaleType> {
        ScaleType::all()
            .iter()
            .filter(|t| self.scale_types.contains(&t.key))
            .collect()
    }
}
