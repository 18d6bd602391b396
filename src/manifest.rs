//! Project manifest (spritegen.yaml) parsing.
//!
//! The manifest holds per-project defaults for `build` and `verify`. Every
//! field is optional and command-line flags take precedence.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, SpriteError};
use crate::rng::DEFAULT_SEED;

/// Name of the manifest file looked up in the working directory.
pub const MANIFEST_FILENAME: &str = "spritegen.yaml";

/// Largest accepted upscale factor.
pub const MAX_SCALE: u32 = 64;

/// Project manifest loaded from spritegen.yaml.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Manifest {
    /// Output directory for generated assets.
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// Base seed for noise-textured assets.
    #[serde(default = "default_seed")]
    pub seed: u64,

    /// Integer upscale factor applied to every asset.
    #[serde(default)]
    pub scale: Option<u32>,

    /// Only build these assets. Empty means the whole catalog.
    #[serde(default)]
    pub only: Vec<String>,

    /// Assets to leave out.
    #[serde(default)]
    pub skip: Vec<String>,

    /// Write TexturePacker JSON next to each sheet.
    #[serde(default)]
    pub sheet_json: bool,
}

fn default_output() -> PathBuf {
    PathBuf::from("assets")
}

fn default_seed() -> u64 {
    DEFAULT_SEED
}

impl Default for Manifest {
    fn default() -> Self {
        Self {
            output: default_output(),
            seed: default_seed(),
            scale: None,
            only: vec![],
            skip: vec![],
            sheet_json: false,
        }
    }
}

impl Manifest {
    /// Load manifest from a spritegen.yaml file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| SpriteError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read manifest: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Load `path` if it exists, otherwise fall back to defaults.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse manifest from YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|e| SpriteError::Config {
            message: format!("Invalid manifest: {}", e),
            help: Some(format!("Check {} syntax", MANIFEST_FILENAME)),
        })
    }

    /// Whether the asset `name` should be built.
    pub fn selects(&self, name: &str) -> bool {
        let included = self.only.is_empty() || self.only.iter().any(|n| n == name);
        included && !self.skip.iter().any(|n| n == name)
    }

    /// Names in `only` or `skip` that are not in `known`.
    pub fn unknown_names<'a>(&'a self, known: &[&str]) -> Vec<&'a str> {
        self.only
            .iter()
            .chain(&self.skip)
            .map(String::as_str)
            .filter(|n| !known.contains(n))
            .collect()
    }

    /// Get the effective scale factor. Unset and 0 mean 1.
    pub fn effective_scale(&self) -> Result<u32> {
        let scale = self.scale.unwrap_or(1).max(1);
        if scale > MAX_SCALE {
            return Err(SpriteError::Config {
                message: format!("Scale {} is too large", scale),
                help: Some(format!("Use a scale between 1 and {}", MAX_SCALE)),
            });
        }
        Ok(scale)
    }
}
