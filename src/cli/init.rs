//! Init command implementation.
//!
//! Writes a commented `spritegen.yaml` with every setting at its default.

use std::fs;
use std::path::PathBuf;

use clap::Args;

use crate::error::{Result, SpriteError};
use crate::manifest::MANIFEST_FILENAME;
use crate::output::{display_path, Printer};
use crate::rng::DEFAULT_SEED;

/// Write a default spritegen.yaml
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Directory to create the manifest in
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Overwrite existing spritegen.yaml
    #[arg(long)]
    pub force: bool,
}

pub fn run(args: InitArgs, printer: &Printer) -> Result<()> {
    let manifest_path = args.path.join(MANIFEST_FILENAME);

    if manifest_path.exists() && !args.force {
        return Err(SpriteError::Build {
            message: format!("{} already exists", MANIFEST_FILENAME),
            help: Some("Use --force to overwrite".to_string()),
        });
    }

    fs::write(&manifest_path, default_manifest()).map_err(|e| SpriteError::Io {
        path: manifest_path.clone(),
        message: format!("Failed to write manifest: {}", e),
    })?;

    printer.success("Created", &display_path(&manifest_path));
    Ok(())
}

fn default_manifest() -> String {
    format!(
        "\
# Output directory for generated PNG files.
output: assets

# Base seed for noise-textured assets. Each asset derives its own stream
# from this value and its name.
seed: {seed}

# Integer upscale factor (nearest neighbour), at most 64.
# scale: 2

# Restrict the build to these assets, or leave some out.
# only: [hero, hero_walk]
# skip: [slash_effect]

# Write TexturePacker JSON frame data next to each sheet.
sheet_json: false
",
        seed = DEFAULT_SEED
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::Manifest;
    use tempfile::tempdir;

    #[test]
    fn test_init_creates_manifest() {
        let dir = tempdir().unwrap();
        let args = InitArgs {
            path: dir.path().to_path_buf(),
            force: false,
        };

        run(args, &Printer::new()).unwrap();

        let content = fs::read_to_string(dir.path().join(MANIFEST_FILENAME)).unwrap();
        assert!(content.contains("output: assets"));
    }

    #[test]
    fn test_default_manifest_parses_to_defaults() {
        assert_eq!(Manifest::parse(&default_manifest()).unwrap(), Manifest::default());
    }

    #[test]
    fn test_init_errors_if_manifest_exists() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(MANIFEST_FILENAME), "output: build").unwrap();

        let args = InitArgs {
            path: dir.path().to_path_buf(),
            force: false,
        };

        assert!(run(args, &Printer::new()).is_err());
        let content = fs::read_to_string(dir.path().join(MANIFEST_FILENAME)).unwrap();
        assert_eq!(content, "output: build");
    }

    #[test]
    fn test_init_force_overwrites() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(MANIFEST_FILENAME), "output: build").unwrap();

        let args = InitArgs {
            path: dir.path().to_path_buf(),
            force: true,
        };

        run(args, &Printer::new()).unwrap();

        let content = fs::read_to_string(dir.path().join(MANIFEST_FILENAME)).unwrap();
        assert!(content.contains("output: assets"));
    }
}
