pub mod build;
pub mod completions;
pub mod init;
pub mod list;
pub mod verify;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use crate::error::{Result, SpriteError};
use crate::manifest::{Manifest, MANIFEST_FILENAME};
use crate::sprites::catalog;

/// spritegen - procedural pixel-art sprite generator
#[derive(Parser, Debug)]
#[command(name = "spritegen")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate sprites, sheets and tiles as PNG files
    Build(build::BuildArgs),

    /// List the asset catalog
    List(list::ListArgs),

    /// Check generated files against a fresh render
    Verify(verify::VerifyArgs),

    /// Write a default spritegen.yaml
    Init(init::InitArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Load the manifest named on the command line, or `spritegen.yaml` in the
/// working directory when present.
pub(crate) fn load_manifest(path: Option<&Path>) -> Result<Manifest> {
    match path {
        Some(path) => Manifest::load(path),
        None => Manifest::load_or_default(&PathBuf::from(MANIFEST_FILENAME)),
    }
}

/// Reject `only`/`skip` entries that name no catalog asset.
pub(crate) fn check_names(manifest: &Manifest) -> Result<()> {
    let assets = catalog();
    let known: Vec<&str> = assets.iter().map(|a| a.name).collect();
    let unknown = manifest.unknown_names(&known);

    if unknown.is_empty() {
        return Ok(());
    }
    Err(SpriteError::Config {
        message: format!("Unknown asset(s): {}", unknown.join(", ")),
        help: Some("Run `spritegen list` to see available assets".to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_build_flags() {
        let cli = Cli::try_parse_from([
            "spritegen", "build", "-o", "out", "--seed", "7", "--only", "hero", "--only", "wall",
        ])
        .unwrap();
        match cli.command {
            Commands::Build(args) => {
                assert_eq!(args.output, Some(PathBuf::from("out")));
                assert_eq!(args.seed, Some(7));
                assert_eq!(args.only, vec!["hero", "wall"]);
                assert!(!args.sheet_json);
            }
            other => panic!("expected build, got {:?}", other),
        }
    }

    #[test]
    fn test_check_names() {
        let mut manifest = Manifest::default();
        assert!(check_names(&manifest).is_ok());

        manifest.skip = vec!["dragon".to_string()];
        let err = check_names(&manifest).unwrap_err();
        assert!(err.to_string().contains("dragon"));
    }
}
