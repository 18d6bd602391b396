//! Build command implementation.
//!
//! Renders every selected catalog asset and writes it as a PNG.

use std::fs;
use std::path::PathBuf;

use clap::Args;

use crate::canvas::write_sheet_json;
use crate::encode::{encode, write_png};
use crate::error::{Result, SpriteError};
use crate::manifest::Manifest;
use crate::output::{display_path, plural, Printer};
use crate::sprites::catalog;

/// Generate sprites, sheets and tiles as PNG files
#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Output directory [default: assets]
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Base seed for noise textures [default: 42]
    #[arg(long)]
    pub seed: Option<u64>,

    /// Scale factor for output (integer upscaling)
    #[arg(long)]
    pub scale: Option<u32>,

    /// Only build the named asset (repeatable)
    #[arg(long, value_name = "NAME")]
    pub only: Vec<String>,

    /// Also write TexturePacker JSON for each sheet
    #[arg(long)]
    pub sheet_json: bool,

    /// Manifest to read instead of ./spritegen.yaml
    #[arg(long)]
    pub manifest: Option<PathBuf>,
}

impl BuildArgs {
    /// Manifest values with command-line overrides applied.
    pub fn settings(&self) -> Result<Manifest> {
        let mut manifest = super::load_manifest(self.manifest.as_deref())?;
        if let Some(output) = &self.output {
            manifest.output = output.clone();
        }
        if let Some(seed) = self.seed {
            manifest.seed = seed;
        }
        if self.scale.is_some() {
            manifest.scale = self.scale;
        }
        if !self.only.is_empty() {
            manifest.only = self.only.clone();
        }
        manifest.sheet_json |= self.sheet_json;
        Ok(manifest)
    }
}

pub fn run(args: BuildArgs, printer: &Printer) -> Result<()> {
    let settings = args.settings()?;
    build(&settings, printer)?;
    Ok(())
}

/// Render and write every asset `settings` selects. Returns the written
/// paths, PNG and JSON, in catalog order.
pub fn build(settings: &Manifest, printer: &Printer) -> Result<Vec<PathBuf>> {
    super::check_names(settings)?;
    let scale = settings.effective_scale()?;

    let out_dir = &settings.output;
    fs::create_dir_all(out_dir).map_err(|e| SpriteError::Io {
        path: out_dir.clone(),
        message: format!("Failed to create output directory: {}", e),
    })?;

    let mut written = Vec::new();
    let mut count = 0;

    for asset in catalog().into_iter().filter(|a| settings.selects(a.name)) {
        let (w, h) = asset.output_size();
        let detail = if asset.is_sheet() {
            format!("{}x{}, {}", w, h, plural(asset.frames() as usize, "frame", "frames"))
        } else {
            format!("{}x{}", w, h)
        };
        printer.status("Generating", &format!("{} {}", asset.name, printer.dim(&format!("({})", detail))));

        let canvas = asset.render_seeded(settings.seed)?.upscale(scale)?;
        let path = out_dir.join(asset.file_name());
        write_png(&encode(&canvas)?, &path)?;
        written.push(path);

        if settings.sheet_json {
            if let Some(meta) = asset.sheet_meta(scale) {
                let json_path = out_dir.join(format!("{}.json", asset.name));
                write_sheet_json(&meta, &json_path)?;
                written.push(json_path);
            }
        }
        count += 1;
    }

    if count == 0 {
        printer.warning("Skipped", "no assets selected");
    } else {
        printer.success(
            "Finished",
            &format!(
                "{} in {}",
                plural(count, "asset", "assets"),
                printer.cyan(&display_path(out_dir))
            ),
        );
    }

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encode::read_png;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    fn settings_in(dir: &std::path::Path) -> Manifest {
        Manifest {
            output: dir.join("assets"),
            ..Default::default()
        }
    }

    #[test]
    fn test_build_writes_every_asset() {
        let dir = tempdir().unwrap();
        let settings = settings_in(dir.path());

        let written = build(&settings, &Printer::new()).unwrap();

        assert_eq!(written.len(), catalog().len());
        for asset in catalog() {
            let path = settings.output.join(asset.file_name());
            let img = image::open(&path).unwrap();
            assert_eq!((img.width(), img.height()), asset.output_size(), "{}", asset.name);
        }
    }

    #[test]
    fn test_second_build_is_byte_identical() {
        let dir = tempdir().unwrap();
        let settings = settings_in(dir.path());

        let first = build(&settings, &Printer::new()).unwrap();
        let before: Vec<Vec<u8>> = first.iter().map(|p| fs::read(p).unwrap()).collect();

        let second = build(&settings, &Printer::new()).unwrap();
        let after: Vec<Vec<u8>> = second.iter().map(|p| fs::read(p).unwrap()).collect();

        assert_eq!(first, second);
        assert!(before == after, "rebuild changed file contents");
    }

    #[test]
    fn test_filtering_does_not_change_other_assets() {
        let dir = tempdir().unwrap();
        let full = settings_in(dir.path());
        build(&full, &Printer::new()).unwrap();

        let partial = Manifest {
            output: dir.path().join("partial"),
            only: vec!["tile_grass_1".to_string()],
            ..Default::default()
        };
        let written = build(&partial, &Printer::new()).unwrap();
        assert_eq!(written.len(), 1);

        let a = read_png(&full.output.join("tile_grass_1.png")).unwrap();
        let b = read_png(&written[0]).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_scale_and_sheet_json() {
        let dir = tempdir().unwrap();
        let settings = Manifest {
            output: dir.path().join("out"),
            scale: Some(2),
            only: vec!["hero_attack".to_string(), "arrow".to_string()],
            sheet_json: true,
            ..Default::default()
        };

        let written = build(&settings, &Printer::new()).unwrap();
        let names: Vec<String> = written
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["arrow.png", "hero_attack.png", "hero_attack.json"]);

        let img = image::open(settings.output.join("hero_attack.png")).unwrap();
        assert_eq!((img.width(), img.height()), (192, 64));

        let json: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(settings.output.join("hero_attack.json")).unwrap()).unwrap();
        assert_eq!(json["frames"]["hero_attack_2"]["frame"]["x"], 128);
        assert_eq!(json["meta"]["scale"], "2");
    }

    #[test]
    fn test_unknown_only_name_is_an_error() {
        let dir = tempdir().unwrap();
        let settings = Manifest {
            output: dir.path().join("out"),
            only: vec!["dragon".to_string()],
            ..Default::default()
        };

        match build(&settings, &Printer::new()) {
            Err(SpriteError::Config { help, .. }) => assert!(help.is_some()),
            other => panic!("expected Config error, got {:?}", other),
        }
        assert!(!settings.output.exists());
    }

    #[test]
    fn test_cli_flags_override_manifest() {
        let dir = tempdir().unwrap();
        let manifest_path = dir.path().join("spritegen.yaml");
        fs::write(&manifest_path, "output: from-manifest\nseed: 5\nscale: 3\n").unwrap();

        let args = BuildArgs {
            output: Some(dir.path().join("from-cli")),
            seed: None,
            scale: Some(1),
            only: vec![],
            sheet_json: true,
            manifest: Some(manifest_path),
        };
        let settings = args.settings().unwrap();

        assert_eq!(settings.output, dir.path().join("from-cli"));
        assert_eq!(settings.seed, 5);
        assert_eq!(settings.effective_scale().unwrap(), 1);
        assert!(settings.sheet_json);
    }

    #[test]
    fn test_explicit_missing_manifest_is_an_error() {
        let dir = tempdir().unwrap();
        let args = BuildArgs {
            output: None,
            seed: None,
            scale: None,
            only: vec![],
            sheet_json: false,
            manifest: Some(dir.path().join("nope.yaml")),
        };
        assert!(matches!(args.settings(), Err(SpriteError::Io { .. })));
    }

    #[test]
    fn test_oversized_scale_flag_is_a_config_error() {
        let dir = tempdir().unwrap();
        let args = BuildArgs {
            output: Some(dir.path().join("out")),
            seed: None,
            scale: Some(200_000_000),
            only: vec!["arrow".to_string()],
            sheet_json: false,
            manifest: Some(dir.path().join("spritegen.yaml")),
        };
        fs::write(dir.path().join("spritegen.yaml"), "").unwrap();

        let settings = args.settings().unwrap();
        match build(&settings, &Printer::new()) {
            Err(SpriteError::Config { help, .. }) => assert!(help.is_some()),
            other => panic!("expected Config error, got {:?}", other),
        }
        assert!(!settings.output.exists());
    }
}
