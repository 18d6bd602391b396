//! Verify command implementation.
//!
//! Re-reads every generated PNG, checks its chunk framing, decodes it with an
//! independent decoder and compares the pixels with a fresh render.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use clap::Args;
use walkdir::WalkDir;

use crate::encode::read_png;
use crate::error::{Result, SpriteError};
use crate::manifest::Manifest;
use crate::output::{display_path, plural, Printer};
use crate::sprites::{catalog, Asset};

/// Check generated files against a fresh render
#[derive(Args, Debug)]
pub struct VerifyArgs {
    /// Directory holding the generated assets [default: assets]
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Seed the assets were built with [default: 42]
    #[arg(long)]
    pub seed: Option<u64>,

    /// Scale the assets were built with
    #[arg(long)]
    pub scale: Option<u32>,

    /// Manifest to read instead of ./spritegen.yaml
    #[arg(long)]
    pub manifest: Option<PathBuf>,
}

impl VerifyArgs {
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
        Ok(manifest)
    }
}

/// Outcome of a verification pass that found no corrupt or stale files.
#[derive(Debug, Default, PartialEq)]
pub struct VerifyReport {
    /// Assets whose file matched a fresh render.
    pub verified: Vec<String>,
    /// Selected assets with no file on disk.
    pub missing: Vec<String>,
    /// PNG files in the output directory that no catalog asset produces.
    pub stray: Vec<PathBuf>,
}

pub fn run(args: VerifyArgs, printer: &Printer) -> Result<()> {
    let settings = args.settings()?;
    verify(&settings, printer)?;
    Ok(())
}

pub fn verify(settings: &Manifest, printer: &Printer) -> Result<VerifyReport> {
    super::check_names(settings)?;
    let scale = settings.effective_scale()?;

    let out_dir = &settings.output;
    if !out_dir.is_dir() {
        return Err(SpriteError::Verify {
            message: format!("Output directory {} not found", display_path(out_dir)),
            help: Some("Run `spritegen build` first".to_string()),
        });
    }

    let mut report = VerifyReport::default();
    let mut failures = 0;

    for asset in catalog().into_iter().filter(|a| settings.selects(a.name)) {
        let path = out_dir.join(asset.file_name());
        if !path.exists() {
            printer.warning("Missing", &display_path(&path));
            report.missing.push(asset.name.to_string());
            continue;
        }

        match check_asset(&asset, &path, settings.seed, scale) {
            Ok(()) => {
                printer.status("Verified", asset.name);
                report.verified.push(asset.name.to_string());
            }
            Err(e) => {
                printer.error("Mismatch", &format!("{}: {}", asset.name, e));
                failures += 1;
            }
        }
    }

    report.stray = stray_files(out_dir)?;
    for path in &report.stray {
        printer.warning("Stray", &display_path(path));
    }

    if failures > 0 {
        return Err(SpriteError::Verify {
            message: format!(
                "{} did not match a fresh render",
                plural(failures, "asset", "assets")
            ),
            help: Some("Rebuild with `spritegen build` using the same seed and scale".to_string()),
        });
    }

    printer.success(
        "Finished",
        &format!(
            "{} verified, {} missing",
            plural(report.verified.len(), "asset", "assets"),
            report.missing.len()
        ),
    );
    Ok(report)
}

/// Framing, decodability and pixel equality for one file.
fn check_asset(asset: &Asset, path: &Path, seed: u64, scale: u32) -> Result<()> {
    let png = read_png(path)?;

    let tags: Vec<String> = png.chunks()?.iter().map(|c| c.tag_str().to_string()).collect();
    if tags != ["IHDR", "IDAT", "IEND"] {
        return Err(mismatch(format!("unexpected chunk layout {}", tags.join(", "))));
    }

    let decoded = image::load_from_memory_with_format(png.as_bytes(), image::ImageFormat::Png)
        .map_err(|e| mismatch(format!("decode failed: {}", e)))?
        .to_rgba8();

    let expected = asset.render_seeded(seed)?.upscale(scale)?;

    if decoded.dimensions() != expected.size() {
        let (w, h) = decoded.dimensions();
        return Err(mismatch(format!(
            "file is {}x{}, expected {}x{}",
            w,
            h,
            expected.width(),
            expected.height()
        )));
    }
    if decoded.as_raw() != &expected.to_rgba_bytes() {
        return Err(mismatch("pixels differ".to_string()));
    }
    Ok(())
}

/// PNG files directly inside `dir` that no catalog asset owns, plus
/// leftover temporary files from interrupted writes.
fn stray_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let owned: HashSet<String> = catalog().iter().map(|a| a.file_name()).collect();
    let mut stray = Vec::new();

    for entry in WalkDir::new(dir).min_depth(1).max_depth(1).sort_by_file_name() {
        let entry = entry.map_err(|e| SpriteError::Io {
            path: dir.to_path_buf(),
            message: format!("Failed to scan output directory: {}", e),
        })?;
        if !entry.file_type().is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy();
        let is_png = name.ends_with(".png") && !owned.contains(&*name);
        if is_png || name.ends_with(".partial") {
            stray.push(entry.into_path());
        }
    }

    Ok(stray)
}

fn mismatch(message: String) -> SpriteError {
    SpriteError::Verify { message, help: None }
}
