//! PNG output for canvases.
//!
//! `encode` turns a canvas into PNG bytes; `write_png` stores them so that a
//! failed write never leaves a half-written asset behind.

mod png;

pub use png::{encode, Chunk, EncodedPng, SIGNATURE};

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, SpriteError};

/// Write encoded bytes to `path` via a sibling temporary file and a rename.
pub fn write_png(png: &EncodedPng, path: &Path) -> Result<()> {
    let tmp = temp_path(path);

    fs::write(&tmp, png.as_bytes()).map_err(|e| {
        let _ = fs::remove_file(&tmp);
        SpriteError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to write PNG: {}", e),
        }
    })?;

    fs::rename(&tmp, path).map_err(|e| {
        let _ = fs::remove_file(&tmp);
        SpriteError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to move PNG into place: {}", e),
        }
    })
}

/// Read a PNG file back for verification.
pub fn read_png(path: &Path) -> Result<EncodedPng> {
    let bytes = fs::read(path).map_err(|e| SpriteError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to read PNG: {}", e),
    })?;
    Ok(EncodedPng::from_bytes(bytes))
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".partial");
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::Canvas;
    use crate::types::Colour;
    use tempfile::tempdir;

    #[test]
    fn test_write_png_simple() {
        let mut canvas = Canvas::new(2, 2).unwrap();
        canvas.set(0, 0, Colour::BLACK);
        canvas.set(1, 0, Colour::WHITE);

        let dir = tempdir().unwrap();
        let path = dir.path().join("test.png");

        write_png(&encode(&canvas).unwrap(), &path).unwrap();

        assert!(path.exists());
        assert!(!dir.path().join("test.png.partial").exists());

        let img = image::open(&path).unwrap().to_rgba8();
        assert_eq!(img.width(), 2);
        assert_eq!(img.height(), 2);
        assert_eq!(img.get_pixel(0, 0).0, [0, 0, 0, 255]);
        assert_eq!(img.get_pixel(1, 0).0, [255, 255, 255, 255]);
        assert_eq!(img.get_pixel(0, 1).0, [0, 0, 0, 0]);
    }

    #[test]
    fn test_write_png_replaces_existing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("swap.png");
        fs::write(&path, b"stale").unwrap();

        let png = encode(&Canvas::filled(1, 1, Colour::WHITE).unwrap()).unwrap();
        write_png(&png, &path).unwrap();

        assert_eq!(read_png(&path).unwrap(), png);
    }

    #[test]
    fn test_write_png_missing_directory_errors() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("no").join("such").join("dir.png");
        let png = encode(&Canvas::new(1, 1).unwrap()).unwrap();

        match write_png(&png, &path) {
            Err(SpriteError::Io { path: p, .. }) => assert_eq!(p, path),
            other => panic!("expected Io error, got {:?}", other),
        }
    }

    #[test]
    fn test_temp_path_is_sibling() {
        let p = Path::new("/out/hero.png");
        assert_eq!(temp_path(p), Path::new("/out/hero.png.partial"));
    }
}
