//! Animation sheets.
//!
//! Frames are laid out left to right in a single-row strip. Frame metadata can
//! be exported in the TexturePacker JSON Hash format for game engine interop.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Serialize;

use super::Canvas;
use crate::error::{Result, SpriteError};

/// Concatenate same-sized frames horizontally, preserving order.
///
/// Fails fast on an empty frame list or when any frame differs in size from
/// the first.
pub fn compose_sheet(frames: &[Canvas]) -> Result<Canvas> {
    let first = frames.first().ok_or(SpriteError::EmptySheet)?;
    let (fw, fh) = first.size();

    for (index, frame) in frames.iter().enumerate().skip(1) {
        if frame.size() != (fw, fh) {
            return Err(SpriteError::FrameMismatch {
                index,
                width: fw,
                height: fh,
                actual_width: frame.width(),
                actual_height: frame.height(),
            });
        }
    }

    let count = frames.len() as u32;
    let mut sheet = Canvas::new(fw * count, fh)?;
    let sheet_width = sheet.width as usize;

    for (i, frame) in frames.iter().enumerate() {
        let ox = i * fw as usize;
        for y in 0..fh {
            let start = y as usize * sheet_width + ox;
            sheet.pixels[start..start + fw as usize].copy_from_slice(frame.row(y));
        }
    }

    Ok(sheet)
}

/// A frame in the sprite sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetFrame {
    pub name: String,
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

/// Sprite sheet metadata.
#[derive(Debug, Clone)]
pub struct SheetMeta {
    pub frames: Vec<SheetFrame>,
    pub image: String,
    pub size: (u32, u32),
    pub scale: u32,
}

impl SheetMeta {
    /// Metadata for a horizontal strip of `count` frames named `name_0`,
    /// `name_1`, ...
    pub fn strip(name: &str, frame_width: u32, frame_height: u32, count: u32, scale: u32) -> Self {
        let frames = (0..count)
            .map(|i| SheetFrame {
                name: format!("{}_{}", name, i),
                x: i * frame_width,
                y: 0,
                w: frame_width,
                h: frame_height,
            })
            .collect();

        Self {
            frames,
            image: format!("{}.png", name),
            size: (frame_width * count, frame_height),
            scale: scale.max(1),
        }
    }

    /// Serialize as TexturePacker JSON Hash.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(&TexturePackerJson::from_meta(self)).map_err(|e| {
            SpriteError::Build {
                message: format!("Failed to serialize sheet metadata: {}", e),
                help: None,
            }
        })
    }
}

/// Write sheet metadata as TexturePacker-compatible JSON Hash format.
pub fn write_sheet_json(meta: &SheetMeta, path: &Path) -> Result<()> {
    let json = meta.to_json()?;
    fs::write(path, json).map_err(|e| SpriteError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write sheet metadata: {}", e),
    })
}

// --- TexturePacker JSON serialization types ---

#[derive(Serialize)]
struct TexturePackerJson {
    frames: BTreeMap<String, TPFrame>,
    meta: TPMeta,
}

#[derive(Serialize)]
struct TPFrame {
    frame: TPRect,
    rotated: bool,
    trimmed: bool,
    #[serde(rename = "spriteSourceSize")]
    sprite_source_size: TPRect,
    #[serde(rename = "sourceSize")]
    source_size: TPSize,
}

#[derive(Serialize)]
struct TPRect {
    x: u32,
    y: u32,
    w: u32,
    h: u32,
}

#[derive(Serialize)]
struct TPSize {
    w: u32,
    h: u32,
}

#[derive(Serialize)]
struct TPMeta {
    app: String,
    version: String,
    image: String,
    size: TPSize,
    scale: String,
}

impl TexturePackerJson {
    fn from_meta(meta: &SheetMeta) -> Self {
        let s = meta.scale;
        let frames = meta
            .frames
            .iter()
            .map(|f| {
                let frame = TPFrame {
                    frame: TPRect {
                        x: f.x * s,
                        y: f.y * s,
                        w: f.w * s,
                        h: f.h * s,
                    },
                    rotated: false,
                    trimmed: false,
                    sprite_source_size: TPRect {
                        x: 0,
                        y: 0,
                        w: f.w * s,
                        h: f.h * s,
                    },
                    source_size: TPSize {
                        w: f.w * s,
                        h: f.h * s,
                    },
                };
                (f.name.clone(), frame)
            })
            .collect();

        TexturePackerJson {
            frames,
            meta: TPMeta {
                app: "spritegen".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                image: meta.image.clone(),
                size: TPSize {
                    w: meta.size.0 * s,
                    h: meta.size.1 * s,
                },
                scale: meta.scale.to_string(),
            },
        }
    }
}
