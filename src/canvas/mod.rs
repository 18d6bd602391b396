//! Raster canvas - an in-memory RGBA buffer with drawing primitives.
//!
//! Coordinates are signed so shape maths may overshoot the edges freely:
//! writes outside the canvas are ignored and reads outside it return
//! [`Colour::TRANSPARENT`].

mod draw;
mod sheet;

pub use sheet::{compose_sheet, write_sheet_json, SheetFrame, SheetMeta};

use crate::error::{Result, SpriteError};
use crate::types::Colour;

/// A fixed-size grid of colours, origin top-left, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<Colour>,
}

impl Canvas {
    /// Create a fully transparent canvas.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Self::filled(width, height, Colour::TRANSPARENT)
    }

    /// Create a canvas with every pixel set to `fill`.
    pub fn filled(width: u32, height: u32, fill: Colour) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(SpriteError::InvalidDimensions { width, height });
        }
        Ok(Self {
            width,
            height,
            pixels: vec![fill; width as usize * height as usize],
        })
    }

    /// Get the width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the dimensions as (width, height).
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    /// Read a pixel; transparent outside the canvas.
    pub fn get(&self, x: i32, y: i32) -> Colour {
        self.index(x, y)
            .map_or(Colour::TRANSPARENT, |i| self.pixels[i])
    }

    /// Overwrite a pixel; no-op outside the canvas.
    pub fn set(&mut self, x: i32, y: i32, colour: Colour) {
        if let Some(i) = self.index(x, y) {
            self.pixels[i] = colour;
        }
    }

    /// Composite `colour` over the existing pixel; no-op outside the canvas.
    pub fn set_blend(&mut self, x: i32, y: i32, colour: Colour) {
        if let Some(i) = self.index(x, y) {
            self.pixels[i] = colour.over(self.pixels[i]);
        }
    }

    /// Row-major pixel slice.
    pub fn pixels(&self) -> &[Colour] {
        &self.pixels
    }

    /// One row of pixels.
    pub fn row(&self, y: u32) -> &[Colour] {
        let w = self.width as usize;
        let start = y as usize * w;
        &self.pixels[start..start + w]
    }

    /// Flat RGBA bytes, row-major, no padding.
    pub fn to_rgba_bytes(&self) -> Vec<u8> {
        let mut buffer = Vec::with_capacity(self.pixels.len() * 4);
        for colour in &self.pixels {
            buffer.extend_from_slice(&colour.to_rgba());
        }
        buffer
    }

    /// Nearest-neighbour integer upscale. Factors 0 and 1 return a copy.
    pub fn upscale(&self, factor: u32) -> Result<Canvas> {
        if factor <= 1 {
            return Ok(self.clone());
        }

        let overflow = || SpriteError::ScaleOverflow {
            width: self.width,
            height: self.height,
            factor,
        };
        let width = self.width.checked_mul(factor).ok_or_else(overflow)?;
        let height = self.height.checked_mul(factor).ok_or_else(overflow)?;
        let len = (width as usize).checked_mul(height as usize).ok_or_else(overflow)?;
        let mut pixels = Vec::with_capacity(len);

        for y in 0..height {
            let src = self.row(y / factor);
            for x in 0..width {
                pixels.push(src[(x / factor) as usize]);
            }
        }

        Ok(Canvas {
            width,
            height,
            pixels,
        })
    }
}
