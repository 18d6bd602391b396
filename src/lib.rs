//! spritegen - procedural pixel-art sprite generator
//!
//! Draws the sprites, animation sheets and isometric tiles of a small tower
//! defense game from geometric primitives and encodes them with a built-in
//! PNG writer.

pub mod canvas;
pub mod cli;
pub mod encode;
pub mod error;
pub mod manifest;
pub mod output;
pub mod rng;
pub mod sprites;
pub mod types;

pub use canvas::{compose_sheet, write_sheet_json, Canvas, SheetFrame, SheetMeta};
pub use encode::{encode, read_png, write_png, Chunk, EncodedPng};
pub use error::{Result, SpriteError};
pub use manifest::{Manifest, MANIFEST_FILENAME, MAX_SCALE};
pub use rng::{NoiseRng, DEFAULT_SEED};
pub use sprites::{catalog, find, Asset, Generator};
pub use types::{Colour, Region};
