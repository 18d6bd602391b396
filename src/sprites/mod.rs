//! The sprite catalog.
//!
//! A flat table of every asset the game ships: its name, frame size and the
//! plain function that draws it. Generators receive their own [`NoiseRng`] so
//! assets can be rendered in any order or in isolation with identical output.

mod characters;
mod effects;
pub mod palette;
mod structures;
mod tiles;

use crate::canvas::{compose_sheet, Canvas, SheetMeta};
use crate::error::{Result, SpriteError};
use crate::rng::NoiseRng;

/// Draws a single image.
pub type ImageFn = fn(&mut NoiseRng) -> Result<Canvas>;

/// Draws the frames of an animation sheet, in playback order.
pub type SheetFn = fn(&mut NoiseRng) -> Result<Vec<Canvas>>;

#[derive(Clone, Copy)]
pub enum Generator {
    Image(ImageFn),
    Sheet { frames: u32, draw: SheetFn },
}

/// One catalog entry.
#[derive(Clone, Copy)]
pub struct Asset {
    pub name: &'static str,
    /// Width of the image, or of one frame for sheets.
    pub width: u32,
    /// Height of the image or frame.
    pub height: u32,
    pub generator: Generator,
}

impl std::fmt::Debug for Asset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Asset")
            .field("name", &self.name)
            .field("width", &self.width)
            .field("height", &self.height)
            .field("frames", &self.frames())
            .finish()
    }
}

impl Asset {
    const fn image(name: &'static str, width: u32, height: u32, draw: ImageFn) -> Self {
        Self {
            name,
            width,
            height,
            generator: Generator::Image(draw),
        }
    }

    const fn sheet(name: &'static str, frames: u32, width: u32, height: u32, draw: SheetFn) -> Self {
        Self {
            name,
            width,
            height,
            generator: Generator::Sheet { frames, draw },
        }
    }

    /// Number of frames; 1 for plain images.
    pub fn frames(&self) -> u32 {
        match self.generator {
            Generator::Image(_) => 1,
            Generator::Sheet { frames, .. } => frames,
        }
    }

    pub fn is_sheet(&self) -> bool {
        matches!(self.generator, Generator::Sheet { .. })
    }

    /// Size of the encoded image (the full strip for sheets).
    pub fn output_size(&self) -> (u32, u32) {
        (self.width * self.frames(), self.height)
    }

    pub fn file_name(&self) -> String {
        format!("{}.png", self.name)
    }

    /// Frame metadata for sheets, `None` for plain images.
    pub fn sheet_meta(&self, scale: u32) -> Option<SheetMeta> {
        self.is_sheet()
            .then(|| SheetMeta::strip(self.name, self.width, self.height, self.frames(), scale))
    }

    /// Run the generator, composing sheets into a horizontal strip.
    ///
    /// The result is checked against the declared size so a generator that
    /// drifts from its catalog entry fails loudly instead of shipping a
    /// misaligned sheet.
    pub fn render(&self, rng: &mut NoiseRng) -> Result<Canvas> {
        let canvas = match self.generator {
            Generator::Image(draw) => draw(rng)?,
            Generator::Sheet { frames, draw } => {
                let drawn = draw(rng)?;
                if drawn.len() != frames as usize {
                    return Err(SpriteError::Build {
                        message: format!(
                            "'{}' drew {} frames, expected {}",
                            self.name,
                            drawn.len(),
                            frames
                        ),
                        help: None,
                    });
                }
                compose_sheet(&drawn)?
            }
        };

        let expected = self.output_size();
        if canvas.size() != expected {
            return Err(SpriteError::Build {
                message: format!(
                    "'{}' rendered at {}x{}, expected {}x{}",
                    self.name,
                    canvas.width(),
                    canvas.height(),
                    expected.0,
                    expected.1
                ),
                help: None,
            });
        }
        Ok(canvas)
    }

    /// Render with the noise stream derived from `base_seed` and this asset's
    /// name.
    pub fn render_seeded(&self, base_seed: u64) -> Result<Canvas> {
        self.render(&mut NoiseRng::for_asset(base_seed, self.name))
    }
}

/// Every asset, in build order.
pub fn catalog() -> Vec<Asset> {
    vec![
        Asset::image("hero", 32, 32, characters::hero),
        Asset::image("enemy", 32, 32, characters::enemy),
        Asset::image("enemy_orc", 32, 32, characters::enemy_orc),
        Asset::image("enemy_swift", 32, 32, characters::enemy_swift),
        Asset::image("enemy_demon", 32, 32, characters::enemy_demon),
        Asset::image("archer_tower", 32, 48, structures::archer_tower),
        Asset::image("ground_archer", 32, 32, structures::ground_archer),
        Asset::image("wall", 32, 24, structures::wall),
        Asset::image("rock", 32, 24, structures::rock),
        Asset::image("arrow", 16, 16, effects::arrow),
        Asset::image("highlight", 64, 32, tiles::highlight),
        Asset::image("spawn_overlay", 64, 32, tiles::spawn_overlay),
        Asset::image("goal_overlay", 64, 32, tiles::goal_overlay),
        Asset::image("tile_grass_1", 64, 32, tiles::tile_grass_1),
        Asset::image("tile_grass_2", 64, 32, tiles::tile_grass_2),
        Asset::image("tile_spawn", 64, 32, tiles::tile_spawn),
        Asset::image("tile_goal", 64, 32, tiles::tile_goal),
        Asset::sheet("hero_idle", 4, 32, 32, characters::hero_idle),
        Asset::sheet("hero_walk", 4, 32, 32, characters::hero_walk),
        Asset::sheet("hero_attack", 3, 32, 32, characters::hero_attack),
        Asset::sheet("goblin_walk", 4, 32, 32, characters::goblin_walk),
        Asset::sheet("orc_walk", 4, 32, 32, characters::orc_walk),
        Asset::sheet("swift_walk", 4, 32, 32, characters::swift_walk),
        Asset::sheet("demon_walk", 4, 32, 32, characters::demon_walk),
        Asset::sheet("fireball_fly", 3, 32, 32, effects::fireball_fly),
        Asset::sheet("fireball_explode", 4, 48, 48, effects::fireball_explode),
        Asset::sheet("slash_effect", 3, 64, 64, effects::slash_effect),
    ]
}

/// Look up an asset by name.
pub fn find(name: &str) -> Option<Asset> {
    catalog().into_iter().find(|a| a.name == name)
}
