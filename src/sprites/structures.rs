//! Towers, defenders and map obstacles.

use super::palette::*;
use crate::canvas::Canvas;
use crate::error::Result;
use crate::rng::NoiseRng;
use crate::types::{Colour, Region};

/// 32x48 archer tower: noisy stone body, battlements, roof and a lookout.
pub fn archer_tower(rng: &mut NoiseRng) -> Result<Canvas> {
    let mut g = Canvas::new(32, 48)?;
    g.fill_diamond(16, 44, 10, 3, shadow(60));

    g.noise_fill(Region::diamond(16, 40, 12, 5), TOWER_STONE_DARK, 8, rng);
    g.noise_fill(Region::diamond(16, 39, 11, 4), TOWER_STONE, 6, rng);
    g.noise_fill(Region::rect(10, 14, 22, 38), TOWER_STONE, 5, rng);
    g.noise_fill(Region::rect(11, 14, 21, 37), TOWER_STONE_LIGHT, 5, rng);

    for y in [18, 22, 26, 30, 34] {
        g.fill_rect(10, y, 22, y, TOWER_STONE_DARK);
    }
    for y in [20, 24, 28, 32] {
        g.set(16, y, TOWER_STONE_DARK);
    }
    for y in 14..39 {
        g.set(10, y, TOWER_STONE_DARK.shift(-10, -10, -10));
    }

    // window with candle glow
    g.fill_rect(14, 27, 18, 30, Colour::rgb(30, 30, 50));
    g.fill_rect(15, 28, 17, 29, Colour::rgb(20, 20, 40));
    g.set(16, 28, Colour::new(60, 50, 30, 200));
    g.set(16, 29, Colour::new(40, 35, 20, 150));

    g.fill_rect(8, 12, 24, 15, TOWER_STONE);
    for x in [8, 10, 14, 18, 22] {
        g.fill_rect(x, 10, x + 1, 12, TOWER_STONE);
    }

    g.fill_rect(12, 10, 20, 11, TOWER_ROOF);
    g.fill_rect(14, 8, 18, 10, TOWER_ROOF);
    g.fill_rect(15, 7, 17, 8, TOWER_ROOF_LIGHT);
    g.set(15, 8, TOWER_ROOF_LIGHT.shift(20, 20, 20));

    g.fill_circle(16, 5, 2, HERO_SKIN);
    g.fill_rect(14, 7, 18, 9, ARCHER_GREEN);
    g.set(14, 7, ARCHER_GREEN_LIGHT);
    Ok(g)
}

/// 32x32 hooded archer with bow, quiver and belt.
pub fn ground_archer(rng: &mut NoiseRng) -> Result<Canvas> {
    let mut g = Canvas::new(32, 32)?;
    g.fill_diamond(16, 28, 7, 3, shadow(60));
    g.noise_fill(Region::diamond(16, 21, 6, 7), ARCHER_GREEN, 8, rng);
    g.noise_fill(Region::diamond(16, 20, 5, 5), ARCHER_GREEN_LIGHT, 6, rng);
    g.fill_rect(12, 24, 20, 26, ARCHER_GREEN_DARK);

    g.fill_circle(16, 11, 4, HERO_SKIN);
    g.fill_rect(12, 7, 20, 9, ARCHER_GREEN_DARK);
    g.fill_rect(13, 7, 19, 8, ARCHER_GREEN);
    g.set(16, 6, ARCHER_GREEN);
    g.set(16, 7, ARCHER_GREEN_LIGHT);
    g.set(14, 11, Colour::rgb(40, 60, 40));
    g.set(18, 11, Colour::rgb(40, 60, 40));

    for i in 0..10 {
        g.set(24, 10 + i, ARCHER_BOW);
    }
    g.set(25, 11, ARCHER_BOW);
    g.set(25, 18, ARCHER_BOW);
    g.set(25, 14, ARCHER_BOW.shift(20, 10, 5));
    for i in 0..8 {
        g.set(23, 11 + i, ARCHER_STRING);
    }

    // quiver
    g.fill_rect(8, 13, 9, 20, WALL_BROWN);
    g.set(8, 12, ARROW_GOLD);
    g.set(9, 12, ARROW_GOLD);
    g.set(8, 11, ARROW_BRIGHT);

    g.fill_rect(12, 21, 20, 21, WALL_BROWN_DARK);
    g.set(16, 21, HERO_GOLD);
    Ok(g)
}

/// 32x24 brick wall block.
pub fn wall(rng: &mut NoiseRng) -> Result<Canvas> {
    let mut g = Canvas::new(32, 24)?;
    g.noise_fill(Region::rect(6, 4, 26, 18), WALL_BROWN, 8, rng);
    g.noise_fill(Region::rect(7, 5, 25, 17), WALL_BROWN_LIGHT, 6, rng);

    for y in [7, 11, 15] {
        g.fill_rect(6, y, 26, y, WALL_MORTAR);
        g.set(11, y + 1, WALL_MORTAR);
        g.set(21, y + 1, WALL_MORTAR);
    }
    g.set(16, 9, WALL_MORTAR);
    g.set(16, 13, WALL_MORTAR);

    let lit = WALL_BROWN_LIGHT.shift(15, 12, 8);
    for (x, y) in [(8, 6), (18, 10), (13, 14)] {
        g.set(x, y, lit);
    }

    g.noise_fill(Region::rect(6, 2, 26, 4), WALL_BROWN_LIGHT, 5, rng);
    g.noise_fill(Region::rect(7, 2, 25, 3), WALL_TOP, 5, rng);

    for y in 2..19 {
        g.set(6, y, WALL_BROWN_DARK);
        g.set(26, y, WALL_BROWN_DARK);
    }
    g.fill_rect(7, 18, 25, 18, WALL_BROWN_DARK.shift(-10, -10, -10));
    Ok(g)
}

/// 32x24 boulder with a lit top, crevices and moss.
pub fn rock(rng: &mut NoiseRng) -> Result<Canvas> {
    let mut g = Canvas::new(32, 24)?;
    g.fill_diamond(16, 20, 12, 3, shadow(50));
    g.noise_fill(Region::disc(16, 13, 10), ROCK_GRAY, 10, rng);

    // lit cap, clipped to the upper left of the body
    for (x, y) in Region::disc(15, 12, 8).cells() {
        if x < 8 || y > 17 {
            continue;
        }
        let v = rng.variation(8);
        g.set(x, y, ROCK_GRAY_LIGHT.shift(v, v, v));
    }

    g.fill_circle(13, 9, 3, ROCK_HIGHLIGHT);
    g.set(12, 8, Colour::rgb(200, 200, 205));

    g.draw_line(18, 14, 21, 16, ROCK_GRAY_DARK);
    g.draw_line(11, 15, 13, 18, ROCK_GRAY_DARK);

    g.set(10, 15, MOSS);
    g.set(11, 16, MOSS);
    g.set(22, 12, MOSS);
    g.set(9, 16, Colour::new(50, 90, 40, 200));
    Ok(g)
}
