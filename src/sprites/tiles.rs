//! 64x32 isometric floor tiles and tile overlays.

use crate::canvas::Canvas;
use crate::error::Result;
use crate::rng::NoiseRng;
use crate::types::{diamond_span, Colour, Region};

const W: i32 = 64;
const H: i32 = 32;
const HW: i32 = W / 2;
const HH: i32 = H / 2;

const TILE: Region = Region::iso_tile(W, H);

fn tile_canvas() -> Result<Canvas> {
    Canvas::new(W as u32, H as u32)
}

/// Border shared by every textured tile, one cell inside the tile edge.
fn tile_border(g: &mut Canvas, colour: Colour) {
    g.outline_diamond(HW, HH, HW - 1, HH - 1, colour);
}

/// Glowing three-cell rim around a faint white fill; marks the hovered tile.
pub fn highlight(_rng: &mut NoiseRng) -> Result<Canvas> {
    let mut g = tile_canvas()?;
    let rim = [200, 120, 60];

    for y in 0..H {
        let span = diamond_span(HW, HH, y - HH);
        for (t, alpha) in rim.into_iter().enumerate() {
            let t = t as i32;
            if span - t >= 0 {
                let c = Colour::new(255, 255, 200, alpha);
                g.set(HW - span + t, y, c);
                g.set(HW + span - t, y, c);
            }
        }
        for x in (HW - span + 3)..(HW + span - 2) {
            g.set(x, y, Colour::new(255, 255, 255, 35));
        }
    }
    Ok(g)
}

fn overlay(fill: Colour, border: Colour) -> Result<Canvas> {
    let mut g = tile_canvas()?;
    g.fill(TILE, fill);
    tile_border(&mut g, border);
    Ok(g)
}

pub fn spawn_overlay(_rng: &mut NoiseRng) -> Result<Canvas> {
    overlay(Colour::new(200, 40, 40, 50), Colour::new(200, 40, 40, 100))
}

pub fn goal_overlay(_rng: &mut NoiseRng) -> Result<Canvas> {
    overlay(Colour::new(230, 190, 50, 60), Colour::new(230, 190, 50, 120))
}

/// Dark grass with a few bright tufts.
pub fn tile_grass_1(rng: &mut NoiseRng) -> Result<Canvas> {
    let mut g = tile_canvas()?;
    g.noise_fill(TILE, Colour::new(55, 80, 40, 210), 8, rng);

    for (tx, ty) in [(20, 10), (40, 8), (30, 20), (50, 14), (14, 18), (45, 22)] {
        if TILE.contains(tx, ty) {
            g.set(tx, ty, Colour::new(70, 110, 50, 220));
            if TILE.contains(tx - 1, ty - 1) {
                g.set(tx - 1, ty - 1, Colour::new(65, 100, 45, 200));
            }
        }
    }
    tile_border(&mut g, Colour::new(40, 55, 30, 140));
    Ok(g)
}

/// Lighter checkerboard partner of `tile_grass_1`.
pub fn tile_grass_2(rng: &mut NoiseRng) -> Result<Canvas> {
    let mut g = tile_canvas()?;
    g.noise_fill(TILE, Colour::new(60, 90, 48, 210), 8, rng);

    for (tx, ty) in [(25, 12), (35, 6), (18, 22), (48, 16), (32, 24)] {
        if TILE.contains(tx, ty) {
            g.set(tx, ty, Colour::new(80, 120, 55, 220));
            if TILE.contains(tx + 1, ty - 1) {
                g.set(tx + 1, ty - 1, Colour::new(75, 115, 50, 200));
            }
        }
    }
    tile_border(&mut g, Colour::new(45, 60, 35, 140));
    Ok(g)
}

/// Cracked reddish earth where enemies enter.
pub fn tile_spawn(rng: &mut NoiseRng) -> Result<Canvas> {
    let mut g = tile_canvas()?;
    let base = Colour::new(120, 60, 45, 220);
    g.noise_fill_with(TILE, 10, rng, |v| base.shift(v, v.div_euclid(2), v.div_euclid(2)));

    let crack = Colour::new(80, 35, 25, 200);
    let cracks = (0..8)
        .map(|i| (20 + i * 2, 10 + i))
        .chain((0..6).map(|i| (35 + i, 14 + i)));
    for (x, y) in cracks {
        if TILE.contains(x, y) {
            g.set(x, y, crack);
        }
    }
    for (x, y) in [(28, 14), (38, 18)] {
        if TILE.contains(x, y) {
            g.set(x, y, Colour::new(180, 50, 30, 180));
        }
    }
    tile_border(&mut g, Colour::new(100, 40, 30, 160));
    Ok(g)
}

/// Golden paving stones at the defended exit.
pub fn tile_goal(rng: &mut NoiseRng) -> Result<Canvas> {
    let mut g = tile_canvas()?;
    let base = Colour::new(180, 160, 80, 230);
    g.noise_fill_with(TILE, 10, rng, |v| base.shift(v, v, v.div_euclid(2)));

    let seam = Colour::new(150, 130, 60, 180);
    for y in 0..H {
        for x in 0..W {
            if TILE.contains(x, y) && (y == 10 || y == 22 || (x + y) % 12 == 0) {
                g.set(x, y, seam);
            }
        }
    }
    for (x, y) in [(22, 8), (42, 12), (30, 24)] {
        if TILE.contains(x, y) {
            g.set(x, y, Colour::new(230, 210, 100, 240));
        }
    }
    tile_border(&mut g, Colour::new(160, 140, 50, 180));
    Ok(g)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rng() -> NoiseRng {
        NoiseRng::new(0)
    }

    #[test]
    fn test_tile_corners_are_transparent() {
        for tile in [tile_grass_1, tile_grass_2, tile_spawn, tile_goal] {
            let g = tile(&mut rng()).unwrap();
            assert!(g.get(0, 0).is_transparent());
            assert!(g.get(63, 0).is_transparent());
            assert!(g.get(0, 31).is_transparent());
            assert!(g.get(63, 31).is_transparent());
            assert!(!g.get(32, 16).is_transparent());
        }
    }

    #[test]
    fn test_overlay_fill_and_border() {
        let g = spawn_overlay(&mut rng()).unwrap();
        assert_eq!(g.get(32, 16), Colour::new(200, 40, 40, 50));
        // left vertex of the inset border
        assert_eq!(g.get(1, 16), Colour::new(200, 40, 40, 100));
        assert_eq!(g.get(0, 16), Colour::new(200, 40, 40, 50));
    }

    #[test]
    fn test_highlight_rim_and_fill() {
        let g = highlight(&mut rng()).unwrap();
        assert_eq!(g.get(0, 16), Colour::new(255, 255, 200, 200));
        assert_eq!(g.get(1, 16), Colour::new(255, 255, 200, 120));
        assert_eq!(g.get(2, 16), Colour::new(255, 255, 200, 60));
        assert_eq!(g.get(3, 16), Colour::new(255, 255, 255, 35));
        assert_eq!(g.get(32, 0), Colour::new(255, 255, 200, 200));
    }

    #[test]
    fn test_goal_seams() {
        let g = tile_goal(&mut rng()).unwrap();
        assert_eq!(g.get(32, 10), Colour::new(150, 130, 60, 180));
        assert_eq!(g.get(30, 18), Colour::new(150, 130, 60, 180));
        assert_eq!(g.get(42, 12), Colour::new(230, 210, 100, 240));
    }

    #[test]
    fn test_spawn_noise_halves_green_and_blue() {
        let g = tile_spawn(&mut rng()).unwrap();
        let c = g.get(32, 4);
        let dr = c.r as i32 - 120;
        assert!(dr.abs() <= 10);
        assert_eq!(c.g as i32 - 60, dr.div_euclid(2));
        assert_eq!(c.b as i32 - 45, dr.div_euclid(2));
        assert_eq!(c.a, 220);
    }
}
