//! Shape primitives.
//!
//! Every primitive is total: cells that fall outside the canvas are skipped,
//! and the work done is bounded by the canvas rather than the shape.

use super::Canvas;
use crate::rng::NoiseRng;
use crate::types::{diamond_span, Colour, Region};

impl Canvas {
    /// Last valid column and row as signed coordinates.
    fn max_xy(&self) -> (i32, i32) {
        let clamp = |n: u32| i32::try_from(n - 1).unwrap_or(i32::MAX);
        (clamp(self.width()), clamp(self.height()))
    }

    /// The cells of `region` that land on the canvas, row-major.
    fn visible(&self, region: Region) -> impl Iterator<Item = (i32, i32)> {
        let (max_x, max_y) = self.max_xy();
        region.cells_within(0, 0, max_x, max_y)
    }

    /// `set` for coordinates that may lie outside `i32`.
    fn plot(&mut self, x: i64, y: i64, colour: Colour) {
        if let (Ok(x), Ok(y)) = (i32::try_from(x), i32::try_from(y)) {
            self.set(x, y, colour);
        }
    }

    /// Overwrite every cell of a region.
    pub fn fill(&mut self, region: Region, colour: Colour) {
        for (x, y) in self.visible(region) {
            self.set(x, y, colour);
        }
    }

    /// Composite `colour` over every cell of a region.
    pub fn fill_blend(&mut self, region: Region, colour: Colour) {
        for (x, y) in self.visible(region) {
            self.set_blend(x, y, colour);
        }
    }

    /// Fill the inclusive rectangle `(x1, y1)..=(x2, y2)`.
    pub fn fill_rect(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, colour: Colour) {
        self.fill(Region::rect(x1, y1, x2, y2), colour);
    }

    /// Fill every cell within `r` of the centre (`dx² + dy² <= r²`).
    pub fn fill_circle(&mut self, cx: i32, cy: i32, r: i32, colour: Colour) {
        self.fill(Region::disc(cx, cy, r), colour);
    }

    /// Fill a linearly tapering rhombus.
    pub fn fill_diamond(&mut self, cx: i32, cy: i32, hw: i32, hh: i32, colour: Colour) {
        self.fill(Region::diamond(cx, cy, hw, hh), colour);
    }

    /// Draw the hollow outline of the rhombus `fill_diamond` would fill.
    ///
    /// Rows contribute their left and right edge cells and columns their top
    /// and bottom edge cells, so steep and shallow edges are both closed.
    pub fn outline_diamond(&mut self, cx: i32, cy: i32, hw: i32, hh: i32, colour: Colour) {
        let (max_x, max_y) = self.max_xy();
        let (cx, cy) = (i64::from(cx), i64::from(cy));
        let (hw64, hh64) = (i64::from(hw), i64::from(hh));

        for y in (cy - hh64).max(0)..=(cy + hh64).min(max_y.into()) {
            let span = i64::from(diamond_span(hw, hh, (y - cy) as i32));
            self.plot(cx - span, y, colour);
            self.plot(cx + span, y, colour);
        }
        for x in (cx - hw64).max(0)..=(cx + hw64).min(max_x.into()) {
            let span = i64::from(diamond_span(hh, hw, (x - cx) as i32));
            self.plot(x, cy - span, colour);
            self.plot(x, cy + span, colour);
        }
    }

    /// Bresenham line between two inclusive endpoints.
    ///
    /// Stops early once the walk has left the canvas for good.
    pub fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, colour: Colour) {
        let (max_x, max_y) = self.max_xy();
        let (max_x, max_y) = (i64::from(max_x), i64::from(max_y));
        let (x0, y0, x1, y1) = (i64::from(x0), i64::from(y0), i64::from(x1), i64::from(y1));
        let dx = (x1 - x0).abs();
        let dy = (y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx - dy;
        let (mut x, mut y) = (x0, y0);

        loop {
            let gone_x = dx > 0 && ((sx > 0 && x > max_x) || (sx < 0 && x < 0));
            let gone_y = dy > 0 && ((sy > 0 && y > max_y) || (sy < 0 && y < 0));
            if gone_x || gone_y {
                break;
            }
            self.plot(x, y, colour);
            if x == x1 && y == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 > -dy {
                err -= dy;
                x += sx;
            }
            if e2 < dx {
                err += dx;
                y += sy;
            }
        }
    }

    /// Fill a region with `base`, nudging R, G and B of each cell by one
    /// shared draw from `[-variation, variation]`. Alpha is kept.
    pub fn noise_fill(&mut self, region: Region, base: Colour, variation: i32, rng: &mut NoiseRng) {
        self.noise_fill_with(region, variation, rng, |v| base.shift(v, v, v));
    }

    /// Fill a region with `shade(v)`, drawing one `v` per on-canvas cell.
    pub fn noise_fill_with<F>(&mut self, region: Region, variation: i32, rng: &mut NoiseRng, mut shade: F)
    where
        F: FnMut(i32) -> Colour,
    {
        for (x, y) in self.visible(region) {
            let v = rng.variation(variation);
            self.set(x, y, shade(v));
        }
    }
}
