//! Projectiles and combat effects.

use std::f64::consts::PI;

use super::palette::*;
use crate::canvas::Canvas;
use crate::error::Result;
use crate::rng::NoiseRng;
use crate::types::Colour;

/// `alpha * factor` in double precision, truncated. Products such as
/// `90 * 0.7` land just under an integer and truncate down.
fn fade(alpha: u8, factor: f64) -> u8 {
    (f64::from(alpha) * factor) as u8
}

/// Point at `angle` on a circle of radius `r`, truncated toward zero.
fn polar(cx: i32, cy: i32, angle: f64, r: f64) -> (i32, i32) {
    (
        (cx as f64 + angle.cos() * r) as i32,
        (cy as f64 + angle.sin() * r) as i32,
    )
}

/// 16x16 glowing arrow with fletching and a short trail.
pub fn arrow(_rng: &mut NoiseRng) -> Result<Canvas> {
    let mut g = Canvas::new(16, 16)?;
    g.fill_circle(8, 8, 5, Colour::new(255, 200, 50, 40));
    g.fill_circle(8, 8, 3, Colour::new(255, 220, 100, 80));

    for x in 5..11 {
        g.set(x, 8, ARROW_SHAFT);
        g.set(x, 7, ARROW_SHAFT.with_alpha(60));
    }
    g.set(9, 8, ARROW_GOLD);
    g.set(10, 8, ARROW_BRIGHT);

    for (x, y) in [(11, 7), (11, 8), (11, 9), (12, 8)] {
        g.set(x, y, ARROW_BRIGHT);
    }
    g.set(13, 8, Colour::new(255, 255, 200, 200));

    for (x, y) in [(4, 6), (4, 7), (4, 9), (4, 10), (5, 7), (5, 9)] {
        g.set(x, y, ARROW_SHAFT);
    }
    g.set(3, 8, ARROW_GOLD.with_alpha(60));
    g.set(2, 8, ARROW_GOLD.with_alpha(30));
    Ok(g)
}

/// Three 32x32 flame shapes cycling in flight, with trailing sparks.
pub fn fireball_fly(_rng: &mut NoiseRng) -> Result<Vec<Canvas>> {
    let (cx, cy) = (16, 16);
    let sparks = [(-6, -2), (-7, 1), (-5, 3)];

    let mut frames = Vec::with_capacity(3);
    for (fi, (sx, sy)) in sparks.into_iter().enumerate() {
        let mut f = Canvas::new(32, 32)?;
        f.fill_circle(cx, cy, 8, Colour::new(255, 100, 0, 60));
        match fi {
            0 => {
                f.fill_circle(cx, cy, 5, Colour::new(255, 120, 20, 200));
                f.fill_circle(cx, cy, 3, Colour::new(255, 200, 50, 240));
                f.fill_circle(cx - 1, cy - 1, 1, Colour::rgb(255, 255, 200));
            }
            1 => {
                f.fill_circle(cx, cy, 6, Colour::new(255, 100, 10, 180));
                f.fill_circle(cx + 1, cy, 3, Colour::new(255, 180, 30, 230));
                f.fill_circle(cx, cy, 2, Colour::rgb(255, 240, 100));
            }
            _ => {
                f.fill_circle(cx, cy, 5, Colour::new(255, 130, 30, 190));
                f.fill_circle(cx - 1, cy + 1, 4, Colour::new(255, 160, 40, 220));
                f.fill_circle(cx, cy, 2, Colour::new(255, 220, 80, 250));
                f.fill_circle(cx, cy - 1, 1, Colour::rgb(255, 255, 200));
            }
        }
        f.set(cx + sx, cy + sy, Colour::new(255, 200, 50, 180));
        f.set(cx + sx - 1, cy + sy + 1, Colour::new(255, 150, 0, 120));
        frames.push(f);
    }
    Ok(frames)
}

/// Four 48x48 frames of an expanding, fading blast with debris.
pub fn fireball_explode(_rng: &mut NoiseRng) -> Result<Vec<Canvas>> {
    let (cx, cy) = (24, 24);
    let radii = [8, 16, 20, 22];
    let alphas = [255u8, 220, 160, 80];

    let mut frames = Vec::with_capacity(4);
    for fi in 0..4 {
        let mut f = Canvas::new(48, 48)?;
        let r = radii[fi];
        let a = alphas[fi];

        f.fill_circle(cx, cy, r, Colour::new(255, 100, 0, fade(a, 0.3)));
        f.fill_circle(cx, cy, r * 70 / 100, Colour::new(255, 150, 30, fade(a, 0.5)));
        f.fill_circle(cx, cy, r * 35 / 100, Colour::new(255, 220, 80, fade(a, 0.8)));
        f.fill_circle(cx, cy, r * 15 / 100, Colour::new(255, 255, 200, a));

        if fi >= 1 {
            let debris = Colour::new(255, 200, 50, fade(a, 0.7));
            for i in 0..6 {
                let angle = i as f64 * (PI * 2.0 / 6.0) + fi as f64 * 0.3;
                let (sx, sy) = polar(cx, cy, angle, r as f64 * 0.8);
                f.set(sx, sy, debris);
            }
        }
        frames.push(f);
    }
    Ok(frames)
}

/// Three 64x64 frames of a crescent sweep, composited with alpha blending.
pub fn slash_effect(_rng: &mut NoiseRng) -> Result<Vec<Canvas>> {
    let (cx, cy) = (32, 32);
    const STEPS: i32 = 60;

    let mut frames = Vec::with_capacity(3);
    for fi in 0..3 {
        let mut f = Canvas::new(64, 64)?;
        let sweep = (fi + 1) as f64 / 3.0;
        let alpha = [255u8, 191, 127][fi as usize];
        let arc_start = -PI * 0.5;
        let arc_end = arc_start + PI * 1.2 * sweep;
        let outer = 24 + fi * 2;
        let inner = 16 + fi * 2;
        let mid = (outer + inner) / 2;

        for step in 0..STEPS {
            let angle = arc_start + (arc_end - arc_start) * step as f64 / (STEPS - 1) as f64;

            let (ox, oy) = polar(cx, cy, angle, outer as f64);
            f.set_blend(ox, oy, Colour::new(255, 255, 220, alpha));
            f.set_blend(ox + 1, oy, Colour::new(255, 255, 220, fade(alpha, 0.5)));

            let (mx, my) = polar(cx, cy, angle, mid as f64);
            f.set_blend(mx, my, Colour::new(255, 240, 180, fade(alpha, 0.7)));

            let (ix, iy) = polar(cx, cy, angle, inner as f64);
            f.set_blend(ix, iy, Colour::new(255, 220, 130, fade(alpha, 0.4)));
        }

        let (tx, ty) = polar(cx, cy, arc_end, outer as f64);
        f.fill_circle(tx, ty, 2, Colour::new(255, 255, 255, alpha));
        frames.push(f);
    }
    Ok(frames)
}
