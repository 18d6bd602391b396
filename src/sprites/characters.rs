//! Hero and enemy sprites, static poses and walk/attack cycles.
//!
//! All characters are 32x32 frames standing on an isometric shadow.

use super::palette::*;
use crate::canvas::Canvas;
use crate::error::Result;
use crate::rng::NoiseRng;
use crate::types::Colour;

const SIZE: u32 = 32;
const T: Colour = Colour::TRANSPARENT;
const HERO_EYE: Colour = Colour::rgb(40, 40, 60);

fn hero_base() -> Result<Canvas> {
    let mut g = Canvas::new(SIZE, SIZE)?;
    g.fill_diamond(16, 28, 8, 3, shadow(60));
    // armour
    g.fill_diamond(16, 20, 7, 8, HERO_BLUE);
    g.fill_diamond(16, 19, 6, 6, HERO_BLUE_LIGHT);
    g.fill_rect(14, 15, 18, 15, HERO_BLUE_DARK);
    g.fill_rect(13, 18, 19, 18, HERO_BLUE_DARK);
    // head and helmet
    g.fill_circle(16, 10, 4, HERO_SKIN);
    g.fill_rect(12, 6, 20, 8, HERO_GOLD);
    g.fill_rect(13, 6, 19, 7, HERO_GOLD_DARK);
    g.set(16, 5, HERO_GOLD);
    g.set(16, 4, HERO_GOLD);
    g.set(14, 10, HERO_EYE);
    g.set(18, 10, HERO_EYE);
    // sword
    for i in 0..8 {
        g.set(24, 12 + i, HERO_SWORD);
        g.set(25, 12 + i, if i < 5 { HERO_SWORD_EDGE } else { HERO_SWORD });
    }
    g.fill_rect(23, 19, 26, 19, HERO_GOLD);
    g.set(24, 20, WALL_BROWN);
    g.set(24, 21, WALL_BROWN);
    // shield
    g.fill_rect(7, 15, 10, 21, HERO_BLUE_DARK);
    g.fill_rect(8, 16, 9, 20, HERO_BLUE);
    g.set(8, 18, HERO_GOLD);
    g.set(9, 18, HERO_GOLD);
    Ok(g)
}

pub fn hero(_rng: &mut NoiseRng) -> Result<Canvas> {
    hero_base()
}

/// Breathing idle: shadow shifts on frame 2, cloak edge flutters, chest
/// shimmers on odd frames.
pub fn hero_idle(_rng: &mut NoiseRng) -> Result<Vec<Canvas>> {
    let base = hero_base()?;
    let offsets = [0, 0, -1, 0];
    let cloak_alphas = [200, 180, 160, 180];

    let mut frames = Vec::with_capacity(4);
    for fi in 0..4 {
        let mut f = base.clone();
        if offsets[fi] != 0 {
            f.fill_diamond(16, 28 + offsets[fi], 8, 3, shadow(60));
        }
        let cloak = HERO_BLUE_DARK.with_alpha(cloak_alphas[fi]);
        f.set(7, 22, cloak);
        f.set(21, 22, cloak);
        if fi % 2 == 1 {
            f.set(16, 17, HERO_BLUE_LIGHT.shift(15, 15, 15));
        }
        frames.push(f);
    }
    Ok(frames)
}

pub fn hero_walk(_rng: &mut NoiseRng) -> Result<Vec<Canvas>> {
    let legs = [(0, 0), (1, -1), (0, 0), (-1, 1)];
    let bob = [0, -1, 0, -1];

    let mut frames = Vec::with_capacity(4);
    for fi in 0..4 {
        let mut f = hero_base()?;
        let (left, right) = legs[fi];
        f.set(14, 26 + left, HERO_BLUE_DARK);
        f.set(14, 27 + left, HERO_BLUE_DARK);
        f.set(18, 26 + right, HERO_BLUE_DARK);
        f.set(18, 27 + right, HERO_BLUE_DARK);
        if bob[fi] != 0 {
            f.set(16, 4, T);
            f.set(16, 4 + bob[fi], HERO_GOLD);
        }
        // arm swing lifts the sword tip
        if fi % 2 == 1 {
            f.set(24, 12, T);
            f.set(25, 12, T);
            f.set(24, 11, HERO_SWORD);
            f.set(25, 11, HERO_SWORD_EDGE);
        }
        frames.push(f);
    }
    Ok(frames)
}

/// Three-frame swing: wind-up, diagonal mid-swing, low follow-through.
pub fn hero_attack(_rng: &mut NoiseRng) -> Result<Vec<Canvas>> {
    let mut frames = Vec::with_capacity(3);
    for fi in 0..3 {
        let mut f = hero_base()?;
        for i in 0..8 {
            f.set(24, 12 + i, T);
            f.set(25, 12 + i, T);
        }
        f.fill_rect(23, 19, 26, 19, T);
        f.set(24, 20, T);
        f.set(24, 21, T);

        match fi {
            0 => {
                for i in 0..6 {
                    f.set(22 + i, 6, HERO_SWORD);
                    f.set(22 + i, 7, if i < 4 { HERO_SWORD_EDGE } else { HERO_SWORD });
                }
                f.set(21, 7, HERO_GOLD);
            }
            1 => {
                for i in 0..7 {
                    f.set(20 + i, 10 + i, HERO_SWORD_EDGE);
                    f.set(21 + i, 10 + i, HERO_SWORD);
                }
                f.set(20, 11, HERO_GOLD);
            }
            _ => {
                for i in 0..6 {
                    f.set(22 + i, 22, HERO_SWORD);
                    f.set(22 + i, 21, if i < 4 { HERO_SWORD_EDGE } else { HERO_SWORD });
                }
                f.set(21, 22, HERO_GOLD);
            }
        }
        frames.push(f);
    }
    Ok(frames)
}

fn goblin_base() -> Result<Canvas> {
    let mut g = Canvas::new(SIZE, SIZE)?;
    g.fill_diamond(16, 28, 7, 3, shadow(60));
    g.fill_diamond(16, 21, 6, 7, ENEMY_RED);
    g.fill_diamond(16, 20, 5, 5, ENEMY_RED_LIGHT);
    g.fill_rect(12, 24, 20, 26, ENEMY_RED_DARK);
    g.fill_circle(16, 12, 4, ENEMY_RED);
    g.fill_circle(16, 11, 3, ENEMY_RED_LIGHT);
    for (x, y) in [(12, 8), (11, 7), (20, 8), (21, 7)] {
        g.set(x, y, ENEMY_HORN);
    }
    g.set(14, 11, ENEMY_EYE);
    g.set(18, 11, ENEMY_EYE);
    g.set(15, 12, Colour::rgb(200, 180, 40));
    g.set(17, 12, Colour::rgb(200, 180, 40));
    for x in 15..=17 {
        g.set(x, 14, ENEMY_RED_DARK);
    }
    // claws
    for (x, y) in [(8, 19), (9, 18), (23, 18), (24, 19)] {
        g.set(x, y, ENEMY_RED_DARK);
    }
    Ok(g)
}

pub fn enemy(_rng: &mut NoiseRng) -> Result<Canvas> {
    goblin_base()
}

pub fn goblin_walk(_rng: &mut NoiseRng) -> Result<Vec<Canvas>> {
    let bob = [0, -1, 0, -1];
    let arm_swing = [(8, 24), (7, 25), (8, 24), (9, 23)];

    let mut frames = Vec::with_capacity(4);
    for fi in 0..4 {
        let mut f = goblin_base()?;
        let by = bob[fi];
        if fi % 2 == 0 {
            f.set(14, 27, ENEMY_RED_DARK);
            f.set(18, 26, ENEMY_RED_DARK);
        } else {
            f.set(14, 26, ENEMY_RED_DARK);
            f.set(18, 27, ENEMY_RED_DARK);
        }
        let (lx, rx) = arm_swing[fi];
        f.set(lx, 19 + by, ENEMY_RED_DARK);
        f.set(rx, 18 + by, ENEMY_RED_DARK);
        if by != 0 {
            f.fill_diamond(16, 28 + by, 7, 3, shadow(60));
        }
        frames.push(f);
    }
    Ok(frames)
}

const ORC_ARMOUR: Colour = Colour::rgb(80, 80, 70);
const ORC_ARMOUR_LIGHT: Colour = Colour::rgb(100, 95, 80);
const ORC_CLUB: Colour = Colour::rgb(100, 70, 40);
const ORC_CLUB_HEAD: Colour = Colour::rgb(120, 85, 50);

fn orc_base(face: Colour) -> Result<Canvas> {
    let mut g = Canvas::new(SIZE, SIZE)?;
    g.fill_diamond(16, 29, 9, 3, shadow(60));
    g.fill_diamond(16, 21, 8, 8, ORC_GREEN);
    g.fill_diamond(16, 20, 7, 6, ORC_GREEN_LIGHT);
    g.fill_rect(12, 16, 20, 20, ORC_ARMOUR);
    g.fill_rect(13, 17, 19, 19, ORC_ARMOUR_LIGHT);
    g.fill_rect(10, 25, 22, 27, ORC_GREEN_DARK);
    g.fill_circle(16, 10, 5, ORC_GREEN);
    g.fill_circle(16, 10, 4, face);
    // tusks
    let tusk = Colour::rgb(220, 210, 180);
    for (x, y) in [(13, 13), (13, 14), (19, 13), (19, 14)] {
        g.set(x, y, tusk);
    }
    g.set(14, 9, Colour::rgb(200, 50, 30));
    g.set(18, 9, Colour::rgb(200, 50, 30));
    g.fill_rect(13, 7, 15, 8, Colour::rgb(50, 90, 40));
    g.fill_rect(17, 7, 19, 8, Colour::rgb(50, 90, 40));
    // club
    g.fill_rect(24, 12, 26, 22, ORC_CLUB);
    g.fill_rect(23, 10, 27, 12, ORC_CLUB_HEAD);
    let spike = Colour::rgb(150, 150, 150);
    g.set(23, 9, spike);
    g.set(27, 9, spike);
    g.set(28, 11, spike);
    Ok(g)
}

pub fn enemy_orc(_rng: &mut NoiseRng) -> Result<Canvas> {
    orc_base(ORC_SKIN)
}

/// Heavy stomp with alternating legs and a club that lifts and drops.
pub fn orc_walk(_rng: &mut NoiseRng) -> Result<Vec<Canvas>> {
    let bob = [0, -1, 0, 1];

    let mut frames = Vec::with_capacity(4);
    for fi in 0..4 {
        let mut f = orc_base(ORC_GREEN_LIGHT)?;
        if fi % 2 == 0 {
            f.fill_rect(12, 27, 14, 28, ORC_GREEN_DARK);
            f.fill_rect(18, 26, 20, 27, ORC_GREEN_DARK);
        } else {
            f.fill_rect(12, 26, 14, 27, ORC_GREEN_DARK);
            f.fill_rect(18, 27, 20, 28, ORC_GREEN_DARK);
        }
        match fi {
            1 => {
                f.set(24, 11, T);
                f.fill_rect(23, 9, 27, 11, ORC_CLUB_HEAD);
            }
            3 => f.fill_rect(24, 13, 26, 23, ORC_CLUB),
            _ => {}
        }
        if bob[fi] != 0 {
            f.fill_diamond(16, 29 + bob[fi], 9, 3, shadow(60));
        }
        frames.push(f);
    }
    Ok(frames)
}

fn swift_base() -> Result<Canvas> {
    let mut g = Canvas::new(SIZE, SIZE)?;
    g.fill_diamond(16, 28, 6, 2, shadow(50));
    g.fill_diamond(16, 21, 5, 7, SWIFT_PURPLE);
    g.fill_diamond(16, 20, 4, 5, SWIFT_PURPLE_LIGHT);
    // trailing scarf
    for (i, alpha) in [200u8, 180, 140].into_iter().enumerate() {
        let i = i as i32;
        g.set(10 - i, 18 + i, SWIFT_PURPLE_DARK.with_alpha(alpha));
        g.set(22 + i, 18 + i, SWIFT_PURPLE_DARK.with_alpha(alpha));
    }
    // hood
    g.fill_circle(16, 11, 3, SWIFT_PURPLE);
    g.fill_circle(16, 11, 2, SWIFT_PURPLE_LIGHT);
    let peak = Colour::rgb(90, 45, 130);
    g.set(16, 7, peak);
    g.set(15, 8, peak);
    g.set(17, 8, peak);
    g.set(14, 11, Colour::rgb(200, 100, 255));
    g.set(18, 11, Colour::rgb(200, 100, 255));
    // daggers
    g.set(22, 15, Colour::rgb(180, 180, 200));
    g.set(23, 14, Colour::rgb(200, 200, 220));
    g.set(10, 15, Colour::rgb(180, 180, 200));
    g.set(9, 14, Colour::rgb(200, 200, 220));
    Ok(g)
}

pub fn enemy_swift(_rng: &mut NoiseRng) -> Result<Canvas> {
    let mut g = swift_base()?;
    // speed lines
    for (x, y, a) in [(6, 15, 80), (5, 16, 60), (4, 17, 40), (6, 20, 80), (5, 21, 60)] {
        g.set(x, y, SWIFT_PURPLE_LIGHT.with_alpha(a));
    }
    Ok(g)
}

/// Lean-forward sprint with fading speed trails.
pub fn swift_walk(_rng: &mut NoiseRng) -> Result<Vec<Canvas>> {
    let lean = [0, 1, 0, -1];
    let trail_alpha = [80, 50, 40, 60];
    let scarf_alpha = [200, 160, 140, 180];

    let mut frames = Vec::with_capacity(4);
    for fi in 0..4 {
        let mut f = swift_base()?;
        let lx = lean[fi];
        for i in 0..3 {
            let a = (trail_alpha[fi] - i * 15).max(0) as u8;
            let trail = SWIFT_PURPLE_LIGHT.with_alpha(a);
            f.set(5 - i + lx, 15 + i, trail);
            f.set(5 - i + lx, 20 + i, trail);
        }
        if fi % 2 == 0 {
            f.set(14, 26, SWIFT_PURPLE_DARK);
            f.set(18, 27, SWIFT_PURPLE_DARK);
        } else {
            f.set(14, 27, SWIFT_PURPLE_DARK);
            f.set(18, 26, SWIFT_PURPLE_DARK);
        }
        let scarf = SWIFT_PURPLE_DARK.with_alpha(scarf_alpha[fi]);
        f.set(8 + lx, 20, scarf);
        f.set(24 - lx, 20, scarf);
        frames.push(f);
    }
    Ok(frames)
}

fn demon_base(face: Colour) -> Result<Canvas> {
    let mut g = Canvas::new(SIZE, SIZE)?;
    g.fill_diamond(16, 29, 10, 3, shadow(80));
    g.fill_diamond(16, 20, 9, 9, DEMON_RED);
    g.fill_diamond(16, 19, 8, 7, DEMON_RED_LIGHT);
    g.fill_rect(10, 16, 22, 22, Colour::rgb(80, 15, 15));
    g.fill_rect(11, 17, 21, 21, Colour::rgb(100, 20, 20));
    g.fill_rect(9, 25, 23, 28, DEMON_RED_DARK);
    g.fill_circle(16, 9, 5, DEMON_RED);
    g.fill_circle(16, 9, 4, face);

    let horn = Colour::rgb(180, 160, 80);
    let horn_tip = Colour::rgb(200, 180, 90);
    for (x, y, c) in [(10, 7, horn), (9, 5, horn), (8, 4, horn_tip), (8, 3, horn_tip)] {
        g.set(x, y, c);
        g.set(32 - x, y, c);
    }

    g.set(14, 8, Colour::rgb(255, 100, 0));
    g.set(13, 8, Colour::rgb(255, 180, 0));
    g.set(18, 8, Colour::rgb(255, 100, 0));
    g.set(19, 8, Colour::rgb(255, 180, 0));

    g.set(15, 12, Colour::rgb(255, 150, 0));
    g.set(16, 12, Colour::rgb(255, 200, 0));
    g.set(17, 12, Colour::rgb(255, 150, 0));
    g.set(16, 13, Colour::new(255, 100, 0, 200));

    // vestigial wings
    for i in 0..4 {
        let c = Colour::new(100, 20, 20, (200 - i * 40) as u8);
        g.set(5 - i, 12 + i, c);
        g.set(27 + i, 12 + i, c);
    }
    for i in 0..3 {
        let c = Colour::new(80, 15, 15, (180 - i * 40) as u8);
        g.set(6 - i, 11 + i, c);
        g.set(26 + i, 11 + i, c);
    }

    // tail
    g.set(16, 29, Colour::new(100, 20, 20, 200));
    g.set(17, 30, Colour::new(100, 20, 20, 180));
    g.set(18, 30, Colour::new(100, 20, 20, 150));
    g.set(19, 31, Colour::new(120, 30, 30, 120));
    Ok(g)
}

pub fn enemy_demon(_rng: &mut NoiseRng) -> Result<Canvas> {
    demon_base(DEMON_FACE)
}

/// Hovering glide: wings spread, mouth flame flickers, tail sways.
pub fn demon_walk(_rng: &mut NoiseRng) -> Result<Vec<Canvas>> {
    let hover = [0, -1, -1, 0];
    let wing_spread = [0, 1, 2, 1];
    let flames = [
        Colour::rgb(255, 150, 0),
        Colour::rgb(255, 200, 0),
        Colour::rgb(255, 120, 0),
        Colour::rgb(255, 180, 0),
    ];
    let tail_x = [16, 17, 18, 17];

    let mut frames = Vec::with_capacity(4);
    for fi in 0..4 {
        let mut f = demon_base(DEMON_RED_LIGHT)?;
        if hover[fi] != 0 {
            f.fill_diamond(16, 29 + hover[fi], 10, 3, shadow(80));
        }
        let ws = wing_spread[fi];
        for i in 0..(4 + ws) {
            let c = Colour::new(100, 20, 20, (200 - i * 35).max(0) as u8);
            f.set(5 - i - ws, 12 + i, c);
            f.set(27 + i + ws, 12 + i, c);
        }
        f.set(16, 12, flames[fi]);
        f.set(tail_x[fi], 29, Colour::new(100, 20, 20, 200));
        frames.push(f);
    }
    Ok(frames)
}
