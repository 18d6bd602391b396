//! Shared colour table for the sprite catalog.

use crate::types::Colour;

pub const HERO_BLUE: Colour = Colour::rgb(50, 90, 200);
pub const HERO_BLUE_LIGHT: Colour = Colour::rgb(80, 120, 230);
pub const HERO_BLUE_DARK: Colour = Colour::rgb(30, 60, 150);
pub const HERO_GOLD: Colour = Colour::rgb(230, 200, 50);
pub const HERO_GOLD_DARK: Colour = Colour::rgb(180, 150, 30);
pub const HERO_SKIN: Colour = Colour::rgb(220, 185, 150);
pub const HERO_SWORD: Colour = Colour::rgb(200, 200, 210);
pub const HERO_SWORD_EDGE: Colour = Colour::rgb(240, 240, 250);

pub const ENEMY_RED: Colour = Colour::rgb(200, 40, 40);
pub const ENEMY_RED_LIGHT: Colour = Colour::rgb(230, 70, 60);
pub const ENEMY_RED_DARK: Colour = Colour::rgb(140, 20, 20);
pub const ENEMY_HORN: Colour = Colour::rgb(180, 160, 80);
pub const ENEMY_EYE: Colour = Colour::rgb(255, 220, 50);

pub const ORC_GREEN: Colour = Colour::rgb(60, 110, 50);
pub const ORC_GREEN_LIGHT: Colour = Colour::rgb(80, 140, 65);
pub const ORC_GREEN_DARK: Colour = Colour::rgb(40, 75, 35);
pub const ORC_SKIN: Colour = Colour::rgb(75, 130, 60);

pub const SWIFT_PURPLE: Colour = Colour::rgb(100, 50, 140);
pub const SWIFT_PURPLE_LIGHT: Colour = Colour::rgb(130, 70, 170);
pub const SWIFT_PURPLE_DARK: Colour = Colour::rgb(80, 40, 120);

pub const DEMON_RED: Colour = Colour::rgb(120, 25, 25);
pub const DEMON_RED_LIGHT: Colour = Colour::rgb(160, 35, 35);
pub const DEMON_RED_DARK: Colour = Colour::rgb(90, 15, 15);
pub const DEMON_FACE: Colour = Colour::rgb(150, 30, 30);

pub const TOWER_STONE: Colour = Colour::rgb(100, 110, 130);
pub const TOWER_STONE_LIGHT: Colour = Colour::rgb(130, 140, 160);
pub const TOWER_STONE_DARK: Colour = Colour::rgb(70, 75, 90);
pub const TOWER_ROOF: Colour = Colour::rgb(60, 80, 160);
pub const TOWER_ROOF_LIGHT: Colour = Colour::rgb(80, 100, 190);

pub const ARCHER_GREEN: Colour = Colour::rgb(50, 140, 60);
pub const ARCHER_GREEN_LIGHT: Colour = Colour::rgb(70, 170, 80);
pub const ARCHER_GREEN_DARK: Colour = Colour::rgb(30, 100, 40);
pub const ARCHER_BOW: Colour = Colour::rgb(140, 90, 40);
pub const ARCHER_STRING: Colour = Colour::rgb(200, 200, 180);

pub const WALL_BROWN: Colour = Colour::rgb(140, 115, 90);
pub const WALL_BROWN_LIGHT: Colour = Colour::rgb(165, 140, 110);
pub const WALL_BROWN_DARK: Colour = Colour::rgb(100, 80, 60);
pub const WALL_MORTAR: Colour = Colour::rgb(170, 160, 140);
pub const WALL_TOP: Colour = Colour::rgb(180, 155, 125);

pub const ROCK_GRAY: Colour = Colour::rgb(130, 130, 135);
pub const ROCK_GRAY_LIGHT: Colour = Colour::rgb(160, 160, 165);
pub const ROCK_GRAY_DARK: Colour = Colour::rgb(90, 90, 95);
pub const ROCK_HIGHLIGHT: Colour = Colour::rgb(180, 180, 185);
pub const MOSS: Colour = Colour::rgb(60, 100, 50);

pub const ARROW_GOLD: Colour = Colour::rgb(255, 200, 50);
pub const ARROW_BRIGHT: Colour = Colour::rgb(255, 240, 150);
pub const ARROW_SHAFT: Colour = Colour::rgb(160, 120, 60);

/// Ground shadow under characters and props.
pub const fn shadow(alpha: u8) -> Colour {
    Colour::new(0, 0, 0, alpha)
}
