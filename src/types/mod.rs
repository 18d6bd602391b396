//! Core value types for spritegen.
//!
//! - `Colour` - RGBA colour values with clamped arithmetic and blending
//! - `Region` - rectangle, diamond and disc cell sets used by fills

mod colour;
mod region;

pub use colour::Colour;
pub(crate) use colour::clamp_channel;
pub use region::{diamond_span, Region};
