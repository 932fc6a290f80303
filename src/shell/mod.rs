//! Terminal front end: preset choice, coordinate parsing, rendering, and
//! the step-per-Enter loop.
//!
//! Nothing in `core`, `grid` or `sim` depends on this module.

pub mod parse;
pub mod preset;
pub mod render;
pub mod session;

pub use parse::{parse_point, parse_points};
pub use preset::Preset;
pub use render::{glyph, render, ALIVE_GLYPH, DEAD_GLYPH};
pub use session::{Shell, ShellError};
