//! Scalable click menus
//!
//! Buttons and text labels are authored on a fixed 100x100 virtual grid and
//! rescaled onto the screen rectangle each menu fills. See [`gui`] for the
//! menu types, [`transform`] for the geometry and [`render`] for the batched
//! drawing seam.

pub mod config;
pub mod gui;
pub mod input_system;
pub mod render;
pub mod text;
pub mod transform;
