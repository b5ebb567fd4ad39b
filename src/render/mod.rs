//! Canvas 2D rendering module
//!
//! Redraws the whole scene from game state on every animation frame.

pub mod canvas;
pub mod panel;

pub use canvas::Renderer;
