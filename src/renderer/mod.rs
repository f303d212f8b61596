//! Rendering module
//!
//! Games paint onto a `Surface`; the browser build backs it with Canvas 2D.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod shapes;
pub mod surface;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
pub use shapes::{draw_jump, draw_snake};
pub use surface::{Surface, colors, css};
