//! Drawing target abstraction and palette

/// A fixed-size 2D drawing target
///
/// Implemented over `CanvasRenderingContext2d` in the browser; tests use
/// a recording implementation.
pub trait Surface {
    /// Fill the whole surface
    fn clear(&mut self, color: [f32; 4]);

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: [f32; 4]);

    fn stroke_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: [f32; 4]);
}

/// CSS color string for a linear RGBA color
pub fn css(color: [f32; 4]) -> String {
    let channel = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
    format!(
        "rgba({}, {}, {}, {})",
        channel(color[0]),
        channel(color[1]),
        channel(color[2]),
        color[3].clamp(0.0, 1.0)
    )
}

/// Colors for game elements
pub mod colors {
    pub const BACKGROUND: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
    pub const CELL_BORDER: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
    pub const SNAKE: [f32; 4] = [0.314, 0.98, 0.482, 1.0]; // Neon green
    pub const FOOD: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

    pub const SKY: [f32; 4] = [0.93, 0.95, 1.0, 1.0];
    pub const PLATFORM: [f32; 4] = [0.2, 0.65, 0.3, 1.0];
    pub const PLAYER: [f32; 4] = [0.95, 0.75, 0.2, 1.0];
}
