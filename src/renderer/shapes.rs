//! Per-game frame painting
//!
//! Pure functions of game state; nothing here mutates the simulation.

use glam::IVec2;

use super::surface::{Surface, colors};
use crate::sim::{JumpState, Rect, SnakeState};

/// Filled grid cell with a thin border for grid clarity
fn cell(surface: &mut impl Surface, pos: IVec2, size: i32, color: [f32; 4]) {
    let (x, y, s) = (pos.x as f32, pos.y as f32, size as f32);
    surface.fill_rect(x, y, s, s, color);
    surface.stroke_rect(x, y, s, s, colors::CELL_BORDER);
}

fn rect(surface: &mut impl Surface, r: &Rect, color: [f32; 4]) {
    surface.fill_rect(r.pos.x, r.pos.y, r.size.x, r.size.y, color);
}

/// Background, food, then the snake on top
pub fn draw_snake(surface: &mut impl Surface, state: &SnakeState) {
    let grid = state.config.grid_size;
    surface.clear(colors::BACKGROUND);

    if let Some(food) = state.food {
        cell(surface, food, grid, colors::FOOD);
    }
    for segment in &state.segments {
        cell(surface, *segment, grid, colors::SNAKE);
    }
}

/// Background, every platform, then the player
pub fn draw_jump(surface: &mut impl Surface, state: &JumpState) {
    surface.clear(colors::SKY);

    for platform in &state.platforms {
        rect(surface, &platform.rect, colors::PLATFORM);
    }
    rect(surface, &state.player.rect, colors::PLAYER);
}
