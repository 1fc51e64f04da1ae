use macroquad::prelude::Color;

// Playfield constants. Positions are pixel coordinates snapped to the
// BLOCK_SIZE grid.
pub const SCREEN_WIDTH: i32 = 800;
pub const SCREEN_HEIGHT: i32 = 600;
pub const BLOCK_SIZE: i32 = 20;
pub const GRID_COLS: i32 = SCREEN_WIDTH / BLOCK_SIZE;
pub const GRID_ROWS: i32 = SCREEN_HEIGHT / BLOCK_SIZE;

// Ticks per second at the start of a session, and how much each food adds.
pub const INITIAL_SPEED: f32 = 10.0;
pub const SPEED_INCREMENT: f32 = 0.5;

// Palette
pub const BACKGROUND: Color = Color::new(0.196, 0.6, 0.835, 1.0);
pub const ACCENT: Color = Color::new(1.0, 1.0, 0.4, 1.0);
pub const FOOD_RED: Color = Color::new(0.835, 0.196, 0.314, 1.0);
pub const SNAKE_HEAD: Color = Color::new(0.0, 0.784, 0.0, 1.0);
