use std::collections::VecDeque;

use macroquad::prelude::*;

use crate::config::*;

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    fn is_opposite(self, other: Direction) -> bool {
        matches!(
            (self, other),
            (Direction::Up, Direction::Down)
                | (Direction::Down, Direction::Up)
                | (Direction::Left, Direction::Right)
                | (Direction::Right, Direction::Left)
        )
    }
}

/// One play-through. The body is a sliding window of the most recently
/// visited cells: new head pushed to the back, oldest cell dropped from the
/// front once the window exceeds the target length. Until the first accepted
/// direction the snake idles in place.
pub struct SnakeGame {
    head: Cell,
    body: VecDeque<Cell>,
    length: usize,
    direction: Option<Direction>,
    next_direction: Option<Direction>,
    food: Cell,
    speed: f32,
    paused: bool,
    alive: bool,
    last_step: f64,
}

impl SnakeGame {
    pub fn new() -> Self {
        let head = Cell {
            x: SCREEN_WIDTH / 2,
            y: SCREEN_HEIGHT / 2,
        };
        let food = Self::spawn_food(&[head]);
        Self {
            head,
            body: VecDeque::new(),
            length: 1,
            direction: None,
            next_direction: None,
            food,
            speed: INITIAL_SPEED,
            paused: false,
            alive: true,
            last_step: 0.0,
        }
    }

    fn spawn_food(occupied: &[Cell]) -> Cell {
        loop {
            let cell = Cell {
                x: macroquad::rand::gen_range(0, GRID_COLS) * BLOCK_SIZE,
                y: macroquad::rand::gen_range(0, GRID_ROWS) * BLOCK_SIZE,
            };
            if !occupied.contains(&cell) {
                return cell;
            }
        }
    }

    pub fn handle_input(&mut self) {
        if is_key_pressed(KeyCode::P) {
            self.toggle_pause();
        }
        if self.paused {
            return;
        }
        if is_key_pressed(KeyCode::Left) {
            self.set_direction(Direction::Left);
        } else if is_key_pressed(KeyCode::Right) {
            self.set_direction(Direction::Right);
        } else if is_key_pressed(KeyCode::Up) {
            self.set_direction(Direction::Up);
        } else if is_key_pressed(KeyCode::Down) {
            self.set_direction(Direction::Down);
        }
    }

    /// Records a direction intent for the next tick. Rejected if it would
    /// reverse the direction currently in motion; a later intent in the same
    /// tick overrides an earlier one.
    pub fn set_direction(&mut self, dir: Direction) {
        if let Some(current) = self.direction {
            if current.is_opposite(dir) {
                return;
            }
        }
        self.next_direction = Some(dir);
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    /// Runs one tick when the interval for the current speed has elapsed.
    /// The timestamp comes from the caller so ticks can be driven without a
    /// wall clock.
    pub fn update(&mut self, now: f64) {
        if now - self.last_step < 1.0 / self.speed as f64 {
            return;
        }
        self.last_step = now;
        self.step();
    }

    pub fn step(&mut self) {
        if !self.alive || self.paused {
            return;
        }

        if let Some(dir) = self.next_direction {
            self.direction = Some(dir);
        }

        let (dx, dy) = match self.direction {
            Some(dir) => dir.delta(),
            None => (0, 0),
        };
        let new_head = Cell {
            x: self.head.x + dx * BLOCK_SIZE,
            y: self.head.y + dy * BLOCK_SIZE,
        };

        if new_head.x < 0
            || new_head.x >= SCREEN_WIDTH
            || new_head.y < 0
            || new_head.y >= SCREEN_HEIGHT
        {
            self.alive = false;
            return;
        }

        // Self test runs against the body as it stood before this move,
        // minus the cell appended last tick (the spot the head is leaving).
        let neck = self.body.len().saturating_sub(1);
        if self.body.iter().take(neck).any(|c| *c == new_head) {
            self.alive = false;
            return;
        }

        self.head = new_head;
        self.body.push_back(new_head);
        if self.body.len() > self.length {
            self.body.pop_front();
        }

        if new_head == self.food {
            self.food = Self::spawn_food(self.body.make_contiguous());
            self.length += 1;
            self.speed += SPEED_INCREMENT;
        }
    }

    pub fn score(&self) -> u32 {
        (self.length - 1) as u32
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn draw(&self, high_score: u32) {
        self.draw_food();
        self.draw_snake();

        draw_text(&format!("Score: {}", self.score()), 10.0, 35.0, 35.0, ACCENT);
        draw_text(&format!("High Score: {}", high_score), 10.0, 70.0, 35.0, ACCENT);

        if self.paused {
            let text = "PAUSED - Press P to continue";
            let dims = measure_text(text, None, 25, 1.0);
            draw_text(
                text,
                (SCREEN_WIDTH as f32 - dims.width) * 0.5,
                SCREEN_HEIGHT as f32 * 0.5,
                25.0,
                ACCENT,
            );
        }
    }

    fn draw_snake(&self) {
        let len = self.body.len();
        for (i, cell) in self.body.iter().enumerate() {
            let color = if i + 1 == len {
                SNAKE_HEAD
            } else {
                // tail-first index, so segments brighten toward the head
                let intensity = (255 - (len - i) as i32 * 10).max(100);
                Color::new(0.0, intensity as f32 / 255.0, 0.0, 1.0)
            };
            draw_rectangle(
                cell.x as f32,
                cell.y as f32,
                BLOCK_SIZE as f32,
                BLOCK_SIZE as f32,
                color,
            );
            draw_rectangle_lines(
                cell.x as f32,
                cell.y as f32,
                BLOCK_SIZE as f32,
                BLOCK_SIZE as f32,
                1.0,
                BLACK,
            );
        }
    }

    fn draw_food(&self) {
        // edge pulses between BLOCK_SIZE and BLOCK_SIZE + 2 on a one-second cycle
        let phase = (get_time() % 1.0 - 0.5).abs() as f32;
        let size = BLOCK_SIZE as f32 + 2.0 * phase / 0.5;
        draw_rectangle(self.food.x as f32, self.food.y as f32, size, size, FOOD_RED);
        draw_rectangle_lines(self.food.x as f32, self.food.y as f32, size, size, 1.0, BLACK);
    }
}
