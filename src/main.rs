use macroquad::prelude::*;

mod config;
mod game;
mod save;

use config::{ACCENT, BACKGROUND, FOOD_RED, SCREEN_HEIGHT, SCREEN_WIDTH};
use game::SnakeGame;

const MENU_OPTIONS: [&str; 3] = ["Play Game", "High Score", "Quit"];

struct MenuState {
    selected: usize,
}

struct GameOverState {
    score: u32,
    new_high_score: bool,
}

enum Screen {
    Menu(MenuState),
    Playing(SnakeGame),
    GameOver(GameOverState),
    HighScore,
}

fn window_conf() -> Conf {
    Conf {
        window_title: "Snake".to_owned(),
        window_width: SCREEN_WIDTH,
        window_height: SCREEN_HEIGHT,
        window_resizable: false,
        ..Default::default()
    }
}

fn draw_text_centered(text: &str, y: f32, size: u16, color: Color) {
    let dims = measure_text(text, None, size, 1.0);
    draw_text(
        text,
        (SCREEN_WIDTH as f32 - dims.width) * 0.5,
        y,
        size as f32,
        color,
    );
}

#[macroquad::main(window_conf)]
async fn main() {
    // Read once at startup; written again only when a session beats it.
    let mut high_score = save::load_high_score();
    let mut screen = Screen::Menu(MenuState { selected: 0 });

    loop {
        if is_key_pressed(KeyCode::Escape) {
            break;
        }

        clear_background(BACKGROUND);
        let mut next_screen = None;

        match &mut screen {
            Screen::Menu(menu) => {
                draw_text_centered("SNAKE GAME", 100.0, 50, ACCENT);
                for (i, option) in MENU_OPTIONS.iter().enumerate() {
                    let color = if i == menu.selected { ACCENT } else { WHITE };
                    draw_text_centered(option, 250.0 + i as f32 * 50.0, 25, color);
                }

                if is_key_pressed(KeyCode::Up) {
                    menu.selected = if menu.selected == 0 {
                        MENU_OPTIONS.len() - 1
                    } else {
                        menu.selected - 1
                    };
                }
                if is_key_pressed(KeyCode::Down) {
                    menu.selected = if menu.selected == MENU_OPTIONS.len() - 1 {
                        0
                    } else {
                        menu.selected + 1
                    };
                }
                if is_key_pressed(KeyCode::Enter) {
                    match menu.selected {
                        0 => next_screen = Some(Screen::Playing(SnakeGame::new())),
                        1 => next_screen = Some(Screen::HighScore),
                        _ => break,
                    }
                }
            }

            Screen::Playing(game) => {
                game.handle_input();
                game.update(get_time());
                game.draw(high_score);

                if !game.is_alive() {
                    let score = game.score();
                    let new_high_score = score > high_score;
                    if new_high_score {
                        high_score = score;
                        save::save_high_score(score);
                    }
                    next_screen = Some(Screen::GameOver(GameOverState {
                        score,
                        new_high_score,
                    }));
                }
            }

            Screen::GameOver(state) => {
                if state.new_high_score {
                    draw_text_centered("NEW HIGH SCORE!", 150.0, 50, ACCENT);
                } else {
                    draw_text_centered("GAME OVER", 150.0, 50, FOOD_RED);
                }
                draw_text_centered(&format!("Score: {}", state.score), 250.0, 35, WHITE);
                draw_text_centered("Press 'R' to Play Again", 350.0, 25, ACCENT);
                draw_text_centered("Press 'M' for Menu", 400.0, 25, ACCENT);
                draw_text_centered("Press 'Q' to Quit", 450.0, 25, ACCENT);

                if is_key_pressed(KeyCode::R) {
                    next_screen = Some(Screen::Playing(SnakeGame::new()));
                } else if is_key_pressed(KeyCode::M) {
                    next_screen = Some(Screen::Menu(MenuState { selected: 0 }));
                } else if is_key_pressed(KeyCode::Q) {
                    break;
                }
            }

            Screen::HighScore => {
                draw_text_centered("HIGH SCORE", 200.0, 50, ACCENT);
                draw_text_centered(&high_score.to_string(), 300.0, 35, WHITE);
                draw_text_centered("Press any key to go back", 400.0, 25, ACCENT);

                if get_last_key_pressed().is_some() {
                    next_screen = Some(Screen::Menu(MenuState { selected: 0 }));
                }
            }
        }

        if let Some(ns) = next_screen {
            screen = ns;
        }

        next_frame().await;
    }
}
