use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

const SAVE_FILE: &str = "high_score.json";

// Single-field record, always written as a full overwrite.
#[derive(Serialize, Deserialize, Default)]
struct SaveData {
    high_score: u32,
}

pub fn load_high_score() -> u32 {
    read_score(Path::new(SAVE_FILE))
}

pub fn save_high_score(score: u32) {
    write_score(Path::new(SAVE_FILE), score);
}

// A missing, unreadable, or malformed file counts as "no record".
fn read_score(path: &Path) -> u32 {
    if let Ok(text) = fs::read_to_string(path) {
        serde_json::from_str::<SaveData>(&text)
            .unwrap_or_default()
            .high_score
    } else {
        0
    }
}

fn write_score(path: &Path, score: u32) {
    let data = SaveData { high_score: score };
    let _ = fs::write(path, serde_json::to_string_pretty(&data).unwrap_or_default());
}
