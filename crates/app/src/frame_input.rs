//! Keyboard and mouse input collection for one rendered frame.

use macroquad::prelude::{KeyCode, is_key_pressed, mouse_position};

const ACTION_KEYS: [KeyCode; 4] = [KeyCode::R, KeyCode::N, KeyCode::L, KeyCode::H];

#[derive(Default)]
pub struct FrameInput {
    pub keys_pressed: Vec<KeyCode>,
    pub mouse: (f32, f32),
    pub quit: bool,
}

pub fn capture_frame_input() -> FrameInput {
    let keys_pressed = ACTION_KEYS.into_iter().filter(|&key| is_key_pressed(key)).collect();
    FrameInput { keys_pressed, mouse: mouse_position(), quit: is_key_pressed(KeyCode::Escape) }
}
