//! Keyboard input collection for one rendered frame.

use macroquad::prelude::{KeyCode, get_char_pressed, is_key_pressed};

const ACTION_KEYS: [KeyCode; 16] = [
    KeyCode::Up,
    KeyCode::Down,
    KeyCode::Left,
    KeyCode::Right,
    KeyCode::W,
    KeyCode::A,
    KeyCode::S,
    KeyCode::D,
    KeyCode::Enter,
    KeyCode::KpEnter,
    KeyCode::Backspace,
    KeyCode::Tab,
    KeyCode::Escape,
    KeyCode::R,
    KeyCode::H,
    KeyCode::L,
];

#[derive(Default)]
pub struct FrameInput {
    pub keys_pressed: Vec<KeyCode>,
    pub typed: Vec<char>,
}

pub fn capture_frame_input() -> FrameInput {
    let keys_pressed = ACTION_KEYS.into_iter().filter(|key| is_key_pressed(*key)).collect();

    let mut typed = Vec::new();
    while let Some(ch) = get_char_pressed() {
        typed.push(ch);
    }

    FrameInput { keys_pressed, typed }
}
