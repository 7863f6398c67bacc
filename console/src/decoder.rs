use super::commands::PlayerInput;

pub struct Decoder;

impl Decoder {
    pub fn decode(&self, input: &str) -> PlayerInput {
        match input.trim() {
            "" => PlayerInput::Empty,
            "quit" | "exit" => PlayerInput::Quit,
            text => PlayerInput::Move(text.to_string()),
        }
    }
}
