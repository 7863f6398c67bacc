//! Line protocol between the engine and a human player at a terminal.

mod connection;
mod decoder;
mod encoder;

pub mod commands;

pub use commands::{ConsoleOutput, PlayerInput};
pub use connection::Console;
pub use decoder::Decoder;
pub use encoder::Encoder;
