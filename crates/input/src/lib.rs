//! Terminal input module.
//!
//! Maps `crossterm` key events into [`glassfall_types::GameAction`] and
//! provides a DAS/ARR handler for held movement keys, including terminals
//! that never emit key-release events.

pub mod handler;
pub mod map;

pub use glassfall_types as types;

pub use handler::InputHandler;
pub use map::{handle_key_event, should_quit};
