//! Terminal rendering module.
//!
//! A small, game-oriented rendering layer: the game view draws a snapshot
//! into a plain framebuffer, and the renderer flushes frames to the terminal
//! with diff-based redraws.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Render into an inspectable framebuffer rather than straight to stdout
//! - Allow precise control over aspect ratio (e.g. 2 chars wide per cell)

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use glassfall_core as core;
pub use glassfall_types as types;

pub use fb::{Frame, Glyph, Rgb, Style};
pub use game_view::{palette_color, AnchorY, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
