//! Simulation core - pure, deterministic, and testable
//!
//! This crate contains the complete falling-block simulation: shape catalog,
//! figure lifecycle, glass state, line clearing, scoring, and the game
//! controller. It has **zero dependencies** on UI or I/O, making it:
//!
//! - **Deterministic**: the controller takes an explicit seed, so the same
//!   seed and action sequence replay identical games
//! - **Testable**: every legality rule is a boolean-returning function
//! - **Portable**: runs in any environment (terminal, headless)
//!
//! # Module Structure
//!
//! - [`shapes`]: the seven figure geometries as bounding-box bitmask grids
//! - [`cell`]: the occupancy unit and the position-set overlap primitive
//! - [`figure`]: the falling figure with its local grid and move/rotate rules
//! - [`glass`]: the 10x20 field of locked cells and row clearing
//! - [`game`]: the controller tying gravity, input, locking, and scoring
//!   together
//! - [`rng`]: seeded LCG behind spawn randomness
//! - [`snapshot`]: the read-only per-frame view for the render sink
//!
//! # Game Rules
//!
//! - Figures spawn at (4, 0) with a uniformly random shape, palette color,
//!   and pre-applied rotation; the preview figure is promoted verbatim
//! - Rotation is always 90° clockwise and is rejected atomically if the
//!   rotated grid would leave the glass or touch a locked cell
//! - A figure that cannot descend locks in place: +10 points, plus
//!   `n² × 100` for clearing `n` rows in that lock
//! - A spawned figure that does not fit ends the game; game over is terminal
//!
//! # Example
//!
//! ```
//! use glassfall_core::Game;
//! use glassfall_types::GameAction;
//!
//! let mut game = Game::new(12345);
//! game.apply_action(GameAction::MoveLeft);
//! game.apply_action(GameAction::HardDrop);
//! assert!(game.score() > 0); // locking awards points
//! ```

pub mod cell;
pub mod figure;
pub mod game;
pub mod glass;
pub mod rng;
pub mod shapes;
pub mod snapshot;

pub use glassfall_types as types;

// Re-export commonly used types for convenience
pub use cell::{positions_overlap, Cell};
pub use figure::{rotated_cw, CellBuf, Figure};
pub use game::Game;
pub use glass::Glass;
pub use rng::SimpleRng;
pub use shapes::{shape_def, ShapeDef, FIGURE_CELLS};
pub use snapshot::GameSnapshot;
