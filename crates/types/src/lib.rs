//! Shared types module - constants and pure data types
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are plain data with no external dependencies, so they are usable
//! from the simulation core, the input layer, and the renderer alike.
//!
//! # Glass Dimensions
//!
//! The playfield ("glass") is a fixed grid:
//!
//! - **Width**: 10 columns (indexed 0-9, left to right)
//! - **Height**: 20 rows (indexed 0-19, top to bottom)
//! - **Spawn origin**: (4, 0) for every figure
//!
//! # Timing
//!
//! The game runs on a fixed 16ms frame tick (~60 FPS). Gravity is counted in
//! frames rather than milliseconds: once the counter passes
//! [`GRAVITY_FRAMES`], the figure is forced down one row and the counter
//! resets.
//!
//! # Scoring
//!
//! Locking a figure awards [`LOCK_BONUS`] points. Clearing `n` rows in one
//! lock awards an additional `n * n * ROW_CLEAR_MULTIPLIER` points.

/// Glass width in cells (10 columns)
pub const GLASS_WIDTH: u8 = 10;

/// Glass height in cells (20 rows)
pub const GLASS_HEIGHT: u8 = 20;

/// Spawn origin x for new figures
pub const SPAWN_X: i8 = 4;

/// Spawn origin y for new figures
pub const SPAWN_Y: i8 = 0;

/// Fixed timestep interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Frames the gravity counter must exceed before a forced one-row drop
pub const GRAVITY_FRAMES: u32 = 25;

/// Points awarded for locking a figure into the glass
pub const LOCK_BONUS: u32 = 10;

/// Row-clear bonus multiplier; clearing `n` rows awards `n * n * 100`
pub const ROW_CLEAR_MULTIPLIER: u32 = 100;

/// Number of colors in the figure palette
pub const PALETTE_LEN: u8 = 3;

/// Number of distinct rotation states a figure can spawn with
pub const ROTATION_STATES: u8 = 4;

/// DAS (Delayed Auto Shift) delay in milliseconds
pub const DEFAULT_DAS_MS: u32 = 150;

/// ARR (Auto Repeat Rate) in milliseconds
pub const DEFAULT_ARR_MS: u32 = 50;

/// Soft drop DAS in milliseconds (repeats start immediately)
pub const SOFT_DROP_DAS_MS: u32 = 0;

/// Soft drop ARR in milliseconds
pub const SOFT_DROP_ARR_MS: u32 = 50;

/// The seven figure shapes
///
/// Names follow the usual tetromino lettering:
/// - **I**: horizontal bar (4x4 bounding box)
/// - **O**: 2x2 square
/// - **T**, **S**, **Z**, **J**, **L**: 3x3 bounding box
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl ShapeKind {
    /// All shapes, in catalog order. Used for uniform random draws.
    pub const ALL: [ShapeKind; 7] = [
        ShapeKind::I,
        ShapeKind::O,
        ShapeKind::T,
        ShapeKind::S,
        ShapeKind::Z,
        ShapeKind::J,
        ShapeKind::L,
    ];

    /// Convert to an uppercase letter for display
    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::I => "I",
            ShapeKind::O => "O",
            ShapeKind::T => "T",
            ShapeKind::S => "S",
            ShapeKind::Z => "Z",
            ShapeKind::J => "J",
            ShapeKind::L => "L",
        }
    }
}

/// Player actions applied to the running game
///
/// Produced by the input layer once per frame, in arrival order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move figure one cell left
    MoveLeft,
    /// Move figure one cell right
    MoveRight,
    /// Rotate figure 90° clockwise
    Rotate,
    /// Drop figure one cell down
    SoftDrop,
    /// Drop figure until it locks
    HardDrop,
}
