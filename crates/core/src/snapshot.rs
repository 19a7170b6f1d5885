//! Read-only view handed to the render sink each frame.
//!
//! The snapshot carries everything a renderer needs and nothing else: glass
//! dimensions, the locked cells, the falling figure's absolute cells, the
//! preview figure's local cells, the score, and the game-over flag. Callers
//! keep one snapshot alive and refill it via `Game::snapshot_into` to avoid
//! per-frame allocation.

use crate::cell::Cell;
use crate::figure::CellBuf;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameSnapshot {
    pub width: u8,
    pub height: u8,
    /// Locked cells in absolute glass coordinates
    pub locked: Vec<Cell>,
    /// Falling figure cells in absolute glass coordinates
    pub figure: CellBuf,
    /// Preview figure cells in its own local coordinates
    pub preview: CellBuf,
    pub score: u32,
    pub game_over: bool,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.width = 0;
        self.height = 0;
        self.locked.clear();
        self.figure.clear();
        self.preview.clear();
        self.score = 0;
        self.game_over = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clear_resets_everything() {
        let mut snap = GameSnapshot {
            width: 10,
            height: 20,
            locked: vec![Cell::new(1, 2, 0)],
            score: 500,
            game_over: true,
            ..GameSnapshot::default()
        };
        snap.figure.push(Cell::new(4, 0, 1));

        snap.clear();
        assert_eq!(snap, GameSnapshot::default());
    }
}
