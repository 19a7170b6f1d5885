//! Game controller - spawn, gravity, input dispatch, lock-and-clear, scoring
//!
//! The controller owns the glass, the falling figure, and the preview figure.
//! It is driven from outside by a fixed frame tick plus an ordered stream of
//! [`GameAction`]s; every mutation completes synchronously within the call
//! that triggered it.
//!
//! There are two states: running and game over. Game over is entered when a
//! freshly spawned figure does not fit, and is terminal; a new game means a
//! new controller.

use glassfall_types::{
    GameAction, ShapeKind, GRAVITY_FRAMES, LOCK_BONUS, PALETTE_LEN, ROTATION_STATES,
    ROW_CLEAR_MULTIPLIER, SPAWN_X, SPAWN_Y,
};

use crate::figure::Figure;
use crate::glass::Glass;
use crate::rng::SimpleRng;
use crate::snapshot::GameSnapshot;

/// Complete game state and the rules that advance it.
#[derive(Debug, Clone)]
pub struct Game {
    glass: Glass,
    figure: Figure,
    next_figure: Figure,
    rng: SimpleRng,
    score: u32,
    drop_count: u32,
    running: bool,
}

impl Game {
    /// Start a game on an empty glass with the given RNG seed
    pub fn new(seed: u32) -> Self {
        Self::with_glass(Glass::new(), seed)
    }

    /// Start a game on a pre-filled glass.
    ///
    /// The first figure is subject to the same spawn-collision rule as every
    /// later one, so a glass that blocks the spawn area yields a game that is
    /// already over.
    pub fn with_glass(glass: Glass, seed: u32) -> Self {
        let mut rng = SimpleRng::new(seed);
        let figure = Self::random_figure(&mut rng);
        let next_figure = Self::random_figure(&mut rng);
        let running = figure.can_place_at(0, 0, &glass);

        Self {
            glass,
            figure,
            next_figure,
            rng,
            score: 0,
            drop_count: 0,
            running,
        }
    }

    pub fn running(&self) -> bool {
        self.running
    }

    pub fn game_over(&self) -> bool {
        !self.running
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn glass(&self) -> &Glass {
        &self.glass
    }

    pub fn figure(&self) -> &Figure {
        &self.figure
    }

    pub fn next_figure(&self) -> &Figure {
        &self.next_figure
    }

    #[cfg(test)]
    pub(crate) fn glass_mut(&mut self) -> &mut Glass {
        &mut self.glass
    }

    /// Advance one frame of gravity.
    ///
    /// Increments the gravity counter and, once it exceeds the threshold,
    /// forces the figure down one row (locking it if it cannot descend).
    /// Returns true if a gravity step was taken this frame. No-op after game
    /// over.
    pub fn tick(&mut self) -> bool {
        if !self.running {
            return false;
        }

        self.drop_count += 1;
        if self.drop_count > GRAVITY_FRAMES {
            self.try_move_down();
            return true;
        }
        false
    }

    /// Apply one player action.
    ///
    /// Illegal moves and rotations are rejected silently (false). No-op
    /// after game over.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        if !self.running {
            return false;
        }

        match action {
            GameAction::MoveLeft => self.figure.try_move(-1, 0, &self.glass),
            GameAction::MoveRight => self.figure.try_move(1, 0, &self.glass),
            GameAction::Rotate => self.figure.try_rotate(&self.glass),
            GameAction::SoftDrop => self.try_move_down(),
            GameAction::HardDrop => {
                // Drop until lock; keeping the counter at half threshold
                // preserves the soft-drop visual cadence after the lock.
                while self.try_move_down() {
                    self.drop_count = GRAVITY_FRAMES / 2;
                }
                true
            }
        }
    }

    /// Force the figure one row down, locking it if it cannot descend.
    ///
    /// Resets the gravity counter. On lock: commit cells to the glass, award
    /// the lock bonus plus the squared row-clear bonus, then promote the
    /// preview figure (which may end the game). Returns true while the figure
    /// is still falling.
    fn try_move_down(&mut self) -> bool {
        self.drop_count = 0;
        if self.figure.try_move(0, 1, &self.glass) {
            return true;
        }

        let locked = self.glass.lock(&self.figure);
        debug_assert!(locked, "figure locked onto an occupied cell");

        self.score += LOCK_BONUS;
        let cleared = self.glass.clear_full_rows();
        self.score += cleared * cleared * ROW_CLEAR_MULTIPLIER;

        self.spawn_next();
        false
    }

    /// Promote the preview to the live figure and draw a fresh preview.
    ///
    /// The preview's exact shape, color, and rotation are reused; only the
    /// origin changes to the spawn point. A live figure that does not fit
    /// ends the game.
    fn spawn_next(&mut self) {
        self.figure = Figure::new(
            SPAWN_X,
            SPAWN_Y,
            self.next_figure.kind(),
            self.next_figure.color(),
            self.next_figure.rotation(),
        );
        if !self.figure.can_place_at(0, 0, &self.glass) {
            self.running = false;
        }
        self.next_figure = Self::random_figure(&mut self.rng);
    }

    fn random_figure(rng: &mut SimpleRng) -> Figure {
        let kind = ShapeKind::ALL[rng.next_range(ShapeKind::ALL.len() as u32) as usize];
        let color = rng.next_range(PALETTE_LEN as u32) as u8;
        let rotation = rng.next_range(ROTATION_STATES as u32) as u8;
        Figure::new(SPAWN_X, SPAWN_Y, kind, color, rotation)
    }

    /// Fill a render-sink snapshot from the current state
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.width = self.glass.width();
        out.height = self.glass.height();
        out.locked.clear();
        out.locked.extend_from_slice(self.glass.cells());
        out.figure = self.figure.cells();
        out.preview = self.next_figure.local_cells();
        out.score = self.score;
        out.game_over = !self.running;
    }

    /// Convenience helper that allocates a fresh snapshot
    pub fn snapshot(&self) -> GameSnapshot {
        let mut snap = GameSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }
}
