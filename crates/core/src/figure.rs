//! Figure - the falling polyomino
//!
//! A figure is a shape instance: an origin on the glass, a palette color, and
//! a local square grid of optional cells sized to the shape's bounding box.
//! Every occupied local cell stores its own (x, y), kept equal to its grid
//! index across every mutation.
//!
//! Movement and rotation are legality-checked against the glass and either
//! commit fully or leave the figure untouched. The rotation transform itself
//! is a pure grid-to-grid function so it can be tested in isolation.

use arrayvec::ArrayVec;

use glassfall_types::{ShapeKind, ROTATION_STATES};

use crate::cell::{positions_overlap, Cell};
use crate::glass::Glass;
use crate::shapes::{shape_def, FIGURE_CELLS, GRID_MAX};

/// Local occupancy grid, indexed `[y][x]`
pub type LocalGrid = [[Option<Cell>; GRID_MAX]; GRID_MAX];

/// Fixed-capacity cell list produced by figure projections
pub type CellBuf = ArrayVec<Cell, FIGURE_CELLS>;

/// Rotate a local grid 90° clockwise within a `size`-sided box.
///
/// Equivalent to transpose followed by row reversal. Each surviving cell is
/// re-stamped with its new grid coordinate.
pub fn rotated_cw(grid: &LocalGrid, size: u8) -> LocalGrid {
    let n = size as usize;
    let mut out: LocalGrid = [[None; GRID_MAX]; GRID_MAX];
    for y in 0..n {
        for x in 0..n {
            if let Some(cell) = grid[n - 1 - x][y] {
                out[y][x] = Some(Cell::new(x as i8, y as i8, cell.color));
            }
        }
    }
    out
}

/// The currently falling (or previewed) figure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Figure {
    x: i8,
    y: i8,
    kind: ShapeKind,
    color: u8,
    rotation: u8,
    size: u8,
    grid: LocalGrid,
}

impl Figure {
    /// Build a figure at (x, y) with `rotation` clockwise quarter-turns
    /// pre-applied.
    ///
    /// Construction performs no legality check; the spawn rotation is
    /// realized by unchecked in-place rotations of the fresh grid.
    pub fn new(x: i8, y: i8, kind: ShapeKind, color: u8, rotation: u8) -> Self {
        let def = shape_def(kind);
        let size = def.size();

        let mut grid: LocalGrid = [[None; GRID_MAX]; GRID_MAX];
        for gy in 0..size {
            for gx in 0..size {
                if def.filled(gx, gy) {
                    grid[gy as usize][gx as usize] = Some(Cell::new(gx as i8, gy as i8, color));
                }
            }
        }

        let rotation = rotation % ROTATION_STATES;
        for _ in 0..rotation {
            grid = rotated_cw(&grid, size);
        }

        Self {
            x,
            y,
            kind,
            color,
            rotation,
            size,
            grid,
        }
    }

    pub fn x(&self) -> i8 {
        self.x
    }

    pub fn y(&self) -> i8 {
        self.y
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    pub fn color(&self) -> u8 {
        self.color
    }

    /// Net clockwise quarter-turns applied since the unrotated catalog shape
    pub fn rotation(&self) -> u8 {
        self.rotation
    }

    /// Bounding box side length
    pub fn size(&self) -> u8 {
        self.size
    }

    /// Occupied cells in local grid coordinates
    pub fn local_cells(&self) -> CellBuf {
        let mut out = CellBuf::new();
        for row in self.grid.iter().take(self.size as usize) {
            for cell in row.iter().take(self.size as usize).flatten() {
                out.push(*cell);
            }
        }
        out
    }

    /// Occupied cells projected to absolute glass coordinates
    pub fn cells(&self) -> CellBuf {
        let mut out = self.local_cells();
        for cell in &mut out {
            *cell = cell.translated(self.x, self.y);
        }
        out
    }

    /// Whether the figure, shifted by (dx, dy), would sit entirely inside the
    /// glass without touching a locked cell.
    pub fn can_place_at(&self, dx: i8, dy: i8, glass: &Glass) -> bool {
        let mut moved = CellBuf::new();
        for cell in self.cells() {
            let shifted = cell.translated(dx, dy);
            if !Glass::in_bounds(shifted.x, shifted.y) {
                return false;
            }
            moved.push(shifted);
        }
        !positions_overlap(&moved, glass.cells())
    }

    /// Shift the origin by (dx, dy) if the target placement is legal.
    ///
    /// Returns false and leaves the figure unchanged otherwise.
    pub fn try_move(&mut self, dx: i8, dy: i8, glass: &Glass) -> bool {
        if !self.can_place_at(dx, dy, glass) {
            return false;
        }
        self.x += dx;
        self.y += dy;
        true
    }

    /// Rotate 90° clockwise if the rotated grid is legal at the current
    /// origin.
    ///
    /// The candidate grid is validated in full before it replaces the current
    /// one; a rejected rotation leaves the figure untouched.
    pub fn try_rotate(&mut self, glass: &Glass) -> bool {
        let candidate = rotated_cw(&self.grid, self.size);

        let mut moved = CellBuf::new();
        for row in candidate.iter().take(self.size as usize) {
            for cell in row.iter().take(self.size as usize).flatten() {
                let abs = cell.translated(self.x, self.y);
                if !Glass::in_bounds(abs.x, abs.y) {
                    return false;
                }
                moved.push(abs);
            }
        }
        if positions_overlap(&moved, glass.cells()) {
            return false;
        }

        self.grid = candidate;
        self.rotation = (self.rotation + 1) % ROTATION_STATES;
        true
    }
}
