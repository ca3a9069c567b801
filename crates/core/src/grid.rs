//! Grid module - the playing field
//!
//! The grid is a 5x7 on/off bitmap plus the active piece and the cleared-row
//! counter. A filled cell carries no record of which piece put it there.
//! Uses a flat array for zero-allocation storage.
//! Coordinates: (x, y) where x ranges 0..4 (left to right), y ranges 0..6 (top to bottom)

use arrayvec::ArrayVec;
use log::debug;

use crate::piece::Piece;
use crate::types::{Bitmap, Direction, ShapeKind, Spin, COLS, GRID_HEIGHT, GRID_WIDTH, ROWS};

/// Total number of cells on the grid
const GRID_SIZE: usize = COLS * ROWS;

/// Row indices removed by one line-clear pass, bottom to top
pub type ClearedRows = ArrayVec<u8, ROWS>;

#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [bool; GRID_SIZE],
    active: Piece,
    cleared_rows: u32,
}

impl Grid {
    /// Create an empty grid. The active piece is parked at the spawn anchor and
    /// not displayed until the first spawn.
    pub fn new() -> Self {
        Self {
            cells: [false; GRID_SIZE],
            active: Piece::spawn(ShapeKind::O),
            cleared_rows: 0,
        }
    }

    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if Self::out_of_bounds(x, y) {
            return None;
        }
        Some((y as usize) * COLS + (x as usize))
    }

    #[inline(always)]
    fn out_of_bounds(x: i8, y: i8) -> bool {
        x < 0 || x >= GRID_WIDTH as i8 || y < 0 || y >= GRID_HEIGHT as i8
    }

    pub fn width(&self) -> u8 {
        GRID_WIDTH
    }

    pub fn height(&self) -> u8 {
        GRID_HEIGHT
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<bool> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, filled: bool) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = filled;
                true
            }
            None => false,
        }
    }

    /// Check if position is within bounds and filled
    pub fn is_filled(&self, x: i8, y: i8) -> bool {
        self.get(x, y) == Some(true)
    }

    /// The piece currently under player control
    pub fn active(&self) -> &Piece {
        &self.active
    }

    /// Cumulative number of rows removed since the last reset
    pub fn cleared_rows(&self) -> u32 {
        self.cleared_rows
    }

    /// Empty every cell
    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    /// Empty every cell and zero the cleared-row counter
    pub fn reset(&mut self) {
        self.clear();
        self.cleared_rows = 0;
    }

    /// False if any in-bounds cell of `piece` is already filled.
    ///
    /// Out-of-bounds cells are not considered; see [`Grid::collides_with_bounds`].
    pub fn can_place(&self, piece: &Piece) -> bool {
        piece
            .cells()
            .iter()
            .all(|&(x, y)| !self.is_filled(x, y))
    }

    /// True if any cell of `piece` lies outside the grid
    pub fn collides_with_bounds(&self, piece: &Piece) -> bool {
        piece
            .cells()
            .iter()
            .any(|&(x, y)| Self::out_of_bounds(x, y))
    }

    /// Fill the in-bounds cells of `piece`
    pub fn show(&mut self, piece: &Piece) {
        self.paint(piece, true);
    }

    /// Empty the in-bounds cells of `piece`
    pub fn hide(&mut self, piece: &Piece) {
        self.paint(piece, false);
    }

    fn paint(&mut self, piece: &Piece, filled: bool) {
        for (x, y) in piece.cells() {
            self.set(x, y, filled);
        }
    }

    /// Move the active piece one cell. Returns false, leaving grid and piece
    /// untouched, if the move would leave the grid or overlap filled cells.
    pub fn try_move(&mut self, direction: Direction) -> bool {
        let candidate = self.active.moved(direction);
        self.try_replace(candidate)
    }

    /// Rotate the active piece a quarter turn, with the same rejection rule as
    /// [`Grid::try_move`].
    pub fn try_rotate(&mut self, spin: Spin) -> bool {
        let candidate = self.active.rotated(spin);
        self.try_replace(candidate)
    }

    // Hide, test, commit or keep, show. Every exit leaves the active piece drawn.
    fn try_replace(&mut self, candidate: Piece) -> bool {
        let current = self.active;
        self.hide(&current);

        let accepted = !self.collides_with_bounds(&candidate) && self.can_place(&candidate);
        if accepted {
            self.active = candidate;
        }

        let shown = self.active;
        self.show(&shown);
        accepted
    }

    /// Put a fresh piece of `kind` at the spawn anchor and display it.
    ///
    /// The previous active piece stays on the grid as locked content. Returns
    /// false without touching the grid when the spawn cells are occupied.
    pub fn try_spawn(&mut self, kind: ShapeKind) -> bool {
        let piece = Piece::spawn(kind);
        if !self.can_place(&piece) {
            return false;
        }
        self.active = piece;
        self.show(&piece);
        true
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= ROWS {
            return false;
        }
        let start = y * COLS;
        self.cells[start..start + COLS].iter().all(|&filled| filled)
    }

    /// Remove every full row, let the rows above fall, and count the removals.
    ///
    /// Returns the removed row indices (pre-removal numbering, bottom to top).
    /// Uses a two-pointer compaction with zero allocation.
    pub fn check_and_clear_full_lines(&mut self) -> ClearedRows {
        let mut cleared = ClearedRows::new();
        let mut write_y = ROWS;

        // Scan from bottom to top
        for read_y in (0..ROWS).rev() {
            if self.is_row_full(read_y) {
                cleared.push(read_y as u8);
            } else {
                write_y -= 1;
                if write_y != read_y {
                    let src = read_y * COLS;
                    self.cells.copy_within(src..src + COLS, write_y * COLS);
                }
            }
        }

        // Rows vacated at the top
        self.cells[..write_y * COLS].fill(false);

        if !cleared.is_empty() {
            self.cleared_rows += cleared.len() as u32;
            debug!(
                "cleared {} row(s) {:?}, total {}",
                cleared.len(),
                cleared.as_slice(),
                self.cleared_rows
            );
        }
        cleared
    }

    /// On/off snapshot for the display collaborator
    pub fn bitmap(&self) -> Bitmap {
        let mut out = [[false; COLS]; ROWS];
        for (y, row) in out.iter_mut().enumerate() {
            row.copy_from_slice(&self.cells[y * COLS..(y + 1) * COLS]);
        }
        out
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    /// Build a grid from a bitmap, for tests and fixtures. The active piece is
    /// parked and not displayed.
    pub fn from_bitmap(bitmap: &Bitmap) -> Self {
        let mut grid = Self::new();
        for (y, row) in bitmap.iter().enumerate() {
            grid.cells[y * COLS..(y + 1) * COLS].copy_from_slice(row);
        }
        grid
    }

    /// Parse a grid from rows of `#` (filled) and `.` (empty), top row first.
    ///
    /// Rows beyond the grid are ignored; missing rows stay empty.
    pub fn from_rows(rows: &[&str]) -> Self {
        let mut grid = Self::new();
        for (y, row) in rows.iter().take(ROWS).enumerate() {
            for (x, ch) in row.chars().take(COLS).enumerate() {
                grid.cells[y * COLS + x] = ch == '#';
            }
        }
        grid
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}
