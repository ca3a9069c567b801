//! Pieces module - shape catalog and piece transforms
//!
//! Every shape is four offsets measured from a shared origin. Rotation pivots on
//! that origin, so the catalog offsets are authored to give each shape sensible
//! orientations: the line turns about its second cell and the square does not
//! turn at all.

use crate::types::{Direction, Offset, ShapeKind, Spin, SPAWN_ANCHOR};

/// Four offsets making up one shape
pub type ShapeOffsets = [Offset; 4];

/// Offset table indexed by catalog position (`ShapeKind::index`)
pub const CATALOG: [ShapeOffsets; ShapeKind::COUNT] = [
    // O
    // 02
    // 13
    [(0, 0), (0, 1), (1, 0), (1, 1)],
    // I
    // 0123
    [(-1, 0), (0, 0), (1, 0), (2, 0)],
    // T
    // 012
    //  3
    [(-1, 0), (0, 0), (1, 0), (0, 1)],
    // S
    //  23
    // 01
    [(-1, 1), (0, 1), (0, 0), (1, 0)],
    // Z
    // 01
    //  23
    [(-1, 0), (0, 0), (0, 1), (1, 1)],
    // L
    // 023
    // 1
    [(-1, 0), (-1, 1), (0, 0), (1, 0)],
    // J
    // 012
    //   3
    [(-1, 0), (0, 0), (1, 0), (1, 1)],
];

/// Spawn-orientation offsets for a shape
pub fn shape_offsets(kind: ShapeKind) -> ShapeOffsets {
    CATALOG[kind.index()]
}

/// A movable four-cell piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: ShapeKind,
    pub x: i8,
    pub y: i8,
    pub offsets: ShapeOffsets,
}

impl Piece {
    /// Create a piece of `kind` at the spawn anchor
    pub fn spawn(kind: ShapeKind) -> Self {
        Self::at(kind, SPAWN_ANCHOR.0, SPAWN_ANCHOR.1)
    }

    /// Create a piece of `kind` in spawn orientation at `(x, y)`
    pub fn at(kind: ShapeKind, x: i8, y: i8) -> Self {
        Self {
            kind,
            x,
            y,
            offsets: shape_offsets(kind),
        }
    }

    /// Absolute grid coordinates of the four cells
    pub fn cells(&self) -> [(i8, i8); 4] {
        self.offsets.map(|(dx, dy)| (self.x + dx, self.y + dy))
    }

    /// Translate the anchor by one cell
    pub fn move_by(&mut self, direction: Direction) {
        let (dx, dy) = direction.delta();
        self.x += dx;
        self.y += dy;
    }

    /// Rotate 90° clockwise: `(dx, dy) -> (dy, -dx)`
    pub fn rotate_clockwise(&mut self) {
        if !self.rotates() {
            return;
        }
        for offset in &mut self.offsets {
            let (dx, dy) = *offset;
            *offset = (dy, -dx);
        }
    }

    /// Rotate 90° counter-clockwise: `(dx, dy) -> (-dy, dx)`
    pub fn rotate_counterclockwise(&mut self) {
        if !self.rotates() {
            return;
        }
        for offset in &mut self.offsets {
            let (dx, dy) = *offset;
            *offset = (-dy, dx);
        }
    }

    pub fn rotate(&mut self, spin: Spin) {
        match spin {
            Spin::Clockwise => self.rotate_clockwise(),
            Spin::CounterClockwise => self.rotate_counterclockwise(),
        }
    }

    /// Copy moved by one cell
    pub fn moved(mut self, direction: Direction) -> Self {
        self.move_by(direction);
        self
    }

    /// Copy rotated a quarter turn
    pub fn rotated(mut self, spin: Spin) -> Self {
        self.rotate(spin);
        self
    }

    // The square's origin sits in a corner, so turning it would walk it around.
    fn rotates(&self) -> bool {
        self.kind != ShapeKind::O
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_four_distinct_cells_per_shape() {
        for kind in ShapeKind::ALL {
            let offsets = shape_offsets(kind);
            for i in 0..4 {
                for j in (i + 1)..4 {
                    assert_ne!(offsets[i], offsets[j], "{:?} repeats a cell", kind);
                }
            }
        }
    }

    #[test]
    fn every_shape_fits_the_grid_at_spawn() {
        for kind in ShapeKind::ALL {
            for (x, y) in Piece::spawn(kind).cells() {
                assert!((0..crate::types::GRID_WIDTH as i8).contains(&x), "{:?}", kind);
                assert!((0..crate::types::GRID_HEIGHT as i8).contains(&y), "{:?}", kind);
            }
        }
    }

    #[test]
    fn clockwise_then_counterclockwise_is_identity() {
        for kind in ShapeKind::ALL {
            let original = Piece::spawn(kind);
            let mut piece = original;
            piece.rotate_clockwise();
            piece.rotate_counterclockwise();
            assert_eq!(piece, original);
        }
    }

    #[test]
    fn t_rotates_about_origin() {
        let mut piece = Piece::spawn(ShapeKind::T);
        piece.rotate_clockwise();
        assert_eq!(piece.offsets, [(0, 1), (0, 0), (0, -1), (1, 0)]);
        assert_eq!((piece.x, piece.y), SPAWN_ANCHOR);
    }

    #[test]
    fn square_never_turns() {
        let original = Piece::spawn(ShapeKind::O);
        assert_eq!(original.rotated(Spin::Clockwise), original);
        assert_eq!(original.rotated(Spin::CounterClockwise), original);
    }

    #[test]
    fn line_turns_about_its_second_cell() {
        let piece = Piece::spawn(ShapeKind::I).rotated(Spin::Clockwise);
        assert_eq!(piece.offsets, [(0, 1), (0, 0), (0, -1), (0, -2)]);
    }

    #[test]
    fn moves_translate_anchor_only() {
        let piece = Piece::spawn(ShapeKind::L);
        let moved = piece.moved(Direction::Down).moved(Direction::Right);
        assert_eq!((moved.x, moved.y), (piece.x + 1, piece.y + 1));
        assert_eq!(moved.offsets, piece.offsets);
        assert_eq!(moved.moved(Direction::Up).moved(Direction::Left), piece);
    }
}
