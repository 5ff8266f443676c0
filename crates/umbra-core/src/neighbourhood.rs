//! The 8-connected neighbourhood used by classification and propagation.

/// A neighbour offset `(dx, dy)` with both components in `{-1, 0, 1}`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Offset {
    /// Column delta.
    pub dx: i32,
    /// Row delta.
    pub dy: i32,
}

impl Offset {
    /// Create an offset.
    pub const fn new(dx: i32, dy: i32) -> Self {
        Self { dx, dy }
    }

    /// Euclidean step length: `1` for orthogonal, `√2` for diagonal moves.
    pub fn length(self) -> f32 {
        ((self.dx * self.dx + self.dy * self.dy) as f32).sqrt()
    }

    /// Whether both components are non-zero.
    pub fn is_diagonal(self) -> bool {
        self.dx != 0 && self.dy != 0
    }
}

/// All 8 offsets: W, E, N, S, NW, NE, SW, SE (y grows downwards).
pub const OFFSETS_8: [Offset; 8] = [
    Offset::new(-1, 0),
    Offset::new(1, 0),
    Offset::new(0, -1),
    Offset::new(0, 1),
    Offset::new(-1, -1),
    Offset::new(1, -1),
    Offset::new(-1, 1),
    Offset::new(1, 1),
];
