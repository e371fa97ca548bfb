use crate::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// A single Clobber move: the pawn at (row, col) captures onto the neighbouring square in `dir`.
pub struct Move
{
    pub row: usize,
    pub col: usize,
    pub dir: Direction,
}

impl Move
{
    /// Creates a new move.
    pub fn new(row: usize, col: usize, dir: Direction) -> Move
    {
        Move { row, col, dir }
    }

    #[inline]
    /// Returns the destination square as signed coordinates. Bounds are the board's concern.
    pub fn destination(&self) -> (i32, i32)
    {
        let (di, dj) = self.dir.delta();
        (self.row as i32 + di, self.col as i32 + dj)
    }
}

impl std::fmt::Display for Move
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        write!(f, "({}, {}, {})", self.row, self.col, self.dir)
    }
}
