use crate::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// A capture direction on the rectangular grid.
pub enum Direction
{
    Up,
    Down,
    Left,
    Right,
}

impl Direction
{
    #[inline]
    /// Returns a list of all directions in generation order.
    ///
    /// This order is the tie-break for "first best move found" and must stay fixed.
    pub const fn all() -> [Direction; 4]
    {
        [Self::Up, Self::Down, Self::Left, Self::Right]
    }

    /// If the two squares are orthogonal neighbours, returns the direction from the source to the target.
    pub fn between(from: (usize, usize), to: (usize, usize)) -> Result<Direction>
    {
        let delta = (to.0 as i32 - from.0 as i32, to.1 as i32 - from.1 as i32);
        Direction::all()
            .into_iter()
            .find(|direction| direction.delta() == delta)
            .ok_or_else(|| Error::new(Kind::WrongDirection, format!("squares {:?} and {:?} are not orthogonal neighbours", from, to)))
    }

    #[inline]
    /// Returns the unit (row, column) delta for this direction. Row zero is the top of the board.
    pub const fn delta(&self) -> (i32, i32)
    {
        match self
        {
            | Self::Up => (-1, 0),
            | Self::Down => (1, 0),
            | Self::Left => (0, -1),
            | Self::Right => (0, 1),
        }
    }

    /// Returns the inverse of this direction.
    pub fn inverse(&self) -> Direction
    {
        match self
        {
            | Self::Up => Self::Down,
            | Self::Down => Self::Up,
            | Self::Left => Self::Right,
            | Self::Right => Self::Left,
        }
    }

    /// Returns the name of this direction.
    pub fn long(&self) -> &'static str
    {
        match self
        {
            | Self::Up => "up",
            | Self::Down => "down",
            | Self::Left => "left",
            | Self::Right => "right",
        }
    }
}

impl std::fmt::Display for Direction
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        write!(f, "{}", self.long())
    }
}

impl FromStr for Direction
{
    type Err = Error;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err>
    {
        match s
        {
            | "up" | "u" => Ok(Self::Up),
            | "down" | "d" => Ok(Self::Down),
            | "left" | "l" => Ok(Self::Left),
            | "right" | "r" => Ok(Self::Right),
            | _ => Err(Error::new(Kind::WrongDirection, format!("'{}' does not name a direction", s))),
        }
    }
}
