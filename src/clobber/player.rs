use crate::prelude::*;

#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// The players in a game of Clobber.
pub enum Player
{
    White = 0,
    Black = 1,
}

impl Player
{
    /// Gets the other player.
    pub fn flip(&self) -> Self
    {
        match self
        {
            | Self::White => Self::Black,
            | Self::Black => Self::White,
        }
    }

    /// Returns the one-character glyph for this player, as it appears in a board dump.
    pub fn short(&self) -> &'static str
    {
        match self
        {
            | Self::White => "W",
            | Self::Black => "B",
        }
    }
}

impl std::fmt::Display for Player
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        let name = match self
        {
            | Self::White => "White",
            | Self::Black => "Black",
        };
        write!(f, "{name}")
    }
}

impl FromStr for Player
{
    type Err = Error;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err>
    {
        match s
        {
            | "White" | "W" | "w" => Ok(Self::White),
            | "Black" | "B" | "b" => Ok(Self::Black),
            | _ => Err(Error::for_parse::<Self>(s.into())),
        }
    }
}
