use regex::Regex;

use crate::prelude::*;

/// Formats a move in the text protocol, e.g. `"A1 B1"`.
pub fn format_move(mv: &Move, board: &Board) -> String
{
    let (di, dj) = mv.destination();
    format!("{} {}", format_square((mv.row, mv.col), board), format_square((di as usize, dj as usize), board))
}

/// Formats a square in the text protocol. Columns are lettered A.. and rows count down from the top.
pub fn format_square(square: (usize, usize), board: &Board) -> String
{
    let letter = (b'A' + square.1 as u8) as char;
    format!("{}{}", letter, board.rows() - square.0)
}

/// Parses a move in the text protocol, e.g. `"A1 B1"`: the source square, then the destination.
///
/// The two squares must be orthogonal neighbours; anything else is a direction error.
pub fn parse_move(s: &str, board: &Board) -> Result<Move>
{
    let base = Error::for_parse::<Move>(s.into());

    let re = Regex::new(r"^\s*(?<src>[A-Z][0-9]+)\s+(?<dst>[A-Z][0-9]+)\s*$").unwrap();
    let Some(caps) = re.captures(s)
    else
    {
        return Err(Error::new(Kind::ParseError, "expected a move in the form of [A1 B2]".into()).chain(base));
    };

    let src = parse_square(caps.name("src").map(|m| m.as_str()).unwrap(), board).map_err(|err| err.chain(base.clone()))?;
    let dst = parse_square(caps.name("dst").map(|m| m.as_str()).unwrap(), board).map_err(|err| err.chain(base.clone()))?;

    let dir = Direction::between(src, dst)?;
    Ok(Move::new(src.0, src.1, dir))
}

/// Parses a square in the text protocol into (row, col) coordinates.
pub fn parse_square(s: &str, board: &Board) -> Result<(usize, usize)>
{
    let base = Error::new(Kind::ParseError, format!("'{}' is not a valid square", s));

    let re = Regex::new(r"^(?<col>[A-Z])(?<row>[0-9]+)$").unwrap();
    let Some(caps) = re.captures(s)
    else
    {
        return Err(base);
    };

    let col = (caps.name("col").map(|m| m.as_str()).unwrap().as_bytes()[0] - b'A') as usize;

    let row_str = caps.name("row").map(|m| m.as_str()).unwrap();
    let Ok(row_label) = row_str.parse::<usize>()
    else
    {
        return Err(Error::new(Kind::ParseError, format!("invalid row number '{}'", row_str)).chain(base));
    };

    if col >= board.cols() || row_label == 0 || row_label > board.rows()
    {
        return Err(Error::new(Kind::ParseError, format!("square '{}' is not on this board", s)).chain(base));
    }

    Ok((board.rows() - row_label, col))
}
