use itertools::iproduct;

use crate::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq)]
/// A rectangular Clobber board. Cells hold a pawn or nothing; dimensions are fixed at construction.
pub struct Board
{
    rows:  usize,
    cols:  usize,
    cells: Vec<Option<Player>>,
}

impl Board
{
    /// Creates the opening position for a board of the given dimensions.
    ///
    /// Colors strictly alternate in row-major order, continuing across row boundaries,
    /// seeded with White when the row count is even and Black when it is odd.
    pub fn new(rows: usize, cols: usize) -> Board
    {
        let mut pawn = if rows % 2 == 0 { Player::White } else { Player::Black };
        let mut cells = Vec::with_capacity(rows * cols);

        for _ in 0..rows * cols
        {
            cells.push(Some(pawn));
            pawn = pawn.flip();
        }

        Board { rows, cols, cells }
    }

    /// Builds a board from explicit rows. Every row must have the same width.
    pub fn from_rows(rows: Vec<Vec<Option<Player>>>) -> Result<Board>
    {
        let height = rows.len();
        let width = rows.first().map(|row| row.len()).unwrap_or(0);

        if height == 0 || width == 0
        {
            return Err(Error::new(Kind::InternalError, "a board must have at least one row and one column".into()));
        }

        if rows.iter().any(|row| row.len() != width)
        {
            return Err(Error::new(Kind::InternalError, "all board rows must have the same width".into()));
        }

        Ok(Board {
            rows:  height,
            cols:  width,
            cells: rows.into_iter().flatten().collect(),
        })
    }

    #[inline]
    /// Returns the pawn at the given square, if any.
    pub fn at(&self, row: usize, col: usize) -> Option<Player>
    {
        self.cells[row * self.cols + col]
    }

    #[inline]
    /// Returns the pawn at signed coordinates, treating out-of-bounds squares as empty.
    pub fn at_signed(&self, row: i32, col: i32) -> Option<Player>
    {
        if self.in_bounds(row, col)
        {
            self.at(row as usize, col as usize)
        }
        else
        {
            None
        }
    }

    /// Whether the pawn on the given square has an orthogonally adjacent opposing pawn.
    pub fn can_clobber(&self, row: usize, col: usize) -> bool
    {
        let Some(pawn) = self.at(row, col)
        else
        {
            return false;
        };

        Direction::all().into_iter().any(|dir| {
            let (di, dj) = dir.delta();
            self.at_signed(row as i32 + di, col as i32 + dj) == Some(pawn.flip())
        })
    }

    #[inline]
    pub fn cols(&self) -> usize
    {
        self.cols
    }

    /// Counts the pawns of one color.
    pub fn count(&self, player: Player) -> usize
    {
        self.cells.iter().filter(|cell| **cell == Some(player)).count()
    }

    #[inline]
    /// Whether the signed coordinates name a square on the board.
    pub fn in_bounds(&self, row: i32, col: i32) -> bool
    {
        0 <= row && row < self.rows as i32 && 0 <= col && col < self.cols as i32
    }

    /// The number of pawns each side starts with on a board of these dimensions.
    pub fn initial_per_side(&self) -> f64
    {
        (self.rows * self.cols) as f64 / 2.0
    }

    /// Counts all pawns still on the board.
    pub fn pawns(&self) -> usize
    {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Renders the board, optionally with coordinate labels.
    ///
    /// Columns are lettered A.. left to right; rows are numbered top to bottom counting down
    /// from the row count, matching the `"A1 B2"` input protocol.
    pub fn pretty(&self, labels: bool) -> String
    {
        let mut out = String::new();

        if labels
        {
            let letters = (0..self.cols).map(|j| ((b'A' + j as u8) as char).to_string()).collect::<Vec<String>>();
            let rule = (0..self.cols).map(|_| "_".to_string()).collect::<Vec<String>>();
            out.push_str(&format!("    {}\n", letters.join("  ")));
            out.push_str(&format!("    {}\n", rule.join("  ")));
        }

        for row in 0..self.rows
        {
            let cells = (0..self.cols)
                .map(|col| match self.at(row, col)
                {
                    | Some(pawn) => pawn.short().to_string(),
                    | None => "_".to_string(),
                })
                .collect::<Vec<String>>();

            if labels
            {
                out.push_str(&format!("{}|  ", self.rows - row));
            }

            out.push_str(&cells.join("  "));
            out.push('\n');
        }

        out
    }

    #[inline]
    pub fn rows(&self) -> usize
    {
        self.rows
    }

    #[inline]
    pub(crate) fn set(&mut self, row: usize, col: usize, cell: Option<Player>)
    {
        self.cells[row * self.cols + col] = cell;
    }

    /// Iterates all squares in row-major order.
    pub fn squares(&self) -> impl Iterator<Item = (usize, usize)>
    {
        iproduct!(0..self.rows, 0..self.cols)
    }
}

impl std::fmt::Display for Board
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        write!(f, "{}", self.pretty(false))
    }
}
