use crate::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq)]
/// A full game snapshot: the board plus the player whose turn it is.
///
/// States are values. Applying a move yields a new state and leaves the original untouched,
/// so sibling search branches never share mutable data.
pub struct GameState
{
    board:   Board,
    to_move: Player,
}

impl GameState
{
    /// Creates a state from an explicit board and side to move.
    pub fn new(board: Board, to_move: Player) -> GameState
    {
        GameState { board, to_move }
    }

    /// Creates the opening state for a board of the given dimensions. White moves first.
    pub fn opening(rows: usize, cols: usize) -> GameState
    {
        GameState {
            board:   Board::new(rows, cols),
            to_move: Player::White,
        }
    }

    /// Returns a new state with the move applied, without validating it.
    ///
    /// Only for moves produced by `legal_moves` on this same state; the search hot path
    /// uses this to skip re-validation of moves it generated itself.
    pub fn apply_unchecked(&self, mv: &Move) -> GameState
    {
        let (dest_row, dest_col) = mv.destination();

        let mut board = self.board.clone();
        board.set(mv.row, mv.col, None);
        board.set(dest_row as usize, dest_col as usize, Some(self.to_move));

        GameState {
            board,
            to_move: self.to_move.flip(),
        }
    }

    /// Validates and applies a move, returning the successor state.
    pub fn apply(&self, mv: &Move) -> Result<GameState>
    {
        self.check(mv)?;
        Ok(self.apply_unchecked(mv))
    }

    #[inline]
    pub fn board(&self) -> &Board
    {
        &self.board
    }

    /// Checks a single move for legality in this state.
    pub fn check(&self, mv: &Move) -> Result<()>
    {
        if !self.board.in_bounds(mv.row as i32, mv.col as i32) || self.board.at(mv.row, mv.col) != Some(self.to_move)
        {
            let err_msg = format!("square ({}, {}) does not hold a {} pawn", mv.row, mv.col, self.to_move);
            return Err(Error::new(Kind::WrongTurn, err_msg));
        }

        let (dest_row, dest_col) = mv.destination();
        if self.board.at_signed(dest_row, dest_col) != Some(self.to_move.flip())
        {
            let err_msg = format!("{} does not capture an opposing pawn", mv);
            return Err(Error::new(Kind::InvalidMove, err_msg));
        }

        Ok(())
    }

    /// Whether the side to move has no legal response. The player not to move has won.
    pub fn is_terminal(&self) -> bool
    {
        self.legal_moves().is_empty()
    }

    /// Generates every legal move for the side to move.
    ///
    /// Sources are visited in row-major order and directions in the fixed order
    /// Up, Down, Left, Right; the search breaks value ties on the first move found.
    pub fn legal_moves(&self) -> Vec<Move>
    {
        let mut moves = Vec::new();

        for (row, col) in self.board.squares()
        {
            if self.board.at(row, col) != Some(self.to_move)
            {
                continue;
            }

            for dir in Direction::all()
            {
                let mv = Move::new(row, col, dir);
                let (dest_row, dest_col) = mv.destination();
                if self.board.at_signed(dest_row, dest_col) == Some(self.to_move.flip())
                {
                    moves.push(mv);
                }
            }
        }

        moves
    }

    #[inline]
    pub fn to_move(&self) -> Player
    {
        self.to_move
    }

    /// Returns the winner, if the game is over.
    pub fn winner(&self) -> Option<Player>
    {
        self.is_terminal().then(|| self.to_move.flip())
    }
}
