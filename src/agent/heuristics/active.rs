use crate::prelude::*;

#[derive(Clone, Copy, Debug, Default)]
/// A mobility proxy: a pawn is active if it could clobber a neighbour right now.
///
/// Scores the difference between the perspective player's active pawns and the
/// opponent's.
pub struct ActivePawns;

impl Heuristic for ActivePawns
{
    fn name(&self) -> &'static str
    {
        "active"
    }

    fn score(&self, board: &Board, perspective: Player) -> f64
    {
        let mut own_active = 0;
        let mut other_active = 0;

        for (row, col) in board.squares()
        {
            let Some(pawn) = board.at(row, col)
            else
            {
                continue;
            };

            if board.can_clobber(row, col)
            {
                if pawn == perspective
                {
                    own_active += 1;
                }
                else
                {
                    other_active += 1;
                }
            }
        }

        (own_active - other_active) as f64
    }
}
