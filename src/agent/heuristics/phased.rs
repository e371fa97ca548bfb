use crate::prelude::*;

/// The share of the perspective player's starting pawns still on the board.
///
/// Each side starts with half the squares, so the ratio runs from 1.0 at the
/// opening towards 0.0 as the player gets clobbered.
pub fn pawn_ratio(board: &Board, perspective: Player) -> f64
{
    board.count(perspective) as f64 / board.initial_per_side()
}

#[derive(Debug, Default)]
/// Opens on the center, blends into mobility through the midgame, finishes aggressive.
pub struct FirstCenterThenAggressive
{
    active: ActivePawns,
    center: CenterOccupying,
}

impl Heuristic for FirstCenterThenAggressive
{
    fn name(&self) -> &'static str
    {
        "first_center_then_aggressive"
    }

    fn score(&self, board: &Board, perspective: Player) -> f64
    {
        let ratio = pawn_ratio(board, perspective);

        if ratio >= 0.6
        {
            self.center.score(board, perspective)
        }
        else if ratio >= 0.4
        {
            self.active.score(board, perspective) * 0.7 + self.center.score(board, perspective) * 0.3
        }
        else
        {
            self.active.score(board, perspective)
        }
    }
}

#[derive(Debug, Default)]
/// Keeps the pawns grouped early, then switches to hunting captures.
pub struct GroupThenFight
{
    accumulation: PawnAccumulation,
    active:       ActivePawns,
}

impl Heuristic for GroupThenFight
{
    fn name(&self) -> &'static str
    {
        "group_then_fight"
    }

    fn score(&self, board: &Board, perspective: Player) -> f64
    {
        let ratio = pawn_ratio(board, perspective);

        if ratio >= 0.6
        {
            self.accumulation.score(board, perspective)
        }
        else if ratio >= 0.4
        {
            self.accumulation.score(board, perspective) * 0.4 + self.active.score(board, perspective) * 0.6
        }
        else
        {
            self.active.score(board, perspective)
        }
    }
}

#[derive(Debug, Default)]
/// Claims the middle early and rides cohesion through the endgame.
pub struct TakeMiddleStayInGroup
{
    accumulation: PawnAccumulation,
    center:       CenterOccupying,
}

impl Heuristic for TakeMiddleStayInGroup
{
    fn name(&self) -> &'static str
    {
        "take_middle_stay_in_group"
    }

    fn score(&self, board: &Board, perspective: Player) -> f64
    {
        let ratio = pawn_ratio(board, perspective);

        if ratio >= 0.6
        {
            self.center.score(board, perspective)
        }
        else if ratio >= 0.4
        {
            self.center.score(board, perspective) * 0.5 + self.accumulation.score(board, perspective) * 0.5
        }
        else
        {
            self.accumulation.score(board, perspective)
        }
    }
}
