use rand::Rng;

use crate::prelude::*;

#[derive(Clone, Copy, Debug, Default)]
/// A baseline with no policy at all: scores uniformly in [-1, 1], ignoring the board.
///
/// Useful as a sparring opponent; its range sits inside every other heuristic's.
pub struct Random;

impl Heuristic for Random
{
    fn name(&self) -> &'static str
    {
        "random"
    }

    fn score(&self, _board: &Board, _perspective: Player) -> f64
    {
        rand::thread_rng().gen_range(-1.0..=1.0)
    }
}
