use crate::prelude::*;

pub mod heuristics;
pub mod scalars;
pub mod search;

pub use heuristics::*;
pub use scalars::*;
pub use search::*;

/// A static scoring policy applied at the leaves of a bounded search.
///
/// Implementations read the board and nothing else; positive scores favour `perspective`.
/// The search only consults a heuristic on non-terminal positions, so implementations
/// never need to reason about finished games.
pub trait Heuristic: std::fmt::Debug
{
    /// The registry name of this heuristic.
    fn name(&self) -> &'static str;

    /// Scores the board from the given player's perspective.
    fn score(&self, board: &Board, perspective: Player) -> f64;
}
