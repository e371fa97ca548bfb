use std::time::{Duration, Instant};

use crate::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// Node accounting for one top-level search. Reset at the start of every `find_best_move`.
pub struct SearchStats
{
    pub nodes: u64,
}

impl SearchStats
{
    /// Creates a fresh counter.
    pub fn new() -> SearchStats
    {
        SearchStats::default()
    }

    /// Zeroes the counter.
    pub fn reset(&mut self)
    {
        self.nodes = 0;
    }

    #[inline]
    fn visit(&mut self)
    {
        self.nodes += 1;
    }
}

#[derive(Clone, Copy, Debug)]
/// What a top-level search produced: the chosen move, its value, and diagnostics.
///
/// `mv` is None when the searched state was already terminal for the player; that is
/// a result, not an error.
pub struct SearchOutcome
{
    pub mv:      Option<Move>,
    pub value:   f64,
    pub nodes:   u64,
    pub elapsed: Duration,
}

/// The utility of a terminal state: the side to move has no response and has lost.
fn utility(state: &GameState, maximizing: Player) -> f64
{
    if state.to_move() == maximizing
    {
        -WIN
    }
    else
    {
        WIN
    }
}

/// Plain minimax over the game tree, scored from `maximizing`'s viewpoint.
fn minimax(state: &GameState, depth: u32, maximizing: Player, heuristic: &dyn Heuristic, stats: &mut SearchStats) -> f64
{
    stats.visit();

    // One move list serves both the terminal check and the recursion.
    let moves = state.legal_moves();
    if moves.is_empty()
    {
        return utility(state, maximizing);
    }

    if depth == 0
    {
        return scalars::clamp_heuristic(heuristic.score(state.board(), maximizing));
    }

    if state.to_move() == maximizing
    {
        let mut value = -INF;
        for mv in &moves
        {
            value = value.max(minimax(&state.apply_unchecked(mv), depth - 1, maximizing, heuristic, stats));
        }
        value
    }
    else
    {
        let mut value = INF;
        for mv in &moves
        {
            value = value.min(minimax(&state.apply_unchecked(mv), depth - 1, maximizing, heuristic, stats));
        }
        value
    }
}

/// Minimax with an (alpha, beta) window.
///
/// Pruning only skips subtrees that provably cannot change the chosen value, so this
/// returns exactly what `minimax` returns for the same inputs.
fn alpha_beta(
    state: &GameState,
    depth: u32,
    mut alpha: f64,
    mut beta: f64,
    maximizing: Player,
    heuristic: &dyn Heuristic,
    stats: &mut SearchStats,
) -> f64
{
    stats.visit();

    let moves = state.legal_moves();
    if moves.is_empty()
    {
        return utility(state, maximizing);
    }

    if depth == 0
    {
        return scalars::clamp_heuristic(heuristic.score(state.board(), maximizing));
    }

    if state.to_move() == maximizing
    {
        let mut value = -INF;
        for mv in &moves
        {
            value = value.max(alpha_beta(&state.apply_unchecked(mv), depth - 1, alpha, beta, maximizing, heuristic, stats));
            alpha = alpha.max(value);
            if value >= beta
            {
                break;
            }
        }
        value
    }
    else
    {
        let mut value = INF;
        for mv in &moves
        {
            value = value.min(alpha_beta(&state.apply_unchecked(mv), depth - 1, alpha, beta, maximizing, heuristic, stats));
            beta = beta.min(value);
            if value <= alpha
            {
                break;
            }
        }
        value
    }
}

/// Searches the position to the given depth and returns the best move for `player`.
///
/// Every successor is scored recursively at `depth - 1`; value ties are broken by
/// generation order, so results are reproducible. `stats` is reset here and counts
/// every recursive invocation below the root.
pub fn find_best_move(
    state: &GameState,
    depth: u32,
    player: Player,
    heuristic: &dyn Heuristic,
    use_alpha_beta: bool,
    stats: &mut SearchStats,
) -> SearchOutcome
{
    let moves = state.legal_moves();
    if moves.is_empty()
    {
        return SearchOutcome {
            mv:      None,
            value:   0.0,
            nodes:   0,
            elapsed: Duration::ZERO,
        };
    }

    let is_maximizing = player == state.to_move();

    let mut best_value = if is_maximizing { -INF } else { INF };
    let mut best_move = None;
    let (mut alpha, mut beta) = (-INF, INF);

    stats.reset();
    let start = Instant::now();

    for mv in &moves
    {
        let successor = state.apply_unchecked(mv);

        let value = if use_alpha_beta
        {
            alpha_beta(&successor, depth.saturating_sub(1), alpha, beta, player, heuristic, stats)
        }
        else
        {
            minimax(&successor, depth.saturating_sub(1), player, heuristic, stats)
        };

        if is_maximizing
        {
            if value > best_value
            {
                best_value = value;
                best_move = Some(*mv);
                alpha = alpha.max(best_value);
            }
        }
        else if value < best_value
        {
            best_value = value;
            best_move = Some(*mv);
            beta = beta.min(best_value);
        }

        if use_alpha_beta && alpha >= beta
        {
            break;
        }
    }

    SearchOutcome {
        mv:      best_move,
        value:   best_value,
        nodes:   stats.nodes,
        elapsed: start.elapsed(),
    }
}
