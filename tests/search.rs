mod common;
use common::*;

#[cfg(test)]
mod search
{
    use clobbermind::prelude::*;

    use super::*;

    /// Runs both engines on the same position and checks they agree on the value.
    fn assert_engines_agree(state: &GameState, depth: u32, heuristic: &dyn Heuristic) -> (SearchOutcome, SearchOutcome)
    {
        let mut stats = SearchStats::new();
        let player = state.to_move();

        let plain = find_best_move(state, depth, player, heuristic, false, &mut stats);
        let pruned = find_best_move(state, depth, player, heuristic, true, &mut stats);

        assert_eq!(plain.value, pruned.value, "pruning must never change the chosen value");
        assert!(pruned.nodes <= plain.nodes, "pruning must never visit more nodes");

        (plain, pruned)
    }

    #[test]
    fn minimax_and_alpha_beta_agree()
    {
        let _setup = setup::setup();

        for depth in 1..=3
        {
            for name in ["active", "center", "accumulation"]
            {
                let heuristic = heuristics::lookup(name).unwrap();

                let small = GameState::opening(3, 3);
                assert_engines_agree(&small, depth, heuristic.as_ref());

                let narrow = GameState::opening(2, 3);
                assert_engines_agree(&narrow, depth, heuristic.as_ref());
            }
        }
    }

    #[test]
    fn engines_agree_under_a_composite()
    {
        let _setup = setup::setup();

        let heuristic = heuristics::lookup("take_middle_stay_in_group").unwrap();
        let state = GameState::opening(3, 4);
        assert_engines_agree(&state, 2, heuristic.as_ref());
    }

    #[test]
    fn ties_break_on_the_first_move_found()
    {
        let _setup = setup::setup();

        // All four captures on this board score identically under active-pawns.
        let state = templates::state(&["W B", "B W"], Player::White);
        let heuristic = heuristics::lookup("active").unwrap();

        let (plain, pruned) = assert_engines_agree(&state, 1, heuristic.as_ref());
        assert_eq!(plain.mv, Some(Move::new(0, 0, Direction::Down)));
        assert_eq!(pruned.mv, Some(Move::new(0, 0, Direction::Down)));
    }

    #[test]
    fn white_forces_the_win_on_the_tiny_board()
    {
        let _setup = setup::setup();

        // Whoever moves on 2x2 wins on the third ply, so depth 3 must see the sentinel.
        let state = templates::state(&["W B", "B W"], Player::White);
        let heuristic = heuristics::lookup("active").unwrap();
        let mut stats = SearchStats::new();

        let outcome = find_best_move(&state, 3, Player::White, heuristic.as_ref(), false, &mut stats);
        assert_eq!(outcome.value, WIN);
        assert_eq!(outcome.mv, Some(Move::new(0, 0, Direction::Down)));

        let next = state.apply(&outcome.mv.unwrap()).unwrap();
        assert_eq!(next.board().clone(), templates::board(&["_ B", "W W"]));
        assert_eq!(next.board().pawns(), 3);

        // Play the forced line out: White wins with a single pawn standing.
        let mut state = state;
        while !state.is_terminal()
        {
            let to_move = state.to_move();
            let outcome = find_best_move(&state, 3, to_move, heuristic.as_ref(), true, &mut stats);
            state = state.apply(&outcome.mv.unwrap()).unwrap();
        }
        assert_eq!(state.winner(), Some(Player::White));
        assert_eq!(state.board().pawns(), 1);
    }

    #[test]
    fn immediate_win_scores_the_sentinel()
    {
        let _setup = setup::setup();

        // White's only capture leaves Black with nothing.
        let state = templates::state(&["B W _"], Player::White);
        let heuristic = heuristics::lookup("center").unwrap();
        let mut stats = SearchStats::new();

        let outcome = find_best_move(&state, 1, Player::White, heuristic.as_ref(), false, &mut stats);
        assert_eq!(outcome.mv, Some(Move::new(0, 1, Direction::Left)));
        assert_eq!(outcome.value, WIN);
    }

    #[test]
    fn a_lost_position_still_chooses_a_move()
    {
        let _setup = setup::setup();

        // Both White openings lose by force; the search must still pick the first one.
        let state = templates::state(&["W B _ W B"], Player::White);
        let heuristic = heuristics::lookup("active").unwrap();
        let mut stats = SearchStats::new();

        for use_alpha_beta in [false, true]
        {
            let outcome = find_best_move(&state, 4, Player::White, heuristic.as_ref(), use_alpha_beta, &mut stats);
            assert_eq!(outcome.value, -WIN);
            assert_eq!(outcome.mv, Some(Move::new(0, 0, Direction::Right)));
        }
    }

    #[test]
    fn terminal_state_yields_no_move()
    {
        let _setup = setup::setup();

        let state = templates::state(&["W _ B B"], Player::White);
        let heuristic = heuristics::lookup("active").unwrap();
        let mut stats = SearchStats::new();

        let outcome = find_best_move(&state, 3, Player::White, heuristic.as_ref(), true, &mut stats);
        assert!(outcome.mv.is_none());
        assert_eq!(outcome.value, 0.0);
        assert_eq!(outcome.nodes, 0);
    }

    #[test]
    fn node_counts_reset_between_searches()
    {
        let _setup = setup::setup();

        let state = GameState::opening(3, 3);
        let heuristic = heuristics::lookup("active").unwrap();
        let mut stats = SearchStats::new();

        let first = find_best_move(&state, 2, Player::White, heuristic.as_ref(), false, &mut stats);
        let second = find_best_move(&state, 2, Player::White, heuristic.as_ref(), false, &mut stats);

        assert!(first.nodes > 0);
        assert_eq!(first.nodes, second.nodes);
        assert_eq!(stats.nodes, second.nodes);
    }

    #[test]
    fn depth_zero_leaves_score_by_heuristic()
    {
        let _setup = setup::setup();

        // At depth 1 every successor is a live heuristic leaf; the root takes their maximum.
        let state = templates::state(&["W B B W"], Player::White);
        let heuristic = heuristics::lookup("active").unwrap();
        let mut stats = SearchStats::new();

        let outcome = find_best_move(&state, 1, Player::White, heuristic.as_ref(), false, &mut stats);

        // Either capture leaves White with two pawns in contact against one.
        assert_eq!(outcome.value, 1.0);
        assert_eq!(outcome.mv, Some(Move::new(0, 0, Direction::Right)));
        assert_eq!(outcome.nodes, 2);
    }
}
