use clobbermind::prelude::*;

/// Builds a board from template rows: `W` and `B` are pawns, `_` is empty, whitespace is ignored.
pub fn board(rows: &[&str]) -> Board
{
    let parsed = rows
        .iter()
        .map(|row| {
            row.chars()
                .filter(|c| !c.is_whitespace())
                .map(|c| match c
                {
                    | 'W' => Some(Player::White),
                    | 'B' => Some(Player::Black),
                    | '_' => None,
                    | other => panic!("'{}' is not a board template glyph", other),
                })
                .collect::<Vec<Option<Player>>>()
        })
        .collect::<Vec<Vec<Option<Player>>>>();

    Board::from_rows(parsed).expect("template rows must form a rectangular board")
}

/// Builds a full game state from template rows and a side to move.
pub fn state(rows: &[&str], to_move: Player) -> GameState
{
    GameState::new(board(rows), to_move)
}

/// Applies a move given in the `"A1 B2"` text protocol, panicking if it is rejected.
pub fn play(state: &GameState, text: &str) -> GameState
{
    let mv = parse_move(text, state.board()).expect("template move must parse");
    state.apply(&mv).expect("template move must be legal")
}

/// Plays first-generated moves until the game ends, checking the census at every ply.
///
/// Returns the final state and the number of plies played.
pub fn play_out_first_moves(start: GameState) -> (GameState, usize)
{
    let mut state = start;
    let mut plies = 0;

    loop
    {
        let moves = state.legal_moves();
        let Some(mv) = moves.first()
        else
        {
            return (state, plies);
        };

        let before = state.board().pawns();
        let next = state.apply(mv).expect("a generated move must be accepted");

        assert_eq!(next.board().pawns(), before - 1, "every move must clobber exactly one pawn");
        assert_eq!(next.to_move(), state.to_move().flip(), "turns must alternate strictly");

        state = next;
        plies += 1;
    }
}
