pub(crate) mod board;
pub(crate) mod direction;
pub(crate) mod moves;
pub(crate) mod notation;
pub(crate) mod player;
pub(crate) mod state;

pub use board::Board;
pub use direction::Direction;
pub use moves::Move;
pub use notation::{format_move, format_square, parse_move, parse_square};
pub use player::Player;
pub use state::GameState;
