use crate::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// A maximal 4-connected group of same-color pawns.
pub struct Island
{
    pub owner: Player,
    pub size:  usize,
}

/// Partitions every pawn on the board into islands.
///
/// Iterative flood fill with an explicit stack; each non-empty square lands in
/// exactly one island.
pub fn islands(board: &Board) -> Vec<Island>
{
    let mut visited = vec![false; board.rows() * board.cols()];
    let mut found = Vec::new();

    for (row, col) in board.squares()
    {
        if visited[row * board.cols() + col]
        {
            continue;
        }

        let Some(owner) = board.at(row, col)
        else
        {
            continue;
        };

        let mut size = 0;
        let mut stack = vec![(row, col)];

        while let Some((r, c)) = stack.pop()
        {
            let index = r * board.cols() + c;
            if visited[index]
            {
                continue;
            }

            visited[index] = true;
            size += 1;

            for dir in Direction::all()
            {
                let (di, dj) = dir.delta();
                let (nr, nc) = (r as i32 + di, c as i32 + dj);
                if board.at_signed(nr, nc) == Some(owner) && !visited[nr as usize * board.cols() + nc as usize]
                {
                    stack.push((nr as usize, nc as usize));
                }
            }
        }

        found.push(Island { owner, size });
    }

    found
}

#[derive(Clone, Copy, Debug, Default)]
/// A cohesion heuristic: fewer, larger islands are stronger.
///
/// The differential is deliberately inverted: the perspective player is rewarded
/// for the opponent's fragmentation, not for its own island count.
pub struct PawnAccumulation;

impl Heuristic for PawnAccumulation
{
    fn name(&self) -> &'static str
    {
        "accumulation"
    }

    fn score(&self, board: &Board, perspective: Player) -> f64
    {
        let mut own_islands = 0;
        let mut other_islands = 0;

        for island in islands(board)
        {
            if island.owner == perspective
            {
                own_islands += 1;
            }
            else
            {
                other_islands += 1;
            }
        }

        (other_islands - own_islands) as f64
    }
}
