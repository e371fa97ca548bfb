use std::sync::Arc;

use dashmap::DashMap;

use crate::prelude::*;

#[derive(Clone, Debug)]
/// The center weights for one board shape. Write-once; shared read-only between evaluations.
pub struct WeightGrid
{
    rows:    usize,
    cols:    usize,
    weights: Vec<f64>,
}

impl WeightGrid
{
    /// Computes the grid for the given dimensions.
    ///
    /// A square's weight is its distance to the nearest row edge plus its distance to the
    /// nearest column edge, plus the smaller of the two again as a diagonal bonus. Squares
    /// near the geometric center weigh the most.
    pub fn generate(cols: usize, rows: usize) -> WeightGrid
    {
        let mut weights = Vec::with_capacity(rows * cols);

        for row in 0..rows
        {
            for col in 0..cols
            {
                let dist_row = row.min(rows - 1 - row);
                let dist_col = col.min(cols - 1 - col);
                weights.push((dist_row + dist_col + dist_row.min(dist_col)) as f64);
            }
        }

        WeightGrid { rows, cols, weights }
    }

    #[inline]
    pub fn cols(&self) -> usize
    {
        self.cols
    }

    #[inline]
    pub fn rows(&self) -> usize
    {
        self.rows
    }

    #[inline]
    /// Returns the weight of a square.
    pub fn weight(&self, row: usize, col: usize) -> f64
    {
        self.weights[row * self.cols + col]
    }
}

#[derive(Debug, Default)]
/// A positional heuristic: pawns near the board's center outweigh pawns at the edges.
///
/// The weight grid is a pure function of the dimensions, so it is computed once per
/// board shape and memoized in a concurrent map; entries are never written twice.
pub struct CenterOccupying
{
    grids: DashMap<(usize, usize), Arc<WeightGrid>>,
}

impl CenterOccupying
{
    /// Returns the weight grid for a board's shape, computing it on first use.
    pub fn grid(&self, board: &Board) -> Arc<WeightGrid>
    {
        self.grids
            .entry((board.cols(), board.rows()))
            .or_insert_with(|| Arc::new(WeightGrid::generate(board.cols(), board.rows())))
            .clone()
    }
}

impl Heuristic for CenterOccupying
{
    fn name(&self) -> &'static str
    {
        "center"
    }

    fn score(&self, board: &Board, perspective: Player) -> f64
    {
        let grid = self.grid(board);

        let mut own_score = 0.0;
        let mut other_score = 0.0;

        for (row, col) in board.squares()
        {
            let Some(pawn) = board.at(row, col)
            else
            {
                continue;
            };

            if pawn == perspective
            {
                own_score += grid.weight(row, col);
            }
            else
            {
                other_score += grid.weight(row, col);
            }
        }

        own_score - other_score
    }
}
