use std::time::Duration;

use clap::Parser;

use crate::prelude::*;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct DriverOptions
{
    #[arg(long, default_value_t = 5)]
    /// number of rows on the board
    pub rows: usize,

    #[arg(long, default_value_t = 6)]
    /// number of columns on the board
    pub cols: usize,

    #[arg(short, long)]
    /// depth limit for both players (basic mode)
    pub depth: Option<u32>,

    #[arg(long)]
    /// heuristic for both players (basic mode)
    pub heuristic: Option<String>,

    #[arg(short, long, default_value_t = false)]
    /// whether to prune the search with alpha-beta
    pub alpha_beta: bool,

    #[arg(long)]
    /// heuristic for White (extended mode)
    pub white_heuristic: Option<String>,

    #[arg(long)]
    /// depth limit for White (extended mode)
    pub white_depth: Option<u32>,

    #[arg(long)]
    /// heuristic for Black (extended mode)
    pub black_heuristic: Option<String>,

    #[arg(long)]
    /// depth limit for Black (extended mode)
    pub black_depth: Option<u32>,

    #[arg(short, long, default_value = "info")]
    /// lowest log level to show
    pub log_level: String,

    #[arg(short, long, default_value_t = false)]
    /// play an interactive human-vs-human game instead of an AI match
    pub interactive: bool,
}

/// One side's search configuration.
pub struct SideConfig
{
    pub depth:     u32,
    pub heuristic: Box<dyn Heuristic>,
}

impl std::fmt::Debug for SideConfig
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        f.debug_struct("SideConfig")
            .field("depth", &self.depth)
            .field("heuristic", &self.heuristic.name())
            .finish()
    }
}

impl DriverOptions
{
    /// Resolves the per-side configuration, enforcing basic or extended mode.
    ///
    /// Extended mode is entered by naming any of the four per-side options, and then
    /// requires all four. Basic mode requires `--depth` and `--heuristic`. Anything
    /// else is an incomplete configuration and stops the process before a game starts.
    pub fn sides(&self) -> Result<(SideConfig, SideConfig)>
    {
        let extended =
            self.white_heuristic.is_some() || self.white_depth.is_some() || self.black_heuristic.is_some() || self.black_depth.is_some();

        if extended
        {
            let (Some(white_name), Some(white_depth), Some(black_name), Some(black_depth)) =
                (&self.white_heuristic, self.white_depth, &self.black_heuristic, self.black_depth)
            else
            {
                let err_msg = "extended mode requires all of --white-heuristic, --white-depth, --black-heuristic and --black-depth";
                return Err(Error::new(Kind::IncompleteConfiguration, err_msg.into()));
            };

            let white = SideConfig {
                depth:     white_depth,
                heuristic: heuristics::lookup(white_name)?,
            };
            let black = SideConfig {
                depth:     black_depth,
                heuristic: heuristics::lookup(black_name)?,
            };

            return Ok((white, black));
        }

        let (Some(depth), Some(name)) = (self.depth, &self.heuristic)
        else
        {
            let err_msg = "basic mode requires --depth and --heuristic";
            return Err(Error::new(Kind::IncompleteConfiguration, err_msg.into()));
        };

        let white = SideConfig {
            depth,
            heuristic: heuristics::lookup(name)?,
        };
        let black = SideConfig {
            depth,
            heuristic: heuristics::lookup(name)?,
        };

        Ok((white, black))
    }
}

/// Plays a full AI-vs-AI match on one process.
pub struct Arena
{
    state:      GameState,
    white:      SideConfig,
    black:      SideConfig,
    alpha_beta: bool,
}

impl Arena
{
    /// Creates an arena from the cli options. Configuration is validated before any
    /// game state is built.
    pub fn new(options: &DriverOptions) -> Result<Arena>
    {
        let (white, black) = options.sides()?;

        Ok(Arena {
            state: GameState::opening(options.rows, options.cols),
            white,
            black,
            alpha_beta: options.alpha_beta,
        })
    }

    /// Runs the match to completion and returns the winner.
    pub fn run(&mut self) -> Result<Option<Player>>
    {
        let mut stats = SearchStats::new();
        let mut rounds = 0u32;
        let mut total_nodes = 0u64;
        let mut total_time = Duration::ZERO;

        while !self.state.is_terminal()
        {
            let to_move = self.state.to_move();
            let side = match to_move
            {
                | Player::White => &self.white,
                | Player::Black => &self.black,
            };

            let outcome = find_best_move(&self.state, side.depth, to_move, side.heuristic.as_ref(), self.alpha_beta, &mut stats);

            let Some(mv) = outcome.mv
            else
            {
                log::warn!("{} has no valid moves", to_move);
                break;
            };

            rounds += 1;
            total_nodes += outcome.nodes;
            total_time += outcome.elapsed;

            log::info!(
                "round {}, {} move: {}, value: {:.2}, nodes: {}, time: {:.4}s",
                rounds,
                to_move,
                mv,
                outcome.value,
                outcome.nodes,
                outcome.elapsed.as_secs_f64()
            );

            self.state = self.state.apply(&mv)?;
        }

        println!("Final board:");
        print!("{}", self.state.board().pretty(false));

        let winner = self.state.winner();
        match winner
        {
            | Some(player) => println!("\nRounds: {}, Winner: {}", rounds, player),
            | None => println!("\nRounds: {}, Winner: NONE", rounds),
        }

        log::info!("total nodes: {}, total time: {:.4}s", total_nodes, total_time.as_secs_f64());

        Ok(winner)
    }
}

/// An interactive human-vs-human session over stdin and stdout.
pub struct Console
{
    state: GameState,
}

impl Console
{
    /// Creates a console session with a fresh opening position.
    pub fn new(options: &DriverOptions) -> Console
    {
        Console {
            state: GameState::opening(options.rows, options.cols),
        }
    }

    /// Runs the session until the game ends.
    ///
    /// Recoverable input errors re-prompt without touching the game state; only
    /// fatal errors abort the session.
    pub fn run(&mut self) -> Result<Player>
    {
        while !self.state.is_terminal()
        {
            print!("{}", self.state.board().pretty(true));
            println!("{} player move eg. [A1 B2] ...", self.state.to_move());

            let next = loop
            {
                let mut line = String::new();
                if std::io::stdin().read_line(&mut line)? == 0
                {
                    return Err(Error::new(Kind::IoError, "input closed before the game ended".into()));
                }

                match self.turn(line.trim())
                {
                    | Ok(next) => break next,
                    | Err(err) if !err.fatal() =>
                    {
                        println!("{}", err);
                        continue;
                    }
                    | Err(err) => return Err(err),
                }
            };

            self.state = next;
        }

        let winner = match self.state.winner()
        {
            | Some(player) => player,
            | None => return Err(Error::new(Kind::InternalError, "the game ended without a winner".into())),
        };

        println!("Game has ended");
        println!("Winner: {}", winner);
        Ok(winner)
    }

    /// Parses and applies a single textual move.
    fn turn(&self, input: &str) -> Result<GameState>
    {
        let mv = parse_move(input, self.state.board())?;
        self.state.apply(&mv)
    }
}
