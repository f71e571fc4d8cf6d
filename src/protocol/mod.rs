//! Line-oriented command protocol for driving the solver.
//!
//! An external observer sends grid snapshots and options on stdin and reads
//! the chosen direction back as `bestmove <dir>` (or `bestmove none`).

use std::fmt;
use std::io::{self, BufRead, Write};

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::board::{
    search, Direction, DirectionError, Grid, GridError, HeuristicError, HeuristicReport,
    SearchState, StrategyError,
};

pub mod command;
pub mod logger;
pub mod options;

use command::{parse_command, Command};
use options::{parse_setoption, SolverOptions, MAX_SIZE};

/// Error type for malformed protocol commands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProtocolError {
    /// Grid notation could not be parsed
    InvalidGrid(GridError),
    /// Direction name could not be parsed
    InvalidDirection(DirectionError),
    /// Heuristic name could not be parsed
    InvalidHeuristic(HeuristicError),
    /// Strategy name could not be parsed
    InvalidStrategy(StrategyError),
    /// A command is missing a required argument
    MissingArgument { command: String },
    /// A numeric argument could not be parsed
    InvalidNumber { value: String },
    /// An option value is not one of the accepted choices
    InvalidValue { option: String, value: String },
    /// `setoption` named an option that does not exist
    UnknownOption { name: String },
    /// The requested move leaves the grid unchanged
    NoOpMove { direction: Direction },
}

impl fmt::Display for ProtocolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProtocolError::InvalidGrid(e) => write!(f, "Invalid grid: {e}"),
            ProtocolError::InvalidDirection(e) => write!(f, "Invalid direction: {e}"),
            ProtocolError::InvalidHeuristic(e) => write!(f, "Invalid heuristic: {e}"),
            ProtocolError::InvalidStrategy(e) => write!(f, "Invalid strategy: {e}"),
            ProtocolError::MissingArgument { command } => {
                write!(f, "Missing argument for '{command}'")
            }
            ProtocolError::InvalidNumber { value } => write!(f, "Invalid number '{value}'"),
            ProtocolError::InvalidValue { option, value } => {
                write!(f, "Invalid value '{value}' for option {option}")
            }
            ProtocolError::UnknownOption { name } => write!(f, "Unknown option '{name}'"),
            ProtocolError::NoOpMove { direction } => {
                write!(f, "Moving {direction} does not change the grid")
            }
        }
    }
}

impl std::error::Error for ProtocolError {}

impl From<GridError> for ProtocolError {
    fn from(e: GridError) -> Self {
        ProtocolError::InvalidGrid(e)
    }
}

impl From<DirectionError> for ProtocolError {
    fn from(e: DirectionError) -> Self {
        ProtocolError::InvalidDirection(e)
    }
}

impl From<HeuristicError> for ProtocolError {
    fn from(e: HeuristicError) -> Self {
        ProtocolError::InvalidHeuristic(e)
    }
}

impl From<StrategyError> for ProtocolError {
    fn from(e: StrategyError) -> Self {
        ProtocolError::InvalidStrategy(e)
    }
}

/// Parse a `position` command into a grid.
///
/// Accepts `position <notation>` and `position empty [size]`, with `size`
/// between 1 and `MAX_SIZE`.
pub fn try_parse_position_command(parts: &[&str], default_size: usize) -> Result<Grid, ProtocolError> {
    match parts.get(1) {
        None => Err(ProtocolError::MissingArgument {
            command: "position".to_string(),
        }),
        Some(&"empty") => {
            let size = match parts.get(2) {
                Some(raw) => raw.parse::<usize>().map_err(|_| ProtocolError::InvalidNumber {
                    value: (*raw).to_string(),
                })?,
                None => default_size,
            };
            if size == 0 {
                return Err(GridError::Empty.into());
            }
            if size > MAX_SIZE {
                return Err(ProtocolError::InvalidValue {
                    option: "size".to_string(),
                    value: size.to_string(),
                });
            }
            Ok(Grid::new(size))
        }
        // Notation may be split by spaces after commas; rejoin before parsing.
        Some(_) => Ok(Grid::try_from_notation(&parts[1..].join(""))?),
    }
}

/// Solver state for one protocol connection.
pub struct Session {
    pub grid: Grid,
    pub options: SolverOptions,
    pub state: SearchState,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    #[must_use]
    pub fn new() -> Self {
        let options = SolverOptions::default();
        Session {
            grid: Grid::new(options.size),
            options,
            state: SearchState::default(),
        }
    }

    /// Run the configured search on the current grid.
    pub fn best_move(&mut self) -> Option<Direction> {
        let config = self.options.search_config();
        search(&self.grid, &mut self.state, &config, &self.options.heuristic)
    }

    /// Execute one command. Returns `Ok(false)` when the session should end.
    pub fn execute<W: Write>(&mut self, command: Command, out: &mut W) -> io::Result<bool> {
        match self.try_execute(command, out) {
            Ok(keep_going) => Ok(keep_going),
            Err(CommandFailure::Io(e)) => Err(e),
            Err(CommandFailure::Protocol(e)) => {
                writeln!(out, "info string error: {e}")?;
                Ok(true)
            }
        }
    }

    fn try_execute<W: Write>(&mut self, command: Command, out: &mut W) -> Result<bool, CommandFailure> {
        match command {
            Command::IsReady => writeln!(out, "readyok")?,
            Command::Options => self.options.print(out)?,
            Command::Position(parts) => {
                let parts: Vec<&str> = parts.iter().map(String::as_str).collect();
                self.grid = try_parse_position_command(&parts, self.options.size)?;
            }
            Command::SetOption(parts) => {
                let parts: Vec<&str> = parts.iter().map(String::as_str).collect();
                let (name, value) =
                    parse_setoption(&parts).ok_or_else(|| ProtocolError::MissingArgument {
                        command: "setoption".to_string(),
                    })?;
                self.options.apply_setoption(&name, value.as_deref())?;
            }
            Command::Go => {
                let best = self.best_move();
                writeln!(
                    out,
                    "info string depth {} nodes {}",
                    self.state.stats.completed_depth, self.state.stats.nodes
                )?;
                writeln!(out, "bestmove {}", Direction::format_optional(best))?;
            }
            Command::Eval => {
                for (label, value) in HeuristicReport::new(&self.grid).lines() {
                    writeln!(out, "info string {label}: {value}")?;
                }
            }
            Command::Display => writeln!(out, "{}", self.grid)?,
            Command::Move(arg) => {
                let raw = arg.ok_or_else(|| ProtocolError::MissingArgument {
                    command: "move".to_string(),
                })?;
                let direction: Direction = raw.parse().map_err(ProtocolError::from)?;
                let next = self.grid.slide(direction);
                if next == self.grid {
                    return Err(ProtocolError::NoOpMove { direction }.into());
                }
                self.grid = next;
            }
            Command::SelfPlay(parts) => self.self_play(&parts, out)?,
            Command::Debug(arg) => {
                logger::set_debug(!matches!(arg.as_deref(), Some("off")));
            }
            Command::Quit => return Ok(false),
            Command::Unknown(line) => writeln!(out, "info string unknown command: {line}")?,
        }
        Ok(true)
    }

    /// `selfplay <moves> [seed]`: play against random spawns from the current grid.
    fn self_play<W: Write>(&mut self, parts: &[String], out: &mut W) -> Result<(), CommandFailure> {
        let moves = parts
            .get(1)
            .ok_or_else(|| ProtocolError::MissingArgument {
                command: "selfplay".to_string(),
            })?;
        let moves: u32 = moves.parse().map_err(|_| ProtocolError::InvalidNumber {
            value: moves.clone(),
        })?;
        let mut rng = match parts.get(2) {
            Some(raw) => StdRng::seed_from_u64(raw.parse().map_err(|_| {
                ProtocolError::InvalidNumber {
                    value: raw.clone(),
                }
            })?),
            None => StdRng::from_entropy(),
        };

        if self.grid.max_value().is_none() {
            self.grid.spawn_random_tile(&mut rng);
            self.grid.spawn_random_tile(&mut rng);
        }

        let mut played = 0;
        while played < moves {
            let Some(direction) = self.best_move() else {
                break;
            };
            self.grid = self.grid.slide(direction);
            self.grid.spawn_random_tile(&mut rng);
            played += 1;
            writeln!(out, "info string move {played} {direction}")?;
        }

        writeln!(out, "{}", self.grid)?;
        writeln!(
            out,
            "info string selfplay moves {played} max {}",
            self.grid.max_value().unwrap_or(0)
        )?;
        Ok(())
    }
}

enum CommandFailure {
    Io(io::Error),
    Protocol(ProtocolError),
}

impl From<io::Error> for CommandFailure {
    fn from(e: io::Error) -> Self {
        CommandFailure::Io(e)
    }
}

impl From<ProtocolError> for CommandFailure {
    fn from(e: ProtocolError) -> Self {
        CommandFailure::Protocol(e)
    }
}

/// Read commands from `input` until `quit` or end of input.
pub fn run_loop<R: BufRead, W: Write>(input: R, mut out: W) -> io::Result<()> {
    let mut session = Session::new();
    for line in input.lines() {
        let line = line?;
        let Some(command) = parse_command(&line) else {
            continue;
        };
        let keep_going = session.execute(command, &mut out)?;
        out.flush()?;
        if !keep_going {
            break;
        }
    }
    Ok(())
}

/// Run the protocol on stdin/stdout.
pub fn run() -> io::Result<()> {
    logger::init();
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_loop(stdin.lock(), stdout.lock())
}
