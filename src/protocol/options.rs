use std::io::{self, Write};
use std::time::Duration;

use super::ProtocolError;
use crate::board::{HeuristicKind, SearchConfig, Strategy};

pub const DEFAULT_DEPTH: u32 = 3;
pub const DEFAULT_TIME_MS: u64 = 100;
pub const DEFAULT_SIZE: usize = 4;
/// Largest grid side accepted from the front-end.
pub const MAX_SIZE: usize = 16;

/// Solver settings adjustable through `setoption`.
#[derive(Clone, Debug, PartialEq)]
pub struct SolverOptions {
    pub max_depth: u32,
    pub time_ms: u64,
    pub heuristic: HeuristicKind,
    pub strategy: Strategy,
    pub size: usize,
}

impl Default for SolverOptions {
    fn default() -> Self {
        SolverOptions {
            max_depth: DEFAULT_DEPTH,
            time_ms: DEFAULT_TIME_MS,
            heuristic: HeuristicKind::default(),
            strategy: Strategy::default(),
            size: DEFAULT_SIZE,
        }
    }
}

impl SolverOptions {
    #[must_use]
    pub fn search_config(&self) -> SearchConfig {
        SearchConfig {
            strategy: self.strategy,
            max_depth: self.max_depth,
            time_budget: Duration::from_millis(self.time_ms),
        }
    }

    pub fn print<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(
            out,
            "option name Depth type spin default {} min 1 max 16",
            self.max_depth
        )?;
        writeln!(
            out,
            "option name Time type spin default {} min 1 max 60000",
            self.time_ms
        )?;
        let heuristics = HeuristicKind::ALL
            .iter()
            .map(|kind| format!("var {kind}"))
            .collect::<Vec<_>>()
            .join(" ");
        writeln!(
            out,
            "option name Heuristic type combo default {} {heuristics}",
            self.heuristic
        )?;
        writeln!(
            out,
            "option name Strategy type combo default {} var threshold var timed",
            self.strategy
        )?;
        writeln!(
            out,
            "option name Size type spin default {} min 1 max {MAX_SIZE}",
            self.size
        )?;
        writeln!(out, "optionsok")
    }

    pub fn apply_setoption(&mut self, name: &str, value: Option<&str>) -> Result<(), ProtocolError> {
        let normalized = name.trim().to_ascii_lowercase();
        let value = value.map(str::trim).ok_or_else(|| ProtocolError::MissingArgument {
            command: format!("setoption name {name}"),
        })?;

        match normalized.as_str() {
            "depth" => self.max_depth = parse_number::<u32>(value)?.clamp(1, 16),
            "time" => self.time_ms = parse_number::<u64>(value)?.clamp(1, 60_000),
            "heuristic" => self.heuristic = value.parse()?,
            "strategy" => self.strategy = value.parse()?,
            "size" => self.size = parse_number::<usize>(value)?.clamp(1, MAX_SIZE),
            _ => {
                return Err(ProtocolError::UnknownOption {
                    name: name.to_string(),
                })
            }
        }
        Ok(())
    }
}

fn parse_number<T: std::str::FromStr>(value: &str) -> Result<T, ProtocolError> {
    value.parse::<T>().map_err(|_| ProtocolError::InvalidNumber {
        value: value.to_string(),
    })
}

/// Split `setoption name <Name> value <Value>` into its name and value.
///
/// Multi-word names and values are joined with single spaces. The name is
/// matched against Depth, Time, Heuristic, Strategy and Size by
/// `SolverOptions::apply_setoption`. Returns `None` without a name.
#[must_use]
pub fn parse_setoption(parts: &[&str]) -> Option<(String, Option<String>)> {
    if parts.is_empty() || parts[0] != "setoption" {
        return None;
    }

    let mut name_parts: Vec<&str> = Vec::new();
    let mut value_parts: Vec<&str> = Vec::new();
    let mut mode = "";

    for part in parts.iter().skip(1) {
        match *part {
            "name" => mode = "name",
            "value" => mode = "value",
            _ => match mode {
                "name" => name_parts.push(part),
                "value" => value_parts.push(part),
                _ => {}
            },
        }
    }

    if name_parts.is_empty() {
        return None;
    }

    let name = name_parts.join(" ");
    let value = if value_parts.is_empty() {
        None
    } else {
        Some(value_parts.join(" "))
    };

    Some((name, value))
}
