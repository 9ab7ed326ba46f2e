use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use mazerun_core::Position;
use serde::Deserialize;

#[derive(Parser, Debug)]
#[command(name = "mazerun", version, about = "Walk a text maze from start to finish", long_about = None)]
pub struct Args {
    /// What log level to use
    #[command(flatten)]
    pub verbose: Verbosity<WarnLevel>,

    /// TOML file with default settings, flags take precedence
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// How the maze is shown and played
    #[arg(short, long, value_enum)]
    pub mode: Option<Mode>,

    /// Read the maze from a file, `x` is a wall and anything else is open
    #[arg(long, value_name = "PATH", conflicts_with = "rows")]
    pub map: Option<PathBuf>,

    /// Inline maze row, repeat once per row
    #[arg(long = "row", value_name = "TEXT")]
    pub rows: Vec<String>,

    /// Preferred start cell, ignored unless it is open
    #[arg(long, value_name = "ROW,COL", value_parser = parse_position)]
    pub start: Option<Position>,

    /// Preferred finish cell, ignored unless it is open
    #[arg(long, value_name = "ROW,COL", value_parser = parse_position)]
    pub finish: Option<Position>,

    /// Force a placement seed instead of random
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Never place start and finish on the same cell
    #[arg(long)]
    pub distinct_endpoints: bool,

    /// Write logs to this file instead of stderr
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Line-based prompts on stdin/stdout
    #[default]
    Console,
    /// Full-screen view driven by single key presses
    #[value(alias = "graphical")]
    #[serde(alias = "graphical")]
    Terminal,
}

/// Parses `ROW,COL` into a position.
pub fn parse_position(text: &str) -> Result<Position, String> {
    let (row, col) = text
        .split_once(',')
        .ok_or_else(|| format!("expected ROW,COL but got {text:?}"))?;
    let parse = |part: &str| {
        part.trim()
            .parse::<usize>()
            .map_err(|err| format!("invalid coordinate {part:?}: {err}"))
    };
    Ok((parse(row)?, parse(col)?))
}
