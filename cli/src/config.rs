use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use mazerun_core::{EndpointPolicy, Position};
use serde::Deserialize;

use crate::args::{Args, Mode};

/// Settings read from a TOML file. Every key is optional.
///
/// ```toml
/// mode = "console"
/// map = "mazes/small.txt"
/// start = [0, 0]
/// finish = [5, 5]
/// seed = 42
/// distinct_endpoints = true
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub mode: Option<Mode>,
    pub map: Option<PathBuf>,
    pub rows: Option<Vec<String>>,
    pub start: Option<Position>,
    pub finish: Option<Position>,
    pub seed: Option<u64>,
    pub distinct_endpoints: Option<bool>,
    pub log_file: Option<PathBuf>,
}

impl FileConfig {
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).context("Invalid config file")
    }

    /// Reads a config file. Relative paths inside it are taken relative to
    /// the file's own directory.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Could not read config file {}", path.display()))?;
        let mut config =
            Self::from_toml(&text).with_context(|| format!("While loading {}", path.display()))?;

        if let Some(base) = path.parent() {
            config.map = config.map.map(|map| base.join(map));
            config.log_file = config.log_file.map(|log_file| base.join(log_file));
        }
        log::debug!("Loaded config from {}: {config:?}", path.display());
        Ok(config)
    }
}

/// Where the maze text comes from.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum MapSource {
    #[default]
    Builtin,
    File(PathBuf),
    Rows(Vec<String>),
}

impl fmt::Display for MapSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Builtin => f.write_str("built-in maze"),
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Rows(rows) => write!(f, "{} inline rows", rows.len()),
        }
    }
}

/// Effective settings after merging flags over the config file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    pub mode: Mode,
    pub map: MapSource,
    pub start: Option<Position>,
    pub finish: Option<Position>,
    pub seed: Option<u64>,
    pub policy: EndpointPolicy,
    pub log_file: Option<PathBuf>,
}

impl Settings {
    pub fn resolve(args: &Args, file: FileConfig) -> Self {
        let map = if let Some(path) = &args.map {
            MapSource::File(path.clone())
        } else if !args.rows.is_empty() {
            MapSource::Rows(args.rows.clone())
        } else if let Some(path) = file.map {
            MapSource::File(path)
        } else if let Some(rows) = file.rows {
            MapSource::Rows(rows)
        } else {
            MapSource::Builtin
        };

        let distinct = args.distinct_endpoints || file.distinct_endpoints.unwrap_or(false);
        let policy = if distinct {
            EndpointPolicy::Distinct
        } else {
            EndpointPolicy::Independent
        };

        Self {
            mode: args.mode.or(file.mode).unwrap_or_default(),
            map,
            start: args.start.or(file.start),
            finish: args.finish.or(file.finish),
            seed: args.seed.or(file.seed),
            policy,
            log_file: args.log_file.clone().or(file.log_file),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn args(extra: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("mazerun").chain(extra.iter().copied())).unwrap()
    }

    #[test]
    fn parses_every_key() {
        let config = FileConfig::from_toml(
            r#"
            mode = "graphical"
            rows = ["  x", "x  "]
            start = [0, 1]
            finish = [1, 2]
            seed = 7
            distinct_endpoints = true
            "#,
        )
        .unwrap();

        assert_eq!(config.mode, Some(Mode::Terminal));
        assert_eq!(config.rows, Some(vec!["  x".to_owned(), "x  ".to_owned()]));
        assert_eq!(config.start, Some((0, 1)));
        assert_eq!(config.finish, Some((1, 2)));
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.distinct_endpoints, Some(true));
    }

    #[test]
    fn rejects_unknown_keys_and_bad_pairs() {
        assert!(FileConfig::from_toml("colour = true").is_err());
        assert!(FileConfig::from_toml("start = [1]").is_err());
        assert!(FileConfig::from_toml("start = [-1, 0]").is_err());
    }

    #[test]
    fn defaults_without_flags_or_file() {
        let settings = Settings::resolve(&args(&[]), FileConfig::default());

        assert_eq!(settings.mode, Mode::Console);
        assert_eq!(settings.map, MapSource::Builtin);
        assert_eq!(settings.start, None);
        assert_eq!(settings.policy, EndpointPolicy::Independent);
    }

    #[test]
    fn flags_override_file() {
        let file = FileConfig {
            mode: Some(Mode::Terminal),
            map: Some(PathBuf::from("from_file.txt")),
            start: Some((1, 1)),
            finish: Some((2, 2)),
            seed: Some(1),
            ..FileConfig::default()
        };
        let settings = Settings::resolve(
            &args(&["--row", "   ", "--start", "0,0", "--seed", "5", "--mode", "console"]),
            file,
        );

        assert_eq!(settings.mode, Mode::Console);
        assert_eq!(settings.map, MapSource::Rows(vec!["   ".to_owned()]));
        assert_eq!(settings.start, Some((0, 0)));
        assert_eq!(settings.finish, Some((2, 2)));
        assert_eq!(settings.seed, Some(5));
    }

    #[test]
    fn either_side_can_ask_for_distinct_endpoints() {
        let file = FileConfig {
            distinct_endpoints: Some(true),
            ..FileConfig::default()
        };
        assert_eq!(Settings::resolve(&args(&[]), file).policy, EndpointPolicy::Distinct);

        let settings = Settings::resolve(&args(&["--distinct-endpoints"]), FileConfig::default());
        assert_eq!(settings.policy, EndpointPolicy::Distinct);
    }

    #[test]
    fn load_resolves_paths_next_to_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mazerun.toml");
        fs::write(&path, "map = \"maze.txt\"\n").unwrap();

        let config = FileConfig::load(&path).unwrap();
        assert_eq!(config.map, Some(dir.path().join("maze.txt")));
    }

    #[test]
    fn load_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = FileConfig::load(&dir.path().join("missing.toml")).unwrap_err();
        assert!(err.to_string().contains("Could not read config file"));
    }
}
