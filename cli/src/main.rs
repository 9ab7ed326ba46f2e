use std::fs::File;

use anyhow::{Context, Result};
use clap::Parser;
use log::LevelFilter;

use mazerun_cli::args::{Args, Mode};
use mazerun_cli::bootstrap::build_engine;
use mazerun_cli::config::{FileConfig, Settings};
use mazerun_cli::present::{ConsolePresenter, TerminalPresenter};
use mazerun_cli::session;

fn main() -> Result<()> {
    let args = Args::parse();
    let file = match &args.config {
        Some(path) => FileConfig::load(path)?,
        None => FileConfig::default(),
    };
    let settings = Settings::resolve(&args, file);
    init_logging(args.verbose.log_level_filter(), &settings)?;
    log::debug!("Settings: {settings:?}");

    let mut engine = build_engine(&settings)?;
    match settings.mode {
        Mode::Console => session::run(&mut engine, &mut ConsolePresenter::stdio()),
        Mode::Terminal => {
            let mut presenter = TerminalPresenter::stdout()?;
            session::run(&mut engine, &mut presenter)
        }
    }
}

/// Logs go to `log_file` when given. Otherwise they go to stderr, except in
/// terminal mode where stderr shares the screen and no logger is installed.
fn init_logging(level: LevelFilter, settings: &Settings) -> Result<()> {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(level).parse_default_env();

    if let Some(path) = &settings.log_file {
        let file = File::create(path)
            .with_context(|| format!("Could not create log file {}", path.display()))?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    } else if settings.mode == Mode::Terminal {
        return Ok(());
    }

    builder.try_init().context("Error initializing logger")
}
