//! Command-line and environment configuration.

use crate::constants::{LOG_FILE_NAME, SCORES_DIR_ENV};
use crate::utils::persistence::{data_dir, default_scores_dir};
use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub const USAGE: &str = "\
Bird Games - arcade minigames in your terminal

Usage: bird-games [options]

Options:
  --scores-dir <DIR>  Directory holding the best-score files
                      (default: ~/.bird-games/best_scores, or $BIRD_GAMES_SCORES_DIR)
  --log-file <PATH>   Log file (default: ~/.bird-games/bird-games.log)
  --version, -v       Show version information
  --help, -h          Show this help message";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Unknown argument: {0}")]
    UnknownArgument(String),
    #[error("Missing value for {0}")]
    MissingValue(&'static str),
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Resolved runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub scores_dir: PathBuf,
    pub log_file: PathBuf,
}

/// What the binary was asked to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Run(Config),
    Help,
    Version,
}

/// Options given on the command line, before defaults are filled in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliArgs {
    pub scores_dir: Option<PathBuf>,
    pub log_file: Option<PathBuf>,
    pub help: bool,
    pub version: bool,
}

/// Parse arguments (without the program name).
pub fn parse_args<I>(args: I) -> Result<CliArgs, ConfigError>
where
    I: IntoIterator<Item = String>,
{
    let mut cli = CliArgs::default();
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--help" | "-h" => cli.help = true,
            "--version" | "-v" => cli.version = true,
            "--scores-dir" => {
                let value = args.next().ok_or(ConfigError::MissingValue("--scores-dir"))?;
                cli.scores_dir = Some(PathBuf::from(value));
            }
            "--log-file" => {
                let value = args.next().ok_or(ConfigError::MissingValue("--log-file"))?;
                cli.log_file = Some(PathBuf::from(value));
            }
            _ => return Err(ConfigError::UnknownArgument(arg)),
        }
    }
    Ok(cli)
}

/// Turn process arguments and environment into a command.
///
/// The flag beats `BIRD_GAMES_SCORES_DIR`, which beats the default.
pub fn command_from<I>(args: I, env_scores_dir: Option<String>) -> Result<Command, ConfigError>
where
    I: IntoIterator<Item = String>,
{
    let cli = parse_args(args)?;
    if cli.help {
        return Ok(Command::Help);
    }
    if cli.version {
        return Ok(Command::Version);
    }

    let scores_dir = match cli.scores_dir {
        Some(dir) => dir,
        None => match env_scores_dir.filter(|s| !s.is_empty()) {
            Some(dir) => PathBuf::from(dir),
            None => default_scores_dir()?,
        },
    };
    let log_file = match cli.log_file {
        Some(path) => path,
        None => data_dir()?.join(LOG_FILE_NAME),
    };

    Ok(Command::Run(Config {
        scores_dir,
        log_file,
    }))
}

/// Read the real process arguments and environment.
pub fn command_from_env() -> Result<Command, ConfigError> {
    command_from(std::env::args().skip(1), std::env::var(SCORES_DIR_ENV).ok())
}
