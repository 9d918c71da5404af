//! Command-line arguments, runtime settings and log setup for the binary.

use std::{
    fs::File,
    path::{Path, PathBuf},
    sync::Mutex,
    time::Duration,
};

use clap::Parser;
use color_eyre::eyre::{eyre, Result};
use tracing_subscriber::EnvFilter;

use crate::{error::MazeError, raster::MAX_SIDE};

/// Default number of columns, matching the classic 27 by 14 board.
pub(crate) const DEFAULT_WIDTH: usize = 27;

/// Default number of rows.
pub(crate) const DEFAULT_HEIGHT: usize = 14;

/// Default delay between two revealed cells, in milliseconds.
pub(crate) const DEFAULT_TICK_MS: u64 = 60;

/// Command-line arguments of the labyrintree binary.
#[derive(Debug, Clone, Parser)]
#[command(version, about)]
pub struct Args {
    /// Number of columns of the maze.
    #[arg(short = 'W', long, default_value_t = DEFAULT_WIDTH)]
    pub width: usize,
    /// Number of rows of the maze.
    #[arg(short = 'H', long, default_value_t = DEFAULT_HEIGHT)]
    pub height: usize,
    /// Seed for the edge weights; a random one is drawn when omitted.
    #[arg(short, long)]
    pub seed: Option<u64>,
    /// Delay between two revealed cells of a path, in milliseconds.
    #[arg(long, default_value_t = DEFAULT_TICK_MS)]
    pub tick_ms: u64,
    /// File receiving log output; logging is off when omitted.
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

/// Settings the application runs with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    /// Number of columns of the first maze.
    pub width: usize,
    /// Number of rows of the first maze.
    pub height: usize,
    /// Fixed seed of the first maze, if any.
    pub seed: Option<u64>,
    /// Delay between two revealed cells of a path.
    pub tick: Duration,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            seed: None,
            tick: Duration::from_millis(DEFAULT_TICK_MS),
        }
    }
}

impl Settings {
    /// Checks that the configured size describes at least one cell and fits on the game board.
    ///
    /// # Errors
    ///
    /// This function returns [`MazeError::InvalidDimensions`] when either side is zero or longer
    /// than the board can draw.
    pub const fn validate(&self) -> Result<(), MazeError> {
        check_size(self.width, self.height)
    }
}

/// Checks that a `width` by `height` maze has cells and can be drawn on the game board.
///
/// Both sides must lie between one and [`MAX_SIDE`] cells.
///
/// # Errors
///
/// This function returns [`MazeError::InvalidDimensions`] for any other size.
pub(crate) const fn check_size(width: usize, height: usize) -> Result<(), MazeError> {
    if width == 0 || height == 0 || width > MAX_SIDE || height > MAX_SIDE {
        return Err(MazeError::InvalidDimensions { width, height });
    }

    Ok(())
}

impl From<&Args> for Settings {
    fn from(args: &Args) -> Self {
        Self {
            width: args.width,
            height: args.height,
            seed: args.seed,
            tick: Duration::from_millis(args.tick_ms),
        }
    }
}

/// Installs a log subscriber writing to `path`, or does nothing when no path is given.
///
/// The terminal belongs to the user interface, so logs only ever go to a file. The level filter
/// is read from `RUST_LOG` and defaults to `info`.
///
/// # Errors
///
/// This function may return errors if:
/// - The log file cannot be created
/// - A global subscriber was already installed
pub fn init_logging(path: Option<&Path>) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };

    let file = File::create(path)?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|err| eyre!("failed to install log subscriber: {err}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_defaults() {
        let args = Args::try_parse_from(["labyrintree"]).expect("defaults should parse");

        assert_eq!(args.width, DEFAULT_WIDTH);
        assert_eq!(args.height, DEFAULT_HEIGHT);
        assert_eq!(args.seed, None);
        assert_eq!(args.tick_ms, DEFAULT_TICK_MS);
        assert!(args.log_file.is_none());
        assert_eq!(Settings::from(&args), Settings::default());
    }

    #[test]
    fn test_args_overrides() {
        let args = Args::try_parse_from([
            "labyrintree",
            "-W",
            "10",
            "-H",
            "5",
            "--seed",
            "42",
            "--tick-ms",
            "15",
        ])
        .expect("arguments should parse");
        let settings = Settings::from(&args);

        assert_eq!(settings.width, 10);
        assert_eq!(settings.height, 5);
        assert_eq!(settings.seed, Some(42));
        assert_eq!(settings.tick, Duration::from_millis(15));
    }

    #[test]
    fn test_args_reject_negative_sizes() {
        assert!(Args::try_parse_from(["labyrintree", "--width", "-3"]).is_err());
        assert!(Args::try_parse_from(["labyrintree", "--height", "tall"]).is_err());
    }

    #[test]
    fn test_validate_rejects_empty_sizes() {
        let settings = Settings {
            width: 0,
            ..Settings::default()
        };

        assert_eq!(
            settings.validate(),
            Err(MazeError::InvalidDimensions {
                width: 0,
                height: DEFAULT_HEIGHT
            })
        );
        assert!(Settings::default().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_sizes_too_large_to_draw() {
        let widest = Settings {
            width: MAX_SIDE,
            height: 1,
            ..Settings::default()
        };
        assert!(widest.validate().is_ok());

        let too_wide = Settings {
            width: MAX_SIDE + 1,
            ..widest
        };
        assert_eq!(
            too_wide.validate(),
            Err(MazeError::InvalidDimensions {
                width: MAX_SIDE + 1,
                height: 1
            })
        );

        let too_tall = Settings {
            width: 4,
            height: 40_000,
            ..Settings::default()
        };
        assert!(too_tall.validate().is_err());
        assert!(check_size(usize::MAX, usize::MAX).is_err());
    }

    #[test]
    fn test_init_logging_without_path() {
        assert!(init_logging(None).is_ok());
    }
}
