use std::{
    collections::HashSet,
    error,
    fmt::Display,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;

pub const PACKET_MARKER_WIDTH: usize = 4;
pub const MESSAGE_MARKER_WIDTH: usize = 14;

#[derive(Debug)]
pub enum Error {
    InvalidWidth,
    NoMarker(usize),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidWidth => write!(f, "Marker width must be positive."),
            Error::NoMarker(width) => write!(
                f,
                "No sequence of {} distinct characters found in datastream.",
                width
            ),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}

/// Count of characters processed once the first window of `width` distinct
/// characters has been seen.
pub fn marker_end(text: &str, width: usize) -> Result<usize, Error> {
    if width == 0 {
        return Err(Error::InvalidWidth);
    }

    let chars = text.chars().collect::<Vec<_>>();
    chars
        .windows(width)
        .position(|w| w.iter().collect::<HashSet<_>>().len() == width)
        .map(|ind| ind + width)
        .ok_or(Error::NoMarker(width))
}

pub fn read_datastream<P: AsRef<Path>>(path: P) -> Result<String> {
    let text = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read given file({}).", path.as_ref().display()))?;

    Ok(text.trim().to_string())
}
