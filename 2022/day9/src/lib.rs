use std::{
    collections::HashSet,
    error,
    fmt::Display,
    fs::File,
    io::{BufRead, BufReader},
    iter,
    ops::{Add, Sub},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, trace, Level};

#[derive(Debug)]
pub enum Error {
    InvalidMotionText(String),
    InvalidDirection(String),
    InvalidStepCount(String),
    InvalidRopeLength(usize),
    InvalidMove(Vector),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidMotionText(s) => write!(
                f,
                "Invalid text({}) for motion, expect \"<direction> <count>\".",
                s
            ),
            Error::InvalidDirection(s) => write!(
                f,
                "Invalid direction({}), expect one of U, D, L and R.",
                s
            ),
            Error::InvalidStepCount(s) => write!(
                f,
                "Invalid step count({}), expect a positive integer.",
                s
            ),
            Error::InvalidRopeLength(n) => {
                write!(f, "Invalid rope length({}), expect at least one knot.", n)
            }
            Error::InvalidMove(v) => write!(
                f,
                "Invalid head move{}, expect a unit step in one of four directions.",
                v
            ),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
    /// Print simulation logs to stderr, repeat for per-tick details
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

pub fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => return,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .init();
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub r: i64,
    pub c: i64,
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.r, self.c)
    }
}

impl Position {
    pub const ORIGIN: Position = Position { r: 0, c: 0 };

    pub fn new(r: i64, c: i64) -> Self {
        Self { r, c }
    }

    pub fn chebyshev_dist(&self, other: &Position) -> u64 {
        self.r.abs_diff(other.r).max(self.c.abs_diff(other.c))
    }
}

impl Add<Vector> for Position {
    type Output = Position;

    fn add(self, rhs: Vector) -> Self::Output {
        Position::new(self.r + rhs.r, self.c + rhs.c)
    }
}

impl Sub for Position {
    type Output = Vector;

    fn sub(self, rhs: Self) -> Self::Output {
        Vector::new(self.r - rhs.r, self.c - rhs.c)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Vector {
    pub r: i64,
    pub c: i64,
}

impl Display for Vector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.r, self.c)
    }
}

impl Vector {
    pub fn new(r: i64, c: i64) -> Self {
        Self { r, c }
    }

    pub fn signum(&self) -> Vector {
        Vector::new(self.r.signum(), self.c.signum())
    }

    pub fn is_unit_step(&self) -> bool {
        self.r.abs() + self.c.abs() == 1
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl TryFrom<&str> for Direction {
    type Error = Error;

    fn try_from(value: &str) -> std::result::Result<Self, Self::Error> {
        match value {
            "U" => Ok(Direction::Up),
            "D" => Ok(Direction::Down),
            "L" => Ok(Direction::Left),
            "R" => Ok(Direction::Right),
            other => Err(Error::InvalidDirection(other.to_string())),
        }
    }
}

impl Direction {
    pub fn step(&self) -> Vector {
        match self {
            Direction::Up => Vector::new(-1, 0),
            Direction::Down => Vector::new(1, 0),
            Direction::Left => Vector::new(0, -1),
            Direction::Right => Vector::new(0, 1),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Motion {
    dir: Direction,
    count: usize,
}

impl TryFrom<&str> for Motion {
    type Error = Error;

    fn try_from(value: &str) -> std::result::Result<Self, Self::Error> {
        static MOTION_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\S+)\s+(\S+)$").unwrap());

        let caps = MOTION_PATTERN
            .captures(value.trim())
            .ok_or(Error::InvalidMotionText(value.to_string()))?;
        let dir = Direction::try_from(&caps[1])?;
        let count = caps[2]
            .parse::<usize>()
            .ok()
            .filter(|n| *n > 0)
            .ok_or(Error::InvalidStepCount(caps[2].to_string()))?;

        Ok(Motion { dir, count })
    }
}

impl Motion {
    pub fn new(dir: Direction, count: usize) -> Self {
        Self { dir, count }
    }

    pub fn dir(&self) -> Direction {
        self.dir
    }

    pub fn count(&self) -> usize {
        self.count
    }
}

/// Expands motions into single-step head moves.
pub fn head_moves(motions: &[Motion]) -> impl Iterator<Item = Vector> + '_ {
    motions
        .iter()
        .flat_map(|m| iter::repeat(m.dir.step()).take(m.count))
}

#[derive(Debug, Clone)]
pub struct Rope {
    knots: Vec<Position>,
}

impl Rope {
    pub fn new(knot_n: usize) -> Result<Self, Error> {
        if knot_n == 0 {
            return Err(Error::InvalidRopeLength(knot_n));
        }

        Ok(Self {
            knots: vec![Position::ORIGIN; knot_n],
        })
    }

    /// Moves the head one step, then lets every following knot catch up in chain order.
    pub fn step(&mut self, mv: Vector) -> Result<(), Error> {
        if !mv.is_unit_step() {
            return Err(Error::InvalidMove(mv));
        }

        self.knots[0] = self.knots[0] + mv;
        for ind in 1..self.knots.len() {
            let delta = self.knots[ind - 1] - self.knots[ind];
            if delta.r.abs() <= 1 && delta.c.abs() <= 1 {
                continue;
            }

            self.knots[ind] = self.knots[ind] + delta.signum();
        }

        Ok(())
    }

    pub fn knots(&self) -> &[Position] {
        &self.knots
    }

    pub fn head(&self) -> Position {
        self.knots[0]
    }

    pub fn tail(&self) -> Position {
        self.knots[self.knots.len() - 1]
    }
}

/// Counts distinct positions the tail visits, origin included. For a single knot
/// rope the head is its own tail.
pub fn simulate<I>(moves: I, rope_length: usize) -> Result<usize, Error>
where
    I: IntoIterator<Item = Vector>,
{
    let mut rope = Rope::new(rope_length)?;
    let mut visited = HashSet::from([rope.tail()]);
    debug!(knot_n = rope_length, "Start simulating rope.");
    for (tick, mv) in moves.into_iter().enumerate() {
        rope.step(mv)?;
        trace!(tick, head = %rope.head(), tail = %rope.tail());
        visited.insert(rope.tail());
    }
    debug!(visited_n = visited.len(), "Finished simulating rope.");

    Ok(visited.len())
}

pub fn read_motions<P: AsRef<Path>>(path: P) -> Result<Vec<Motion>> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open given file({}).", path.as_ref().display()))?;
    let reader = BufReader::new(file);
    reader
        .lines()
        .enumerate()
        .filter(|(_, line)| line.as_ref().map_or(true, |s| !s.trim().is_empty()))
        .map(|(ind, line)| {
            line.with_context(|| {
                format!(
                    "Failed to read line {} in given file({}).",
                    ind + 1,
                    path.as_ref().display()
                )
            })
            .and_then(|s| {
                Motion::try_from(s.as_str()).with_context(|| {
                    format!(
                        "Failed to read motion from line {} in given file({}).",
                        ind + 1,
                        path.as_ref().display()
                    )
                })
            })
        })
        .collect()
}
