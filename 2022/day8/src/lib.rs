use std::{
    error,
    fmt::Display,
    fs::File,
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;

#[derive(Debug)]
pub enum Error {
    InconsistentRow(usize, usize),
    InvalidHeight(char),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InconsistentRow(expect_col_n, this_col_n) => write!(
                f,
                "Expect {} tree(s) in each row, given {}.",
                expect_col_n, this_col_n
            ),
            Error::InvalidHeight(c) => {
                write!(f, "Invalid character({}) for tree height, expect a digit.", c)
            }
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}

#[derive(Debug, Clone, Copy)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    pub fn all_dirs() -> &'static [Direction] {
        static ALL_DIRECTIONS: [Direction; 4] = [
            Direction::Up,
            Direction::Right,
            Direction::Down,
            Direction::Left,
        ];

        &ALL_DIRECTIONS
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub r: usize,
    pub c: usize,
}

impl Position {
    pub fn new(r: usize, c: usize) -> Self {
        Self { r, c }
    }
}

#[derive(Debug)]
pub struct Forest {
    heights: Vec<u8>,
    row_n: usize,
    col_n: usize,
}

impl Forest {
    pub fn row_n(&self) -> usize {
        self.row_n
    }

    pub fn col_n(&self) -> usize {
        self.col_n
    }

    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.row_n).flat_map(move |r| (0..self.col_n).map(move |c| Position::new(r, c)))
    }

    pub fn height(&self, pos: &Position) -> Option<u8> {
        self.pos_to_ind(pos).map(|ind| self.heights[ind])
    }

    /// Whether every tree between `pos` and the edge in `dir` is shorter.
    pub fn is_visible_from(&self, pos: &Position, dir: Direction) -> bool {
        match self.height(pos) {
            Some(height) => self.line_of_sight(pos, dir).all(|h| h < height),
            None => false,
        }
    }

    pub fn is_visible(&self, pos: &Position) -> bool {
        Direction::all_dirs()
            .iter()
            .any(|dir| self.is_visible_from(pos, *dir))
    }

    pub fn visible_count(&self) -> usize {
        self.positions().filter(|pos| self.is_visible(pos)).count()
    }

    /// Trees seen from `pos` looking in `dir`, stopping at the first one not shorter.
    pub fn viewing_distance(&self, pos: &Position, dir: Direction) -> usize {
        let Some(height) = self.height(pos) else {
            return 0;
        };

        let mut distance = 0;
        for h in self.line_of_sight(pos, dir) {
            distance += 1;
            if h >= height {
                break;
            }
        }

        distance
    }

    pub fn scenic_score(&self, pos: &Position) -> usize {
        Direction::all_dirs()
            .iter()
            .map(|dir| self.viewing_distance(pos, *dir))
            .product()
    }

    pub fn max_scenic_score(&self) -> usize {
        self.positions()
            .map(|pos| self.scenic_score(&pos))
            .max()
            .unwrap_or(0)
    }

    fn line_of_sight(&self, pos: &Position, dir: Direction) -> Box<dyn Iterator<Item = u8> + '_> {
        let Position { r, c } = *pos;
        match dir {
            Direction::Up => Box::new((0..r).rev().map(move |r| self.heights[r * self.col_n + c])),
            Direction::Down => Box::new(
                ((r + 1)..self.row_n).map(move |r| self.heights[r * self.col_n + c]),
            ),
            Direction::Left => Box::new((0..c).rev().map(move |c| self.heights[r * self.col_n + c])),
            Direction::Right => Box::new(
                ((c + 1)..self.col_n).map(move |c| self.heights[r * self.col_n + c]),
            ),
        }
    }

    fn pos_to_ind(&self, pos: &Position) -> Option<usize> {
        if pos.r < self.row_n && pos.c < self.col_n {
            Some(pos.r * self.col_n + pos.c)
        } else {
            None
        }
    }
}

#[derive(Debug, Default)]
pub struct ForestBuilder {
    heights: Vec<u8>,
    row_n: usize,
    col_n: Option<usize>,
}

impl ForestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_row(&mut self, text: &str) -> Result<(), Error> {
        let this_col_n = text.chars().count();
        let expect_col_n = *self.col_n.get_or_insert(this_col_n);
        if expect_col_n != this_col_n {
            return Err(Error::InconsistentRow(expect_col_n, this_col_n));
        }

        for c in text.chars() {
            let height = c.to_digit(10).ok_or(Error::InvalidHeight(c))?;
            self.heights.push(height as u8);
        }
        self.row_n += 1;

        Ok(())
    }

    pub fn build(self) -> Forest {
        Forest {
            heights: self.heights,
            row_n: self.row_n,
            col_n: self.col_n.unwrap_or(0),
        }
    }
}

pub fn read_forest<P: AsRef<Path>>(path: P) -> Result<Forest> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open given file({}).", path.as_ref().display()))?;
    let reader = BufReader::new(file);
    let mut builder = ForestBuilder::new();
    for (ind, line) in reader.lines().enumerate() {
        let line = line.with_context(|| {
            format!(
                "Failed to read line {} in given file({}).",
                ind + 1,
                path.as_ref().display()
            )
        })?;
        let text = line.trim();
        if text.is_empty() {
            continue;
        }

        builder.add_row(text).with_context(|| {
            format!(
                "Failed to read tree heights from line {} in given file({}).",
                ind + 1,
                path.as_ref().display()
            )
        })?;
    }

    Ok(builder.build())
}
