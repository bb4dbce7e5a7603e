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
    InvalidCalories(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidCalories(s) => write!(
                f,
                "Invalid text({}) for food calories, expect a non-negative integer.",
                s
            ),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}

#[derive(Debug, Clone, Default)]
pub struct Elf {
    foods: Vec<usize>,
}

impl Elf {
    pub fn new(foods: Vec<usize>) -> Self {
        Self { foods }
    }

    pub fn total_calories(&self) -> usize {
        self.foods.iter().sum()
    }
}

/// Sum of calories carried by the `n` elves carrying the most.
pub fn top_calories(elves: &[Elf], n: usize) -> usize {
    let mut totals = elves.iter().map(|e| e.total_calories()).collect::<Vec<_>>();
    totals.sort_unstable_by(|a, b| b.cmp(a));
    totals.iter().take(n).sum()
}

pub fn read_elves<P: AsRef<Path>>(path: P) -> Result<Vec<Elf>> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open given file({}).", path.as_ref().display()))?;
    let reader = BufReader::new(file);
    let mut elves = Vec::new();
    let mut foods = Vec::new();
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
            if !foods.is_empty() {
                elves.push(Elf::new(std::mem::take(&mut foods)));
            }
            continue;
        }

        let calories = text
            .parse::<usize>()
            .map_err(|_| Error::InvalidCalories(text.to_string()))
            .with_context(|| {
                format!(
                    "Failed to read calories from line {} in given file({}).",
                    ind + 1,
                    path.as_ref().display()
                )
            })?;
        foods.push(calories);
    }

    if !foods.is_empty() {
        elves.push(Elf::new(foods));
    }

    Ok(elves)
}
