use std::{
    error,
    fmt::Display,
    fs::File,
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;
use once_cell::sync::Lazy;
use regex::Regex;

#[derive(Debug)]
pub enum Error {
    InvalidPairText(String),
    InvalidSectionId(String),
    InvertedRange(usize, usize),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidPairText(s) => write!(
                f,
                "Invalid text({}) for assignment pair, expect \"a-b,c-d\".",
                s
            ),
            Error::InvalidSectionId(s) => write!(f, "Invalid section ID({}).", s),
            Error::InvertedRange(min, max) => write!(
                f,
                "Section range({}-{}) starts after it ends.",
                min, max
            ),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}

/// Inclusive range of section IDs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionRange {
    min: usize,
    max: usize,
}

impl SectionRange {
    pub fn new(min: usize, max: usize) -> Result<Self, Error> {
        if min > max {
            Err(Error::InvertedRange(min, max))
        } else {
            Ok(Self { min, max })
        }
    }

    pub fn section_n(&self) -> usize {
        self.max - self.min + 1
    }

    pub fn contains(&self, other: &SectionRange) -> bool {
        self.min <= other.min && self.max >= other.max
    }

    pub fn overlaps(&self, other: &SectionRange) -> bool {
        self.min <= other.max && other.min <= self.max
    }
}

#[derive(Debug, Clone, Copy)]
pub struct AssignmentPair(SectionRange, SectionRange);

impl TryFrom<&str> for AssignmentPair {
    type Error = Error;

    fn try_from(value: &str) -> std::result::Result<Self, Self::Error> {
        static PAIR_PATTERN: Lazy<Regex> =
            Lazy::new(|| Regex::new(r"^(\d+)-(\d+),(\d+)-(\d+)$").unwrap());

        let caps = PAIR_PATTERN
            .captures(value.trim())
            .ok_or(Error::InvalidPairText(value.to_string()))?;
        let mut ids = [0usize; 4];
        for (ind, id) in ids.iter_mut().enumerate() {
            let text = &caps[ind + 1];
            *id = text
                .parse::<usize>()
                .map_err(|_| Error::InvalidSectionId(text.to_string()))?;
        }

        Ok(AssignmentPair(
            SectionRange::new(ids[0], ids[1])?,
            SectionRange::new(ids[2], ids[3])?,
        ))
    }
}

impl AssignmentPair {
    pub fn new(first: SectionRange, second: SectionRange) -> Self {
        Self(first, second)
    }

    pub fn is_fully_contained(&self) -> bool {
        if self.0.section_n() >= self.1.section_n() {
            self.0.contains(&self.1)
        } else {
            self.1.contains(&self.0)
        }
    }

    pub fn is_overlapped(&self) -> bool {
        self.0.overlaps(&self.1)
    }
}

pub fn read_pairs<P: AsRef<Path>>(path: P) -> Result<Vec<AssignmentPair>> {
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
                AssignmentPair::try_from(s.as_str()).with_context(|| {
                    format!(
                        "Failed to read assignment pair from line {} in given file({}).",
                        ind + 1,
                        path.as_ref().display()
                    )
                })
            })
        })
        .collect()
}
