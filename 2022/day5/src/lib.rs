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
    MissingStackLabels,
    InvalidStackLabel(String),
    InvalidInstruction(String),
    UnknownStack(usize),
    CrateOutsideStacks(String),
    NotEnoughCrates {
        label: usize,
        have: usize,
        need: usize,
    },
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::MissingStackLabels => write!(
                f,
                "No stack label line found before the blank line separating instructions."
            ),
            Error::InvalidStackLabel(s) => write!(f, "Invalid stack label({}).", s),
            Error::InvalidInstruction(s) => write!(
                f,
                "Invalid text({}) for instruction, expect \"move <n> from <a> to <b>\".",
                s
            ),
            Error::UnknownStack(label) => write!(f, "No stack labeled {}.", label),
            Error::CrateOutsideStacks(s) => write!(
                f,
                "Drawing row({}) has crates beyond the last labeled stack.",
                s
            ),
            Error::NotEnoughCrates { label, have, need } => write!(
                f,
                "Stack {} has {} crate(s), can't move {} of them.",
                label, have, need
            ),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CraneModel {
    /// Lifts one crate at a time.
    CrateMover9000,
    /// Lifts several crates at once, keeping their order.
    CrateMover9001,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Instruction {
    count: usize,
    from: usize,
    to: usize,
}

impl TryFrom<&str> for Instruction {
    type Error = Error;

    fn try_from(value: &str) -> std::result::Result<Self, Self::Error> {
        static INSTRUCTION_PATTERN: Lazy<Regex> =
            Lazy::new(|| Regex::new(r"^move (\d+) from (\d+) to (\d+)$").unwrap());

        let caps = INSTRUCTION_PATTERN
            .captures(value.trim())
            .ok_or(Error::InvalidInstruction(value.to_string()))?;
        let parse = |ind: usize| {
            caps[ind]
                .parse::<usize>()
                .map_err(|_| Error::InvalidInstruction(value.to_string()))
        };

        Ok(Instruction {
            count: parse(1)?,
            from: parse(2)?,
            to: parse(3)?,
        })
    }
}

impl Instruction {
    pub fn new(count: usize, from: usize, to: usize) -> Self {
        Self { count, from, to }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stacks {
    labels: Vec<usize>,
    crates: Vec<Vec<char>>,
}

impl Stacks {
    /// Builds stacks from the drawing rows top to bottom and the label row beneath.
    pub fn from_drawing(rows: &[String], label_row: &str) -> Result<Self, Error> {
        let labels = label_row
            .split_whitespace()
            .map(|s| {
                s.parse::<usize>()
                    .map_err(|_| Error::InvalidStackLabel(s.to_string()))
            })
            .collect::<std::result::Result<Vec<_>, _>>()?;
        let mut crates = vec![Vec::new(); labels.len()];
        for text in rows.iter().rev() {
            let row = text.chars().collect::<Vec<_>>();
            if row
                .iter()
                .skip(4 * labels.len())
                .any(|c| !c.is_whitespace())
            {
                return Err(Error::CrateOutsideStacks(text.to_string()));
            }

            for (ind, stack) in crates.iter_mut().enumerate() {
                if let Some(c) = row.get(1 + 4 * ind).filter(|c| !c.is_whitespace()) {
                    stack.push(*c);
                }
            }
        }

        Ok(Self { labels, crates })
    }

    pub fn apply(&mut self, inst: &Instruction, model: CraneModel) -> Result<(), Error> {
        let from_ind = self.stack_ind(inst.from)?;
        let to_ind = self.stack_ind(inst.to)?;
        let from_stack = &mut self.crates[from_ind];
        let have = from_stack.len();
        let rest_n = have.checked_sub(inst.count).ok_or(Error::NotEnoughCrates {
            label: inst.from,
            have,
            need: inst.count,
        })?;
        if from_ind == to_ind {
            return Ok(());
        }

        let mut lifted = from_stack.split_off(rest_n);
        if model == CraneModel::CrateMover9000 {
            lifted.reverse();
        }
        self.crates[to_ind].extend(lifted);

        Ok(())
    }

    /// Top crates in label order, empty stacks skipped.
    pub fn top_crates(&self) -> String {
        self.crates.iter().filter_map(|s| s.last()).collect()
    }

    fn stack_ind(&self, label: usize) -> Result<usize, Error> {
        self.labels
            .iter()
            .position(|l| *l == label)
            .ok_or(Error::UnknownStack(label))
    }
}

pub fn read_plan<P: AsRef<Path>>(path: P) -> Result<(Stacks, Vec<Instruction>)> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open given file({}).", path.as_ref().display()))?;
    let reader = BufReader::new(file);
    let mut enum_lines = reader.lines().enumerate();
    let mut drawing = Vec::new();
    for (ind, line) in enum_lines.by_ref() {
        let line = line.with_context(|| {
            format!(
                "Failed to read line {} in given file({}).",
                ind + 1,
                path.as_ref().display()
            )
        })?;
        if line.trim().is_empty() {
            break;
        }

        drawing.push(line);
    }

    let label_row = drawing.pop().ok_or(Error::MissingStackLabels)?;
    if !label_row.trim_start().starts_with(|c: char| c.is_ascii_digit()) {
        return Err(Error::MissingStackLabels.into());
    }
    let stacks = Stacks::from_drawing(&drawing, &label_row)
        .context("Failed to read stacks from crate drawing.")?;

    let mut insts = Vec::new();
    for (ind, line) in enum_lines {
        let line = line.with_context(|| {
            format!(
                "Failed to read line {} in given file({}).",
                ind + 1,
                path.as_ref().display()
            )
        })?;
        if line.trim().is_empty() {
            continue;
        }

        insts.push(Instruction::try_from(line.as_str()).with_context(|| {
            format!(
                "Failed to read instruction from line {} in given file({}).",
                ind + 1,
                path.as_ref().display()
            )
        })?);
    }

    Ok((stacks, insts))
}

/// Runs every instruction with the given crane, returning the resulting top crates.
pub fn rearrange(stacks: &mut Stacks, insts: &[Instruction], model: CraneModel) -> Result<String> {
    for (ind, inst) in insts.iter().enumerate() {
        stacks
            .apply(inst, model)
            .with_context(|| format!("Failed to apply instruction #{}.", ind + 1))?;
    }

    Ok(stacks.top_crates())
}
