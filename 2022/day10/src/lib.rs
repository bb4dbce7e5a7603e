use std::{
    error,
    fmt::Display,
    fs::File,
    io::{BufRead, BufReader},
    iter,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, trace, Level};

pub const KEY_CYCLES: [usize; 6] = [20, 60, 100, 140, 180, 220];
pub const CRT_WIDTH: usize = 40;
pub const CRT_HEIGHT: usize = 6;

#[derive(Debug)]
pub enum Error {
    InvalidInstruction(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidInstruction(s) => write!(
                f,
                "Invalid text({}) for instruction, expect \"noop\" or \"addx <value>\".",
                s
            ),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
    /// Print execution logs to stderr, repeat for per-cycle details
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

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    Noop,
    AddX(i64),
}

impl TryFrom<&str> for Instruction {
    type Error = Error;

    fn try_from(value: &str) -> std::result::Result<Self, Self::Error> {
        static ADDX_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^addx (-?\d+)$").unwrap());

        let text = value.trim();
        if text == "noop" {
            return Ok(Instruction::Noop);
        }

        ADDX_PATTERN
            .captures(text)
            .and_then(|caps| caps[1].parse::<i64>().ok())
            .map(Instruction::AddX)
            .ok_or(Error::InvalidInstruction(value.to_string()))
    }
}

impl Instruction {
    pub fn cycle_n(&self) -> usize {
        match self {
            Instruction::Noop => 1,
            Instruction::AddX(_) => 2,
        }
    }

    pub fn increment(&self) -> i64 {
        match self {
            Instruction::Noop => 0,
            Instruction::AddX(v) => *v,
        }
    }
}

/// Value of X during each cycle, index 0 being cycle 1. The trace ends with the
/// cycle right after the last instruction completes.
pub fn register_trace(insts: &[Instruction]) -> Vec<i64> {
    let mut x = 1;
    let mut trace_values = Vec::with_capacity(insts.iter().map(|i| i.cycle_n()).sum::<usize>() + 1);
    for inst in insts {
        trace_values.extend(iter::repeat(x).take(inst.cycle_n()));
        x += inst.increment();
    }
    trace_values.push(x);

    debug!(
        inst_n = insts.len(),
        cycle_n = trace_values.len(),
        "Finished executing instructions."
    );
    for (ind, x) in trace_values.iter().enumerate() {
        trace!(cycle = ind + 1, x);
    }

    trace_values
}

pub fn signal_strength_sum(trace_values: &[i64], cycles: &[usize]) -> i64 {
    cycles
        .iter()
        .filter_map(|cycle| {
            cycle
                .checked_sub(1)
                .and_then(|ind| trace_values.get(ind))
                .map(|x| *x * *cycle as i64)
        })
        .sum()
}

/// Draws one pixel per cycle, keeping only complete rows.
pub fn render_crt(trace_values: &[i64]) -> Vec<String> {
    trace_values
        .chunks_exact(CRT_WIDTH)
        .take(CRT_HEIGHT)
        .map(|row| {
            row.iter()
                .enumerate()
                .map(|(col, x)| {
                    if (col as i64 - x).abs() <= 1 {
                        '#'
                    } else {
                        '.'
                    }
                })
                .collect()
        })
        .collect()
}

pub fn read_insts<P: AsRef<Path>>(path: P) -> Result<Vec<Instruction>> {
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
                Instruction::try_from(s.as_str()).with_context(|| {
                    format!(
                        "Failed to read instruction from line {} in given file({}).",
                        ind + 1,
                        path.as_ref().display()
                    )
                })
            })
        })
        .collect()
}
