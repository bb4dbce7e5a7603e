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
    InvalidRoundText(String),
    InvalidOpponentCode(String),
    InvalidResponseCode(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidRoundText(s) => write!(
                f,
                "Invalid text({}) for round, expect two codes separated by space.",
                s
            ),
            Error::InvalidOpponentCode(s) => {
                write!(f, "Invalid opponent code({}), expect A, B or C.", s)
            }
            Error::InvalidResponseCode(s) => {
                write!(f, "Invalid response code({}), expect X, Y or Z.", s)
            }
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Rock,
    Paper,
    Scissors,
}

impl Shape {
    pub fn score(&self) -> usize {
        match self {
            Shape::Rock => 1,
            Shape::Paper => 2,
            Shape::Scissors => 3,
        }
    }

    pub fn beats(&self) -> Shape {
        match self {
            Shape::Rock => Shape::Scissors,
            Shape::Paper => Shape::Rock,
            Shape::Scissors => Shape::Paper,
        }
    }

    pub fn beaten_by(&self) -> Shape {
        match self {
            Shape::Rock => Shape::Paper,
            Shape::Paper => Shape::Scissors,
            Shape::Scissors => Shape::Rock,
        }
    }

    pub fn against(&self, opponent: Shape) -> Outcome {
        if *self == opponent {
            Outcome::Draw
        } else if self.beats() == opponent {
            Outcome::Win
        } else {
            Outcome::Lose
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Lose,
    Draw,
    Win,
}

impl Outcome {
    pub fn score(&self) -> usize {
        match self {
            Outcome::Lose => 0,
            Outcome::Draw => 3,
            Outcome::Win => 6,
        }
    }

    /// The shape to play against `opponent` to get this outcome.
    pub fn shape_against(&self, opponent: Shape) -> Shape {
        match self {
            Outcome::Lose => opponent.beats(),
            Outcome::Draw => opponent,
            Outcome::Win => opponent.beaten_by(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Response {
    X,
    Y,
    Z,
}

impl Response {
    pub fn as_shape(&self) -> Shape {
        match self {
            Response::X => Shape::Rock,
            Response::Y => Shape::Paper,
            Response::Z => Shape::Scissors,
        }
    }

    pub fn as_outcome(&self) -> Outcome {
        match self {
            Response::X => Outcome::Lose,
            Response::Y => Outcome::Draw,
            Response::Z => Outcome::Win,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Round {
    opponent: Shape,
    response: Response,
}

impl TryFrom<&str> for Round {
    type Error = Error;

    fn try_from(value: &str) -> std::result::Result<Self, Self::Error> {
        let codes = value.split_whitespace().collect::<Vec<_>>();
        let [opponent_code, response_code] = codes[..] else {
            return Err(Error::InvalidRoundText(value.to_string()));
        };

        let opponent = match opponent_code {
            "A" => Shape::Rock,
            "B" => Shape::Paper,
            "C" => Shape::Scissors,
            other => return Err(Error::InvalidOpponentCode(other.to_string())),
        };
        let response = match response_code {
            "X" => Response::X,
            "Y" => Response::Y,
            "Z" => Response::Z,
            other => return Err(Error::InvalidResponseCode(other.to_string())),
        };

        Ok(Round { opponent, response })
    }
}

impl Round {
    pub fn new(opponent: Shape, response: Response) -> Self {
        Self { opponent, response }
    }

    /// Score when the response names the shape to play.
    pub fn shape_score(&self) -> usize {
        let mine = self.response.as_shape();
        mine.score() + mine.against(self.opponent).score()
    }

    /// Score when the response names the outcome to reach.
    pub fn outcome_score(&self) -> usize {
        let outcome = self.response.as_outcome();
        outcome.shape_against(self.opponent).score() + outcome.score()
    }
}

pub fn read_rounds<P: AsRef<Path>>(path: P) -> Result<Vec<Round>> {
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
                Round::try_from(s.as_str()).with_context(|| {
                    format!(
                        "Failed to read round from line {} in given file({}).",
                        ind + 1,
                        path.as_ref().display()
                    )
                })
            })
        })
        .collect()
}
