use std::{
    collections::HashSet,
    error,
    fmt::Display,
    fs::File,
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;

pub const GROUP_SIZE: usize = 3;

#[derive(Debug)]
pub enum Error {
    InvalidItem(char),
    OddItemCount(String),
    NoCommonItem(String),
    IncompleteGroup(usize),
    AmbiguousBadge(usize),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidItem(c) => write!(f, "Invalid item({}), expect ASCII letters.", c),
            Error::OddItemCount(s) => write!(
                f,
                "Rucksack({}) has odd count of items, can't split into two compartments.",
                s
            ),
            Error::NoCommonItem(s) => write!(
                f,
                "No item appears in both compartments of rucksack({}).",
                s
            ),
            Error::IncompleteGroup(n) => write!(
                f,
                "The last group has {} rucksack(s), expect {}.",
                n, GROUP_SIZE
            ),
            Error::AmbiguousBadge(n) => write!(
                f,
                "Found {} item(s) common to the whole group, expect exactly one badge.",
                n
            ),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Item(char);

impl TryFrom<char> for Item {
    type Error = Error;

    fn try_from(value: char) -> std::result::Result<Self, Self::Error> {
        if value.is_ascii_alphabetic() {
            Ok(Item(value))
        } else {
            Err(Error::InvalidItem(value))
        }
    }
}

impl Item {
    pub fn priority(&self) -> usize {
        if self.0.is_ascii_lowercase() {
            (self.0 as u8 - b'a') as usize + 1
        } else {
            (self.0 as u8 - b'A') as usize + 27
        }
    }
}

#[derive(Debug, Clone)]
pub struct Rucksack {
    items: Vec<Item>,
}

impl TryFrom<&str> for Rucksack {
    type Error = Error;

    fn try_from(value: &str) -> std::result::Result<Self, Self::Error> {
        let items = value
            .chars()
            .map(Item::try_from)
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(Rucksack { items })
    }
}

impl Rucksack {
    pub fn common_item(&self) -> Result<Item, Error> {
        if self.items.len() % 2 != 0 {
            return Err(Error::OddItemCount(self.text()));
        }

        let (left, right) = self.items.split_at(self.items.len() / 2);
        let left = left.iter().collect::<HashSet<_>>();
        right
            .iter()
            .find(|item| left.contains(item))
            .copied()
            .ok_or_else(|| Error::NoCommonItem(self.text()))
    }

    fn item_set(&self) -> HashSet<Item> {
        self.items.iter().copied().collect()
    }

    fn text(&self) -> String {
        self.items.iter().map(|item| item.0).collect()
    }
}

/// The single item carried by every rucksack of the group.
pub fn badge(group: &[Rucksack]) -> Result<Item, Error> {
    if group.len() != GROUP_SIZE {
        return Err(Error::IncompleteGroup(group.len()));
    }

    let mut common = group[0].item_set();
    for sack in &group[1..] {
        let other = sack.item_set();
        common.retain(|item| other.contains(item));
    }

    let common_n = common.len();
    common
        .into_iter()
        .next()
        .filter(|_| common_n == 1)
        .ok_or(Error::AmbiguousBadge(common_n))
}

pub fn read_rucksacks<P: AsRef<Path>>(path: P) -> Result<Vec<Rucksack>> {
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
                Rucksack::try_from(s.trim()).with_context(|| {
                    format!(
                        "Failed to read rucksack from line {} in given file({}).",
                        ind + 1,
                        path.as_ref().display()
                    )
                })
            })
        })
        .collect()
}
