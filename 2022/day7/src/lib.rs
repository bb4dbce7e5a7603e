use std::{
    error,
    fmt::Display,
    fs::File,
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;

pub const SMALL_DIR_THRESHOLD: usize = 100_000;
pub const DISK_SIZE: usize = 70_000_000;
pub const NEEDED_FREE_SIZE: usize = 30_000_000;

#[derive(Debug)]
pub enum Error {
    InvalidTerminalLine(String),
    UnknownDirectory(String),
    AboveRoot,
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidTerminalLine(s) => {
                write!(f, "Invalid text({}) for terminal output.", s)
            }
            Error::UnknownDirectory(s) => write!(
                f,
                "Can't change into directory({}), it isn't listed in current directory.",
                s
            ),
            Error::AboveRoot => write!(f, "Can't change to parent of root directory."),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
    /// Print the discovered file tree before the answer
    #[arg(long)]
    pub tree: bool,
    /// Capacity of the disk
    #[arg(long, default_value_t = DISK_SIZE)]
    pub disk_size: usize,
    /// Free space required on the disk
    #[arg(long, default_value_t = NEEDED_FREE_SIZE)]
    pub needed_size: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminalLine {
    ChangeToRoot,
    ChangeToParent,
    ChangeTo(String),
    List,
    DirEntry(String),
    FileEntry(String, usize),
}

impl TryFrom<&str> for TerminalLine {
    type Error = Error;

    fn try_from(value: &str) -> std::result::Result<Self, Self::Error> {
        let parts = value.split_whitespace().collect::<Vec<_>>();
        match parts[..] {
            ["$", "cd", "/"] => Ok(TerminalLine::ChangeToRoot),
            ["$", "cd", ".."] => Ok(TerminalLine::ChangeToParent),
            ["$", "cd", name] => Ok(TerminalLine::ChangeTo(name.to_string())),
            ["$", "ls"] => Ok(TerminalLine::List),
            ["dir", name] => Ok(TerminalLine::DirEntry(name.to_string())),
            [size, name] => size
                .parse::<usize>()
                .map(|size| TerminalLine::FileEntry(name.to_string(), size))
                .map_err(|_| Error::InvalidTerminalLine(value.to_string())),
            _ => Err(Error::InvalidTerminalLine(value.to_string())),
        }
    }
}

#[derive(Debug, Clone)]
struct Dir {
    name: String,
    parent: Option<usize>,
    sub_dirs: Vec<usize>,
    files: Vec<(String, usize)>,
}

impl Dir {
    fn new(name: &str, parent: Option<usize>) -> Self {
        Self {
            name: name.to_string(),
            parent,
            sub_dirs: Vec::new(),
            files: Vec::new(),
        }
    }
}

/// Directory tree rebuilt from a terminal session. Directories live in one
/// arena and every sub directory is stored after its parent.
#[derive(Debug, Clone)]
pub struct FileSystem {
    dirs: Vec<Dir>,
}

impl Default for FileSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystem {
    const ROOT: usize = 0;

    pub fn new() -> Self {
        Self {
            dirs: vec![Dir::new("/", None)],
        }
    }

    pub fn dir_n(&self) -> usize {
        self.dirs.len()
    }

    /// Total size of every directory, including everything below it.
    pub fn dir_sizes(&self) -> Vec<usize> {
        let mut sizes = self
            .dirs
            .iter()
            .map(|d| d.files.iter().map(|(_, size)| size).sum::<usize>())
            .collect::<Vec<_>>();
        for ind in (1..self.dirs.len()).rev() {
            if let Some(parent) = self.dirs[ind].parent {
                sizes[parent] += sizes[ind];
            }
        }

        sizes
    }

    pub fn used_size(&self) -> usize {
        self.dir_sizes()[Self::ROOT]
    }

    pub fn small_dirs_size(&self, threshold: usize) -> usize {
        self.dir_sizes()
            .into_iter()
            .filter(|size| *size <= threshold)
            .sum()
    }

    /// Size of the smallest directory whose removal leaves `needed` free on a
    /// disk of `disk` capacity.
    pub fn smallest_dir_to_free(&self, disk: usize, needed: usize) -> Option<usize> {
        let sizes = self.dir_sizes();
        let free = disk.saturating_sub(sizes[Self::ROOT]);
        let to_free = needed.saturating_sub(free);
        sizes.into_iter().filter(|size| *size >= to_free).min()
    }

    fn add_dir(&mut self, cwd: usize, name: &str) -> usize {
        if let Some(ind) = self.find_sub_dir(cwd, name) {
            return ind;
        }

        let ind = self.dirs.len();
        self.dirs.push(Dir::new(name, Some(cwd)));
        self.dirs[cwd].sub_dirs.push(ind);
        ind
    }

    fn add_file(&mut self, cwd: usize, name: &str, size: usize) {
        let files = &mut self.dirs[cwd].files;
        if !files.iter().any(|(file_name, _)| file_name == name) {
            files.push((name.to_string(), size));
        }
    }

    fn find_sub_dir(&self, cwd: usize, name: &str) -> Option<usize> {
        self.dirs[cwd]
            .sub_dirs
            .iter()
            .copied()
            .find(|ind| self.dirs[*ind].name == name)
    }

    fn fmt_dir(
        &self,
        f: &mut std::fmt::Formatter<'_>,
        ind: usize,
        sizes: &[usize],
        depth: usize,
    ) -> std::fmt::Result {
        let dir = &self.dirs[ind];
        writeln!(
            f,
            "{}- {} (dir, size={})",
            "  ".repeat(depth),
            dir.name,
            sizes[ind]
        )?;
        for sub_dir in &dir.sub_dirs {
            self.fmt_dir(f, *sub_dir, sizes, depth + 1)?;
        }
        for (name, size) in &dir.files {
            writeln!(
                f,
                "{}- {} (file, size={})",
                "  ".repeat(depth + 1),
                name,
                size
            )?;
        }

        Ok(())
    }
}

impl Display for FileSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.fmt_dir(f, Self::ROOT, &self.dir_sizes(), 0)
    }
}

/// Replays terminal lines, starting in the root directory.
#[derive(Debug)]
pub struct SessionReplayer {
    fs: FileSystem,
    cwd: usize,
}

impl Default for SessionReplayer {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionReplayer {
    pub fn new() -> Self {
        Self {
            fs: FileSystem::new(),
            cwd: FileSystem::ROOT,
        }
    }

    pub fn replay(&mut self, line: &TerminalLine) -> Result<(), Error> {
        match line {
            TerminalLine::ChangeToRoot => self.cwd = FileSystem::ROOT,
            TerminalLine::ChangeToParent => {
                self.cwd = self.fs.dirs[self.cwd].parent.ok_or(Error::AboveRoot)?
            }
            TerminalLine::ChangeTo(name) => {
                self.cwd = self
                    .fs
                    .find_sub_dir(self.cwd, name)
                    .ok_or(Error::UnknownDirectory(name.clone()))?
            }
            TerminalLine::List => (),
            TerminalLine::DirEntry(name) => {
                self.fs.add_dir(self.cwd, name);
            }
            TerminalLine::FileEntry(name, size) => self.fs.add_file(self.cwd, name, *size),
        }

        Ok(())
    }

    pub fn finish(self) -> FileSystem {
        self.fs
    }
}

pub fn read_file_system<P: AsRef<Path>>(path: P) -> Result<FileSystem> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open given file({}).", path.as_ref().display()))?;
    let reader = BufReader::new(file);
    let mut replayer = SessionReplayer::new();
    for (ind, line) in reader.lines().enumerate() {
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

        TerminalLine::try_from(line.as_str())
            .and_then(|l| replayer.replay(&l))
            .with_context(|| {
                format!(
                    "Failed to replay line {} in given file({}).",
                    ind + 1,
                    path.as_ref().display()
                )
            })?;
    }

    Ok(replayer.finish())
}
