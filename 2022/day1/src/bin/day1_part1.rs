use anyhow::{Context, Result};
use clap::Parser;
use day1::CLIArgs;

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    let elves = day1::read_elves(&args.input_path).with_context(|| {
        format!(
            "Failed to read elves' food list from given file({}).",
            args.input_path.display()
        )
    })?;

    println!(
        "The elf carrying the most calories carries {} calories in total.",
        day1::top_calories(&elves, 1)
    );

    Ok(())
}
