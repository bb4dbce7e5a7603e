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

    let top_n = 3;
    println!(
        "The top {} elves carrying the most calories carry {} calories in total.",
        top_n,
        day1::top_calories(&elves, top_n)
    );

    Ok(())
}
