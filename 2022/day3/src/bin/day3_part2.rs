use anyhow::{Context, Result};
use clap::Parser;
use day3::{CLIArgs, GROUP_SIZE};

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    let sacks = day3::read_rucksacks(&args.input_path).with_context(|| {
        format!(
            "Failed to read rucksacks from given file({}).",
            args.input_path.display()
        )
    })?;

    let mut priority_sum = 0;
    for (ind, group) in sacks.chunks(GROUP_SIZE).enumerate() {
        let badge = day3::badge(group)
            .with_context(|| format!("Failed to find badge of group #{}.", ind + 1))?;
        priority_sum += badge.priority();
    }
    println!("The sum of priorities of group badges is {}.", priority_sum);

    Ok(())
}
