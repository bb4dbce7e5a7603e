use anyhow::{Context, Result};
use clap::Parser;
use day3::CLIArgs;

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    let sacks = day3::read_rucksacks(&args.input_path).with_context(|| {
        format!(
            "Failed to read rucksacks from given file({}).",
            args.input_path.display()
        )
    })?;

    let mut priority_sum = 0;
    for (ind, sack) in sacks.iter().enumerate() {
        let item = sack
            .common_item()
            .with_context(|| format!("Failed to find common item in rucksack #{}.", ind + 1))?;
        priority_sum += item.priority();
    }
    println!(
        "The sum of priorities of items in both compartments is {}.",
        priority_sum
    );

    Ok(())
}
