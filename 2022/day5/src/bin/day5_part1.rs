use anyhow::{Context, Result};
use clap::Parser;
use day5::{CLIArgs, CraneModel};

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    let (mut stacks, insts) = day5::read_plan(&args.input_path).with_context(|| {
        format!(
            "Failed to read rearrangement plan from given file({}).",
            args.input_path.display()
        )
    })?;

    let top_crates = day5::rearrange(&mut stacks, &insts, CraneModel::CrateMover9000)?;
    println!(
        "After rearranged by CrateMover9000, the top crates are {}.",
        top_crates
    );

    Ok(())
}
