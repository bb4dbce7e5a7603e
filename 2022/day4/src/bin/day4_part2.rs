use anyhow::{Context, Result};
use clap::Parser;
use day4::CLIArgs;

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    let pairs = day4::read_pairs(&args.input_path).with_context(|| {
        format!(
            "Failed to read assignment pairs from given file({}).",
            args.input_path.display()
        )
    })?;

    let overlapped_count = pairs.iter().filter(|p| p.is_overlapped()).count();
    println!(
        "There are {} pair(s) in which ranges overlap.",
        overlapped_count
    );

    Ok(())
}
