use anyhow::{Context, Result};
use clap::Parser;
use day7::{CLIArgs, SMALL_DIR_THRESHOLD};

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    let fs = day7::read_file_system(&args.input_path).with_context(|| {
        format!(
            "Failed to read file system from given terminal output({}).",
            args.input_path.display()
        )
    })?;

    if args.tree {
        print!("{}", fs);
    }
    println!(
        "The sum of sizes of directories with size at most {} is {}.",
        SMALL_DIR_THRESHOLD,
        fs.small_dirs_size(SMALL_DIR_THRESHOLD)
    );

    Ok(())
}
