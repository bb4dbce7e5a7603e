use anyhow::{Context, Result};
use clap::Parser;
use day8::CLIArgs;

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    let forest = day8::read_forest(&args.input_path).with_context(|| {
        format!(
            "Failed to read tree height map from given file({}).",
            args.input_path.display()
        )
    })?;

    println!(
        "There are {} tree(s) visible from outside the grid.",
        forest.visible_count()
    );

    Ok(())
}
