use anyhow::{Context, Result};
use clap::Parser;
use day9::CLIArgs;

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    day9::init_logging(args.verbose);
    let motions = day9::read_motions(&args.input_path).with_context(|| {
        format!(
            "Failed to read motions from given file({}).",
            args.input_path.display()
        )
    })?;

    let knot_n = 2;
    let visited_n = day9::simulate(day9::head_moves(&motions), knot_n)
        .with_context(|| format!("Failed to simulate rope with {} knots.", knot_n))?;
    println!(
        "The tail of rope with {} knots visits {} position(s) at least once.",
        knot_n, visited_n
    );

    Ok(())
}
