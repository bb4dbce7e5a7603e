use anyhow::{Context, Result};
use clap::Parser;
use day6::{CLIArgs, MESSAGE_MARKER_WIDTH};

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    let datastream = day6::read_datastream(&args.input_path).with_context(|| {
        format!(
            "Failed to read datastream from given file({}).",
            args.input_path.display()
        )
    })?;

    let end = day6::marker_end(&datastream, MESSAGE_MARKER_WIDTH)
        .context("Failed to find start-of-message marker.")?;
    println!(
        "{} character(s) need to be processed before the first start-of-message marker is detected.",
        end
    );

    Ok(())
}
