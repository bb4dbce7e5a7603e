use anyhow::{Context, Result};
use clap::Parser;
use day6::{CLIArgs, PACKET_MARKER_WIDTH};

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    let datastream = day6::read_datastream(&args.input_path).with_context(|| {
        format!(
            "Failed to read datastream from given file({}).",
            args.input_path.display()
        )
    })?;

    let end = day6::marker_end(&datastream, PACKET_MARKER_WIDTH)
        .context("Failed to find start-of-packet marker.")?;
    println!(
        "{} character(s) need to be processed before the first start-of-packet marker is detected.",
        end
    );

    Ok(())
}
