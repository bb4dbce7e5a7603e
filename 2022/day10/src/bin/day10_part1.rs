use anyhow::{Context, Result};
use clap::Parser;
use day10::{CLIArgs, KEY_CYCLES};

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    day10::init_logging(args.verbose);
    let insts = day10::read_insts(&args.input_path).with_context(|| {
        format!(
            "Failed to read instructions from given file({}).",
            args.input_path.display()
        )
    })?;

    let trace_values = day10::register_trace(&insts);
    println!(
        "The sum of signal strengths during key cycles is {}.",
        day10::signal_strength_sum(&trace_values, &KEY_CYCLES)
    );

    Ok(())
}
