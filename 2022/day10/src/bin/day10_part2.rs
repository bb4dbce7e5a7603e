use anyhow::{Context, Result};
use clap::Parser;
use day10::CLIArgs;

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
    println!("The image rendered on CRT is:");
    for row in day10::render_crt(&trace_values) {
        println!("{}", row);
    }

    Ok(())
}
