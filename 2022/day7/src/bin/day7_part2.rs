use anyhow::{bail, Context, Result};
use clap::Parser;
use day7::CLIArgs;

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
    let Some(size) = fs.smallest_dir_to_free(args.disk_size, args.needed_size) else {
        bail!(
            "No directory is large enough to free {} space on disk of size {}.",
            args.needed_size,
            args.disk_size
        );
    };
    println!(
        "The smallest directory to delete for {} free space has size {}.",
        args.needed_size, size
    );

    Ok(())
}
