use std::env;
use std::process;

use mergeio::MergeBuilder;
use mergeio::cli::{self, CliArgs};

fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut builder = MergeBuilder::new()
        .with_mode(args.error_policy())
        .with_order(args.order());

    if let Some(dir) = &args.dir {
        builder = builder.with_dir(dir);
    }
    if let Some(output) = &args.output {
        builder = builder.with_output(output);
    }
    if let Some(suffix) = &args.suffix {
        builder = builder.with_suffix(suffix);
    }

    let engine = builder.build()?;
    let report = engine.run()?;

    for skipped in &report.skipped {
        eprintln!("mergeio: skipped {skipped}");
    }
    // Summary goes to stderr so that `-o -` output stays clean.
    eprintln!(
        "mergeio: merged {} file(s), {} byte(s)",
        report.merged.len(),
        report.bytes_copied
    );

    Ok(())
}

fn main() {
    let args = match cli::parse_args(env::args().skip(1)) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("mergeio: {e}");
            eprintln!("{}", cli::USAGE);
            process::exit(1);
        }
    };

    if args.help {
        println!("{}", cli::USAGE);
        return;
    }

    if let Err(e) = run(args) {
        // RunError already implements Display with a per-step breakdown.
        eprintln!("mergeio error: {e}");
        process::exit(1);
    }
}
