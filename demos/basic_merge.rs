//! Merge the crate's own `src/` files to stdout.
//!
//! Run with: `cargo run --example basic_merge`

use mergeio::{MergeBuilder, ScanOrder};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let engine = MergeBuilder::new()
        .with_dir("src")
        .with_suffix(".rs")
        .with_output("-")
        .with_order(ScanOrder::Lexicographic)
        .build()?;

    let report = engine.run()?;

    eprintln!(
        "merged {} file(s), {} byte(s)",
        report.merged.len(),
        report.bytes_copied
    );

    Ok(())
}
