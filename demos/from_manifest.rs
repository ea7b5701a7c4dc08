//! Drive a merge from an inline YAML manifest.
//!
//! Run with: `cargo run --example from_manifest`

use mergeio::{ManifestConfig, build_engine_from_manifest};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let yaml = "dir: src\nsuffix: .rs\noutput: \"-\"\norder: lexicographic\n";

    let config = ManifestConfig::from_yaml_reader(yaml.as_bytes())?;
    let engine = build_engine_from_manifest(config)?;
    let report = engine.run()?;

    eprintln!("merged {} file(s)", report.merged.len());

    Ok(())
}
