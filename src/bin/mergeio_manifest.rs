#![cfg(feature = "yaml")]

use std::env;
use std::fs::File;
use std::io::BufReader;

use mergeio::MergeBuilder;
use mergeio::config::ManifestConfig;

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = env::args().skip(1);
    let manifest_path = match args.next() {
        Some(path) => path,
        None => {
            eprintln!("Usage: mergeio-manifest <manifest.yaml>");
            std::process::exit(1);
        }
    };

    let file = File::open(&manifest_path)?;
    let reader = BufReader::new(file);
    let config: ManifestConfig = ManifestConfig::from_yaml_reader(reader)?;

    let engine = MergeBuilder::from_manifest(config)?.build()?;
    let report = engine.run()?;

    for skipped in &report.skipped {
        eprintln!("mergeio-manifest: skipped {skipped}");
    }
    eprintln!(
        "mergeio-manifest: merged {} file(s), {} byte(s)",
        report.merged.len(),
        report.bytes_copied
    );

    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("mergeio-manifest error: {e}");
        // Non-zero exit code so that callers and e2e tests can detect failure.
        std::process::exit(1);
    }
}
