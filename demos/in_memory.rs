//! Merge entirely in memory, without touching the filesystem.
//!
//! Run with: `cargo run --example in_memory`

use std::sync::Arc;

use mergeio::{
    ErrorPolicy, HeaderTemplate, InMemorySink, InMemorySource, MergeEngine, SinkSpec, SourceSpec,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let sources = vec![
        SourceSpec::new(
            "greeting.txt",
            Arc::new(InMemorySource::from_string("greeting.txt", "hello\n")),
        ),
        SourceSpec::new(
            "subject.txt",
            Arc::new(InMemorySource::from_string("subject.txt", "world\n")),
        ),
    ];

    let sink = Arc::new(InMemorySink::new("out"));
    let engine = MergeEngine::new(
        sources,
        SinkSpec::new("out", sink.clone()),
        HeaderTemplate::default(),
        ErrorPolicy::FastFail,
    );

    let report = engine.run()?;

    println!("{}", sink.contents_string());
    eprintln!("merged {} file(s)", report.merged.len());

    Ok(())
}
