//! Standard filesystem and stdout implementations.

use std::fs::OpenOptions;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use super::{MergeSink, SourceInput};

/// Merge source backed by a regular file.
#[derive(Debug, Clone)]
pub struct FileSource {
    name: String,
    path: PathBuf,
}

impl FileSource {
    /// Create a new file source. The header name is the file's basename.
    pub fn new(path: PathBuf) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.to_string_lossy().into_owned());
        Self { name, path }
    }

    /// Get the file path.
    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl SourceInput for FileSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn open(&self) -> io::Result<Box<dyn Read + Send>> {
        let file = std::fs::File::open(&self.path)?;
        Ok(Box::new(file))
    }
}

/// Merge sink writing to stdout.
#[derive(Debug, Clone)]
pub struct StdoutSink {
    id: String,
}

impl StdoutSink {
    /// Create a new stdout sink.
    pub fn new() -> Self {
        Self { id: "-".into() }
    }
}

impl Default for StdoutSink {
    fn default() -> Self {
        Self::new()
    }
}

impl MergeSink for StdoutSink {
    fn id(&self) -> &str {
        &self.id
    }

    fn open_truncate(&self) -> io::Result<Box<dyn Write + Send>> {
        Ok(Box::new(io::stdout()))
    }

    fn open_append(&self) -> io::Result<Box<dyn Write + Send>> {
        Ok(Box::new(io::stdout()))
    }
}

/// Merge sink writing to a file.
#[derive(Debug, Clone)]
pub struct FileSink {
    id: String,
    path: PathBuf,
}

impl FileSink {
    /// Create a new file sink.
    pub fn new(path: PathBuf) -> Self {
        let id = path.to_string_lossy().into_owned();
        Self { id, path }
    }

    /// Get the file path.
    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl MergeSink for FileSink {
    fn id(&self) -> &str {
        &self.id
    }

    fn open_truncate(&self) -> io::Result<Box<dyn Write + Send>> {
        let file = OpenOptions::new()
            .create(true)
            .truncate(true)
            .write(true)
            .open(&self.path)?;
        Ok(Box::new(file))
    }

    fn open_append(&self) -> io::Result<Box<dyn Write + Send>> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        Ok(Box::new(file))
    }
}
