/*!
 * Incremental output of translated subtitle text.
 *
 * Every append is written, flushed and synced before it returns, so a run
 * that stops after batch `i` leaves exactly batches `1..=i` on disk.
 */

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Destination for translated batches
pub trait OutputSink {
    /// Append `text` and make it durable before returning
    fn append(&mut self, text: &str) -> io::Result<()>;
}

/// Append-only output file owned by the current run
#[derive(Debug)]
pub struct OutputFile {
    path: PathBuf,
    file: File,
}

impl OutputFile {
    /// Path of the file being written
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl OutputSink for OutputFile {
    fn append(&mut self, text: &str) -> io::Result<()> {
        self.file.write_all(text.as_bytes())?;
        self.file.flush()?;
        self.file.sync_data()
    }
}

/// In-memory sink, one entry per append
impl OutputSink for Vec<String> {
    fn append(&mut self, text: &str) -> io::Result<()> {
        self.push(text.to_string());
        Ok(())
    }
}

/// Delete any existing file at `path` and open a fresh, empty one for appending
pub fn open_output<P: AsRef<Path>>(path: P) -> io::Result<OutputFile> {
    let path = path.as_ref();
    match fs::remove_file(path) {
        Ok(()) => {}
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => return Err(e),
    }

    let file = OpenOptions::new()
        .create_new(true)
        .append(true)
        .open(path)?;

    Ok(OutputFile {
        path: path.to_path_buf(),
        file,
    })
}
