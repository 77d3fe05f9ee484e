//! File writer for the persistent log layer.
//!
//! The terminal layer writes straight to stderr; only the file layer needs
//! a custom [`MakeWriter`](tracing_subscriber::fmt::MakeWriter) so that each
//! event lands in the log as one contiguous append.

use parking_lot::Mutex;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::sync::Arc;

/// [`MakeWriter`](tracing_subscriber::fmt::MakeWriter) for the file layer.
///
/// Build the layer with `.with_ansi(false)` so the log stays plain text.
#[derive(Clone)]
pub struct FileMakeWriter {
    file: Arc<Mutex<File>>,
}

impl FileMakeWriter {
    pub fn new(file: Arc<Mutex<File>>) -> Self {
        Self { file }
    }
}

impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for FileMakeWriter {
    type Writer = FileWriter;

    fn make_writer(&'a self) -> Self::Writer {
        FileWriter {
            file: Arc::clone(&self.file),
            buf: Vec::with_capacity(256),
        }
    }
}

/// Per-event writer. Buffers the formatted event and appends it on drop.
pub struct FileWriter {
    file: Arc<Mutex<File>>,
    buf: Vec<u8>,
}

impl Write for FileWriter {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for FileWriter {
    fn drop(&mut self) {
        if self.buf.is_empty() {
            return;
        }

        let mut file = self.file.lock();
        let _ = file.write_all(&self.buf);
        let _ = file.flush();
    }
}

/// Opens `<log_dir>/<file_name>` for appending, creating the directory.
///
/// Returns `None` (after a warning on stderr) if either step fails; a
/// missing log file never stops a run.
pub fn open_log_file(log_dir: &Path, file_name: &str) -> Option<Arc<Mutex<File>>> {
    if let Err(e) = std::fs::create_dir_all(log_dir) {
        eprintln!(
            "Warning: cannot create log directory {}: {e}",
            log_dir.display()
        );
        return None;
    }

    let log_path = log_dir.join(file_name);

    match OpenOptions::new().create(true).append(true).open(&log_path) {
        Ok(file) => Some(Arc::new(Mutex::new(file))),
        Err(e) => {
            eprintln!("Warning: cannot open log file {}: {e}", log_path.display());
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::fmt::MakeWriter;

    #[test]
    fn events_are_appended_on_drop() {
        let dir = tempfile::tempdir().unwrap();
        let file = open_log_file(&dir.path().join("logs"), "test.log").unwrap();
        let make = FileMakeWriter::new(file);

        {
            let mut writer = make.make_writer();
            writer.write_all(b"first ").unwrap();
            writer.write_all(b"event\n").unwrap();
            // Nothing reaches the file until the writer is dropped.
            let on_disk = std::fs::read_to_string(dir.path().join("logs/test.log")).unwrap();
            assert!(on_disk.is_empty());
        }
        {
            let mut writer = make.make_writer();
            writer.write_all(b"second event\n").unwrap();
        }

        let on_disk = std::fs::read_to_string(dir.path().join("logs/test.log")).unwrap();
        assert_eq!(on_disk, "first event\nsecond event\n");
    }

    #[test]
    fn unusable_directory_is_not_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("not-a-dir");
        std::fs::write(&blocker, "").unwrap();

        assert!(open_log_file(&blocker, "test.log").is_none());
    }
}
