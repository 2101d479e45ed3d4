//! On-disk archive files.
//!
//! An [`ArchiveFile`] owns a locked, buffered file for the span of one
//! archive write. The lock is released when the value is finished or
//! dropped.

use crate::error::{Result, WarcError};
use crate::types::Record;
use crate::writer::{RecordWriter, WriteStats, WriterConfig};
use fs2::FileExt;
use std::fs::{File, OpenOptions};
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use tracing::debug;

/// A WARC file being written.
pub struct ArchiveFile {
    path: PathBuf,
    writer: RecordWriter<BufWriter<File>>,
}

impl ArchiveFile {
    /// Create (or truncate) the archive at `path` and lock it exclusively.
    ///
    /// Fails with [`WarcError::Locked`] if another handle holds the lock;
    /// the existing file is left untouched in that case.
    pub fn create(path: impl AsRef<Path>, config: WriterConfig) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .open(&path)?;

        file.try_lock_exclusive()
            .map_err(|_| WarcError::Locked(path.clone()))?;
        file.set_len(0)?;

        debug!(path = %path.display(), "created archive");

        Ok(Self {
            path,
            writer: RecordWriter::with_config(BufWriter::new(file), config),
        })
    }

    /// Write one record.
    pub fn write(&mut self, record: &mut Record) -> Result<()> {
        self.writer.write(record)
    }

    /// Write records in order, stopping at the first failure.
    pub fn write_all(&mut self, records: &mut [Record]) -> Result<()> {
        self.writer.write_all(records)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn stats(&self) -> WriteStats {
        self.writer.stats()
    }

    /// Flush and sync the file, then release the lock.
    pub fn finish(mut self) -> Result<WriteStats> {
        self.writer.flush()?;
        self.writer.get_ref().get_ref().sync_all()?;

        let stats = self.writer.stats();
        debug!(
            path = %self.path.display(),
            records = stats.records_written,
            bytes = stats.bytes_written,
            "finished archive"
        );
        Ok(stats)
    }
}
