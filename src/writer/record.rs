//! Record writer.

use super::block::copy_block;
use super::header::write_header;
use super::DEFAULT_COPY_BUFFER_SIZE;
use crate::error::{Result, WarcError};
use crate::types::Record;
use serde::{Deserialize, Serialize};
use std::io::{self, Write};
use tracing::{debug, trace, warn};

/// Writer configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WriterConfig {
    /// Chunk size used when copying a block from its content source.
    /// Default: 64KB
    pub copy_buffer_size: usize,

    /// Flush the destination after every record.
    pub flush_after_record: bool,
}

impl Default for WriterConfig {
    fn default() -> Self {
        Self {
            copy_buffer_size: DEFAULT_COPY_BUFFER_SIZE,
            flush_after_record: false,
        }
    }
}

/// Counters for a [`RecordWriter`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WriteStats {
    /// Records written completely.
    pub records_written: u64,

    /// Bytes accepted by the destination, including any partial record
    /// left behind by a failed write.
    pub bytes_written: u64,
}

/// Writes records to a destination stream, one after another.
///
/// The writer does no locking; sharing one destination between several
/// writers interleaves their output.
pub struct RecordWriter<W: Write> {
    sink: W,
    config: WriterConfig,
    stats: WriteStats,
    buf: Vec<u8>,
}

impl<W: Write> RecordWriter<W> {
    /// Create a writer with the default configuration.
    pub fn new(sink: W) -> Self {
        Self::with_config(sink, WriterConfig::default())
    }

    /// Create a writer with a custom configuration.
    pub fn with_config(sink: W, config: WriterConfig) -> Self {
        let buf = vec![0u8; config.copy_buffer_size.max(1)];
        Self {
            sink,
            config,
            stats: WriteStats::default(),
            buf,
        }
    }

    /// Write one complete record: header section, then block.
    ///
    /// On error the destination may hold a truncated record.
    pub fn write(&mut self, record: &mut Record) -> Result<()> {
        let mut out = Counted {
            inner: &mut self.sink,
            count: &mut self.stats.bytes_written,
        };

        write_header(&mut out, record)?;
        let block_len = copy_block(&mut out, &mut record.content, &mut self.buf)?;
        if self.config.flush_after_record {
            out.flush().map_err(WarcError::Write)?;
        }

        self.stats.records_written += 1;
        trace!(
            format = %record.format,
            fields = record.fields.len(),
            block_len,
            "wrote record"
        );
        Ok(())
    }

    /// Write records in order, stopping at the first failure.
    pub fn write_all(&mut self, records: &mut [Record]) -> Result<()> {
        for (index, record) in records.iter_mut().enumerate() {
            if let Err(e) = self.write(record) {
                warn!(index, error = %e, "aborting record sequence");
                return Err(e);
            }
        }

        debug!(
            records = records.len(),
            bytes = self.stats.bytes_written,
            "wrote record sequence"
        );
        Ok(())
    }

    /// Flush the destination.
    pub fn flush(&mut self) -> Result<()> {
        self.sink.flush().map_err(WarcError::Write)
    }

    /// Counters so far.
    pub fn stats(&self) -> WriteStats {
        self.stats
    }

    pub fn config(&self) -> &WriterConfig {
        &self.config
    }

    pub fn get_ref(&self) -> &W {
        &self.sink
    }

    pub fn get_mut(&mut self) -> &mut W {
        &mut self.sink
    }

    /// Unwrap the destination. Nothing is flushed.
    pub fn into_inner(self) -> W {
        self.sink
    }
}

/// Write a single record to `w`.
pub fn write_record<W: Write + ?Sized>(w: &mut W, record: &mut Record) -> Result<()> {
    RecordWriter::new(w).write(record)
}

/// Write every record to `w` in order, stopping at the first failure.
pub fn write_records<W: Write + ?Sized>(w: &mut W, records: &mut [Record]) -> Result<()> {
    RecordWriter::new(w).write_all(records)
}

/// Counts the bytes the destination accepts.
struct Counted<'a, W: ?Sized> {
    inner: &'a mut W,
    count: &'a mut u64,
}

impl<W: Write + ?Sized> Write for Counted<'_, W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let n = self.inner.write(buf)?;
        *self.count += n as u64;
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Format;

    #[test]
    fn test_minimal_record() {
        let mut record = Record::from_bytes(Format::Warc1_0, "hello");
        let mut out = Vec::new();
        write_record(&mut out, &mut record).unwrap();
        assert_eq!(out, b"WARC/1.0\r\n\r\nhello\r\n\r\n");
    }

    #[test]
    fn test_full_record_layout() {
        let mut record = Record::from_bytes(Format::Warc1_0, "body")
            .with_field("WARC-Type", "resource")
            .with_field("Content-Length", "4")
            .with_field("WARC-Target-URI", "");
        let mut out = Vec::new();
        write_record(&mut out, &mut record).unwrap();
        assert_eq!(
            out,
            b"WARC/1.0\r\nContent-Length: 4\r\nWARC-Type: resource\r\n\r\nbody\r\n\r\n".as_slice()
        );
    }

    #[test]
    fn test_stats_track_records_and_bytes() {
        let mut writer = RecordWriter::new(Vec::new());
        let mut records = vec![
            Record::from_bytes(Format::Warc1_0, "a"),
            Record::from_bytes(Format::Warc1_1, "bc"),
        ];
        writer.write_all(&mut records).unwrap();

        let stats = writer.stats();
        assert_eq!(stats.records_written, 2);
        let out = writer.into_inner();
        assert_eq!(stats.bytes_written, out.len() as u64);
    }

    #[test]
    fn test_content_consumed_once() {
        let mut record = Record::from_bytes(Format::Warc1_0, "once");
        let mut writer = RecordWriter::new(Vec::new());
        writer.write(&mut record).unwrap();
        writer.write(&mut record).unwrap();
        assert_eq!(
            writer.into_inner(),
            b"WARC/1.0\r\n\r\nonce\r\n\r\nWARC/1.0\r\n\r\n\r\n\r\n".as_slice()
        );
    }

    #[test]
    fn test_zero_buffer_size_is_clamped() {
        let config = WriterConfig {
            copy_buffer_size: 0,
            ..Default::default()
        };
        let mut writer = RecordWriter::with_config(Vec::new(), config);
        writer
            .write(&mut Record::from_bytes(Format::Warc1_0, "xyz"))
            .unwrap();
        assert_eq!(writer.into_inner(), b"WARC/1.0\r\n\r\nxyz\r\n\r\n".as_slice());
    }

    #[test]
    fn test_flush_after_record() {
        struct FlushCounter {
            data: Vec<u8>,
            flushes: usize,
        }

        impl Write for FlushCounter {
            fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
                self.data.extend_from_slice(buf);
                Ok(buf.len())
            }

            fn flush(&mut self) -> io::Result<()> {
                self.flushes += 1;
                Ok(())
            }
        }

        let config = WriterConfig {
            flush_after_record: true,
            ..Default::default()
        };
        let sink = FlushCounter {
            data: Vec::new(),
            flushes: 0,
        };
        let mut writer = RecordWriter::with_config(sink, config);
        let mut records = vec![
            Record::new(Format::Warc1_0),
            Record::new(Format::Warc1_0),
            Record::new(Format::Warc1_0),
        ];
        writer.write_all(&mut records).unwrap();
        assert_eq!(writer.get_ref().flushes, 3);
    }

    #[test]
    fn test_config_deserializes_with_defaults() {
        let config: WriterConfig =
            serde_json::from_str(r#"{"flush_after_record": true}"#).unwrap();
        assert!(config.flush_after_record);
        assert_eq!(config.copy_buffer_size, DEFAULT_COPY_BUFFER_SIZE);
    }
}
