//! # WARC Writer
//!
//! Serializes web-capture records into the WARC (Web ARChive) format.
//!
//! ## Record layout
//!
//! ```text
//! WARC/1.0\r\n
//! Content-Length: 5\r\n
//! WARC-Type: resource\r\n
//! \r\n
//! hello\r\n\r\n
//! ```
//!
//! Fields are written in byte order of their names and empty values are
//! skipped. No WARC-level validation is performed: mandatory fields and
//! field names are the caller's business.
//!
//! ## Example
//!
//! ```
//! use warc_writer::{new_record_id, Format, Record, RecordWriter};
//!
//! let mut records = vec![
//!     Record::from_bytes(Format::Warc1_0, "hello")
//!         .with_field("WARC-Record-ID", new_record_id())
//!         .with_field("WARC-Type", "resource")
//!         .with_field("Content-Length", "5"),
//! ];
//!
//! let mut writer = RecordWriter::new(Vec::new());
//! writer.write_all(&mut records)?;
//! assert!(writer.into_inner().starts_with(b"WARC/1.0\r\n"));
//! # Ok::<(), warc_writer::WarcError>(())
//! ```

pub mod archive;
pub mod error;
pub mod http;
pub mod id;
pub mod replace;
pub mod types;
pub mod writer;

// Re-exports
pub use archive::ArchiveFile;
pub use error::{Result, WarcError};
pub use http::{
    request_block, write_http_headers, write_request_method_and_headers, HttpHeaders, HttpRequest,
};
pub use id::{new_record_id, record_id_from, OsRandom, RandomSource, SeededRandom};
pub use replace::replace_block_body;
pub use types::*;
pub use writer::{
    write_block, write_fields, write_header, write_record, write_records, RecordWriter,
    WriteStats, WriterConfig,
};
