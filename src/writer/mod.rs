//! Record serialization.
//!
//! A record is written as a version line, its sorted non-empty fields,
//! a blank line, the raw block and a `\r\n\r\n` terminator. Writes go
//! straight to the destination; nothing is buffered beyond one copy chunk
//! of the block.

mod block;
mod header;
mod record;

pub use block::write_block;
pub use header::{write_fields, write_header};
pub use record::{write_record, write_records, RecordWriter, WriteStats, WriterConfig};

/// WARC line terminator.
pub const CRLF: &[u8] = b"\r\n";

/// Terminator written after every block.
pub const BLOCK_TERMINATOR: &[u8] = b"\r\n\r\n";

/// Default chunk size for copying a block from its content source.
pub const DEFAULT_COPY_BUFFER_SIZE: usize = 64 * 1024;
