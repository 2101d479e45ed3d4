//! Version line and field section.

use super::CRLF;
use crate::error::{Result, WarcError};
use crate::types::{Fields, Record};
use std::io::Write;

/// Write the record's version line, its fields and the blank line that
/// closes the header section.
pub fn write_header<W: Write + ?Sized>(w: &mut W, record: &Record) -> Result<()> {
    write_line(w, record.format.as_str())?;
    write_fields(w, &record.fields)?;
    w.write_all(CRLF).map_err(WarcError::Write)
}

/// Write `name: value\r\n` for every field, ordered by name.
///
/// Fields with an empty value are skipped. Ordering is plain byte order of
/// the names; no WARC field priority is applied.
pub fn write_fields<W: Write + ?Sized>(w: &mut W, fields: &Fields) -> Result<()> {
    let mut names: Vec<&String> = fields.keys().collect();
    names.sort_unstable();

    for name in names {
        write_field(w, name, &fields[name])?;
    }
    Ok(())
}

fn write_field<W: Write + ?Sized>(w: &mut W, name: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Ok(());
    }
    write_line(w, &format!("{}: {}", name, value))
}

fn write_line<W: Write + ?Sized>(w: &mut W, line: &str) -> Result<()> {
    let mut buf = Vec::with_capacity(line.len() + CRLF.len());
    buf.extend_from_slice(line.as_bytes());
    buf.extend_from_slice(CRLF);
    w.write_all(&buf).map_err(WarcError::Write)
}
