//! Block body replacement on serialized record bytes.
//!
//! This is a literal byte-slicing rule, not a header-preserving rewrite:
//! the result is everything from the last `\r\n` in `data` onward, followed
//! by `repl`. Headers before that point are dropped, and a block that itself
//! contains `\r\n` is cut at its last line break.

use crate::writer::CRLF;

/// Replace the body of a serialized record.
///
/// Returns `repl` unchanged when `data` holds no `\r\n`.
pub fn replace_block_body(data: &[u8], repl: &[u8]) -> Vec<u8> {
    match last_crlf(data) {
        None => repl.to_vec(),
        Some(start) => {
            let mut out = Vec::with_capacity(data.len() - start + repl.len());
            out.extend_from_slice(&data[start..]);
            out.extend_from_slice(repl);
            out
        }
    }
}

fn last_crlf(data: &[u8]) -> Option<usize> {
    data.windows(CRLF.len()).rposition(|window| window == CRLF)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Format, Record};
    use crate::writer::write_record;

    #[test]
    fn test_no_crlf_returns_replacement() {
        assert_eq!(replace_block_body(b"no line breaks", b"new"), b"new");
        assert_eq!(replace_block_body(b"", b"new"), b"new");
        assert_eq!(replace_block_body(b"lf only\n", b"new"), b"new");
    }

    #[test]
    fn test_slices_from_last_crlf() {
        assert_eq!(replace_block_body(b"head\r\nold", b"new"), b"\r\noldnew");
    }

    #[test]
    fn test_lone_cr_is_not_a_break() {
        assert_eq!(replace_block_body(b"a\r\nb\rc", b"!"), b"\r\nb\rc!");
    }

    #[test]
    fn test_serialized_record_keeps_only_terminator() {
        let mut record = Record::from_bytes(Format::Warc1_0, "old body")
            .with_field("WARC-Type", "resource");
        let mut data = Vec::new();
        write_record(&mut data, &mut record).unwrap();

        // The final CRLF of the terminator is all that survives.
        assert_eq!(replace_block_body(&data, b"new body"), b"\r\nnew body");
    }

    #[test]
    fn test_empty_replacement() {
        assert_eq!(replace_block_body(b"x\r\ny", b""), b"\r\ny");
    }
}
