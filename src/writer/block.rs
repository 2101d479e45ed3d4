//! Block copying.

use super::{BLOCK_TERMINATOR, DEFAULT_COPY_BUFFER_SIZE};
use crate::error::{Result, WarcError};
use std::io::{ErrorKind, Read, Write};

/// Copy `content` to `w` until exhausted, then write the `\r\n\r\n`
/// terminator. Returns the number of content bytes copied.
pub fn write_block<W, R>(w: &mut W, content: &mut R) -> Result<u64>
where
    W: Write + ?Sized,
    R: Read + ?Sized,
{
    let mut buf = vec![0u8; DEFAULT_COPY_BUFFER_SIZE];
    copy_block(w, content, &mut buf)
}

/// Same as [`write_block`] with a caller-owned copy buffer.
pub(crate) fn copy_block<W, R>(w: &mut W, content: &mut R, buf: &mut [u8]) -> Result<u64>
where
    W: Write + ?Sized,
    R: Read + ?Sized,
{
    let mut copied = 0u64;
    loop {
        let n = match content.read(buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(WarcError::Read(e)),
        };
        w.write_all(&buf[..n]).map_err(WarcError::Write)?;
        copied += n as u64;
    }

    w.write_all(BLOCK_TERMINATOR).map_err(WarcError::Write)?;
    Ok(copied)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, Cursor};

    #[test]
    fn test_block_appends_terminator() {
        let mut out = Vec::new();
        let copied = write_block(&mut out, &mut Cursor::new(b"hello")).unwrap();
        assert_eq!(copied, 5);
        assert_eq!(out, b"hello\r\n\r\n");
    }

    #[test]
    fn test_empty_block() {
        let mut out = Vec::new();
        let copied = write_block(&mut out, &mut io::empty()).unwrap();
        assert_eq!(copied, 0);
        assert_eq!(out, b"\r\n\r\n");
    }

    #[test]
    fn test_small_buffer_copies_everything() {
        let content: Vec<u8> = (0..=255u8).cycle().take(1000).collect();
        let mut out = Vec::new();
        let mut buf = [0u8; 7];
        let copied = copy_block(&mut out, &mut Cursor::new(content.clone()), &mut buf).unwrap();
        assert_eq!(copied, 1000);
        assert_eq!(&out[..1000], &content[..]);
        assert_eq!(&out[1000..], BLOCK_TERMINATOR);
    }

    #[test]
    fn test_interrupted_read_is_retried() {
        struct Flaky {
            interrupted: bool,
            inner: Cursor<&'static [u8]>,
        }

        impl Read for Flaky {
            fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
                if !self.interrupted {
                    self.interrupted = true;
                    return Err(io::Error::new(ErrorKind::Interrupted, "signal"));
                }
                self.inner.read(buf)
            }
        }

        let mut source = Flaky {
            interrupted: false,
            inner: Cursor::new(&b"data"[..]),
        };
        let mut out = Vec::new();
        write_block(&mut out, &mut source).unwrap();
        assert_eq!(out, b"data\r\n\r\n");
    }

    #[test]
    fn test_read_error_is_tagged() {
        struct Broken;

        impl Read for Broken {
            fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
                Err(io::Error::new(ErrorKind::BrokenPipe, "source gone"))
            }
        }

        let mut out = Vec::new();
        let err = write_block(&mut out, &mut Broken).unwrap_err();
        assert!(matches!(err, WarcError::Read(_)));
        assert!(out.is_empty());
    }
}
