//! Fixed-width code framing.
//!
//! Every code occupies exactly two bytes, most significant byte first:
//!
//! ```text
//! [ code >> 8 ][ code & 0xFF ] [ ... ] ...
//! ```
//!
//! There is no header, no length prefix and no end marker; the stream ends
//! where the transport ends.

use std::io::{self, Read, Write};

use byteorder::{BigEndian, ByteOrder, ReadBytesExt, WriteBytesExt};

use crate::dictionary::Code;
use crate::error::{Error, Result};

/// Bytes per framed code.
pub const CODE_BYTES: usize = 2;

/// Append the wire form of `codes` to `out`.
pub fn write_codes(codes: &[Code], out: &mut Vec<u8>) {
    out.reserve(codes.len() * CODE_BYTES);
    for &code in codes {
        let mut buf = [0u8; CODE_BYTES];
        BigEndian::write_u16(&mut buf, code);
        out.extend_from_slice(&buf);
    }
}

/// Parse a complete framed buffer into codes.
///
/// # Errors
/// Returns `Error::TruncatedCode` if `wire` has an odd length.
pub fn read_codes(wire: &[u8]) -> Result<Vec<Code>> {
    if wire.len() % CODE_BYTES != 0 {
        return Err(Error::TruncatedCode {
            len: wire.len() as u64,
        });
    }
    Ok(wire.chunks_exact(CODE_BYTES).map(BigEndian::read_u16).collect())
}

/// Writes codes to an underlying writer.
pub struct CodeWriter<W: Write> {
    inner: W,
    written: u64,
}

impl<W: Write> CodeWriter<W> {
    /// Wrap `inner`.
    pub fn new(inner: W) -> Self {
        Self { inner, written: 0 }
    }

    /// Write a single code.
    pub fn write_code(&mut self, code: Code) -> io::Result<()> {
        self.inner.write_u16::<BigEndian>(code)?;
        self.written += 1;
        Ok(())
    }

    /// Write a batch of codes.
    pub fn write_all(&mut self, codes: &[Code]) -> io::Result<()> {
        let mut buf = Vec::with_capacity(codes.len() * CODE_BYTES);
        write_codes(codes, &mut buf);
        self.inner.write_all(&buf)?;
        self.written += codes.len() as u64;
        Ok(())
    }

    /// Number of codes written.
    pub fn codes_written(&self) -> u64 {
        self.written
    }

    /// Flush the underlying writer.
    pub fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }

    /// Unwrap the underlying writer.
    pub fn into_inner(self) -> W {
        self.inner
    }
}

/// Reads codes from an underlying reader.
///
/// Yields `Err(Error::TruncatedCode)` once if the reader ends in the middle
/// of a code, then stops.
pub struct CodeReader<R: Read> {
    inner: R,
    read: u64,
    done: bool,
}

impl<R: Read> CodeReader<R> {
    /// Wrap `inner`.
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            read: 0,
            done: false,
        }
    }

    /// Number of complete codes read.
    pub fn codes_read(&self) -> u64 {
        self.read
    }

    fn next_code(&mut self) -> Result<Option<Code>> {
        let high = match self.inner.read_u8() {
            Ok(b) => b,
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let low = match self.inner.read_u8() {
            Ok(b) => b,
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => {
                return Err(Error::TruncatedCode {
                    len: self.read * CODE_BYTES as u64 + 1,
                })
            }
            Err(e) => return Err(e.into()),
        };
        self.read += 1;
        Ok(Some(BigEndian::read_u16(&[high, low])))
    }
}

impl<R: Read> Iterator for CodeReader<R> {
    type Item = Result<Code>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.next_code() {
            Ok(Some(code)) => Some(Ok(code)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_big_endian_layout() {
        let mut out = Vec::new();
        write_codes(&[0x0102, 0x0FFF, 65], &mut out);
        assert_eq!(out, vec![0x01, 0x02, 0x0F, 0xFF, 0x00, 0x41]);
    }

    #[test]
    fn test_read_codes_rejects_odd_length() {
        assert!(matches!(
            read_codes(&[0, 65, 1]),
            Err(Error::TruncatedCode { len: 3 })
        ));
        assert_eq!(read_codes(&[]).unwrap(), Vec::<Code>::new());
    }

    #[test]
    fn test_reader_and_writer() {
        let mut writer = CodeWriter::new(Vec::new());
        writer.write_code(300).unwrap();
        writer.write_all(&[1, 2]).unwrap();
        assert_eq!(writer.codes_written(), 3);
        let wire = writer.into_inner();

        let mut reader = CodeReader::new(Cursor::new(wire));
        let codes: Vec<Code> = reader.by_ref().collect::<Result<_>>().unwrap();
        assert_eq!(codes, vec![300, 1, 2]);
        assert_eq!(reader.codes_read(), 3);
    }

    #[test]
    fn test_reader_truncated_tail() {
        let mut reader = CodeReader::new(Cursor::new(vec![0, 1, 0]));
        assert_eq!(reader.next().unwrap().unwrap(), 1);
        assert!(matches!(
            reader.next(),
            Some(Err(Error::TruncatedCode { len: 3 }))
        ));
        assert!(reader.next().is_none());
    }
}
