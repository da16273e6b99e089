//! Drive encoder and decoder sessions over `Read`/`Write`.

use std::io::{BufReader, BufWriter, Read, Write};

use tracing::debug;

use crate::decoder::Decoder;
use crate::dictionary::Code;
use crate::encoder::Encoder;
use crate::error::{Error, Result};
use crate::framing::{CodeReader, CodeWriter, CODE_BYTES};

/// Read buffer size for streaming.
pub const READ_BUF_SIZE: usize = 64 * 1024;

/// Counters for one streamed input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StreamStats {
    /// Bytes consumed from the reader.
    pub bytes_in: u64,
    /// Bytes produced on the writer.
    pub bytes_out: u64,
    /// Codes written or read.
    pub codes: u64,
}

/// Encode everything `reader` yields as one input of `encoder`'s session.
///
/// The session stays open so further inputs can follow into the same
/// output.
pub fn compress_stream<R: Read, W: Write>(
    encoder: &mut Encoder,
    reader: R,
    writer: W,
) -> Result<StreamStats> {
    let mut reader = BufReader::with_capacity(READ_BUF_SIZE, reader);
    let mut writer = CodeWriter::new(BufWriter::new(writer));
    let mut buf = vec![0u8; READ_BUF_SIZE];
    let mut codes: Vec<Code> = Vec::new();
    let mut stats = StreamStats::default();

    loop {
        let n = reader.read(&mut buf)?;
        if n == 0 {
            break;
        }
        stats.bytes_in += n as u64;
        encoder.push(&buf[..n], &mut codes)?;
        writer.write_all(&codes)?;
        codes.clear();
    }
    encoder.flush(&mut codes)?;
    writer.write_all(&codes)?;
    writer.flush()?;

    stats.codes = writer.codes_written();
    stats.bytes_out = stats.codes * CODE_BYTES as u64;
    debug!(
        bytes_in = stats.bytes_in,
        codes = stats.codes,
        dict_len = encoder.dictionary().len(),
        "compressed input"
    );
    Ok(stats)
}

/// Decode the framed code stream of `reader` into `writer`.
///
/// On a malformed or truncated stream the bytes decoded before the fault
/// have already been written when the error is returned.
pub fn decompress_stream<R: Read, W: Write>(
    decoder: &mut Decoder,
    reader: R,
    writer: W,
) -> Result<StreamStats> {
    const BATCH: usize = 4096;

    let mut codes = CodeReader::new(BufReader::with_capacity(READ_BUF_SIZE, reader));
    let mut writer = BufWriter::new(writer);
    let mut batch: Vec<Code> = Vec::with_capacity(BATCH);
    let mut out = Vec::new();
    let mut stats = StreamStats::default();

    let mut fault: Option<Error> = None;
    loop {
        batch.clear();
        for code in codes.by_ref().take(BATCH) {
            match code {
                Ok(code) => batch.push(code),
                Err(e) => {
                    fault = Some(e);
                    break;
                }
            }
        }
        if batch.is_empty() && fault.is_none() {
            break;
        }

        out.clear();
        let decoded = decoder.decode(&batch, &mut out);
        writer.write_all(&out)?;
        stats.bytes_out += out.len() as u64;

        if let Some(e) = decoded.err().or_else(|| fault.take()) {
            writer.flush()?;
            return Err(e);
        }
    }
    writer.flush()?;

    stats.codes = codes.codes_read();
    stats.bytes_in = stats.codes * CODE_BYTES as u64;
    debug!(
        codes = stats.codes,
        bytes_out = stats.bytes_out,
        "decompressed stream"
    );
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_stream_roundtrip() {
        let input: Vec<u8> = (0..200_000u32).map(|i| (i % 251) as u8 ^ (i / 1000) as u8).collect();
        let mut wire = Vec::new();
        let mut encoder = Encoder::new();
        let stats = compress_stream(&mut encoder, Cursor::new(&input), &mut wire).unwrap();
        assert_eq!(stats.bytes_in, input.len() as u64);
        assert_eq!(stats.bytes_out, wire.len() as u64);

        let mut out = Vec::new();
        let mut decoder = Decoder::new();
        let stats = decompress_stream(&mut decoder, Cursor::new(&wire), &mut out).unwrap();
        assert_eq!(stats.bytes_out, input.len() as u64);
        assert_eq!(out, input);
    }

    #[test]
    fn test_buffered_reads_match_one_shot() {
        // Read boundaries must not change the output.
        let input: Vec<u8> = b"abcabcabd".iter().copied().cycle().take(3 * READ_BUF_SIZE + 17).collect();
        let mut wire = Vec::new();
        compress_stream(&mut Encoder::new(), Cursor::new(&input), &mut wire).unwrap();
        let mut expected = Vec::new();
        crate::framing::write_codes(&crate::encode(&input), &mut expected);
        assert_eq!(wire, expected);
    }

    #[test]
    fn test_two_inputs_one_output() {
        let mut wire = Vec::new();
        let mut encoder = Encoder::new();
        compress_stream(&mut encoder, Cursor::new(b"TOBEORNOT"), &mut wire).unwrap();
        compress_stream(&mut encoder, Cursor::new(b"TOBEORTOBEORNOT"), &mut wire).unwrap();

        let mut out = Vec::new();
        decompress_stream(&mut Decoder::new(), Cursor::new(&wire), &mut out).unwrap();
        assert_eq!(out, b"TOBEORNOTTOBEORTOBEORNOT");
    }

    #[test]
    fn test_truncated_stream_keeps_prefix() {
        let mut wire = Vec::new();
        crate::framing::write_codes(&[b'h' as Code, b'i' as Code], &mut wire);
        wire.push(0);

        let mut out = Vec::new();
        let err = decompress_stream(&mut Decoder::new(), Cursor::new(&wire), &mut out).unwrap_err();
        assert!(matches!(err, Error::TruncatedCode { len: 5 }));
        assert_eq!(out, b"hi");
    }
}
