//! LZW encoder: bytes to codes, greedy longest match.

use crate::config::Config;
use crate::dictionary::{Code, Dictionary};
use crate::error::Result;
use crate::session::Phase;

/// An encoding session.
///
/// One session may encode several inputs; the dictionary keeps growing
/// across them and the matching decoder session must see their codes in the
/// same order.
pub struct Encoder {
    dict: Dictionary,
    current: Vec<u8>,
    current_code: Option<Code>,
    // `current` holds the last flushed match; the next byte links it.
    linked: bool,
    phase: Phase,
}

impl Encoder {
    /// Create an encoder with the default dictionary cap.
    pub fn new() -> Self {
        Self::with_config(&Config::default())
    }

    /// Create an encoder with the given configuration.
    pub fn with_config(config: &Config) -> Self {
        Self {
            dict: Dictionary::with_config(config),
            current: Vec::new(),
            current_code: None,
            linked: false,
            phase: Phase::Ready,
        }
    }

    /// Encode one complete input, appending its codes to `out`.
    ///
    /// Equivalent to [`push`](Self::push) followed by [`flush`](Self::flush).
    ///
    /// # Errors
    /// Returns `Error::SessionClosed` after [`close`](Self::close).
    pub fn encode(&mut self, input: &[u8], out: &mut Vec<Code>) -> Result<()> {
        self.push(input, out)?;
        self.flush(out)
    }

    /// Feed bytes of the current input without ending it.
    ///
    /// The code of the match in progress is held back until a later byte
    /// breaks it or the input is flushed.
    pub fn push(&mut self, input: &[u8], out: &mut Vec<Code>) -> Result<()> {
        self.phase.ensure_open()?;
        self.extend(input, out);
        Ok(())
    }

    /// End the current input, emitting the code of any pending match.
    pub fn flush(&mut self, out: &mut Vec<Code>) -> Result<()> {
        self.phase.ensure_open()?;
        self.drain(out);
        Ok(())
    }

    /// Flush the current input and close the session.
    pub fn finish(&mut self, out: &mut Vec<Code>) -> Result<()> {
        self.flush(out)?;
        self.close();
        Ok(())
    }

    /// Close the session without flushing.
    pub fn close(&mut self) {
        self.phase = Phase::Closed;
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The session's dictionary.
    pub fn dictionary(&self) -> &Dictionary {
        &self.dict
    }

    fn extend(&mut self, input: &[u8], out: &mut Vec<Code>) {
        for &byte in input {
            self.current.push(byte);

            if self.linked {
                // The decoder inserts `flushed + byte` when it resolves the
                // next code; do the same here.
                self.linked = false;
                self.dict.try_insert(&self.current);
                self.restart(byte);
                continue;
            }

            match self.dict.lookup(&self.current) {
                Some(code) => self.current_code = Some(code),
                None => {
                    if let Some(code) = self.current_code {
                        out.push(code);
                    }
                    self.dict.try_insert(&self.current);
                    self.restart(byte);
                }
            }
        }
    }

    // `Draining` only brackets the flush; callers see `Ready` before and after.
    fn drain(&mut self, out: &mut Vec<Code>) {
        self.phase = Phase::Draining;
        if let Some(code) = self.current_code.take() {
            out.push(code);
            self.linked = true;
        }
        self.phase = Phase::Ready;
    }

    fn restart(&mut self, byte: u8) {
        self.current.clear();
        self.current.push(byte);
        self.current_code = Some(byte as Code);
    }
}

impl Default for Encoder {
    fn default() -> Self {
        Self::new()
    }
}

/// Encode `input` in a fresh session with the default configuration.
pub fn encode(input: &[u8]) -> Vec<Code> {
    let mut encoder = Encoder::new();
    let mut out = Vec::with_capacity(input.len() / 2 + 1);
    encoder.extend(input, &mut out);
    encoder.drain(&mut out);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_empty_input_emits_nothing() {
        assert!(encode(b"").is_empty());
    }

    #[test]
    fn test_singletons() {
        for byte in 0..=u8::MAX {
            assert_eq!(encode(&[byte]), vec![byte as Code]);
        }
    }

    #[test]
    fn test_classic_sequence() {
        let codes = encode(b"TOBEORNOTTOBEORTOBEORNOT");
        let expected: Vec<Code> = vec![
            b'T' as Code,
            b'O' as Code,
            b'B' as Code,
            b'E' as Code,
            b'O' as Code,
            b'R' as Code,
            b'N' as Code,
            b'O' as Code,
            b'T' as Code,
            256, // TO
            258, // BE
            260, // OR
            265, // TOB
            259, // EO
            261, // RN
            263, // OT
        ];
        assert_eq!(codes, expected);
    }

    #[test]
    fn test_dictionary_grows_by_or_repeat() {
        let mut encoder = Encoder::new();
        let mut out = Vec::new();
        encoder.push(b"TOBEOR", &mut out).unwrap();
        assert!(encoder.dictionary().len() > 256);
        assert_eq!(encoder.dictionary().lookup(b"OR"), Some(260));
    }

    #[test]
    fn test_push_holds_back_pending_match() {
        let mut encoder = Encoder::new();
        let mut out = Vec::new();
        encoder.push(b"AB", &mut out).unwrap();
        assert_eq!(out, vec![b'A' as Code]);
        encoder.flush(&mut out).unwrap();
        assert_eq!(out, vec![b'A' as Code, b'B' as Code]);
        // Nothing pending, nothing emitted.
        encoder.flush(&mut out).unwrap();
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn test_linked_inputs_share_dictionary() {
        let mut encoder = Encoder::new();
        let mut out = Vec::new();
        encoder.encode(b"AAAA", &mut out).unwrap();
        assert_eq!(out, vec![65, 256, 65]);
        out.clear();
        encoder.encode(b"AAAA", &mut out).unwrap();
        // "AA" already exists, so the boundary insertion is skipped.
        assert_eq!(out, vec![257, 65]);
    }

    #[test]
    fn test_one_shot_matches_session() {
        let input = b"abracadabra abracadabra";
        let mut encoder = Encoder::new();
        let mut out = Vec::new();
        encoder.encode(input, &mut out).unwrap();
        assert_eq!(encode(input), out);
    }

    #[test]
    fn test_flush_returns_to_ready() {
        let mut encoder = Encoder::new();
        let mut out = Vec::new();
        encoder.push(b"abc", &mut out).unwrap();
        assert_eq!(encoder.phase(), Phase::Ready);
        encoder.flush(&mut out).unwrap();
        assert_eq!(encoder.phase(), Phase::Ready);
        assert_eq!(out, vec![b'a' as Code, b'b' as Code, b'c' as Code]);
    }

    #[test]
    fn test_closed_session_rejects_input() {
        let mut encoder = Encoder::new();
        let mut out = Vec::new();
        encoder.finish(&mut out).unwrap();
        assert_eq!(encoder.phase(), Phase::Closed);
        assert!(matches!(
            encoder.encode(b"x", &mut out),
            Err(Error::SessionClosed)
        ));
    }

    #[test]
    fn test_capacity_reached_keeps_encoding() {
        let config = Config::new(260).unwrap();
        let mut encoder = Encoder::with_config(&config);
        let mut out = Vec::new();
        let input: Vec<u8> = (0..2000u32).map(|i| (i * 7 % 13) as u8).collect();
        encoder.encode(&input, &mut out).unwrap();
        assert_eq!(encoder.dictionary().len(), 260);
        assert!(out.iter().all(|&c| (c as usize) < 260));
    }
}
