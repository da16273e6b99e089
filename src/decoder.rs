//! LZW decoder: codes to bytes.
//!
//! The decoder is the trust boundary of the codec. It rebuilds the
//! encoder's dictionary one insertion behind, resolves the single code it
//! cannot know yet (the KwKwK case), and rejects everything else.

use tracing::warn;

use crate::config::Config;
use crate::dictionary::{Code, Dictionary};
use crate::error::{Error, Result};
use crate::session::Phase;

/// A decoding session.
pub struct Decoder {
    dict: Dictionary,
    // Empty until the first code of the session; dictionary strings never are.
    previous: Vec<u8>,
    scratch: Vec<u8>,
    position: u64,
    phase: Phase,
}

impl Decoder {
    /// Create a decoder with the default dictionary cap.
    pub fn new() -> Self {
        Self::with_config(&Config::default())
    }

    /// Create a decoder with the given configuration.
    pub fn with_config(config: &Config) -> Self {
        Self {
            dict: Dictionary::with_config(config),
            previous: Vec::new(),
            scratch: Vec::new(),
            position: 0,
            phase: Phase::Ready,
        }
    }

    /// Decode `codes`, appending the bytes to `out`.
    ///
    /// May be called repeatedly; codes continue the session's stream.
    ///
    /// # Errors
    /// Returns `Error::MalformedStream` on the first code that cannot be
    /// resolved and closes the session. Bytes of the codes before it remain
    /// in `out`.
    pub fn decode(&mut self, codes: &[Code], out: &mut Vec<u8>) -> Result<()> {
        self.phase.ensure_open()?;
        for &code in codes {
            if let Err(e) = self.step(code, out) {
                self.phase = Phase::Closed;
                return Err(e);
            }
        }
        Ok(())
    }

    /// Close the session.
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

    /// Number of codes consumed so far.
    pub fn position(&self) -> u64 {
        self.position
    }

    fn step(&mut self, code: Code, out: &mut Vec<u8>) -> Result<()> {
        let position = self.position;

        let first = match self.dict.get(code) {
            Some(entry) => entry[0],
            None if !self.previous.is_empty() && code as usize == self.dict.next_code() => {
                self.previous[0]
            }
            None => return Err(self.reject(code, position)),
        };

        if !self.previous.is_empty() {
            self.scratch.clear();
            self.scratch.extend_from_slice(&self.previous);
            self.scratch.push(first);
            self.dict.try_insert(&self.scratch);
        }

        // In the KwKwK case the entry exists only if the insertion above took.
        let Some(entry) = self.dict.get(code) else {
            return Err(self.reject(code, position));
        };
        out.extend_from_slice(entry);
        self.previous.clear();
        self.previous.extend_from_slice(entry);
        self.position += 1;
        Ok(())
    }

    fn reject(&self, code: Code, position: u64) -> Error {
        if code as usize >= self.dict.capacity() {
            warn!(code, position, capacity = self.dict.capacity(), "code outside dictionary range");
        }
        Error::MalformedStream { code, position }
    }
}

impl Default for Decoder {
    fn default() -> Self {
        Self::new()
    }
}

/// Decode `codes` in a fresh session with the default configuration.
pub fn decode(codes: &[Code]) -> Result<Vec<u8>> {
    let mut decoder = Decoder::new();
    let mut out = Vec::with_capacity(codes.len() * 2);
    decoder.decode(codes, &mut out)?;
    Ok(out)
}
