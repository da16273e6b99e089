//! The string/code table shared by encoder and decoder.
//!
//! Both ends of a stream grow their own `Dictionary` through the same
//! sequence of `try_insert` calls, so code numbers agree without the table
//! ever being transmitted.

use std::collections::HashMap;

use tracing::debug;

use crate::config::Config;

/// A dictionary code as carried on the wire.
pub type Code = u16;

/// Number of single-byte strings seeded at initialization.
pub const ALPHABET_SIZE: usize = 256;

/// Default cap on dictionary entries (12 bits of code space).
pub const MAX_DICT_SIZE: usize = 4096;

/// Bidirectional string/code table.
///
/// Entries are only ever appended. Codes `0..256` hold the single bytes;
/// every later entry extends an existing one by exactly one byte.
#[derive(Clone, Debug)]
pub struct Dictionary {
    index: HashMap<Vec<u8>, Code>,
    entries: Vec<Vec<u8>>,
    capacity: usize,
}

impl Dictionary {
    /// Create an initialized dictionary with the default cap.
    pub fn new() -> Self {
        Self::with_config(&Config::default())
    }

    /// Create an initialized dictionary capped by `config`.
    pub fn with_config(config: &Config) -> Self {
        let capacity = config.max_dict_size();
        let mut dict = Self {
            index: HashMap::with_capacity(capacity),
            entries: Vec::with_capacity(capacity),
            capacity,
        };
        dict.initialize();
        dict
    }

    fn initialize(&mut self) {
        for byte in 0..=u8::MAX {
            self.index.insert(vec![byte], byte as Code);
            self.entries.push(vec![byte]);
        }
    }

    /// Code of `string`, if present.
    pub fn lookup(&self, string: &[u8]) -> Option<Code> {
        self.index.get(string).copied()
    }

    /// String stored under `code`, if assigned.
    pub fn get(&self, code: Code) -> Option<&[u8]> {
        self.entries.get(code as usize).map(Vec::as_slice)
    }

    /// Insert `string` under the next unused code.
    ///
    /// Returns `false` without mutating when the dictionary is full or the
    /// string is already present.
    pub fn try_insert(&mut self, string: &[u8]) -> bool {
        if self.is_full() || self.index.contains_key(string) {
            return false;
        }
        let code = self.entries.len() as Code;
        self.index.insert(string.to_vec(), code);
        self.entries.push(string.to_vec());
        if self.is_full() {
            debug!(entries = self.entries.len(), "dictionary reached capacity");
        }
        true
    }

    /// The code the next successful insertion would receive.
    ///
    /// Equals `capacity()` once the dictionary is full, which is never a
    /// valid code.
    pub fn next_code(&self) -> usize {
        self.entries.len()
    }

    /// Number of entries, single bytes included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false: the 256 single bytes are present from construction.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Maximum number of entries.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Whether further insertions are refused.
    pub fn is_full(&self) -> bool {
        self.entries.len() >= self.capacity
    }
}

impl Default for Dictionary {
    fn default() -> Self {
        Self::new()
    }
}
