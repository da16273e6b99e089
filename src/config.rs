//! Session configuration.

use crate::dictionary::{ALPHABET_SIZE, MAX_DICT_SIZE};
use crate::error::{Error, Result};

/// Largest cap representable on the 16-bit wire.
pub const MAX_WIRE_DICT_SIZE: usize = 1 << 16;

/// Parameters shared by both ends of a stream.
///
/// Nothing here is transmitted: the encoder and the decoder of one stream
/// must be built from equal configurations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    max_dict_size: usize,
}

impl Config {
    /// Create a configuration with the given dictionary cap.
    ///
    /// # Errors
    /// Returns `Error::InvalidConfig` unless `ALPHABET_SIZE < max_dict_size <= 65536`.
    pub fn new(max_dict_size: usize) -> Result<Self> {
        if max_dict_size <= ALPHABET_SIZE {
            return Err(Error::InvalidConfig(format!(
                "max_dict_size must exceed {ALPHABET_SIZE}, got {max_dict_size}"
            )));
        }
        if max_dict_size > MAX_WIRE_DICT_SIZE {
            return Err(Error::InvalidConfig(format!(
                "max_dict_size must not exceed {MAX_WIRE_DICT_SIZE}, got {max_dict_size}"
            )));
        }
        Ok(Self { max_dict_size })
    }

    /// Maximum number of dictionary entries, single bytes included.
    pub fn max_dict_size(&self) -> usize {
        self.max_dict_size
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_dict_size: MAX_DICT_SIZE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_cap() {
        assert_eq!(Config::default().max_dict_size(), 4096);
    }

    #[test]
    fn test_bounds() {
        assert!(Config::new(256).is_err());
        assert!(Config::new(257).is_ok());
        assert!(Config::new(65536).is_ok());
        assert!(matches!(Config::new(65537), Err(Error::InvalidConfig(_))));
    }
}
