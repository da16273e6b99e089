//! # Lempel–Ziv–Welch (LZW)
//!
//! *Adaptive dictionary compression with fixed-width codes.*
//!
//! ## Intuition First
//!
//! Imagine reading a text aloud to someone who writes it down, and every time
//! you say a phrase you have not said before, you both agree on a short number
//! for it. The next time the phrase comes up you just say the number. Neither
//! of you ever writes the phrasebook on the wire: the listener can always work
//! out which phrase was just numbered from what they have already heard.
//!
//! LZW does exactly this with bytes. The encoder greedily extends a match
//! while the dictionary knows it, emits the code of the longest known prefix,
//! and numbers the one-byte extension that broke the match. The decoder sees
//! the codes and performs the same insertions one step later.
//!
//! ## Historical Context
//!
//! ```text
//! 1977  Ziv, Lempel   LZ77: sliding-window references
//! 1978  Ziv, Lempel   LZ78: explicit phrase dictionary
//! 1984  Welch         LZW: implicit literals, dictionary seeded with the alphabet
//! 1985  Unix          compress(1) adopts LZW with growing code widths
//! 1987  CompuServe    GIF uses variable-width LZW
//! 1992  Adobe         TIFF and PDF LZWDecode filters
//! ```
//!
//! ## Formulation
//!
//! Let $D$ be the dictionary, seeded with every byte at codes $0..255$. For
//! input $x_1 x_2 \ldots x_n$ with current match $w$:
//!
//! ```text
//! if w·x in D:  w ← w·x
//! else:         emit D[w];  D ← D ∪ {w·x};  w ← x
//! ```
//!
//! and $D[w]$ is emitted once more at the end of the input.
//!
//! The decoder only learns $x$ (the first byte of the *next* phrase) after
//! reading the next code. When that code is the entry inserted in this very
//! step, its value must be $w \cdot w_0$: the "KwKwK" case.
//!
//! ## Complexity Analysis
//!
//! - **Time**: $O(n)$ expected, one hash lookup per input byte.
//! - **Space**: $O(\sum |s|)$ over dictionary strings, bounded by the cap.
//!
//! ## Failure Modes
//!
//! 1. **Corrupt streams**: a code the decoder can neither resolve nor
//!    reconstruct is reported as [`Error::MalformedStream`]; nothing is guessed.
//! 2. **Saturation**: once the dictionary holds [`MAX_DICT_SIZE`] entries it
//!    stops growing. Both sides keep working with the frozen table, so
//!    compression degrades on shifting data but stays correct.
//!
//! ## Implementation Notes
//!
//! - Codes are always framed as 16-bit big-endian words ([`framing`]), whatever
//!   the cap. No header, no end marker.
//! - An [`Encoder`] session may encode several inputs into one stream; the
//!   dictionary carries over and one [`Decoder`] session decodes the
//!   concatenation.
//! - [`io`] and [`batch`] drive sessions over readers, writers and files.
//!
//! ```
//! let wire = lzw::compress(b"TOBEORNOTTOBEORTOBEORNOT");
//! assert_eq!(wire.len(), 32);
//! assert_eq!(lzw::decompress(&wire).unwrap(), b"TOBEORNOTTOBEORTOBEORNOT");
//! ```
//!
//! ## References
//!
//! - Ziv, J., Lempel, A. (1978). "Compression of individual sequences via variable-rate coding."
//! - Welch, T. A. (1984). "A Technique for High-Performance Data Compression." IEEE Computer 17(6).

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod batch;
pub mod config;
pub mod decoder;
pub mod dictionary;
pub mod encoder;
pub mod error;
pub mod framing;
pub mod io;
pub mod session;

pub use config::Config;
pub use decoder::{decode, Decoder};
pub use dictionary::{Code, Dictionary, ALPHABET_SIZE, MAX_DICT_SIZE};
pub use encoder::{encode, Encoder};
pub use error::{Error, Result};
pub use session::Phase;

/// Encode `input` in a fresh session and frame the codes.
pub fn compress(input: &[u8]) -> Vec<u8> {
    let codes = encode(input);
    let mut wire = Vec::with_capacity(codes.len() * framing::CODE_BYTES);
    framing::write_codes(&codes, &mut wire);
    wire
}

/// Unframe `wire` and decode it in a fresh session.
///
/// # Errors
/// Returns `Error::TruncatedCode` for an odd-length input and
/// `Error::MalformedStream` for an undecodable code.
pub fn decompress(wire: &[u8]) -> Result<Vec<u8>> {
    decode(&framing::read_codes(wire)?)
}
