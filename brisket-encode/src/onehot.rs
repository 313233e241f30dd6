//! One-hot encoding of DNA sequences.

use log::trace;

use crate::matrix::OneHotMatrix;
use crate::table::{COLUMNS, ROW_TABLE};

/// One-hot encode a DNA sequence.
///
/// Produces one row per input byte. `A`, `T`, `C`, `G` (either case) set a
/// single `1` in columns 0, 1, 2, 3 respectively; every other byte yields an
/// all-zero row. The function never fails, and an empty input gives a
/// `(0, 4)` matrix.
///
/// Runs in a single pass with one allocation for the output.
pub fn encode_seq(seq: &[u8]) -> OneHotMatrix {
    trace!("one-hot encoding {} bytes", seq.len());
    let mut data = Vec::with_capacity(seq.len() * COLUMNS);
    for &b in seq {
        data.extend_from_slice(&ROW_TABLE[b as usize]);
    }
    OneHotMatrix::from_rows_unchecked(data)
}

/// One-hot encode a string, one row per `char`.
///
/// ASCII input is identical to [`encode_seq`] on its bytes. A non-ASCII
/// character yields a single all-zero row rather than one row per UTF-8 byte.
pub fn encode_str(seq: &str) -> OneHotMatrix {
    if seq.is_ascii() {
        return encode_seq(seq.as_bytes());
    }
    trace!("one-hot encoding {} bytes of non-ASCII text", seq.len());
    let mut data = Vec::with_capacity(seq.len() * COLUMNS);
    for ch in seq.chars() {
        let row = if ch.is_ascii() {
            ROW_TABLE[ch as usize]
        } else {
            [0; COLUMNS]
        };
        data.extend_from_slice(&row);
    }
    OneHotMatrix::from_rows_unchecked(data)
}
