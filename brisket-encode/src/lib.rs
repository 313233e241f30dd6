//! One-hot encoding of DNA sequences.
//!
//! Turns a sequence of bases into an `N x 4` matrix of `u8`, one row per
//! input position, with columns in the fixed order **A, T, C, G**:
//!
//! - [`encode_seq`] — byte-oriented encoder driven by a 256-entry lookup table
//! - [`encode_str`] — one row per `char`, for text that may contain non-ASCII
//! - [`OneHotMatrix`] — the owned, row-major result with row access,
//!   stacking, and decoding back to bases
//!
//! Unrecognized characters (including `N` and other ambiguity codes) are
//! encoded as all-zero rows. Encoding never fails.
//!
//! # Example
//!
//! ```
//! use brisket_encode::encode_seq;
//!
//! let m = encode_seq(b"ATCGN");
//! assert_eq!(m.shape(), (5, 4));
//! assert_eq!(m.row(1), Some(&[0, 1, 0, 0][..]));
//! assert_eq!(m.row(4), Some(&[0, 0, 0, 0][..]));
//! ```
//!
//! # Features
//!
//! - `serde` — `Serialize`/`Deserialize` for [`OneHotMatrix`]
//! - `ndarray` — conversion to `ndarray::Array2<u8>`

pub mod matrix;
pub mod onehot;
pub mod table;

pub use matrix::{OneHotMatrix, UNKNOWN_BASE};
pub use onehot::{encode_seq, encode_str};
pub use table::{base_of, column_of, COLUMNS, COLUMN_ORDER};

/// Crate version (set from Cargo.toml at compile time).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_is_set() {
        assert!(!VERSION.is_empty());
        assert_ne!(VERSION, "0.0.0");
    }

    #[test]
    fn reexports_accessible() {
        let m = encode_seq(b"ACGT");
        assert_eq!(m.ncols(), COLUMNS);
        assert_eq!(COLUMN_ORDER, *b"ATCG");
        assert_eq!(column_of(b'g'), Some(3));
        assert_eq!(base_of(0), Some(b'A'));
        assert_eq!(encode_str("ACGT"), m);
        assert_eq!(UNKNOWN_BASE, b'N');
    }
}
