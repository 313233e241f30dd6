//! Byte-to-column lookup tables.
//!
//! Columns follow the fixed order A, T, C, G. Downstream consumers index
//! columns positionally, so this order is part of the public contract and
//! must not change.

/// Number of columns in a one-hot row.
pub const COLUMNS: usize = 4;

/// Canonical bases in column order.
pub const COLUMN_ORDER: [u8; COLUMNS] = *b"ATCG";

/// [`BASE_TABLE`] entry for bytes that are not a canonical base.
pub const UNMAPPED: u8 = 0xFF;

/// Column index for every byte value, or [`UNMAPPED`].
pub static BASE_TABLE: [u8; 256] = build_base_table();

/// Complete one-hot row for every byte value.
///
/// Unrecognized bytes map to the all-zero row, so encoding is a straight
/// copy per input byte with no branch on the base.
pub(crate) static ROW_TABLE: [[u8; COLUMNS]; 256] = build_row_table();

const fn build_base_table() -> [u8; 256] {
    let mut table = [UNMAPPED; 256];
    let mut col = 0;
    while col < COLUMNS {
        let upper = COLUMN_ORDER[col];
        table[upper as usize] = col as u8;
        table[upper.to_ascii_lowercase() as usize] = col as u8;
        col += 1;
    }
    table
}

const fn build_row_table() -> [[u8; COLUMNS]; 256] {
    let base = build_base_table();
    let mut table = [[0u8; COLUMNS]; 256];
    let mut b = 0;
    while b < 256 {
        if base[b] != UNMAPPED {
            table[b][base[b] as usize] = 1;
        }
        b += 1;
    }
    table
}

/// Column index of a base byte (case-insensitive), or `None` if the byte
/// is not one of `A`, `T`, `C`, `G`.
#[inline]
pub fn column_of(b: u8) -> Option<usize> {
    match BASE_TABLE[b as usize] {
        UNMAPPED => None,
        col => Some(col as usize),
    }
}

/// Uppercase base for a column index.
#[inline]
pub fn base_of(col: usize) -> Option<u8> {
    COLUMN_ORDER.get(col).copied()
}
