//! Row-major one-hot matrix.
//!
//! [`OneHotMatrix`] owns a contiguous `u8` buffer of `rows * 4` values. Row
//! `i` holds the encoding of input position `i`, with columns in
//! [`COLUMN_ORDER`](crate::COLUMN_ORDER).

use std::ops::Index;
use std::slice::ChunksExact;

use brisket_core::{BrisketError, Result};
use log::debug;

use crate::table::{base_of, COLUMNS};

/// Byte emitted by [`OneHotMatrix::decode`] for all-zero rows.
pub const UNKNOWN_BASE: u8 = b'N';

/// An `N x 4` matrix of `u8` one-hot rows.
///
/// Every row holds at most one `1`; rows produced from unrecognized input
/// are all zeros.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawMatrix", into = "RawMatrix")
)]
pub struct OneHotMatrix {
    data: Vec<u8>,
    rows: usize,
}

impl OneHotMatrix {
    /// Wrap a buffer already known to satisfy the one-hot invariant.
    pub(crate) fn from_rows_unchecked(data: Vec<u8>) -> Self {
        debug_assert_eq!(data.len() % COLUMNS, 0);
        let rows = data.len() / COLUMNS;
        Self { data, rows }
    }

    /// Build a matrix from a row-major buffer supplied by the caller.
    ///
    /// Fails with [`BrisketError::InvalidInput`] if `data.len() != rows * 4`,
    /// if any value is outside `{0, 1}`, or if a row has more than one `1`.
    pub fn from_vec(data: Vec<u8>, rows: usize) -> Result<Self> {
        let expected = rows
            .checked_mul(COLUMNS)
            .ok_or_else(|| reject(format!("row count {rows} overflows the buffer size")))?;
        if data.len() != expected {
            return Err(reject(format!(
                "buffer of {} values does not hold {rows} rows of {COLUMNS} columns",
                data.len()
            )));
        }
        for (i, row) in data.chunks_exact(COLUMNS).enumerate() {
            if let Some(&v) = row.iter().find(|&&v| v > 1) {
                return Err(reject(format!("row {i} contains {v}; expected 0 or 1")));
            }
            let ones = row.iter().filter(|&&v| v == 1).count();
            if ones > 1 {
                return Err(reject(format!(
                    "row {i} has {ones} set columns; expected at most one"
                )));
            }
        }
        Ok(Self { data, rows })
    }

    /// Build a matrix from nested rows of wide integers.
    ///
    /// Range checks happen before narrowing to `u8`, so a value such as
    /// `257` or `-255` is rejected rather than wrapped into the `{0, 1}`
    /// domain. Every row must have exactly 4 values.
    pub fn from_rows<R: AsRef<[i64]>>(rows: &[R]) -> Result<Self> {
        let mut data = Vec::with_capacity(rows.len() * COLUMNS);
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != COLUMNS {
                return Err(reject(format!(
                    "row {i} has {} columns; expected {COLUMNS}",
                    row.len()
                )));
            }
            for &v in row {
                match u8::try_from(v) {
                    Ok(b @ (0 | 1)) => data.push(b),
                    _ => return Err(reject(format!("row {i} contains {v}; expected 0 or 1"))),
                }
            }
        }
        Self::from_vec(data, rows.len())
    }

    /// Number of rows (one per encoded input position).
    pub fn nrows(&self) -> usize {
        self.rows
    }

    /// Number of columns. Always 4.
    pub fn ncols(&self) -> usize {
        COLUMNS
    }

    /// `(rows, columns)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, COLUMNS)
    }

    pub fn is_empty(&self) -> bool {
        self.rows == 0
    }

    /// Row-major view of the whole matrix.
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Consume the matrix and return its row-major buffer.
    pub fn into_vec(self) -> Vec<u8> {
        self.data
    }

    /// Row `i`, or `None` if out of range.
    pub fn row(&self, i: usize) -> Option<&[u8]> {
        if i >= self.rows {
            return None;
        }
        let start = i * COLUMNS;
        Some(&self.data[start..start + COLUMNS])
    }

    /// Value at row `i`, column `j`, or `None` if out of range.
    pub fn get(&self, i: usize, j: usize) -> Option<u8> {
        if j >= COLUMNS {
            return None;
        }
        self.row(i).map(|r| r[j])
    }

    /// Iterate over rows in input order.
    pub fn rows(&self) -> ChunksExact<'_, u8> {
        self.data.chunks_exact(COLUMNS)
    }

    /// Total number of ones in the matrix.
    pub fn sum(&self) -> usize {
        self.data.iter().map(|&v| v as usize).sum()
    }

    /// Number of all-zero rows, i.e. positions that were not a canonical base.
    pub fn unrecognized(&self) -> usize {
        self.rows().filter(|r| r.iter().all(|&v| v == 0)).count()
    }

    /// Per-column totals in A, T, C, G order.
    pub fn column_counts(&self) -> [usize; COLUMNS] {
        let mut counts = [0usize; COLUMNS];
        for row in self.rows() {
            for (c, &v) in counts.iter_mut().zip(row) {
                *c += v as usize;
            }
        }
        counts
    }

    /// Row-wise concatenation: `self` stacked above `other`.
    pub fn vstack(&self, other: &OneHotMatrix) -> OneHotMatrix {
        let mut data = Vec::with_capacity(self.data.len() + other.data.len());
        data.extend_from_slice(&self.data);
        data.extend_from_slice(&other.data);
        OneHotMatrix {
            data,
            rows: self.rows + other.rows,
        }
    }

    /// Append the rows of `other` below the rows of `self`.
    pub fn append(&mut self, other: OneHotMatrix) {
        self.data.extend(other.data);
        self.rows += other.rows;
    }

    /// Map each row back to its uppercase base.
    ///
    /// All-zero rows decode to [`UNKNOWN_BASE`], so the original byte of an
    /// unrecognized position is not recoverable.
    pub fn decode(&self) -> Vec<u8> {
        self.rows()
            .map(|row| {
                row.iter()
                    .position(|&v| v == 1)
                    .and_then(base_of)
                    .unwrap_or(UNKNOWN_BASE)
            })
            .collect()
    }

    /// Copy into an owned `ndarray` of shape `(rows, 4)`.
    #[cfg(feature = "ndarray")]
    pub fn to_array2(&self) -> ndarray::Array2<u8> {
        self.clone().into_array2()
    }

    /// Convert into an `ndarray` of shape `(rows, 4)` without copying.
    #[cfg(feature = "ndarray")]
    pub fn into_array2(self) -> ndarray::Array2<u8> {
        ndarray::Array2::from_shape_vec((self.rows, COLUMNS), self.data)
            .expect("buffer length is always rows * 4")
    }
}

impl Index<(usize, usize)> for OneHotMatrix {
    type Output = u8;

    fn index(&self, (i, j): (usize, usize)) -> &u8 {
        assert!(
            i < self.rows && j < COLUMNS,
            "index ({i}, {j}) out of bounds for shape ({}, {COLUMNS})",
            self.rows
        );
        &self.data[i * COLUMNS + j]
    }
}

impl AsRef<[u8]> for OneHotMatrix {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

fn reject(msg: String) -> BrisketError {
    debug!("rejecting one-hot buffer: {msg}");
    BrisketError::InvalidInput(msg)
}

/// Wire form of [`OneHotMatrix`]; deserialization goes through
/// [`OneHotMatrix::from_vec`] so the invariant always holds.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct RawMatrix {
    rows: usize,
    data: Vec<u8>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawMatrix> for OneHotMatrix {
    type Error = BrisketError;

    fn try_from(raw: RawMatrix) -> Result<Self> {
        OneHotMatrix::from_vec(raw.data, raw.rows)
    }
}

#[cfg(feature = "serde")]
impl From<OneHotMatrix> for RawMatrix {
    fn from(m: OneHotMatrix) -> Self {
        RawMatrix {
            rows: m.rows,
            data: m.data,
        }
    }
}
