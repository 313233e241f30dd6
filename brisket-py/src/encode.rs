//! Python bindings for brisket-encode.
//!
//! Results cross the boundary as numpy arrays. The encoded rows are copied
//! once, straight into a freshly allocated `numpy.empty` array through the
//! buffer protocol, so the returned array is C-contiguous, writable and owns
//! its data.

use brisket_encode::{OneHotMatrix, COLUMNS};
use pyo3::buffer::PyBuffer;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::error::IntoPyResult;

/// One-hot encode a DNA sequence.
///
/// Returns a `numpy.ndarray` of dtype `uint8` and shape `(len(sequence), 4)`
/// with columns A, T, C, G. Characters other than A/T/C/G (either case)
/// produce all-zero rows.
#[pyfunction]
fn encode_seq<'py>(py: Python<'py>, sequence: &str) -> PyResult<Bound<'py, PyAny>> {
    let matrix = brisket_encode::encode_str(sequence);
    to_ndarray(py, &matrix)
}

/// Decode an `(N, 4)` one-hot matrix back to a base string.
///
/// Accepts anything `numpy.asarray` understands (arrays, nested lists).
/// All-zero rows decode to `N`. Raises `ValueError` if the input is not
/// `(N, 4)`, has a non-integer dtype, or holds values other than 0 and 1.
#[pyfunction]
fn decode_seq(py: Python<'_>, matrix: &Bound<'_, PyAny>) -> PyResult<String> {
    let np = py.import("numpy")?;
    let arr = np.call_method1("asarray", (matrix,))?;

    let shape: Vec<usize> = arr.getattr("shape")?.extract()?;
    match shape.as_slice() {
        [_, cols] if *cols == COLUMNS => {}
        [_, cols] => {
            return Err(PyValueError::new_err(format!(
                "expected {COLUMNS} columns, got {cols}"
            )))
        }
        _ => {
            return Err(PyValueError::new_err(format!(
                "expected a 2-dimensional array of shape (N, {COLUMNS}), got {} dimensions",
                shape.len()
            )))
        }
    }

    let kind: String = arr.getattr("dtype")?.getattr("kind")?.extract()?;
    if !is_integer_kind(&kind) {
        return Err(PyValueError::new_err(format!(
            "expected an integer or boolean array, got dtype kind '{kind}'"
        )));
    }

    // Values stay wide until range-checked, so 257 or -255 cannot wrap to 1.
    let rows: Vec<Vec<i64>> = arr
        .call_method0("tolist")?
        .extract()
        .map_err(|e| PyValueError::new_err(format!("matrix value out of range: {e}")))?;
    let decoded = OneHotMatrix::from_rows(&rows).into_pyresult()?.decode();
    // decode only emits ASCII bases and 'N'.
    Ok(decoded.into_iter().map(char::from).collect())
}

/// numpy dtype kinds accepted by `decode_seq`: bool, signed, unsigned.
fn is_integer_kind(kind: &str) -> bool {
    matches!(kind, "b" | "i" | "u")
}

fn to_ndarray<'py>(py: Python<'py>, matrix: &OneHotMatrix) -> PyResult<Bound<'py, PyAny>> {
    let np = py.import("numpy")?;
    let arr = np.call_method1("empty", ((matrix.nrows(), COLUMNS), np.getattr("uint8")?))?;
    let buf = PyBuffer::<u8>::get(&arr)?;
    buf.copy_from_slice(py, matrix.as_slice())?;
    buf.release(py);
    Ok(arr)
}

// ---------------------------------------------------------------------------
// Module registration
// ---------------------------------------------------------------------------

pub fn register(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(encode_seq, m)?)?;
    m.add_function(wrap_pyfunction!(decode_seq, m)?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_kinds_accepted() {
        for kind in ["b", "i", "u"] {
            assert!(is_integer_kind(kind), "{kind}");
        }
    }

    #[test]
    fn float_and_other_kinds_rejected() {
        for kind in ["f", "c", "O", "U", "S", "m", "M", "V", ""] {
            assert!(!is_integer_kind(kind), "{kind}");
        }
    }
}
