//! Python bindings for brisket one-hot DNA encoding.
//!
//! Builds the `brisket` extension module:
//!
//! - `brisket.encode_seq(sequence)` — `(N, 4)` `numpy.uint8` one-hot matrix
//! - `brisket.decode_seq(matrix)` — inverse mapping back to a base string
//! - `brisket.__version__` — the crate version

mod encode;
mod error;

use pyo3::prelude::*;

#[pymodule]
fn brisket(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add("__version__", brisket_encode::VERSION)?;
    encode::register(m)?;
    Ok(())
}
