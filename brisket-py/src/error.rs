//! Map `BrisketError` variants to Python exceptions.

use brisket_core::BrisketError;
use pyo3::exceptions::PyValueError;
use pyo3::PyErr;

/// Extension trait for converting `Result<T, BrisketError>` into `PyResult<T>`.
pub trait IntoPyResult<T> {
    fn into_pyresult(self) -> pyo3::PyResult<T>;
}

impl<T> IntoPyResult<T> for Result<T, BrisketError> {
    fn into_pyresult(self) -> pyo3::PyResult<T> {
        self.map_err(to_pyerr)
    }
}

fn to_pyerr(e: BrisketError) -> PyErr {
    match e {
        BrisketError::Parse(_) | BrisketError::InvalidInput(_) => {
            PyValueError::new_err(e.to_string())
        }
    }
}
