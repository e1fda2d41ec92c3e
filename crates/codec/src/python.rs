use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PyBytes;

use crate::converter::{Converter, DisplayOption, SignedLeb128, UnsignedLeb128};
use crate::error::Error;

impl From<Error> for PyErr {
    fn from(err: Error) -> Self {
        PyValueError::new_err(err.to_string())
    }
}

fn display_option(fmt: &str) -> PyResult<DisplayOption> {
    fmt.parse::<DisplayOption>()
        .map_err(|e| PyValueError::new_err(e.to_string()))
}

macro_rules! py_converter {
    ($pyname:ident, $name:literal, $inner:ty) => {
        #[pyclass(name = $name, frozen)]
        pub struct $pyname($inner);

        #[pymethods]
        impl $pyname {
            #[new]
            fn new() -> Self {
                Self(<$inner>::new())
            }

            #[getter]
            fn name(&self) -> &'static str {
                self.0.name()
            }

            #[getter]
            fn max_size(&self) -> usize {
                self.0.metadata().maximum_size
            }

            /// Returns `(text, consumed)`.
            #[pyo3(signature = (data, fmt = "dec"))]
            fn decode(&self, data: &[u8], fmt: &str) -> PyResult<(String, usize)> {
                let decoded = self.0
                    .decode(data, display_option(fmt)?)
                    .map_err(Error::from)?;
                Ok((decoded.text, decoded.consumed))
            }

            #[pyo3(signature = (text, fmt = "dec"))]
            fn encode<'py>(
                &self,
                py: Python<'py>,
                text: &str,
                fmt: &str
            ) -> PyResult<Bound<'py, PyBytes>> {
                let bytes = self.0
                    .encode(text, display_option(fmt)?)
                    .map_err(Error::from)?;
                Ok(PyBytes::new(py, &bytes))
            }
        }
    };
}

py_converter!(PyUnsignedLeb128, "UnsignedLeb128", UnsignedLeb128);
py_converter!(PySignedLeb128, "SignedLeb128", SignedLeb128);

#[pymodule]
fn leb128_inspect(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyUnsignedLeb128>()?;
    m.add_class::<PySignedLeb128>()?;
    Ok(())
}
