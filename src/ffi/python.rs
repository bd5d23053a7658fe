// In: src/ffi/python.rs

use pyo3::prelude::*;
use pyo3::types::{PyDict, PyString};

use crate::bridge::boundary::TextBoundary;
use crate::bridge::format::AnalysisResult;
use crate::bridge::stateless_api;
use crate::config::{LoggingConfig, INVALID_ARGUMENT_MESSAGE};
use crate::error::EseError;
use crate::observability;

//==================================================================================
// I. The Python Boundary
//==================================================================================

/// Marshals CPython values in and out of the stateless API.
///
/// The input is the (optional) single positional argument; the output is a
/// fresh `dict` with `word_count` and `status` keys.
pub struct PythonBoundary<'py> {
    py: Python<'py>,
}

impl<'py> PythonBoundary<'py> {
    pub fn new(py: Python<'py>) -> Self {
        Self { py }
    }
}

fn invalid_argument() -> EseError {
    EseError::InvalidArgument(INVALID_ARGUMENT_MESSAGE.to_string())
}

impl<'py> TextBoundary for PythonBoundary<'py> {
    type Input = Option<Bound<'py, PyAny>>;
    type Output = Bound<'py, PyDict>;

    fn decode(&self, input: Self::Input) -> Result<String, EseError> {
        let arg = input.ok_or_else(invalid_argument)?;
        let text = arg.downcast::<PyString>().map_err(|_| invalid_argument())?;
        // Fails for strings that cannot be encoded as UTF-8 (lone surrogates).
        Ok(text.to_cow()?.into_owned())
    }

    fn encode(&self, result: AnalysisResult) -> Result<Self::Output, EseError> {
        let result_dict = PyDict::new_bound(self.py);
        result_dict.set_item("word_count", result.word_count())?;
        result_dict.set_item("status", result.status())?;
        Ok(result_dict)
    }

    fn scan(&self, text: &str) -> AnalysisResult {
        self.py
            .allow_threads(|| stateless_api::analyze_text(text))
    }
}

//==================================================================================
// II. Module Functions
//==================================================================================

#[pyfunction]
#[pyo3(name = "hello")]
pub fn hello_py() -> &'static str {
    stateless_api::hello()
}

/// Counts whitespace-delimited words.
///
/// Returns `{"word_count": int, "status": str}`. Raises `TypeError` if `text`
/// is missing or not a `str`.
#[pyfunction]
#[pyo3(name = "analyzeText", signature = (text = None))]
pub fn analyze_text_py<'py>(
    py: Python<'py>,
    text: Option<Bound<'py, PyAny>>,
) -> PyResult<Bound<'py, PyDict>> {
    let boundary = PythonBoundary::new(py);
    Ok(stateless_api::analyze_with(&boundary, text)?)
}

/// Routes the crate's `log` output to stderr, or appends it to `log_file`.
///
/// Returns `True` if this call installed the logger, `False` if one was
/// already active.
#[pyfunction]
#[pyo3(name = "enable_verbose_logging", signature = (log_file = None, level = "info"))]
pub fn enable_verbose_logging_py(log_file: Option<String>, level: &str) -> PyResult<bool> {
    let config = LoggingConfig {
        level: level.to_string(),
        log_file,
    };
    Ok(observability::init_logging(&config)?)
}
