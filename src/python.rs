use crate::{format_json as format_json_text, format_question as format_pair, FormatResult};
use pyo3::prelude::*;

#[pyclass(name = "FormatResult", get_all)]
#[derive(Clone)]
struct PyFormatResult {
    question: String,
    answer: String,
    blank_count: usize,
}

impl From<FormatResult> for PyFormatResult {
    fn from(result: FormatResult) -> Self {
        PyFormatResult {
            question: result.question,
            answer: result.answer,
            blank_count: result.blank_count,
        }
    }
}

#[pymethods]
impl PyFormatResult {
    fn __repr__(&self) -> String {
        format!(
            "FormatResult(blank_count={}, question={:?}, answer={:?})",
            self.blank_count, self.question, self.answer
        )
    }
}

#[pyfunction]
#[pyo3(signature = (question=None, answer=None))]
fn format_question(question: Option<String>, answer: Option<String>) -> PyFormatResult {
    format_pair(
        question.as_deref().unwrap_or_default(),
        answer.as_deref().unwrap_or_default(),
    )
    .into()
}

#[pyfunction]
fn format_json(data: String) -> PyResult<String> {
    format_json_text(&data)
        .map_err(|e| PyErr::new::<pyo3::exceptions::PyValueError, _>(e.to_string()))
}

#[pymodule]
fn _anaume(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyFormatResult>()?;
    m.add_function(wrap_pyfunction!(format_question, m)?)?;
    m.add_function(wrap_pyfunction!(format_json, m)?)?;

    Ok(())
}
