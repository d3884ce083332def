pub mod config;
pub mod error;
pub mod io;
pub mod puf;

pub use config::{MinSupport, MinerConfig};
pub use error::{PufError, Result};
pub use puf::{
    puf_growth, Item, MiningOutcome, MiningStats, Pattern, PatternStatus, PufGrowth, Transaction,
    UncertainDatabase, UncertainPatterns,
};

#[cfg(feature = "python")]
use numpy::PyReadonlyArray2;
#[cfg(feature = "python")]
use pyo3::{exceptions::PyValueError, prelude::*, types::PyBool};

#[cfg(feature = "python")]
impl From<PufError> for PyErr {
    fn from(err: PufError) -> Self {
        PyValueError::new_err(err.to_string())
    }
}

/// An int is a count, a float a fraction, a string follows `MinSupport::from_str`.
/// Booleans are rejected even though Python treats them as ints.
#[cfg(feature = "python")]
fn extract_min_support(value: &Bound<'_, PyAny>) -> PyResult<MinSupport> {
    if value.is_instance_of::<PyBool>() {
        return Err(PufError::InvalidMinSupport(format!("boolean {value} is not a support")).into());
    }
    if let Ok(count) = value.extract::<u64>() {
        return Ok(MinSupport::Count(count));
    }
    if let Ok(fraction) = value.extract::<f64>() {
        return Ok(MinSupport::Fraction(fraction));
    }
    let text: String = value.extract()?;
    Ok(text.parse::<MinSupport>()?)
}

#[cfg(feature = "python")]
fn patterns_to_rows<L: Clone>(patterns: &UncertainPatterns<L>) -> Vec<(Vec<L>, f64)>
where
    L: Eq + std::hash::Hash,
{
    patterns
        .iter()
        .map(|pattern| (pattern.items.clone(), pattern.support))
        .collect()
}

#[cfg(feature = "python")]
#[pymodule]
fn upriors<'py>(m: &Bound<'py, PyModule>) -> PyResult<()> {
    #[pyfn(m)]
    #[pyo3(name = "puf_growth")]
    fn puf_growth_py(
        py: Python<'_>,
        transactions: Vec<Vec<(String, f64)>>,
        min_support: &Bound<'_, PyAny>,
    ) -> PyResult<Vec<(Vec<String>, f64)>> {
        let config = MinerConfig::new(extract_min_support(min_support)?);
        let database = UncertainDatabase::from_pairs(transactions);

        let outcome = py.allow_threads(|| PufGrowth::new(config).mine(&database))?;
        Ok(patterns_to_rows(&outcome.patterns))
    }

    #[pyfn(m)]
    #[pyo3(name = "puf_growth_dense")]
    fn puf_growth_dense_py<'py>(
        py: Python<'py>,
        transactions: PyReadonlyArray2<'py, f64>,
        min_support: &Bound<'py, PyAny>,
    ) -> PyResult<Vec<(Vec<usize>, f64)>> {
        let config = MinerConfig::new(extract_min_support(min_support)?);
        let database = UncertainDatabase::from_matrix(transactions.as_array());

        let outcome = py.allow_threads(|| PufGrowth::new(config).mine(&database))?;
        Ok(patterns_to_rows(&outcome.patterns))
    }

    Ok(())
}
