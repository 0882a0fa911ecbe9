use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParameterError {
    #[error("{name} must be a finite number, got {value}")]
    NonFinite { name: &'static str, value: f64 },

    #[error("{name} must be positive, got {value}")]
    NotPositive { name: &'static str, value: f64 },

    #[error("number of grid points must be positive")]
    ZeroPoints,

    #[error("{node_num} grid points exceed the largest allocatable array")]
    TooManyPoints { node_num: usize },

    #[error("final time {tmax} with step {dt} needs more samples than can be allocated")]
    TooManySteps { tmax: f64, dt: f64 },

    #[error("time step {dt} exceeds final time {tmax}")]
    StepExceedsSpan { dt: f64, tmax: f64 },

    #[error("derivative order must be non-negative, got {order}")]
    NegativeOrder { order: f64 },

    #[error("sampled function has {found} points but the grid has {expected}")]
    LengthMismatch { expected: usize, found: usize },

    #[error("output times must be non-decreasing and lie in [{t0}, {t1}]")]
    OutputTimes { t0: f64, t1: f64 },

    #[error("unknown equation `{0}` (expected `advection_diffusion` or `burgers`)")]
    UnknownEquation(String),

    #[error("unknown initial condition `{0}` (expected `sine` or `gaussian`)")]
    UnknownInitialCondition(String),
}

#[derive(Error, Debug)]
pub enum SolverError {
    #[error(transparent)]
    Parameter(#[from] ParameterError),

    #[error("failed to read parameter file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse parameter file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to write solution: {0}")]
    Csv(#[from] csv::Error),

    #[error("a NaN or Inf value was produced at t = {time}")]
    NanOrInf { time: f64 },
}

/// Largest element count of a buffer of `T` that fits in `isize::MAX` bytes.
pub(crate) fn max_len<T>() -> usize {
    isize::MAX as usize / std::mem::size_of::<T>()
}

/// Rejects NaN and infinities, the only way a `f64` can fail to be a number.
pub(crate) fn check_finite(name: &'static str, value: f64) -> Result<f64, ParameterError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ParameterError::NonFinite { name, value })
    }
}

pub(crate) fn check_positive(name: &'static str, value: f64) -> Result<f64, ParameterError> {
    let value = check_finite(name, value)?;
    if value > 0.0 {
        Ok(value)
    } else {
        Err(ParameterError::NotPositive { name, value })
    }
}
