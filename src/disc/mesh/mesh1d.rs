use std::f64::consts::PI;
use std::fmt;
use std::sync::Arc;

use ndarray::{Array, Ix1};
use rustfft::{Fft, FftPlanner, num_complex::Complex};

use crate::error::{ParameterError, check_positive, max_len};

/// Periodic grid on `[-length / 2, length / 2)`.
///
/// The physical nodes `x`, the angular wavenumbers and the forward/inverse FFT
/// plans are all built once in [`Mesh1d::new`] and only read afterwards, so a
/// mesh can be shared by reference between any number of derivative calls.
#[derive(Clone)]
pub struct Mesh1d {
    pub length: f64,
    pub node_num: usize,
    pub dx: f64,
    pub x: Array<f64, Ix1>,
    pub wavenumber: Array<f64, Ix1>, // FFT ordering: 0, +k ascending, then most negative first
    pub(crate) fwd: Arc<dyn Fft<f64>>,
    pub(crate) inv: Arc<dyn Fft<f64>>,
}
impl Mesh1d {
    pub fn new(length: f64, node_num: usize) -> Result<Mesh1d, ParameterError> {
        let length = check_positive("length", length)?;
        if node_num == 0 {
            return Err(ParameterError::ZeroPoints);
        }
        // the differentiator transforms a complex copy of each sampled function
        if node_num > max_len::<Complex<f64>>() {
            return Err(ParameterError::TooManyPoints { node_num });
        }
        let dx = length / node_num as f64;
        let x = Array::from_shape_fn(node_num, |i| -0.5 * length + i as f64 * dx);
        let wavenumber = fft_freq(node_num, dx).mapv(|freq| 2.0 * PI * freq);
        let mut planner = FftPlanner::<f64>::new();
        let fwd = planner.plan_fft_forward(node_num);
        let inv = planner.plan_fft_inverse(node_num);
        Ok(Mesh1d {
            length,
            node_num,
            dx,
            x,
            wavenumber,
            fwd,
            inv,
        })
    }
}
impl fmt::Debug for Mesh1d {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mesh1d")
            .field("length", &self.length)
            .field("node_num", &self.node_num)
            .field("dx", &self.dx)
            .finish_non_exhaustive()
    }
}
/// Sample frequencies of an `n`-point DFT with spacing `d`, in cycles per unit.
pub fn fft_freq(n: usize, d: f64) -> Array<f64, Ix1> {
    let denom = n as f64 * d;
    Array::from_shape_fn(n, |k| {
        if 2 * k < n {
            k as f64 / denom
        } else {
            (k as f64 - n as f64) / denom
        }
    })
}
