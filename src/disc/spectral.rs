use log::{Level, log_enabled, trace};
use ndarray::{Array1, ArrayView1, Zip};
use rustfft::num_complex::Complex;

use crate::disc::mesh::mesh1d::Mesh1d;
use crate::error::{ParameterError, check_finite};

/// `order`-th derivative of `f` sampled on `mesh.x`, computed pseudo-spectrally:
/// forward FFT, multiply each coefficient by `(i * kappa)^order`, inverse FFT and
/// keep the real part.
///
/// `f` is assumed periodic on the mesh; a jump between `f[n - 1]` and `f[0]` shows
/// up as Gibbs ringing near the ends of the domain. Non-integer orders are
/// evaluated with the principal branch of the complex power.
pub fn derivative(
    mesh: &Mesh1d,
    f: ArrayView1<'_, f64>,
    order: f64,
) -> Result<Array1<f64>, ParameterError> {
    if f.len() != mesh.node_num {
        return Err(ParameterError::LengthMismatch {
            expected: mesh.node_num,
            found: f.len(),
        });
    }
    let order = check_finite("order", order)?;
    if order < 0.0 {
        return Err(ParameterError::NegativeOrder { order });
    }
    if order == 0.0 {
        return Ok(f.to_owned());
    }
    let mut fhat: Vec<Complex<f64>> = f.iter().map(|&v| Complex::new(v, 0.0)).collect();
    mesh.fwd.process(&mut fhat);
    // the inverse transform is unnormalised, fold 1/N into the multiplier
    let scale = 1.0 / mesh.node_num as f64;
    for (coeff, &kappa) in fhat.iter_mut().zip(mesh.wavenumber.iter()) {
        *coeff *= spectral_multiplier(kappa, order) * scale;
    }
    mesh.inv.process(&mut fhat);
    if log_enabled!(Level::Trace) {
        let residual = fhat.iter().fold(0.0_f64, |acc, c| acc.max(c.im.abs()));
        trace!("derivative order {order}: discarded imaginary residual {residual:e}");
    }
    Ok(fhat.iter().map(|c| c.re).collect())
}
/// `(i * kappa)^order`, exact for integer orders.
fn spectral_multiplier(kappa: f64, order: f64) -> Complex<f64> {
    let ik = Complex::new(0.0, kappa);
    if order.fract() == 0.0 && order <= i32::MAX as f64 {
        ik.powi(order as i32)
    } else {
        ik.powf(order)
    }
}
/// `a * x + b * y` elementwise, the shape every RHS assembler reduces to.
pub(crate) fn linear_combination(a: f64, x: &Array1<f64>, b: f64, y: &Array1<f64>) -> Array1<f64> {
    Zip::from(x).and(y).map_collect(|&xi, &yi| a * xi + b * yi)
}
