use ndarray::{Array1, ArrayView1, Zip};

use super::{SpatialDisc, mesh::mesh1d::Mesh1d, spectral::derivative};
use crate::error::ParameterError;

/// Viscous Burgers' equation `du/dt = D u_xx - u u_x`, with the nonlinear term
/// evaluated pointwise on the physical grid (no dealiasing).
pub fn burgers_rhs(
    _t: f64,
    u: ArrayView1<'_, f64>,
    mesh: &Mesh1d,
    diffusion: f64,
) -> Result<Array1<f64>, ParameterError> {
    let du = derivative(mesh, u, 1.0)?;
    let ddu = derivative(mesh, u, 2.0)?;
    Ok(Zip::from(&u)
        .and(&du)
        .and(&ddu)
        .map_collect(|&ui, &dui, &ddui| diffusion * ddui - ui * dui))
}

pub struct Disc1dBurgers<'a> {
    mesh: &'a Mesh1d,
    pub diffusion: f64,
}
impl<'a> Disc1dBurgers<'a> {
    pub fn new(mesh: &'a Mesh1d, diffusion: f64) -> Disc1dBurgers<'a> {
        Disc1dBurgers { mesh, diffusion }
    }
}
impl<'a> SpatialDisc for Disc1dBurgers<'a> {
    fn mesh(&self) -> &Mesh1d {
        self.mesh
    }
    fn compute_rhs(&self, t: f64, u: ArrayView1<'_, f64>) -> Result<Array1<f64>, ParameterError> {
        burgers_rhs(t, u, self.mesh, self.diffusion)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::PI;

    #[test]
    fn test_burgers_rhs_of_sine() {
        let mesh = Mesh1d::new(2.0 * PI, 64).unwrap();
        let u = mesh.x.mapv(f64::sin);
        let d = 0.02;
        let rhs = burgers_rhs(0.0, u.view(), &mesh, d).unwrap();
        for (r, &x) in rhs.iter().zip(mesh.x.iter()) {
            let expected = -d * x.sin() - x.sin() * x.cos();
            assert_abs_diff_eq!(*r, expected, epsilon = 1e-10);
        }
    }

    #[test]
    fn test_constant_state_is_steady() {
        let mesh = Mesh1d::new(1.0, 16).unwrap();
        let u = Array1::from_elem(16, 2.0);
        let disc = Disc1dBurgers::new(&mesh, 0.1);
        let rhs = disc.compute_rhs(0.0, u.view()).unwrap();
        for r in rhs.iter() {
            assert_abs_diff_eq!(*r, 0.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_burgers_is_nonlinear() {
        let mesh = Mesh1d::new(2.0 * PI, 32).unwrap();
        let u = mesh.x.mapv(f64::sin);
        let r1 = burgers_rhs(0.0, u.view(), &mesh, 0.0).unwrap();
        let u2 = &u * 2.0;
        let r2 = burgers_rhs(0.0, u2.view(), &mesh, 0.0).unwrap();
        // the advective term is quadratic in u
        for (a, b) in r1.iter().zip(r2.iter()) {
            assert_abs_diff_eq!(4.0 * a, *b, epsilon = 1e-10);
        }
    }
}
