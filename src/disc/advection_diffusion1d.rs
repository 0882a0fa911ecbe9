use ndarray::{Array1, ArrayView1};

use super::{SpatialDisc, mesh::mesh1d::Mesh1d, spectral::derivative, spectral::linear_combination};
use crate::error::ParameterError;

/// `du/dt = D u_xx - v u_x`. `t` is unused, the equation is autonomous.
pub fn advection_diffusion_rhs(
    _t: f64,
    u: ArrayView1<'_, f64>,
    mesh: &Mesh1d,
    diffusion: f64,
    velocity: f64,
) -> Result<Array1<f64>, ParameterError> {
    let du = derivative(mesh, u, 1.0)?;
    let ddu = derivative(mesh, u, 2.0)?;
    Ok(linear_combination(diffusion, &ddu, -velocity, &du))
}

pub struct Disc1dAdvectionDiffusion<'a> {
    mesh: &'a Mesh1d,
    pub diffusion: f64,
    pub velocity: f64,
}
impl<'a> Disc1dAdvectionDiffusion<'a> {
    pub fn new(mesh: &'a Mesh1d, diffusion: f64, velocity: f64) -> Disc1dAdvectionDiffusion<'a> {
        Disc1dAdvectionDiffusion {
            mesh,
            diffusion,
            velocity,
        }
    }
}
impl<'a> SpatialDisc for Disc1dAdvectionDiffusion<'a> {
    fn mesh(&self) -> &Mesh1d {
        self.mesh
    }
    fn compute_rhs(&self, t: f64, u: ArrayView1<'_, f64>) -> Result<Array1<f64>, ParameterError> {
        advection_diffusion_rhs(t, u, self.mesh, self.diffusion, self.velocity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::PI;

    #[test]
    fn test_pure_advection_of_sine() {
        let mesh = Mesh1d::new(2.0 * PI, 64).unwrap();
        let u = mesh.x.mapv(f64::sin);
        let rhs = advection_diffusion_rhs(0.0, u.view(), &mesh, 0.0, 1.0).unwrap();
        for (r, &x) in rhs.iter().zip(mesh.x.iter()) {
            assert_abs_diff_eq!(*r, -x.cos(), epsilon = 1e-10);
        }
    }

    #[test]
    fn test_pure_diffusion_of_sine() {
        let mesh = Mesh1d::new(2.0 * PI, 64).unwrap();
        let u = mesh.x.mapv(|x| (3.0 * x).sin());
        let rhs = advection_diffusion_rhs(0.0, u.view(), &mesh, 0.1, 0.0).unwrap();
        for (r, &x) in rhs.iter().zip(mesh.x.iter()) {
            assert_abs_diff_eq!(*r, -0.9 * (3.0 * x).sin(), epsilon = 1e-10);
        }
    }

    #[test]
    fn test_rhs_ignores_time() {
        let mesh = Mesh1d::new(4.0, 32).unwrap();
        let u = mesh.x.mapv(|x| (-x * x).exp());
        let disc = Disc1dAdvectionDiffusion::new(&mesh, 0.05, -0.7);
        let r0 = disc.compute_rhs(0.0, u.view()).unwrap();
        let r1 = disc.compute_rhs(12.5, u.view()).unwrap();
        assert_eq!(r0, r1);
    }

    #[test]
    fn test_rhs_rejects_wrong_length() {
        let mesh = Mesh1d::new(4.0, 32).unwrap();
        let u = Array1::<f64>::zeros(31);
        assert!(matches!(
            advection_diffusion_rhs(0.0, u.view(), &mesh, 1.0, 1.0),
            Err(ParameterError::LengthMismatch { .. })
        ));
    }
}
