pub mod advection_diffusion1d;
pub mod burgers1d;
pub mod mesh;
pub mod spectral;

use ndarray::{Array1, ArrayView1};

use crate::error::ParameterError;
use mesh::mesh1d::Mesh1d;

/// Right-hand side `du/dt = F(t, u)` of a PDE discretised on a periodic mesh,
/// in the form a time integrator consumes.
pub trait SpatialDisc {
    fn mesh(&self) -> &Mesh1d;
    fn compute_rhs(&self, t: f64, u: ArrayView1<'_, f64>) -> Result<Array1<f64>, ParameterError>;
}
