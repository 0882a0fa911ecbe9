use log::info;
use ndarray::{Array, Ix1};

use crate::{
    disc::{
        SpatialDisc, advection_diffusion1d::Disc1dAdvectionDiffusion, burgers1d::Disc1dBurgers,
        mesh::mesh1d::Mesh1d,
    },
    error::SolverError,
    initialization::{InitialCondition, initialize_mesh1d},
    temporal_disc::{OdeSolution, Rk4, time_domain},
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Equation {
    AdvectionDiffusion { diffusion: f64, velocity: f64 },
    Burgers { diffusion: f64 },
}

#[derive(Clone, Debug, PartialEq)]
pub struct SolverParameters {
    pub length: f64,
    pub node_num: usize,
    pub final_time: f64,
    pub time_step: f64,
    pub equation: Equation,
    pub initial_condition: InitialCondition,
    pub rk_substeps: usize,
}

pub struct Solver {
    pub mesh: Mesh1d,
    pub times: Array<f64, Ix1>,
    pub solver_params: SolverParameters,
}
impl Solver {
    pub fn new(solver_params: SolverParameters) -> Result<Solver, SolverError> {
        let times = time_domain(solver_params.final_time, solver_params.time_step)?;
        let mesh = initialize_mesh1d(solver_params.length, solver_params.node_num)?;
        Ok(Solver {
            mesh,
            times,
            solver_params,
        })
    }
    pub fn solve(&self) -> Result<OdeSolution, SolverError> {
        match self.solver_params.equation {
            Equation::AdvectionDiffusion {
                diffusion,
                velocity,
            } => self.time_march(&Disc1dAdvectionDiffusion::new(&self.mesh, diffusion, velocity)),
            Equation::Burgers { diffusion } => {
                self.time_march(&Disc1dBurgers::new(&self.mesh, diffusion))
            }
        }
    }
    fn time_march<T: SpatialDisc>(&self, disc: &T) -> Result<OdeSolution, SolverError> {
        let params = &self.solver_params;
        let rk4 = Rk4::new(params.time_step / params.rk_substeps as f64)?;
        let u0 = params.initial_condition.evaluate(disc.mesh());
        info!(
            "integrating {:?} to t = {} with {} output times",
            params.equation,
            params.final_time,
            self.times.len()
        );
        let solution = rk4.integrate(
            |t, u| disc.compute_rhs(t, u),
            (0.0, params.final_time),
            u0.view(),
            self.times.view(),
        )?;
        info!("finished integration at t = {}", solution.t_final);
        Ok(solution)
    }
}
