use std::f64::consts::PI;
use std::path::Path;

use log::info;
use ndarray::{Array, Ix1};

use crate::{
    disc::mesh::mesh1d::Mesh1d,
    error::{ParameterError, SolverError, check_positive},
    io::param_parser::SolverParamParser,
    solver::{Equation, SolverParameters},
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InitialCondition {
    /// One period of `sin(2 pi x / length)` over the domain.
    Sine,
    Gaussian { width: f64 },
}
impl InitialCondition {
    pub fn evaluate(&self, mesh: &Mesh1d) -> Array<f64, Ix1> {
        match *self {
            InitialCondition::Sine => {
                let k = 2.0 * PI / mesh.length;
                mesh.x.mapv(|x| (k * x).sin())
            }
            InitialCondition::Gaussian { width } => mesh.x.mapv(|x| (-(x / width).powi(2)).exp()),
        }
    }
}

pub fn initialize_params(param: &SolverParamParser) -> Result<SolverParameters, ParameterError> {
    let equation = match param.equation.as_str() {
        "advection_diffusion" => Equation::AdvectionDiffusion {
            diffusion: param.diffusion,
            velocity: param.velocity,
        },
        "burgers" => Equation::Burgers {
            diffusion: param.diffusion,
        },
        other => return Err(ParameterError::UnknownEquation(other.to_string())),
    };
    let initial_condition = match param.initial_condition.as_str() {
        "sine" => InitialCondition::Sine,
        "gaussian" => InitialCondition::Gaussian {
            width: check_positive("ic_width", param.ic_width)?,
        },
        other => return Err(ParameterError::UnknownInitialCondition(other.to_string())),
    };
    if param.rk_substeps == 0 {
        return Err(ParameterError::NotPositive {
            name: "rk_substeps",
            value: 0.0,
        });
    }
    Ok(SolverParameters {
        length: param.length,
        node_num: param.node_num,
        final_time: param.final_time,
        time_step: param.time_step,
        equation,
        initial_condition,
        rk_substeps: param.rk_substeps,
    })
}
pub fn initialize_params_by_file<P: AsRef<Path>>(
    file_path: P,
) -> Result<SolverParameters, SolverError> {
    let file_path = file_path.as_ref();
    let param = SolverParamParser::parse(file_path)?;
    info!("loaded parameters from {}: {:?}", file_path.display(), param);
    Ok(initialize_params(&param)?)
}
pub fn initialize_mesh1d(length: f64, node_num: usize) -> Result<Mesh1d, ParameterError> {
    let mesh = Mesh1d::new(length, node_num)?;
    info!(
        "built periodic mesh on [{}, {}) with {} nodes, dx = {}",
        -0.5 * length,
        0.5 * length,
        node_num,
        mesh.dx
    );
    Ok(mesh)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn parser(equation: &str, initial_condition: &str) -> SolverParamParser {
        SolverParamParser {
            length: 4.0,
            node_num: 8,
            final_time: 1.0,
            time_step: 0.1,
            equation: equation.to_string(),
            diffusion: 0.2,
            velocity: 1.5,
            initial_condition: initial_condition.to_string(),
            ic_width: 0.5,
            rk_substeps: 2,
        }
    }

    #[test]
    fn test_initialize_params() {
        let params = initialize_params(&parser("advection_diffusion", "gaussian")).unwrap();
        assert_eq!(
            params.equation,
            Equation::AdvectionDiffusion {
                diffusion: 0.2,
                velocity: 1.5
            }
        );
        assert_eq!(params.initial_condition, InitialCondition::Gaussian { width: 0.5 });
        let params = initialize_params(&parser("burgers", "sine")).unwrap();
        assert_eq!(params.equation, Equation::Burgers { diffusion: 0.2 });
    }

    #[test]
    fn test_unknown_names() {
        assert_eq!(
            initialize_params(&parser("heat", "sine")).unwrap_err(),
            ParameterError::UnknownEquation("heat".to_string())
        );
        assert_eq!(
            initialize_params(&parser("burgers", "square")).unwrap_err(),
            ParameterError::UnknownInitialCondition("square".to_string())
        );
    }

    #[test]
    fn test_initial_conditions() {
        let mesh = initialize_mesh1d(4.0, 8).unwrap();
        let sine = InitialCondition::Sine.evaluate(&mesh);
        // x = -2, -1.5, ..., 1.5
        assert_relative_eq!(sine[0], 0.0, epsilon = 1e-12);
        assert_relative_eq!(sine[2], -1.0, epsilon = 1e-12);
        assert_relative_eq!(sine[6], 1.0, epsilon = 1e-12);
        let gauss = InitialCondition::Gaussian { width: 2.0 }.evaluate(&mesh);
        assert_relative_eq!(gauss[4], 1.0, epsilon = 1e-12);
        assert_relative_eq!(gauss[0], (-1.0_f64).exp(), epsilon = 1e-12);
    }
}
