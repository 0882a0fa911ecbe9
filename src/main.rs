mod disc;
mod error;
mod initialization;
mod io;
mod solver;
mod temporal_disc;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::{error, info};

use crate::error::SolverError;
use crate::io::write_to_csv::write_to_csv;
use crate::solver::Solver;

#[derive(Parser)]
pub struct CommandLineArguments {
    /// JSON solver parameters
    #[arg(long, short, default_value = "inputs/solverparam.json")]
    params: PathBuf,
    /// CSV file receiving `t,x,solution` rows
    #[arg(long, short, default_value = "outputs/solution.csv")]
    output: PathBuf,
}

fn run(args: &CommandLineArguments) -> Result<(), SolverError> {
    let solver_params = initialization::initialize_params_by_file(&args.params)?;
    let solver = Solver::new(solver_params)?;
    let solution = solver.solve()?;
    if let Some(dir) = args.output.parent() {
        if !dir.as_os_str().is_empty() {
            std::fs::create_dir_all(dir)?;
        }
    }
    write_to_csv(&solution, &solver.mesh, &args.output)?;
    info!("wrote solution to {}", args.output.display());
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = CommandLineArguments::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
