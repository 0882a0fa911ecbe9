use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::SolverError;

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct SolverParamParser {
    pub length: f64,
    pub node_num: usize,
    pub final_time: f64,
    pub time_step: f64,
    pub equation: String,
    pub diffusion: f64,
    #[serde(default)]
    pub velocity: f64,
    pub initial_condition: String,
    #[serde(default = "default_ic_width")]
    pub ic_width: f64,
    #[serde(default = "default_rk_substeps")]
    pub rk_substeps: usize,
}
fn default_ic_width() -> f64 {
    1.0
}
fn default_rk_substeps() -> usize {
    1
}
impl SolverParamParser {
    pub fn parse<P: AsRef<Path>>(file_path: P) -> Result<Self, SolverError> {
        let file_content = fs::read_to_string(file_path)?;
        Self::parse_str(&file_content)
    }
    pub fn parse_str(content: &str) -> Result<Self, SolverError> {
        let param: SolverParamParser = serde_json::from_str(content)?;
        Ok(param)
    }
}
