use std::path::Path;

use csv::Writer;
use serde::Serialize;

use crate::disc::mesh::mesh1d::Mesh1d;
use crate::temporal_disc::OdeSolution;

#[derive(Serialize)]
struct PointData {
    t: f64,
    x: f64,
    solution: f64,
}

/// One row per `(t, x)` sample, output times first, then the final state.
pub fn write_to_csv<P: AsRef<Path>>(
    solution: &OdeSolution,
    mesh: &Mesh1d,
    filename: P,
) -> Result<(), csv::Error> {
    let mut writer = Writer::from_path(filename)?;
    for (j, &t) in solution.t.iter().enumerate() {
        for (i, &x) in mesh.x.iter().enumerate() {
            writer.serialize(PointData {
                t,
                x,
                solution: solution.y[[i, j]],
            })?;
        }
    }
    for (&x, &u) in mesh.x.iter().zip(solution.y_final.iter()) {
        writer.serialize(PointData {
            t: solution.t_final,
            x,
            solution: u,
        })?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{Array1, Array2};

    #[test]
    fn test_write_rows() {
        let mesh = Mesh1d::new(2.0, 4).unwrap();
        let solution = OdeSolution {
            t: Array1::from_vec(vec![0.0, 0.5]),
            y: Array2::from_shape_fn((4, 2), |(i, j)| (i + 10 * j) as f64),
            t_final: 1.0,
            y_final: Array1::from_elem(4, -1.0),
        };
        let path = std::env::temp_dir().join("spectral_pde_write_rows.csv");
        write_to_csv(&solution, &mesh, &path).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines[0], "t,x,solution");
        assert_eq!(lines.len(), 1 + 4 * 3);
        assert_eq!(lines[1], "0.0,-1.0,0.0");
        assert_eq!(lines[6], "0.5,-0.5,11.0");
        assert_eq!(lines[12], "1.0,0.5,-1.0");
        std::fs::remove_file(&path).unwrap();
    }
}
