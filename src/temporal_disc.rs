use log::debug;
use ndarray::{Array1, Array2, ArrayView1, Zip, s};

use crate::error::{ParameterError, SolverError, check_finite, check_positive, max_len};

/// Output times `0, dt, 2 dt, ...` strictly below `tmax`, `ceil(tmax / dt)` of them.
/// Each entry is `i * dt`, so rounding error does not accumulate along the sequence.
pub fn time_domain(tmax: f64, dt: f64) -> Result<Array1<f64>, ParameterError> {
    let tmax = check_positive("tmax", tmax)?;
    let dt = check_positive("dt", dt)?;
    if dt > tmax {
        return Err(ParameterError::StepExceedsSpan { dt, tmax });
    }
    let steps = (tmax / dt).ceil();
    if !steps.is_finite() || steps > max_len::<f64>() as f64 {
        return Err(ParameterError::TooManySteps { tmax, dt });
    }
    let steps = steps as usize;
    Ok(Array1::from_shape_fn(steps, |i| i as f64 * dt))
}

/// Solution of an integration: `y[[i, j]]` is `u(x_i, t[j])`.
#[derive(Debug, Clone)]
pub struct OdeSolution {
    pub t: Array1<f64>,
    pub y: Array2<f64>,
    pub t_final: f64,
    pub y_final: Array1<f64>,
}

/// Classical fourth-order Runge-Kutta with a fixed maximum step.
#[derive(Debug, Clone, Copy)]
pub struct Rk4 {
    pub max_step: f64,
}
impl Rk4 {
    pub fn new(max_step: f64) -> Result<Rk4, ParameterError> {
        Ok(Rk4 {
            max_step: check_positive("max_step", max_step)?,
        })
    }
    pub fn step<F>(
        &self,
        rhs: &F,
        t: f64,
        u: ArrayView1<'_, f64>,
        h: f64,
    ) -> Result<Array1<f64>, ParameterError>
    where
        F: Fn(f64, ArrayView1<'_, f64>) -> Result<Array1<f64>, ParameterError>,
    {
        let k1 = rhs(t, u)?;
        let u2 = Zip::from(u).and(&k1).map_collect(|&ui, &ki| ui + 0.5 * h * ki);
        let k2 = rhs(t + 0.5 * h, u2.view())?;
        let u3 = Zip::from(u).and(&k2).map_collect(|&ui, &ki| ui + 0.5 * h * ki);
        let k3 = rhs(t + 0.5 * h, u3.view())?;
        let u4 = Zip::from(u).and(&k3).map_collect(|&ui, &ki| ui + h * ki);
        let k4 = rhs(t + h, u4.view())?;
        let mut next = u.to_owned();
        Zip::from(&mut next)
            .and(&k1)
            .and(&k2)
            .and(&k3)
            .and(&k4)
            .for_each(|n, &a, &b, &c, &d| *n += h / 6.0 * (a + 2.0 * b + 2.0 * c + d));
        Ok(next)
    }
    /// Integrates `du/dt = rhs(t, u)` over `t_span`, storing the state at every
    /// entry of `t_eval` (each one is hit exactly by shortening the last step
    /// before it).
    pub fn integrate<F>(
        &self,
        rhs: F,
        t_span: (f64, f64),
        u0: ArrayView1<'_, f64>,
        t_eval: ArrayView1<'_, f64>,
    ) -> Result<OdeSolution, SolverError>
    where
        F: Fn(f64, ArrayView1<'_, f64>) -> Result<Array1<f64>, ParameterError>,
    {
        let (t0, t1) = t_span;
        check_finite("t0", t0)?;
        check_finite("t1", t1)?;
        let in_span = t_eval.iter().all(|&t| t >= t0 && t <= t1);
        let ordered = t_eval.windows(2).into_iter().all(|w| w[0] <= w[1]);
        if t1 < t0 || !in_span || !ordered {
            return Err(ParameterError::OutputTimes { t0, t1 }.into());
        }
        let mut y = Array2::zeros((u0.len(), t_eval.len()));
        let mut u = u0.to_owned();
        let mut t = t0;
        for (j, &target) in t_eval.iter().enumerate() {
            u = self.march(&rhs, t, target, u)?;
            t = target;
            y.slice_mut(s![.., j]).assign(&u);
            debug!("stored output {j} at t = {t:.6}");
        }
        let y_final = self.march(&rhs, t, t1, u)?;
        Ok(OdeSolution {
            t: t_eval.to_owned(),
            y,
            t_final: t1,
            y_final,
        })
    }
    fn march<F>(
        &self,
        rhs: &F,
        from: f64,
        to: f64,
        mut u: Array1<f64>,
    ) -> Result<Array1<f64>, SolverError>
    where
        F: Fn(f64, ArrayView1<'_, f64>) -> Result<Array1<f64>, ParameterError>,
    {
        let span = to - from;
        if span <= 0.0 {
            return Ok(u);
        }
        // tolerate a ratio that is an integer up to rounding
        let nstep = ((span / self.max_step) - 1e-9).ceil().max(1.0) as usize;
        let h = span / nstep as f64;
        for istep in 0..nstep {
            let t = from + istep as f64 * h;
            u = self.step(rhs, t, u.view(), h)?;
            if !u.iter().all(|v| v.is_finite()) {
                return Err(SolverError::NanOrInf { time: t + h });
            }
        }
        Ok(u)
    }
}
