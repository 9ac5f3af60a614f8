//! Fixed-step time integrators for the double pendulum
//!
//! Provides classical RK4 and explicit Euler single steps over any
//! `VectorField`, and `integrate`, which samples the solution on a
//! `TimeGrid`. Each grid interval is covered by `substeps` equal internal
//! steps, so the step size stays fixed for the whole run.

use log::debug;

use crate::configuration::config::IntegratorConfig;

use super::dynamics::VectorField;
use super::states::{NVec4, State, TimeGrid, Trajectory};

/// Advance `y` from `t` to `t + h` with one classical Runge-Kutta step
///
/// k1 = f(t, y)
/// k2 = f(t + h/2, y + h/2 k1)
/// k3 = f(t + h/2, y + h/2 k2)
/// k4 = f(t + h, y + h k3)
/// y_n+1 = y_n + h/6 (k1 + 2 k2 + 2 k3 + k4)
pub fn rk4_step<F: VectorField + ?Sized>(field: &F, t: f64, y: &NVec4, h: f64) -> NVec4 {
    let half_h = 0.5 * h;

    let k1 = field.derivative(t, y);
    let k2 = field.derivative(t + half_h, &(y + half_h * k1));
    let k3 = field.derivative(t + half_h, &(y + half_h * k2));
    let k4 = field.derivative(t + h, &(y + h * k3));

    y + (h / 6.0) * (k1 + 2.0 * k2 + 2.0 * k3 + k4)
}

/// Advance `y` from `t` to `t + h` with one explicit Euler step
pub fn euler_step<F: VectorField + ?Sized>(field: &F, t: f64, y: &NVec4, h: f64) -> NVec4 {
    y + h * field.derivative(t, y)
}

/// Solve `dy/dt = field(t, y)` from `y0` and sample the solution on `grid`.
///
/// The result has exactly `grid.len()` states and its first state is `y0`
/// unchanged. Blow-up is not detected here; that is the energy guard's job.
pub fn integrate<F: VectorField + ?Sized>(
    field: &F,
    y0: State,
    grid: &TimeGrid,
    method: IntegratorConfig,
    substeps: usize,
) -> Trajectory {
    let substeps = substeps.max(1);
    let h = grid.dt() / substeps as f64; // internal step size

    let step: fn(&F, f64, &NVec4, f64) -> NVec4 = match method {
        IntegratorConfig::Rk4 => rk4_step::<F>,
        IntegratorConfig::Euler => euler_step::<F>,
    };

    let mut states = Vec::with_capacity(grid.len());
    states.push(y0);

    let mut y: NVec4 = y0.into();
    for i in 1..grid.len() {
        // Start every interval from the grid time to avoid accumulating t
        let t0 = grid.time(i - 1);
        for k in 0..substeps {
            y = step(field, t0 + k as f64 * h, &y, h);
        }
        states.push(State::from(y));
    }

    debug!(
        "integrated {} samples with {:?} ({} substeps, h = {})",
        states.len(),
        method,
        substeps,
        h
    );

    Trajectory::new(grid.clone(), states)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    /// Harmonic oscillator packed in the first two components: x'' = -x
    struct Oscillator;

    impl VectorField for Oscillator {
        fn derivative(&self, _t: f64, y: &NVec4) -> NVec4 {
            NVec4::new(y[1], -y[0], 0.0, 0.0)
        }
    }

    /// dy/dt = t for every component, exact for RK4
    struct Ramp;

    impl VectorField for Ramp {
        fn derivative(&self, t: f64, _y: &NVec4) -> NVec4 {
            NVec4::repeat(t)
        }
    }

    #[test]
    fn rk4_tracks_oscillator() {
        let grid = TimeGrid::new(10.0, 0.01).unwrap();
        let traj = integrate(&Oscillator, State::new(1.0, 0.0, 0.0, 0.0), &grid, IntegratorConfig::Rk4, 1);
        let t_end = grid.t_end();
        assert_abs_diff_eq!(traj.last().theta1, t_end.cos(), epsilon = 1e-8);
        assert_abs_diff_eq!(traj.last().omega1, -t_end.sin(), epsilon = 1e-8);
    }

    #[test]
    fn rk4_is_fourth_order() {
        let y0 = NVec4::new(1.0, 0.0, 0.0, 0.0);
        let err = |h: f64| {
            let n = (1.0 / h).round() as usize;
            let mut y = y0;
            for i in 0..n {
                y = rk4_step(&Oscillator, i as f64 * h, &y, h);
            }
            (y[0] - 1.0f64.cos()).abs()
        };
        let ratio = err(0.1) / err(0.05);
        assert!(ratio > 14.0 && ratio < 18.0, "error ratio {ratio}");
    }

    #[test]
    fn rk4_handles_time_dependent_fields() {
        // y = y0 + t^2 / 2
        let grid = TimeGrid::new(2.0, 0.5).unwrap();
        let traj = integrate(&Ramp, State::new(0.0, 0.0, 0.0, 0.0), &grid, IntegratorConfig::Rk4, 3);
        for (t, s) in grid.times().zip(traj.iter()) {
            assert_abs_diff_eq!(s.theta1, 0.5 * t * t, epsilon = 1e-12);
        }
    }

    #[test]
    fn euler_single_step() {
        let y = euler_step(&Oscillator, 0.0, &NVec4::new(1.0, 0.0, 0.0, 0.0), 0.1);
        assert_eq!(y, NVec4::new(1.0, -0.1, 0.0, 0.0));
    }

    #[test]
    fn substeps_improve_euler() {
        let grid = TimeGrid::new(1.0, 0.1).unwrap();
        let y0 = State::new(1.0, 0.0, 0.0, 0.0);
        let coarse = integrate(&Oscillator, y0, &grid, IntegratorConfig::Euler, 1);
        let fine = integrate(&Oscillator, y0, &grid, IntegratorConfig::Euler, 50);
        let exact = grid.t_end().cos();
        assert!((fine.last().theta1 - exact).abs() < (coarse.last().theta1 - exact).abs());
    }

    #[test]
    fn zero_substeps_behaves_like_one() {
        let grid = TimeGrid::new(1.0, 0.25).unwrap();
        let y0 = State::new(1.0, 0.0, 0.0, 0.0);
        let a = integrate(&Oscillator, y0, &grid, IntegratorConfig::Rk4, 0);
        let b = integrate(&Oscillator, y0, &grid, IntegratorConfig::Rk4, 1);
        assert_eq!(a.states(), b.states());
    }
}
