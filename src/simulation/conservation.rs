//! Energy conservation check gating acceptance of a run.
//!
//! The drift measure is the sum over all samples of `|E_i - E_0|`, compared
//! against a single tolerance. A long run accumulates drift even when every
//! individual sample is close to `E_0`.

use log::{info, warn};

use super::energy::{energy_trace, total_energy};
use super::error::SimulationError;
use super::params::{positive, PhysicalParameters};
use super::states::Trajectory;

pub const DEFAULT_ENERGY_DRIFT: f64 = 0.05;

/// Energy bookkeeping of an accepted trajectory.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnergyReport {
    pub initial_energy: f64, // E_0
    pub drift: f64,          // sum_i |E_i - E_0|
    pub max_deviation: f64,  // max_i |E_i - E_0|, diagnostic only
    pub tolerance: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnergyGuard {
    tolerance: f64,
}

impl EnergyGuard {
    pub fn new(tolerance: f64) -> Result<Self, SimulationError> {
        Ok(Self { tolerance: positive("e_drift", tolerance)? })
    }

    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Accept or reject `trajectory`.
    ///
    /// A NaN drift (blown-up integration) is rejected like any other excess.
    pub fn check(&self, trajectory: &Trajectory, p: &PhysicalParameters) -> Result<EnergyReport, SimulationError> {
        let e0 = total_energy(trajectory.initial(), p);

        let (drift, max_deviation) = energy_trace(trajectory, p)
            .into_iter()
            .map(|e| (e - e0).abs())
            .fold((0.0, 0.0), |(sum, max): (f64, f64), d| (sum + d, max.max(d)));

        if !(drift <= self.tolerance) {
            warn!("energy drift {drift} exceeds tolerance {}", self.tolerance);
            return Err(SimulationError::EnergyDriftExceeded { drift, tolerance: self.tolerance });
        }

        info!("energy check passed: drift {drift:.3e} <= {}", self.tolerance);

        Ok(EnergyReport {
            initial_energy: e0,
            drift,
            max_deviation,
            tolerance: self.tolerance,
        })
    }
}

impl Default for EnergyGuard {
    fn default() -> Self {
        Self { tolerance: DEFAULT_ENERGY_DRIFT }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::states::{State, TimeGrid};

    fn trajectory_of(states: Vec<State>) -> Trajectory {
        let grid = TimeGrid::new((states.len() - 1) as f64, 1.0).unwrap();
        Trajectory::new(grid, states)
    }

    #[test]
    fn drift_is_summed_not_maxed() {
        let p = PhysicalParameters::default();
        // Only omega changes, so each sample deviates by its kinetic energy
        // 0.5 * (m1 + m2) * (L1 w)^2 = w^2 for the default pendulum at theta = 0
        let w = 0.1; // w^2 = 0.01 per sample
        let traj = trajectory_of(vec![
            State::new(0.0, 0.0, 0.0, 0.0),
            State::new(0.0, w, 0.0, 0.0),
            State::new(0.0, w, 0.0, 0.0),
            State::new(0.0, w, 0.0, 0.0),
        ]);

        let report = EnergyGuard::new(0.05).unwrap().check(&traj, &p).unwrap();
        assert!((report.drift - 0.03).abs() < 1e-12);
        assert!((report.max_deviation - 0.01).abs() < 1e-12);

        // Each sample is within 0.02 but the sum is not
        let err = EnergyGuard::new(0.02).unwrap().check(&traj, &p).unwrap_err();
        match err {
            SimulationError::EnergyDriftExceeded { drift, tolerance } => {
                assert!((drift - 0.03).abs() < 1e-12);
                assert_eq!(tolerance, 0.02);
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn nan_drift_is_rejected() {
        let p = PhysicalParameters::default();
        let traj = trajectory_of(vec![State::new(0.0, 0.0, 0.0, 0.0), State::new(f64::NAN, 0.0, 0.0, 0.0)]);
        assert!(matches!(
            EnergyGuard::default().check(&traj, &p),
            Err(SimulationError::EnergyDriftExceeded { .. })
        ));
    }

    #[test]
    fn tolerance_must_be_positive() {
        assert!(EnergyGuard::new(0.0).is_err());
        assert_eq!(EnergyGuard::default().tolerance(), DEFAULT_ENERGY_DRIFT);
    }
}
