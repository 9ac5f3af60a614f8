//! Core state types for the double pendulum.
//!
//! Defines:
//! - `State`      the angle / angular velocity of both rods
//! - `TimeGrid`   the fixed-step sample times `[0, t_max]`
//! - `Trajectory` one `State` per grid sample
//!
//! The integrator works on `NVec4` (nalgebra) and converts back to `State`
//! at the grid points.

use nalgebra::{Vector2, Vector4};

use super::error::SimulationError;

pub type NVec2 = Vector2<f64>;
pub type NVec4 = Vector4<f64>;

/// Generalized state `(theta1, omega1, theta2, omega2)`.
///
/// Also used for the rate of change of a state, in which case the fields hold
/// `(dtheta1/dt, domega1/dt, dtheta2/dt, domega2/dt)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct State {
    pub theta1: f64, // angle of rod 1 from the downward vertical (rad)
    pub omega1: f64, // angular velocity of rod 1 (rad/s)
    pub theta2: f64, // angle of rod 2 from the downward vertical (rad)
    pub omega2: f64, // angular velocity of rod 2 (rad/s)
}

impl State {
    pub fn new(theta1: f64, omega1: f64, theta2: f64, omega2: f64) -> Self {
        Self { theta1, omega1, theta2, omega2 }
    }

    /// Build a state from configuration input, rejecting non-finite components.
    pub fn checked(theta1: f64, omega1: f64, theta2: f64, omega2: f64) -> Result<Self, SimulationError> {
        for (name, value) in [("theta1", theta1), ("omega1", omega1), ("theta2", theta2), ("omega2", omega2)] {
            if !value.is_finite() {
                return Err(SimulationError::InvalidState { name, value });
            }
        }
        Ok(Self::new(theta1, omega1, theta2, omega2))
    }
}

impl From<State> for NVec4 {
    fn from(s: State) -> Self {
        NVec4::new(s.theta1, s.omega1, s.theta2, s.omega2)
    }
}

impl From<NVec4> for State {
    fn from(v: NVec4) -> Self {
        State::new(v[0], v[1], v[2], v[3])
    }
}

/// Uniform time grid `t_i = i * dt` covering `[0, t_max]` inclusive.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeGrid {
    dt: f64,    // spacing between samples
    len: usize, // number of samples
}

impl TimeGrid {
    pub fn new(t_max: f64, dt: f64) -> Result<Self, SimulationError> {
        if !(t_max.is_finite() && t_max > 0.0) {
            return Err(SimulationError::InvalidParameter { name: "t_max", value: t_max });
        }
        if !(dt.is_finite() && dt > 0.0) {
            return Err(SimulationError::InvalidParameter { name: "dt", value: dt });
        }

        // Guard against 30 / 0.01 landing just below 3000
        let intervals = (t_max / dt + 1e-9).floor();

        // A trajectory must fit in one allocation
        let max_samples = isize::MAX as usize / std::mem::size_of::<State>();
        if intervals >= (max_samples - 1) as f64 {
            return Err(SimulationError::InvalidParameter { name: "dt", value: dt });
        }

        Ok(Self { dt, len: intervals as usize + 1 })
    }

    pub fn dt(&self) -> f64 {
        self.dt
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Time of sample `i`
    pub fn time(&self, i: usize) -> f64 {
        i as f64 * self.dt
    }

    /// Last sample time (`<= t_max`)
    pub fn t_end(&self) -> f64 {
        self.time(self.len - 1)
    }

    pub fn times(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.len).map(move |i| self.time(i))
    }
}

/// Dense solution of the equations of motion, one state per grid sample.
#[derive(Debug, Clone)]
pub struct Trajectory {
    grid: TimeGrid,
    states: Vec<State>,
}

impl Trajectory {
    /// Only the integrator produces trajectories, so the length invariant is
    /// upheld by construction.
    pub(crate) fn new(grid: TimeGrid, states: Vec<State>) -> Self {
        debug_assert_eq!(grid.len(), states.len());
        Self { grid, states }
    }

    pub fn grid(&self) -> &TimeGrid {
        &self.grid
    }

    pub fn states(&self) -> &[State] {
        &self.states
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn initial(&self) -> &State {
        &self.states[0]
    }

    pub fn last(&self) -> &State {
        &self.states[self.states.len() - 1]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, State> {
        self.states.iter()
    }
}
