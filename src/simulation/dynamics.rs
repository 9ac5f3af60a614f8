//! Equations of motion for the double pendulum
//!
//! Defines the `VectorField` trait the integrators are generic over and the
//! Lagrangian right-hand side `state_derivative`.

use super::params::PhysicalParameters;
use super::states::{NVec4, State};

/// Right-hand side `dy/dt = f(t, y)` of a 4-dimensional first-order system.
pub trait VectorField {
    fn derivative(&self, t: f64, y: &NVec4) -> NVec4;
}

/// Time derivative of the double pendulum state.
///
/// With `c = cos(theta1 - theta2)` and `s = sin(theta1 - theta2)` the common
/// denominator is `m1 + m2 s^2`, which is at least `m1 > 0` for validated
/// parameters.
pub fn state_derivative(state: &State, p: &PhysicalParameters) -> State {
    let State { theta1, omega1, theta2, omega2 } = *state;
    let (l1, l2, m1, m2, g) = (p.l1(), p.l2(), p.m1(), p.m2(), p.g());

    let (s, c) = (theta1 - theta2).sin_cos();
    let denom = m1 + m2 * s * s;

    let omega1_dot = (m2 * g * theta2.sin() * c
        - m2 * s * (l1 * omega1 * omega1 * c + l2 * omega2 * omega2)
        - (m1 + m2) * g * theta1.sin())
        / (l1 * denom);

    let omega2_dot = ((m1 + m2) * (l1 * omega1 * omega1 * s - g * theta2.sin() + g * theta1.sin() * c)
        + m2 * l2 * omega2 * omega2 * s * c)
        / (l2 * denom);

    State {
        theta1: omega1,
        omega1: omega1_dot,
        theta2: omega2,
        omega2: omega2_dot,
    }
}

impl VectorField for PhysicalParameters {
    // Autonomous system, `t` unused
    fn derivative(&self, _t: f64, y: &NVec4) -> NVec4 {
        state_derivative(&State::from(*y), self).into()
    }
}
