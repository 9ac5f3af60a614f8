//! Physical parameters of the double pendulum
//!
//! `PhysicalParameters` holds the rod lengths, bob masses and gravitational
//! acceleration (SI units). Built once from the scenario and shared read-only
//! by the derivative and energy functions.

use super::error::SimulationError;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicalParameters {
    l1: f64, // length of rod 1 (m)
    l2: f64, // length of rod 2 (m)
    m1: f64, // mass of bob 1 (kg)
    m2: f64, // mass of bob 2 (kg)
    g: f64,  // gravitational acceleration (m/s^2)
}

impl PhysicalParameters {
    /// Validate and build the parameter set.
    ///
    /// Every field must be positive and finite. In particular `m1 > 0`
    /// guarantees the equations-of-motion denominator `m1 + m2 sin^2(dtheta)`
    /// never vanishes.
    pub fn new(l1: f64, l2: f64, m1: f64, m2: f64, g: f64) -> Result<Self, SimulationError> {
        for (name, value) in [("l1", l1), ("l2", l2), ("m1", m1), ("m2", m2), ("g", g)] {
            positive(name, value)?;
        }
        Ok(Self { l1, l2, m1, m2, g })
    }

    pub fn l1(&self) -> f64 {
        self.l1
    }

    pub fn l2(&self) -> f64 {
        self.l2
    }

    pub fn m1(&self) -> f64 {
        self.m1
    }

    pub fn m2(&self) -> f64 {
        self.m2
    }

    pub fn g(&self) -> f64 {
        self.g
    }

    /// Parameters with the two rods exchanged
    pub fn swapped(&self) -> Self {
        Self { l1: self.l2, l2: self.l1, m1: self.m2, m2: self.m1, g: self.g }
    }
}

impl Default for PhysicalParameters {
    fn default() -> Self {
        Self { l1: 1.0, l2: 1.0, m1: 1.0, m2: 1.0, g: 9.81 }
    }
}

/// Check that `value` is positive and finite.
pub(crate) fn positive(name: &'static str, value: f64) -> Result<f64, SimulationError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(SimulationError::InvalidParameter { name, value })
    }
}
