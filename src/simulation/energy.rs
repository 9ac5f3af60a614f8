//! Mechanical energy of the double pendulum.
//!
//! Potential energy is measured from the pivot (zero at the horizontal through
//! the pivot, so a hanging pendulum has negative potential energy).

use super::params::PhysicalParameters;
use super::states::{State, Trajectory};

pub fn potential_energy(state: &State, p: &PhysicalParameters) -> f64 {
    let (l1, l2, m1, m2, g) = (p.l1(), p.l2(), p.m1(), p.m2(), p.g());
    -(m1 + m2) * l1 * g * state.theta1.cos() - m2 * l2 * g * state.theta2.cos()
}

pub fn kinetic_energy(state: &State, p: &PhysicalParameters) -> f64 {
    let (l1, l2, m1, m2) = (p.l1(), p.l2(), p.m1(), p.m2());
    let v1 = l1 * state.omega1;
    let v2 = l2 * state.omega2;
    0.5 * m1 * v1 * v1
        + 0.5 * m2 * (v1 * v1 + v2 * v2 + 2.0 * l1 * l2 * state.omega1 * state.omega2 * (state.theta1 - state.theta2).cos())
}

/// Total mechanical energy (kinetic + potential)
pub fn total_energy(state: &State, p: &PhysicalParameters) -> f64 {
    potential_energy(state, p) + kinetic_energy(state, p)
}

/// Total energy of every sample of `trajectory`, in order.
pub fn energy_trace(trajectory: &Trajectory, p: &PhysicalParameters) -> Vec<f64> {
    trajectory.iter().map(|s| total_energy(s, p)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    #[test]
    fn kinetic_energy_at_rest_is_zero() {
        let p = PhysicalParameters::new(1.3, 0.7, 2.0, 0.5, 9.81).unwrap();
        let s = State::new(3.0 * PI / 7.0, 0.0, 3.0 * PI / 4.0, 0.0);
        assert_eq!(kinetic_energy(&s, &p), 0.0);
    }

    #[test]
    fn hanging_pendulum_potential() {
        let p = PhysicalParameters::default();
        let s = State::new(0.0, 0.0, 0.0, 0.0);
        // -(2)(1)(9.81) - (1)(1)(9.81)
        assert_relative_eq!(potential_energy(&s, &p), -3.0 * 9.81);
    }

    #[test]
    fn rigid_rotation_kinetic_energy() {
        // Both rods aligned and spinning together: bob speeds are L1*w and (L1+L2)*w
        let p = PhysicalParameters::new(1.0, 2.0, 3.0, 4.0, 9.81).unwrap();
        let w = 1.5;
        let s = State::new(0.4, w, 0.4, w);
        let expected = 0.5 * 3.0 * (1.0 * w).powi(2) + 0.5 * 4.0 * (3.0 * w).powi(2);
        assert_relative_eq!(kinetic_energy(&s, &p), expected, epsilon = 1e-12);
    }

    #[test]
    fn co_permutation_of_rods_keeps_energy() {
        // Horizontal rods, so only kinetic energy remains: L1 w1 = L2 w2 = 2 on both sides
        let p = PhysicalParameters::new(2.0, 1.0, 1.0, 1.0, 9.81).unwrap();
        let s = State::new(PI / 2.0, 1.0, PI / 2.0, 2.0);
        let swapped = State::new(s.theta2, s.omega2, s.theta1, s.omega1);

        assert_ne!(p, p.swapped());
        assert_ne!(s, swapped);
        assert_relative_eq!(total_energy(&s, &p), 10.0, epsilon = 1e-12);
        assert_relative_eq!(total_energy(&s, &p), total_energy(&swapped, &p.swapped()), epsilon = 1e-12);
    }
}
