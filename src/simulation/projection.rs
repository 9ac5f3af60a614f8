//! Angular to Cartesian projection of an accepted trajectory.
//!
//! The pivot sits at the origin with `y` pointing up, so a hanging bob has
//! negative `y`.

use super::params::PhysicalParameters;
use super::states::{NVec2, State, Trajectory};

/// Bob positions per frame.
#[derive(Debug, Clone)]
pub struct CartesianTrajectory {
    pub bob1: Vec<NVec2>,
    pub bob2: Vec<NVec2>,
}

impl CartesianTrajectory {
    pub fn len(&self) -> usize {
        self.bob1.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bob1.is_empty()
    }
}

/// Positions of both bobs for one state
pub fn bob_positions(state: &State, p: &PhysicalParameters) -> (NVec2, NVec2) {
    let (s1, c1) = state.theta1.sin_cos();
    let (s2, c2) = state.theta2.sin_cos();

    let bob1 = NVec2::new(p.l1() * s1, -p.l1() * c1);
    let bob2 = bob1 + NVec2::new(p.l2() * s2, -p.l2() * c2);

    (bob1, bob2)
}

pub fn project(trajectory: &Trajectory, p: &PhysicalParameters) -> CartesianTrajectory {
    let (bob1, bob2) = trajectory.iter().map(|s| bob_positions(s, p)).unzip();
    CartesianTrajectory { bob1, bob2 }
}
