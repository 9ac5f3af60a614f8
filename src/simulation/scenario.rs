//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces a runtime `Scenario`
//! containing:
//! - engine settings (`Engine`)
//! - validated physical parameters (`PhysicalParameters`)
//! - the initial `State` and the `TimeGrid`
//! - the `EnergyGuard` and trail settings
//!
//! `Scenario::run` executes integrate -> energy check -> projection and hands
//! back an `AcceptedRun`, the only thing a renderer ever sees.

use log::info;

use crate::configuration::config::{AnimationConfig, ScenarioConfig};

use super::conservation::{EnergyGuard, EnergyReport};
use super::engine::Engine;
use super::error::SimulationError;
use super::integrator::integrate;
use super::params::{positive, PhysicalParameters};
use super::projection::{project, CartesianTrajectory};
use super::states::{State, TimeGrid, Trajectory};
use super::trail::{TrailSegment, TrailWindower};

/// Runtime bundle built from a [`ScenarioConfig`]
#[derive(Debug, Clone)]
pub struct Scenario {
    pub engine: Engine,
    pub parameters: PhysicalParameters,
    pub initial: State,
    pub grid: TimeGrid,
    pub guard: EnergyGuard,
    pub trail: TrailWindower,
    pub animation: AnimationConfig,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self, SimulationError> {
        // Engine (runtime) from EngineConfig
        let engine = Engine {
            integrator: cfg.engine.integrator,
            substeps: cfg.engine.substeps.max(1),
        };

        let pc = cfg.pendulum;
        let parameters = PhysicalParameters::new(pc.l1, pc.l2, pc.m1, pc.m2, pc.g)?;

        let ic = cfg.initial;
        let initial = State::checked(ic.theta1, ic.omega1, ic.theta2, ic.omega2)?;

        let grid = TimeGrid::new(cfg.parameters.t_max, cfg.parameters.dt)?;
        let guard = EnergyGuard::new(cfg.parameters.e_drift)?;
        let trail = TrailWindower::from_duration(cfg.trail.trail_secs, grid.dt(), cfg.trail.segments)?;

        positive("bob_radius", cfg.animation.bob_radius)?;

        Ok(Self {
            engine,
            parameters,
            initial,
            grid,
            guard,
            trail,
            animation: cfg.animation,
        })
    }

    /// Integrate the equations of motion over the whole grid
    pub fn integrate(&self) -> Trajectory {
        integrate(&self.parameters, self.initial, &self.grid, self.engine.integrator, self.engine.substeps)
    }

    /// Integrate, check energy and project.
    ///
    /// Fails with [`SimulationError::EnergyDriftExceeded`] if the trajectory
    /// does not conserve energy; nothing is projected in that case.
    pub fn run(&self) -> Result<AcceptedRun, SimulationError> {
        let trajectory = self.integrate();
        info!(
            "integrated {} samples up to t = {} s",
            trajectory.len(),
            self.grid.t_end()
        );

        let energy = self.guard.check(&trajectory, &self.parameters)?;
        let cartesian = project(&trajectory, &self.parameters);

        Ok(AcceptedRun {
            trajectory,
            energy,
            cartesian,
            trail: self.trail,
            frames: self.animation.frames,
            fps: self.animation.fps,
            extent: self.parameters.l1() + self.parameters.l2() + self.animation.bob_radius,
        })
    }
}

/// A trajectory that passed the energy check, with everything the renderer
/// needs per frame.
#[derive(Debug, Clone)]
pub struct AcceptedRun {
    trajectory: Trajectory,
    energy: EnergyReport,
    cartesian: CartesianTrajectory,
    trail: TrailWindower,
    frames: usize,
    fps: u32,
    extent: f64,
}

impl AcceptedRun {
    pub fn trajectory(&self) -> &Trajectory {
        &self.trajectory
    }

    pub fn energy(&self) -> &EnergyReport {
        &self.energy
    }

    pub fn cartesian(&self) -> &CartesianTrajectory {
        &self.cartesian
    }

    /// Trail segments of the second bob for `frame`
    pub fn trail_at(&self, frame: usize) -> Vec<TrailSegment> {
        self.trail.trail_at(frame, &self.cartesian.bob2)
    }

    /// Frames to render: the configured count, capped at the sample count
    pub fn frame_count(&self) -> usize {
        self.frames.min(self.trajectory.len())
    }

    /// Playback rate the frames were configured for
    pub fn fps(&self) -> u32 {
        self.fps
    }

    /// Half-width of a square view centered on the pivot that always
    /// contains both bobs
    pub fn view_extent(&self) -> f64 {
        self.extent
    }
}
