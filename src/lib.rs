pub mod simulation;
pub mod configuration;
pub mod benchmark;

pub use simulation::states::{State, TimeGrid, Trajectory, NVec2, NVec4};
pub use simulation::params::PhysicalParameters;
pub use simulation::error::SimulationError;
pub use simulation::dynamics::{state_derivative, VectorField};
pub use simulation::energy::{energy_trace, kinetic_energy, potential_energy, total_energy};
pub use simulation::integrator::{integrate, rk4_step, euler_step};
pub use simulation::conservation::{EnergyGuard, EnergyReport};
pub use simulation::projection::{project, bob_positions, CartesianTrajectory};
pub use simulation::trail::{TrailSegment, TrailWindower};
pub use simulation::scenario::{Scenario, AcceptedRun};
pub use simulation::engine::Engine;

pub use configuration::config::{IntegratorConfig, EngineConfig, ParametersConfig, PendulumConfig, InitialStateConfig, TrailConfig, AnimationConfig, ScenarioConfig};

pub use benchmark::benchmark::{bench_step_sizes, BenchResult};
