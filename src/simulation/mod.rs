pub mod states;
pub mod params;
pub mod engine;
pub mod error;
pub mod dynamics;
pub mod energy;
pub mod integrator;
pub mod conservation;
pub mod projection;
pub mod trail;
pub mod scenario;

pub use error::SimulationError;
