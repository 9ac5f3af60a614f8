//! High-level runtime engine settings
//!
//! Selects the integrator and how many internal steps cover each grid
//! interval when running a `Scenario`

use crate::configuration::config::IntegratorConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Engine {
    pub integrator: IntegratorConfig, // rk4 or euler
    pub substeps: usize, // internal steps per grid interval, at least 1
}

impl Default for Engine {
    fn default() -> Self {
        Self { integrator: IntegratorConfig::Rk4, substeps: 10 }
    }
}
