//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! double pendulum scenario. A scenario consists of:
//!
//! - [`EngineConfig`]       – integrator method and substeps per grid interval
//! - [`ParametersConfig`]   – time grid and energy drift tolerance
//! - [`PendulumConfig`]     – rod lengths, bob masses, gravity
//! - [`InitialStateConfig`] – angles and angular velocities at t = 0
//! - [`TrailConfig`]        – trail window and segment count
//! - [`AnimationConfig`]    – hints passed through to the renderer
//! - [`ScenarioConfig`]     – top-level wrapper used to load a scenario from YAML
//!
//! Every section and field is optional; missing values fall back to the
//! canonical double pendulum (unit rods and masses, released from
//! `(3π/7, 0, 3π/4, 0)`, 30 s at 0.01 s).
//!
//! # YAML format
//!
//! ```yaml
//! engine:
//!   integrator: "rk4"       # or "euler"
//!   substeps: 10            # internal steps per grid interval
//!
//! parameters:
//!   t_max: 30.0             # end of the time grid (s)
//!   dt: 0.01                # grid spacing (s)
//!   e_drift: 0.05           # tolerated summed energy drift
//!
//! pendulum:
//!   l1: 1.0
//!   l2: 1.0
//!   m1: 1.0
//!   m2: 1.0
//!   g: 9.81
//!
//! initial:
//!   theta1: 1.3463968515384828
//!   omega1: 0.0
//!   theta2: 2.356194490192345
//!   omega2: 0.0
//!
//! trail:
//!   trail_secs: 0.5
//!   segments: 20
//!
//! animation:
//!   frames: 500
//!   fps: 30
//!   bob_radius: 0.05
//! ```
//!
//! Values are validated when the runtime `Scenario` is built, not here.

use std::f64::consts::PI;

use serde::Deserialize;

/// Which integrator method used by the engine
/// `integrator: "rk4"` or `integrator: "euler"`
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IntegratorConfig {
    #[serde(rename = "rk4")] // Classical 4th-order Runge–Kutta, fixed step
    #[default]
    Rk4,

    #[serde(rename = "euler")] // Explicit (forward) Euler, first order, for comparison only
    Euler,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct EngineConfig {
    pub integrator: IntegratorConfig, // Time integrator used for advancing the state
    pub substeps: usize, // Internal steps per grid interval
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self { integrator: IntegratorConfig::Rk4, substeps: 10 }
    }
}

/// Time grid and acceptance tolerance
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct ParametersConfig {
    pub t_max: f64,   // time end
    pub dt: f64,      // grid spacing
    pub e_drift: f64, // tolerated sum of |E(t) - E(0)| over the grid
}

impl Default for ParametersConfig {
    fn default() -> Self {
        Self { t_max: 30.0, dt: 0.01, e_drift: 0.05 }
    }
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct PendulumConfig {
    pub l1: f64, // rod lengths (m)
    pub l2: f64,
    pub m1: f64, // bob masses (kg)
    pub m2: f64,
    pub g: f64,  // gravitational acceleration (m/s^2)
}

impl Default for PendulumConfig {
    fn default() -> Self {
        Self { l1: 1.0, l2: 1.0, m1: 1.0, m2: 1.0, g: 9.81 }
    }
}

/// Initial state, angles measured from the downward vertical
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct InitialStateConfig {
    pub theta1: f64,
    pub omega1: f64,
    pub theta2: f64,
    pub omega2: f64,
}

impl Default for InitialStateConfig {
    fn default() -> Self {
        Self {
            theta1: 3.0 * PI / 7.0,
            omega1: 0.0,
            theta2: 3.0 * PI / 4.0,
            omega2: 0.0,
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct TrailConfig {
    pub trail_secs: f64, // length of the second bob's trail in seconds
    pub segments: usize, // number of fading segments
}

impl Default for TrailConfig {
    fn default() -> Self {
        Self { trail_secs: 0.5, segments: 20 }
    }
}

/// Renderer hints, not used by the physics
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct AnimationConfig {
    pub frames: usize,   // number of frames to render
    pub fps: u32,        // playback rate
    pub bob_radius: f64, // drawn bob radius
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self { frames: 500, fps: 30, bob_radius: 0.05 }
    }
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct ScenarioConfig {
    pub engine: EngineConfig, // Integrator selection
    pub parameters: ParametersConfig, // Time grid and tolerance
    pub pendulum: PendulumConfig, // Physical parameters
    pub initial: InitialStateConfig, // State at t = 0
    pub trail: TrailConfig, // Trail windowing
    pub animation: AnimationConfig, // Renderer hints
}

impl ScenarioConfig {
    /// Parse a scenario from YAML text
    pub fn from_yaml_str(text: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(text)
    }

    /// Parse a scenario from any reader (e.g. a buffered file)
    pub fn from_reader<R: std::io::Read>(reader: R) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_reader(reader)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_yaml_keeps_defaults() {
        let cfg = ScenarioConfig::from_yaml_str(
            "engine:\n  integrator: \"euler\"\npendulum:\n  m2: 2.5\n",
        )
        .unwrap();
        assert_eq!(cfg.engine.integrator, IntegratorConfig::Euler);
        assert_eq!(cfg.engine.substeps, 10);
        assert_eq!(cfg.pendulum.m2, 2.5);
        assert_eq!(cfg.pendulum.l1, 1.0);
        assert_eq!(cfg.parameters.dt, 0.01);
        assert_eq!(cfg.trail.segments, 20);
    }

    #[test]
    fn empty_document_is_canonical() {
        let cfg = ScenarioConfig::from_yaml_str("{}").unwrap();
        assert_eq!(cfg.parameters.t_max, 30.0);
        assert_eq!(cfg.initial.theta1, 3.0 * PI / 7.0);
        assert_eq!(cfg.initial.theta2, 3.0 * PI / 4.0);
        assert_eq!(cfg.animation.frames, 500);
    }

    #[test]
    fn unknown_integrator_is_rejected() {
        assert!(ScenarioConfig::from_yaml_str("engine:\n  integrator: \"verlet\"\n").is_err());
    }
}
