use std::time::Instant;

use crate::configuration::config::IntegratorConfig;
use crate::simulation::integrator::integrate;
use crate::simulation::scenario::Scenario;
use crate::simulation::SimulationError;

/// One timed integration of a scenario
#[derive(Debug, Clone)]
pub struct BenchResult {
    pub integrator: IntegratorConfig,
    pub substeps: usize,
    pub seconds: f64,       // wall time of the integration alone
    pub drift: f64,         // summed energy drift, NaN on blow-up
    pub accepted: bool,     // passed the scenario's energy check
}

/// Integrate `scenario` with a range of substep counts for both methods and
/// report time and energy drift for each.
pub fn bench_step_sizes(scenario: &Scenario) -> Vec<BenchResult> {
    let substeps = [1, 2, 5, 10, 20, 50];
    let methods = [IntegratorConfig::Rk4, IntegratorConfig::Euler];

    let mut results = Vec::with_capacity(substeps.len() * methods.len());

    for integrator in methods {
        for n in substeps {
            let t0 = Instant::now();
            let trajectory = integrate(&scenario.parameters, scenario.initial, &scenario.grid, integrator, n);
            let seconds = t0.elapsed().as_secs_f64();

            let (drift, accepted) = match scenario.guard.check(&trajectory, &scenario.parameters) {
                Ok(report) => (report.drift, true),
                Err(SimulationError::EnergyDriftExceeded { drift, .. }) => (drift, false),
                Err(_) => (f64::NAN, false),
            };

            println!(
                "{:>5} substeps = {n:3}, h = {:8.2e} s, time = {:8.6} s, drift = {:10.3e} {}",
                format!("{integrator:?}"),
                scenario.grid.dt() / n as f64,
                seconds,
                drift,
                if accepted { "ok" } else { "REJECTED" },
            );

            results.push(BenchResult { integrator, substeps: n, seconds, drift, accepted });
        }
    }

    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::configuration::config::ScenarioConfig;

    #[test]
    fn bench_reports_every_method_and_step() {
        let cfg = ScenarioConfig::from_yaml_str("parameters:\n  t_max: 2.0\n").unwrap();
        let scenario = Scenario::build_scenario(cfg).unwrap();

        let results = bench_step_sizes(&scenario);
        assert_eq!(results.len(), 12);

        let find = |integrator: IntegratorConfig, substeps: usize| {
            results
                .iter()
                .find(|r| r.integrator == integrator && r.substeps == substeps)
                .unwrap()
        };

        let fine = find(IntegratorConfig::Rk4, 10);
        assert!(fine.accepted);
        assert!(fine.drift <= scenario.guard.tolerance());

        let coarse = find(IntegratorConfig::Euler, 1);
        assert!(!coarse.accepted);
        assert!(!(coarse.drift <= scenario.guard.tolerance()));

        assert!(results.iter().all(|r| r.seconds >= 0.0));
    }
}
