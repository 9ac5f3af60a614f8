use dpsim::{bench_step_sizes, Scenario, ScenarioConfig};

use anyhow::{Context, Result};
use clap::Parser;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(about = "Integrate a double pendulum and check energy conservation")]
struct Args {
    /// Scenario file name inside the `scenarios` directory
    #[arg(short, long = "file", default_value = "double_pendulum.yaml")]
    file_name: String,

    /// Time the integrators at several step sizes instead of running once
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name);
    let file = File::open(&config_path).with_context(|| format!("failed to open {}", config_path.display()))?;
    let reader = BufReader::new(file);
    let scenario_cfg = ScenarioConfig::from_reader(reader)
        .with_context(|| format!("failed to parse {}", config_path.display()))?;

    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let scenario_cfg = load_scenario_from_yaml(&args.file_name)?;
    let scenario = Scenario::build_scenario(scenario_cfg).context("invalid scenario")?;

    if args.bench {
        bench_step_sizes(&scenario);
        return Ok(());
    }

    // A rejected run ends here with a non-zero exit status
    let run = scenario.run()?;

    let energy = run.energy();
    let cartesian = run.cartesian();
    let last = cartesian.len() - 1;

    println!("samples:        {}", run.trajectory().len());
    println!("initial energy: {:.6} J", energy.initial_energy);
    println!("energy drift:   {:.3e} (tolerance {})", energy.drift, energy.tolerance);
    println!("max deviation:  {:.3e} J", energy.max_deviation);
    println!("final bob 1:    ({:.4}, {:.4})", cartesian.bob1[last].x, cartesian.bob1[last].y);
    println!("final bob 2:    ({:.4}, {:.4})", cartesian.bob2[last].x, cartesian.bob2[last].y);
    println!(
        "frames:         {} at {} fps (view extent ±{:.2} m)",
        run.frame_count(),
        run.fps(),
        run.view_extent()
    );
    println!("trail segments at last frame: {}", run.trail_at(run.frame_count().saturating_sub(1)).len());

    Ok(())
}
