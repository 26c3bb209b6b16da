use pointsim::{build_world, run, ScenarioConfig};

use anyhow::{bail, Context, Result};
use clap::Parser;
use log::info;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    /// Scenario file under the scenarios/ directory
    #[arg(short, default_value = "projectile.yaml")]
    file_name: String,

    /// Override the scenario's stop time
    #[arg(long)]
    t_end: Option<f64>,

    /// Log a checkpoint every N steps (0 disables)
    #[arg(long, default_value_t = 100)]
    dstep_log: usize,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("scenarios")
        .join(file_name);
    let file = File::open(&config_path)
        .with_context(|| format!("opening scenario {}", config_path.display()))?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)?;
    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let scenario_cfg = load_scenario_from_yaml(&args.file_name)?;
    let mut world = build_world(&scenario_cfg)?;
    if let Some(t_end) = args.t_end {
        world.params.t_end = Some(t_end);
    }
    if world.params.t_end.is_none() {
        bail!("scenario has no stop time; set t_end in the file or pass --t-end");
    }

    let steps = run(&mut world, args.dstep_log);
    info!("finished: steps={}, t={:.6}", steps, world.t());

    for (b, body) in world.bodies.iter().enumerate() {
        for (i, point) in body.points().iter().enumerate() {
            info!(
                "body {} point {}: pos=({:.4}, {:.4}, {:.4}) vel=({:.4}, {:.4}, {:.4})",
                b,
                i,
                point.pos().x,
                point.pos().y,
                point.pos().z,
                point.vel.x,
                point.vel.y,
                point.vel.z,
            );
        }
    }

    Ok(())
}
