// Headless driver: load a scenario (or the starter scene), run frames and
// log what reacted.
//
// Usage: emergent_chem [scenario.toml] [--frames N] [--save snapshot.bin.gz]

use std::path::Path;

use anyhow::{bail, Context};
use emergent_chem::commands::{process_command, SimCommand};
use emergent_chem::init_config::{self, InitConfig};
use emergent_chem::Simulation;

const DEFAULT_FRAMES: usize = 100;
const REPORT_EVERY: usize = 10;

struct Args {
    scenario: Option<String>,
    frames: Option<usize>,
    save: Option<String>,
}

fn parse_args() -> anyhow::Result<Args> {
    let mut args = Args {
        scenario: None,
        frames: None,
        save: None,
    };
    let mut it = std::env::args().skip(1);
    while let Some(arg) = it.next() {
        match arg.as_str() {
            "--frames" => {
                let n = it.next().context("--frames needs a value")?;
                args.frames = Some(n.parse().with_context(|| format!("bad frame count '{}'", n))?);
            }
            "--save" => args.save = Some(it.next().context("--save needs a path")?),
            s if s.starts_with("--") => bail!("unknown option {}", s),
            _ => args.scenario = Some(arg),
        }
    }
    Ok(args)
}

fn build(args: &Args) -> anyhow::Result<(Simulation, Option<usize>)> {
    let path = match &args.scenario {
        Some(p) => Some(p.as_str()),
        None if Path::new(init_config::DEFAULT_PATH).exists() => Some(init_config::DEFAULT_PATH),
        None => None,
    };
    match path {
        Some(p) => {
            log::info!("Loading scenario {}", p);
            let cfg = InitConfig::load_from_file(p).with_context(|| format!("reading {}", p))?;
            let sim = cfg.build_simulation().with_context(|| format!("building {}", p))?;
            Ok((sim, cfg.frames))
        }
        None => {
            log::info!("No scenario file, using the starter scene");
            let mut sim = Simulation::new();
            sim.load_starter_scenario();
            Ok((sim, None))
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = parse_args()?;
    let (mut sim, scenario_frames) = build(&args)?;
    let frames = args.frames.or(scenario_frames).unwrap_or(DEFAULT_FRAMES);

    for frame in 1..=frames {
        sim.frame();
        if frame % REPORT_EVERY == 0 || frame == frames {
            log::info!(
                "frame {:>5}  t={:8.2}  T={:7.1} K  bonds={}  molecules={}  E={:.3} eV",
                frame,
                sim.sim_time,
                sim.temperature(),
                sim.bond_count(),
                sim.tracker.polyatomic().count(),
                sim.engine.total_energy()
            );
        }
    }

    log::info!("{} reactions:", sim.reaction_log().len());
    for event in sim.reaction_log() {
        log::info!("  [t={:.2}] {}", event.time, event.description);
    }
    for m in sim.molecules() {
        log::info!(
            "  molecule {}: {} ({} atoms, {:.3} eV bonded)",
            m.id,
            m.formula,
            m.len(),
            m.total_bond_energy
        );
    }

    if let Some(path) = args.save {
        process_command(SimCommand::SaveState { path }, &mut sim);
    }

    #[cfg(feature = "profiling")]
    emergent_chem::PROFILER.lock().print_and_clear();

    Ok(())
}
