// commands.rs
// The command surface: plain SimCommand values applied to a Simulation

use serde::{Deserialize, Serialize};
use ultraviolet::Vec3;

use crate::config;
use crate::io::{load_state, save_state};
use crate::simulation::Simulation;

/// Requests a UI, script or test harness can make of the simulation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum SimCommand {
    SpawnAtom { atomic_number: u32, position: Vec3 },
    Clear,
    IncreaseTemperature,
    DecreaseTemperature,
    SetTemperature { temperature: f32 },
    ToggleAtoms,
    ToggleBonds,
    ToggleOrbitalClouds,
    StepOnce,
    SaveState { path: String },
    LoadState { path: String },
}

/// Process a single SimCommand
pub fn process_command(cmd: SimCommand, simulation: &mut Simulation) {
    match cmd {
        SimCommand::SpawnAtom {
            atomic_number,
            position,
        } => {
            simulation.spawn_atom(atomic_number, position);
        }
        SimCommand::Clear => simulation.clear(),
        SimCommand::IncreaseTemperature => simulation.adjust_temperature(config::TEMPERATURE_STEP),
        SimCommand::DecreaseTemperature => simulation.adjust_temperature(-config::TEMPERATURE_STEP),
        SimCommand::SetTemperature { temperature } => simulation.set_temperature(temperature),
        SimCommand::ToggleAtoms => {
            let v = &mut simulation.config.visibility;
            v.atoms = !v.atoms;
        }
        SimCommand::ToggleBonds => {
            let v = &mut simulation.config.visibility;
            v.bonds = !v.bonds;
        }
        SimCommand::ToggleOrbitalClouds => {
            let v = &mut simulation.config.visibility;
            v.orbital_clouds = !v.orbital_clouds;
        }
        SimCommand::StepOnce => handle_step_once(simulation),
        SimCommand::SaveState { path } => handle_save_state(simulation, path),
        SimCommand::LoadState { path } => handle_load_state(simulation, path),
    }
}

fn handle_step_once(simulation: &mut Simulation) {
    simulation.step();
    #[cfg(feature = "profiling")]
    {
        crate::PROFILER.lock().print_and_clear();
    }
}

fn handle_save_state(simulation: &Simulation, path: String) {
    match save_state(&path, simulation) {
        Ok(()) => log::info!("Saved state to {}", path),
        Err(e) => log::error!("Failed to save state: {}", e),
    }
}

fn handle_load_state(simulation: &mut Simulation, path: String) {
    match load_state(&path) {
        Ok(snapshot) => {
            snapshot.apply_to(simulation);
            log::info!("Loaded state from {}", path);
        }
        Err(e) => log::error!("Failed to load state: {}", e),
    }
}
