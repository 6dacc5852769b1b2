// simulation/simulation.rs
// Contains the Simulation struct and main methods (new, spawn_atom, clear, step, frame)

use std::sync::Arc;

use rand::rngs::StdRng;
use rand::SeedableRng;
use ultraviolet::Vec3;

use super::thermal;
use crate::atom::{bond, Atom};
use crate::config::{self, SimConfig};
use crate::elements::ElementTable;
use crate::interaction::{InteractionEngine, ReactionEvent};
use crate::molecule::{Molecule, MoleculeTracker};
use crate::profile_scope;

/// Water molecule next to a sodium/chlorine pair.
pub const STARTER_SCENARIO: &[(u32, [f32; 3])] = &[
    (8, [0.0, 0.0, 0.0]),
    (1, [0.76, 0.59, 0.0]),
    (1, [-0.76, 0.59, 0.0]),
    (11, [5.0, -5.0, 0.0]),
    (17, [7.4, -5.0, 0.0]),
];

/// The main simulation state: owns the atoms and drives the engine and tracker.
pub struct Simulation {
    pub atoms: Vec<Atom>,
    pub elements: Arc<ElementTable>,
    pub engine: InteractionEngine,
    pub tracker: MoleculeTracker,
    pub config: SimConfig,
    /// Simulation time in internal time units
    pub sim_time: f32,
    pub step_count: u64,
    rng: StdRng,
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new()
    }
}

impl Simulation {
    pub fn new() -> Self {
        Self::with_config(SimConfig::default())
    }

    pub fn with_config(config: SimConfig) -> Self {
        Self::with_elements(ElementTable::builtin(), config)
    }

    pub fn with_elements(elements: Arc<ElementTable>, config: SimConfig) -> Self {
        Self {
            atoms: Vec::new(),
            elements,
            engine: InteractionEngine::new(&config),
            tracker: MoleculeTracker::new(),
            rng: StdRng::seed_from_u64(config.seed),
            config,
            sim_time: 0.0,
            step_count: 0,
        }
    }

    /// Append an atom with a thermal velocity, then refresh bonds, molecules
    /// and forces so the next half-kick sees the new population.
    ///
    /// Unknown atomic numbers still spawn, as an inert massless particle.
    pub fn spawn_atom(&mut self, atomic_number: u32, position: Vec3) -> usize {
        let element = self.elements.get(atomic_number);
        if element.is_sentinel() {
            log::warn!("Spawning unknown element Z={} as an inert particle", atomic_number);
        }
        let mut atom = Atom::new(atomic_number, element, position);
        atom.vel = thermal::sample_velocity(&mut self.rng, atom.mass, self.config.temperature);
        log::info!(
            "Spawned {} at ({:.2}, {:.2}, {:.2})",
            element.symbol,
            position.x,
            position.y,
            position.z
        );
        self.atoms.push(atom);
        self.refresh_topology();
        self.atoms.len() - 1
    }

    /// Remove every atom and reset time, counters and the reaction log.
    pub fn clear(&mut self) {
        self.atoms.clear();
        self.engine.reset();
        self.sim_time = 0.0;
        self.step_count = 0;
        self.tracker.rebuild(&self.atoms, &self.elements);
        log::info!("Simulation cleared");
    }

    /// Spawn the built-in water + salt scene.
    pub fn load_starter_scenario(&mut self) {
        for &(z, [x, y, w]) in STARTER_SCENARIO {
            self.spawn_atom(z, Vec3::new(x, y, w));
        }
    }

    /// Replace the population wholesale (used when restoring a snapshot).
    pub fn restore(&mut self, atoms: Vec<Atom>, sim_time: f32, reaction_log: Vec<ReactionEvent>) {
        self.atoms = atoms;
        self.sim_time = sim_time;
        self.engine.reset();
        self.engine.reaction_log = reaction_log;
        for i in 0..self.atoms.len() {
            bond::purge_stale(&mut self.atoms, &self.elements, i);
        }
        for atom in &mut self.atoms {
            atom.refresh_valence(&self.elements);
        }
        self.tracker.rebuild(&self.atoms, &self.elements);
        self.engine.compute_forces(&mut self.atoms, &self.elements, &self.config);
    }

    fn refresh_topology(&mut self) {
        self.engine
            .update_bonds(&mut self.atoms, &self.elements, &self.config, self.sim_time);
        self.tracker.rebuild(&self.atoms, &self.elements);
        self.engine
            .compute_forces(&mut self.atoms, &self.elements, &self.config);
    }

    /// One velocity-Verlet step of `config.dt`.
    pub fn step(&mut self) {
        profile_scope!("simulation_step");
        if self.atoms.is_empty() {
            return;
        }
        let dt = self.config.dt;

        self.half_kick(dt);
        let half_extent = self.config.world_half_extent;
        for atom in &mut self.atoms {
            atom.pos += atom.vel * dt;
            apply_boundary(&mut atom.pos, &mut atom.vel, half_extent);
        }
        self.engine
            .compute_forces(&mut self.atoms, &self.elements, &self.config);
        self.half_kick(dt);

        if self.config.enable_thermostat {
            self.apply_thermostat();
        }

        let interval = self.config.bond_update_interval.max(1);
        if self.step_count % interval == 0 {
            let changes = self
                .engine
                .update_bonds(&mut self.atoms, &self.elements, &self.config, self.sim_time);
            if changes.any() || self.step_count == 0 {
                self.tracker.rebuild(&self.atoms, &self.elements);
            }
        }

        self.sim_time += dt;
        self.step_count += 1;
    }

    /// Run the configured number of substeps; one call per rendered frame.
    pub fn frame(&mut self) {
        profile_scope!("simulation_frame");
        for _ in 0..self.config.clamped_substeps() {
            self.step();
        }
    }

    fn half_kick(&mut self, dt: f32) {
        for atom in &mut self.atoms {
            if atom.mass > 0.0 {
                atom.vel += atom.force * (0.5 * dt / atom.mass);
            }
        }
    }

    /// Instantaneous kinetic temperature (Kelvin).
    pub fn temperature(&self) -> f32 {
        thermal::instantaneous_temperature(&self.atoms)
    }

    pub fn target_temperature(&self) -> f32 {
        self.config.temperature
    }

    /// Set the thermostat target, clamped to the allowed range.
    pub fn set_temperature(&mut self, temperature: f32) {
        let t = config::clamp_temperature(temperature);
        if t != self.config.temperature {
            log::info!("Target temperature {:.0} K -> {:.0} K", self.config.temperature, t);
        }
        self.config.temperature = t;
    }

    pub fn adjust_temperature(&mut self, delta: f32) {
        self.set_temperature(self.config.temperature + delta);
    }

    pub fn reaction_log(&self) -> &[ReactionEvent] {
        &self.engine.reaction_log
    }

    pub fn molecules(&self) -> &[Molecule] {
        self.tracker.molecules()
    }

    pub fn bond_count(&self) -> usize {
        bond::bond_count(&self.atoms)
    }

    pub fn atom_count(&self) -> usize {
        self.atoms.len()
    }
}

/// Reflect off the walls of the cube [-half_extent, half_extent]³: the
/// offending coordinate is clamped and that velocity component reversed and damped.
pub fn apply_boundary(pos: &mut Vec3, vel: &mut Vec3, half_extent: f32) {
    let reflect = |p: &mut f32, v: &mut f32| {
        if *p > half_extent {
            *p = half_extent;
            *v *= -config::WALL_RESTITUTION;
        } else if *p < -half_extent {
            *p = -half_extent;
            *v *= -config::WALL_RESTITUTION;
        }
    };
    reflect(&mut pos.x, &mut vel.x);
    reflect(&mut pos.y, &mut vel.y);
    reflect(&mut pos.z, &mut vel.z);
}
