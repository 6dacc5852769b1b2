//! Interaction engine: pair and angle forces plus the bond formation and
//! breaking protocol.
//!
//! The engine owns no atoms. The simulation hands it the atom slice, the
//! element table and its configuration on every call; the engine keeps only
//! its own bookkeeping (reaction log, counters, energy totals, neighbour grid).

pub mod bonding;
pub mod forces;

pub use bonding::{covalent_bond_energy, morse_alpha_for, BondChanges};
pub use forces::{ideal_bond_angle, switching_factor};

use serde::{Deserialize, Serialize};

use crate::cell_list::CellList;
use crate::config::{self, SimConfig};

/// One line of the append-only reaction log.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReactionEvent {
    /// Simulation time the event happened at (internal time units).
    pub time: f32,
    pub description: String,
}

pub struct InteractionEngine {
    pub reaction_log: Vec<ReactionEvent>,
    pub bonds_formed: u64,
    pub bonds_broken: u64,
    /// Σ ½mv² as of the last force pass (eV)
    pub total_kinetic_energy: f32,
    /// Pair (Morse, LJ, Coulomb) and angle energies as of the last force pass (eV)
    pub total_potential_energy: f32,
    /// Σ De over unique bonds (eV)
    pub total_bond_energy: f32,
    cells: CellList,
    rng: fastrand::Rng,
}

impl InteractionEngine {
    pub fn new(config: &SimConfig) -> Self {
        Self {
            reaction_log: Vec::new(),
            bonds_formed: 0,
            bonds_broken: 0,
            total_kinetic_energy: 0.0,
            total_potential_energy: 0.0,
            total_bond_energy: 0.0,
            cells: CellList::new(config.cutoff.max(config::BONDING_RANGE)),
            rng: fastrand::Rng::with_seed(config.seed),
        }
    }

    /// Forget the log, counters and totals. Used by a full clear.
    pub fn reset(&mut self) {
        self.reaction_log.clear();
        self.bonds_formed = 0;
        self.bonds_broken = 0;
        self.total_kinetic_energy = 0.0;
        self.total_potential_energy = 0.0;
        self.total_bond_energy = 0.0;
    }

    pub fn total_energy(&self) -> f32 {
        self.total_kinetic_energy + self.total_potential_energy
    }

    fn log_reaction(&mut self, time: f32, description: String) {
        log::info!("[t={:.2}] {}", time, description);
        self.reaction_log.push(ReactionEvent { time, description });
    }
}

#[cfg(test)]
mod tests;
