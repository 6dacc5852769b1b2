//! Bond formation and breaking.
//!
//! Nothing here consults a reaction table. Whether two atoms bond, and how,
//! follows from electronegativity, ionization energy, electron affinity and
//! radii; whether a bond survives follows from its Morse energy, its stretch
//! and the temperature.

use std::collections::HashSet;

use super::InteractionEngine;
use crate::atom::{bond, Atom, Bond, BondParams, BondType};
use crate::config::{self, SimConfig, ThermalBreakModel};
use crate::elements::ElementTable;
use crate::profile_scope;
use crate::units;

/// What one bonding pass changed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BondChanges {
    pub formed: usize,
    pub broken: usize,
}

impl BondChanges {
    pub fn any(&self) -> bool {
        self.formed + self.broken > 0
    }
}

/// Morse width α = √(De / 1 eV) Å⁻¹, clamped.
pub fn morse_alpha_for(dissociation_energy: f32) -> f32 {
    dissociation_energy
        .max(0.0)
        .sqrt()
        .clamp(config::MORSE_ALPHA_MIN, config::MORSE_ALPHA_MAX)
}

/// Un-weighted covalent bond energy: order · (√(EA·EA) + s·√(IE·IE)).
/// Negative affinities count as zero.
pub fn covalent_bond_energy(order: u32, ea_a: f32, ea_b: f32, ie_a: f32, ie_b: f32) -> f32 {
    let ea = (ea_a.max(0.0) * ea_b.max(0.0)).sqrt();
    let ie = (ie_a.max(0.0) * ie_b.max(0.0)).sqrt();
    order as f32 * (ea + config::COVALENT_IE_SCALE * ie)
}

/// Gaussian overlap factor peaked at the equilibrium distance.
fn overlap_factor(r: f32, equilibrium: f32) -> f32 {
    let x = (r - equilibrium) / config::OVERLAP_WIDTH;
    (-x * x).exp()
}

fn symbol(atoms: &[Atom], table: &ElementTable, i: usize) -> String {
    table.get(atoms[i].atomic_number).symbol.clone()
}

impl InteractionEngine {
    /// Run the break phase and then the form phase, then refresh every atom's
    /// effective valence. `time` stamps any reaction log entries.
    pub fn update_bonds(
        &mut self,
        atoms: &mut [Atom],
        table: &ElementTable,
        config: &SimConfig,
        time: f32,
    ) -> BondChanges {
        profile_scope!("update_bonds");
        let broken_pairs = self.break_bonds(atoms, table, config, time);
        let formed = self.form_bonds(atoms, table, config, time, &broken_pairs);
        for atom in atoms.iter_mut() {
            atom.refresh_valence(table);
        }
        BondChanges {
            formed,
            broken: broken_pairs.len(),
        }
    }

    /// Evaluate every bond once and remove those that meet a break criterion.
    /// Returns the broken pairs as (lower, higher) index tuples.
    pub fn break_bonds(
        &mut self,
        atoms: &mut [Atom],
        table: &ElementTable,
        config: &SimConfig,
        time: f32,
    ) -> HashSet<(usize, usize)> {
        let mut broken = HashSet::new();

        for i in 0..atoms.len() {
            let dropped = bond::purge_stale(atoms, table, i);
            if dropped > 0 {
                log::warn!("Dropped {} stale bond(s) on atom {}", dropped, i);
            }
        }

        for (i, j, b) in bond::unique_bonds(atoms) {
            let r = (atoms[j].pos - atoms[i].pos).mag();
            if !self.should_break(&b, r, config.temperature, config.thermal_break_model) {
                continue;
            }
            if bond::unlink(atoms, table, i, j).is_none() {
                continue;
            }
            if b.kind == BondType::Ionic {
                // the cation takes its electron back
                if atoms[i].charge() > 0 && atoms[j].charge() < 0 {
                    bond::transfer_electron(atoms, table, j, i);
                } else if atoms[j].charge() > 0 && atoms[i].charge() < 0 {
                    bond::transfer_electron(atoms, table, i, j);
                }
            }
            broken.insert((i, j));
            self.bonds_broken += 1;
            let description = format!(
                "{} bond broken: {}-{} (r = {:.2} A)",
                b.kind.label(),
                symbol(atoms, table, i),
                symbol(atoms, table, j),
                r
            );
            self.log_reaction(time, description);
        }
        broken
    }

    /// Break criteria: Morse energy past 90% of De (stretched or compressed),
    /// the thermal criterion, or a stretch past 2.5 re.
    pub fn should_break(&mut self, b: &Bond, r: f32, temperature: f32, model: ThermalBreakModel) -> bool {
        if b.morse_energy(r) > config::BREAK_ENERGY_FRACTION * b.dissociation_energy {
            return true;
        }
        if r > config::BREAK_STRETCH_FACTOR * b.equilibrium_distance {
            return true;
        }
        let kt = units::thermal_energy(temperature);
        if kt <= 0.0 {
            return false;
        }
        let boltzmann = (-b.dissociation_energy / (config::THERMAL_BREAK_KT_MULTIPLE * kt)).exp();
        match model {
            ThermalBreakModel::DeterministicThreshold => boltzmann > config::THERMAL_BREAK_THRESHOLD,
            ThermalBreakModel::Stochastic => self.rng.f32() < boltzmann,
        }
    }

    /// Try every unbonded pair within bonding range, skipping pairs broken in
    /// the same pass. Returns the number of bonds formed.
    pub fn form_bonds(
        &mut self,
        atoms: &mut [Atom],
        table: &ElementTable,
        config: &SimConfig,
        time: f32,
        skip: &HashSet<(usize, usize)>,
    ) -> usize {
        self.cells.rebuild(atoms);
        let candidates = self.cells.pairs_within(atoms, config.bonding_range);

        let mut formed = 0;
        for (i, j) in candidates {
            if skip.contains(&(i, j)) || atoms[i].is_bonded_to(j) {
                continue;
            }
            let (ea, eb) = (table.get(atoms[i].atomic_number), table.get(atoms[j].atomic_number));
            if ea.is_noble_gas() || eb.is_noble_gas() {
                continue;
            }
            if ea.electronegativity < config::MIN_ELECTRONEGATIVITY
                || eb.electronegativity < config::MIN_ELECTRONEGATIVITY
            {
                continue;
            }
            let delta_chi = (ea.electronegativity - eb.electronegativity).abs();
            let ok = if delta_chi > config.ionic_threshold {
                self.try_ionic(atoms, table, config, time, i, j)
            } else {
                self.try_covalent(atoms, table, config, time, i, j)
            };
            if ok {
                formed += 1;
            }
        }
        formed
    }

    /// Born–Haber check and electron transfer from the less electronegative atom.
    pub fn try_ionic(
        &mut self,
        atoms: &mut [Atom],
        table: &ElementTable,
        config: &SimConfig,
        time: f32,
        i: usize,
        j: usize,
    ) -> bool {
        if atoms[i].effective_valence() == 0 || atoms[j].effective_valence() == 0 {
            return false;
        }
        let (ei, ej) = (table.get(atoms[i].atomic_number), table.get(atoms[j].atomic_number));
        let (donor, acceptor) = if ei.electronegativity < ej.electronegativity {
            (i, j)
        } else {
            (j, i)
        };
        let (ed, ea) = (table.get(atoms[donor].atomic_number), table.get(atoms[acceptor].atomic_number));
        if !atoms[donor].wants_to_lose_electron(ed) || !atoms[acceptor].wants_electron(ea) {
            return false;
        }

        let r = (atoms[j].pos - atoms[i].pos).mag().max(config.min_pair_distance);
        let stabilization = config.coulomb_constant / r;
        let delta_e = ed.ionization_energy - ea.electron_affinity - stabilization;
        if delta_e > 0.0 {
            log::debug!("Ionic {}-{} rejected: endothermic ({:.2} eV)", ed.symbol, ea.symbol, delta_e);
            return false;
        }
        if delta_e.abs() <= config::IONIC_STABILITY_KT * units::thermal_energy(config.temperature) {
            log::debug!("Ionic {}-{} rejected: within thermal noise", ed.symbol, ea.symbol);
            return false;
        }

        let strength = delta_e.abs();
        let params = BondParams {
            kind: BondType::Ionic,
            order: 1,
            dissociation_energy: strength,
            equilibrium_distance: ed.covalent_radius_a() + ea.covalent_radius_a(),
            morse_alpha: morse_alpha_for(strength),
        };
        let (dsym, asym) = (ed.symbol.clone(), ea.symbol.clone());
        if !bond::transfer_electron(atoms, table, donor, acceptor) {
            return false;
        }
        if !bond::link(atoms, table, donor, acceptor, params) {
            // undo the transfer so charge never changes without a bond
            bond::transfer_electron(atoms, table, acceptor, donor);
            return false;
        }
        self.bonds_formed += 1;
        self.log_reaction(
            time,
            format!("Ionic bond formed: {}+ {}- (dE = {:.2} eV)", dsym, asym, delta_e),
        );
        true
    }

    /// Overlap-weighted covalent bond between two atoms with free valence.
    pub fn try_covalent(
        &mut self,
        atoms: &mut [Atom],
        table: &ElementTable,
        config: &SimConfig,
        time: f32,
        i: usize,
        j: usize,
    ) -> bool {
        let (vi, vj) = (atoms[i].effective_valence(), atoms[j].effective_valence());
        if vi == 0 || vj == 0 {
            return false;
        }
        let order = vi.min(vj).min(config::MAX_BOND_ORDER);
        let (ei, ej) = (table.get(atoms[i].atomic_number), table.get(atoms[j].atomic_number));

        let equilibrium = ei.covalent_radius_a() + ej.covalent_radius_a();
        let energy = covalent_bond_energy(
            order,
            ei.electron_affinity,
            ej.electron_affinity,
            ei.ionization_energy,
            ej.ionization_energy,
        );
        let r = (atoms[j].pos - atoms[i].pos).mag();
        let weighted = energy * overlap_factor(r, equilibrium);
        if weighted <= config::COVALENT_STABILITY_KT * units::thermal_energy(config.temperature) {
            log::debug!(
                "Covalent {}-{} rejected: {:.3} eV at r = {:.2} A",
                ei.symbol,
                ej.symbol,
                weighted,
                r
            );
            return false;
        }

        let params = BondParams {
            kind: BondType::Covalent,
            order,
            dissociation_energy: energy,
            equilibrium_distance: equilibrium,
            morse_alpha: morse_alpha_for(energy),
        };
        let (si, sj) = (ei.symbol.clone(), ej.symbol.clone());
        if !bond::link(atoms, table, i, j, params) {
            return false;
        }
        self.bonds_formed += 1;
        let marker = match order {
            1 => "-",
            2 => "=",
            _ => "#",
        };
        self.log_reaction(
            time,
            format!("Covalent bond formed: {}{}{} (order {}, {:.2} eV)", si, marker, sj, order, energy),
        );
        true
    }
}
