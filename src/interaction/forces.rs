//! Force calculation for the interaction engine.
//!
//! Bonded pairs feel a Morse force, unbonded pairs a Lennard-Jones force, and
//! charged pairs a Coulomb force on top. Every pair term is applied with
//! Newton's third law and multiplied by a cubic switch that takes it to zero
//! at the cutoff. Atoms with two or more bonds also get VSEPR angle springs.

use ultraviolet::Vec3;

use super::InteractionEngine;
use crate::atom::{bond, Atom};
use crate::config::SimConfig;
use crate::elements::ElementTable;
use crate::profile_scope;

/// Cubic switch: 1 below `switch_distance`, 0 at and beyond `cutoff`,
/// 1 − 3x² + 2x³ in between with x = (r − rs)/(rc − rs).
pub fn switching_factor(r: f32, switch_distance: f32, cutoff: f32) -> f32 {
    if r <= switch_distance {
        return 1.0;
    }
    if r >= cutoff || cutoff <= switch_distance {
        return 0.0;
    }
    let x = (r - switch_distance) / (cutoff - switch_distance);
    1.0 - 3.0 * x * x + 2.0 * x * x * x
}

/// Ideal VSEPR bond angle (radians) for a steric number.
pub fn ideal_bond_angle(steric_number: u32) -> f32 {
    match steric_number {
        0..=2 => std::f32::consts::PI,
        3 => 120f32.to_radians(),
        4 => 109.47f32.to_radians(),
        _ => std::f32::consts::FRAC_PI_2,
    }
}

/// Lennard-Jones radial force (positive = repulsive) and energy.
fn lennard_jones(sigma: f32, epsilon: f32, r: f32) -> (f32, f32) {
    let sr6 = (sigma / r).powi(6);
    let force = 24.0 * epsilon * (2.0 * sr6 * sr6 - sr6) / r;
    let energy = 4.0 * epsilon * (sr6 * sr6 - sr6);
    (force, energy)
}

/// Coulomb radial force (positive = repulsive) and energy.
fn coulomb(k: f32, q1: i32, q2: i32, r: f32) -> (f32, f32) {
    let qq = (q1 * q2) as f32;
    (k * qq / (r * r), k * qq / r)
}

impl InteractionEngine {
    /// Reset accumulators, then apply every pair and angle force at the current
    /// positions. Refreshes per-atom kinetic energy and the energy totals.
    pub fn compute_forces(&mut self, atoms: &mut [Atom], table: &ElementTable, config: &SimConfig) {
        profile_scope!("forces");
        let mut kinetic = 0.0;
        for atom in atoms.iter_mut() {
            atom.force = Vec3::zero();
            atom.kinetic_energy = atom.kinetic();
            kinetic += atom.kinetic_energy;
        }
        self.total_kinetic_energy = kinetic;

        self.cells.rebuild(atoms);
        let pairs = self.cells.pairs_within(atoms, config.cutoff);

        let mut potential = 0.0;
        for (i, j) in pairs {
            let (f, e) = pair_force(atoms, i, j, table, config);
            atoms[i].force += f;
            atoms[j].force -= f;
            potential += e;
        }
        potential += self.apply_vsepr(atoms, table, config);
        self.total_potential_energy = potential;

        self.total_bond_energy = bond::unique_bonds(atoms)
            .iter()
            .map(|(_, _, b)| b.dissociation_energy)
            .sum();
    }

    /// Harmonic angle springs around every atom with two or more bonds.
    /// Returns the total angle energy ½kΔθ².
    fn apply_vsepr(&self, atoms: &mut [Atom], table: &ElementTable, config: &SimConfig) -> f32 {
        profile_scope!("forces_vsepr");
        let n = atoms.len();
        let mut extra = vec![Vec3::zero(); n];
        let mut energy = 0.0;

        for c in 0..n {
            let center = &atoms[c];
            if center.bonds().len() < 2 {
                continue;
            }
            let theta0 = ideal_bond_angle(center.steric_number(center.element(table)));
            let partners: Vec<usize> = center
                .bonds()
                .iter()
                .map(|b| b.partner)
                .filter(|&p| p < n && p != c)
                .collect();

            for x in 0..partners.len() {
                for y in (x + 1)..partners.len() {
                    let (a, b) = (partners[x], partners[y]);
                    let u = atoms[a].pos - atoms[c].pos;
                    let v = atoms[b].pos - atoms[c].pos;
                    let (lu, lv) = (u.mag(), v.mag());
                    if lu < 1e-6 || lv < 1e-6 {
                        continue;
                    }
                    let (uh, vh) = (u / lu, v / lv);
                    let cos = uh.dot(vh).clamp(-1.0, 1.0);
                    let sin = (1.0 - cos * cos).sqrt();
                    if sin < 1e-4 {
                        continue;
                    }
                    let delta = cos.acos() - theta0;
                    energy += 0.5 * config.vsepr_k * delta * delta;

                    let fa = (vh - uh * cos) * (config.vsepr_k * delta / (lu * sin));
                    let fb = (uh - vh * cos) * (config.vsepr_k * delta / (lv * sin));
                    extra[a] += fa;
                    extra[b] += fb;
                    extra[c] -= fa + fb;
                }
            }
        }

        for (atom, f) in atoms.iter_mut().zip(extra) {
            atom.force += f;
        }
        energy
    }
}

/// Force on atom `i` due to atom `j` (the force on `j` is its negation) and
/// the pair energy.
pub(crate) fn pair_force(
    atoms: &[Atom],
    i: usize,
    j: usize,
    table: &ElementTable,
    config: &SimConfig,
) -> (Vec3, f32) {
    let (a, b) = (&atoms[i], &atoms[j]);
    let (ea, eb) = (table.get(a.atomic_number), table.get(b.atomic_number));
    if ea.is_sentinel() || eb.is_sentinel() {
        return (Vec3::zero(), 0.0);
    }
    let d = b.pos - a.pos;
    let dist = d.mag();
    if dist < crate::config::COINCIDENT_DISTANCE || dist >= config.cutoff {
        return (Vec3::zero(), 0.0);
    }
    let dir = d / dist;
    let r = dist.max(config.min_pair_distance);
    let max = config.lj_force_max;

    // `pull` is the radial force on `a` toward `b`
    let mut pull = 0.0;
    let mut energy = 0.0;

    if let Some(bond) = a.bond_to(j) {
        pull += bond.morse_force(r).clamp(-max, max);
        energy += bond.morse_energy(r);
    } else {
        let sigma = 0.5 * (ea.vdw_radius_a() + eb.vdw_radius_a());
        if sigma > 0.0 {
            let (f, e) = lennard_jones(sigma, config.lj_epsilon, r);
            pull -= f.clamp(-max, max);
            energy += e;
        }
    }

    if a.charge() != 0 || b.charge() != 0 {
        let (f, e) = coulomb(config.coulomb_constant, a.charge(), b.charge(), r);
        pull -= f.clamp(-max, max);
        energy += e;
    }

    let s = switching_factor(dist, config.switch_distance, config.cutoff);
    (dir * (pull * s), energy * s)
}
