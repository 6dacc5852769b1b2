// atom/types.rs
// Contains the Atom struct and its element-derived helpers

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use ultraviolet::Vec3;

use super::bond::Bond;
use super::electron::{fill_electron_shells, Electron};
use crate::config;
use crate::elements::{ElementData, ElementTable};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Atom {
    pub atomic_number: u32,
    pub pos: Vec3,
    pub vel: Vec3,
    pub force: Vec3,
    pub mass: f32,
    pub electrons: Vec<Electron>,
    /// Net ionic charge in e. Changed only by electron transfer.
    pub(super) charge: i32,
    pub(super) bonds: SmallVec<[Bond; 4]>,
    /// Unpaired valence electrons still free to bond.
    pub(super) effective_valence: u32,
    /// 0.5·m·v², refreshed by the force pass
    pub kinetic_energy: f32,
    pub visual_radius: f32,
}

impl Atom {
    /// Neutral ground-state atom of `element` at rest at `pos`.
    ///
    /// `atomic_number` is kept even when `element` is the sentinel record, in
    /// which case the atom is massless, electron-free and never bonds.
    pub fn new(atomic_number: u32, element: &ElementData, pos: Vec3) -> Self {
        let mut atom = Self {
            atomic_number,
            pos,
            vel: Vec3::zero(),
            force: Vec3::zero(),
            mass: element.atomic_mass,
            electrons: fill_electron_shells(element.atomic_number),
            charge: 0,
            bonds: SmallVec::new(),
            effective_valence: 0,
            kinetic_energy: 0.0,
            visual_radius: element.atomic_radius_a().max(config::MIN_VISUAL_RADIUS),
        };
        atom.recompute_valence(element);
        atom
    }

    pub fn element<'a>(&self, table: &'a ElementTable) -> &'a ElementData {
        table.get(self.atomic_number)
    }

    pub fn charge(&self) -> i32 {
        self.charge
    }

    pub fn bonds(&self) -> &[Bond] {
        &self.bonds
    }

    pub fn effective_valence(&self) -> u32 {
        self.effective_valence
    }

    pub fn bond_to(&self, partner: usize) -> Option<&Bond> {
        self.bonds.iter().find(|b| b.partner == partner)
    }

    pub fn is_bonded_to(&self, partner: usize) -> bool {
        self.bond_to(partner).is_some()
    }

    pub fn total_bond_order(&self) -> u32 {
        self.bonds.iter().map(|b| b.order).sum()
    }

    /// Lone electron pairs: (valence electrons − total bond order) / 2, floored at 0.
    pub fn lone_pairs(&self, element: &ElementData) -> u32 {
        element.valence_electrons.saturating_sub(self.total_bond_order()) / 2
    }

    /// VSEPR steric number: bonded neighbours plus lone pairs.
    pub fn steric_number(&self, element: &ElementData) -> u32 {
        self.bonds.len() as u32 + self.lone_pairs(element)
    }

    /// High electron affinity and an unfilled valence shell.
    pub fn wants_electron(&self, element: &ElementData) -> bool {
        element.electron_affinity > config::ACCEPTOR_MIN_AFFINITY_EV
            && element.valence_electrons < config::ACCEPTOR_MAX_VALENCE
    }

    /// Low ionization energy and at most two valence electrons.
    pub fn wants_to_lose_electron(&self, element: &ElementData) -> bool {
        element.ionization_energy < config::DONOR_MAX_IONIZATION_EV
            && element.valence_electrons <= config::DONOR_MAX_VALENCE
    }

    pub fn kinetic(&self) -> f32 {
        0.5 * self.mass * self.vel.mag_sq()
    }

    pub fn refresh_valence(&mut self, table: &ElementTable) {
        let element = table.get(self.atomic_number);
        self.recompute_valence(element);
    }

    fn recompute_valence(&mut self, element: &ElementData) {
        self.effective_valence = element
            .bonding_capacity()
            .saturating_sub(self.total_bond_order());
    }

    pub(super) fn remove_outer_electron(&mut self) -> Option<Electron> {
        let e = self.electrons.pop()?;
        self.charge += 1;
        Some(e)
    }

    pub(super) fn add_electron(&mut self, e: Electron) {
        self.electrons.push(e);
        self.charge -= 1;
    }
}
