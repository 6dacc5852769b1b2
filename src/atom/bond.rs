// atom/bond.rs
// Bond records and the only functions allowed to change bond topology.
//
// Every bond is stored twice, once on each endpoint. `link` and `unlink`
// always touch both sides so the reciprocal entries cannot drift apart.

use serde::{Deserialize, Serialize};

use super::types::Atom;
use crate::elements::ElementTable;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub enum BondType {
    Ionic,
    Covalent,
    Metallic,
    Hydrogen,
    VanDerWaals,
}

impl BondType {
    pub fn label(&self) -> &'static str {
        match self {
            BondType::Ionic => "ionic",
            BondType::Covalent => "covalent",
            BondType::Metallic => "metallic",
            BondType::Hydrogen => "hydrogen",
            BondType::VanDerWaals => "van der Waals",
        }
    }
}

/// Parameters fixed when a bond forms.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BondParams {
    pub kind: BondType,
    /// 1 to 3
    pub order: u32,
    /// De in eV
    pub dissociation_energy: f32,
    /// re in Å
    pub equilibrium_distance: f32,
    /// Morse width α in 1/Å
    pub morse_alpha: f32,
}

/// One endpoint's view of an undirected bond.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bond {
    pub partner: usize,
    pub kind: BondType,
    pub order: u32,
    pub dissociation_energy: f32,
    pub equilibrium_distance: f32,
    pub morse_alpha: f32,
}

impl Bond {
    fn new(partner: usize, p: BondParams) -> Self {
        Self {
            partner,
            kind: p.kind,
            order: p.order,
            dissociation_energy: p.dissociation_energy,
            equilibrium_distance: p.equilibrium_distance,
            morse_alpha: p.morse_alpha,
        }
    }

    pub fn params(&self) -> BondParams {
        BondParams {
            kind: self.kind,
            order: self.order,
            dissociation_energy: self.dissociation_energy,
            equilibrium_distance: self.equilibrium_distance,
            morse_alpha: self.morse_alpha,
        }
    }

    /// Morse energy De·(1 − e^{−α(r−re)})², zero at equilibrium, De at dissociation.
    pub fn morse_energy(&self, r: f32) -> f32 {
        let e = (-self.morse_alpha * (r - self.equilibrium_distance)).exp();
        self.dissociation_energy * (1.0 - e) * (1.0 - e)
    }

    /// dV/dr of the Morse potential. Positive when stretched (restoring pull).
    pub fn morse_force(&self, r: f32) -> f32 {
        let e = (-self.morse_alpha * (r - self.equilibrium_distance)).exp();
        2.0 * self.dissociation_energy * self.morse_alpha * (1.0 - e) * e
    }
}

/// Create a bond between `i` and `j`, recorded on both atoms.
///
/// Returns false (and changes nothing) for self-bonds, out-of-range indices
/// or pairs that are already bonded.
pub fn link(atoms: &mut [Atom], table: &ElementTable, i: usize, j: usize, params: BondParams) -> bool {
    if i == j || i >= atoms.len() || j >= atoms.len() {
        return false;
    }
    if atoms[i].is_bonded_to(j) || atoms[j].is_bonded_to(i) {
        return false;
    }
    atoms[i].bonds.push(Bond::new(j, params));
    atoms[j].bonds.push(Bond::new(i, params));
    atoms[i].refresh_valence(table);
    atoms[j].refresh_valence(table);
    true
}

/// Remove the bond between `i` and `j` from both atoms. Returns the record
/// held by `i`, if there was one.
pub fn unlink(atoms: &mut [Atom], table: &ElementTable, i: usize, j: usize) -> Option<Bond> {
    if i >= atoms.len() || j >= atoms.len() {
        return None;
    }
    let pos = atoms[i].bonds.iter().position(|b| b.partner == j);
    let removed = pos.map(|p| atoms[i].bonds.remove(p));
    atoms[j].bonds.retain(|b| b.partner != i);
    atoms[i].refresh_valence(table);
    atoms[j].refresh_valence(table);
    removed
}

/// Drop bonds on atom `i` whose partner index no longer exists, or whose
/// partner has no reciprocal entry. Returns the number dropped.
pub fn purge_stale(atoms: &mut [Atom], table: &ElementTable, i: usize) -> usize {
    let n = atoms.len();
    if i >= n {
        return 0;
    }
    let stale: Vec<usize> = atoms[i]
        .bonds
        .iter()
        .map(|b| b.partner)
        .filter(|&p| p >= n || p == i || !atoms[p].is_bonded_to(i))
        .collect();
    if stale.is_empty() {
        return 0;
    }
    atoms[i].bonds.retain(|b| !stale.contains(&b.partner));
    atoms[i].refresh_valence(table);
    stale.len()
}

/// Move the outermost electron of `from` onto `to`. Charges change by ±1.
pub fn transfer_electron(atoms: &mut [Atom], table: &ElementTable, from: usize, to: usize) -> bool {
    if from == to || from >= atoms.len() || to >= atoms.len() {
        return false;
    }
    let Some(e) = atoms[from].remove_outer_electron() else {
        return false;
    };
    atoms[to].add_electron(e);
    atoms[from].refresh_valence(table);
    atoms[to].refresh_valence(table);
    true
}

/// Every undirected bond once, as (lower index, higher index, record on lower).
pub fn unique_bonds(atoms: &[Atom]) -> Vec<(usize, usize, Bond)> {
    let mut out = Vec::new();
    for (i, a) in atoms.iter().enumerate() {
        for b in a.bonds() {
            if b.partner > i && b.partner < atoms.len() {
                out.push((i, b.partner, *b));
            }
        }
    }
    out
}

/// Number of undirected bonds.
pub fn bond_count(atoms: &[Atom]) -> usize {
    unique_bonds(atoms).len()
}
