//! Molecule identity as connected components of the bond graph.
//!
//! Molecules are a derived view. `MoleculeTracker::rebuild` throws the old
//! list away and walks the whole graph again; nothing is patched in place.

use std::collections::{BTreeMap, VecDeque};

use serde::{Deserialize, Serialize};
use ultraviolet::Vec3;

use crate::atom::Atom;
use crate::elements::ElementTable;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Molecule {
    pub id: usize,
    /// Member atoms in breadth-first discovery order
    pub atom_indices: Vec<usize>,
    pub total_mass: f32,
    pub center_of_mass: Vec3,
    /// Σ De over the component's bonds, each counted once
    pub total_bond_energy: f32,
    pub formula: String,
}

impl Molecule {
    pub fn len(&self) -> usize {
        self.atom_indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.atom_indices.is_empty()
    }

    pub fn is_single_atom(&self) -> bool {
        self.atom_indices.len() == 1
    }
}

#[derive(Default, Debug, Clone)]
pub struct MoleculeTracker {
    molecules: Vec<Molecule>,
}

impl MoleculeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn molecules(&self) -> &[Molecule] {
        &self.molecules
    }

    /// Components with more than one atom.
    pub fn polyatomic(&self) -> impl Iterator<Item = &Molecule> {
        self.molecules.iter().filter(|m| m.len() > 1)
    }

    /// Molecule containing atom `index`, if it was present at the last rebuild.
    pub fn molecule_of(&self, index: usize) -> Option<&Molecule> {
        self.molecules.iter().find(|m| m.atom_indices.contains(&index))
    }

    /// Recompute every molecule from scratch.
    pub fn rebuild(&mut self, atoms: &[Atom], table: &ElementTable) {
        crate::profile_scope!("molecules");
        self.molecules.clear();
        let n = atoms.len();
        let mut visited = vec![false; n];

        for start in 0..n {
            if visited[start] {
                continue;
            }
            let mut members = Vec::new();
            let mut queue = VecDeque::from([start]);
            visited[start] = true;
            while let Some(cur) = queue.pop_front() {
                members.push(cur);
                for b in atoms[cur].bonds() {
                    if b.partner < n && !visited[b.partner] {
                        visited[b.partner] = true;
                        queue.push_back(b.partner);
                    }
                }
            }
            let id = self.molecules.len();
            self.molecules.push(summarize(id, members, atoms, table));
        }
    }
}

fn summarize(id: usize, atom_indices: Vec<usize>, atoms: &[Atom], table: &ElementTable) -> Molecule {
    let mut total_mass = 0.0;
    let mut weighted = Vec3::zero();
    let mut total_bond_energy = 0.0;
    for &i in &atom_indices {
        let a = &atoms[i];
        total_mass += a.mass;
        weighted += a.pos * a.mass;
        total_bond_energy += a
            .bonds()
            .iter()
            .filter(|b| b.partner > i)
            .map(|b| b.dissociation_energy)
            .sum::<f32>();
    }
    let center_of_mass = if total_mass > 0.0 {
        weighted / total_mass
    } else {
        Vec3::zero()
    };
    let symbols: Vec<&str> = atom_indices
        .iter()
        .map(|&i| table.get(atoms[i].atomic_number).symbol.as_str())
        .collect();
    Molecule {
        id,
        formula: hill_formula(&symbols),
        atom_indices,
        total_mass,
        center_of_mass,
        total_bond_energy,
    }
}

/// Formula string with carbon first, hydrogen second and everything else in
/// alphabetical order. Counts of one are omitted; a single atom gives its symbol.
pub fn hill_formula(symbols: &[&str]) -> String {
    if let [only] = symbols {
        return only.to_string();
    }
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for s in symbols {
        *counts.entry(*s).or_default() += 1;
    }
    let mut formula = String::new();
    let mut append = |sym: &str, count: usize| {
        formula.push_str(sym);
        if count > 1 {
            formula.push_str(&count.to_string());
        }
    };
    for lead in ["C", "H"] {
        if let Some(count) = counts.remove(lead) {
            append(lead, count);
        }
    }
    for (sym, count) in counts {
        append(sym, count);
    }
    formula
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::atom::{bond, BondParams, BondType};
    use approx::assert_abs_diff_eq;

    fn covalent() -> BondParams {
        BondParams {
            kind: BondType::Covalent,
            order: 1,
            dissociation_energy: 3.0,
            equilibrium_distance: 1.0,
            morse_alpha: 1.7,
        }
    }

    fn water_and_neon(table: &ElementTable) -> Vec<Atom> {
        let mut atoms = vec![
            Atom::new(1, table.get(1), Vec3::new(0.76, 0.59, 0.0)),
            Atom::new(8, table.get(8), Vec3::new(0.0, 0.0, 0.0)),
            Atom::new(1, table.get(1), Vec3::new(-0.76, 0.59, 0.0)),
            Atom::new(10, table.get(10), Vec3::new(20.0, 0.0, 0.0)),
        ];
        bond::link(&mut atoms, table, 1, 0, covalent());
        bond::link(&mut atoms, table, 1, 2, covalent());
        atoms
    }

    #[test]
    fn hill_ordering() {
        assert_eq!(hill_formula(&["O", "H", "H"]), "H2O");
        assert_eq!(hill_formula(&["H", "C", "H", "H", "H"]), "CH4");
        assert_eq!(hill_formula(&["O", "C", "O"]), "CO2");
        assert_eq!(hill_formula(&["Cl", "Na"]), "ClNa");
        assert_eq!(hill_formula(&["O", "H", "C", "H", "C", "H", "H", "H", "H"]), "C2H6O");
        assert_eq!(hill_formula(&["Ne"]), "Ne");
        assert_eq!(hill_formula(&[]), "");
    }

    #[test]
    fn water_cluster_is_one_molecule() {
        let table = ElementTable::builtin();
        let atoms = water_and_neon(&table);
        let mut tracker = MoleculeTracker::new();
        tracker.rebuild(&atoms, &table);

        assert_eq!(tracker.molecules().len(), 2);
        let water = &tracker.molecules()[0];
        assert_eq!(water.formula, "H2O");
        assert_eq!(water.atom_indices, vec![0, 1, 2]);
        assert_abs_diff_eq!(water.total_bond_energy, 6.0, epsilon = 1e-5);
        assert_abs_diff_eq!(water.total_mass, 1.008 * 2.0 + 15.999, epsilon = 1e-3);
        assert_abs_diff_eq!(water.center_of_mass.x, 0.0, epsilon = 1e-5);
        assert!(water.center_of_mass.y > 0.0 && water.center_of_mass.y < 0.59);

        let neon = &tracker.molecules()[1];
        assert_eq!(neon.formula, "Ne");
        assert!(neon.is_single_atom());
        assert_eq!(tracker.polyatomic().count(), 1);
        assert_eq!(tracker.molecule_of(3).map(|m| m.id), Some(1));
    }

    #[test]
    fn rebuild_is_idempotent() {
        let table = ElementTable::builtin();
        let atoms = water_and_neon(&table);
        let mut tracker = MoleculeTracker::new();
        tracker.rebuild(&atoms, &table);
        let first = tracker.molecules().to_vec();
        tracker.rebuild(&atoms, &table);
        assert_eq!(first, tracker.molecules());
    }

    #[test]
    fn empty_population_has_no_molecules() {
        let table = ElementTable::builtin();
        let mut tracker = MoleculeTracker::new();
        tracker.rebuild(&[], &table);
        assert!(tracker.molecules().is_empty());
    }
}
