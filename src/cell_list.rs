use std::collections::HashMap;

use crate::atom::Atom;
use smallvec::SmallVec;
use ultraviolet::Vec3;

type CellKey = (i32, i32, i32);

/// Sparse uniform 3D grid bucketing atom indices by position. Only occupied
/// cells are stored, so memory follows the atom count and not the world size.
pub struct CellList {
    pub cell_size: f32,
    cells: HashMap<CellKey, SmallVec<[usize; 8]>>, // indices of atoms per cell
}

impl CellList {
    pub fn new(cell_size: f32) -> Self {
        Self {
            cell_size: cell_size.max(1e-3),
            cells: HashMap::new(),
        }
    }

    pub fn rebuild(&mut self, atoms: &[Atom]) {
        self.cells.clear();
        for (i, a) in atoms.iter().enumerate() {
            let key = self.coord(a.pos);
            self.cells.entry(key).or_default().push(i);
        }
    }

    pub fn occupied_cells(&self) -> usize {
        self.cells.len()
    }

    /// Cell coordinates of `pos`. Non-finite coordinates land in cell 0.
    fn coord(&self, pos: Vec3) -> CellKey {
        let axis = |v: f32| {
            let c = (v / self.cell_size).floor();
            if c.is_finite() {
                c as i32
            } else {
                0
            }
        };
        (axis(pos.x), axis(pos.y), axis(pos.z))
    }

    fn for_each_nearby<F: FnMut(usize)>(&self, pos: Vec3, cutoff: f32, mut f: F) {
        if self.cells.is_empty() {
            return;
        }
        let (cx, cy, cz) = self.coord(pos);
        let range = (cutoff / self.cell_size).ceil().max(0.0) as i32;
        for dz in -range..=range {
            for dy in -range..=range {
                for dx in -range..=range {
                    let key = (
                        cx.saturating_add(dx),
                        cy.saturating_add(dy),
                        cz.saturating_add(dz),
                    );
                    if let Some(cell) = self.cells.get(&key) {
                        for &idx in cell {
                            f(idx);
                        }
                    }
                }
            }
        }
    }

    /// Indices of atoms other than `i` closer than `cutoff`.
    pub fn find_neighbors_within(&self, atoms: &[Atom], i: usize, cutoff: f32) -> Vec<usize> {
        let mut neighbors = Vec::new();
        let cutoff_sq = cutoff * cutoff;
        let pos = atoms[i].pos;
        self.for_each_nearby(pos, cutoff, |idx| {
            if idx != i && idx < atoms.len() && (atoms[idx].pos - pos).mag_sq() < cutoff_sq {
                neighbors.push(idx);
            }
        });
        // saturated keys at the i32 edge can visit a cell twice
        neighbors.sort_unstable();
        neighbors.dedup();
        neighbors
    }

    /// Every unordered pair (i < j) closer than `cutoff`, sorted.
    pub fn pairs_within(&self, atoms: &[Atom], cutoff: f32) -> Vec<(usize, usize)> {
        let mut pairs = Vec::new();
        for i in 0..atoms.len() {
            for j in self.find_neighbors_within(atoms, i, cutoff) {
                if j > i {
                    pairs.push((i, j));
                }
            }
        }
        pairs.sort_unstable();
        pairs
    }
}
