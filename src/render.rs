// render.rs
// Read-only per-frame views of the simulation for whatever draws it

use ultraviolet::Vec3;

use crate::atom::bond::{self, BondType};
use crate::atom::electron::nl_pairs;
use crate::config;
use crate::quantum::{self, QuantumSampler};
use crate::simulation::Simulation;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AtomInstance {
    pub position: Vec3,
    pub radius: f32,
    pub color: [f32; 4],
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BondInstance {
    pub start: Vec3,
    pub end: Vec3,
    pub thickness: f32,
    pub color: [f32; 4],
}

/// One orbital sample: world position, heatmap color, normalized density in [0, 1].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CloudPoint {
    pub position: Vec3,
    pub color: [f32; 4],
    pub weight: f32,
}

pub fn bond_color(kind: BondType) -> [f32; 4] {
    match kind {
        BondType::Ionic => [1.0, 0.8, 0.2, 1.0],
        BondType::Covalent => [0.5, 0.8, 1.0, 1.0],
        BondType::Metallic => [0.75, 0.75, 0.75, 1.0],
        BondType::Hydrogen => [0.9, 0.9, 0.9, 0.6],
        BondType::VanDerWaals => [0.5, 0.5, 0.5, 0.4],
    }
}

/// One instance per atom, in population order. Empty when atoms are hidden.
pub fn atom_instances(sim: &Simulation) -> Vec<AtomInstance> {
    if !sim.config.visibility.atoms {
        return Vec::new();
    }
    sim.atoms
        .iter()
        .map(|a| {
            let [r, g, b] = a.element(&sim.elements).color_f32();
            AtomInstance {
                position: a.pos,
                radius: a.visual_radius,
                color: [r, g, b, 1.0],
            }
        })
        .collect()
}

/// One instance per undirected bond (i < j). Empty when bonds are hidden.
pub fn bond_instances(sim: &Simulation) -> Vec<BondInstance> {
    if !sim.config.visibility.bonds {
        return Vec::new();
    }
    bond::unique_bonds(&sim.atoms)
        .into_iter()
        .map(|(i, j, b)| BondInstance {
            start: sim.atoms[i].pos,
            end: sim.atoms[j].pos,
            thickness: config::BOND_THICKNESS_PER_ORDER * b.order as f32,
            color: bond_color(b.kind),
        })
        .collect()
}

/// Sample `per_atom` points from the outermost electron's orbital of every atom.
///
/// Z_eff comes from Slater's rules on the atom's current electron list, so ions
/// get tighter or looser clouds than their neutral atoms. Densities are
/// normalized per atom against the densest sample. Empty when clouds are hidden.
pub fn cloud_points(sim: &Simulation, sampler: &mut QuantumSampler, per_atom: usize) -> Vec<CloudPoint> {
    if !sim.config.visibility.orbital_clouds || per_atom == 0 {
        return Vec::new();
    }
    crate::profile_scope!("orbital_clouds");
    let mut points = Vec::with_capacity(sim.atoms.len() * per_atom);
    let mut densities = Vec::with_capacity(per_atom);

    for atom in &sim.atoms {
        let Some(outer) = atom.electrons.last().map(|e| e.qn) else {
            continue;
        };
        let zeff = quantum::effective_nuclear_charge(
            atom.atomic_number,
            outer.n,
            outer.l,
            &nl_pairs(&atom.electrons),
        );

        let first = points.len();
        densities.clear();
        for _ in 0..per_atom {
            let (offset, r, theta) = sampler.sample_point(outer.n, outer.l, outer.m, zeff);
            densities.push(quantum::probability_density(outer.n, outer.l, outer.m, zeff, r, theta));
            points.push(CloudPoint {
                position: atom.pos + offset,
                color: [0.0; 4],
                weight: 0.0,
            });
        }

        let max = densities.iter().cloned().fold(0.0f64, f64::max);
        for (p, d) in points[first..].iter_mut().zip(&densities) {
            let w = if max > 0.0 { (d / max) as f32 } else { 0.0 };
            p.weight = w;
            p.color = quantum::heatmap_color(w);
        }
    }
    points
}
