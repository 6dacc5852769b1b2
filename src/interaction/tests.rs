// Force-field and bonding protocol tests for the InteractionEngine

use super::forces::pair_force;
use super::*;
use crate::atom::{bond, Atom, BondParams, BondType};
use crate::config::{SimConfig, ThermalBreakModel};
use crate::elements::{ElementCategory, ElementData, ElementTable};
use approx::assert_abs_diff_eq;
use ultraviolet::Vec3;

fn spawn(table: &ElementTable, z: u32, pos: Vec3) -> Atom {
    Atom::new(z, table.get(z), pos)
}

fn assert_vec_eq(a: Vec3, b: Vec3) {
    assert_abs_diff_eq!(a.x, b.x, epsilon = 1e-5);
    assert_abs_diff_eq!(a.y, b.y, epsilon = 1e-5);
    assert_abs_diff_eq!(a.z, b.z, epsilon = 1e-5);
}

fn water(table: &ElementTable) -> Vec<Atom> {
    vec![
        spawn(table, 8, Vec3::new(0.0, 0.0, 0.0)),
        spawn(table, 1, Vec3::new(0.76, 0.59, 0.0)),
        spawn(table, 1, Vec3::new(-0.76, 0.59, 0.0)),
    ]
}

fn assert_bonds_symmetric(atoms: &[Atom]) {
    for (i, a) in atoms.iter().enumerate() {
        for b in a.bonds() {
            let back = atoms[b.partner].bond_to(i);
            assert!(back.is_some(), "bond {}->{} has no reciprocal entry", i, b.partner);
            assert_eq!(back.map(|r| r.kind), Some(b.kind));
            assert_eq!(back.map(|r| r.order), Some(b.order));
        }
    }
}

#[cfg(test)]
mod force_field {
    use super::*;

    #[test]
    fn switching_is_one_inside_and_zero_at_cutoff() {
        assert_eq!(switching_factor(3.0, 8.0, 10.0), 1.0);
        assert_eq!(switching_factor(8.0, 8.0, 10.0), 1.0);
        assert_eq!(switching_factor(10.0, 8.0, 10.0), 0.0);
        assert_eq!(switching_factor(12.0, 8.0, 10.0), 0.0);
        assert_abs_diff_eq!(switching_factor(9.0, 8.0, 10.0), 0.5, epsilon = 1e-6);
        // continuous at both ends
        assert_abs_diff_eq!(switching_factor(8.0001, 8.0, 10.0), 1.0, epsilon = 1e-3);
        assert_abs_diff_eq!(switching_factor(9.9999, 8.0, 10.0), 0.0, epsilon = 1e-3);
    }

    #[test]
    fn ideal_angles_by_steric_number() {
        assert_abs_diff_eq!(ideal_bond_angle(2).to_degrees(), 180.0, epsilon = 1e-3);
        assert_abs_diff_eq!(ideal_bond_angle(3).to_degrees(), 120.0, epsilon = 1e-3);
        assert_abs_diff_eq!(ideal_bond_angle(4).to_degrees(), 109.47, epsilon = 1e-3);
        assert_abs_diff_eq!(ideal_bond_angle(5).to_degrees(), 90.0, epsilon = 1e-3);
        assert_abs_diff_eq!(ideal_bond_angle(6).to_degrees(), 90.0, epsilon = 1e-3);
    }

    #[test]
    fn lennard_jones_pair_obeys_third_law() {
        let table = ElementTable::builtin();
        let config = SimConfig::default();
        let atoms = vec![
            spawn(&table, 18, Vec3::new(0.0, 0.0, 0.0)),
            spawn(&table, 18, Vec3::new(1.5, 0.5, -0.5)),
        ];
        let (fij, _) = pair_force(&atoms, 0, 1, &table, &config);
        let (fji, _) = pair_force(&atoms, 1, 0, &table, &config);
        assert!(fij.mag() > 0.0);
        assert_vec_eq(fij, -fji);
        // closer than sigma: repulsive, pushes atom 0 away from atom 1
        assert!(fij.dot(atoms[1].pos - atoms[0].pos) < 0.0);
    }

    #[test]
    fn coulomb_pair_obeys_third_law_and_attracts_opposite_charges() {
        let table = ElementTable::builtin();
        let config = SimConfig::default();
        let mut atoms = vec![
            spawn(&table, 11, Vec3::new(0.0, 0.0, 0.0)),
            spawn(&table, 17, Vec3::new(6.0, 0.0, 0.0)),
        ];
        assert!(bond::transfer_electron(&mut atoms, &table, 0, 1));
        let (fij, _) = pair_force(&atoms, 0, 1, &table, &config);
        let (fji, _) = pair_force(&atoms, 1, 0, &table, &config);
        assert_vec_eq(fij, -fji);
        assert!(fij.x > 0.0, "cation should be pulled toward the anion");
    }

    #[test]
    fn morse_pair_obeys_third_law_and_restores() {
        let table = ElementTable::builtin();
        let config = SimConfig::default();
        let mut atoms = vec![
            spawn(&table, 6, Vec3::new(0.0, 0.0, 0.0)),
            spawn(&table, 6, Vec3::new(0.0, 2.0, 0.0)),
        ];
        let params = BondParams {
            kind: BondType::Covalent,
            order: 1,
            dissociation_energy: 3.0,
            equilibrium_distance: 1.5,
            morse_alpha: 1.7,
        };
        assert!(bond::link(&mut atoms, &table, 0, 1, params));
        let (fij, _) = pair_force(&atoms, 0, 1, &table, &config);
        let (fji, _) = pair_force(&atoms, 1, 0, &table, &config);
        assert_vec_eq(fij, -fji);
        assert!(fij.y > 0.0, "stretched bond should pull the atoms together");

        atoms[1].pos = Vec3::new(0.0, 1.2, 0.0);
        let (fij, _) = pair_force(&atoms, 0, 1, &table, &config);
        assert!(fij.y < 0.0, "compressed bond should push the atoms apart");
    }

    #[test]
    fn pair_forces_vanish_beyond_cutoff() {
        let table = ElementTable::builtin();
        let config = SimConfig::default();
        let mut atoms = vec![
            spawn(&table, 11, Vec3::new(0.0, 0.0, 0.0)),
            spawn(&table, 17, Vec3::new(config.cutoff + 0.5, 0.0, 0.0)),
        ];
        bond::transfer_electron(&mut atoms, &table, 0, 1);
        let (f, e) = pair_force(&atoms, 0, 1, &table, &config);
        assert_eq!(f, Vec3::zero());
        assert_eq!(e, 0.0);
    }

    #[test]
    fn net_force_on_isolated_molecule_is_zero() {
        let table = ElementTable::builtin();
        let config = SimConfig::default();
        let mut engine = InteractionEngine::new(&config);
        let mut atoms = water(&table);
        engine.update_bonds(&mut atoms, &table, &config, 0.0);
        assert_eq!(atoms[0].bonds().len(), 2);
        // bend away from the ideal angle so the VSEPR spring is loaded
        atoms[2].pos = Vec3::new(-0.3, 0.9, 0.2);
        engine.compute_forces(&mut atoms, &table, &config);
        let net = atoms.iter().fold(Vec3::zero(), |acc, a| acc + a.force);
        assert!(net.mag() < 1e-4, "net force {:?}", net);
        assert!(engine.total_potential_energy > 0.0);
        assert!(engine.total_bond_energy > 0.0);
    }

    #[test]
    fn angle_spring_opens_pinched_water() {
        let table = ElementTable::builtin();
        let config = SimConfig {
            lj_epsilon: 0.0,
            ..SimConfig::default()
        };
        let mut engine = InteractionEngine::new(&config);
        let bent = |theta: f32| {
            let mut atoms = vec![
                spawn(&table, 8, Vec3::zero()),
                spawn(&table, 1, Vec3::new(0.97, 0.0, 0.0)),
                spawn(&table, 1, Vec3::new(theta.cos(), theta.sin(), 0.0) * 0.97),
            ];
            // bonds at their equilibrium length leave only the angle term
            let params = BondParams {
                kind: BondType::Covalent,
                order: 1,
                dissociation_energy: 4.0,
                equilibrium_distance: 0.97,
                morse_alpha: 2.0,
            };
            assert!(bond::link(&mut atoms, &table, 0, 1, params));
            assert!(bond::link(&mut atoms, &table, 0, 2, params));
            atoms
        };

        let theta = 60f32.to_radians();
        let mut atoms = bent(theta);
        assert_eq!(atoms[0].steric_number(table.get(8)), 4);
        engine.compute_forces(&mut atoms, &table, &config);
        // each hydrogen is pushed along its tangent away from the other
        assert!(atoms[1].force.y < 0.0, "H1 force {:?}", atoms[1].force);
        let opening = Vec3::new(-theta.sin(), theta.cos(), 0.0);
        assert!(atoms[2].force.dot(opening) > 0.0, "H2 force {:?}", atoms[2].force);
        assert!(engine.total_potential_energy > 0.0);

        let mut atoms = bent(ideal_bond_angle(4));
        engine.compute_forces(&mut atoms, &table, &config);
        for a in &atoms {
            assert!(a.force.mag() < 1e-3, "force at ideal angle {:?}", a.force);
        }
    }

    #[test]
    fn kinetic_energy_is_refreshed_by_force_pass() {
        let table = ElementTable::builtin();
        let config = SimConfig::default();
        let mut engine = InteractionEngine::new(&config);
        let mut atoms = vec![spawn(&table, 8, Vec3::zero())];
        atoms[0].vel = Vec3::new(1.0, 0.0, 0.0);
        engine.compute_forces(&mut atoms, &table, &config);
        let expected = 0.5 * atoms[0].mass;
        assert_abs_diff_eq!(atoms[0].kinetic_energy, expected, epsilon = 1e-5);
        assert_abs_diff_eq!(engine.total_kinetic_energy, expected, epsilon = 1e-5);
    }
}

#[cfg(test)]
mod bond_protocol {
    use super::*;

    fn synthetic_table() -> ElementTable {
        let donor = ElementData {
            atomic_number: 11,
            symbol: "Dn".into(),
            name: "Donorium".into(),
            atomic_mass: 23.0,
            electronegativity: 0.9,
            ionization_energy: 5.0,
            electron_affinity: 0.5,
            atomic_radius: 190.0,
            covalent_radius: 160.0,
            vdw_radius: 220.0,
            valence_electrons: 1,
            period: 3,
            group: 1,
            category: ElementCategory::AlkaliMetal,
            color: [200, 100, 255],
        };
        let acceptor = ElementData {
            atomic_number: 17,
            symbol: "Ac".into(),
            name: "Acceptorium".into(),
            atomic_mass: 35.0,
            electronegativity: 3.1,
            ionization_energy: 13.0,
            electron_affinity: 3.0,
            atomic_radius: 80.0,
            covalent_radius: 100.0,
            vdw_radius: 175.0,
            valence_electrons: 7,
            period: 3,
            group: 17,
            category: ElementCategory::Halogen,
            color: [30, 240, 30],
        };
        ElementTable::from_records(vec![donor, acceptor])
    }

    #[test]
    fn ionic_bond_moves_exactly_one_electron() {
        let table = synthetic_table();
        let config = SimConfig::default();
        let mut engine = InteractionEngine::new(&config);
        let mut atoms = vec![
            spawn(&table, 11, Vec3::new(0.0, 0.0, 0.0)),
            spawn(&table, 17, Vec3::new(2.5, 0.0, 0.0)),
        ];
        let changes = engine.update_bonds(&mut atoms, &table, &config, 1.0);
        assert_eq!(changes, BondChanges { formed: 1, broken: 0 });
        assert_eq!(atoms[0].charge(), 1);
        assert_eq!(atoms[1].charge(), -1);
        let b = atoms[0].bond_to(1).copied();
        assert_eq!(b.map(|b| b.kind), Some(BondType::Ionic));
        // IE − EA − k/r
        let expected = -(5.0 - 3.0 - config.coulomb_constant / 2.5);
        assert_abs_diff_eq!(b.map_or(0.0, |b| b.dissociation_energy), expected, epsilon = 1e-4);
        assert_abs_diff_eq!(b.map_or(0.0, |b| b.equilibrium_distance), 2.6, epsilon = 1e-5);
        assert_bonds_symmetric(&atoms);
        assert_eq!(engine.reaction_log.len(), 1);
        assert_eq!(engine.reaction_log[0].time, 1.0);
        assert_eq!(engine.bonds_formed, 1);
    }

    #[test]
    fn ionic_bond_is_rejected_when_endothermic() {
        let table = synthetic_table();
        let config = SimConfig::default();
        let mut engine = InteractionEngine::new(&config);
        // IE − EA = 4.6 eV outweighs k/r ≈ 2.9 eV at 4.9 Å
        let mut weak = table.get(17).clone();
        weak.electron_affinity = 0.4;
        let table = ElementTable::from_records(vec![table.get(11).clone(), weak]);
        let mut atoms = vec![
            spawn(&table, 11, Vec3::new(0.0, 0.0, 0.0)),
            spawn(&table, 17, Vec3::new(4.9, 0.0, 0.0)),
        ];
        let changes = engine.update_bonds(&mut atoms, &table, &config, 0.0);
        assert!(!changes.any());
        assert_eq!(atoms[0].charge(), 0);
        assert_eq!(atoms[1].charge(), 0);
    }

    #[test]
    fn donor_cannot_ionize_twice() {
        let table = synthetic_table();
        let config = SimConfig::default();
        let mut engine = InteractionEngine::new(&config);
        let mut atoms = vec![
            spawn(&table, 11, Vec3::new(0.0, 0.0, 0.0)),
            spawn(&table, 17, Vec3::new(2.5, 0.0, 0.0)),
            spawn(&table, 17, Vec3::new(-2.5, 0.0, 0.0)),
        ];
        engine.update_bonds(&mut atoms, &table, &config, 0.0);
        assert_eq!(atoms[0].charge(), 1);
        assert_eq!(atoms[0].bonds().len(), 1);
        let total: i32 = atoms.iter().map(|a| a.charge()).sum();
        assert_eq!(total, 0);
    }

    #[test]
    fn water_forms_two_covalent_bonds() {
        let table = ElementTable::builtin();
        let config = SimConfig::default();
        let mut engine = InteractionEngine::new(&config);
        let mut atoms = water(&table);
        let changes = engine.update_bonds(&mut atoms, &table, &config, 0.0);
        assert_eq!(changes.formed, 2);
        assert!(atoms[0].is_bonded_to(1));
        assert!(atoms[0].is_bonded_to(2));
        assert!(!atoms[1].is_bonded_to(2));
        assert!(atoms.iter().all(|a| a.effective_valence() == 0));
        assert!(atoms.iter().all(|a| a.charge() == 0));
        assert_bonds_symmetric(&atoms);
        for b in atoms[0].bonds() {
            assert_eq!(b.kind, BondType::Covalent);
            assert_eq!(b.order, 1);
        }
    }

    #[test]
    fn second_pass_on_settled_molecule_changes_nothing() {
        let table = ElementTable::builtin();
        let config = SimConfig::default();
        let mut engine = InteractionEngine::new(&config);
        let mut atoms = water(&table);
        engine.update_bonds(&mut atoms, &table, &config, 0.0);
        let changes = engine.update_bonds(&mut atoms, &table, &config, 0.5);
        assert!(!changes.any());
        assert_eq!(bond::bond_count(&atoms), 2);
    }

    #[test]
    fn nitrogen_pair_forms_triple_bond() {
        let table = ElementTable::builtin();
        let config = SimConfig::default();
        let mut engine = InteractionEngine::new(&config);
        let mut atoms = vec![
            spawn(&table, 7, Vec3::new(0.0, 0.0, 0.0)),
            spawn(&table, 7, Vec3::new(1.42, 0.0, 0.0)),
        ];
        engine.update_bonds(&mut atoms, &table, &config, 0.0);
        assert_eq!(atoms[0].bond_to(1).map(|b| b.order), Some(3));
    }

    #[test]
    fn noble_gases_never_bond() {
        let table = ElementTable::builtin();
        let config = SimConfig::default();
        let mut engine = InteractionEngine::new(&config);
        let mut atoms = vec![
            spawn(&table, 10, Vec3::new(0.0, 0.0, 0.0)),
            spawn(&table, 9, Vec3::new(1.2, 0.0, 0.0)),
            spawn(&table, 18, Vec3::new(0.0, 1.5, 0.0)),
        ];
        engine.update_bonds(&mut atoms, &table, &config, 0.0);
        assert!(atoms[0].bonds().is_empty());
        assert!(atoms[2].bonds().is_empty());
    }

    #[test]
    fn unknown_elements_are_skipped() {
        let table = ElementTable::builtin();
        let config = SimConfig::default();
        let mut engine = InteractionEngine::new(&config);
        let mut atoms = vec![
            spawn(&table, 200, Vec3::new(0.0, 0.0, 0.0)),
            spawn(&table, 1, Vec3::new(0.5, 0.0, 0.0)),
        ];
        let changes = engine.update_bonds(&mut atoms, &table, &config, 0.0);
        assert!(!changes.any());
    }

    #[test]
    fn morse_break_happens_exactly_at_ninety_percent() {
        let table = ElementTable::builtin();
        let config = SimConfig::default();
        let mut engine = InteractionEngine::new(&config);
        let params = BondParams {
            kind: BondType::Covalent,
            order: 1,
            dissociation_energy: 3.0,
            equilibrium_distance: 1.5,
            morse_alpha: 3.0,
        };
        let mut crossed = false;
        let mut r = 1.5;
        while r < 3.5 {
            let mut atoms = vec![
                spawn(&table, 6, Vec3::new(0.0, 0.0, 0.0)),
                spawn(&table, 6, Vec3::new(r, 0.0, 0.0)),
            ];
            bond::link(&mut atoms, &table, 0, 1, params);
            let d = (atoms[1].pos - atoms[0].pos).mag();
            let energy = atoms[0].bonds()[0].morse_energy(d);
            let expected = energy > 0.9 * 3.0;
            let broken = engine.break_bonds(&mut atoms, &table, &config, 0.0);
            assert_eq!(!broken.is_empty(), expected, "r = {}", r);
            if crossed {
                assert!(expected, "break criterion must stay met once crossed (r = {})", r);
            }
            crossed |= expected;
            r += 0.01;
        }
        assert!(crossed);
    }

    #[test]
    fn compressed_bond_breaks_past_ninety_percent() {
        let table = ElementTable::builtin();
        let config = SimConfig::default();
        let mut engine = InteractionEngine::new(&config);
        let params = BondParams {
            kind: BondType::Covalent,
            order: 1,
            dissociation_energy: 3.0,
            equilibrium_distance: 1.5,
            morse_alpha: 3.0,
        };
        // on the compressed side 0.9 De is crossed at r ≈ 1.278
        for (r, should_break) in [(1.30, false), (1.25, true), (1.2, true)] {
            let mut atoms = vec![
                spawn(&table, 6, Vec3::new(0.0, 0.0, 0.0)),
                spawn(&table, 6, Vec3::new(r, 0.0, 0.0)),
            ];
            bond::link(&mut atoms, &table, 0, 1, params);
            let energy = atoms[0].bonds()[0].morse_energy(r);
            assert_eq!(energy > 0.9 * 3.0, should_break, "r = {}, E = {}", r, energy);
            let broken = engine.break_bonds(&mut atoms, &table, &config, 0.0);
            assert_eq!(!broken.is_empty(), should_break, "r = {}, E = {}", r, energy);
            assert_eq!(atoms[0].bonds().is_empty(), should_break);
            assert_bonds_symmetric(&atoms);
        }
    }

    #[test]
    fn weak_bond_breaks_thermally_when_hot() {
        let mut config = SimConfig::default();
        let mut engine = InteractionEngine::new(&config);
        let b = bond::Bond {
            partner: 1,
            kind: BondType::Covalent,
            order: 1,
            dissociation_energy: 0.5,
            equilibrium_distance: 1.5,
            morse_alpha: 1.0,
        };
        config.temperature = 300.0;
        assert!(!engine.should_break(&b, 1.5, config.temperature, ThermalBreakModel::DeterministicThreshold));
        config.temperature = 10_000.0;
        assert!(engine.should_break(&b, 1.5, config.temperature, ThermalBreakModel::DeterministicThreshold));
    }

    #[test]
    fn stochastic_model_breaks_certain_bonds() {
        let config = SimConfig::default();
        let mut engine = InteractionEngine::new(&config);
        let b = bond::Bond {
            partner: 1,
            kind: BondType::Covalent,
            order: 1,
            dissociation_energy: 0.0,
            equilibrium_distance: 1.5,
            morse_alpha: 1.0,
        };
        // Boltzmann factor of exactly 1
        assert!(engine.should_break(&b, 1.5, 300.0, ThermalBreakModel::Stochastic));
        let strong = bond::Bond {
            dissociation_energy: 50.0,
            ..b
        };
        for _ in 0..100 {
            assert!(!engine.should_break(&strong, 1.5, 300.0, ThermalBreakModel::Stochastic));
        }
    }

    #[test]
    fn broken_ionic_bond_returns_the_electron() {
        let table = synthetic_table();
        let config = SimConfig::default();
        let mut engine = InteractionEngine::new(&config);
        let mut atoms = vec![
            spawn(&table, 11, Vec3::new(0.0, 0.0, 0.0)),
            spawn(&table, 17, Vec3::new(2.5, 0.0, 0.0)),
        ];
        engine.update_bonds(&mut atoms, &table, &config, 0.0);
        assert_eq!(atoms[0].charge(), 1);

        // well past 2.5 × re and out of bonding range
        atoms[1].pos = Vec3::new(9.0, 0.0, 0.0);
        let changes = engine.update_bonds(&mut atoms, &table, &config, 2.0);
        assert_eq!(changes.broken, 1);
        assert_eq!(atoms[0].charge(), 0);
        assert_eq!(atoms[1].charge(), 0);
        assert!(atoms.iter().all(|a| a.bonds().is_empty()));
        assert_eq!(engine.bonds_broken, 1);
        assert_eq!(engine.reaction_log.len(), 2);
    }

    #[test]
    fn pair_broken_in_a_pass_is_not_reformed_in_it() {
        let table = ElementTable::builtin();
        let config = SimConfig::default();
        let mut engine = InteractionEngine::new(&config);
        let mut atoms = vec![
            spawn(&table, 1, Vec3::new(0.0, 0.0, 0.0)),
            spawn(&table, 1, Vec3::new(0.9, 0.0, 0.0)),
        ];
        // thermally fragile, but the geometry alone would bond the pair again
        let params = BondParams {
            kind: BondType::Covalent,
            order: 1,
            dissociation_energy: 0.01,
            equilibrium_distance: 0.62,
            morse_alpha: 0.8,
        };
        bond::link(&mut atoms, &table, 0, 1, params);
        let changes = engine.update_bonds(&mut atoms, &table, &config, 0.0);
        assert_eq!(changes, BondChanges { formed: 0, broken: 1 });
        assert!(atoms[0].bonds().is_empty());
    }

    #[test]
    fn stale_partners_are_purged_before_breaking() {
        let table = ElementTable::builtin();
        let config = SimConfig::default();
        let mut engine = InteractionEngine::new(&config);
        let mut atoms = vec![
            spawn(&table, 6, Vec3::new(0.0, 0.0, 0.0)),
            spawn(&table, 1, Vec3::new(20.0, 0.0, 0.0)),
            spawn(&table, 1, Vec3::new(-20.0, 0.0, 0.0)),
        ];
        let params = BondParams {
            kind: BondType::Covalent,
            order: 1,
            dissociation_energy: 4.0,
            equilibrium_distance: 1.1,
            morse_alpha: 2.0,
        };
        bond::link(&mut atoms, &table, 0, 2, params);
        atoms.truncate(2);
        engine.update_bonds(&mut atoms, &table, &config, 0.0);
        assert!(atoms[0].bonds().is_empty());
        assert_eq!(atoms[0].effective_valence(), 4);
        assert_bonds_symmetric(&atoms);
    }

    #[test]
    fn covalent_energy_floors_negative_affinity() {
        let e = covalent_bond_energy(2, -0.5, 3.0, 10.0, 10.0);
        assert_abs_diff_eq!(e, 2.0 * 0.15 * 10.0, epsilon = 1e-5);
        assert_abs_diff_eq!(morse_alpha_for(0.01), 0.8, epsilon = 1e-6);
        assert_abs_diff_eq!(morse_alpha_for(100.0), 3.0, epsilon = 1e-6);
        assert_abs_diff_eq!(morse_alpha_for(4.0), 2.0, epsilon = 1e-6);
    }

    #[test]
    fn clear_resets_log_and_counters() {
        let table = ElementTable::builtin();
        let config = SimConfig::default();
        let mut engine = InteractionEngine::new(&config);
        let mut atoms = water(&table);
        engine.update_bonds(&mut atoms, &table, &config, 0.0);
        assert!(!engine.reaction_log.is_empty());
        engine.reset();
        assert!(engine.reaction_log.is_empty());
        assert_eq!(engine.bonds_formed, 0);
    }
}
