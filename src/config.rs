// Centralized configuration for simulation parameters

use serde::{Deserialize, Serialize};

use crate::units;

// ====================
// Pair Force Parameters
// ====================
/// Lennard-Jones well depth in electronvolts.
pub const LJ_EPSILON_EV: f32 = 0.01;
/// Max Lennard-Jones force magnitude (eV/Å).
pub const LJ_FORCE_MAX: f32 = 50.0;
/// Distances are floored here before any pair force is evaluated (Å).
pub const MIN_PAIR_DISTANCE: f32 = 0.5;
/// Pairs closer than this are treated as coincident and skipped (Å).
pub const COINCIDENT_DISTANCE: f32 = 0.01;
/// Hard interaction cutoff (Å). Forces are exactly zero beyond it.
pub const INTERACTION_CUTOFF: f32 = 10.0;
/// Forces are unscaled below this distance and smoothly switched off up to the cutoff (Å).
pub const SWITCH_DISTANCE: f32 = 8.0;

// ====================
// VSEPR Parameters
// ====================
/// Harmonic angle spring constant (eV/rad²).
pub const VSEPR_SPRING_K: f32 = 0.5;

// ====================
// Bonding Parameters
// ====================
/// Maximum separation at which a new bond is attempted (Å).
pub const BONDING_RANGE: f32 = 5.0;
/// Electronegativity difference above which an ionic bond is attempted.
pub const IONIC_THRESHOLD: f32 = 1.7;
/// Electronegativity below this counts as "no data".
pub const MIN_ELECTRONEGATIVITY: f32 = 0.01;
/// Donors must have an ionization energy below this (eV).
pub const DONOR_MAX_IONIZATION_EV: f32 = 8.0;
/// Donors may hold at most this many valence electrons.
pub const DONOR_MAX_VALENCE: u32 = 2;
/// Acceptors must have an electron affinity above this (eV).
pub const ACCEPTOR_MIN_AFFINITY_EV: f32 = 0.3;
/// Acceptors must hold fewer valence electrons than this.
pub const ACCEPTOR_MAX_VALENCE: u32 = 8;
/// Ionic bonds weaker than this many kB·T are too fragile to form.
pub const IONIC_STABILITY_KT: f32 = 2.0;
/// Covalent bonds weaker than this many kB·T are rejected.
pub const COVALENT_STABILITY_KT: f32 = 10.0;
/// Weight of the ionization-energy geometric mean in covalent bond energy.
pub const COVALENT_IE_SCALE: f32 = 0.15;
/// Width of the Gaussian orbital-overlap factor (Å).
pub const OVERLAP_WIDTH: f32 = 0.5;
/// Highest bond order a covalent bond may take.
pub const MAX_BOND_ORDER: u32 = 3;
/// Morse width α = sqrt(De / 1 eV) Å⁻¹, clamped to this range.
pub const MORSE_ALPHA_MIN: f32 = 0.8;
pub const MORSE_ALPHA_MAX: f32 = 3.0;

// ====================
// Bond Breaking Parameters
// ====================
/// A bond breaks once its Morse energy exceeds this fraction of De.
pub const BREAK_ENERGY_FRACTION: f32 = 0.9;
/// A bond breaks once stretched past this multiple of its equilibrium distance.
pub const BREAK_STRETCH_FACTOR: f32 = 2.5;
/// Boltzmann factor exp(-De / (3 kB T)) above which a bond breaks thermally.
pub const THERMAL_BREAK_THRESHOLD: f32 = 0.5;
/// Multiple of kB·T used in the thermal break Boltzmann factor.
pub const THERMAL_BREAK_KT_MULTIPLE: f32 = 3.0;

// ====================
// Simulation Parameters
// ====================
/// Default integration timestep in internal time units (~0.5 fs).
pub const DEFAULT_DT: f32 = 0.05;
/// Integration substeps per frame.
pub const DEFAULT_SUBSTEPS: usize = 50;
pub const MIN_SUBSTEPS: usize = 1;
pub const MAX_SUBSTEPS: usize = 50;
/// Bonding protocol runs every Nth integration step.
pub const BOND_UPDATE_INTERVAL: u64 = 10;
/// Half-extent of the cubic world box (Å).
pub const WORLD_HALF_EXTENT: f32 = 50.0;
/// Fraction of the normal velocity kept after a wall bounce.
pub const WALL_RESTITUTION: f32 = 0.5;
/// Seed for spawn-time velocity sampling.
pub const DEFAULT_SEED: u64 = 0x5EED_C0DE;

// ====================
// Temperature
// ====================
/// Default simulation temperature (Kelvin)
pub const DEFAULT_TEMPERATURE: f32 = 300.0;
pub const MIN_TEMPERATURE: f32 = 10.0;
pub const MAX_TEMPERATURE: f32 = 10_000.0;
/// Increment applied by the temperature up/down commands (Kelvin)
pub const TEMPERATURE_STEP: f32 = 100.0;
/// Berendsen relaxation time in internal time units.
pub const THERMOSTAT_TAU: f32 = 5.0;
/// Per-step clamp on the Berendsen velocity scale factor.
pub const THERMOSTAT_LAMBDA_MIN: f32 = 0.9;
pub const THERMOSTAT_LAMBDA_MAX: f32 = 1.1;
/// Thermostat is skipped for targets below this (Kelvin).
pub const THERMOSTAT_MIN_TARGET: f32 = 1.0;
/// Steps between thermostat log summaries.
pub const THERMOSTAT_LOG_INTERVAL: u64 = 1000;

// ====================
// Orbital Cloud Sampling
// ====================
/// Grid points for the radial CDF.
pub const RADIAL_CDF_SAMPLES: usize = 4096;
/// Grid points for the polar CDF.
pub const POLAR_CDF_SAMPLES: usize = 2048;
/// Radial CDF extends to this many n²·a0.
pub const RADIAL_EXTENT_FACTOR: f64 = 10.0;
/// Default cloud points drawn per atom for visualization.
pub const CLOUD_POINTS_PER_ATOM: usize = 200;

// ====================
// DISPLAY Parameters
// ====================
/// Bond cylinder thickness per unit of bond order.
pub const BOND_THICKNESS_PER_ORDER: f32 = 0.1;
/// Smallest visual atom radius (Å).
pub const MIN_VISUAL_RADIUS: f32 = 0.5;
pub const SHOW_ATOMS: bool = true;
pub const SHOW_BONDS: bool = true;
pub const SHOW_ORBITAL_CLOUDS: bool = false;

/// How the thermal criterion of the break phase is decided.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ThermalBreakModel {
    /// Break when the Boltzmann factor exceeds a fixed threshold. Fully deterministic.
    #[default]
    DeterministicThreshold,
    /// Break when a uniform draw falls below the Boltzmann factor.
    Stochastic,
}

/// Render-only visibility switches. No physics effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Visibility {
    pub atoms: bool,
    pub bonds: bool,
    pub orbital_clouds: bool,
}

impl Default for Visibility {
    fn default() -> Self {
        Self {
            atoms: SHOW_ATOMS,
            bonds: SHOW_BONDS,
            orbital_clouds: SHOW_ORBITAL_CLOUDS,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Integration timestep (internal time units)
    pub dt: f32,
    /// Integration substeps per frame, clamped to [MIN_SUBSTEPS, MAX_SUBSTEPS]
    pub substeps: usize,
    /// Run the bonding protocol every N steps
    pub bond_update_interval: u64,
    pub world_half_extent: f32,
    /// Target temperature (Kelvin)
    pub temperature: f32,
    pub thermostat_tau: f32,
    pub enable_thermostat: bool,
    pub seed: u64,

    pub coulomb_constant: f32,
    pub lj_epsilon: f32,
    pub lj_force_max: f32,
    pub min_pair_distance: f32,
    pub cutoff: f32,
    pub switch_distance: f32,
    pub vsepr_k: f32,

    pub bonding_range: f32,
    pub ionic_threshold: f32,
    pub thermal_break_model: ThermalBreakModel,

    pub visibility: Visibility,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            dt: DEFAULT_DT,
            substeps: DEFAULT_SUBSTEPS,
            bond_update_interval: BOND_UPDATE_INTERVAL,
            world_half_extent: WORLD_HALF_EXTENT,
            temperature: DEFAULT_TEMPERATURE,
            thermostat_tau: THERMOSTAT_TAU,
            enable_thermostat: true,
            seed: DEFAULT_SEED,

            coulomb_constant: units::COULOMB_CONSTANT,
            lj_epsilon: LJ_EPSILON_EV,
            lj_force_max: LJ_FORCE_MAX,
            min_pair_distance: MIN_PAIR_DISTANCE,
            cutoff: INTERACTION_CUTOFF,
            switch_distance: SWITCH_DISTANCE,
            vsepr_k: VSEPR_SPRING_K,

            bonding_range: BONDING_RANGE,
            ionic_threshold: IONIC_THRESHOLD,
            thermal_break_model: ThermalBreakModel::DeterministicThreshold,

            visibility: Visibility::default(),
        }
    }
}

impl SimConfig {
    /// Substep count clamped to the supported range.
    pub fn clamped_substeps(&self) -> usize {
        self.substeps.clamp(MIN_SUBSTEPS, MAX_SUBSTEPS)
    }
}

/// Clamp a temperature to the range the command surface allows.
pub fn clamp_temperature(temperature: f32) -> f32 {
    temperature.clamp(MIN_TEMPERATURE, MAX_TEMPERATURE)
}
