//! Physical unit definitions and conversions.
//!
//! Base units:
//! - Energy: electronvolt (eV)
//! - Length: angstrom (Å)
//! - Mass: atomic mass unit (amu)
//! - Charge: elementary charge (e)
//!
//! Time is derived from the three above, so `a = F / m` needs no extra factor.

/// Boltzmann constant in eV/K.
pub const BOLTZMANN_CONSTANT: f32 = 8.617_333e-5;

/// Coulomb's constant in eV·Å/e².
pub const COULOMB_CONSTANT: f32 = 14.399_645;

/// Bohr radius in angstroms.
pub const BOHR_RADIUS_A: f32 = 0.529_177_2;

/// Picometres per angstrom; element radii are tabulated in pm.
pub const PM_PER_ANGSTROM: f32 = 100.0;

/// Femtoseconds in one internal time unit, sqrt(amu·Å²/eV).
pub const TIME_UNIT_FS: f64 = 10.180_505;

/// Convert a tabulated radius in picometres to angstroms.
#[inline]
pub fn pm_to_angstrom(pm: f32) -> f32 {
    pm / PM_PER_ANGSTROM
}

/// Thermal energy kB·T in eV.
#[inline]
pub fn thermal_energy(temperature: f32) -> f32 {
    BOLTZMANN_CONSTANT * temperature
}

/// Convert an internal time value to femtoseconds.
pub fn to_femtoseconds(time: f32) -> f64 {
    time as f64 * TIME_UNIT_FS
}
