// thermal.rs
// Temperature measurement, Maxwell-Boltzmann sampling and the Berendsen thermostat

use rand::Rng;
use rand_distr::{Distribution, StandardNormal};
use ultraviolet::Vec3;

use super::Simulation;
use crate::atom::Atom;
use crate::config;
use crate::units::BOLTZMANN_CONSTANT;

/// Instantaneous temperature T = (2/3)·⟨KE⟩/kB over atoms with mass.
pub fn instantaneous_temperature(atoms: &[Atom]) -> f32 {
    let (ke, count) = atoms
        .iter()
        .filter(|a| a.mass > 0.0)
        .fold((0.0f32, 0usize), |(ke, n), a| (ke + a.kinetic(), n + 1));
    if count == 0 {
        return 0.0;
    }
    (2.0 / 3.0) * (ke / count as f32) / BOLTZMANN_CONSTANT
}

/// Berendsen scale factor λ = √(1 + (dt/τ)(T₀/T − 1)), clamped per step.
pub fn berendsen_lambda(dt: f32, tau: f32, target: f32, current: f32) -> f32 {
    let current = current.max(1.0);
    let tau = tau.max(dt).max(f32::EPSILON);
    let arg = 1.0 + (dt / tau) * (target / current - 1.0);
    arg.max(0.0)
        .sqrt()
        .clamp(config::THERMOSTAT_LAMBDA_MIN, config::THERMOSTAT_LAMBDA_MAX)
}

/// Maxwell-Boltzmann velocity: each component ~ N(0, kB·T/m).
pub fn sample_velocity<R: Rng + ?Sized>(rng: &mut R, mass: f32, temperature: f32) -> Vec3 {
    if mass <= 0.0 || temperature <= 0.0 {
        return Vec3::zero();
    }
    let sigma = (BOLTZMANN_CONSTANT * temperature / mass).sqrt();
    let mut component = || {
        let z: f64 = StandardNormal.sample(rng);
        z as f32 * sigma
    };
    Vec3::new(component(), component(), component())
}

impl Simulation {
    /// Rescale all velocities toward the target temperature.
    pub fn apply_thermostat(&mut self) {
        let target = self.config.temperature;
        if self.atoms.is_empty() || target < config::THERMOSTAT_MIN_TARGET {
            return;
        }
        let current = instantaneous_temperature(&self.atoms);
        let lambda = berendsen_lambda(self.config.dt, self.config.thermostat_tau, target, current);
        for atom in &mut self.atoms {
            atom.vel *= lambda;
        }

        #[cfg(feature = "thermostat_debug")]
        if self.step_count % config::THERMOSTAT_LOG_INTERVAL == 0 {
            log::info!(
                "[thermostat-summary] step={} N={} T={:.2}K target={:.2}K lambda={:.4}",
                self.step_count,
                self.atoms.len(),
                current,
                target,
                lambda
            );
        }
    }
}
