//! Hydrogen-like orbital sampling for electron cloud visualization.
//!
//! Effective nuclear charge comes from Slater's rules. Positions are drawn by
//! inverting tabulated CDFs of the radial density r²R² and the polar density
//! sinθ·(P_l^m)², with a uniform azimuth. None of this feeds back into the
//! dynamics.

use std::collections::HashMap;
use std::f64::consts::PI;

use palette::{LinSrgba, Mix};
use ultraviolet::Vec3;

use crate::config;
use crate::units;

/// Slater shielding group: s and p of one shell share a group, d and f get their own.
fn slater_group(n: u32, l: u32) -> u32 {
    if l >= 2 {
        n * 10 + l
    } else {
        n * 10
    }
}

/// Slater shielding sum σ seen by one electron in (n, l).
///
/// `electrons` is the full (n, l) list of the atom including the target
/// electron itself; one same-group contribution is removed for it.
pub fn shielding_constant(target_n: u32, target_l: u32, electrons: &[(u32, u32)]) -> f64 {
    let target = slater_group(target_n, target_l);
    let same = if target_n == 1 { 0.30 } else { 0.35 };
    let inner_sp = target_n.saturating_sub(1) * 10;
    let mut sigma = 0.0;
    let mut saw_self = false;

    for &(n, l) in electrons {
        let g = slater_group(n, l);
        if g == target {
            sigma += same;
            saw_self = true;
        } else if g < target {
            if target_l >= 2 {
                sigma += 1.0;
            } else if g >= inner_sp {
                sigma += 0.85;
            } else {
                sigma += 1.0;
            }
        }
    }
    if saw_self {
        sigma -= same;
    }
    sigma
}

/// Z_eff = Z − σ, never below 1.
pub fn effective_nuclear_charge(z: u32, target_n: u32, target_l: u32, electrons: &[(u32, u32)]) -> f32 {
    let zeff = z as f64 - shielding_constant(target_n, target_l, electrons);
    zeff.max(1.0) as f32
}

fn factorial(k: u32) -> f64 {
    (1..=k).fold(1.0, |acc, i| acc * i as f64)
}

/// Radial wavefunction R_nl(r) of a hydrogen-like atom with charge `zeff`.
/// `r` is in Bohr radii.
pub fn radial_wavefunction(n: u32, l: u32, zeff: f32, r: f64) -> f64 {
    if n == 0 || l >= n {
        return 0.0;
    }
    let a = 1.0 / zeff.max(1e-3) as f64;
    let rho = 2.0 * r / (n as f64 * a);

    // associated Laguerre L_{n-l-1}^{2l+1}(rho)
    let k = n - l - 1;
    let alpha = (2 * l + 1) as f64;
    let mut lag = 1.0;
    if k >= 1 {
        let mut prev = 1.0;
        lag = 1.0 + alpha - rho;
        for j in 2..=k {
            let j = j as f64;
            let next = ((2.0 * j - 1.0 + alpha - rho) * lag - (j - 1.0 + alpha) * prev) / j;
            prev = lag;
            lag = next;
        }
    }

    let norm = (2.0 / (n as f64 * a)).powi(3) * factorial(n - l - 1) / (2.0 * n as f64 * factorial(n + l));
    norm.sqrt() * (-rho / 2.0).exp() * rho.powi(l as i32) * lag
}

/// Associated Legendre polynomial P_l^|m|(x), Condon–Shortley phase included.
pub fn assoc_legendre(l: u32, m: i32, x: f64) -> f64 {
    let am = m.unsigned_abs();
    if am > l {
        return 0.0;
    }
    let mut pmm = 1.0;
    if am > 0 {
        let somx2 = ((1.0 - x) * (1.0 + x)).max(0.0).sqrt();
        let mut fact = 1.0;
        for _ in 0..am {
            pmm *= -fact * somx2;
            fact += 2.0;
        }
    }
    if l == am {
        return pmm;
    }
    let mut pm1m = x * (2 * am + 1) as f64 * pmm;
    for ll in (am + 2)..=l {
        let pll = ((2 * ll - 1) as f64 * x * pm1m - (ll + am - 1) as f64 * pmm) / (ll - am) as f64;
        pmm = pm1m;
        pm1m = pll;
    }
    pm1m
}

/// Unnormalized |ψ|² up to the azimuthal factor. `r` in Bohr radii.
pub fn probability_density(n: u32, l: u32, m: i32, zeff: f32, r: f64, theta: f64) -> f64 {
    let radial = radial_wavefunction(n, l, zeff, r);
    let angular = assoc_legendre(l, m, theta.cos());
    radial * radial * angular * angular
}

/// Fire ramp: black, purple, red, orange, yellow, white. `value` is clamped to [0, 1].
pub fn heatmap_color(value: f32) -> [f32; 4] {
    const STOPS: [(f32, f32, f32); 6] = [
        (0.0, 0.0, 0.0),
        (0.5, 0.0, 0.99),
        (0.8, 0.0, 0.0),
        (1.0, 0.5, 0.0),
        (1.0, 1.0, 0.0),
        (1.0, 1.0, 1.0),
    ];
    let v = if value.is_nan() { 0.0 } else { value.clamp(0.0, 1.0) };
    let s = v * (STOPS.len() - 1) as f32;
    let i = (s as usize).min(STOPS.len() - 1);
    let j = (i + 1).min(STOPS.len() - 1);
    let stop = |k: usize| LinSrgba::new(STOPS[k].0, STOPS[k].1, STOPS[k].2, 1.0);
    let c = stop(i).mix(stop(j), s - i as f32);
    [c.red, c.green, c.blue, c.alpha]
}

/// Normalized running sum of `pdf` over `samples` evenly spaced points in [0, extent].
fn build_cdf(samples: usize, extent: f64, pdf: impl Fn(f64) -> f64) -> Vec<f64> {
    let step = extent / (samples - 1) as f64;
    let mut cdf = Vec::with_capacity(samples);
    let mut sum = 0.0;
    for i in 0..samples {
        let p = pdf(i as f64 * step);
        if p.is_finite() {
            sum += p;
        }
        cdf.push(sum);
    }
    if sum > 0.0 {
        for c in &mut cdf {
            *c /= sum;
        }
    }
    cdf
}

/// Invert a CDF tabulated on [0, extent] at the uniform variate `u`.
fn invert(cdf: &[f64], extent: f64, u: f64) -> f64 {
    let idx = cdf.partition_point(|&c| c < u).min(cdf.len() - 1);
    idx as f64 * extent / (cdf.len() - 1) as f64
}

fn radial_extent(n: u32, zeff: f32) -> f64 {
    config::RADIAL_EXTENT_FACTOR * (n * n) as f64 / zeff.max(1e-3) as f64
}

/// Orbital point sampler with cached CDFs.
pub struct QuantumSampler {
    rng: fastrand::Rng,
    radial_cdfs: HashMap<(u32, u32, u32), Vec<f64>>,
    polar_cdfs: HashMap<(u32, u32), Vec<f64>>,
}

impl Default for QuantumSampler {
    fn default() -> Self {
        Self::with_seed(config::DEFAULT_SEED)
    }
}

impl QuantumSampler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: fastrand::Rng::with_seed(seed),
            radial_cdfs: HashMap::new(),
            polar_cdfs: HashMap::new(),
        }
    }

    pub fn cached_tables(&self) -> usize {
        self.radial_cdfs.len() + self.polar_cdfs.len()
    }

    /// Radius in Bohr radii drawn from r²R_nl².
    pub fn sample_r(&mut self, n: u32, l: u32, zeff: f32) -> f64 {
        let extent = radial_extent(n, zeff);
        let cdf = self
            .radial_cdfs
            .entry((n, l, zeff.to_bits()))
            .or_insert_with(|| {
                build_cdf(config::RADIAL_CDF_SAMPLES, extent, |r| {
                    let big_r = radial_wavefunction(n, l, zeff, r);
                    r * r * big_r * big_r
                })
            });
        invert(cdf, extent, self.rng.f64())
    }

    /// Polar angle in [0, π] drawn from sinθ·(P_l^m)².
    pub fn sample_theta(&mut self, l: u32, m: i32) -> f64 {
        let am = m.unsigned_abs();
        let cdf = self.polar_cdfs.entry((l, am)).or_insert_with(|| {
            build_cdf(config::POLAR_CDF_SAMPLES, PI, |theta| {
                let p = assoc_legendre(l, am as i32, theta.cos());
                theta.sin() * p * p
            })
        });
        invert(cdf, PI, self.rng.f64())
    }

    pub fn sample_phi(&mut self) -> f64 {
        self.rng.f64() * 2.0 * PI
    }

    /// Offset from the nucleus in Å, together with the sampled (r in Bohr, θ).
    pub fn sample_point(&mut self, n: u32, l: u32, m: i32, zeff: f32) -> (Vec3, f64, f64) {
        let r = self.sample_r(n, l, zeff);
        let theta = self.sample_theta(l, m);
        let phi = self.sample_phi();
        let r_a = r * units::BOHR_RADIUS_A as f64;
        let offset = Vec3::new(
            (r_a * theta.sin() * phi.cos()) as f32,
            (r_a * theta.sin() * phi.sin()) as f32,
            (r_a * theta.cos()) as f32,
        );
        (offset, r, theta)
    }

    /// Offset from the nucleus in Å.
    pub fn sample_position(&mut self, n: u32, l: u32, m: i32, zeff: f32) -> Vec3 {
        self.sample_point(n, l, m, zeff).0
    }
}
