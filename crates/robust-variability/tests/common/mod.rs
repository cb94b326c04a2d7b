//! Shared fixtures for integration tests

#![allow(dead_code)]

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Normal};
use robust_variability::Observation;

pub const EPSILON: f64 = 1e-10;

/// Constant source observed with Gaussian noise matching its error bars
pub fn constant_source(seed: u64, n: usize, flux: f64, sigma: f64) -> (Vec<f64>, Vec<f64>) {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let noise = Normal::new(0.0, sigma).unwrap();
    let fluxes = (0..n).map(|_| flux + noise.sample(&mut rng)).collect();
    (fluxes, vec![sigma; n])
}

/// Sinusoidal variable with amplitude far above the noise
pub fn variable_source(
    seed: u64,
    n: usize,
    flux: f64,
    amplitude: f64,
    sigma: f64,
) -> (Vec<f64>, Vec<f64>) {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let noise = Normal::new(0.0, sigma).unwrap();
    let fluxes = (0..n)
        .map(|_| {
            let phase: f64 = rng.gen_range(0.0..std::f64::consts::TAU);
            flux + amplitude * phase.sin() + noise.sample(&mut rng)
        })
        .collect();
    (fluxes, vec![sigma; n])
}

/// Interleaved multi-band light curve; `bands` gives (label, flux, amplitude)
pub fn multiband_lightcurve(
    seed: u64,
    n_per_band: usize,
    bands: &[(&str, f64, f64)],
    sigma: f64,
) -> Vec<Observation<String>> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let noise = Normal::new(0.0, sigma).unwrap();
    let mut observations = Vec::with_capacity(n_per_band * bands.len());
    for _ in 0..n_per_band {
        for &(band, flux, amplitude) in bands {
            let phase: f64 = rng.gen_range(0.0..std::f64::consts::TAU);
            let value = flux + amplitude * phase.sin() + noise.sample(&mut rng);
            observations.push(Observation::new(band.to_string(), value, sigma));
        }
    }
    observations
}
