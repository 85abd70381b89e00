// src/io/arrivals.rs

use rand::Rng;
use rand_distr::{Distribution, Standard};

/// Draws the number of people arriving in one minute from a Poisson
/// distribution with the given mean.
///
/// Uses Knuth's multiplication method: uniform draws are multiplied into an
/// accumulator starting at 1.0 until it falls to `e^(-mean)` or below. The
/// sample is the number of draws taken minus one. Seeded runs depend on this
/// exact consumption of the random source, so it must not be swapped for a
/// library Poisson sampler.
///
/// # Arguments
/// * `rng` - The session's random source.
/// * `mean` - Average arrivals per minute. Must be positive.
pub fn sample_arrivals<R: Rng + ?Sized>(rng: &mut R, mean: f64) -> u32 {
    // A NaN or non-positive mean would never reach the threshold.
    debug_assert!(mean > 0.0, "arrival mean must be positive, got {}", mean);
    let threshold = (-mean).exp();
    let mut draws: u32 = 0;
    let mut product = 1.0_f64;

    loop {
        let uniform: f64 = Standard.sample(rng);
        product *= uniform;
        draws += 1;
        if product <= threshold {
            break;
        }
    }

    draws - 1
}
