//! Error function approximation.
//!
//! Availability calculations need the Gaussian CDF, which in turn needs
//! `erf`. `std` has no `erf`, so this uses the Abramowitz & Stegun 7.1.26
//! five-coefficient rational approximation (max absolute error ~1.5e-7).

const P: f64 = 0.327_591_1;
const A1: f64 = 0.254_829_592;
const A2: f64 = -0.284_496_736;
const A3: f64 = 1.421_413_741;
const A4: f64 = -1.453_152_027;
const A5: f64 = 1.061_405_429;

/// Approximates `erf(x)` to within ~1.5e-7.
pub fn erf(x: f64) -> f64 {
    let sign = if x < 0.0 { -1.0 } else { 1.0 };
    let x = x.abs();

    let t = 1.0 / (1.0 + P * x);
    let poly = ((((A5 * t + A4) * t + A3) * t + A2) * t + A1) * t;
    let y = 1.0 - poly * (-x * x).exp();

    sign * y
}
