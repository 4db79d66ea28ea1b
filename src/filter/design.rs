//! Butterworth bandpass design in second-order sections.
//!
//! Follows the classic digital IIR design route:
//!   1. analog lowpass prototype poles (maximally flat, cutoff 1 rad/s)
//!   2. lowpass → bandpass transform at the prewarped band edges
//!   3. bilinear transform to the z-plane
//!   4. conjugate-pair pole pairing into biquad sections, with one `z = +1`
//!      and one `z = −1` zero per section and the overall gain folded into
//!      the first section.
use num_complex::Complex64;
use std::f64::consts::PI;

use crate::config::FilterConfig;
use crate::error::{Error, Result};

/// Realized filter order.
///
/// The upstream pipeline documents this as tunable but never honors it;
/// it is kept as a fixed constant here so the public surface does not
/// promise a knob that has no effect.
pub const FILTER_ORDER: usize = 10;

/// Sample rate convention for prewarping and the bilinear transform.
const FS: f64 = 2.0;

/// Poles with an imaginary part below this are treated as real.
const POLE_IM_EPS: f64 = 1e-10;

/// One second-order section, `a0` normalized to 1:
/// `H(z) = (b0 + b1·z⁻¹ + b2·z⁻²) / (1 + a1·z⁻¹ + a2·z⁻²)`
#[derive(Debug, Clone, Copy)]
pub struct Biquad {
    pub b0: f64,
    pub b1: f64,
    pub b2: f64,
    pub a1: f64,
    pub a2: f64,
}

/// Design the order-[`FILTER_ORDER`] digital Butterworth bandpass for
/// `config`, one section per pole pair.
///
/// # Errors
///
/// [`Error::InvalidInput`] unless `0 < low < high < sfreq / 2`.
pub fn butter_bandpass(config: &FilterConfig) -> Result<Vec<Biquad>> {
    let (low, high) = config.passband;
    if !config.sfreq.is_finite() || config.sfreq <= 0.0 {
        return Err(Error::invalid("sfreq", "sampling rate must be positive"));
    }
    let nyq = config.nyquist();
    if !low.is_finite() || !high.is_finite() || low <= 0.0 || low >= high || high >= nyq {
        return Err(Error::invalid(
            "passband",
            format!("invalid passband ({low}\u{2013}{high} Hz): need 0 < low < high < {nyq} Hz (Nyquist)"),
        ));
    }

    // Band edges normalized to Nyquist, prewarped for the bilinear transform.
    let warped_lo = prewarp(low / nyq);
    let warped_hi = prewarp(high / nyq);
    let wo = (warped_lo * warped_hi).sqrt();
    let bw = warped_hi - warped_lo;

    // Analog lowpass prototype: poles evenly spaced on the left half of the
    // unit circle, unit gain, no zeros.
    let n = FILTER_ORDER;
    let proto: Vec<Complex64> = (0..n)
        .map(|k| {
            let angle = PI * (2 * k + n + 1) as f64 / (2 * n) as f64;
            Complex64::new(angle.cos(), angle.sin())
        })
        .collect();

    // Lowpass → bandpass: every prototype pole splits into a pair
    //   p' = p·bw/2 ± sqrt((p·bw/2)² − wo²)
    // and the gain picks up bw^n for the n zeros moved from infinity.
    let mut analog_poles = Vec::with_capacity(2 * n);
    for &p in &proto {
        let pb = p * (bw / 2.0);
        let disc = (pb * pb - Complex64::new(wo * wo, 0.0)).sqrt();
        analog_poles.push(pb + disc);
        analog_poles.push(pb - disc);
    }
    let mut gain = bw.powi(n as i32);

    // Bilinear transform: z = (fs2 + s) / (fs2 − s).  The n analog zeros at
    // the origin map to z = +1; the n-fold degree deficit contributes n
    // zeros at z = −1.  Gain scales by Re(prod(fs2 − z) / prod(fs2 − p)).
    let fs2 = Complex64::new(2.0 * FS, 0.0);
    let mut num = Complex64::new(1.0, 0.0);
    let mut den = Complex64::new(1.0, 0.0);
    for _ in 0..n {
        num *= fs2;
    }
    for &p in &analog_poles {
        den *= fs2 - p;
    }
    gain *= (num / den).re;

    let digital_poles: Vec<Complex64> =
        analog_poles.iter().map(|&s| (fs2 + s) / (fs2 - s)).collect();

    // Pair poles into sections: conjugate pairs directly, any residual real
    // poles two at a time.  Denominator of a conjugate pair (p, p̄):
    //   a1 = −2·Re(p),  a2 = |p|².
    let mut denoms: Vec<(f64, f64)> = Vec::with_capacity(n);
    let mut reals: Vec<f64> = Vec::new();
    for p in &digital_poles {
        if p.im > POLE_IM_EPS {
            denoms.push((-2.0 * p.re, p.norm_sqr()));
        } else if p.im < -POLE_IM_EPS {
            // conjugate partner of a pole already paired above
        } else {
            reals.push(p.re);
        }
    }
    let mut iter = reals.chunks_exact(2);
    for pair in &mut iter {
        denoms.push((-(pair[0] + pair[1]), pair[0] * pair[1]));
    }
    if let [r] = iter.remainder() {
        denoms.push((-r, 0.0));
    }
    debug_assert_eq!(denoms.len(), n);

    // Numerator per section: one zero at +1 and one at −1 → (1, 0, −1).
    let sections: Vec<Biquad> = denoms
        .into_iter()
        .enumerate()
        .map(|(idx, (a1, a2))| {
            let scale = if idx == 0 { gain } else { 1.0 };
            Biquad { b0: scale, b1: 0.0, b2: -scale, a1, a2 }
        })
        .collect();

    log::debug!(
        "designed order-{n} bandpass {low}\u{2013}{high} Hz @ {} Hz: {} sections, gain {gain:.3e}",
        config.sfreq,
        sections.len(),
    );
    Ok(sections)
}

fn prewarp(wn: f64) -> f64 {
    2.0 * FS * (PI * wn / FS).tan()
}
