//! Zero-phase application of the bandpass filter.
//!
//! Forward-backward filtering: run the cascade once forward and once in
//! reverse so the phase responses cancel, doubling the realized order.
//! The edge transient is suppressed by odd (reflect-limited) extension of
//! the signal before the forward pass; the extension is stripped from the
//! result.  This is an offline, whole-signal operation, not a real-time
//! filter.
use ndarray::Array2;

use super::design::{butter_bandpass, Biquad};
use crate::config::FilterConfig;
use crate::error::{Error, Result};

/// Extension length for the forward-backward pass, per side.
fn pad_len(n_sections: usize) -> usize {
    3 * (2 * n_sections + 1)
}

/// Run `x` through the cascade once, section by section
/// (Direct Form II transposed).
pub fn sosfilt(sections: &[Biquad], x: &[f64]) -> Vec<f64> {
    let mut y = x.to_vec();
    for sec in sections {
        let (mut z1, mut z2) = (0.0_f64, 0.0_f64);
        for v in y.iter_mut() {
            let xn = *v;
            let yn = sec.b0 * xn + z1;
            z1 = sec.b1 * xn - sec.a1 * yn + z2;
            z2 = sec.b2 * xn - sec.a2 * yn;
            *v = yn;
        }
    }
    y
}

/// Zero-phase (forward-backward) pass over `x`.
///
/// Returns a vector of the same length as `x`.
///
/// # Errors
///
/// [`Error::InsufficientData`] unless `x` is strictly longer than the
/// extension length `3 · (2·n_sections + 1)`.
pub fn sosfiltfilt(sections: &[Biquad], x: &[f64]) -> Result<Vec<f64>> {
    let pad = pad_len(sections.len());
    if x.len() <= pad {
        return Err(Error::InsufficientData { needed: pad, got: x.len() });
    }

    let ext = odd_ext(x, pad);
    let mut y = sosfilt(sections, &ext);
    y.reverse();
    let mut y = sosfilt(sections, &y);
    y.reverse();

    Ok(y[pad..pad + x.len()].to_vec())
}

/// Bandpass-filter a 1-D recording with zero net phase shift.
///
/// Designs the order-[`super::FILTER_ORDER`](crate::filter::FILTER_ORDER)
/// Butterworth bandpass for `config` and applies it forward-backward.  The
/// output has the same length and sample rate as the input; the input is
/// not mutated.
///
/// # Errors
///
/// * [`Error::InvalidInput`] on an empty recording, non-finite samples, or
///   a malformed passband.
/// * [`Error::InsufficientData`] when the recording is too short for the
///   filter order.
///
/// # Examples
///
/// ```
/// use rsvp::{filter_signal, FilterConfig};
///
/// let recording: Vec<f64> = (0..2500)
///     .map(|i| (2.0 * std::f64::consts::PI * 10.0 * i as f64 / 250.0).sin())
///     .collect();
/// let filtered = filter_signal(&recording, &FilterConfig::default()).unwrap();
/// assert_eq!(filtered.len(), recording.len());
/// ```
pub fn filter_signal(recording: &[f64], config: &FilterConfig) -> Result<Vec<f64>> {
    if recording.is_empty() {
        return Err(Error::invalid("recording", "empty recording"));
    }
    check_finite(recording)?;
    let sections = butter_bandpass(config)?;
    sosfiltfilt(&sections, recording)
}

/// Apply the same zero-phase bandpass to every channel of `data`
/// (`[C, T]`) in place.  The filter is designed once and shared across
/// channels.
pub fn filter_channels(data: &mut Array2<f64>, config: &FilterConfig) -> Result<()> {
    let sections = butter_bandpass(config)?;
    for ch in 0..data.nrows() {
        let row: Vec<f64> = data.row(ch).to_vec();
        check_finite(&row)?;
        let filtered = sosfiltfilt(&sections, &row)?;
        data.row_mut(ch).assign(&ndarray::ArrayView1::from(&filtered));
    }
    Ok(())
}

// ── Helpers ──────────────────────────────────────────────────────────────────

fn check_finite(x: &[f64]) -> Result<()> {
    if let Some(idx) = x.iter().position(|v| !v.is_finite()) {
        return Err(Error::invalid(
            "recording",
            format!("non-finite sample at index {idx}"),
        ));
    }
    Ok(())
}

/// Odd extension of `x` by `pad` samples on each side:
///
/// Left:  `2·x[0] − x[i]`       for i in 1..=pad (reversed)
/// Right: `2·x[n−1] − x[n−1−i]` for i in 1..=pad
///
/// Requires `pad < x.len()`, guaranteed by the length check in
/// [`sosfiltfilt`].
fn odd_ext(x: &[f64], pad: usize) -> Vec<f64> {
    let n = x.len();
    let mut out = Vec::with_capacity(n + 2 * pad);
    for i in (1..=pad).rev() {
        out.push(2.0 * x[0] - x[i]);
    }
    out.extend_from_slice(x);
    let last = x[n - 1];
    for i in 1..=pad {
        out.push(2.0 * last - x[n - 1 - i]);
    }
    out
}
