use ndarray::Array2;
use rsvp::{filter_channels, filter_signal, Error, FilterConfig};
use std::f64::consts::PI;

const SFREQ: f64 = 250.0;
/// 60 s of signal: long enough that the slow 0.5 Hz-edge transient has
/// fully decayed inside the guarded interior window.
const N: usize = 15_000;
/// 15 s guard on each side when judging steady-state amplitude.
const GUARD: usize = 3_750;

fn sine(freq: f64) -> Vec<f64> {
    (0..N).map(|i| (2.0 * PI * freq * i as f64 / SFREQ).sin()).collect()
}

fn interior_rms(x: &[f64]) -> f64 {
    let interior = &x[GUARD..x.len() - GUARD];
    (interior.iter().map(|v| v * v).sum::<f64>() / interior.len() as f64).sqrt()
}

// ── Amplitude behavior ────────────────────────────────────────────────────────

#[test]
fn passband_sine_keeps_its_amplitude() {
    // 10 Hz is deep inside 0.5–45 Hz; a unit sine has RMS 1/√2 ≈ 0.707.
    let x = sine(10.0);
    let y = filter_signal(&x, &FilterConfig::default()).unwrap();
    assert_eq!(y.len(), x.len());

    let rms = interior_rms(&y);
    assert!(rms > 0.65, "RMS too low ({rms:.3}), pass-band signal attenuated?");
    assert!(rms < 0.75, "RMS too high ({rms:.3}), gain above unity?");
}

#[test]
fn stopband_sine_is_removed() {
    // 60 Hz sits well above the 45 Hz edge; the realized order-20 rolloff
    // crushes it.
    let x = sine(60.0);
    let y = filter_signal(&x, &FilterConfig::default()).unwrap();

    let rms = interior_rms(&y);
    assert!(rms < 0.02, "RMS {rms:.4}, stop-band not attenuated");
}

#[test]
fn out_of_band_component_stripped_from_mixture() {
    // 10 Hz (pass) + 60 Hz (stop): only the in-band tone survives.
    let x: Vec<f64> = sine(10.0).iter().zip(sine(60.0).iter()).map(|(a, b)| a + b).collect();
    let y = filter_signal(&x, &FilterConfig::default()).unwrap();

    let rms = interior_rms(&y);
    assert!(rms > 0.65, "RMS too low ({rms:.3}), pass-band signal attenuated?");
    assert!(rms < 0.78, "RMS too high ({rms:.3}), stop-band not attenuated?");
}

#[test]
fn dc_offset_is_removed() {
    let x = vec![1.0; N];
    let y = filter_signal(&x, &FilterConfig::default()).unwrap();

    let interior = &y[GUARD..N - GUARD];
    let max_val = interior.iter().map(|v| v.abs()).fold(0.0_f64, f64::max);
    assert!(max_val < 0.01, "DC not removed: max={max_val:.4}");
}

// ── Zero-phase property ───────────────────────────────────────────────────────

#[test]
fn filtered_output_has_zero_lag() {
    // Cross-correlation of input and output peaks at lag 0: the backward
    // pass cancels the phase shift of the forward pass.
    let x = sine(10.0);
    let y = filter_signal(&x, &FilterConfig::default()).unwrap();

    let mut best_lag = i64::MIN;
    let mut best = f64::MIN;
    for lag in -10_i64..=10 {
        let c: f64 = (GUARD..N - GUARD)
            .map(|i| x[i] * y[(i as i64 + lag) as usize])
            .sum();
        if c > best {
            best = c;
            best_lag = lag;
        }
    }
    assert_eq!(best_lag, 0, "cross-correlation peak at lag {best_lag}");
}

// ── Failure conditions ────────────────────────────────────────────────────────

#[test]
fn inverted_passband_is_invalid_input() {
    let cfg = FilterConfig { passband: (50.0, 40.0), ..FilterConfig::default() };
    let err = filter_signal(&sine(10.0), &cfg).unwrap_err();
    assert!(matches!(err, Error::InvalidInput { arg: "passband", .. }));
}

#[test]
fn high_edge_at_or_above_nyquist_is_invalid_input() {
    for high in [125.0, 130.0] {
        let cfg = FilterConfig { passband: (0.5, high), ..FilterConfig::default() };
        let err = filter_signal(&sine(10.0), &cfg).unwrap_err();
        assert!(matches!(err, Error::InvalidInput { arg: "passband", .. }));
    }
}

#[test]
fn short_recording_is_insufficient_data() {
    let x = vec![0.0; 40];
    let err = filter_signal(&x, &FilterConfig::default()).unwrap_err();
    assert!(matches!(err, Error::InsufficientData { got: 40, .. }));
}

#[test]
fn nan_sample_is_invalid_input() {
    let mut x = sine(10.0);
    x[7] = f64::NAN;
    let err = filter_signal(&x, &FilterConfig::default()).unwrap_err();
    assert!(matches!(err, Error::InvalidInput { arg: "recording", .. }));
}

#[test]
fn empty_recording_is_invalid_input() {
    let err = filter_signal(&[], &FilterConfig::default()).unwrap_err();
    assert!(matches!(err, Error::InvalidInput { arg: "recording", .. }));
}

// ── Multi-channel helper ──────────────────────────────────────────────────────

#[test]
fn filter_channels_matches_per_channel_filtering() {
    let rows = [sine(10.0), sine(25.0)];
    let mut data = Array2::from_shape_fn((2, N), |(c, t)| rows[c][t]);

    filter_channels(&mut data, &FilterConfig::default()).unwrap();

    for (c, row) in rows.iter().enumerate() {
        let expected = filter_signal(row, &FilterConfig::default()).unwrap();
        for (a, b) in data.row(c).iter().zip(expected.iter()) {
            approx::assert_abs_diff_eq!(*a, *b, epsilon = 1e-12);
        }
    }
}
