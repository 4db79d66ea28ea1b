//! # rsvp — stimulus schedules and signal cleaning for a reading EEG experiment
//!
//! Support library for a word-by-word sentence reading experiment with
//! physiological recording.  Two independent, stateless components, each a
//! pure function from inputs to an output value:
//!
//! ```text
//! sentence list ──► construct_stimulus()  ──► Vec<ScheduleRow>   frame-level schedule
//! raw recording ──► filter_signal()       ──► Vec<f64>           0.5–45 Hz, zero phase
//! ```
//!
//! The schedule encodes one row per presentation frame (word slots,
//! within-sentence gaps, between-sentence gaps) with the trial order drawn
//! from a caller-supplied random generator.  The filter is an order-10
//! digital Butterworth bandpass in second-order-sections form, applied
//! forward-backward so no time shift is introduced.
//!
//! Device I/O, the presentation loop itself, plotting, and persistence all
//! live in external collaborators; this crate's boundary is purely
//! in-memory.
//!
//! ## Quick start
//!
//! ```
//! use rand::{rngs::StdRng, SeedableRng};
//! use rsvp::{
//!     construct_stimulus, filter_signal,
//!     FilterConfig, ScheduleParams, SentenceId, SentenceRecord,
//! };
//!
//! // 1. Build a presentation schedule.  Seed the generator to make the
//! //    trial order reproducible.
//! let stimulus = vec![
//!     SentenceRecord { id: SentenceId::Int(1), text: "the cat sat".into() },
//!     SentenceRecord { id: SentenceId::Int(2), text: "a dog ran".into() },
//! ];
//! let mut rng = StdRng::seed_from_u64(7);
//! let schedule = construct_stimulus(&stimulus, &ScheduleParams::default(), &mut rng).unwrap();
//! assert_eq!(schedule.len(), 2 * (3 * 25 + 100));
//!
//! // 2. Clean a recording.
//! let recording: Vec<f64> = (0..2500)
//!     .map(|i| (2.0 * std::f64::consts::PI * 10.0 * i as f64 / 250.0).sin())
//!     .collect();
//! let filtered = filter_signal(&recording, &FilterConfig::default()).unwrap();
//! assert_eq!(filtered.len(), recording.len());
//! ```

pub mod config;
pub mod error;
pub mod filter;
pub mod schedule;

// ── Crate-root re-exports ─────────────────────────────────────────────────
//
// Everything a downstream user is likely to need is available directly as
// `rsvp::Foo` without having to know the internal module layout.

// config
pub use config::{FilterConfig, ScheduleParams};

// error
pub use error::{Error, Result};

// filter — design + zero-phase application
pub use filter::{
    butter_bandpass, filter_channels, filter_signal, sosfilt, sosfiltfilt,
    Biquad, FILTER_ORDER,
};

// schedule
pub use schedule::{construct_stimulus, ScheduleRow, SentenceId, SentenceRecord};
