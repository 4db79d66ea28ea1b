//! Butterworth bandpass design and zero-phase application.
//!
//! - [`design`]: order-10 digital Butterworth bandpass synthesized as
//!   cascaded second-order sections (analog prototype → LP→BP transform →
//!   bilinear transform).
//! - [`apply`]: forward-backward (zero-phase) application with odd signal
//!   extension.

pub mod apply;
pub mod design;

pub use design::{butter_bandpass, Biquad, FILTER_ORDER};
pub use apply::{filter_channels, filter_signal, sosfilt, sosfiltfilt};
