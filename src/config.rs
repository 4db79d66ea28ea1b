//! Scheduler and filter parameters.
//!
//! Both structs hold every tunable for their component.  All fields have
//! defaults matching the values used in the reading experiment, and all
//! fields are `pub` so you can construct one with struct-update syntax.

use crate::error::{Error, Result};

/// Frame-count parameters for the stimulus schedule.
///
/// ```
/// use rsvp::ScheduleParams;
///
/// let params = ScheduleParams {
///     word_pres_dur: 30,   // slower presentation
///     ..ScheduleParams::default()
/// };
/// ```
///
/// Or just call [`ScheduleParams::default()`] for the experiment settings.
#[derive(Debug, Clone)]
pub struct ScheduleParams {
    /// Duration of presentation for each word, in frames.
    ///
    /// Default: `20`.
    pub word_pres_dur: usize,

    /// Duration of the within-sentence break after each word, in frames.
    ///
    /// Default: `5`.
    pub within_break: usize,

    /// Duration of the break after each sentence, in frames.
    ///
    /// Default: `100`.
    pub between_break: usize,
}

impl Default for ScheduleParams {
    /// Returns the experiment configuration: 20 / 5 / 100 frames.
    fn default() -> Self {
        Self {
            word_pres_dur: 20,
            within_break: 5,
            between_break: 100,
        }
    }
}

impl ScheduleParams {
    /// Number of schedule rows one sentence of `n_words` words produces.
    ///
    /// Computed as `(word_pres_dur + within_break) · n_words + between_break`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rsvp::ScheduleParams;
    /// assert_eq!(ScheduleParams::default().frames_for_words(2), 150);
    /// ```
    pub fn frames_for_words(&self, n_words: usize) -> usize {
        (self.word_pres_dur + self.within_break) * n_words + self.between_break
    }

    /// All frame counts must be positive.
    pub(crate) fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("word_pres_dur", self.word_pres_dur),
            ("within_break", self.within_break),
            ("between_break", self.between_break),
        ] {
            if value == 0 {
                return Err(Error::invalid(name, "frame count must be positive"));
            }
        }
        Ok(())
    }
}

/// Parameters of the zero-phase bandpass filter.
///
/// The filter order is fixed at [`crate::filter::FILTER_ORDER`] and is not a
/// field here.
#[derive(Debug, Clone)]
pub struct FilterConfig {
    /// Passband `(low, high)` in Hz.  Must satisfy
    /// `0 < low < high < sfreq / 2`.
    ///
    /// Default: `(0.5, 45.0)` Hz.
    pub passband: (f64, f64),

    /// Sampling frequency of the recording in Hz.
    ///
    /// Default: `250.0` Hz, the sampling rate of the Muse headband.
    pub sfreq: f64,
}

impl Default for FilterConfig {
    /// Returns the experiment configuration: 0.5–45 Hz at 250 Hz.
    fn default() -> Self {
        Self {
            passband: (0.5, 45.0),
            sfreq: 250.0,
        }
    }
}

impl FilterConfig {
    /// Nyquist frequency, `sfreq / 2`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rsvp::FilterConfig;
    /// assert_eq!(FilterConfig::default().nyquist(), 125.0);
    /// ```
    pub fn nyquist(&self) -> f64 {
        self.sfreq / 2.0
    }
}
