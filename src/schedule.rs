//! Frame-level stimulus schedule construction.
//!
//! One row per presentation frame: `word_pres_dur` frames per word, a
//! `within_break` gap after each word, a `between_break` gap after each
//! sentence.  Trial order is a fresh uniform permutation of the sentence
//! list, drawn from a caller-supplied generator so a fixed seed reproduces
//! the same session order and concurrent callers can each use their own.
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::ScheduleParams;
use crate::error::{Error, Result};

/// Sentence identifier: an integer or a string, passed through untouched.
///
/// No uniqueness constraint is enforced; duplicate IDs tag their rows as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SentenceId {
    Int(i64),
    Text(String),
}

impl fmt::Display for SentenceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SentenceId::Int(v) => write!(f, "{v}"),
            SentenceId::Text(v) => write!(f, "{v}"),
        }
    }
}

impl From<i64> for SentenceId {
    fn from(v: i64) -> Self {
        SentenceId::Int(v)
    }
}

impl From<&str> for SentenceId {
    fn from(v: &str) -> Self {
        SentenceId::Text(v.to_string())
    }
}

impl From<String> for SentenceId {
    fn from(v: String) -> Self {
        SentenceId::Text(v)
    }
}

/// One sentence of the stimulus set, supplied by the external loader.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentenceRecord {
    #[serde(rename = "ID")]
    pub id: SentenceId,
    /// Space-delimited sequence of words.
    pub text: String,
}

/// One presentation frame of the schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleRow {
    /// Word on screen during this frame; empty during a break.
    pub word: String,
    /// ID of the sentence this frame belongs to.
    pub sentence: SentenceId,
    /// True when `word` differs from the previous frame's word.
    /// The first frame has no predecessor and is always a change.
    pub change: bool,
    /// Exact presentation timestamp, filled in by the presentation loop.
    /// `None` until then.
    pub time: Option<f64>,
}

/// Build the frame-level presentation schedule for one session.
///
/// Sentences are presented in a uniformly random order (drawn by sampling
/// indices without replacement from `rng`).  Per sentence, `text` is split
/// on *single* spaces; runs of spaces therefore yield empty words that
/// still occupy a full `word_pres_dur + within_break` slot.  This mirrors
/// the behavior the presentation loop was calibrated against and is kept
/// as a contract.
///
/// # Errors
///
/// [`Error::InvalidInput`] on an empty stimulus set, on a sentence with
/// empty `text`, or on a zero frame-count parameter.
///
/// # Examples
///
/// ```
/// use rand::{rngs::StdRng, SeedableRng};
/// use rsvp::{construct_stimulus, ScheduleParams, SentenceId, SentenceRecord};
///
/// let stimulus = vec![SentenceRecord {
///     id: SentenceId::Int(1),
///     text: "the cat sat".into(),
/// }];
/// let mut rng = StdRng::seed_from_u64(7);
/// let rows = construct_stimulus(&stimulus, &ScheduleParams::default(), &mut rng).unwrap();
/// assert_eq!(rows.len(), 3 * 25 + 100);
/// assert!(rows[0].change);
/// assert!(rows.iter().all(|r| r.time.is_none()));
/// ```
pub fn construct_stimulus<R: Rng + ?Sized>(
    stimulus: &[SentenceRecord],
    params: &ScheduleParams,
    rng: &mut R,
) -> Result<Vec<ScheduleRow>> {
    if stimulus.is_empty() {
        return Err(Error::invalid("stimulus", "empty stimulus set"));
    }
    if let Some(bad) = stimulus.iter().find(|s| s.text.is_empty()) {
        return Err(Error::invalid(
            "stimulus",
            format!("sentence {} has empty text", bad.id),
        ));
    }
    params.validate()?;

    let order = rand::seq::index::sample(rng, stimulus.len(), stimulus.len()).into_vec();
    log::debug!("trial order: {order:?}");

    let total: usize = order
        .iter()
        .map(|&i| params.frames_for_words(stimulus[i].text.split(' ').count()))
        .sum();
    let mut rows = Vec::with_capacity(total);

    for &i in &order {
        let sentence = &stimulus[i];
        for word in sentence.text.split(' ') {
            for _ in 0..params.word_pres_dur {
                rows.push(frame(word, &sentence.id));
            }
            for _ in 0..params.within_break {
                rows.push(frame("", &sentence.id));
            }
        }
        for _ in 0..params.between_break {
            rows.push(frame("", &sentence.id));
        }
    }

    // Shift-and-compare over the concatenated table.
    for idx in 0..rows.len() {
        rows[idx].change = idx == 0 || rows[idx].word != rows[idx - 1].word;
    }

    Ok(rows)
}

fn frame(word: &str, sentence: &SentenceId) -> ScheduleRow {
    ScheduleRow {
        word: word.to_string(),
        sentence: sentence.clone(),
        change: false,
        time: None,
    }
}
