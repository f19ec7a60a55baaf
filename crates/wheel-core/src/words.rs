//! Word/score table: the data behind the driver wheel.
//!
//! The external feed is a JSON array of `{ word, digits, explanations? }`
//! objects. Everything here is defensive: scores are coerced and clamped to
//! the wheel domain, short vectors are padded, missing explanations become
//! empty strings. Only entries with no usable label or no scores at all are
//! skipped. The table is immutable for the session once built.

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use crate::constants::SCORE_DIMENSIONS;

/// Inclusive score range a wheel displays.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScoreDomain {
    pub min: u8,
    pub max: u8,
}

impl ScoreDomain {
    pub const ZERO_TO_NINE: Self = Self { min: 0, max: 9 };
    pub const ONE_TO_TEN: Self = Self { min: 1, max: 10 };

    /// Coerce an arbitrary feed value to an in-domain integer score.
    /// Non-numeric or non-finite input lands on the domain minimum.
    pub fn coerce(&self, raw: &Value) -> u8 {
        let num = raw
            .as_f64()
            .or_else(|| raw.as_str().and_then(|s| s.trim().parse::<f64>().ok()));
        match num {
            Some(v) if v.is_finite() => {
                let v = v.round();
                if v <= self.min as f64 {
                    self.min
                } else if v >= self.max as f64 {
                    self.max
                } else {
                    v as u8
                }
            }
            _ => self.min,
        }
    }

    /// Clamp an already-numeric score into the domain.
    #[inline]
    pub fn clamp(&self, score: i64) -> u8 {
        score.clamp(self.min as i64, self.max as i64) as u8
    }

    /// Number of distinct scores, i.e. the item count of a score wheel.
    #[inline]
    pub fn item_count(&self) -> usize {
        (self.max - self.min) as usize + 1
    }

    /// Wheel item index for an in-domain score.
    #[inline]
    pub fn score_index(&self, score: u8) -> usize {
        self.clamp(score as i64) as usize - self.min as usize
    }

    /// Item labels for a score wheel over this domain.
    pub fn labels(&self) -> Vec<String> {
        (self.min..=self.max).map(|s| s.to_string()).collect()
    }
}

/// One entry as it appears in the external feed, before coercion.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct RawWordEntry {
    #[serde(default)]
    pub word: Option<String>,
    #[serde(default)]
    pub digits: Vec<Value>,
    #[serde(default)]
    pub explanations: Vec<String>,
}

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("feed entry has no label")]
    MissingLabel,
    #[error("feed entry `{0}` has no scores")]
    MissingScores(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WordEntry {
    pub label: String,
    pub scores: [u8; SCORE_DIMENSIONS],
    pub explanations: [String; SCORE_DIMENSIONS],
}

impl WordEntry {
    pub fn from_raw(raw: &RawWordEntry, domain: ScoreDomain) -> Result<Self, FeedError> {
        let label = raw
            .word
            .as_deref()
            .map(str::trim)
            .filter(|w| !w.is_empty())
            .ok_or(FeedError::MissingLabel)?
            .to_string();
        if raw.digits.is_empty() {
            return Err(FeedError::MissingScores(label));
        }
        let mut scores = [domain.min; SCORE_DIMENSIONS];
        for (slot, value) in scores.iter_mut().zip(raw.digits.iter()) {
            *slot = domain.coerce(value);
        }
        let mut explanations: [String; SCORE_DIMENSIONS] = Default::default();
        for (slot, text) in explanations.iter_mut().zip(raw.explanations.iter()) {
            *slot = text.clone();
        }
        Ok(Self {
            label,
            scores,
            explanations,
        })
    }

    pub fn total(&self) -> u32 {
        self.scores.iter().map(|&s| s as u32).sum()
    }
}

/// Dependent-wheel targets derived from one word selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpinTargets {
    /// Item index for each score wheel, in dimension order.
    pub wheel_indices: [usize; SCORE_DIMENSIONS],
    pub total: u32,
}

#[derive(Clone, Debug)]
pub struct WordTable {
    domain: ScoreDomain,
    entries: Vec<WordEntry>,
}

impl WordTable {
    /// Build from feed entries, skipping (with a warning) the unusable ones.
    /// An empty result degrades to the built-in fallback list.
    pub fn from_raw(raws: &[RawWordEntry], domain: ScoreDomain) -> Self {
        let mut entries = Vec::with_capacity(raws.len());
        for raw in raws {
            match WordEntry::from_raw(raw, domain) {
                Ok(entry) => entries.push(entry),
                Err(e) => log::warn!("skipping feed entry: {}", e),
            }
        }
        if entries.is_empty() {
            log::warn!("word feed empty or unusable, using fallback list");
            return Self::fallback(domain);
        }
        Self { domain, entries }
    }

    /// Small built-in list so the widget stays functional without a feed.
    pub fn fallback(domain: ScoreDomain) -> Self {
        let raw = |label: &str, scores: [i64; SCORE_DIMENSIONS]| WordEntry {
            label: label.to_string(),
            scores: scores.map(|s| domain.clamp(s)),
            explanations: Default::default(),
        };
        Self {
            domain,
            entries: vec![
                raw("PR Cycle Time", [8, 7, 6, 8]),
                raw("Deployment Frequency", [8, 6, 7, 9]),
                raw("Defect Escape Rate", [5, 8, 8, 7]),
                raw("Test Coverage Delta", [8, 6, 7, 8]),
            ],
        }
    }

    /// One-time load ordering: total descending, ties by label ascending.
    pub fn sort_by_total(&mut self) {
        self.entries
            .sort_by(|a, b| b.total().cmp(&a.total()).then(a.label.cmp(&b.label)));
    }

    #[inline]
    pub fn domain(&self) -> ScoreDomain {
        self.domain
    }

    #[inline]
    pub fn entries(&self) -> &[WordEntry] {
        &self.entries
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&WordEntry> {
        self.entries.get(index)
    }

    pub fn labels(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.label.clone()).collect()
    }

    /// Smallest possible total for this domain.
    #[inline]
    pub fn min_total(&self) -> u32 {
        SCORE_DIMENSIONS as u32 * self.domain.min as u32
    }

    /// Largest possible total for this domain.
    #[inline]
    pub fn max_total(&self) -> u32 {
        SCORE_DIMENSIONS as u32 * self.domain.max as u32
    }

    /// Dependent-wheel indices and total for the word at `index`.
    pub fn spin_targets(&self, index: usize) -> Option<SpinTargets> {
        let entry = self.entries.get(index)?;
        let mut wheel_indices = [0usize; SCORE_DIMENSIONS];
        for (slot, &score) in wheel_indices.iter_mut().zip(entry.scores.iter()) {
            *slot = self.domain.score_index(score);
        }
        Some(SpinTargets {
            wheel_indices,
            total: entry.total(),
        })
    }
}
