//! Accuracy classification for incoming fixes.
//!
//! Presentation-side filtering only: the engine accepts any fix. Drivers
//! use this to decide when to enable "Drop Pin" and what to show while
//! the receiver is still acquiring.

use super::types::GeoFix;
use serde::{Deserialize, Serialize};

/// Accuracy at or below which a fix counts as locked.
pub const GOOD_ACCURACY_M: f64 = 6.0;
/// Accuracy at or below which a fix is still worth displaying.
pub const ACCEPTABLE_ACCURACY_M: f64 = 12.0;

const DEFAULT_REQUIRED_STREAK: u32 = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FixQuality {
    Locked,
    Acceptable,
    Poor,
    /// The receiver did not report an accuracy.
    Unknown,
}

impl FixQuality {
    pub fn classify(fix: &GeoFix) -> Self {
        match fix.accuracy_m {
            None => Self::Unknown,
            Some(acc) if acc <= GOOD_ACCURACY_M => Self::Locked,
            Some(acc) if acc <= ACCEPTABLE_ACCURACY_M => Self::Acceptable,
            // NaN lands here too.
            Some(_) => Self::Poor,
        }
    }
}

/// Counts consecutive locked fixes.
#[derive(Clone, Debug)]
pub struct FixQualityTracker {
    good_streak: u32,
    required_streak: u32,
    last_quality: Option<FixQuality>,
}

impl Default for FixQualityTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl FixQualityTracker {
    pub fn new() -> Self {
        Self::with_required_streak(DEFAULT_REQUIRED_STREAK)
    }

    pub fn with_required_streak(required_streak: u32) -> Self {
        Self {
            good_streak: 0,
            required_streak,
            last_quality: None,
        }
    }

    /// Feed the latest fix (or its absence) and get its classification.
    pub fn observe(&mut self, fix: Option<&GeoFix>) -> Option<FixQuality> {
        let quality = fix.map(FixQuality::classify);
        self.good_streak = match quality {
            Some(FixQuality::Locked) => self.good_streak.saturating_add(1),
            _ => 0,
        };
        if quality != self.last_quality {
            tracing::debug!(?quality, streak = self.good_streak, "fix quality changed");
        }
        self.last_quality = quality;
        quality
    }

    pub fn good_streak(&self) -> u32 {
        self.good_streak
    }

    pub fn last_quality(&self) -> Option<FixQuality> {
        self.last_quality
    }

    /// True once enough consecutive locked fixes have been seen.
    pub fn pin_drop_ready(&self) -> bool {
        self.good_streak >= self.required_streak
    }

    /// Forget everything, e.g. when location updates stop.
    pub fn reset(&mut self) {
        self.good_streak = 0;
        self.last_quality = None;
    }
}
