//! Per-stroke statistics for keyboard learning.
//!
//! Where [`crate::session::TypingSession`] scores whole submissions, the
//! tracker records every individual key press: correct or not, how long it
//! took, which expected keys attract mistakes. The UI reads the summary to
//! drive live feedback panels.

use std::time::Instant;

use ahash::AHashMap;
use serde::Serialize;

/// One recorded keystroke.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StrokeData {
    /// The key the user actually pressed
    pub key: String,
    /// The key they should have pressed
    pub expected_key: String,
    pub is_correct: bool,
    /// Time taken to press the key, in milliseconds
    pub response_time_ms: f64,
}

/// Immediate feedback returned by [`KeystrokeTracker::record_stroke`].
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeFeedback {
    pub is_correct: bool,
    /// Running stroke accuracy after this press, 0..=100
    pub accuracy: f64,
}

/// Correct/total counts for one expected key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct KeyStat {
    pub correct: u32,
    pub total: u32,
}

/// Session-level summary of tracked strokes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrackerSummary {
    pub session_duration_minutes: f64,
    pub total_strokes: u32,
    pub correct_strokes: u32,
    pub incorrect_strokes: u32,
    pub overall_accuracy: f64,
    /// Strokes per minute over the whole session
    pub typing_speed: f64,
    pub average_response_time_ms: f64,
}

/// Records individual keystrokes and derives accuracy statistics.
pub struct KeystrokeTracker {
    session_start: Instant,
    last_stroke: Instant,
    strokes: Vec<StrokeData>,
    correct_strokes: u32,
    incorrect_strokes: u32,
    key_accuracy: AHashMap<String, KeyStat>,
    common_mistakes: AHashMap<String, u32>,
    response_times: Vec<f64>,
}

impl KeystrokeTracker {
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            session_start: now,
            last_stroke: now,
            strokes: Vec::new(),
            correct_strokes: 0,
            incorrect_strokes: 0,
            key_accuracy: AHashMap::new(),
            common_mistakes: AHashMap::new(),
            response_times: Vec::new(),
        }
    }

    /// Record a single keystroke against the key that was expected.
    ///
    /// Comparison is case-insensitive. When `response_time_ms` is `None`
    /// the time since the previous recorded stroke is used.
    pub fn record_stroke(
        &mut self,
        pressed_key: &str,
        expected_key: &str,
        response_time_ms: Option<f64>,
    ) -> StrokeFeedback {
        let response_time_ms = response_time_ms.unwrap_or_else(|| {
            let now = Instant::now();
            let elapsed = now.duration_since(self.last_stroke).as_secs_f64() * 1000.0;
            self.last_stroke = now;
            elapsed
        });

        let is_correct = pressed_key.to_lowercase() == expected_key.to_lowercase();

        self.strokes.push(StrokeData {
            key: pressed_key.to_string(),
            expected_key: expected_key.to_string(),
            is_correct,
            response_time_ms,
        });

        if is_correct {
            self.correct_strokes += 1;
        } else {
            self.incorrect_strokes += 1;
            let mistake = format!("{expected_key} -> {pressed_key}");
            *self.common_mistakes.entry(mistake).or_insert(0) += 1;
        }

        let stat = self
            .key_accuracy
            .entry(expected_key.to_string())
            .or_default();
        stat.total += 1;
        if is_correct {
            stat.correct += 1;
        }

        self.response_times.push(response_time_ms);

        StrokeFeedback {
            is_correct,
            accuracy: self.accuracy(),
        }
    }

    /// Total strokes recorded so far.
    pub fn total_strokes(&self) -> u32 {
        self.correct_strokes + self.incorrect_strokes
    }

    pub fn correct_strokes(&self) -> u32 {
        self.correct_strokes
    }

    pub fn incorrect_strokes(&self) -> u32 {
        self.incorrect_strokes
    }

    /// Running stroke accuracy, 0..=100; 0 before any stroke.
    pub fn accuracy(&self) -> f64 {
        let total = self.total_strokes();
        if total == 0 {
            return 0.0;
        }
        f64::from(self.correct_strokes) / f64::from(total) * 100.0
    }

    /// All recorded strokes, oldest first.
    pub fn strokes(&self) -> &[StrokeData] {
        &self.strokes
    }

    /// Correct/total counts keyed by expected key.
    pub fn key_stats(&self) -> &AHashMap<String, KeyStat> {
        &self.key_accuracy
    }

    /// Mistake counts keyed by `"expected -> pressed"`.
    pub fn common_mistakes(&self) -> &AHashMap<String, u32> {
        &self.common_mistakes
    }

    /// Comprehensive session summary.
    pub fn summary(&self) -> TrackerSummary {
        let duration_secs = self.session_start.elapsed().as_secs_f64();
        let total = self.total_strokes();

        let average_response_time_ms = if self.response_times.is_empty() {
            0.0
        } else {
            self.response_times.iter().sum::<f64>() / self.response_times.len() as f64
        };

        let typing_speed = if duration_secs > 0.0 {
            f64::from(total) / (duration_secs / 60.0)
        } else {
            0.0
        };

        TrackerSummary {
            session_duration_minutes: duration_secs / 60.0,
            total_strokes: total,
            correct_strokes: self.correct_strokes,
            incorrect_strokes: self.incorrect_strokes,
            overall_accuracy: self.accuracy(),
            typing_speed,
            average_response_time_ms,
        }
    }

    /// Discard all recorded strokes and restart the session clock.
    pub fn reset(&mut self) {
        let now = Instant::now();
        self.session_start = now;
        self.last_stroke = now;
        self.strokes.clear();
        self.correct_strokes = 0;
        self.incorrect_strokes = 0;
        self.key_accuracy.clear();
        self.common_mistakes.clear();
        self.response_times.clear();
    }
}

impl Default for KeystrokeTracker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_state() {
        let tracker = KeystrokeTracker::new();
        assert_eq!(tracker.total_strokes(), 0);
        assert_eq!(tracker.accuracy(), 0.0);
        assert!(tracker.strokes().is_empty());
    }

    #[test]
    fn correct_stroke_recorded() {
        let mut tracker = KeystrokeTracker::new();
        let feedback = tracker.record_stroke("a", "a", Some(100.0));
        assert!(feedback.is_correct);
        assert_eq!(tracker.total_strokes(), 1);
        assert_eq!(tracker.correct_strokes(), 1);
        assert_eq!(tracker.incorrect_strokes(), 0);
    }

    #[test]
    fn incorrect_stroke_counts_mistake() {
        let mut tracker = KeystrokeTracker::new();
        let feedback = tracker.record_stroke("b", "a", Some(100.0));
        assert!(!feedback.is_correct);
        assert_eq!(tracker.incorrect_strokes(), 1);
        assert_eq!(tracker.common_mistakes().get("a -> b"), Some(&1));
    }

    #[test]
    fn match_is_case_insensitive() {
        let mut tracker = KeystrokeTracker::new();
        let feedback = tracker.record_stroke("A", "a", Some(100.0));
        assert!(feedback.is_correct);
    }

    #[test]
    fn accuracy_tracks_ratio() {
        let mut tracker = KeystrokeTracker::new();
        tracker.record_stroke("a", "a", Some(100.0));
        tracker.record_stroke("x", "b", Some(100.0));
        assert_eq!(tracker.accuracy(), 50.0);
    }

    #[test]
    fn key_accuracy_tracked_per_expected_key() {
        let mut tracker = KeystrokeTracker::new();
        tracker.record_stroke("a", "a", Some(100.0));
        tracker.record_stroke("x", "a", Some(100.0));
        let stat = tracker.key_stats().get("a").unwrap();
        assert_eq!(stat.total, 2);
        assert_eq!(stat.correct, 1);
    }

    #[test]
    fn response_time_auto_calculated_when_absent() {
        let mut tracker = KeystrokeTracker::new();
        tracker.record_stroke("a", "a", None);
        assert_eq!(tracker.strokes().len(), 1);
        assert!(tracker.strokes()[0].response_time_ms >= 0.0);
    }

    #[test]
    fn summary_averages_response_times() {
        let mut tracker = KeystrokeTracker::new();
        tracker.record_stroke("a", "a", Some(100.0));
        tracker.record_stroke("b", "b", Some(200.0));
        let summary = tracker.summary();
        assert_eq!(summary.total_strokes, 2);
        assert_eq!(summary.overall_accuracy, 100.0);
        assert_eq!(summary.average_response_time_ms, 150.0);
    }

    #[test]
    fn summary_with_no_strokes() {
        let tracker = KeystrokeTracker::new();
        let summary = tracker.summary();
        assert_eq!(summary.total_strokes, 0);
        assert_eq!(summary.average_response_time_ms, 0.0);
    }

    #[test]
    fn reset_clears_everything() {
        let mut tracker = KeystrokeTracker::new();
        tracker.record_stroke("a", "a", Some(100.0));
        tracker.record_stroke("b", "a", Some(100.0));
        tracker.reset();
        assert_eq!(tracker.total_strokes(), 0);
        assert_eq!(tracker.accuracy(), 0.0);
        assert!(tracker.strokes().is_empty());
        assert!(tracker.common_mistakes().is_empty());

        // Usable after reset
        let feedback = tracker.record_stroke("a", "a", Some(100.0));
        assert!(feedback.is_correct);
        assert_eq!(tracker.accuracy(), 100.0);
    }

    #[test]
    fn summary_serializes() {
        let mut tracker = KeystrokeTracker::new();
        tracker.record_stroke("a", "a", Some(100.0));
        let json = serde_json::to_string(&tracker.summary()).unwrap();
        assert!(json.contains("\"total_strokes\":1"));
    }
}
