use std::path::Path;

use crate::error::AlignmentError;

/// Scoring constants and fuzzy-match thresholds for the alignment engine.
///
/// The defaults are empirical: they were tuned against short recitation
/// attempts (a handful of verses, utterances of a few dozen tokens) and are
/// not known to generalize beyond that regime, which is why they live in a
/// config instead of being hard-coded.
#[derive(Debug, Clone, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlignConfig {
    /// Reward added on the diagonal when target and spoken token match.
    #[serde(default = "default_match_score")]
    pub match_score: i32,
    /// Penalty added on the diagonal when they do not match (substitution).
    #[serde(default = "default_mismatch_penalty")]
    pub mismatch_penalty: i32,
    /// Penalty per unaligned element on either axis (omission or insertion).
    #[serde(default = "default_gap_penalty")]
    pub gap_penalty: i32,
    /// Normalized character count above which the wider edit-distance
    /// tolerance applies. Short Arabic words (2-4 letters) are common enough
    /// that a tolerance of 2 would make unrelated ones indistinguishable.
    #[serde(default = "default_long_word_len")]
    pub long_word_len: usize,
    #[serde(default = "default_long_word_tolerance")]
    pub long_word_tolerance: usize,
    #[serde(default = "default_short_word_tolerance")]
    pub short_word_tolerance: usize,
}

fn default_match_score() -> i32 {
    10
}
fn default_mismatch_penalty() -> i32 {
    -3
}
fn default_gap_penalty() -> i32 {
    -2
}
fn default_long_word_len() -> usize {
    5
}
fn default_long_word_tolerance() -> usize {
    2
}
fn default_short_word_tolerance() -> usize {
    1
}

impl Default for AlignConfig {
    fn default() -> Self {
        Self {
            match_score: default_match_score(),
            mismatch_penalty: default_mismatch_penalty(),
            gap_penalty: default_gap_penalty(),
            long_word_len: default_long_word_len(),
            long_word_tolerance: default_long_word_tolerance(),
            short_word_tolerance: default_short_word_tolerance(),
        }
    }
}

impl AlignConfig {
    pub fn load(path: &Path) -> Result<Self, AlignmentError> {
        let data =
            std::fs::read_to_string(path).map_err(|e| AlignmentError::io("read align config", e))?;
        serde_json::from_str(&data).map_err(|e| AlignmentError::json("parse align config", e))
    }

    pub fn validate(&self) -> Result<(), AlignmentError> {
        if self.match_score <= 0 {
            return Err(AlignmentError::invalid_input(format!(
                "match score must be positive, got {}",
                self.match_score
            )));
        }
        if self.match_score <= self.mismatch_penalty {
            return Err(AlignmentError::invalid_input(format!(
                "match score ({}) must exceed mismatch penalty ({})",
                self.match_score, self.mismatch_penalty
            )));
        }
        if self.gap_penalty >= 0 {
            return Err(AlignmentError::invalid_input(format!(
                "gap penalty must be negative, got {}",
                self.gap_penalty
            )));
        }
        if self.short_word_tolerance > self.long_word_tolerance {
            return Err(AlignmentError::invalid_input(format!(
                "short-word tolerance ({}) exceeds long-word tolerance ({})",
                self.short_word_tolerance, self.long_word_tolerance
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn align_config_defaults() {
        let config = AlignConfig::default();
        assert_eq!(config.match_score, 10);
        assert_eq!(config.mismatch_penalty, -3);
        assert_eq!(config.gap_penalty, -2);
        assert_eq!(config.long_word_len, 5);
        assert_eq!(config.long_word_tolerance, 2);
        assert_eq!(config.short_word_tolerance, 1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let config: AlignConfig = serde_json::from_str(r#"{"matchScore": 12}"#).expect("valid json");
        assert_eq!(config.match_score, 12);
        assert_eq!(config.gap_penalty, -2);
        assert_eq!(config.long_word_len, 5);
    }

    #[test]
    fn validate_rejects_non_negative_gap() {
        let config = AlignConfig {
            gap_penalty: 0,
            ..AlignConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_non_positive_match_score() {
        for match_score in [0, -1] {
            let config = AlignConfig {
                match_score,
                ..AlignConfig::default()
            };
            assert!(
                config.validate().is_err(),
                "match score {match_score} must be rejected"
            );
        }
    }

    #[test]
    fn validate_rejects_match_below_mismatch() {
        let config = AlignConfig {
            match_score: 2,
            mismatch_penalty: 3,
            ..AlignConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_inverted_tolerances() {
        let config = AlignConfig {
            short_word_tolerance: 3,
            ..AlignConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn load_fails_on_missing_file() {
        let result = AlignConfig::load(Path::new("/nonexistent/align.json"));
        assert!(result.is_err());
    }
}
