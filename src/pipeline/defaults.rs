use crate::alignment::distance::{fuzzy_match, FuzzyParams};
use crate::alignment::normalize::normalize_arabic;
use crate::config::AlignConfig;
use crate::pipeline::traits::{Normalizer, TokenMatcher};

pub struct ArabicNormalizer;

impl Normalizer for ArabicNormalizer {
    fn normalize(&self, text: &str) -> String {
        normalize_arabic(text)
    }
}

/// Edit-distance matcher with the length-scaled tolerance from the config.
pub struct LevenshteinMatcher {
    params: FuzzyParams,
}

impl LevenshteinMatcher {
    pub fn from_config(config: &AlignConfig) -> Self {
        Self {
            params: FuzzyParams::from_config(config),
        }
    }
}

impl TokenMatcher for LevenshteinMatcher {
    fn is_match(&self, target: &str, spoken: &str) -> bool {
        fuzzy_match(target, spoken, self.params)
    }
}
