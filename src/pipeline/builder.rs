use crate::config::AlignConfig;
use crate::error::AlignmentError;
use crate::pipeline::defaults::{ArabicNormalizer, LevenshteinMatcher};
use crate::pipeline::runtime::{RecitationAligner, RecitationAlignerParts};
use crate::pipeline::traits::{Normalizer, TokenMatcher};

pub struct RecitationAlignerBuilder {
    config: AlignConfig,
    normalizer: Option<Box<dyn Normalizer>>,
    matcher: Option<Box<dyn TokenMatcher>>,
}

impl RecitationAlignerBuilder {
    pub fn new(config: AlignConfig) -> Self {
        Self {
            config,
            normalizer: None,
            matcher: None,
        }
    }

    pub fn with_normalizer(mut self, normalizer: Box<dyn Normalizer>) -> Self {
        self.normalizer = Some(normalizer);
        self
    }

    pub fn with_matcher(mut self, matcher: Box<dyn TokenMatcher>) -> Self {
        self.matcher = Some(matcher);
        self
    }

    pub fn build(self) -> Result<RecitationAligner, AlignmentError> {
        self.config.validate()?;

        let matcher = self
            .matcher
            .unwrap_or_else(|| Box::new(LevenshteinMatcher::from_config(&self.config)));

        Ok(RecitationAligner::from_parts(RecitationAlignerParts {
            config: self.config,
            normalizer: self.normalizer.unwrap_or_else(|| Box::new(ArabicNormalizer)),
            matcher,
        }))
    }
}
