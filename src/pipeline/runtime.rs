use crate::alignment::matrix::fill_grid;
use crate::alignment::resolve::backtrack_resolve;
use crate::alignment::strict::resolve_in_order;
use crate::config::AlignConfig;
use crate::pipeline::traits::{Normalizer, TokenMatcher};
use crate::types::{AlignmentStep, Verse};

/// Full alignment outcome: the resolved copy of the target structure plus
/// the tagged backtrack path that produced it.
#[derive(Debug, Clone)]
pub struct AlignmentOutcome {
    pub verses: Vec<Verse>,
    pub steps: Vec<AlignmentStep>,
}

/// Reconciles a speech-recognition transcript against canonical verse text.
///
/// Each call is independent and stateless: the full spoken-token list for the
/// attempt is re-aligned from scratch, the matrices are call-local, and the
/// caller's input is never mutated. Concurrent calls on different inputs
/// share nothing.
pub struct RecitationAligner {
    config: AlignConfig,
    normalizer: Box<dyn Normalizer>,
    matcher: Box<dyn TokenMatcher>,
}

pub(crate) struct RecitationAlignerParts {
    pub config: AlignConfig,
    pub normalizer: Box<dyn Normalizer>,
    pub matcher: Box<dyn TokenMatcher>,
}

impl RecitationAligner {
    pub(crate) fn from_parts(parts: RecitationAlignerParts) -> Self {
        Self {
            config: parts.config,
            normalizer: parts.normalizer,
            matcher: parts.matcher,
        }
    }

    /// Globally align `spoken` against `target`, returning a resolved copy.
    ///
    /// An empty target yields an empty result with no computation; an empty
    /// token list drives every eligible word back to the unresolved state.
    pub fn align<S: AsRef<str>>(&self, target: &[Verse], spoken: &[S]) -> Vec<Verse> {
        self.align_with_steps(target, spoken).verses
    }

    /// Like [`align`](Self::align), but also returns the tagged path for
    /// reporting and diagnosis.
    pub fn align_with_steps<S: AsRef<str>>(
        &self,
        target: &[Verse],
        spoken: &[S],
    ) -> AlignmentOutcome {
        let mut verses: Vec<Verse> = target.to_vec();
        if verses.is_empty() {
            return AlignmentOutcome {
                verses,
                steps: Vec::new(),
            };
        }

        // Flatten target words, keeping (verse, word) coordinates, and
        // normalize each side exactly once. The fill and the backtrack then
        // see identical normalized forms by construction.
        let mut coords = Vec::new();
        let mut targets_norm = Vec::new();
        let mut eligible = 0usize;
        for (vi, verse) in verses.iter().enumerate() {
            for (wi, word) in verse.words.iter().enumerate() {
                coords.push((vi, wi));
                targets_norm.push(self.normalizer.normalize(&word.text));
                if word.is_eligible() {
                    eligible += 1;
                }
            }
        }

        let spoken_raw: Vec<String> = spoken.iter().map(|s| s.as_ref().to_string()).collect();
        let spoken_norm: Vec<String> = spoken_raw
            .iter()
            .map(|s| self.normalizer.normalize(s))
            .collect();

        tracing::debug!(
            target_words = targets_norm.len(),
            spoken_tokens = spoken_norm.len(),
            eligible,
            "aligning recitation attempt"
        );
        if eligible == 0 {
            tracing::warn!("alignment target has no eligible words; output will pass through unchanged");
        }

        let grid = fill_grid(&targets_norm, &spoken_norm, self.matcher.as_ref(), &self.config);
        let steps = backtrack_resolve(
            &grid,
            &mut verses,
            &coords,
            &targets_norm,
            &spoken_raw,
            &spoken_norm,
            self.matcher.as_ref(),
        );

        AlignmentOutcome { verses, steps }
    }

    /// Strict in-order resolution for live input: each token settles the
    /// first open eligible slot by exact normalized comparison.
    pub fn align_strict<S: AsRef<str>>(&self, target: &[Verse], spoken: &[S]) -> Vec<Verse> {
        let mut verses: Vec<Verse> = target.to_vec();
        let spoken_raw: Vec<String> = spoken.iter().map(|s| s.as_ref().to_string()).collect();
        resolve_in_order(&mut verses, &spoken_raw, self.normalizer.as_ref());
        verses
    }

    pub fn config(&self) -> &AlignConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::builder::RecitationAlignerBuilder;
    use crate::types::Word;

    fn aligner() -> RecitationAligner {
        RecitationAlignerBuilder::new(AlignConfig::default())
            .build()
            .expect("default config builds")
    }

    #[test]
    fn empty_target_short_circuits() {
        let outcome = aligner().align_with_steps(&[], &["سبح"]);
        assert!(outcome.verses.is_empty());
        assert!(outcome.steps.is_empty());
    }

    #[test]
    fn input_is_never_mutated() {
        let target = vec![Verse {
            verse_number: 1,
            words: vec![Word {
                is_hidden: true,
                ..Word::new("a", "طه")
            }],
        }];
        let snapshot = target.clone();
        let resolved = aligner().align(&target, &["طه"]);
        assert_eq!(target, snapshot);
        assert!(resolved[0].words[0].is_correct);
    }

    #[test]
    fn empty_spoken_resets_eligible_words() {
        let mut word = Word::new("a", "طه");
        word.is_hidden = true;
        word.is_correct = true;
        word.user_input = "طه".to_string();
        let target = vec![Verse {
            verse_number: 1,
            words: vec![word],
        }];
        let resolved = aligner().align(&target, &[] as &[&str]);
        assert!(!resolved[0].words[0].is_correct);
        assert!(resolved[0].words[0].user_input.is_empty());
    }
}
