use crate::pipeline::traits::Normalizer;
use crate::types::{Verse, WordState};

/// Grade typed answers: each eligible word is correct iff its typed input
/// normalizes to the same string as the canonical text. The typed input is
/// left as the learner wrote it, in both outcomes.
pub fn check_written(verses: &[Verse], normalizer: &dyn Normalizer) -> Vec<Verse> {
    verses
        .iter()
        .map(|verse| Verse {
            verse_number: verse.verse_number,
            words: verse
                .words
                .iter()
                .map(|word| {
                    let mut word = word.clone();
                    if word.is_eligible() {
                        let matched = normalizer.normalize(&word.user_input)
                            == normalizer.normalize(&word.text);
                        word.is_correct = matched;
                        word.is_error = !matched;
                    }
                    word
                })
                .collect(),
        })
        .collect()
}

/// State counts over the eligible words of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundProgress {
    pub hidden: usize,
    pub correct: usize,
    pub errors: usize,
    pub unresolved: usize,
}

impl RoundProgress {
    /// A round with nothing hidden counts as complete, matching the level
    /// gate it feeds: advancement is only blocked by open hidden words.
    pub fn is_complete(&self) -> bool {
        self.correct == self.hidden
    }
}

pub fn round_progress(verses: &[Verse]) -> RoundProgress {
    let mut progress = RoundProgress {
        hidden: 0,
        correct: 0,
        errors: 0,
        unresolved: 0,
    };
    for word in verses.iter().flat_map(|v| v.words.iter()) {
        if !word.is_eligible() {
            continue;
        }
        progress.hidden += 1;
        match word.state() {
            WordState::Correct => progress.correct += 1,
            WordState::Error => progress.errors += 1,
            WordState::Unresolved => progress.unresolved += 1,
        }
    }
    progress
}
