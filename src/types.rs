use serde::{Deserialize, Serialize};

/// Smallest alignment unit. Field names serialize in camelCase so session
/// files round-trip with the app that produces them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Word {
    /// Stable identifier, opaque to the engine.
    pub id: String,
    /// Canonical surface form with diacritics; source of truth for display.
    pub text: String,
    /// Concealed from the learner; only hidden, unpinned words are eligible
    /// for alignment-driven mutation.
    #[serde(default)]
    pub is_hidden: bool,
    /// Lock flag: pinned words are excluded from mutation even when hidden.
    #[serde(default)]
    pub is_pinned: bool,
    /// Last value attributed to this word: the canonical text on success,
    /// the raw spoken token on failure, empty when unresolved.
    #[serde(default)]
    pub user_input: String,
    #[serde(default)]
    pub is_correct: bool,
    #[serde(default)]
    pub is_error: bool,
}

impl Word {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            is_hidden: false,
            is_pinned: false,
            user_input: String::new(),
            is_correct: false,
            is_error: false,
        }
    }

    pub fn is_eligible(&self) -> bool {
        self.is_hidden && !self.is_pinned
    }

    pub fn state(&self) -> WordState {
        if self.is_correct {
            WordState::Correct
        } else if self.is_error {
            WordState::Error
        } else {
            WordState::Unresolved
        }
    }

    /// Confirmed correct: echo the canonical word, not the recognized token.
    pub(crate) fn mark_correct(&mut self) {
        self.is_correct = true;
        self.is_error = false;
        self.user_input = self.text.clone();
    }

    /// Wrong word heard at this position: surface exactly what was heard.
    pub(crate) fn mark_error(&mut self, heard: &str) {
        self.is_correct = false;
        self.is_error = true;
        self.user_input = heard.to_string();
    }

    pub(crate) fn reset_resolution(&mut self) {
        self.user_input.clear();
        self.is_correct = false;
        self.is_error = false;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WordState {
    Unresolved,
    Correct,
    Error,
}

/// Ordered sequence of words; `verse_number` is an external reference key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Verse {
    pub verse_number: u32,
    pub words: Vec<Word>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StepKind {
    /// Diagonal step, fuzzy predicate held.
    Match,
    /// Diagonal step, predicate failed: a substitution.
    Mismatch,
    /// Target word skipped by the speaker (gap on the spoken axis).
    Omission,
    /// Extra spoken token with no target counterpart (gap on the target axis).
    Insertion,
}

/// One step of the backtrack path, head-to-tail. Indices point into the
/// flattened target word list and the spoken token list respectively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlignmentStep {
    pub kind: StepKind,
    pub target_index: Option<usize>,
    pub spoken_index: Option<usize>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_state_from_flags() {
        let mut word = Word::new("w1", "طه");
        assert_eq!(word.state(), WordState::Unresolved);
        word.is_correct = true;
        assert_eq!(word.state(), WordState::Correct);
        word.is_correct = false;
        word.is_error = true;
        assert_eq!(word.state(), WordState::Error);
    }

    #[test]
    fn eligibility_requires_hidden_and_unpinned() {
        let mut word = Word::new("w1", "طه");
        assert!(!word.is_eligible());
        word.is_hidden = true;
        assert!(word.is_eligible());
        word.is_pinned = true;
        assert!(!word.is_eligible());
    }

    #[test]
    fn mark_correct_echoes_canonical_text() {
        let mut word = Word::new("w1", "قَدَّرَ");
        word.is_hidden = true;
        word.mark_correct();
        assert_eq!(word.user_input, "قَدَّرَ");
        assert!(word.is_correct);
        assert!(!word.is_error);
    }

    #[test]
    fn mark_error_surfaces_heard_token() {
        let mut word = Word::new("w1", "قَدَّرَ");
        word.mark_error("كتب");
        assert_eq!(word.user_input, "كتب");
        assert!(word.is_error);
    }

    #[test]
    fn word_serde_uses_camel_case() {
        let json = r#"{"id":"1-0","text":"طه","isHidden":true,"isPinned":false}"#;
        let word: Word = serde_json::from_str(json).expect("valid word json");
        assert!(word.is_hidden);
        assert!(word.user_input.is_empty());
        let out = serde_json::to_string(&word).expect("serialize word");
        assert!(out.contains("isHidden"));
        assert!(out.contains("userInput"));
    }
}
