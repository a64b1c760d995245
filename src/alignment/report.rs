use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::AlignmentError;
use crate::pipeline::runtime::AlignmentOutcome;
use crate::types::{StepKind, Verse, WordState};

const REPORT_SCHEMA_VERSION: u32 = 1;

/// One recitation attempt as serialized by the app: the verse structure plus
/// the spoken tokens recognized for that attempt.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecitationSession {
    pub verses: Vec<Verse>,
    #[serde(default)]
    pub spoken_tokens: Vec<String>,
}

pub fn load_session(path: &Path) -> Result<RecitationSession, AlignmentError> {
    let data =
        std::fs::read_to_string(path).map_err(|e| AlignmentError::io("read session file", e))?;
    serde_json::from_str(&data).map_err(|e| AlignmentError::json("parse session file", e))
}

#[derive(Debug, Clone, Serialize)]
pub struct RecitationReport {
    pub schema_version: u32,
    pub meta: ReportMeta,
    pub verses: Vec<VerseReport>,
    pub aggregates: AggregateCounts,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportMeta {
    pub generated_at: String,
    pub verse_count: usize,
    pub word_count: usize,
    pub token_count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct VerseReport {
    pub verse_number: u32,
    pub words: Vec<WordVerdict>,
}

#[derive(Debug, Clone, Serialize)]
pub struct WordVerdict {
    pub id: String,
    pub text: String,
    pub state: WordState,
    pub user_input: String,
    pub hidden: bool,
    pub pinned: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct AggregateCounts {
    pub eligible: usize,
    pub correct: usize,
    pub errors: usize,
    pub unresolved: usize,
    pub omissions: usize,
    pub insertions: usize,
    /// Correct share of eligible words, 0 when nothing was eligible.
    pub accuracy: f32,
}

/// Summarize one alignment outcome into a serializable report.
pub fn build_report(
    outcome: &AlignmentOutcome,
    token_count: usize,
    generated_at: String,
) -> RecitationReport {
    let mut eligible = 0usize;
    let mut correct = 0usize;
    let mut errors = 0usize;
    let mut unresolved = 0usize;

    let verses: Vec<VerseReport> = outcome
        .verses
        .iter()
        .map(|verse| VerseReport {
            verse_number: verse.verse_number,
            words: verse
                .words
                .iter()
                .map(|word| {
                    if word.is_eligible() {
                        eligible += 1;
                        match word.state() {
                            WordState::Correct => correct += 1,
                            WordState::Error => errors += 1,
                            WordState::Unresolved => unresolved += 1,
                        }
                    }
                    WordVerdict {
                        id: word.id.clone(),
                        text: word.text.clone(),
                        state: word.state(),
                        user_input: word.user_input.clone(),
                        hidden: word.is_hidden,
                        pinned: word.is_pinned,
                    }
                })
                .collect(),
        })
        .collect();

    let omissions = outcome
        .steps
        .iter()
        .filter(|s| s.kind == StepKind::Omission)
        .count();
    let insertions = outcome
        .steps
        .iter()
        .filter(|s| s.kind == StepKind::Insertion)
        .count();

    let accuracy = if eligible == 0 {
        0.0
    } else {
        correct as f32 / eligible as f32
    };

    let word_count = outcome.verses.iter().map(|v| v.words.len()).sum();

    RecitationReport {
        schema_version: REPORT_SCHEMA_VERSION,
        meta: ReportMeta {
            generated_at,
            verse_count: outcome.verses.len(),
            word_count,
            token_count,
        },
        verses,
        aggregates: AggregateCounts {
            eligible,
            correct,
            errors,
            unresolved,
            omissions,
            insertions,
            accuracy,
        },
    }
}
