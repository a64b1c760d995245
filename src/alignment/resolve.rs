use crate::alignment::matrix::{ScoreGrid, DIAG, UP};
use crate::pipeline::traits::TokenMatcher;
use crate::types::{AlignmentStep, StepKind, Verse};

/// Walk the backpointers from (n, m) to (0, 0), resolving eligible words and
/// collecting the tagged path.
///
/// `coords[i]` maps flattened target index `i` to (verse index, word index)
/// inside `verses`, which is the engine's working copy. The precedence at
/// boundaries mirrors the fill: diagonal first, then the skipped-target gap.
/// Step kinds are recorded for every cell visited, eligible or not; only
/// mutation is gated on eligibility.
pub(crate) fn backtrack_resolve(
    grid: &ScoreGrid,
    verses: &mut [Verse],
    coords: &[(usize, usize)],
    targets_norm: &[String],
    spoken_raw: &[String],
    spoken_norm: &[String],
    matcher: &dyn TokenMatcher,
) -> Vec<AlignmentStep> {
    let mut steps = Vec::with_capacity(grid.n + grid.m);
    let mut i = grid.n;
    let mut j = grid.m;

    while i > 0 || j > 0 {
        if i > 0 && j > 0 && grid.step(i, j) == DIAG {
            // Target word aligned to a spoken token; re-evaluate the same
            // predicate the fill used to decide correct versus substituted.
            let matched = matcher.is_match(&targets_norm[i - 1], &spoken_norm[j - 1]);
            let (vi, wi) = coords[i - 1];
            let word = &mut verses[vi].words[wi];
            if word.is_eligible() {
                if matched {
                    word.mark_correct();
                } else {
                    word.mark_error(&spoken_raw[j - 1]);
                }
            }
            steps.push(AlignmentStep {
                kind: if matched {
                    StepKind::Match
                } else {
                    StepKind::Mismatch
                },
                target_index: Some(i - 1),
                spoken_index: Some(j - 1),
            });
            i -= 1;
            j -= 1;
        } else if i > 0 && (j == 0 || grid.step(i, j) == UP) {
            // Target word omitted by the speaker. Resetting here matters: a
            // word resolved on an earlier pass must revert if this fuller
            // transcript no longer covers it.
            let (vi, wi) = coords[i - 1];
            let word = &mut verses[vi].words[wi];
            if word.is_eligible() {
                word.reset_resolution();
            }
            steps.push(AlignmentStep {
                kind: StepKind::Omission,
                target_index: Some(i - 1),
                spoken_index: None,
            });
            i -= 1;
        } else {
            // Extra spoken token; no target word is touched.
            steps.push(AlignmentStep {
                kind: StepKind::Insertion,
                target_index: None,
                spoken_index: Some(j - 1),
            });
            j -= 1;
        }
    }

    steps.reverse();
    steps
}
