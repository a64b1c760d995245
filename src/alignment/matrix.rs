use crate::config::AlignConfig;
use crate::pipeline::traits::TokenMatcher;

pub(crate) const DIAG: u8 = 0;
pub(crate) const UP: u8 = 1;
pub(crate) const LEFT: u8 = 2;

/// Score and backpointer matrices over (target words) x (spoken tokens),
/// stored as flat row-major buffers owned by the call.
pub(crate) struct ScoreGrid {
    pub(crate) n: usize,
    pub(crate) m: usize,
    score: Vec<i32>,
    path: Vec<u8>,
}

impl ScoreGrid {
    #[inline]
    fn idx(&self, i: usize, j: usize) -> usize {
        i * (self.m + 1) + j
    }

    pub(crate) fn step(&self, i: usize, j: usize) -> u8 {
        self.path[self.idx(i, j)]
    }

    #[cfg(test)]
    pub(crate) fn score_at(&self, i: usize, j: usize) -> i32 {
        self.score[self.idx(i, j)]
    }
}

/// Needleman-Wunsch fill over normalized target words and spoken tokens.
///
/// Boundaries charge the gap penalty per unaligned element on either axis, so
/// skipped target words and extra spoken tokens are equally costly. The
/// diagonal rewards a fuzzy match and penalizes a forced substitution.
pub(crate) fn fill_grid(
    targets: &[String],
    spoken: &[String],
    matcher: &dyn TokenMatcher,
    config: &AlignConfig,
) -> ScoreGrid {
    let n = targets.len();
    let m = spoken.len();
    let width = m + 1;

    let mut score = vec![0i32; (n + 1) * width];
    let mut path = vec![DIAG; (n + 1) * width];

    for i in 0..=n {
        score[i * width] = config.gap_penalty * i as i32;
    }
    for j in 0..=m {
        score[j] = config.gap_penalty * j as i32;
    }

    for i in 1..=n {
        for j in 1..=m {
            let matched = matcher.is_match(&targets[i - 1], &spoken[j - 1]);
            let match_score = if matched {
                config.match_score
            } else {
                config.mismatch_penalty
            };

            let diag = score[(i - 1) * width + j - 1] + match_score;
            let up = score[(i - 1) * width + j] + config.gap_penalty;
            let left = score[i * width + j - 1] + config.gap_penalty;

            // Tie-break order is DIAG, then UP, then LEFT. Reordering these
            // comparisons changes which alignment wins on tied scores, which
            // changes word verdicts; keep the order exactly as written.
            let (best, step) = if diag >= up && diag >= left {
                (diag, DIAG)
            } else if up >= left {
                (up, UP)
            } else {
                (left, LEFT)
            };

            score[i * width + j] = best;
            path[i * width + j] = step;
        }
    }

    ScoreGrid { n, m, score, path }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::defaults::LevenshteinMatcher;

    fn norm(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    fn default_grid(targets: &[&str], spoken: &[&str]) -> ScoreGrid {
        let config = AlignConfig::default();
        let matcher = LevenshteinMatcher::from_config(&config);
        fill_grid(&norm(targets), &norm(spoken), &matcher, &config)
    }

    #[test]
    fn boundary_rows_charge_gap_penalty() {
        let grid = default_grid(&["سبح", "ربك"], &["سبح"]);
        assert_eq!(grid.score_at(0, 0), 0);
        assert_eq!(grid.score_at(1, 0), -2);
        assert_eq!(grid.score_at(2, 0), -4);
        assert_eq!(grid.score_at(0, 1), -2);
    }

    #[test]
    fn exact_transcript_scores_full_diagonal() {
        let grid = default_grid(&["سبح", "اسم", "ربك"], &["سبح", "اسم", "ربك"]);
        assert_eq!(grid.score_at(3, 3), 30);
        assert_eq!(grid.step(1, 1), DIAG);
        assert_eq!(grid.step(2, 2), DIAG);
        assert_eq!(grid.step(3, 3), DIAG);
    }

    #[test]
    fn empty_spoken_axis_leaves_boundary_only() {
        let grid = default_grid(&["سبح", "ربك"], &[]);
        assert_eq!(grid.n, 2);
        assert_eq!(grid.m, 0);
        assert_eq!(grid.score_at(2, 0), -4);
    }

    #[test]
    fn ties_prefer_diagonal_then_up() {
        // A mismatch diagonal (-3) beats neither gap chain (-4) here, so DIAG
        // wins outright; force a genuine tie with a custom scoring instead.
        let config = AlignConfig {
            match_score: 10,
            mismatch_penalty: -4,
            gap_penalty: -2,
            ..AlignConfig::default()
        };
        let matcher = LevenshteinMatcher::from_config(&config);
        // Disjoint single words: diag = 0 + (-4), up = -2 + (-2), left = -2 + (-2).
        let grid = fill_grid(&norm(&["طه"]), &norm(&["كلا"]), &matcher, &config);
        assert_eq!(grid.score_at(1, 1), -4);
        assert_eq!(grid.step(1, 1), DIAG);

        // With the diagonal strictly worse, UP must beat LEFT on their tie.
        let config = AlignConfig {
            mismatch_penalty: -5,
            ..config
        };
        let matcher = LevenshteinMatcher::from_config(&config);
        let grid = fill_grid(&norm(&["طه"]), &norm(&["كلا"]), &matcher, &config);
        assert_eq!(grid.score_at(1, 1), -4);
        assert_eq!(grid.step(1, 1), UP);
    }

    #[test]
    fn insertion_beats_forced_mismatch_pair() {
        // Target "طه", spoken "يا طه": consuming "يا" as an insertion then
        // matching diagonally scores -2 + 10 = 8.
        let grid = default_grid(&["طه"], &["يا", "طه"]);
        assert_eq!(grid.score_at(1, 2), 8);
        assert_eq!(grid.step(1, 2), DIAG);
        assert_eq!(grid.step(1, 1), DIAG);
    }
}
