use crate::config::AlignConfig;

/// Levenshtein edit distance with unit costs, over characters.
///
/// Distances feed exact threshold comparisons, so this is the full O(|a|*|b|)
/// fill with no approximation; only the two active rows are kept.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0usize; b.len() + 1];

    for (i, &ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &cb) in b.iter().enumerate() {
            let substitution = prev[j] + usize::from(ca != cb);
            let deletion = prev[j + 1] + 1;
            let insertion = curr[j] + 1;
            curr[j + 1] = substitution.min(deletion).min(insertion);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

/// Length-scaled tolerance for the fuzzy-match predicate.
#[derive(Debug, Clone, Copy)]
pub struct FuzzyParams {
    pub long_word_len: usize,
    pub long_word_tolerance: usize,
    pub short_word_tolerance: usize,
}

impl FuzzyParams {
    pub fn from_config(config: &AlignConfig) -> Self {
        Self {
            long_word_len: config.long_word_len,
            long_word_tolerance: config.long_word_tolerance,
            short_word_tolerance: config.short_word_tolerance,
        }
    }
}

impl Default for FuzzyParams {
    fn default() -> Self {
        Self::from_config(&AlignConfig::default())
    }
}

/// Fuzzy equivalence of two already-normalized words.
///
/// Exact equality always matches; otherwise the edit distance must stay
/// within a tolerance keyed on the *target* word's character count. The
/// matrix fill and the backtrack both go through this single predicate.
pub fn fuzzy_match(target: &str, spoken: &str, params: FuzzyParams) -> bool {
    if target == spoken {
        return true;
    }
    let tolerance = if target.chars().count() > params.long_word_len {
        params.long_word_tolerance
    } else {
        params.short_word_tolerance
    };
    levenshtein(target, spoken) <= tolerance
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_identical_is_zero() {
        assert_eq!(levenshtein("سبح", "سبح"), 0);
        assert_eq!(levenshtein("", ""), 0);
    }

    #[test]
    fn distance_empty_falls_back_to_other_length() {
        assert_eq!(levenshtein("", "ربك"), 3);
        assert_eq!(levenshtein("الرحمن", ""), 6);
    }

    #[test]
    fn distance_counts_unit_edits() {
        // One substitution.
        assert_eq!(levenshtein("قدر", "فدر"), 1);
        // One insertion.
        assert_eq!(levenshtein("سبح", "يسبح"), 1);
        // Disjoint words.
        assert_eq!(levenshtein("طه", "كلا"), 3);
    }

    #[test]
    fn distance_is_symmetric() {
        assert_eq!(levenshtein("العالمين", "العلمين"), levenshtein("العلمين", "العالمين"));
    }

    #[test]
    fn short_target_tolerates_one_edit() {
        let params = FuzzyParams::default();
        assert!(fuzzy_match("قدر", "فدر", params));
        assert!(!fuzzy_match("طه", "كلا", params));
    }

    #[test]
    fn long_target_tolerates_two_edits() {
        let params = FuzzyParams::default();
        // 8 normalized characters: tolerance 2.
        assert_eq!("العالمين".chars().count(), 8);
        assert!(fuzzy_match("العالمين", "العلمن", params));
        assert!(!fuzzy_match("العالمين", "العلم", params));
    }

    #[test]
    fn tolerance_keys_on_target_length() {
        let params = FuzzyParams::default();
        // Five characters do not exceed the threshold of 5: tolerance stays 1.
        assert_eq!("الحمد".chars().count(), 5);
        assert!(!fuzzy_match("الحمد", "الد", params));
    }

    #[test]
    fn exact_equality_matches_regardless_of_length() {
        let params = FuzzyParams {
            long_word_len: 5,
            long_word_tolerance: 0,
            short_word_tolerance: 0,
        };
        assert!(fuzzy_match("طه", "طه", params));
        assert!(!fuzzy_match("طه", "ده", params));
    }
}
