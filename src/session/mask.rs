use rand::seq::SliceRandom;
use rand::Rng;

use crate::types::Verse;

/// Share of each verse's unpinned words hidden per progression level.
/// Level 4 and above hides everything unpinned.
pub const HIDE_RATIO_PER_LEVEL: f64 = 0.25;

/// Hide a level-scaled share of each verse's unpinned words, chosen at
/// random, and reset resolution state on every word.
///
/// Pinned words are never hidden, so `is_hidden && !is_pinned` (the
/// alignment engine's eligibility predicate) holds for exactly the words
/// masked here. Randomness is injected so callers and tests can seed it.
pub fn mask_words<R: Rng + ?Sized>(verses: &[Verse], level: u32, rng: &mut R) -> Vec<Verse> {
    let ratio = (f64::from(level) * HIDE_RATIO_PER_LEVEL).min(1.0);

    verses
        .iter()
        .map(|verse| {
            let mut unpinned: Vec<usize> = verse
                .words
                .iter()
                .enumerate()
                .filter(|(_, w)| !w.is_pinned)
                .map(|(i, _)| i)
                .collect();
            unpinned.shuffle(rng);
            let count_to_hide = (unpinned.len() as f64 * ratio).ceil() as usize;
            let hidden: std::collections::HashSet<usize> =
                unpinned.into_iter().take(count_to_hide).collect();

            let mut words = verse.words.clone();
            for (i, word) in words.iter_mut().enumerate() {
                word.is_hidden = hidden.contains(&i);
                word.reset_resolution();
            }

            Verse {
                verse_number: verse.verse_number,
                words,
            }
        })
        .collect()
}
