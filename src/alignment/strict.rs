use crate::pipeline::traits::Normalizer;
use crate::types::Verse;

/// In-order resolution for live input, where tokens arrive one at a time and
/// a full realignment is not wanted.
///
/// Each token is applied to the first eligible word that is still open
/// (neither correct nor error), in flattened verse/word order, by exact
/// normalized comparison. A wrong token marks that slot as an error and the
/// next token moves on to the next open slot, so the learner can correct
/// themselves by simply continuing. Tokens left over once every slot is
/// settled are ignored.
pub(crate) fn resolve_in_order(
    verses: &mut [Verse],
    spoken_raw: &[String],
    normalizer: &dyn Normalizer,
) {
    for token in spoken_raw {
        let Some(word) = verses
            .iter_mut()
            .flat_map(|v| v.words.iter_mut())
            .find(|w| w.is_eligible() && !w.is_correct && !w.is_error)
        else {
            return;
        };

        let spoken_norm = normalizer.normalize(token);
        let target_norm = normalizer.normalize(&word.text);
        if spoken_norm == target_norm {
            word.mark_correct();
        } else {
            word.mark_error(token);
        }
    }
}
