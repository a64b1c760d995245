/// Canonicalizes text before comparison. Both the target words and the
/// spoken tokens must pass through the same normalizer; comparing
/// un-normalized strings is a correctness bug, not a tuning choice.
pub trait Normalizer: Send + Sync {
    fn normalize(&self, text: &str) -> String;
}

/// Fuzzy equivalence over two already-normalized words. The first argument
/// is the target word; implementations may key tolerance on it.
pub trait TokenMatcher: Send + Sync {
    fn is_match(&self, target: &str, spoken: &str) -> bool;
}
