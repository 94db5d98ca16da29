use crate::is_query_space;
use bible_corpus::Verse;
use std::collections::BTreeSet;

pub const DEFAULT_SUGGESTION_LIMIT: usize = 3;

/// Distinct whitespace-separated tokens of `query`.
pub fn query_tokens(query: &str) -> BTreeSet<&str> {
    query
        .split(is_query_space)
        .filter(|token| !token.is_empty())
        .collect()
}

/// Number of tokens found as substrings of `"{reference} {text}"`.
pub fn overlap_score(verse: &Verse, tokens: &BTreeSet<&str>) -> usize {
    if tokens.is_empty() {
        return 0;
    }
    let haystack = format!("{} {}", verse.reference, verse.text);
    tokens
        .iter()
        .filter(|token| haystack.contains(**token))
        .count()
}

/// Verses ranked by token overlap with `query`, at most `limit` of them.
///
/// Zero-score verses are dropped. Equal scores keep corpus order (`sort_by` is stable).
pub fn suggest<'a>(verses: &'a [Verse], query: &str, limit: usize) -> Vec<&'a Verse> {
    let tokens = query_tokens(query);
    if tokens.is_empty() || limit == 0 {
        return Vec::new();
    }

    let mut scored: Vec<(usize, &Verse)> = verses
        .iter()
        .map(|verse| (overlap_score(verse, &tokens), verse))
        .filter(|(score, _)| *score > 0)
        .collect();
    scored.sort_by(|a, b| b.0.cmp(&a.0));
    scored.truncate(limit);

    log::trace!(
        "suggest tokens={} candidates={} returned={}",
        tokens.len(),
        verses.len(),
        scored.len()
    );
    scored.into_iter().map(|(_, verse)| verse).collect()
}
