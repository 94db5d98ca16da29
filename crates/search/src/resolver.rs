use crate::is_query_space;
use crate::suggest::suggest;
use bible_corpus::Verse;

/// How a trimmed query is matched against the verse list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupMode {
    /// Query contains `:` and must equal a reference exactly.
    ExactReference,
    /// Query is a substring of a verse's text or reference.
    Fuzzy,
}

impl LookupMode {
    #[must_use]
    pub fn detect(normalized: &str) -> Self {
        if normalized.contains(':') {
            LookupMode::ExactReference
        } else {
            LookupMode::Fuzzy
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            LookupMode::ExactReference => "exact",
            LookupMode::Fuzzy => "fuzzy",
        }
    }
}

/// First verse in corpus order matching `query`.
///
/// A colon anywhere in the trimmed query selects exact reference matching; there is no
/// fallback to substring matching when that misses.
pub fn resolve<'a>(verses: &'a [Verse], query: &str) -> Option<&'a Verse> {
    let normalized = query.trim_matches(is_query_space);
    let mode = LookupMode::detect(normalized);
    let found = match mode {
        LookupMode::ExactReference => verses.iter().find(|verse| verse.reference == normalized),
        LookupMode::Fuzzy => verses.iter().find(|verse| {
            verse.text.contains(normalized) || verse.reference.contains(normalized)
        }),
    };
    log::trace!(
        "resolve mode={} query={normalized:?} hit={}",
        mode.as_str(),
        found.map_or("-", |verse| verse.reference.as_str())
    );
    found
}

/// Outcome of a lookup: either the resolved verse or ranked suggestions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup<'a> {
    Found(&'a Verse),
    Suggestions(Vec<&'a Verse>),
}

/// Resolve `query`, ranking suggestions only when resolution misses.
pub fn lookup<'a>(verses: &'a [Verse], query: &str, limit: usize) -> Lookup<'a> {
    match resolve(verses, query) {
        Some(verse) => Lookup::Found(verse),
        None => Lookup::Suggestions(suggest(verses, query, limit)),
    }
}
