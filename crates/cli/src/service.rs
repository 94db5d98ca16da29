//! Builds protocol responses from a corpus snapshot.
//!
//! The CLI and the HTTP handlers both go through these functions, so a query produces the same
//! payload on either surface.

use crate::models::{meditation_view, perspective_views, verse_view, verse_views};
use anyhow::Result;
use bible_corpus::{Corpus, CorpusError};
use bible_protocol::{
    MeditateResponse, MeditateResult, PerspectivesResponse, SearchResponse, SearchResult,
    TodayResponse, VersesResponse,
};
use bible_search::{lookup, pick, Lookup, DEFAULT_SUGGESTION_LIMIT};
use chrono::NaiveDate;

pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";

/// Rejects blank queries; the returned slice is the caller's query unchanged.
pub(crate) fn require_query(raw: Option<&str>) -> Result<&str> {
    match raw {
        Some(query) if !query.trim_matches(bible_search::is_query_space).is_empty() => Ok(query),
        _ => anyhow::bail!("query must be non-empty"),
    }
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT)
        .map_err(|err| anyhow::anyhow!("invalid date {raw:?} (expected YYYY-MM-DD): {err}"))
}

pub(crate) fn local_today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub(crate) fn search(corpus: &Corpus, query: &str) -> Result<SearchResponse> {
    let response = match lookup(&corpus.verses, query, DEFAULT_SUGGESTION_LIMIT) {
        Lookup::Found(verse) => {
            let meditation = corpus
                .featured_meditation()
                .ok_or(CorpusError::NoMeditations)?;
            SearchResponse {
                query: query.to_string(),
                results: vec![SearchResult {
                    reference: verse.reference.clone(),
                    text: verse.text.clone(),
                    summary: verse.summary.clone(),
                    perspectives: perspective_views(corpus.perspective_preview()),
                    meditation: meditation_view(meditation),
                }],
                suggestions: Vec::new(),
            }
        }
        Lookup::Suggestions(suggestions) => SearchResponse {
            query: query.to_string(),
            results: Vec::new(),
            suggestions: verse_views(suggestions),
        },
    };
    log::debug!(
        "search query={query:?} results={} suggestions={}",
        response.results.len(),
        response.suggestions.len()
    );
    Ok(response)
}

pub(crate) fn meditate(corpus: &Corpus, query: &str) -> MeditateResponse {
    match lookup(&corpus.verses, query, DEFAULT_SUGGESTION_LIMIT) {
        Lookup::Found(verse) => MeditateResponse {
            query: query.to_string(),
            result: Some(MeditateResult {
                reference: verse.reference.clone(),
                summary: verse.summary.clone(),
                prompts: corpus.meditation_prompts.clone(),
            }),
            suggestions: Vec::new(),
        },
        Lookup::Suggestions(suggestions) => MeditateResponse {
            query: query.to_string(),
            result: None,
            suggestions: verse_views(suggestions),
        },
    }
}

pub(crate) fn today(corpus: &Corpus, date: NaiveDate) -> Result<TodayResponse> {
    let selected = pick(&corpus.meditations, date).ok_or(CorpusError::NoMeditations)?;
    Ok(TodayResponse {
        date: date.format(DATE_FORMAT).to_string(),
        reference: selected.reference.clone(),
        summary: selected.summary.clone(),
        application_questions: selected.application_questions.clone(),
        prayer: selected.prayer.clone(),
    })
}

pub(crate) fn verses(corpus: &Corpus) -> VersesResponse {
    VersesResponse {
        verses: corpus.verses.iter().map(verse_view).collect(),
    }
}

pub(crate) fn perspectives(corpus: &Corpus) -> PerspectivesResponse {
    PerspectivesResponse {
        perspectives: perspective_views(&corpus.perspectives),
    }
}
