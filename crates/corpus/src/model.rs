use crate::error::{CorpusError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Callers show at most this many perspectives next to a verse.
pub const PERSPECTIVE_PREVIEW_LEN: usize = 3;

const BUNDLED_CORPUS: &str = include_str!("../data/sample_data.json");

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verse {
    /// `Book Chapter:Verse`, e.g. "로마서 8:28".
    pub reference: String,
    pub text: String,
    pub summary: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Perspective {
    pub title: String,
    #[serde(default)]
    pub bullets: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meditation {
    /// ISO-8601 calendar date (`YYYY-MM-DD`). Compared as a string, never parsed.
    pub date: String,
    /// Points at a verse by value; not checked against `Corpus::verses`.
    pub reference: String,
    pub summary: String,
    #[serde(default)]
    pub application_questions: Vec<String>,
    pub prayer: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Corpus {
    pub verses: Vec<Verse>,
    #[serde(default)]
    pub perspectives: Vec<Perspective>,
    pub meditations: Vec<Meditation>,
    #[serde(default)]
    pub meditation_prompts: Vec<String>,
}

impl Corpus {
    /// Parse and validate a corpus from its JSON encoding.
    pub fn from_json_str(raw: &str) -> Result<Self> {
        let corpus: Corpus = serde_json::from_str(raw)?;
        corpus.validate()?;
        Ok(corpus)
    }

    /// Read the corpus file at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|source| CorpusError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let corpus = Self::from_json_str(&raw)?;
        log::debug!(
            "Loaded corpus {}: verses={} perspectives={} meditations={} prompts={}",
            path.display(),
            corpus.verses.len(),
            corpus.perspectives.len(),
            corpus.meditations.len(),
            corpus.meditation_prompts.len()
        );
        Ok(corpus)
    }

    /// Sample corpus compiled into the crate.
    pub fn bundled() -> Result<Self> {
        Self::from_json_str(BUNDLED_CORPUS)
    }

    /// Day-based selection divides by the meditation count, so an empty list is rejected here
    /// rather than at lookup time.
    pub fn validate(&self) -> Result<()> {
        if self.meditations.is_empty() {
            return Err(CorpusError::NoMeditations);
        }
        Ok(())
    }

    pub fn perspective_preview(&self) -> &[Perspective] {
        let end = self.perspectives.len().min(PERSPECTIVE_PREVIEW_LEN);
        &self.perspectives[..end]
    }

    /// The meditation shown alongside a search hit.
    pub fn featured_meditation(&self) -> Option<&Meditation> {
        self.meditations.first()
    }
}
