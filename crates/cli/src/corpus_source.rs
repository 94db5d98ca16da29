use anyhow::{Context as AnyhowContext, Result};
use bible_corpus::Corpus;
use once_cell::sync::OnceCell;
use std::path::PathBuf;
use std::sync::Arc;

pub(crate) const DATA_PATH_ENV: &str = "BIBLE_DATA_PATH";

/// Where the corpus comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CorpusSource {
    Bundled,
    File(PathBuf),
}

impl CorpusSource {
    /// `--data` wins over `BIBLE_DATA_PATH`; with neither set the bundled sample is used.
    pub fn resolve(flag: Option<PathBuf>) -> Self {
        flag.or_else(|| {
            std::env::var_os(DATA_PATH_ENV)
                .filter(|raw| !raw.is_empty())
                .map(PathBuf::from)
        })
        .map_or(CorpusSource::Bundled, CorpusSource::File)
    }

    pub fn load(&self) -> Result<Corpus> {
        match self {
            CorpusSource::Bundled => Corpus::bundled().context("Bundled corpus is invalid"),
            CorpusSource::File(path) => Corpus::load(path)
                .with_context(|| format!("Failed to load corpus from {}", path.display())),
        }
    }

    pub fn describe(&self) -> String {
        match self {
            CorpusSource::Bundled => "bundled sample".to_string(),
            CorpusSource::File(path) => path.display().to_string(),
        }
    }
}

/// Hands out corpus snapshots to request handlers.
///
/// Without `reload` the first successful load is kept for the life of the process; the
/// snapshot is never mutated, so it is shared without locking.
pub struct CorpusProvider {
    source: CorpusSource,
    reload: bool,
    cached: OnceCell<Arc<Corpus>>,
}

impl CorpusProvider {
    pub fn new(source: CorpusSource, reload: bool) -> Self {
        Self {
            source,
            reload,
            cached: OnceCell::new(),
        }
    }

    pub fn source(&self) -> &CorpusSource {
        &self.source
    }

    pub fn get(&self) -> Result<Arc<Corpus>> {
        if self.reload {
            return self.source.load().map(Arc::new);
        }
        self.cached
            .get_or_try_init(|| self.source.load().map(Arc::new))
            .cloned()
    }
}
