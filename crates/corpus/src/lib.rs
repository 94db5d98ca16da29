//! Read-only corpus of verses, perspectives and meditations.
//!
//! The corpus is loaded whole and never mutated. Every lookup in `bible-search` takes the
//! slices it needs from a [`Corpus`] explicitly; nothing here is process-global.

mod error;
mod model;

pub use error::{CorpusError, Result};
pub use model::{Corpus, Meditation, Perspective, Verse, PERSPECTIVE_PREVIEW_LEN};
