//! Conversions from corpus records to the wire shapes in `bible-protocol`.

use bible_corpus::{Meditation, Perspective, Verse};
use bible_protocol::{MeditationView, PerspectiveView, VerseView};

pub(crate) fn verse_view(verse: &Verse) -> VerseView {
    VerseView {
        reference: verse.reference.clone(),
        text: verse.text.clone(),
        summary: verse.summary.clone(),
    }
}

pub(crate) fn verse_views<'a>(verses: impl IntoIterator<Item = &'a Verse>) -> Vec<VerseView> {
    verses.into_iter().map(verse_view).collect()
}

pub(crate) fn perspective_views(perspectives: &[Perspective]) -> Vec<PerspectiveView> {
    perspectives
        .iter()
        .map(|perspective| PerspectiveView {
            title: perspective.title.clone(),
            bullets: perspective.bullets.clone(),
        })
        .collect()
}

pub(crate) fn meditation_view(meditation: &Meditation) -> MeditationView {
    MeditationView {
        date: meditation.date.clone(),
        reference: meditation.reference.clone(),
        summary: meditation.summary.clone(),
        application_questions: meditation.application_questions.clone(),
        prayer: meditation.prayer.clone(),
    }
}
