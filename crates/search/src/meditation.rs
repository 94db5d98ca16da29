use bible_corpus::Meditation;
use chrono::{Datelike, NaiveDate};

/// Proleptic Gregorian day number, 0001-01-01 being day 1.
pub fn ordinal_day(date: NaiveDate) -> i64 {
    i64::from(date.num_days_from_ce())
}

/// Meditation for `today`.
///
/// An entry dated `today` wins (first one on duplicates); otherwise the ordinal day number
/// wraps around the list. Returns `None` only for an empty list, which corpus loading rules out.
pub fn pick(meditations: &[Meditation], today: NaiveDate) -> Option<&Meditation> {
    let iso = today.format("%Y-%m-%d").to_string();
    if let Some(dated) = meditations.iter().find(|item| item.date == iso) {
        log::trace!("pick date={iso} matched dated entry");
        return Some(dated);
    }

    let len = i64::try_from(meditations.len()).ok().filter(|len| *len > 0)?;
    let index = usize::try_from(ordinal_day(today).rem_euclid(len)).ok()?;
    log::trace!("pick date={iso} fallback index={index} of {len}");
    meditations.get(index)
}
