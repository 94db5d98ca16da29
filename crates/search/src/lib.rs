mod meditation;
mod resolver;
mod suggest;

pub use meditation::{ordinal_day, pick};
pub use resolver::{lookup, resolve, Lookup, LookupMode};
pub use suggest::{overlap_score, query_tokens, suggest, DEFAULT_SUGGESTION_LIMIT};

/// Separator set for trimming and tokenizing queries: Unicode whitespace plus the ASCII
/// file, group, record and unit separators (`\x1c`..=`\x1f`).
pub fn is_query_space(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}
