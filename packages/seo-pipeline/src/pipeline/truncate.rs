//! Word-boundary truncation for SEO fields.

use crate::pipeline::markup::strip_tags;

/// Characters stripped from the end of a truncated field.
const TRAILING_PUNCTUATION: &[char] = &[',', ';', ':', '.', '!', '?'];

/// Truncate `text` to at most `max_length` characters without splitting a
/// word.
///
/// Markup is stripped and surrounding whitespace trimmed first; text
/// already within the budget is returned unchanged beyond that. Over-budget
/// text is hard-cut at the budget, then cut back to the last whitespace
/// inside the budget when the hard cut landed mid-word, and trailing
/// punctuation (`,;:.!?`) is removed. A single word longer than the whole
/// budget stays hard-cut.
///
/// Budgets count characters, not bytes, so a cut can never split a
/// multi-byte sequence.
pub fn truncate(text: &str, max_length: usize) -> String {
    let stripped = strip_tags(text);
    let trimmed = stripped.trim();

    let chars: Vec<char> = trimmed.chars().collect();
    if chars.len() <= max_length {
        return trimmed.to_string();
    }

    // Cut back to a whitespace boundary only when the hard cut splits a
    // word; a prefix ending exactly on a word edge is kept whole.
    let mut prefix = &chars[..max_length];
    let splits_word =
        prefix.last().is_some_and(|c| !c.is_whitespace()) && !chars[max_length].is_whitespace();
    if splits_word {
        if let Some(last_space) = prefix.iter().rposition(|c| c.is_whitespace()) {
            prefix = &prefix[..last_space];
        }
    }

    prefix
        .iter()
        .collect::<String>()
        .trim_end_matches(|c: char| c.is_whitespace() || TRAILING_PUNCTUATION.contains(&c))
        .to_string()
}
