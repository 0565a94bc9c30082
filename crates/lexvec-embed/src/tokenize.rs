/// Tokens shorter than this (in chars) count toward the total but never
/// become vector keys.
pub const MIN_TERM_CHARS: usize = 3;

/// Split `text` into lower-cased runs of alphanumeric characters.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(str::to_lowercase)
        .collect()
}

pub fn is_term(token: &str) -> bool {
    token.chars().count() >= MIN_TERM_CHARS
}
