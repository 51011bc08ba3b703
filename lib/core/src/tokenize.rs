// Word tokenizer shared by fitting and querying

/// Tokenize text for TF-IDF indexing.
/// Lowercases, splits on anything that is not a word character (alphanumeric or `_`)
/// and drops single-character tokens.
#[inline]
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !is_word_char(c))
        .filter(|s| s.chars().nth(1).is_some())
        .map(str::to_string)
        .collect()
}

#[inline]
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
