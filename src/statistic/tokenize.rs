//! Text tokenization for word statistics

/// Split text into word tokens
///
/// Tokens are runs of alphanumeric characters, `_`, `'` and `-`. Tokens made only of
/// ASCII digits and a lone `-` are dropped.
///
/// # Examples
/// ```
/// use word_lookup::statistic::tokenize;
///
/// let tokens: Vec<&str> = tokenize("It's a well-known fact - 42 times!").collect();
/// assert_eq!(tokens, vec!["It's", "a", "well-known", "fact", "times"]);
/// ```
pub fn tokenize(content: &str) -> impl Iterator<Item = &str> {
    content
        .split(|c: char| !is_word_char(c))
        .filter(|token| !token.is_empty() && !is_ignored(token))
}

#[inline]
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '_' | '\'' | '-')
}

#[inline]
fn is_ignored(token: &str) -> bool {
    token == "-" || token.bytes().all(|b| b.is_ascii_digit())
}
