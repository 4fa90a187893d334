use crate::core::Mentor;

/// Lowercased whitespace tokens, first occurrence order, no duplicates.
pub fn tokenize(query: &str) -> Vec<String> {
    let mut tokens: Vec<String> = Vec::new();
    for token in query.split_whitespace().map(str::to_lowercase) {
        if !tokens.contains(&token) {
            tokens.push(token);
        }
    }
    tokens
}

/// Every token must appear somewhere in the mentor's searchable text.
pub fn matches_tokens(mentor: &Mentor, tokens: &[String]) -> bool {
    if tokens.is_empty() {
        return true;
    }

    let blob = mentor.search_blob();
    tokens.iter().all(|token| blob.contains(token.as_str()))
}
