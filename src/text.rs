//! Small string helpers shared by intents and providers.

/// Percent-encode a string for use in a URL path segment or query value.
/// Unreserved characters pass through; spaces become `%20`.
pub fn urlencoded(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for b in s.bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(b as char);
            }
            _ => {
                out.push_str(&format!("%{:02X}", b));
            }
        }
    }
    out
}

/// Keep at most `n` sentences of `text`. A sentence ends with `.`, `!` or `?`
/// followed by whitespace or the end of input.
pub fn first_sentences(text: &str, n: usize) -> String {
    let text = text.trim();
    let mut count = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        if matches!(c, '.' | '!' | '?') {
            let at_boundary = match chars.peek() {
                Some((_, next)) => next.is_whitespace(),
                None => true,
            };
            if at_boundary {
                count += 1;
                if count == n {
                    return text[..i + c.len_utf8()].to_string();
                }
            }
        }
    }

    text.to_string()
}

/// Trim whitespace and trailing punctuation a speaker tends to add.
pub fn clean_fragment(s: &str) -> &str {
    s.trim()
        .trim_end_matches(['?', '!', '.', ','])
        .trim()
}
