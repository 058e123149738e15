/// Lowercases text and collapses every maximal run of non-word characters
/// (anything that is not alphanumeric or `_`) into a single space.
///
/// Total and idempotent. Output may keep a leading or trailing space;
/// downstream tokenization is whitespace-split, so empty tokens never
/// survive it.
pub fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_separator = false;
    for c in text.chars().flat_map(char::to_lowercase) {
        if c.is_alphanumeric() || c == '_' {
            out.push(c);
            in_separator = false;
        } else if !in_separator {
            out.push(' ');
            in_separator = true;
        }
    }
    out
}
