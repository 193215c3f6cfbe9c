const UNKNOWN: &str = "?";

/// Up to two uppercase initials for a placeholder avatar: the first letter
/// of the first and last words, or of the only word. Absent or blank names
/// give `"?"`.
pub fn initials(full_name: Option<&str>) -> String {
    let mut words = full_name.unwrap_or_default().split_whitespace();
    let first = match words.next() {
        Some(w) => w,
        None => {
            tracing::trace!("no name, using placeholder initials");
            return UNKNOWN.to_string();
        }
    };

    let mut out = leading_upper(first);
    if let Some(last) = words.last() {
        out.push_str(&leading_upper(last));
    }
    out
}

// Uppercase mapping can expand, e.g. 'ß' -> "SS".
fn leading_upper(word: &str) -> String {
    word.chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_default()
}
