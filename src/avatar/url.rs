/// Qualify an avatar reference against the backend.
///
/// Absolute `http://` and `https://` references (third-party hosts) pass
/// through untouched. Anything else is treated as a path on `base_url`,
/// joined with exactly one `/`. Returns `None` for an absent or empty
/// reference so the caller can draw a placeholder instead.
pub fn resolve_avatar_url(avatar_path: Option<&str>, base_url: &str) -> Option<String> {
    let path = avatar_path.filter(|p| !p.is_empty())?;

    if is_absolute(path) {
        return Some(path.to_string());
    }

    let base = base_url.trim_end_matches('/');
    let url = if path.starts_with('/') {
        format!("{base}{path}")
    } else {
        format!("{base}/{path}")
    };
    tracing::trace!("resolved avatar path {path} to {url}");
    Some(url)
}

fn is_absolute(path: &str) -> bool {
    path.starts_with("http://") || path.starts_with("https://")
}
