use url::Url;

/// Resolve a possibly-relative image reference into an absolute, loadable URL.
///
/// The fallback chain, in order:
///
/// 1. `requested` parses as an absolute URL: returned unchanged, `base_url`
///    is not consulted (even when malformed).
/// 2. `requested` is relative and a non-empty `base_url` is present: the two
///    are combined with [`Url::join`]. A malformed base or a base that cannot
///    carry relative references yields `None`.
/// 3. `requested` is relative with no usable base: `None`.
///
/// Resolution is pure and never panics; `None` means the caller skips the
/// image without surfacing an error.
pub fn resolve_uri(requested: &str, base_url: Option<&str>) -> Option<Url> {
    if requested.is_empty() {
        return None;
    }
    if let Ok(absolute) = Url::parse(requested) {
        return Some(absolute);
    }

    let base = base_url?.trim();
    if base.is_empty() {
        return None;
    }
    // A join that succeeds is absolute by construction, so there is no
    // relative result left to reject.
    Url::parse(base).ok()?.join(requested).ok()
}

#[cfg(test)]
#[path = "../../tests/unit/assets/uri.rs"]
mod tests;
