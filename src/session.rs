//! Page-level session values rendered by the server into `<meta>` tags.

/// `content` of `<meta name="{name}">`, if present
pub fn meta_content(name: &str) -> Option<String> {
    let document = web_sys::window()?.document()?;
    let selector = format!("meta[name=\"{}\"]", name);
    document
        .query_selector(&selector)
        .ok()
        .flatten()
        .and_then(|meta| meta.get_attribute("content"))
}

/// Token sent as `X-CSRF-Token` on every mutating request
pub fn csrf_token() -> String {
    meta_content("csrf-token").unwrap_or_else(|| {
        log::warn!(target: "session", "[SESSION] no csrf-token meta tag on page");
        String::new()
    })
}
