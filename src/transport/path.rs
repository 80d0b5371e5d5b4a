use url::form_urlencoded::byte_serialize;

/// Escape one resource path segment (`/`, `:`, `+` and friends are percent-encoded,
/// spaces become `+`).
pub fn escape_segment(segment: &str) -> String {
    byte_serialize(segment.as_bytes()).collect()
}

/// Join a resource prefix and already-unescaped segments into a resource path.
pub fn resource<'a>(prefix: &str, segments: impl IntoIterator<Item = &'a str>) -> String {
    let mut path = prefix.to_owned();
    for segment in segments {
        path.push('/');
        path.push_str(&escape_segment(segment));
    }
    path
}
