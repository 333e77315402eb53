//! Turning host location strings into decoded path segments.

use percent_encoding::percent_decode_str;

/// Normalise a configured base path: leading `/`, no trailing `/`, and the
/// empty string for the site root.
pub fn normalize_base(base: &str) -> String {
    let trimmed = base.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{trimmed}")
    }
}

/// The path component of a location, without scheme, authority, query or
/// fragment. An empty location is the root.
pub fn path_of(location: &str) -> &str {
    let rest = match location.split_once("://") {
        Some((scheme, after)) if is_scheme(scheme) => {
            let end = after.find(&['/', '?', '#'][..]).unwrap_or(after.len());
            match &after[end..] {
                rest if rest.starts_with('/') => rest,
                _ => "/",
            }
        }
        _ => location,
    };
    let end = rest.find(&['?', '#'][..]).unwrap_or(rest.len());
    match &rest[..end] {
        "" => "/",
        path => path,
    }
}

fn is_scheme(s: &str) -> bool {
    let mut chars = s.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

/// Remove a normalised base path. `None` when the path lies outside it.
pub fn strip_base<'a>(path: &'a str, base: &str) -> Option<&'a str> {
    if base.is_empty() {
        return Some(path);
    }
    let rest = path.strip_prefix(base)?;
    match rest {
        "" => Some("/"),
        rest if rest.starts_with('/') => Some(rest),
        _ => None,
    }
}

/// Split an absolute path into percent-decoded segments.
///
/// One trailing slash is ignored. Empty interior segments, relative paths and
/// segments that do not decode to UTF-8 yield `None`.
pub fn decode_segments(path: &str) -> Option<Vec<String>> {
    if path == "/" {
        return Some(Vec::new());
    }
    let rest = path.strip_prefix('/')?;
    let rest = rest.strip_suffix('/').unwrap_or(rest);
    rest.split('/')
        .map(|raw| {
            if raw.is_empty() {
                return None;
            }
            let decoded = percent_decode_str(raw).decode_utf8().ok()?;
            if decoded.is_empty() {
                None
            } else {
                Some(decoded.into_owned())
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_base() {
        assert_eq!(normalize_base("/"), "");
        assert_eq!(normalize_base(""), "");
        assert_eq!(normalize_base("app/"), "/app");
        assert_eq!(normalize_base("/app/v2/"), "/app/v2");
    }

    #[test]
    fn test_path_of() {
        assert_eq!(path_of("/paste/ab12?x=1#top"), "/paste/ab12");
        assert_eq!(path_of("https://example.com/pastes"), "/pastes");
        assert_eq!(path_of("https://example.com"), "/");
        assert_eq!(path_of("https://example.com?next=/about"), "/");
        assert_eq!(path_of("https://example.com#/paste/ab12"), "/");
        assert_eq!(path_of("https://example.com/pastes?next=/about"), "/pastes");
        assert_eq!(path_of(""), "/");
        assert_eq!(path_of("?q=1"), "/");
        assert_eq!(
            path_of("/paste/ab12?next=https://example.com/x"),
            "/paste/ab12"
        );
    }

    #[test]
    fn test_strip_base() {
        assert_eq!(strip_base("/app/pastes", "/app"), Some("/pastes"));
        assert_eq!(strip_base("/app", "/app"), Some("/"));
        assert_eq!(strip_base("/application", "/app"), None);
        assert_eq!(strip_base("/pastes", "/app"), None);
        assert_eq!(strip_base("/pastes", ""), Some("/pastes"));
    }

    #[test]
    fn test_decode_segments() {
        assert_eq!(decode_segments("/"), Some(vec![]));
        assert_eq!(
            decode_segments("/paste/a%20b"),
            Some(vec!["paste".to_string(), "a b".to_string()])
        );
        assert_eq!(decode_segments("/pastes/"), Some(vec!["pastes".to_string()]));
        assert_eq!(decode_segments("//"), None);
        assert_eq!(decode_segments("/paste//x"), None);
        assert_eq!(decode_segments("paste"), None);
        assert_eq!(decode_segments("/paste/%FF"), None);
    }
}
