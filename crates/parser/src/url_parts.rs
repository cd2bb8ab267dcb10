//! URL splitting without normalization
//!
//! Paths are taken exactly as written: no percent-decoding, no dot-segment
//! removal, no default-port or host-case rewriting. Generated paths and the
//! base URL therefore match what the collection author typed.

/// Components of a URL string, borrowed from the input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UrlParts<'a> {
    /// Scheme as written (`https`), `None` when the string has none
    pub scheme: Option<&'a str>,

    /// Everything between `//` and the path (userinfo, host and port)
    pub authority: Option<&'a str>,

    /// Path up to the query or fragment, possibly empty
    pub path: &'a str,
}

impl<'a> UrlParts<'a> {
    /// Split a URL or URL-like string
    ///
    /// A scheme is recognized only when the text before the first `:` starts
    /// with an ASCII letter and holds nothing but letters, digits, `+`, `-`
    /// and `.`. An authority is recognized only after a leading `//`.
    pub fn split(raw: &'a str) -> Self {
        let (scheme, rest) = match raw.split_once(':') {
            Some((scheme, rest)) if is_scheme(scheme) => (Some(scheme), rest),
            _ => (None, raw),
        };

        let (authority, rest) = match rest.strip_prefix("//") {
            Some(after) => {
                let end = after.find(['/', '?', '#']).unwrap_or(after.len());
                (Some(&after[..end]), &after[end..])
            }
            None => (None, rest),
        };

        let end = rest.find(['?', '#']).unwrap_or(rest.len());

        Self {
            scheme,
            authority,
            path: &rest[..end],
        }
    }

    /// `scheme://authority` when both are present and non-empty
    pub fn origin(&self) -> Option<String> {
        match (self.scheme, self.authority) {
            (Some(scheme), Some(authority)) if !authority.is_empty() => {
                Some(format!("{}://{}", scheme.to_ascii_lowercase(), authority))
            }
            _ => None,
        }
    }
}

fn is_scheme(candidate: &str) -> bool {
    let mut chars = candidate.chars();
    matches!(chars.next(), Some(first) if first.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_absolute_url() {
        let parts = UrlParts::split("https://user:pw@api.io:8443/v1/users?page=2#top");
        assert_eq!(parts.scheme, Some("https"));
        assert_eq!(parts.authority, Some("user:pw@api.io:8443"));
        assert_eq!(parts.path, "/v1/users");
    }

    #[test]
    fn test_host_only_urls_have_empty_path() {
        assert_eq!(UrlParts::split("https://a.io").path, "");
        assert_eq!(UrlParts::split("https://a.io?x=1").path, "");
    }

    #[test]
    fn test_path_is_not_normalized() {
        assert_eq!(UrlParts::split("https://a.io/a%20b").path, "/a%20b");
        assert_eq!(UrlParts::split("https://a.io/a/../b").path, "/a/../b");
        assert_eq!(
            UrlParts::split("https://a.io/users/{{id}}/:tab").path,
            "/users/{{id}}/:tab"
        );
    }

    #[test]
    fn test_split_without_scheme() {
        let parts = UrlParts::split("{{base_url}}/orders?x=1");
        assert_eq!(parts.scheme, None);
        assert_eq!(parts.authority, None);
        assert_eq!(parts.path, "{{base_url}}/orders");

        assert_eq!(UrlParts::split("/relative/path#frag").path, "/relative/path");
    }

    #[test]
    fn test_scheme_without_authority() {
        let parts = UrlParts::split("localhost:3000/api");
        assert_eq!(parts.scheme, Some("localhost"));
        assert_eq!(parts.authority, None);
        assert_eq!(parts.path, "3000/api");
        assert_eq!(parts.origin(), None);
    }

    #[test]
    fn test_origin_keeps_full_authority() {
        assert_eq!(
            UrlParts::split("HTTPS://API.io:443/x").origin().as_deref(),
            Some("https://API.io:443")
        );
        assert_eq!(
            UrlParts::split("http://{{host}}/x").origin().as_deref(),
            Some("http://{{host}}")
        );
        assert_eq!(UrlParts::split("http:///x").origin(), None);
    }
}
