//! Fragment-URL carrier for issued tokens.
//!
//! The token travels to the receiving site in the URL *fragment*
//! (`#jwt=...`), never as a query parameter or header.  Browsers do not
//! transmit fragments to servers on navigation, so the token stays
//! client-side until the receiver's own script pulls it out — that
//! property is the point of this scheme and must be preserved.

use std::time::Duration;

use url::Url;

/// How long a caller conventionally waits after obtaining a token before
/// navigating to the carrier URL.  The caller owns the timer; nothing in
/// this crate schedules the redirect.
pub const REDIRECT_DELAY: Duration = Duration::from_secs(2);

/// Append `token` to `target` as a `#jwt=` fragment.
///
/// The target is taken verbatim (the caller has already validated it)
/// and the token is not re-escaped: JWT segments use the base64url
/// alphabet, which is fragment-safe as-is.
pub fn build_redirect_url(target: &str, token: &str) -> String {
    format!("{target}#jwt={token}")
}

/// Pull a token back out of a carrier URL.
///
/// Returns `None` when the string does not parse as a URL, has no
/// fragment, or the fragment lacks the `jwt=` marker.  Everything after
/// the marker to the end of the fragment is the token — a later `&` is
/// part of it, since this scheme does not sub-delimit the fragment.
///
/// ```rust
/// use jwt_handoff::{build_redirect_url, extract_token_from_url};
///
/// let url = build_redirect_url("https://example.com", "aa.bb.cc");
/// assert_eq!(extract_token_from_url(&url).as_deref(), Some("aa.bb.cc"));
/// assert_eq!(extract_token_from_url("invalid-url"), None);
/// ```
pub fn extract_token_from_url(url: &str) -> Option<String> {
    let parsed = Url::parse(url).ok()?;
    let fragment = parsed.fragment()?;
    fragment.strip_prefix("jwt=").map(str::to_owned)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip() {
        let token = "eyJhbGciOiJIUzI1NiJ9.eyJzdWIiOiJ1MSJ9.c2ln";
        let url = build_redirect_url("https://example.com/landing?x=1", token);
        assert_eq!(extract_token_from_url(&url).as_deref(), Some(token));
    }

    #[test]
    fn unparsable_url_yields_none() {
        assert_eq!(extract_token_from_url("invalid-url"), None);
    }

    #[test]
    fn url_without_fragment_yields_none() {
        assert_eq!(extract_token_from_url("https://example.com"), None);
    }

    #[test]
    fn fragment_without_marker_yields_none() {
        assert_eq!(extract_token_from_url("https://example.com#section-2"), None);
    }

    #[test]
    fn token_runs_to_end_of_fragment() {
        // Fragments are not sub-delimited: a later `&` belongs to the token.
        let url = "https://example.com#jwt=aa.bb.cc&state=xyz";
        assert_eq!(
            extract_token_from_url(url).as_deref(),
            Some("aa.bb.cc&state=xyz")
        );
    }

    #[test]
    fn build_appends_verbatim() {
        assert_eq!(
            build_redirect_url("https://example.com", "t"),
            "https://example.com#jwt=t"
        );
    }
}
