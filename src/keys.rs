//! Symmetric key material resolution and PEM normalization.
//!
//! A secret pasted by a tester is either a raw passphrase or a base64url
//! key as emitted by common JWT tooling.  [`resolve_secret`] decides which,
//! and is the *single* source of truth for that heuristic: the signer and
//! the verifier both call it on the caller-supplied string, so the two
//! sides always derive the same key bytes without any side channel
//! carrying the decision across the wire.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};

use crate::error::TokenError;

/// Signing-key bytes derived from a caller-supplied secret string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSecret {
    /// The raw key bytes fed to the HMAC.
    pub bytes: Vec<u8>,
    /// `true` when the secret was recognised and decoded as base64url,
    /// `false` when its UTF-8 bytes were used verbatim.
    pub base64_derived: bool,
}

/// Derive HS256 key bytes from a secret string.
///
/// A secret that consists only of the base64url alphabet
/// (`A-Z a-z 0-9 - _`), is at least 4 characters long, and has a length
/// divisible by 4 is treated as an unpadded base64url key and decoded;
/// anything else is used as a plain-text passphrase (UTF-8 bytes).
///
/// ```rust
/// use jwt_handoff::keys::resolve_secret;
///
/// // 32 chars of the base64url alphabet — decoded to 24 key bytes.
/// let key = resolve_secret("A0PUZmC1hs82Bdbz5tlxuM7Yw46E9NV3").unwrap();
/// assert!(key.base64_derived);
///
/// // Contains a space — used verbatim.
/// let key = resolve_secret("correct horse battery staple").unwrap();
/// assert!(!key.base64_derived);
/// ```
///
/// # Errors
///
/// Returns [`TokenError::EmptySecret`] for an empty string.
pub fn resolve_secret(secret: &str) -> Result<ResolvedSecret, TokenError> {
    if secret.is_empty() {
        return Err(TokenError::EmptySecret);
    }

    if looks_like_base64url(secret) {
        if let Ok(bytes) = URL_SAFE_NO_PAD.decode(secret) {
            if !bytes.is_empty() {
                return Ok(ResolvedSecret {
                    bytes,
                    base64_derived: true,
                });
            }
        }
    }

    Ok(ResolvedSecret {
        bytes: secret.as_bytes().to_vec(),
        base64_derived: false,
    })
}

/// Base64url candidate test: alphabet `[A-Za-z0-9_-]`, length >= 4 and
/// divisible by 4 (an unpadded encoding of whole byte triples).
fn looks_like_base64url(s: &str) -> bool {
    s.len() >= 4
        && s.len() % 4 == 0
        && s.chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

/// Normalize a PEM blob supplied through configuration.
///
/// Environment transport commonly mangles PEM in two ways: literal `\n`
/// escape sequences instead of newlines, and marker-less bodies (just the
/// base64 payload).  Both are repaired here; `label` is the PEM type used
/// when markers have to be added, e.g. `"PRIVATE KEY"` or `"PUBLIC KEY"`.
pub fn normalize_pem(input: &str, label: &str) -> String {
    let unescaped = input.trim().replace("\\n", "\n");
    if unescaped.contains("-----BEGIN") {
        return unescaped;
    }
    format!(
        "-----BEGIN {label}-----\n{}\n-----END {label}-----\n",
        unescaped.trim()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base64url_secret_is_decoded() {
        let key = resolve_secret("A0PUZmC1hs82Bdbz5tlxuM7Yw46E9NV3").unwrap();
        assert!(key.base64_derived);
        // 32 unpadded base64url chars encode exactly 24 bytes.
        assert_eq!(key.bytes.len(), 24);
    }

    #[test]
    fn decoded_bytes_match_encoding() {
        let key = resolve_secret("AAAA").unwrap();
        assert!(key.base64_derived);
        assert_eq!(key.bytes, vec![0u8; 3]);
    }

    #[test]
    fn plain_text_when_length_not_multiple_of_four() {
        let key = resolve_secret("hello").unwrap();
        assert!(!key.base64_derived);
        assert_eq!(key.bytes, b"hello");
    }

    #[test]
    fn plain_text_when_too_short() {
        let key = resolve_secret("abc").unwrap();
        assert!(!key.base64_derived);
        assert_eq!(key.bytes, b"abc");
    }

    #[test]
    fn plain_text_when_outside_alphabet() {
        let key = resolve_secret("p@ss word!!!").unwrap();
        assert!(!key.base64_derived);
        assert_eq!(key.bytes, b"p@ss word!!!");
    }

    #[test]
    fn padded_base64_falls_back_to_plain_text() {
        // '=' is outside the accepted alphabet, so padded input is taken
        // verbatim rather than decoded.
        let key = resolve_secret("AAA=").unwrap();
        assert!(!key.base64_derived);
    }

    #[test]
    fn empty_secret_rejected() {
        assert!(matches!(resolve_secret(""), Err(TokenError::EmptySecret)));
    }

    #[test]
    fn resolution_is_deterministic() {
        let a = resolve_secret("A0PUZmC1hs82Bdbz5tlxuM7Yw46E9NV3").unwrap();
        let b = resolve_secret("A0PUZmC1hs82Bdbz5tlxuM7Yw46E9NV3").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn normalize_pem_wraps_bare_payload() {
        let pem = normalize_pem("AAAA", "PUBLIC KEY");
        assert!(pem.starts_with("-----BEGIN PUBLIC KEY-----\n"));
        assert!(pem.ends_with("-----END PUBLIC KEY-----\n"));
    }

    #[test]
    fn normalize_pem_keeps_marked_input() {
        let input = "-----BEGIN PUBLIC KEY-----\nAAAA\n-----END PUBLIC KEY-----";
        assert_eq!(normalize_pem(input, "PUBLIC KEY"), input);
    }

    #[test]
    fn normalize_pem_unescapes_newlines() {
        let pem = normalize_pem("-----BEGIN PUBLIC KEY-----\\nAAAA\\n-----END PUBLIC KEY-----", "PUBLIC KEY");
        assert!(pem.contains("\nAAAA\n"));
    }
}
