//! # jwt-handoff
//!
//! Issues short-lived signed JWTs for security testing and hands them to
//! a receiving site through a redirect-URL fragment (`#jwt=...`).
//!
//! The crate is the token core only: claims construction, symmetric /
//! asymmetric signing and verification, and the fragment carrier.  The
//! surrounding surface (a form, a CLI, a test harness) supplies the
//! subject and key material and performs the actual navigation.
//!
//! ## HS256 with a pasted secret
//!
//! A secret can be either a raw passphrase or a base64url key as emitted
//! by common JWT tooling; [`keys::resolve_secret`] detects which, and the
//! verifier re-runs the identical detection so both sides derive the same
//! key bytes from the same string.
//!
//! ```rust
//! use jwt_handoff::{
//!     build_redirect_url, extract_token_from_url, generate_hs256, verify_hs256, TokenPolicy,
//! };
//!
//! # fn main() -> Result<(), jwt_handoff::TokenError> {
//! let signed = generate_hs256("N100007965", "my-test-secret!", &TokenPolicy::short_lived())?;
//!
//! let url = build_redirect_url("https://example.com", &signed.token);
//! let token = extract_token_from_url(&url).unwrap();
//!
//! let claims = verify_hs256(&token, "my-test-secret!")?;
//! assert_eq!(claims.subject(), Some("N100007965"));
//! # Ok(())
//! # }
//! ```
//!
//! ## RS256 with configured keys
//!
//! Asymmetric keys are loaded **once** at startup; a missing or malformed
//! key fails construction rather than the first signing call.
//!
//! ```rust,no_run
//! use jwt_handoff::{generate_rs256, RsaKeyPair, TokenPolicy};
//!
//! // Requires JWT_PRIVATE_KEY (PKCS8) and JWT_PUBLIC_KEY (SPKI) in the
//! // environment; see RsaKeyPair::from_env for the full table.
//! let keys = RsaKeyPair::from_env().unwrap();
//! let signed = generate_rs256("N100007965", &keys, &TokenPolicy::hourly()).unwrap();
//! ```
//!
//! ## Policies
//!
//! Two issuance profiles are in active use and both are exposed rather
//! than one guessed canonical policy:
//!
//! | Preset                      | Lifetime | `nbf` backdate | Subject key |
//! |-----------------------------|----------|----------------|-------------|
//! | [`TokenPolicy::short_lived`]| 180 s    | 5 s            | `sub`       |
//! | [`TokenPolicy::hourly`]     | 3600 s   | none           | `uid`       |
//!
//! ## The redirect itself
//!
//! The conventional flow pauses [`REDIRECT_DELAY`] after issuing before
//! navigating to the carrier URL.  That timer belongs to the caller; this
//! crate performs no navigation and schedules nothing.

pub mod claims;
pub mod config;
pub mod error;
pub mod keys;
pub mod redirect;
pub mod token;

pub use claims::Claims;
pub use config::{RsaKeyPair, SubjectKey, TokenPolicy};
pub use error::TokenError;
pub use keys::{normalize_pem, resolve_secret, ResolvedSecret};
pub use redirect::{build_redirect_url, extract_token_from_url, REDIRECT_DELAY};
pub use token::{
    generate_hs256, generate_rs256, sign_hs256, sign_rs256, verify_hs256, verify_hs256_at,
    verify_rs256, verify_rs256_at, SignedToken,
};
