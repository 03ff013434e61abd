use jsonwebtoken::{DecodingKey, EncodingKey};

use crate::error::TokenError;
use crate::keys::normalize_pem;

/// Which payload key carries the subject identifier.
///
/// Both conventions exist in the wild among the receivers this tool
/// targets; pick whichever the receiving site expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubjectKey {
    /// RFC 7519 `sub`.
    Sub,
    /// Non-standard `uid`, used by some receivers.
    Uid,
}

/// Policy for the time claims and payload shape of issued tokens.
///
/// Build with [`short_lived`](Self::short_lived), [`hourly`](Self::hourly),
/// or [`new`](Self::new) plus the chained setters.
///
/// ```rust
/// use jwt_handoff::{SubjectKey, TokenPolicy};
///
/// // 10-minute tokens under the `uid` convention, no clock skew.
/// let policy = TokenPolicy::new(600).subject_key(SubjectKey::Uid);
/// ```
#[derive(Debug, Clone)]
pub struct TokenPolicy {
    /// Seconds from issued-at to expiration.
    pub lifetime_secs: u64,
    /// Seconds the not-before claim is backdated relative to issued-at,
    /// tolerating small clock drift at the receiver.
    pub nbf_skew_secs: u64,
    /// Payload key for the subject identifier.
    pub subject_key: SubjectKey,
}

impl TokenPolicy {
    /// New policy with the given lifetime, no not-before skew, and the
    /// standard `sub` claim key.
    pub fn new(lifetime_secs: u64) -> Self {
        Self {
            lifetime_secs,
            nbf_skew_secs: 0,
            subject_key: SubjectKey::Sub,
        }
    }

    /// 180-second tokens with a 5-second not-before backdate, `sub` key.
    /// The profile used for single-redirect handoffs.
    pub fn short_lived() -> Self {
        Self::new(180).nbf_skew(5)
    }

    /// One-hour tokens with no backdate, `uid` key.  The profile used by
    /// receivers that keep a session open against the token.
    pub fn hourly() -> Self {
        Self::new(3600).subject_key(SubjectKey::Uid)
    }

    pub fn lifetime_secs(mut self, v: u64) -> Self {
        self.lifetime_secs = v;
        self
    }
    pub fn nbf_skew(mut self, v: u64) -> Self {
        self.nbf_skew_secs = v;
        self
    }
    pub fn subject_key(mut self, v: SubjectKey) -> Self {
        self.subject_key = v;
        self
    }
}

impl Default for TokenPolicy {
    fn default() -> Self {
        Self::short_lived()
    }
}

/// RS256 key material, parsed once at startup.
///
/// Construct with [`from_env`](Self::from_env) or
/// [`from_pems`](Self::from_pems) during process initialisation and pass
/// by reference into [`generate_rs256`](crate::token::generate_rs256) /
/// [`verify_rs256`](crate::token::verify_rs256).  Construction fails
/// eagerly on absent or unparsable keys, so a misconfigured process dies
/// at startup rather than on its first signing call.
pub struct RsaKeyPair {
    pub(crate) encoding: EncodingKey,
    pub(crate) decoding: DecodingKey,
}

impl RsaKeyPair {
    /// Parse a PKCS8 private key and SPKI public key from PEM strings.
    ///
    /// Either input may be a marker-less base64 body or carry literal
    /// `\n` escapes (the usual env-var mangling); both are repaired
    /// before parsing.
    ///
    /// # Errors
    ///
    /// [`TokenError::KeyRejected`] when either blob fails to parse.
    pub fn from_pems(private_pem: &str, public_pem: &str) -> Result<Self, TokenError> {
        let private_pem = normalize_pem(private_pem, "PRIVATE KEY");
        let public_pem = normalize_pem(public_pem, "PUBLIC KEY");

        let encoding = EncodingKey::from_rsa_pem(private_pem.as_bytes())
            .map_err(|e| TokenError::KeyRejected(format!("private key: {e}")))?;
        let decoding = DecodingKey::from_rsa_pem(public_pem.as_bytes())
            .map_err(|e| TokenError::KeyRejected(format!("public key: {e}")))?;

        Ok(Self { encoding, decoding })
    }

    /// Load the key pair from environment variables already set in the
    /// process.
    ///
    /// | Variable          | Required | Notes                       |
    /// |-------------------|----------|-----------------------------|
    /// | `JWT_PRIVATE_KEY` | **yes**  | PKCS8 private key, PEM      |
    /// | `JWT_PUBLIC_KEY`  | **yes**  | SPKI public key, PEM        |
    ///
    /// # Errors
    ///
    /// [`TokenError::MissingKeyConfig`] when a variable is unset,
    /// [`TokenError::KeyRejected`] when a value does not parse.
    pub fn from_env() -> Result<Self, TokenError> {
        let private_pem = std::env::var("JWT_PRIVATE_KEY")
            .map_err(|_| TokenError::MissingKeyConfig("JWT_PRIVATE_KEY"))?;
        let public_pem = std::env::var("JWT_PUBLIC_KEY")
            .map_err(|_| TokenError::MissingKeyConfig("JWT_PUBLIC_KEY"))?;
        Self::from_pems(&private_pem, &public_pem)
    }
}

impl std::fmt::Debug for RsaKeyPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Key material stays out of debug output.
        f.debug_struct("RsaKeyPair").finish_non_exhaustive()
    }
}
