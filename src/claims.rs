use serde::{Deserialize, Serialize};

use crate::config::{SubjectKey, TokenPolicy};
use crate::error::TokenError;

/// The payload of an issued token: a subject identifier plus the three
/// standard time claims.
///
/// Exactly one of `sub` / `uid` is populated, per the issuing policy's
/// [`SubjectKey`]; the other is omitted from the wire payload entirely.
///
/// Invariant: `nbf <= iat <= exp`, and `exp - iat` equals the policy
/// lifetime exactly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// RFC 7519 §4.1.2 subject, under the `sub` convention.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,

    /// Subject under the non-standard `uid` convention.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,

    /// Issued-at, Unix seconds.
    pub iat: i64,
    /// Not-before, Unix seconds.  `iat` minus the policy's skew.
    pub nbf: i64,
    /// Expiration, Unix seconds.  `iat` plus the policy's lifetime.
    pub exp: i64,
}

impl Claims {
    /// Build a claims set for `subject` with time claims relative to the
    /// system clock.
    ///
    /// # Errors
    ///
    /// [`TokenError::EmptySubject`] when `subject` is empty.
    pub fn issue(subject: &str, policy: &TokenPolicy) -> Result<Self, TokenError> {
        Self::issue_at(subject, policy, unix_now())
    }

    /// Like [`issue`](Self::issue) with an explicit issued-at timestamp.
    pub fn issue_at(subject: &str, policy: &TokenPolicy, now: i64) -> Result<Self, TokenError> {
        if subject.is_empty() {
            return Err(TokenError::EmptySubject);
        }

        let iat = now;
        let (sub, uid) = match policy.subject_key {
            SubjectKey::Sub => (Some(subject.to_owned()), None),
            SubjectKey::Uid => (None, Some(subject.to_owned())),
        };

        Ok(Self {
            sub,
            uid,
            iat,
            nbf: iat - policy.nbf_skew_secs as i64,
            exp: iat + policy.lifetime_secs as i64,
        })
    }

    /// The subject identifier, whichever claim key carries it.
    pub fn subject(&self) -> Option<&str> {
        self.sub.as_deref().or(self.uid.as_deref())
    }

    /// Check the time claims against `now`: rejects `now < nbf` and
    /// `now >= exp`, so a token is usable from `nbf` inclusive up to
    /// `exp` exclusive.
    pub fn check_window(&self, now: i64) -> Result<(), TokenError> {
        if now < self.nbf {
            return Err(TokenError::TokenNotYetValid);
        }
        if now >= self.exp {
            return Err(TokenError::TokenExpired);
        }
        Ok(())
    }
}

/// Current Unix time in seconds.
pub(crate) fn unix_now() -> i64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("system clock before Unix epoch")
        .as_secs() as i64
}
