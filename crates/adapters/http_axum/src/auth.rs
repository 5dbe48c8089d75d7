//! Admin guard: bearer-token verification applied to `/api/admin`.

use std::sync::Arc;

use axum::extract::{Request, State};
use axum::http::header;
use axum::middleware::Next;
use axum::response::Response;

use navhub_app::ports::AdminVerifier;

use crate::error::ApiError;

const BEARER_PREFIX: &str = "Bearer ";

/// Accepts `Authorization: Bearer <token>` when the token equals the
/// configured one. An empty configured token rejects every request.
pub struct StaticTokenVerifier {
    token: String,
}

impl StaticTokenVerifier {
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

impl AdminVerifier for StaticTokenVerifier {
    fn verify(&self, credentials: Option<&str>) -> bool {
        if self.token.is_empty() {
            return false;
        }
        credentials
            .and_then(|value| value.strip_prefix(BEARER_PREFIX))
            .is_some_and(|presented| constant_time_eq(presented.as_bytes(), self.token.as_bytes()))
    }
}

/// Compare two byte strings without short-circuiting on the first mismatch.
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

/// Middleware rejecting requests that do not carry admin credentials.
///
/// Installed as a route layer, so it runs before the handler's extractors
/// read or validate the body.
///
/// # Errors
///
/// Returns [`ApiError::Unauthorized`] when the verifier refuses the request.
pub async fn require_admin<V>(
    State(verifier): State<Arc<V>>,
    req: Request,
    next: Next,
) -> Result<Response, ApiError>
where
    V: AdminVerifier + Send + Sync + 'static,
{
    let credentials = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok());

    if !verifier.verify(credentials) {
        tracing::warn!(path = %req.uri().path(), "unauthorized admin request");
        return Err(ApiError::Unauthorized);
    }
    Ok(next.run(req).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_accept_matching_bearer_token() {
        let verifier = StaticTokenVerifier::new("s3cret");
        assert!(verifier.verify(Some("Bearer s3cret")));
    }

    #[test]
    fn should_reject_wrong_or_missing_token() {
        let verifier = StaticTokenVerifier::new("s3cret");
        assert!(!verifier.verify(None));
        assert!(!verifier.verify(Some("Bearer s3cre")));
        assert!(!verifier.verify(Some("Bearer s3cret2")));
        assert!(!verifier.verify(Some("s3cret")));
        assert!(!verifier.verify(Some("Basic s3cret")));
    }

    #[test]
    fn should_reject_everyone_when_token_is_empty() {
        let verifier = StaticTokenVerifier::new("");
        assert!(!verifier.verify(Some("Bearer ")));
        assert!(!verifier.verify(None));
    }

    #[test]
    fn should_compare_equal_length_inputs() {
        assert!(constant_time_eq(b"abc", b"abc"));
        assert!(!constant_time_eq(b"abc", b"abd"));
        assert!(!constant_time_eq(b"abc", b"ab"));
    }
}
