use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::Deserialize;

use crate::error::ApiError;
use crate::state::AppState;

/// Claims read from an identity-provider token.
#[derive(Debug, Deserialize)]
pub struct IdentityClaims {
    pub sub: String,
    pub exp: u64,
    #[serde(default)]
    pub iss: Option<String>,
}

/// Claims a token must carry beyond a valid signature and expiry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClaimPolicy {
    pub issuer: Option<String>,
    pub audience: Option<String>,
}

/// Verifies bearer tokens issued by the external identity provider.
pub struct TokenVerifier {
    key: DecodingKey,
    validation: Validation,
}

impl TokenVerifier {
    /// Shared-secret (HS256) tokens.
    pub fn hs256(secret: &[u8], policy: &ClaimPolicy) -> Self {
        Self::new(DecodingKey::from_secret(secret), Algorithm::HS256, policy)
    }

    /// Public-key (RS256) tokens, key given as PEM.
    pub fn rs256_pem(pem: &[u8], policy: &ClaimPolicy) -> Result<Self, jsonwebtoken::errors::Error> {
        Ok(Self::new(DecodingKey::from_rsa_pem(pem)?, Algorithm::RS256, policy))
    }

    fn new(key: DecodingKey, algorithm: Algorithm, policy: &ClaimPolicy) -> Self {
        let mut validation = Validation::new(algorithm);
        validation.validate_exp = true;
        if let Some(iss) = &policy.issuer {
            validation.set_issuer(&[iss]);
        }
        match &policy.audience {
            Some(aud) => validation.set_audience(&[aud]),
            // No configured audience: `aud` is not checked.
            None => validation.validate_aud = false,
        }
        Self { key, validation }
    }

    pub fn verify(&self, token: &str) -> Result<IdentityClaims, jsonwebtoken::errors::Error> {
        Ok(decode::<IdentityClaims>(token, &self.key, &self.validation)?.claims)
    }
}

/// Authenticated caller. `handle` is the identity provider's subject.
#[derive(Clone, Debug)]
pub struct AuthUser {
    pub handle: String,
}

/// Bearer token middleware.
///
/// Extracts `Authorization: Bearer <token>`, verifies it, and inserts an
/// [`AuthUser`] into request extensions for handlers to use.
pub async fn require_auth(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let unauthorized = || ApiError::Unauthorized("Not authorized".to_string());

    let verifier = state.verifier.as_deref().ok_or_else(|| {
        tracing::warn!("rejecting authenticated request: no token verifier configured");
        unauthorized()
    })?;

    let token = req
        .headers()
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .filter(|t| !t.is_empty())
        .ok_or_else(unauthorized)?;

    let claims = verifier.verify(token).map_err(|e| {
        tracing::info!(error = %e, "token rejected");
        unauthorized()
    })?;

    req.extensions_mut().insert(AuthUser { handle: claims.sub });

    Ok(next.run(req).await)
}
