use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use axum::http::{header, HeaderValue, Method};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::middleware::auth::{ClaimPolicy, TokenVerifier};

const DEFAULT_BUCKET: &str = "carepath";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:5000";
const DEFAULT_ALLOWED_ORIGINS: &str = "http://localhost:5173";

/// Where symptom-check history is kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreBackend {
    Memory,
    S3 { bucket: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AllowedOrigins {
    Any,
    List(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SigningKey {
    Hs256Secret(String),
    Rs256PublicPem(String),
}

/// Runtime configuration, read from `CAREPATH_*` environment variables.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub store: StoreBackend,
    pub bind_addr: SocketAddr,
    pub allowed_origins: AllowedOrigins,
    pub signing_key: Option<SigningKey>,
    pub claims: ClaimPolicy,
    /// JSON file of facilities loaded into an empty directory at startup.
    pub facilities_seed: Option<PathBuf>,
}

impl ApiConfig {
    pub fn from_env() -> eyre::Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build from any variable source. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> eyre::Result<Self> {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let store = match var("CAREPATH_STORE").as_deref().unwrap_or("memory") {
            "memory" => StoreBackend::Memory,
            "s3" => StoreBackend::S3 {
                bucket: var("CAREPATH_BUCKET").unwrap_or_else(|| DEFAULT_BUCKET.to_string()),
            },
            other => {
                return Err(eyre::eyre!(
                    "CAREPATH_STORE must be \"memory\" or \"s3\", got {other:?}"
                ));
            }
        };

        let bind = var("CAREPATH_BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr: SocketAddr = bind
            .parse()
            .map_err(|e| eyre::eyre!("invalid CAREPATH_BIND_ADDR {bind:?}: {e}"))?;

        let origins =
            var("CAREPATH_ALLOWED_ORIGINS").unwrap_or_else(|| DEFAULT_ALLOWED_ORIGINS.to_string());
        let origins: Vec<String> = origins
            .split(',')
            .map(str::trim)
            .filter(|o| !o.is_empty())
            .map(str::to_string)
            .collect();
        let allowed_origins = if origins.iter().any(|o| o == "*") {
            AllowedOrigins::Any
        } else {
            for origin in &origins {
                HeaderValue::from_str(origin)
                    .map_err(|_| eyre::eyre!("invalid origin in CAREPATH_ALLOWED_ORIGINS: {origin:?}"))?;
            }
            AllowedOrigins::List(origins)
        };

        let signing_key = match (var("CAREPATH_JWT_PUBLIC_KEY"), var("CAREPATH_JWT_SECRET")) {
            (Some(pem), _) => Some(SigningKey::Rs256PublicPem(pem)),
            (None, Some(secret)) => Some(SigningKey::Hs256Secret(secret)),
            (None, None) => None,
        };

        Ok(Self {
            store,
            bind_addr,
            allowed_origins,
            signing_key,
            claims: ClaimPolicy {
                issuer: var("CAREPATH_JWT_ISSUER"),
                audience: var("CAREPATH_JWT_AUDIENCE"),
            },
            facilities_seed: var("CAREPATH_FACILITIES_SEED").map(PathBuf::from),
        })
    }

    pub fn token_verifier(&self) -> eyre::Result<Option<TokenVerifier>> {
        Ok(match &self.signing_key {
            Some(SigningKey::Hs256Secret(secret)) => {
                Some(TokenVerifier::hs256(secret.as_bytes(), &self.claims))
            }
            Some(SigningKey::Rs256PublicPem(pem)) => Some(
                TokenVerifier::rs256_pem(pem.as_bytes(), &self.claims)
                    .map_err(|e| eyre::eyre!("invalid CAREPATH_JWT_PUBLIC_KEY: {e}"))?,
            ),
            None => None,
        })
    }

    pub fn cors_layer(&self) -> CorsLayer {
        let methods = [Method::GET, Method::POST, Method::PUT, Method::DELETE, Method::OPTIONS];
        let layer = CorsLayer::new()
            .allow_methods(methods)
            .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

        match &self.allowed_origins {
            // Credentials cannot be combined with a wildcard origin.
            AllowedOrigins::Any => layer.allow_origin(Any),
            AllowedOrigins::List(origins) => layer
                .allow_origin(AllowOrigin::list(
                    origins.iter().filter_map(|o| HeaderValue::from_str(o).ok()),
                ))
                .allow_credentials(true),
        }
    }
}
