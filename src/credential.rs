//! Bearer credential held by an [`ApiClient`](crate::api::ApiClient).
//!
//! Tokens are issued by the server and pasted in verbatim. Nothing here
//! verifies them; the credential is only consulted to decide whether an
//! `Authorization` header is attached.

use std::fmt;

const BEARER_PREFIX: &str = "Bearer ";

#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Accept an externally supplied token. Returns `None` for blank input.
    pub fn new(token: impl Into<String>) -> Option<Self> {
        let token = token.into();
        let trimmed = token.trim();
        if trimmed.is_empty() || trimmed == BEARER_PREFIX.trim_end() {
            return None;
        }
        Some(Self(trimmed.to_string()))
    }

    /// The token exactly as it was supplied.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Value for the `Authorization` header.
    ///
    /// Tokens pasted together with their scheme are sent unchanged.
    pub fn header_value(&self) -> String {
        if self.0.starts_with(BEARER_PREFIX) {
            self.0.clone()
        } else {
            format!("{}{}", BEARER_PREFIX, self.0)
        }
    }
}

// Keep tokens out of logs.
impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(..)")
    }
}

#[cfg(feature = "dev-token")]
mod dev {
    use serde::Serialize;

    use super::Credential;
    use crate::error::{Error, Result};

    /// Lifetime of a minted token, in seconds.
    pub const DEV_TOKEN_TTL: i64 = 2 * 60 * 60;

    pub const DEV_USER_ID: i64 = 1;

    pub const DEV_PERMISSIONS: &[&str] = &[
        "user:block:write",
        "user:fullName:write",
        "course:add",
        "course:user:add",
        "course:del",
        "quest:create",
        "quest:update",
        "quest:del",
        "quest:read",
        "course:test:add",
        "course:test:write",
        "course:read",
        "test:quest:update",
        "test:answer:read",
        "course:test:view",
    ];

    #[derive(Debug, Serialize)]
    struct DevClaims {
        user_id: i64,
        exp: i64,
        perms: Vec<&'static str>,
        permissions: Vec<&'static str>,
    }

    impl Credential {
        /// Mint an HS256 token for a development server sharing `secret`.
        pub fn mint_dev(secret: &str, now: i64) -> Result<Self> {
            if secret.is_empty() {
                return Err(Error::Config("Development token secret is empty".to_string()));
            }
            let claims = DevClaims {
                user_id: DEV_USER_ID,
                exp: now + DEV_TOKEN_TTL,
                perms: DEV_PERMISSIONS.to_vec(),
                permissions: DEV_PERMISSIONS.to_vec(),
            };
            let token = jsonwebtoken::encode(
                &jsonwebtoken::Header::default(),
                &claims,
                &jsonwebtoken::EncodingKey::from_secret(secret.as_bytes()),
            )
            .map_err(|e| Error::Config(format!("Failed to sign development token: {}", e)))?;
            Ok(Self(token))
        }

        /// Mint a token expiring two hours from the current time.
        pub fn mint_dev_now(secret: &str) -> Result<Self> {
            Self::mint_dev(secret, chrono::Utc::now().timestamp())
        }
    }

}

#[cfg(feature = "dev-token")]
pub use dev::{DEV_PERMISSIONS, DEV_TOKEN_TTL};
