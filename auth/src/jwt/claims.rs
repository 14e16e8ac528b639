use std::fmt;

use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Access token validity window in seconds (15 minutes).
pub const ACCESS_TOKEN_TTL_SECS: i64 = 15 * 60;

/// Refresh token validity window in seconds (7 days).
pub const REFRESH_TOKEN_TTL_SECS: i64 = 7 * 24 * 60 * 60;

/// The two kinds of session token this service issues.
///
/// A token is only accepted in the consumption context matching its type:
/// a refresh token is never valid where an access token is required, and
/// vice versa.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenType {
    Access,
    Refresh,
}

impl TokenType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenType::Access => "access",
            TokenType::Refresh => "refresh",
        }
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Session claims embedded in a signed token.
///
/// Wire shape: `{"user_id": ..., "email": ..., "type": "access"|"refresh",
/// "iat": ..., "exp": ...}`. Claims are never persisted; token validity is
/// a pure function of the signature and the embedded timestamps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    pub user_id: i64,
    pub email: String,

    #[serde(rename = "type")]
    pub token_type: TokenType,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Claims for a short-lived access token, valid for 15 minutes.
    pub fn access(user_id: i64, email: &str) -> Self {
        Self::with_ttl(user_id, email, TokenType::Access, ACCESS_TOKEN_TTL_SECS)
    }

    /// Claims for a long-lived refresh token, valid for 7 days.
    pub fn refresh(user_id: i64, email: &str) -> Self {
        Self::with_ttl(user_id, email, TokenType::Refresh, REFRESH_TOKEN_TTL_SECS)
    }

    fn with_ttl(user_id: i64, email: &str, token_type: TokenType, ttl_secs: i64) -> Self {
        let now = Utc::now();
        let expiration = now + Duration::seconds(ttl_secs);

        Self {
            user_id,
            email: email.to_string(),
            token_type,
            iat: now.timestamp(),
            exp: expiration.timestamp(),
        }
    }

    /// Check if the claims are expired at the given Unix timestamp.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        self.exp < current_timestamp
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_access_claims_window() {
        let claims = Claims::access(42, "alice@example.com");

        assert_eq!(claims.user_id, 42);
        assert_eq!(claims.email, "alice@example.com");
        assert_eq!(claims.token_type, TokenType::Access);
        assert_eq!(claims.exp - claims.iat, ACCESS_TOKEN_TTL_SECS);
    }

    #[test]
    fn test_refresh_claims_window() {
        let claims = Claims::refresh(42, "alice@example.com");

        assert_eq!(claims.token_type, TokenType::Refresh);
        assert_eq!(claims.exp - claims.iat, REFRESH_TOKEN_TTL_SECS);
    }

    #[test]
    fn test_wire_shape() {
        let claims = Claims::access(7, "bob@example.com");
        let json = serde_json::to_value(&claims).expect("Failed to serialize claims");

        assert_eq!(json["user_id"], 7);
        assert_eq!(json["email"], "bob@example.com");
        assert_eq!(json["type"], "access");
        assert!(json["iat"].is_i64());
        assert!(json["exp"].is_i64());
    }

    #[test]
    fn test_is_expired() {
        let mut claims = Claims::access(1, "a@example.com");
        claims.exp = 1000;

        assert!(!claims.is_expired(999));
        assert!(!claims.is_expired(1000));
        assert!(claims.is_expired(1001));
    }
}
