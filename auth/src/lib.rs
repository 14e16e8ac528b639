//! Authentication utilities library
//!
//! Provides reusable authentication infrastructure for services:
//! - Password hashing (Argon2id)
//! - Signed, time-bounded session tokens (access + refresh pairs)
//! - Authentication coordination
//!
//! Token validity is stateless: a token is good iff its signature verifies,
//! its type matches the consumption context, and its expiry is in the
//! future. Nothing is tracked server-side, so there is no revocation — a
//! leaked access token stays valid until its 15-minute window closes.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash));
//! ```
//!
//! ## Session Tokens
//! ```
//! use auth::{Authenticator, TokenType};
//!
//! let auth = Authenticator::new(b"secret_key_at_least_32_bytes_long!").unwrap();
//!
//! // Register: hash password
//! let hash = auth.hash_password("password123").unwrap();
//!
//! // Login: verify and issue a token pair
//! assert!(auth.verify_password("password123", Some(&hash)));
//! let pair = auth.issue_tokens(42, "alice@example.com").unwrap();
//!
//! // Later: validate the access token
//! let claims = auth.validate_token(&pair.access_token, TokenType::Access).unwrap();
//! assert_eq!(claims.user_id, 42);
//! ```

pub mod authenticator;
pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use authenticator::Authenticator;
pub use authenticator::TokenPair;
pub use jwt::Claims;
pub use jwt::JwtHandler;
pub use jwt::TokenError;
pub use jwt::TokenType;
pub use jwt::ACCESS_TOKEN_TTL_SECS;
pub use jwt::REFRESH_TOKEN_TTL_SECS;
pub use password::PasswordError;
pub use password::PasswordHasher;
