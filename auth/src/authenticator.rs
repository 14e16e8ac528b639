use crate::jwt::Claims;
use crate::jwt::JwtHandler;
use crate::jwt::TokenError;
use crate::jwt::TokenType;
use crate::password::PasswordError;
use crate::password::PasswordHasher;

/// Authentication coordinator combining password verification and session
/// token handling.
///
/// Holds the process-wide signing secret (inside the handler) and a
/// fallback hash; both are set once at construction and never mutated.
pub struct Authenticator {
    password_hasher: PasswordHasher,
    jwt_handler: JwtHandler,
    fallback_hash: String,
}

/// A freshly issued access/refresh token pair.
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

impl Authenticator {
    /// Create a new authenticator.
    ///
    /// # Arguments
    /// * `jwt_secret` - Secret key for token signing
    ///
    /// # Errors
    /// * `PasswordError` - Generating the fallback hash failed
    pub fn new(jwt_secret: &[u8]) -> Result<Self, PasswordError> {
        let password_hasher = PasswordHasher::new();
        let fallback_hash = password_hasher.fallback_hash()?;

        Ok(Self {
            password_hasher,
            jwt_handler: JwtHandler::new(jwt_secret),
            fallback_hash,
        })
    }

    /// Hash a password for storage.
    ///
    /// # Errors
    /// * `PasswordError` - Hashing operation failed
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Verify a password against an account's stored hash, if any.
    ///
    /// When no account matched the login attempt, pass `None`: the password
    /// is then verified against the fallback hash so that missing accounts
    /// cost the same as wrong passwords. The result for `None` is always
    /// `false`.
    pub fn verify_password(&self, password: &str, stored_hash: Option<&str>) -> bool {
        match stored_hash {
            Some(hash) => self.password_hasher.verify(password, hash),
            None => {
                self.password_hasher.verify(password, &self.fallback_hash);
                false
            }
        }
    }

    /// Issue a fresh access/refresh token pair for an authenticated user.
    ///
    /// # Errors
    /// * `TokenError` - Token signing failed (secret misconfiguration)
    pub fn issue_tokens(&self, user_id: i64, email: &str) -> Result<TokenPair, TokenError> {
        let access_token = self.jwt_handler.encode(&Claims::access(user_id, email))?;
        let refresh_token = self.jwt_handler.encode(&Claims::refresh(user_id, email))?;

        Ok(TokenPair {
            access_token,
            refresh_token,
        })
    }

    /// Validate a token of the expected type and return its claims.
    ///
    /// # Errors
    /// * `TokenError` - Token is expired, of the wrong type, or invalid
    pub fn validate_token(&self, token: &str, expected: TokenType) -> Result<Claims, TokenError> {
        self.jwt_handler.validate(token, expected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &[u8] = b"test_secret_key_at_least_32_bytes!";

    #[test]
    fn test_issue_and_validate_pair() {
        let authenticator = Authenticator::new(SECRET).expect("Failed to create authenticator");

        let pair = authenticator
            .issue_tokens(42, "alice@example.com")
            .expect("Failed to issue tokens");

        let access = authenticator
            .validate_token(&pair.access_token, TokenType::Access)
            .expect("Access token validation failed");
        assert_eq!(access.user_id, 42);
        assert_eq!(access.email, "alice@example.com");
        assert_eq!(access.token_type, TokenType::Access);

        let refresh = authenticator
            .validate_token(&pair.refresh_token, TokenType::Refresh)
            .expect("Refresh token validation failed");
        assert_eq!(refresh.token_type, TokenType::Refresh);
    }

    #[test]
    fn test_refresh_token_rejected_as_access() {
        let authenticator = Authenticator::new(SECRET).expect("Failed to create authenticator");

        let pair = authenticator
            .issue_tokens(42, "alice@example.com")
            .expect("Failed to issue tokens");

        assert!(matches!(
            authenticator.validate_token(&pair.refresh_token, TokenType::Access),
            Err(TokenError::WrongTokenType)
        ));
    }

    #[test]
    fn test_verify_password_roundtrip() {
        let authenticator = Authenticator::new(SECRET).expect("Failed to create authenticator");

        let hash = authenticator
            .hash_password("correct_password")
            .expect("Failed to hash password");

        assert!(authenticator.verify_password("correct_password", Some(&hash)));
        assert!(!authenticator.verify_password("wrong_password", Some(&hash)));
    }

    #[test]
    fn test_verify_password_missing_account_is_false() {
        let authenticator = Authenticator::new(SECRET).expect("Failed to create authenticator");

        assert!(!authenticator.verify_password("any_password", None));
        assert!(!authenticator.verify_password("", None));
    }
}
