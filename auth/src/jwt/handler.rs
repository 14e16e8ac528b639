use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::Claims;
use super::claims::TokenType;
use super::errors::TokenError;

/// JWT token handler for encoding and decoding session claims.
///
/// Uses HS256 (HMAC with SHA-256) with a single symmetric secret. Decoding
/// only ever accepts HS256: a token whose header names any other algorithm
/// is rejected before signature verification, which closes the
/// algorithm-confusion hole where an attacker substitutes an asymmetric or
/// unsigned method.
pub struct JwtHandler {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
}

impl JwtHandler {
    /// Create a new JWT handler with a secret key.
    ///
    /// # Arguments
    /// * `secret` - Secret key for signing tokens (should be stored securely)
    ///
    /// # Security Notes
    /// - The secret should be at least 256 bits (32 bytes) for HS256
    /// - Store secrets in environment variables or secure vaults, never in code
    pub fn new(secret: &[u8]) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
        }
    }

    /// Encode claims into a signed token.
    ///
    /// # Errors
    /// * `SigningFailed` - Token encoding failed (secret misconfiguration)
    pub fn encode(&self, claims: &Claims) -> Result<String, TokenError> {
        let header = Header::new(self.algorithm);

        encode(&header, claims, &self.encoding_key)
            .map_err(|e| TokenError::SigningFailed(e.to_string()))
    }

    /// Decode a token and verify its signature and expiry.
    ///
    /// Expiry is checked with zero leeway: a token is rejected the second
    /// after its `exp` timestamp.
    ///
    /// # Errors
    /// * `Expired` - `exp` is in the past
    /// * `InvalidToken` - Malformed token, wrong algorithm, or bad signature
    pub fn decode(&self, token: &str) -> Result<Claims, TokenError> {
        let mut validation = Validation::new(self.algorithm);
        validation.leeway = 0;

        let token_data =
            decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
                match e.kind() {
                    ErrorKind::ExpiredSignature => TokenError::Expired,
                    _ => TokenError::InvalidToken(e.to_string()),
                }
            })?;

        Ok(token_data.claims)
    }

    /// Decode a token and additionally require a specific token type.
    ///
    /// # Errors
    /// * `Expired` - `exp` is in the past
    /// * `WrongTokenType` - Claims carry the other token type
    /// * `InvalidToken` - Malformed token, wrong algorithm, or bad signature
    pub fn validate(&self, token: &str, expected: TokenType) -> Result<Claims, TokenError> {
        let claims = self.decode(token)?;

        if claims.token_type != expected {
            return Err(TokenError::WrongTokenType);
        }

        Ok(claims)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    const SECRET: &[u8] = b"test_secret_key_at_least_32_bytes!";

    #[test]
    fn test_encode_and_decode() {
        let handler = JwtHandler::new(SECRET);

        let claims = Claims::access(42, "alice@example.com");
        let token = handler.encode(&claims).expect("Failed to encode token");
        assert!(!token.is_empty());

        let decoded = handler.decode(&token).expect("Failed to decode token");
        assert_eq!(decoded, claims);
    }

    #[test]
    fn test_validate_matching_type() {
        let handler = JwtHandler::new(SECRET);

        let token = handler
            .encode(&Claims::access(42, "alice@example.com"))
            .expect("Failed to encode token");

        let claims = handler
            .validate(&token, TokenType::Access)
            .expect("Failed to validate token");
        assert_eq!(claims.user_id, 42);
        assert_eq!(claims.email, "alice@example.com");
        assert_eq!(claims.token_type, TokenType::Access);
    }

    #[test]
    fn test_validate_rejects_wrong_type() {
        let handler = JwtHandler::new(SECRET);

        let access = handler
            .encode(&Claims::access(42, "alice@example.com"))
            .expect("Failed to encode token");
        let refresh = handler
            .encode(&Claims::refresh(42, "alice@example.com"))
            .expect("Failed to encode token");

        assert!(matches!(
            handler.validate(&access, TokenType::Refresh),
            Err(TokenError::WrongTokenType)
        ));
        assert!(matches!(
            handler.validate(&refresh, TokenType::Access),
            Err(TokenError::WrongTokenType)
        ));
    }

    #[test]
    fn test_decode_expired_token() {
        let handler = JwtHandler::new(SECRET);

        let mut claims = Claims::access(42, "alice@example.com");
        claims.iat = Utc::now().timestamp() - 120;
        claims.exp = Utc::now().timestamp() - 60;

        let token = handler.encode(&claims).expect("Failed to encode token");

        assert!(matches!(
            handler.decode(&token),
            Err(TokenError::Expired)
        ));
    }

    #[test]
    fn test_decode_tampered_signature() {
        let handler = JwtHandler::new(SECRET);

        let mut token = handler
            .encode(&Claims::access(42, "alice@example.com"))
            .expect("Failed to encode token");

        // Flip the last character of the signature segment
        let last = token.pop().expect("Token is empty");
        token.push(if last == 'A' { 'B' } else { 'A' });

        assert!(matches!(
            handler.decode(&token),
            Err(TokenError::InvalidToken(_))
        ));
    }

    #[test]
    fn test_decode_with_wrong_secret() {
        let handler1 = JwtHandler::new(b"secret1_at_least_32_bytes_long_key!");
        let handler2 = JwtHandler::new(b"secret2_at_least_32_bytes_long_key!");

        let token = handler1
            .encode(&Claims::access(42, "alice@example.com"))
            .expect("Failed to encode token");

        assert!(handler2.decode(&token).is_err());
    }

    #[test]
    fn test_decode_garbage() {
        let handler = JwtHandler::new(SECRET);
        assert!(handler.decode("invalid.token.here").is_err());
    }
}
