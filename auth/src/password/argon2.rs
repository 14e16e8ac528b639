use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::PasswordHash;
use argon2::password_hash::PasswordHasher as Argon2PasswordHasher;
use argon2::password_hash::PasswordVerifier;
use argon2::password_hash::SaltString;
use argon2::Argon2;

use super::errors::PasswordError;

/// Password hashing implementation.
///
/// Provides cryptographic password hashing (internally uses Argon2id).
/// Unlike bcrypt, Argon2 has no useful upper bound on input length, so
/// this type neither truncates nor rejects long inputs; callers enforce
/// their own length policy before hashing.
pub struct PasswordHasher;

impl PasswordHasher {
    /// Create a new password hasher instance.
    pub fn new() -> Self {
        Self
    }

    /// Hash a plaintext password securely.
    ///
    /// Uses Argon2id with random salt generation.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to hash
    ///
    /// # Returns
    /// PHC string format hash (includes algorithm, parameters, salt, and hash)
    ///
    /// # Errors
    /// * `HashingFailed` - Password hashing operation failed
    pub fn hash(&self, password: &str) -> Result<String, PasswordError> {
        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();

        argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| PasswordError::HashingFailed(e.to_string()))
    }

    /// Verify a password against a stored hash.
    ///
    /// Returns `false` for any mismatch, including a malformed or foreign
    /// hash string and an empty password. It never errors: the caller must
    /// not be able to tell a bad password from a bad hash.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to verify
    /// * `hash` - Stored password hash in PHC string format
    pub fn verify(&self, password: &str, hash: &str) -> bool {
        let Ok(parsed_hash) = PasswordHash::new(hash) else {
            return false;
        };

        Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok()
    }

    /// Hash of a random throwaway password.
    ///
    /// Generated once at startup and verified against whenever no account
    /// matches a login attempt, so lookups that miss cost the same as
    /// lookups that hit.
    ///
    /// # Errors
    /// * `HashingFailed` - Password hashing operation failed
    pub fn fallback_hash(&self) -> Result<String, PasswordError> {
        let throwaway = SaltString::generate(&mut OsRng);
        self.hash(throwaway.as_str())
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let hasher = PasswordHasher::new();
        let password = "my_secure_password";

        let hash = hasher.hash(password).expect("Failed to hash password");

        assert!(hasher.verify(password, &hash));
        assert!(!hasher.verify("wrong_password", &hash));
    }

    #[test]
    fn test_hashes_are_salted() {
        let hasher = PasswordHasher::new();

        let first = hasher.hash("same_password").expect("Failed to hash");
        let second = hasher.hash("same_password").expect("Failed to hash");

        assert_ne!(first, second);
        assert!(hasher.verify("same_password", &first));
        assert!(hasher.verify("same_password", &second));
    }

    #[test]
    fn test_verify_malformed_hash_is_false() {
        let hasher = PasswordHasher::new();
        assert!(!hasher.verify("password", "not_a_phc_string"));
        assert!(!hasher.verify("password", ""));
    }

    #[test]
    fn test_verify_empty_password_is_false() {
        let hasher = PasswordHasher::new();
        let hash = hasher.hash("something").expect("Failed to hash");
        assert!(!hasher.verify("", &hash));
    }

    #[test]
    fn test_fallback_hash_matches_nothing_likely() {
        let hasher = PasswordHasher::new();
        let fallback = hasher.fallback_hash().expect("Failed to hash");

        assert!(fallback.starts_with("$argon2"));
        assert!(!hasher.verify("password123", &fallback));
    }
}
