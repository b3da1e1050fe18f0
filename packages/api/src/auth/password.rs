//! # Password hashing and verification (Argon2id)
//!
//! The local email + password path stores Argon2id hashes in PHC string
//! format (e.g. `$argon2id$v=19$m=19456,t=2,p=1$...`) in the
//! `password_hash` column. [`hash_password`] salts via [`OsRng`];
//! [`verify_password`] returns `Ok(false)` on mismatch and `Err` only for a
//! malformed stored hash.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

/// Hash a password using Argon2id. Returns a PHC-format string.
pub fn hash_password(password: &str) -> Result<String, String> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();
    let hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| format!("Failed to hash password: {}", e))?;
    Ok(hash.to_string())
}

/// Verify a password against a PHC-format hash string.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, String> {
    let parsed_hash =
        PasswordHash::new(hash).map_err(|e| format!("Invalid password hash: {}", e))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_and_verify_round_trip() {
        let hash = hash_password("petuk-samir-123").unwrap();
        assert!(hash.starts_with("$argon2id$"));
        assert!(verify_password("petuk-samir-123", &hash).unwrap());
        assert!(!verify_password("wrong-password", &hash).unwrap());
    }

    #[test]
    fn malformed_hash_is_an_error_not_a_match() {
        assert!(verify_password("anything", "not-a-phc-string").is_err());
    }
}
