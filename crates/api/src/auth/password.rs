//! Argon2id password hashing and verification.
//!
//! Hashes are stored in PHC string format, so algorithm parameters and the
//! per-password random salt travel with the hash itself. The raw password is
//! never persisted.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;

/// Hash a plaintext password with Argon2id and a fresh random salt.
pub fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default(); // Argon2id with default params
    let hash = argon2.hash_password(password.as_bytes(), &salt)?;
    Ok(hash.to_string())
}

/// Verify a plaintext password against a stored PHC-formatted hash.
///
/// Returns `Ok(false)` on mismatch; errors only on a malformed hash.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, argon2::password_hash::Error> {
    let parsed_hash = PasswordHash::new(hash)?;
    match Argon2::default().verify_password(password.as_bytes(), &parsed_hash) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_is_argon2id_phc_and_verifies() {
        let hash = hash_password("summer-rooftop-playlist").expect("hashing succeeds");
        assert!(hash.starts_with("$argon2id$"), "expected argon2id PHC prefix");

        let ok = verify_password("summer-rooftop-playlist", &hash).expect("verify succeeds");
        assert!(ok);
    }

    #[test]
    fn wrong_password_verifies_false() {
        let hash = hash_password("the-actual-password").expect("hashing succeeds");
        let ok = verify_password("a-guess", &hash).expect("verify succeeds");
        assert!(!ok);
    }

    #[test]
    fn salts_differ_between_hashes() {
        let a = hash_password("same-input").expect("hashing succeeds");
        let b = hash_password("same-input").expect("hashing succeeds");
        assert_ne!(a, b, "each hash must embed a fresh salt");
    }

    #[test]
    fn malformed_hash_is_an_error() {
        assert!(verify_password("whatever", "not-a-phc-string").is_err());
    }
}
