use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::errors::{StoreError, StoreResult};

pub fn hash_password(password: &str) -> StoreResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|err| {
            log::error!("password hashing failed: {}", err);
            StoreError::Storage
        })?;
    Ok(hash.to_string())
}

pub fn verify_password(password: &str, stored_hash: &str) -> bool {
    match PasswordHash::new(stored_hash) {
        Ok(parsed) => Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok(),
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_and_verify_round_trip() {
        let hash = hash_password("pw123").unwrap();
        assert!(verify_password("pw123", &hash));
        assert!(!verify_password("wrong", &hash));
    }

    #[test]
    fn same_password_salts_differently() {
        let first = hash_password("pw123").unwrap();
        let second = hash_password("pw123").unwrap();
        assert_ne!(first, second);
        assert!(verify_password("pw123", &first));
        assert!(verify_password("pw123", &second));
    }

    #[test]
    fn garbage_stored_hash_never_verifies() {
        assert!(!verify_password("pw123", "not-a-phc-string"));
        assert!(!verify_password("pw123", ""));
    }
}
