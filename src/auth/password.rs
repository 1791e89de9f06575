use argon2::password_hash::{
    rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString,
};
use argon2::Argon2;

/// Hash a password with a freshly generated salt. The PHC string carries the
/// salt and parameters, so nothing else needs to be stored.
pub(crate) fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
    let salt = SaltString::generate(&mut OsRng);

    Ok(Argon2::default()
        .hash_password(password.as_bytes(), &salt)?
        .to_string())
}

/// A malformed stored hash verifies as false rather than erroring, so the
/// caller can't tell a bad password from a bad record.
pub(crate) fn verify_password(password: &str, stored_hash: &str) -> bool {
    PasswordHash::new(stored_hash)
        .map(|parsed| {
            Argon2::default()
                .verify_password(password.as_bytes(), &parsed)
                .is_ok()
        })
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_and_verify_round_trips() {
        let hash = hash_password("pw123").unwrap();

        assert_ne!(hash, "pw123");
        assert!(verify_password("pw123", &hash));
    }

    #[test]
    fn wrong_password_fails_verification() {
        let hash = hash_password("pw123").unwrap();

        assert!(!verify_password("pw124", &hash));
    }

    #[test]
    fn salts_differ_between_calls() {
        let first = hash_password("pw123").unwrap();
        let second = hash_password("pw123").unwrap();

        assert_ne!(first, second);
    }

    #[test]
    fn garbage_stored_hash_verifies_as_false() {
        assert!(!verify_password("pw123", "not a phc string"));
    }
}
