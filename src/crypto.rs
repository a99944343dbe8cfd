//! Password hashing
//!
//! Credentials are stored as unsalted SHA-256 hex digests. The store
//! carries one fixed-length digest per profile and `authenticate` compares
//! it byte-for-byte against the digest of the password being tried.

use sha2::{Digest, Sha256};

/// Hash a password to its lowercase hex SHA-256 digest
pub fn hash_password(password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    format!("{:x}", hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_digest() {
        // sha256("password")
        assert_eq!(
            hash_password("password"),
            "5e884898da28047151d0e56f8dc6292773603d0d6aabbdd62a11ef721d1542d8"
        );
    }

    #[test]
    fn test_digest_is_fixed_length_hex() {
        let digest = hash_password("anything at all");
        assert_eq!(digest.len(), 64);
        assert!(digest.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(hash_password("hunter2"), hash_password("hunter2"));
        assert_ne!(hash_password("hunter2"), hash_password("hunter3"));
    }
}
