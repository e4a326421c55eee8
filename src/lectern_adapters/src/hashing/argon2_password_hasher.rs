use argon2::{
    Algorithm, Argon2, Params, PasswordHash, PasswordVerifier, Version,
    password_hash::{PasswordHasher as _, SaltString, rand_core},
};
use async_trait::async_trait;
use lectern_core::{Password, PasswordDigest, PasswordHasher, PasswordHasherError};
use secrecy::{ExposeSecret, Secret};

/// Argon2id hasher. The hot work runs on the blocking pool so the
/// request executor is never stalled by key derivation.
#[derive(Clone, Default)]
pub struct Argon2PasswordHasher;

impl Argon2PasswordHasher {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl PasswordHasher for Argon2PasswordHasher {
    #[tracing::instrument(name = "Computing password hash", skip_all)]
    async fn hash(&self, password: Password) -> Result<PasswordDigest, PasswordHasherError> {
        let current_span: tracing::Span = tracing::Span::current();
        let result = tokio::task::spawn_blocking(move || {
            current_span.in_scope(move || {
                let salt: SaltString = SaltString::generate(rand_core::OsRng);
                argon2()?
                    .hash_password(password.as_ref().expose_secret().as_bytes(), &salt)
                    .map(|h| PasswordDigest::new(Secret::from(h.to_string())))
                    .map_err(|e| PasswordHasherError::Unexpected(e.to_string()))
            })
        })
        .await
        .map_err(|e| PasswordHasherError::Unexpected(e.to_string()))?;

        result
    }

    #[tracing::instrument(name = "Verify password hash", skip_all)]
    async fn verify(
        &self,
        digest: &PasswordDigest,
        candidate: &Password,
    ) -> Result<(), PasswordHasherError> {
        let digest = digest.clone();
        let candidate = candidate.clone();

        let current_span: tracing::Span = tracing::Span::current();
        let result = tokio::task::spawn_blocking(move || {
            current_span.in_scope(|| {
                let expected: PasswordHash<'_> = PasswordHash::new(digest.as_ref().expose_secret())
                    .map_err(|e| PasswordHasherError::Unexpected(e.to_string()))?;

                argon2()?
                    .verify_password(
                        candidate.as_ref().expose_secret().as_bytes(),
                        &expected,
                    )
                    .map_err(|_| PasswordHasherError::Mismatch)
            })
        })
        .await
        .map_err(|e| PasswordHasherError::Unexpected(e.to_string()))?;

        result
    }
}

fn argon2() -> Result<Argon2<'static>, PasswordHasherError> {
    Ok(Argon2::new(
        Algorithm::Argon2id,
        Version::V0x13,
        Params::new(15000, 2, 1, None)
            .map_err(|e| PasswordHasherError::Unexpected(e.to_string()))?,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn password(raw: &str) -> Password {
        Password::try_from(Secret::from(raw.to_string())).unwrap()
    }

    #[tokio::test]
    async fn verifies_its_own_digest() {
        let hasher = Argon2PasswordHasher::new();
        let digest = hasher.hash(password("correct horse")).await.unwrap();

        assert!(hasher.verify(&digest, &password("correct horse")).await.is_ok());
    }

    #[tokio::test]
    async fn rejects_a_wrong_candidate() {
        let hasher = Argon2PasswordHasher::new();
        let digest = hasher.hash(password("correct horse")).await.unwrap();

        let result = hasher.verify(&digest, &password("battery staple")).await;
        assert_eq!(result.unwrap_err(), PasswordHasherError::Mismatch);
    }

    #[tokio::test]
    async fn digests_are_salted() {
        let hasher = Argon2PasswordHasher::new();
        let first = hasher.hash(password("same input")).await.unwrap();
        let second = hasher.hash(password("same input")).await.unwrap();

        assert_ne!(
            first.as_ref().expose_secret(),
            second.as_ref().expose_secret()
        );
    }

    #[tokio::test]
    async fn malformed_digest_is_unexpected_not_mismatch() {
        let hasher = Argon2PasswordHasher::new();
        let digest = PasswordDigest::new(Secret::from("not-a-phc-string".to_string()));

        let result = hasher.verify(&digest, &password("anything")).await;
        assert_eq!(
            result.unwrap_err(),
            PasswordHasherError::Unexpected(String::new())
        );
    }
}
