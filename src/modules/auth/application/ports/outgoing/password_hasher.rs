use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HashError {
    #[error("Password hashing failed")]
    HashFailed,

    #[error("Password verification failed")]
    VerifyFailed,

    #[error("Unsupported password hash format")]
    UnsupportedHash,

    #[error("Background task failed")]
    TaskFailed,
}

/// Slow salted hashing. Implementations run the work off the async executor.
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    async fn hash_password(&self, password: &str) -> Result<String, HashError>;

    /// `Ok(false)` means a well-formed hash that does not match.
    async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError>;
}
