pub mod argon2_hasher;
pub mod bcrypt_hasher;

use argon2::Params;
use async_trait::async_trait;
use std::str::FromStr;

use crate::auth::application::ports::outgoing::password_hasher::{HashError, PasswordHasher};
use crate::config::{parse_or, ConfigError, EnvLookup};

pub use argon2_hasher::Argon2Hasher;
pub use bcrypt_hasher::BcryptHasher;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HasherKind {
    Argon2,
    Bcrypt,
}

impl FromStr for HasherKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "argon2" | "argon2id" => Ok(HasherKind::Argon2),
            "bcrypt" => Ok(HasherKind::Bcrypt),
            other => Err(format!("unknown password hasher '{}'", other)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct PasswordHashingConfig {
    pub kind: HasherKind,
    pub argon2: Params,
    pub bcrypt_cost: u32,
}

impl PasswordHashingConfig {
    pub fn from_lookup(lookup: EnvLookup<'_>) -> Result<Self, ConfigError> {
        let kind = parse_or(lookup, "PASSWORD_HASHER", HasherKind::Argon2)?;

        // Budget VPS friendly: 4MB memory, 3 iterations, 1 thread
        let memory_kib = parse_or(lookup, "ARGON2_MEMORY_KIB", 4 * 1024)?;
        let iterations = parse_or(lookup, "ARGON2_ITERATIONS", 3)?;
        let parallelism = parse_or(lookup, "ARGON2_PARALLELISM", 1)?;
        let argon2 = Params::new(memory_kib, iterations, parallelism, None).map_err(|e| {
            ConfigError::Invalid {
                key: "ARGON2_MEMORY_KIB",
                reason: e.to_string(),
            }
        })?;

        let bcrypt_cost = parse_or(lookup, "BCRYPT_COST", 12)?;
        if !(4..=31).contains(&bcrypt_cost) {
            return Err(ConfigError::Invalid {
                key: "BCRYPT_COST",
                reason: "must be between 4 and 31".to_string(),
            });
        }

        Ok(Self {
            kind,
            argon2,
            bcrypt_cost,
        })
    }
}

/// Hashes new passwords with the configured algorithm and verifies any hash
/// either algorithm produced, picked by its PHC/modular-crypt prefix.
#[derive(Clone)]
pub struct ConfiguredPasswordHasher {
    kind: HasherKind,
    argon2: Argon2Hasher,
    bcrypt: BcryptHasher,
}

impl ConfiguredPasswordHasher {
    pub fn new(config: &PasswordHashingConfig) -> Self {
        Self {
            kind: config.kind,
            argon2: Argon2Hasher::new(config.argon2.clone()),
            bcrypt: BcryptHasher::new(config.bcrypt_cost),
        }
    }
}

fn is_bcrypt_hash(hash: &str) -> bool {
    ["$2a$", "$2b$", "$2y$"]
        .iter()
        .any(|prefix| hash.starts_with(prefix))
}

#[async_trait]
impl PasswordHasher for ConfiguredPasswordHasher {
    async fn hash_password(&self, password: &str) -> Result<String, HashError> {
        match self.kind {
            HasherKind::Argon2 => self.argon2.hash_password(password).await,
            HasherKind::Bcrypt => self.bcrypt.hash_password(password).await,
        }
    }

    async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError> {
        if hash.starts_with("$argon2") {
            self.argon2.verify_password(password, hash).await
        } else if is_bcrypt_hash(hash) {
            self.bcrypt.verify_password(password, hash).await
        } else {
            Err(HashError::UnsupportedHash)
        }
    }
}
