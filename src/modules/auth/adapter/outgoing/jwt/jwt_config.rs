use crate::config::{parse_or, required, ConfigError, EnvLookup};

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret_key: String,
    pub issuer: String,
    pub access_token_expiry: i64, // Expiration in seconds
}

impl JwtConfig {
    pub fn from_lookup(lookup: EnvLookup<'_>) -> Result<Self, ConfigError> {
        let secret_key = required(lookup, "JWT_SECRET")?;

        // HS256 requires at least 32 bytes
        if secret_key.len() < 32 {
            return Err(ConfigError::Invalid {
                key: "JWT_SECRET",
                reason: "must be at least 32 characters long for HS256".to_string(),
            });
        }

        let access_token_expiry: i64 = parse_or(lookup, "JWT_ACCESS_EXPIRY", 3600)?;
        if access_token_expiry <= 0 || access_token_expiry > 86400 {
            return Err(ConfigError::Invalid {
                key: "JWT_ACCESS_EXPIRY",
                reason: "must be between 1 and 86400 seconds (24 hours)".to_string(),
            });
        }

        let issuer = lookup("JWT_ISSUER").unwrap_or_else(|| "helpdesk".to_string());

        Ok(Self {
            secret_key,
            issuer,
            access_token_expiry,
        })
    }
}
