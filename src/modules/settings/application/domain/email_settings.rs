/// Mail server configuration. There is at most one stored row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailSettings {
    pub imap_host: String,
    pub imap_port: u16,
    pub imap_username: String,
    pub imap_password: String,
    pub smtp_host: String,
    pub smtp_port: u16,
    pub smtp_username: String,
    pub smtp_password: String,
}

pub const DEFAULT_IMAP_HOST: &str = "imap.example.com";
pub const DEFAULT_IMAP_PORT: u16 = 993;
pub const DEFAULT_SMTP_HOST: &str = "smtp.example.com";
pub const DEFAULT_SMTP_PORT: u16 = 587;

impl Default for EmailSettings {
    fn default() -> Self {
        Self {
            imap_host: DEFAULT_IMAP_HOST.to_string(),
            imap_port: DEFAULT_IMAP_PORT,
            imap_username: String::new(),
            imap_password: String::new(),
            smtp_host: DEFAULT_SMTP_HOST.to_string(),
            smtp_port: DEFAULT_SMTP_PORT,
            smtp_username: String::new(),
            smtp_password: String::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SettingsValidationError {
    #[error("{0} host cannot be empty")]
    EmptyHost(&'static str),

    #[error("{0} port must be between 1 and 65535")]
    InvalidPort(&'static str),
}

impl EmailSettings {
    /// Trims both hosts and checks ports. Credentials are stored as given.
    pub fn validated(mut self) -> Result<Self, SettingsValidationError> {
        self.imap_host = self.imap_host.trim().to_string();
        self.smtp_host = self.smtp_host.trim().to_string();

        if self.imap_host.is_empty() {
            return Err(SettingsValidationError::EmptyHost("IMAP"));
        }
        if self.smtp_host.is_empty() {
            return Err(SettingsValidationError::EmptyHost("SMTP"));
        }
        if self.imap_port == 0 {
            return Err(SettingsValidationError::InvalidPort("IMAP"));
        }
        if self.smtp_port == 0 {
            return Err(SettingsValidationError::InvalidPort("SMTP"));
        }

        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = EmailSettings::default();
        assert_eq!(settings.imap_host, "imap.example.com");
        assert_eq!(settings.imap_port, 993);
        assert_eq!(settings.smtp_host, "smtp.example.com");
        assert_eq!(settings.smtp_port, 587);
        assert!(settings.imap_username.is_empty());
        assert!(settings.smtp_password.is_empty());
    }

    #[test]
    fn test_validated_trims_hosts() {
        let settings = EmailSettings {
            imap_host: "  mail.corp.test ".to_string(),
            ..Default::default()
        }
        .validated()
        .unwrap();

        assert_eq!(settings.imap_host, "mail.corp.test");
    }

    #[test]
    fn test_validated_rejects_blank_host_and_zero_port() {
        let blank = EmailSettings {
            smtp_host: "   ".to_string(),
            ..Default::default()
        };
        assert_eq!(
            blank.validated(),
            Err(SettingsValidationError::EmptyHost("SMTP"))
        );

        let zero = EmailSettings {
            imap_port: 0,
            ..Default::default()
        };
        assert_eq!(
            zero.validated(),
            Err(SettingsValidationError::InvalidPort("IMAP"))
        );
    }
}
