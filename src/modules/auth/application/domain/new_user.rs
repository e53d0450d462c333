use email_address::EmailAddress;

use super::entities::UserRole;

pub const MIN_PASSWORD_LENGTH: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NewUserError {
    #[error("Email cannot be empty")]
    EmptyEmail,
    #[error("Invalid email format")]
    InvalidEmailFormat,
    #[error("Password must be at least 8 characters long")]
    PasswordTooShort,
    #[error("Name cannot be empty")]
    EmptyName,
}

/// Account details that passed validation. Email is trimmed and lowercased,
/// name is trimmed, password is kept as typed.
#[derive(Debug, Clone)]
pub struct NewUser {
    email: String,
    password: String,
    name: String,
    role: UserRole,
}

impl NewUser {
    pub fn new(
        email: String,
        password: String,
        name: String,
        role: Option<UserRole>,
    ) -> Result<Self, NewUserError> {
        let email = normalize_email(&email)?;
        validate_password(&password)?;
        let name = validate_name(&name)?;

        Ok(Self {
            email,
            password,
            name,
            role: role.unwrap_or_default(),
        })
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn role(&self) -> UserRole {
        self.role
    }
}

pub fn normalize_email(email: &str) -> Result<String, NewUserError> {
    let email = email.trim();

    if email.is_empty() {
        return Err(NewUserError::EmptyEmail);
    }

    if !EmailAddress::is_valid(email) {
        return Err(NewUserError::InvalidEmailFormat);
    }

    Ok(email.to_lowercase())
}

pub fn validate_password(password: &str) -> Result<(), NewUserError> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(NewUserError::PasswordTooShort);
    }
    Ok(())
}

pub fn validate_name(name: &str) -> Result<String, NewUserError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(NewUserError::EmptyName);
    }
    Ok(name.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_normalizes_email_and_defaults_role() {
        let user = NewUser::new(
            "  Alice@Example.COM ".to_string(),
            "password123".to_string(),
            " Alice ".to_string(),
            None,
        )
        .unwrap();

        assert_eq!(user.email(), "alice@example.com");
        assert_eq!(user.name(), "Alice");
        assert_eq!(user.role(), UserRole::Customer);
    }

    #[test]
    fn test_new_user_keeps_requested_role() {
        let user = NewUser::new(
            "agent@example.com".to_string(),
            "password123".to_string(),
            "Agent".to_string(),
            Some(UserRole::Agent),
        )
        .unwrap();

        assert_eq!(user.role(), UserRole::Agent);
    }

    #[test]
    fn test_new_user_rejects_invalid_email() {
        let result = NewUser::new(
            "not-an-email".to_string(),
            "password123".to_string(),
            "Bob".to_string(),
            None,
        );
        assert_eq!(result.unwrap_err(), NewUserError::InvalidEmailFormat);

        let result = NewUser::new(
            "   ".to_string(),
            "password123".to_string(),
            "Bob".to_string(),
            None,
        );
        assert_eq!(result.unwrap_err(), NewUserError::EmptyEmail);
    }

    #[test]
    fn test_new_user_rejects_short_password() {
        let result = NewUser::new(
            "bob@example.com".to_string(),
            "1234567".to_string(),
            "Bob".to_string(),
            None,
        );
        assert_eq!(result.unwrap_err(), NewUserError::PasswordTooShort);
    }

    #[test]
    fn test_new_user_rejects_blank_name() {
        let result = NewUser::new(
            "bob@example.com".to_string(),
            "password123".to_string(),
            "  ".to_string(),
            None,
        );
        assert_eq!(result.unwrap_err(), NewUserError::EmptyName);
    }

    #[test]
    fn test_password_length_counts_characters() {
        assert!(validate_password("pässwörd").is_ok());
        assert!(validate_password("short").is_err());
    }
}
