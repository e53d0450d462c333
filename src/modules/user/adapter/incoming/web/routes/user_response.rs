use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::auth::application::domain::entities::{User, UserRole};

/// Public view of a user. The password hash is never serialized.
#[derive(Debug, Serialize, ToSchema)]
pub struct UserResponse {
    #[schema(example = "123e4567-e89b-12d3-a456-426614174000")]
    pub id: Uuid,

    #[schema(example = "jane@example.com")]
    pub email: String,

    #[schema(example = "Jane Doe")]
    pub name: String,

    pub role: UserRole,

    #[schema(example = false)]
    pub is_suspended: bool,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.value(),
            email: user.email,
            name: user.name,
            role: user.role,
            is_suspended: user.is_suspended,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}
