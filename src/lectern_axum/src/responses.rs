use lectern_core::{CourseId, Email, Role, User, UserId};
use serde::Serialize;

/// Credential-free view of a user record. This is the only user shape
/// that ever leaves the service; the password digest has no path into
/// it.
#[derive(Debug, Clone, Serialize)]
pub struct UserProfile {
    pub id: UserId,
    pub name: String,
    pub email: Email,
    pub role: Role,
    pub subscriptions: Vec<CourseId>,
}

impl From<&User> for UserProfile {
    fn from(user: &User) -> Self {
        Self {
            id: user.id(),
            name: user.name().to_string(),
            email: user.email().clone(),
            role: user.role(),
            subscriptions: user.subscriptions().to_vec(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub message: String,
    pub activation_token: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub message: String,
    pub token: String,
    pub user: UserProfile,
}

#[derive(Debug, Serialize)]
pub struct RoleResponse {
    pub message: String,
    pub role: Role,
}
