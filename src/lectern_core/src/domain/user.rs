use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::{
    email::Email, identity::VerifiedIdentity, password::PasswordDigest, role::Role,
};

pub type UserId = Uuid;
pub type CourseId = Uuid;

/// Durable identity record. The password digest is optional because
/// accounts created through the federated provider hold no local
/// credential.
#[derive(Debug, Clone)]
pub struct User {
    id: UserId,
    name: String,
    email: Email,
    password_digest: Option<PasswordDigest>,
    role: Role,
    reset_password_expires_at: Option<DateTime<Utc>>,
    subscriptions: Vec<CourseId>,
}

impl User {
    pub fn new(name: String, email: Email, password_digest: PasswordDigest) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            email,
            password_digest: Some(password_digest),
            role: Role::default(),
            reset_password_expires_at: None,
            subscriptions: Vec::new(),
        }
    }

    /// Account created on first sight of a provider-asserted identity.
    pub fn from_federated_identity(identity: VerifiedIdentity) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: identity.name,
            email: identity.email,
            password_digest: None,
            role: Role::default(),
            reset_password_expires_at: None,
            subscriptions: Vec::new(),
        }
    }

    pub fn id(&self) -> UserId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn password_digest(&self) -> Option<&PasswordDigest> {
        self.password_digest.as_ref()
    }

    pub fn role(&self) -> Role {
        self.role
    }

    /// Server-persisted reset watermark; independent of the reset
    /// token's own expiry and authoritative over it.
    pub fn reset_password_expires_at(&self) -> Option<DateTime<Utc>> {
        self.reset_password_expires_at
    }

    pub fn subscriptions(&self) -> &[CourseId] {
        &self.subscriptions
    }

    pub fn set_password_digest(&mut self, digest: PasswordDigest) {
        self.password_digest = Some(digest);
    }

    pub fn set_reset_password_expiry(&mut self, expires_at: DateTime<Utc>) {
        self.reset_password_expires_at = Some(expires_at);
    }

    pub fn clear_reset_password_expiry(&mut self) {
        self.reset_password_expires_at = None;
    }

    pub fn set_role(&mut self, role: Role) {
        self.role = role;
    }
}

#[cfg(test)]
mod tests {
    use secrecy::Secret;

    use super::*;

    fn email(address: &str) -> Email {
        Email::try_from(Secret::from(address.to_string())).unwrap()
    }

    #[test]
    fn new_users_default_to_the_user_role() {
        let user = User::new(
            "Ann".to_string(),
            email("ann@example.com"),
            PasswordDigest::new(Secret::from("phc".to_string())),
        );
        assert_eq!(user.role(), Role::User);
        assert!(user.reset_password_expires_at().is_none());
        assert!(user.subscriptions().is_empty());
    }

    #[test]
    fn federated_users_carry_no_local_credential() {
        let user = User::from_federated_identity(VerifiedIdentity {
            email: email("fed@example.com"),
            name: "Fed".to_string(),
        });
        assert!(user.password_digest().is_none());
        assert_eq!(user.role(), Role::User);
    }

    #[test]
    fn reset_watermark_can_be_stamped_and_cleared() {
        let mut user = User::new(
            "Ann".to_string(),
            email("ann@example.com"),
            PasswordDigest::new(Secret::from("phc".to_string())),
        );
        let expiry = Utc::now() + chrono::Duration::minutes(5);
        user.set_reset_password_expiry(expiry);
        assert_eq!(user.reset_password_expires_at(), Some(expiry));
        user.clear_reset_password_expiry();
        assert!(user.reset_password_expires_at().is_none());
    }
}
