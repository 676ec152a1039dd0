// src/domain/user/entity.rs
use crate::domain::user::value_objects::{PasswordHash, Role, UserId, Username};
use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: UserId,
    pub username: Username,
    pub password_hash: PasswordHash,
    pub role: Role,
    pub suspended: bool,
    pub created_at: DateTime<Utc>,
    pub last_updated_at: DateTime<Utc>,
}

impl User {
    /// Field values safe to write to logs and audit trails. The password hash
    /// is never included.
    pub fn loggable_fields(&self) -> Map<String, Value> {
        let mut fields = Map::new();
        fields.insert("id".into(), Value::from(i64::from(self.id)));
        fields.insert("username".into(), Value::from(self.username.as_str()));
        fields.insert("role".into(), Value::from(self.role.as_str()));
        fields.insert("suspended".into(), Value::from(self.suspended));
        fields
    }
}

#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: Username,
    pub password_hash: PasswordHash,
    pub role: Role,
    pub suspended: bool,
    pub created_at: DateTime<Utc>,
}

impl NewUser {
    pub fn new(
        username: Username,
        password_hash: PasswordHash,
        role: Role,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            username,
            password_hash,
            role,
            suspended: false,
            created_at,
        }
    }
}

/// Column changes applied to one row. `last_updated_at` is always written.
#[derive(Debug, Clone)]
pub struct UserPatch {
    pub username: Option<Username>,
    pub password_hash: Option<PasswordHash>,
    pub role: Option<Role>,
    pub suspended: Option<bool>,
    pub last_updated_at: DateTime<Utc>,
}

impl UserPatch {
    pub fn new(last_updated_at: DateTime<Utc>) -> Self {
        Self {
            username: None,
            password_hash: None,
            role: None,
            suspended: None,
            last_updated_at,
        }
    }

    pub fn with_username(mut self, username: Username) -> Self {
        self.username = Some(username);
        self
    }

    pub fn with_password_hash(mut self, password_hash: PasswordHash) -> Self {
        self.password_hash = Some(password_hash);
        self
    }

    pub fn with_role(mut self, role: Role) -> Self {
        self.role = Some(role);
        self
    }

    pub fn with_suspended(mut self, suspended: bool) -> Self {
        self.suspended = Some(suspended);
        self
    }
}
