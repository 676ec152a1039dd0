use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::user::User;

const SENSITIVE_FIELDS: &[&str] = &["password"];

/// Fields to change on an existing user. `password` is plaintext here and is
/// hashed (or dropped) before it reaches storage.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UserChanges {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub suspended: Option<bool>,
}

impl UserChanges {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    pub fn with_suspended(mut self, suspended: bool) -> Self {
        self.suspended = Some(suspended);
        self
    }

    pub fn from_json(value: Value) -> ApplicationResult<Self> {
        serde_json::from_value(value).map_err(|err| ApplicationError::validation(err.to_string()))
    }

    pub fn to_json(&self) -> Map<String, Value> {
        let mut fields = Map::new();
        if let Some(username) = &self.username {
            fields.insert("username".into(), Value::from(username.as_str()));
        }
        if let Some(password) = &self.password {
            fields.insert("password".into(), Value::from(password.as_str()));
        }
        if let Some(role) = &self.role {
            fields.insert("role".into(), Value::from(role.as_str()));
        }
        if let Some(suspended) = self.suspended {
            fields.insert("suspended".into(), Value::from(suspended));
        }
        fields
    }

    /// Audit-log view of these changes against the stored `user`.
    pub fn logged_against(&self, user: &User) -> BTreeMap<String, String> {
        logged_changes(&self.to_json(), &user.loggable_fields())
    }
}

/// Describe each field of `updates` that differs from `prev` as
/// `"old => new"`. Sensitive fields are never reported.
///
/// Keys missing from `prev` render their old value as `undefined`; strings
/// render without quotes.
pub fn logged_changes(
    updates: &Map<String, Value>,
    prev: &Map<String, Value>,
) -> BTreeMap<String, String> {
    updates
        .iter()
        .filter(|(key, _)| !SENSITIVE_FIELDS.contains(&key.as_str()))
        .filter(|(key, value)| !prev.get(key.as_str()).is_some_and(|old| same_value(old, value)))
        .map(|(key, value)| {
            let old = prev.get(key.as_str()).map_or_else(|| "undefined".to_owned(), render);
            (key.clone(), format!("{old} => {}", render(value)))
        })
        .collect()
}

/// Numbers compare by value, so `1` and `1.0` are the same.
fn same_value(old: &Value, new: &Value) -> bool {
    match (old, new) {
        (Value::Number(old), Value::Number(new)) => old.as_f64() == new.as_f64(),
        _ => old == new,
    }
}

fn render(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
