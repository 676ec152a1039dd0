// src/domain/user/filter.rs
use crate::domain::errors::{DomainError, DomainResult};
use serde_json::Value;

/// Equality conjunction over the user columns that may be queried.
///
/// Field names are a closed set, so nothing a caller supplies ever reaches
/// the SQL text; values are always bound as parameters. The empty filter
/// matches every row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserFilter {
    id: Option<i64>,
    username: Option<String>,
    role: Option<String>,
    suspended: Option<bool>,
}

/// One `column = value` term of a [`UserFilter`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Condition {
    Id(i64),
    Username(String),
    Role(String),
    Suspended(bool),
}

impl Condition {
    pub fn column(&self) -> &'static str {
        match self {
            Condition::Id(_) => "id",
            Condition::Username(_) => "username",
            Condition::Role(_) => "role",
            Condition::Suspended(_) => "suspended",
        }
    }
}

impl UserFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    pub fn suspended(mut self, suspended: bool) -> Self {
        self.suspended = Some(suspended);
        self
    }

    pub fn conditions(&self) -> Vec<Condition> {
        let mut conditions = Vec::new();
        if let Some(id) = self.id {
            conditions.push(Condition::Id(id));
        }
        if let Some(username) = &self.username {
            conditions.push(Condition::Username(username.clone()));
        }
        if let Some(role) = &self.role {
            conditions.push(Condition::Role(role.clone()));
        }
        if let Some(suspended) = self.suspended {
            conditions.push(Condition::Suspended(suspended));
        }
        conditions
    }

    /// Parse a JSON object such as `{"username": "alice"}`. Unknown fields and
    /// values of the wrong type are rejected.
    pub fn from_json(value: &Value) -> DomainResult<Self> {
        let object = match value {
            Value::Object(object) => object,
            Value::Null => return Ok(Self::new()),
            other => {
                return Err(DomainError::Validation(format!(
                    "user filter must be an object, got {other}"
                )));
            }
        };

        let mut filter = Self::new();
        for (field, value) in object {
            filter = match field.as_str() {
                "id" => filter.id(value.as_i64().ok_or_else(|| type_error(field, "an integer"))?),
                "username" => {
                    filter.username(value.as_str().ok_or_else(|| type_error(field, "a string"))?)
                }
                "role" => filter.role(value.as_str().ok_or_else(|| type_error(field, "a string"))?),
                "suspended" => {
                    filter.suspended(value.as_bool().ok_or_else(|| type_error(field, "a boolean"))?)
                }
                other => {
                    return Err(DomainError::Validation(format!(
                        "cannot filter users by '{other}'"
                    )));
                }
            };
        }
        Ok(filter)
    }
}

impl TryFrom<Value> for UserFilter {
    type Error = DomainError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::from_json(&value)
    }
}

fn type_error(field: &str, expected: &str) -> DomainError {
    DomainError::Validation(format!("filter field '{field}' must be {expected}"))
}
