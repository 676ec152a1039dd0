use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::{
    Condition, NewUser, PasswordHash, Role, User, UserFilter, UserId, UserPatch, UserStore,
    Username,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, QueryBuilder, Sqlite, SqlitePool};
use std::sync::Arc;

const USER_COLUMNS: &str =
    "id, username, password_hash, role, suspended, created_at, last_updated_at";

#[derive(Clone)]
pub struct SqliteUserStore {
    pool: Arc<SqlitePool>,
}

impl SqliteUserStore {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }

    fn select(filter: &UserFilter) -> QueryBuilder<'static, Sqlite> {
        let mut builder = QueryBuilder::new(format!("SELECT {USER_COLUMNS} FROM users"));
        push_filter(&mut builder, filter);
        builder.push(" ORDER BY id");
        builder
    }
}

fn push_filter(builder: &mut QueryBuilder<'_, Sqlite>, filter: &UserFilter) {
    for (index, condition) in filter.conditions().into_iter().enumerate() {
        builder.push(if index == 0 { " WHERE " } else { " AND " });
        builder.push(condition.column());
        builder.push(" = ");
        match condition {
            Condition::Id(id) => builder.push_bind(id),
            Condition::Username(username) => builder.push_bind(username),
            Condition::Role(role) => builder.push_bind(role),
            Condition::Suspended(suspended) => builder.push_bind(i64::from(suspended)),
        };
    }
}

fn to_count(value: i64) -> DomainResult<u64> {
    u64::try_from(value).map_err(|_| DomainError::Persistence(format!("invalid row count {value}")))
}

#[derive(Debug, FromRow)]
struct UserRow {
    id: i64,
    username: String,
    password_hash: String,
    role: String,
    suspended: i64,
    created_at: DateTime<Utc>,
    last_updated_at: DateTime<Utc>,
}

impl TryFrom<UserRow> for User {
    type Error = DomainError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        Ok(User {
            id: UserId::new(row.id)?,
            username: Username::new(row.username)?,
            password_hash: PasswordHash::new(row.password_hash)?,
            role: Role::new(row.role),
            suspended: row.suspended != 0,
            created_at: row.created_at,
            last_updated_at: row.last_updated_at,
        })
    }
}

#[async_trait]
impl UserStore for SqliteUserStore {
    async fn create(&self, new_user: NewUser) -> DomainResult<User> {
        let NewUser {
            username,
            password_hash,
            role,
            suspended,
            created_at,
        } = new_user;

        let row = sqlx::query_as::<_, UserRow>(
            "INSERT INTO users (username, password_hash, role, suspended, created_at, last_updated_at) VALUES (?, ?, ?, ?, ?, ?) RETURNING id, username, password_hash, role, suspended, created_at, last_updated_at",
        )
        .bind(username.as_str())
        .bind(password_hash.as_str())
        .bind(role.as_str())
        .bind(i64::from(suspended))
        .bind(created_at)
        .bind(created_at)
        .fetch_one(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        User::try_from(row)
    }

    async fn update(&self, id: UserId, patch: UserPatch) -> DomainResult<u64> {
        let UserPatch {
            username,
            password_hash,
            role,
            suspended,
            last_updated_at,
        } = patch;

        let mut builder: QueryBuilder<Sqlite> =
            QueryBuilder::new("UPDATE users SET last_updated_at = ");
        builder.push_bind(last_updated_at);

        if let Some(username) = username {
            builder.push(", username = ");
            builder.push_bind(String::from(username));
        }

        if let Some(password_hash) = password_hash {
            builder.push(", password_hash = ");
            builder.push_bind(String::from(password_hash));
        }

        if let Some(role) = role {
            builder.push(", role = ");
            builder.push_bind(String::from(role));
        }

        if let Some(suspended) = suspended {
            builder.push(", suspended = ");
            builder.push_bind(i64::from(suspended));
        }

        builder.push(" WHERE id = ");
        builder.push_bind(i64::from(id));

        let result = builder
            .build()
            .execute(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        Ok(result.rows_affected())
    }

    async fn find_first(&self, filter: &UserFilter) -> DomainResult<Option<User>> {
        let mut builder = Self::select(filter);
        builder.push(" LIMIT 1");

        let row = builder
            .build_query_as::<UserRow>()
            .fetch_optional(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(User::try_from).transpose()
    }

    async fn count(&self, filter: &UserFilter) -> DomainResult<u64> {
        let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new("SELECT COUNT(1) FROM users");
        push_filter(&mut builder, filter);

        let count = builder
            .build_query_scalar::<i64>()
            .fetch_one(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        to_count(count)
    }

    async fn delete_many(&self, filter: &UserFilter) -> DomainResult<u64> {
        let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new("DELETE FROM users");
        push_filter(&mut builder, filter);

        let result = builder
            .build()
            .execute(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        Ok(result.rows_affected())
    }

    async fn find_many(&self, filter: &UserFilter, limit: Option<u32>) -> DomainResult<Vec<User>> {
        let mut builder = Self::select(filter);
        if let Some(limit) = limit {
            builder.push(" LIMIT ");
            builder.push_bind(i64::from(limit));
        }

        let rows = builder
            .build_query_as::<UserRow>()
            .fetch_all(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(User::try_from).collect()
    }
}
