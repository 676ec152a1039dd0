// tests/support/helpers.rs
use std::sync::Arc;

use once_cell::sync::Lazy;
use sqlx::{SqlitePool, sqlite::SqlitePoolOptions};

use super::mocks::{FailingUserStore, FixedClock, TestPasswordHasher};
use userbase::application::ports::security::PasswordHasher;
use userbase::application::users::{CreateUserCommand, UserRepository};
use userbase::domain::user::{User, UserStore};
use userbase::infrastructure::{database, repositories::SqliteUserStore};

static TRACING: Lazy<()> = Lazy::new(|| {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
});

pub fn init_tracing() {
    Lazy::force(&TRACING);
}

/// マイグレーション済みのインメモリ SQLite プール。
/// `sqlite::memory:` は接続ごとに別 DB になるため接続数は 1 に固定する。
pub async fn memory_pool() -> Arc<SqlitePool> {
    init_tracing();
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .expect("connect sqlite memory");
    database::run_migrations(&pool)
        .await
        .expect("run migrations");
    Arc::new(pool)
}

pub fn repository_with(pool: &Arc<SqlitePool>, hasher: Arc<dyn PasswordHasher>) -> UserRepository {
    let store: Arc<dyn UserStore> = Arc::new(SqliteUserStore::new(Arc::clone(pool)));
    UserRepository::new(store, hasher, Arc::new(FixedClock))
}

pub fn repository(pool: &Arc<SqlitePool>) -> UserRepository {
    repository_with(pool, Arc::new(TestPasswordHasher::default()))
}

pub fn failing_repository() -> UserRepository {
    init_tracing();
    UserRepository::new(
        Arc::new(FailingUserStore),
        Arc::new(TestPasswordHasher::default()),
        Arc::new(FixedClock),
    )
}

/// 保存済みのハッシュ値を直接読み出す
pub async fn stored_hash(pool: &SqlitePool, username: &str) -> String {
    sqlx::query_scalar::<_, String>("SELECT password_hash FROM users WHERE username = ?")
        .bind(username)
        .fetch_one(pool)
        .await
        .expect("stored hash")
}

pub async fn create_user(users: &UserRepository, username: &str, password: &str) -> User {
    users
        .try_create(CreateUserCommand::new(username, password))
        .await
        .expect("create user")
}
