use anyhow::Result;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use userbase::{
    application::users::{CreateUserCommand, UserRepository},
    config::{AppConfig, SeedUser},
    domain::user::{UserFilter, UserStore},
    infrastructure::{
        database, repositories::SqliteUserStore, security::password::Argon2PasswordHasher,
        time::SystemClock,
    },
};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    let config = AppConfig::from_env()?;
    init_tracing();

    let pool = database::init_pool(config.database_url(), config.max_connections()).await?;
    database::run_migrations(&pool).await?;
    let pool = Arc::new(pool);

    let store: Arc<dyn UserStore> = Arc::new(SqliteUserStore::new(Arc::clone(&pool)));
    let users = UserRepository::new(
        store,
        Arc::new(Argon2PasswordHasher),
        Arc::new(SystemClock),
    );

    if let Some(seed) = config.seed_user() {
        seed_first_user(&users, seed).await?;
    }

    let total = users.try_count(UserFilter::new()).await?;
    tracing::info!(total, "user store ready");

    Ok(())
}

async fn seed_first_user(users: &UserRepository, seed: &SeedUser) -> Result<()> {
    if users.try_count(UserFilter::new()).await? > 0 {
        tracing::info!("users already present; skipping seed");
        return Ok(());
    }

    let mut command = CreateUserCommand::new(seed.username.clone(), seed.password.clone());
    if let Some(role) = &seed.role {
        command = command.with_role(role.clone());
    }

    let user = users.try_create(command).await?;
    tracing::info!(user_id = %user.id, username = %user.username, "seeded first user");
    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}
