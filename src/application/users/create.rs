use super::{CreateOutcome, UserRepository, service::log_failure};
use crate::{
    application::error::ApplicationResult,
    domain::user::{NewUser, PasswordHash, Role, User, Username},
};

#[derive(Debug, Clone)]
pub struct CreateUserCommand {
    pub username: String,
    pub password: String,
    pub role: Option<String>,
}

impl CreateUserCommand {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            role: None,
        }
    }

    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }
}

impl UserRepository {
    /// Hash the password and insert one row.
    pub async fn create(&self, command: CreateUserCommand) -> CreateOutcome {
        match self.try_create(command).await {
            Ok(user) => CreateOutcome::created(user),
            Err(err) => {
                log_failure("create", &err);
                CreateOutcome::failed(&err)
            }
        }
    }

    pub async fn try_create(&self, command: CreateUserCommand) -> ApplicationResult<User> {
        let CreateUserCommand {
            username,
            password,
            role,
        } = command;

        let username = Username::new(username)?;
        let role = role.map(Role::new).unwrap_or_default();

        let hashed = self.password_hasher.hash(&password).await?;
        let password_hash = PasswordHash::new(hashed)?;

        let new_user = NewUser::new(username, password_hash, role, self.clock.now());
        let user = self.store.create(new_user).await?;

        tracing::debug!(user_id = %user.id, "created user");
        Ok(user)
    }
}
