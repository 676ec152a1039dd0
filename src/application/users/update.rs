use std::fmt;

use super::{UpdateOutcome, UserChanges, UserRepository, service::log_failure};
use crate::{
    application::error::ApplicationResult,
    domain::user::{PasswordHash, Role, UserId, UserPatch, Username},
};

/// Shorter password updates are discarded rather than rejected. Measured in
/// UTF-16 code units, so a character outside the BMP counts twice.
pub const MIN_PASSWORD_LENGTH: usize = 8;

impl UserRepository {
    /// Apply `changes` to the user with `id`, given as an integer or its
    /// text form (`7`, `"7"`). A row that does not exist is not an error.
    pub async fn update(&self, id: impl fmt::Display, changes: UserChanges) -> UpdateOutcome {
        match self.try_update(id, changes).await {
            Ok(_) => UpdateOutcome::succeeded(),
            Err(err) => {
                log_failure("update", &err);
                UpdateOutcome::failed(&err)
            }
        }
    }

    /// Returns the number of rows changed (zero or one).
    pub async fn try_update(
        &self,
        id: impl fmt::Display,
        changes: UserChanges,
    ) -> ApplicationResult<u64> {
        let user_id: UserId = id.to_string().parse()?;
        let patch = self.build_patch(changes).await?;
        let updated = self.store.update(user_id, patch).await?;

        tracing::debug!(%user_id, updated, "updated user");
        Ok(updated)
    }

    async fn build_patch(&self, changes: UserChanges) -> ApplicationResult<UserPatch> {
        let UserChanges {
            username,
            password,
            role,
            suspended,
        } = changes;

        let mut patch = UserPatch::new(self.clock.now());

        if let Some(username) = username {
            patch = patch.with_username(Username::new(username)?);
        }

        if let Some(role) = role {
            patch = patch.with_role(Role::new(role));
        }

        if let Some(suspended) = suspended {
            patch = patch.with_suspended(suspended);
        }

        match password {
            Some(password) if password.encode_utf16().count() >= MIN_PASSWORD_LENGTH => {
                let hashed = self.password_hasher.hash(&password).await?;
                patch = patch.with_password_hash(PasswordHash::new(hashed)?);
            }
            Some(_) => {
                tracing::debug!(
                    min_length = MIN_PASSWORD_LENGTH,
                    "discarding password update below minimum length"
                );
            }
            None => {}
        }

        Ok(patch)
    }
}
