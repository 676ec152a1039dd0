use super::{UserRepository, service::log_failure};
use crate::{application::error::ApplicationResult, domain::user::UserFilter};

impl UserRepository {
    /// Delete every user matching `filter`. `true` whenever the statement ran,
    /// including when it matched nothing.
    pub async fn delete(&self, filter: UserFilter) -> bool {
        match self.try_delete(filter).await {
            Ok(_) => true,
            Err(err) => {
                log_failure("delete", &err);
                false
            }
        }
    }

    /// Returns the number of rows removed.
    pub async fn try_delete(&self, filter: UserFilter) -> ApplicationResult<u64> {
        let deleted = self.store.delete_many(&filter).await?;
        tracing::debug!(deleted, "deleted users");
        Ok(deleted)
    }
}
