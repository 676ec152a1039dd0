use super::{UserRepository, service::log_failure};
use crate::{
    application::error::ApplicationResult,
    domain::user::{User, UserFilter},
};

impl UserRepository {
    /// First user matching `filter`, or `None` when nothing matches or the
    /// query fails.
    pub async fn get(&self, filter: UserFilter) -> Option<User> {
        self.try_get(filter).await.unwrap_or_else(|err| {
            log_failure("get", &err);
            None
        })
    }

    pub async fn try_get(&self, filter: UserFilter) -> ApplicationResult<Option<User>> {
        Ok(self.store.find_first(&filter).await?)
    }

    /// Number of users matching `filter`; `0` when the query fails.
    pub async fn count(&self, filter: UserFilter) -> u64 {
        self.try_count(filter).await.unwrap_or_else(|err| {
            log_failure("count", &err);
            0
        })
    }

    pub async fn try_count(&self, filter: UserFilter) -> ApplicationResult<u64> {
        Ok(self.store.count(&filter).await?)
    }

    /// Every user matching `filter`, at most `limit` of them. The limit is
    /// applied by the query. Empty when the query fails.
    pub async fn find_where(&self, filter: UserFilter, limit: Option<u32>) -> Vec<User> {
        self.try_find_where(filter, limit)
            .await
            .unwrap_or_else(|err| {
                log_failure("where", &err);
                Vec::new()
            })
    }

    pub async fn try_find_where(
        &self,
        filter: UserFilter,
        limit: Option<u32>,
    ) -> ApplicationResult<Vec<User>> {
        Ok(self.store.find_many(&filter, limit).await?)
    }
}
