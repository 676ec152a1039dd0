use crate::domain::errors::DomainResult;
use crate::domain::user::{
    entity::{NewUser, User, UserPatch},
    filter::UserFilter,
    value_objects::UserId,
};
use async_trait::async_trait;

/// Storage backend for the `users` table.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn create(&self, new_user: NewUser) -> DomainResult<User>;

    /// Returns the number of rows changed; zero when no row has `id`.
    async fn update(&self, id: UserId, patch: UserPatch) -> DomainResult<u64>;

    async fn find_first(&self, filter: &UserFilter) -> DomainResult<Option<User>>;

    async fn count(&self, filter: &UserFilter) -> DomainResult<u64>;

    async fn delete_many(&self, filter: &UserFilter) -> DomainResult<u64>;

    async fn find_many(&self, filter: &UserFilter, limit: Option<u32>) -> DomainResult<Vec<User>>;
}
