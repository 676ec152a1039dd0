// tests/support/mocks/user_store.rs
use async_trait::async_trait;

use userbase::domain::errors::{DomainError, DomainResult};
use userbase::domain::user::{NewUser, User, UserFilter, UserId, UserPatch, UserStore};

const MESSAGE: &str = "database is locked";

/// すべての操作が失敗するストア（バックエンド障害の再現用）
pub struct FailingUserStore;

fn failure() -> DomainError {
    DomainError::Persistence(MESSAGE.into())
}

#[async_trait]
impl UserStore for FailingUserStore {
    async fn create(&self, _new_user: NewUser) -> DomainResult<User> {
        Err(failure())
    }

    async fn update(&self, _id: UserId, _patch: UserPatch) -> DomainResult<u64> {
        Err(failure())
    }

    async fn find_first(&self, _filter: &UserFilter) -> DomainResult<Option<User>> {
        Err(failure())
    }

    async fn count(&self, _filter: &UserFilter) -> DomainResult<u64> {
        Err(failure())
    }

    async fn delete_many(&self, _filter: &UserFilter) -> DomainResult<u64> {
        Err(failure())
    }

    async fn find_many(&self, _filter: &UserFilter, _limit: Option<u32>) -> DomainResult<Vec<User>> {
        Err(failure())
    }
}
