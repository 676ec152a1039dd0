// tests/support/mocks/security.rs
use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};

use userbase::application::{ApplicationResult, error::ApplicationError};

const PREFIX: &str = "test-hash";

/// Argon2 を使わない軽量ハッシャー。呼び出しごとに異なる「ソルト」を付与する。
#[derive(Debug, Default)]
pub struct TestPasswordHasher {
    salt: AtomicU64,
}

impl TestPasswordHasher {
    pub fn calls(&self) -> u64 {
        self.salt.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl userbase::application::ports::security::PasswordHasher for TestPasswordHasher {
    async fn hash(&self, password: &str) -> ApplicationResult<String> {
        let salt = self.salt.fetch_add(1, Ordering::SeqCst) + 1;
        let reversed: String = password.chars().rev().collect();
        Ok(format!("{PREFIX}${salt}${reversed}"))
    }

    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<()> {
        let reversed: String = password.chars().rev().collect();
        match expected_hash.split('$').collect::<Vec<_>>().as_slice() {
            [PREFIX, _, stored] if *stored == reversed => Ok(()),
            _ => Err(ApplicationError::unauthorized("invalid credentials")),
        }
    }
}
