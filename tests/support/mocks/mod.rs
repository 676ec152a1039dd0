// tests/support/mocks/mod.rs
//! テストサポートモック再エクスポートモジュール
#![cfg(test)]
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod security;
pub mod time;
pub mod user_store;

pub use security::TestPasswordHasher;
pub use time::{FixedClock, fixed_now};
pub use user_store::FailingUserStore;
