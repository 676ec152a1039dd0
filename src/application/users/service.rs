use std::{collections::BTreeMap, sync::Arc};

use serde_json::{Map, Value};

use crate::application::{
    error::ApplicationError,
    ports::{ClockPort, PasswordHasherPort},
};
use crate::domain::user::UserStore;

/// CRUD façade over the `users` table.
///
/// Each operation comes in two shapes. The `try_*` methods return
/// [`ApplicationResult`](crate::application::ApplicationResult) and keep "no
/// match" apart from a backend failure. The plain methods never fail: they log
/// the error and fall back to an empty value (`None`, `0`, `false`, an empty
/// `Vec`) or an outcome carrying the error message.
pub struct UserRepository {
    pub(super) store: Arc<dyn UserStore>,
    pub(super) password_hasher: Arc<PasswordHasherPort>,
    pub(super) clock: Arc<ClockPort>,
}

impl UserRepository {
    pub fn new(
        store: Arc<dyn UserStore>,
        password_hasher: Arc<PasswordHasherPort>,
        clock: Arc<ClockPort>,
    ) -> Self {
        Self {
            store,
            password_hasher,
            clock,
        }
    }

    /// See [`logged_changes`](super::logged_changes).
    pub fn logged_changes(
        updates: &Map<String, Value>,
        prev: &Map<String, Value>,
    ) -> BTreeMap<String, String> {
        super::changes::logged_changes(updates, prev)
    }
}

pub(super) fn log_failure(operation: &'static str, err: &ApplicationError) {
    tracing::error!(operation, error = %err, "user storage operation failed");
}
