use crate::application::error::ApplicationError;
use crate::domain::user::User;

/// Result of [`UserRepository::create`](super::UserRepository::create).
/// Exactly one of the two fields is set.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateOutcome {
    pub user: Option<User>,
    pub error: Option<String>,
}

impl CreateOutcome {
    pub(super) fn created(user: User) -> Self {
        Self {
            user: Some(user),
            error: None,
        }
    }

    pub(super) fn failed(err: &ApplicationError) -> Self {
        Self {
            user: None,
            error: Some(err.to_string()),
        }
    }
}

/// Result of [`UserRepository::update`](super::UserRepository::update).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateOutcome {
    pub success: bool,
    pub error: Option<String>,
}

impl UpdateOutcome {
    pub(super) fn succeeded() -> Self {
        Self {
            success: true,
            error: None,
        }
    }

    pub(super) fn failed(err: &ApplicationError) -> Self {
        Self {
            success: false,
            error: Some(err.to_string()),
        }
    }
}
