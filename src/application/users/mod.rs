mod changes;
mod create;
mod delete;
mod outcome;
mod query;
mod service;
mod update;

pub use changes::{UserChanges, logged_changes};
pub use create::CreateUserCommand;
pub use outcome::{CreateOutcome, UpdateOutcome};
pub use service::UserRepository;
pub use update::MIN_PASSWORD_LENGTH;
