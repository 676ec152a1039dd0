// src/domain/user/mod.rs
pub mod entity;
pub mod filter;
pub mod repository;
pub mod value_objects;

pub use entity::{NewUser, User, UserPatch};
pub use filter::{Condition, UserFilter};
pub use repository::UserStore;
pub use value_objects::{PasswordHash, Role, UserId, Username};
