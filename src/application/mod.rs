pub mod error;
pub mod ports;
pub mod users;

pub use error::ApplicationResult;
