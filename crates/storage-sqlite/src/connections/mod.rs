//! SQLite storage implementation for platform connections.

mod model;
mod repository;

pub use model::{NewPlatformConnectionDB, PlatformConnectionDB};
pub use repository::ConnectionRepository;
