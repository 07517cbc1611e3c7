//! Platform connections module - domain models, services, and traits.

mod connections_model;
mod connections_service;
mod connections_traits;

pub use connections_model::{ConnectionStatus, NewConnection, PlatformConnection};
pub use connections_service::ConnectionService;
pub use connections_traits::{ConnectionRepositoryTrait, ConnectionServiceTrait};
