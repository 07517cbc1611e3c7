//! Trait definitions for platform connection repositories and services.

use async_trait::async_trait;

use crate::connections::connections_model::{NewConnection, PlatformConnection};
use crate::errors::Result;

/// Trait for platform connection repository operations.
#[async_trait]
pub trait ConnectionRepositoryTrait: Send + Sync {
    fn list_connections_for_user(&self, user_id: &str) -> Result<Vec<PlatformConnection>>;

    /// Returns only rows with status `connected`, filtered to the given
    /// platform ids.
    fn get_connected_for_user(
        &self,
        user_id: &str,
        platform_ids: &[String],
    ) -> Result<Vec<PlatformConnection>>;

    async fn upsert_connection(
        &self,
        user_id: &str,
        connection: NewConnection,
    ) -> Result<PlatformConnection>;

    async fn disconnect(&self, user_id: &str, platform_id: &str) -> Result<PlatformConnection>;
}

/// Trait for connection service operations.
#[async_trait]
pub trait ConnectionServiceTrait: Send + Sync {
    fn get_connections(&self, user_id: &str) -> Result<Vec<PlatformConnection>>;
    async fn connect_platform(
        &self,
        user_id: &str,
        connection: NewConnection,
    ) -> Result<PlatformConnection>;
    async fn disconnect_platform(
        &self,
        user_id: &str,
        platform_id: &str,
    ) -> Result<PlatformConnection>;
}
