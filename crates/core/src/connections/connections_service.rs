use std::sync::Arc;

use async_trait::async_trait;
use log::info;

use crate::connections::connections_model::{NewConnection, PlatformConnection};
use crate::connections::connections_traits::{ConnectionRepositoryTrait, ConnectionServiceTrait};
use crate::errors::{Error, Result, ValidationError};

/// Service for managing a user's platform connections.
pub struct ConnectionService {
    connection_repository: Arc<dyn ConnectionRepositoryTrait>,
}

impl ConnectionService {
    pub fn new(connection_repository: Arc<dyn ConnectionRepositoryTrait>) -> Self {
        ConnectionService {
            connection_repository,
        }
    }
}

#[async_trait]
impl ConnectionServiceTrait for ConnectionService {
    fn get_connections(&self, user_id: &str) -> Result<Vec<PlatformConnection>> {
        self.connection_repository.list_connections_for_user(user_id)
    }

    async fn connect_platform(
        &self,
        user_id: &str,
        connection: NewConnection,
    ) -> Result<PlatformConnection> {
        if connection.platform_id.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "platformId".to_string(),
            )));
        }
        let saved = self
            .connection_repository
            .upsert_connection(user_id, connection)
            .await?;
        info!("user {} connected platform {}", user_id, saved.platform_id);
        Ok(saved)
    }

    async fn disconnect_platform(
        &self,
        user_id: &str,
        platform_id: &str,
    ) -> Result<PlatformConnection> {
        let saved = self
            .connection_repository
            .disconnect(user_id, platform_id)
            .await?;
        info!("user {} disconnected platform {}", user_id, platform_id);
        Ok(saved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connections::connections_model::ConnectionStatus;
    use chrono::Utc;

    struct MockConnectionRepository;

    #[async_trait]
    impl ConnectionRepositoryTrait for MockConnectionRepository {
        fn list_connections_for_user(&self, _: &str) -> Result<Vec<PlatformConnection>> {
            Ok(vec![])
        }

        fn get_connected_for_user(
            &self,
            _: &str,
            _: &[String],
        ) -> Result<Vec<PlatformConnection>> {
            Ok(vec![])
        }

        async fn upsert_connection(
            &self,
            user_id: &str,
            connection: NewConnection,
        ) -> Result<PlatformConnection> {
            Ok(PlatformConnection {
                id: "conn-1".to_string(),
                user_id: user_id.to_string(),
                platform_id: connection.platform_id,
                status: ConnectionStatus::Connected,
                metadata: connection.metadata,
                created_at: Utc::now(),
            })
        }

        async fn disconnect(&self, _: &str, _: &str) -> Result<PlatformConnection> {
            unimplemented!()
        }
    }

    #[tokio::test]
    async fn connect_requires_platform_id() {
        let service = ConnectionService::new(Arc::new(MockConnectionRepository));
        let result = service
            .connect_platform(
                "user-1",
                NewConnection {
                    platform_id: "  ".to_string(),
                    metadata: serde_json::json!({}),
                },
            )
            .await;
        assert!(matches!(
            result,
            Err(Error::Validation(ValidationError::MissingField(_)))
        ));
    }

    #[tokio::test]
    async fn connect_upserts_and_returns_connected_row() {
        let service = ConnectionService::new(Arc::new(MockConnectionRepository));
        let saved = service
            .connect_platform(
                "user-1",
                NewConnection {
                    platform_id: "facebook".to_string(),
                    metadata: serde_json::json!({"accessToken": "tok"}),
                },
            )
            .await
            .unwrap();
        assert_eq!(saved.status, ConnectionStatus::Connected);
        assert_eq!(saved.metadata["accessToken"], "tok");
    }
}
