use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::r2d2::{self, Pool};
use diesel::SqliteConnection;
use uuid::Uuid;

use immoflow_core::connections::{
    ConnectionRepositoryTrait, ConnectionStatus, NewConnection, PlatformConnection,
};
use immoflow_core::Result;

use super::model::{NewPlatformConnectionDB, PlatformConnectionDB};
use crate::db::{get_connection, WriteHandle};
use crate::errors::StorageError;
use crate::schema::platform_connections;
use crate::schema::platform_connections::dsl::*;

pub struct ConnectionRepository {
    pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
    writer: WriteHandle,
}

impl ConnectionRepository {
    pub fn new(
        pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
        writer: WriteHandle,
    ) -> Self {
        ConnectionRepository { pool, writer }
    }
}

#[async_trait]
impl ConnectionRepositoryTrait for ConnectionRepository {
    fn list_connections_for_user(&self, owner_id: &str) -> Result<Vec<PlatformConnection>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = platform_connections
            .filter(user_id.eq(owner_id))
            .order(platform_id.asc())
            .load::<PlatformConnectionDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(rows.into_iter().map(PlatformConnection::from).collect())
    }

    fn get_connected_for_user(
        &self,
        owner_id: &str,
        platform_ids: &[String],
    ) -> Result<Vec<PlatformConnection>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = platform_connections
            .filter(user_id.eq(owner_id))
            .filter(status.eq(ConnectionStatus::Connected.as_str()))
            .filter(platform_id.eq_any(platform_ids))
            .load::<PlatformConnectionDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(rows.into_iter().map(PlatformConnection::from).collect())
    }

    async fn upsert_connection(
        &self,
        owner_id: &str,
        connection: NewConnection,
    ) -> Result<PlatformConnection> {
        let owner_id = owner_id.to_string();
        self.writer
            .exec(
                move |conn: &mut SqliteConnection| -> Result<PlatformConnection> {
                    let metadata_text = serde_json::to_string(&connection.metadata)
                        .map_err(|e| StorageError::SerializationError(e.to_string()))?;
                    let row = NewPlatformConnectionDB {
                        id: Uuid::new_v4().to_string(),
                        user_id: owner_id.clone(),
                        platform_id: connection.platform_id.clone(),
                        status: ConnectionStatus::Connected.as_str().to_string(),
                        metadata: metadata_text.clone(),
                    };
                    diesel::insert_into(platform_connections::table)
                        .values(&row)
                        .on_conflict((user_id, platform_id))
                        .do_update()
                        .set((
                            status.eq(ConnectionStatus::Connected.as_str()),
                            metadata.eq(&metadata_text),
                        ))
                        .execute(conn)
                        .map_err(StorageError::from)?;
                    let result_db = platform_connections
                        .filter(user_id.eq(&owner_id))
                        .filter(platform_id.eq(&connection.platform_id))
                        .first::<PlatformConnectionDB>(conn)
                        .map_err(StorageError::from)?;
                    Ok(PlatformConnection::from(result_db))
                },
            )
            .await
    }

    async fn disconnect(&self, owner_id: &str, platform: &str) -> Result<PlatformConnection> {
        let owner_id = owner_id.to_string();
        let platform = platform.to_string();
        self.writer
            .exec(
                move |conn: &mut SqliteConnection| -> Result<PlatformConnection> {
                    let updated = diesel::update(
                        platform_connections
                            .filter(user_id.eq(&owner_id))
                            .filter(platform_id.eq(&platform)),
                    )
                    .set(status.eq(ConnectionStatus::Disconnected.as_str()))
                    .execute(conn)
                    .map_err(StorageError::from)?;
                    if updated == 0 {
                        return Err(
                            StorageError::QueryFailed(diesel::result::Error::NotFound).into()
                        );
                    }
                    let result_db = platform_connections
                        .filter(user_id.eq(&owner_id))
                        .filter(platform_id.eq(&platform))
                        .first::<PlatformConnectionDB>(conn)
                        .map_err(StorageError::from)?;
                    Ok(PlatformConnection::from(result_db))
                },
            )
            .await
    }
}
