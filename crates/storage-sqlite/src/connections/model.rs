//! Database models for platform connections.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use immoflow_core::connections::{ConnectionStatus, PlatformConnection};

#[derive(
    Queryable,
    Identifiable,
    AsChangeset,
    Selectable,
    PartialEq,
    Serialize,
    Deserialize,
    Debug,
    Clone,
)]
#[diesel(table_name = crate::schema::platform_connections)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct PlatformConnectionDB {
    pub id: String,
    pub user_id: String,
    pub platform_id: String,
    pub status: String,
    pub metadata: String,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::platform_connections)]
#[serde(rename_all = "camelCase")]
pub struct NewPlatformConnectionDB {
    pub id: String,
    pub user_id: String,
    pub platform_id: String,
    pub status: String,
    pub metadata: String,
}

// Conversion to domain models
impl From<PlatformConnectionDB> for PlatformConnection {
    fn from(db: PlatformConnectionDB) -> Self {
        Self {
            id: db.id,
            user_id: db.user_id,
            platform_id: db.platform_id,
            status: if db.status == "disconnected" {
                ConnectionStatus::Disconnected
            } else {
                ConnectionStatus::Connected
            },
            metadata: serde_json::from_str(&db.metadata)
                .unwrap_or(serde_json::Value::Null),
            created_at: db.created_at.and_utc(),
        }
    }
}
