use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::r2d2::{self, Pool};
use diesel::SqliteConnection;
use uuid::Uuid;

use immoflow_core::leads::{Lead, LeadRepositoryTrait, LeadStatus, NewLead};
use immoflow_core::Result;

use super::model::{LeadDB, NewLeadDB};
use crate::db::{get_connection, WriteHandle};
use crate::errors::StorageError;
use crate::schema::leads;
use crate::schema::leads::dsl::*;

pub struct LeadRepository {
    pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
    writer: WriteHandle,
}

impl LeadRepository {
    pub fn new(
        pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
        writer: WriteHandle,
    ) -> Self {
        LeadRepository { pool, writer }
    }
}

#[async_trait]
impl LeadRepositoryTrait for LeadRepository {
    fn list_leads_for_user(&self, owner_id: &str) -> Result<Vec<Lead>> {
        let mut conn = get_connection(&self.pool)?;
        let leads_db = leads
            .filter(user_id.eq(owner_id))
            .order(created_at.desc())
            .load::<LeadDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(leads_db.into_iter().map(Lead::from).collect())
    }

    async fn insert_lead(&self, new_lead: NewLead) -> Result<Lead> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Lead> {
                let new_lead_db = NewLeadDB::from_domain(Uuid::new_v4().to_string(), new_lead);
                let result_db = diesel::insert_into(leads::table)
                    .values(&new_lead_db)
                    .returning(LeadDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(Lead::from(result_db))
            })
            .await
    }

    async fn update_lead_status(
        &self,
        owner_id: &str,
        lead_id: &str,
        new_status: LeadStatus,
    ) -> Result<Lead> {
        let owner_id = owner_id.to_string();
        let lead_id = lead_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Lead> {
                let updated = diesel::update(
                    leads
                        .filter(id.eq(&lead_id))
                        .filter(user_id.eq(&owner_id)),
                )
                .set(status.eq(new_status.as_str()))
                .execute(conn)
                .map_err(StorageError::from)?;
                if updated == 0 {
                    return Err(StorageError::QueryFailed(diesel::result::Error::NotFound).into());
                }
                let result_db = leads
                    .find(&lead_id)
                    .first::<LeadDB>(conn)
                    .map_err(StorageError::from)?;
                Ok(Lead::from(result_db))
            })
            .await
    }
}
