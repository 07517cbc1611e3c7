use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::r2d2::{self, Pool};
use diesel::SqliteConnection;

use immoflow_core::billing::{Profile, ProfileRepositoryTrait, SubscriptionUpdate};
use immoflow_core::Result;

use super::model::ProfileDB;
use crate::db::{get_connection, WriteHandle};
use crate::errors::StorageError;
use crate::schema::profiles::dsl::*;

pub struct ProfileRepository {
    pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
    writer: WriteHandle,
}

impl ProfileRepository {
    pub fn new(
        pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
        writer: WriteHandle,
    ) -> Self {
        ProfileRepository { pool, writer }
    }
}

#[async_trait]
impl ProfileRepositoryTrait for ProfileRepository {
    fn get_profile(&self, profile_id: &str) -> Result<Profile> {
        let mut conn = get_connection(&self.pool)?;
        let profile_db = profiles
            .find(profile_id)
            .first::<ProfileDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(Profile::from(profile_db))
    }

    fn find_by_customer(&self, customer_id: &str) -> Result<Profile> {
        let mut conn = get_connection(&self.pool)?;
        let profile_db = profiles
            .filter(stripe_customer_id.eq(customer_id))
            .first::<ProfileDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(Profile::from(profile_db))
    }

    async fn update_subscription(
        &self,
        profile_id: &str,
        update: SubscriptionUpdate,
    ) -> Result<Profile> {
        let profile_id = profile_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Profile> {
                let mut row = profiles
                    .find(&profile_id)
                    .first::<ProfileDB>(conn)
                    .map_err(StorageError::from)?;

                if let Some(plan) = update.plan {
                    row.subscription_plan = plan.as_str().to_string();
                }
                if let Some(new_status) = update.status {
                    row.subscription_status = new_status;
                }
                if let Some(period_end) = update.current_period_end {
                    row.subscription_current_period_end = Some(period_end.naive_utc());
                }
                if let Some(customer) = update.stripe_customer_id {
                    row.stripe_customer_id = Some(customer);
                }

                diesel::update(profiles.find(&profile_id))
                    .set(&row)
                    .execute(conn)
                    .map_err(StorageError::from)?;
                let result_db = profiles
                    .find(&profile_id)
                    .first::<ProfileDB>(conn)
                    .map_err(StorageError::from)?;
                Ok(Profile::from(result_db))
            })
            .await
    }
}
