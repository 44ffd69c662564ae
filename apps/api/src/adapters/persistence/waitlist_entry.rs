use async_trait::async_trait;
use sqlx::Row;
use uuid::Uuid;

use crate::{
    adapters::persistence::PostgresPersistence,
    app_error::{AppError, AppResult},
    application::use_cases::waitlist::WaitlistRepoTrait,
    domain::entities::waitlist_entry::{NewWaitlistEntry, WaitlistEntry},
};

fn row_to_entry(row: sqlx::postgres::PgRow) -> WaitlistEntry {
    WaitlistEntry {
        id: row.get("id"),
        email: row.get("email"),
        ip_address: row.get("ip_address"),
        user_agent: row.get("user_agent"),
        synced_to_sheets: row.get("synced_to_sheets"),
        created_at: row.get("created_at"),
    }
}

#[async_trait]
impl WaitlistRepoTrait for PostgresPersistence {
    async fn insert(&self, entry: &NewWaitlistEntry) -> AppResult<WaitlistEntry> {
        let row = sqlx::query(
            r#"
            INSERT INTO waitlist (email, ip_address, user_agent)
            VALUES ($1, $2, $3)
            RETURNING id, email, ip_address, user_agent, synced_to_sheets, created_at
            "#,
        )
        .bind(&entry.email)
        .bind(&entry.ip_address)
        .bind(&entry.user_agent)
        .fetch_one(self.pool())
        .await
        .map_err(AppError::from)?;

        Ok(row_to_entry(row))
    }

    async fn mark_synced(&self, id: Uuid) -> AppResult<()> {
        let result = sqlx::query("UPDATE waitlist SET synced_to_sheets = true WHERE id = $1")
            .bind(id)
            .execute(self.pool())
            .await
            .map_err(AppError::from)?;

        if result.rows_affected() == 0 {
            return Err(AppError::Internal(format!("waitlist entry {id} not found")));
        }

        Ok(())
    }
}
