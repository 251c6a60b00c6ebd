use crate::entities::{timestamp::StoredTimestamp, transaction_metadata::TransactionMetadataEntity};
use chrono::{DateTime, SecondsFormat, Utc};
use sqlx::{types::Json, Executor, Sqlite};
use std::collections::BTreeMap;

pub struct TransactionMetadataDao;

fn format_time(at: &DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

impl TransactionMetadataDao {
    pub async fn find_by_call_hash<'a, E>(
        call_hash: &str,
        exec: E,
    ) -> Result<Option<TransactionMetadataEntity>, crate::DatabaseError>
    where
        E: Executor<'a, Database = Sqlite>,
    {
        let sql = r#"select * from transaction_metadata where call_hash = ?"#;
        let res = sqlx::query_as::<_, TransactionMetadataEntity>(sql)
            .bind(call_hash)
            .fetch_optional(exec)
            .await?;
        Ok(res)
    }

    pub async fn list_by_call_hashes<'a, E>(
        call_hashes: &[String],
        exec: E,
    ) -> Result<Vec<TransactionMetadataEntity>, crate::DatabaseError>
    where
        E: Executor<'a, Database = Sqlite>,
    {
        if call_hashes.is_empty() {
            return Ok(Vec::new());
        }

        let placeholders = crate::any_in_collection(call_hashes.iter().map(|_| "?"), ",");
        let sql = format!(
            "select * from transaction_metadata where call_hash in ({})",
            placeholders
        );

        let mut query = sqlx::query_as::<_, TransactionMetadataEntity>(&sql);
        for hash in call_hashes {
            query = query.bind(hash);
        }
        Ok(query.fetch_all(exec).await?)
    }

    pub async fn upsert_note<'a, E>(
        call_hash: &str,
        note: Option<&str>,
        now: &DateTime<Utc>,
        exec: E,
    ) -> Result<TransactionMetadataEntity, crate::DatabaseError>
    where
        E: Executor<'a, Database = Sqlite>,
    {
        let sql = r#"insert into transaction_metadata (call_hash, note, created_at, updated_at)
                values (?, ?, ?, ?)
                on conflict (call_hash)
                do update set
                    note = excluded.note,
                    updated_at = excluded.updated_at
                returning *"#;

        let time = format_time(now);
        let mut rec = sqlx::query_as::<_, TransactionMetadataEntity>(sql)
            .bind(call_hash)
            .bind(note)
            .bind(&time)
            .bind(&time)
            .fetch_all(exec)
            .await?;

        rec.pop().ok_or(crate::DatabaseError::ReturningNone)
    }

    pub async fn upsert_fields<'a, E>(
        call_hash: &str,
        category: &str,
        subfields: &BTreeMap<String, String>,
        now: &DateTime<Utc>,
        exec: E,
    ) -> Result<TransactionMetadataEntity, crate::DatabaseError>
    where
        E: Executor<'a, Database = Sqlite>,
    {
        let sql = r#"insert into transaction_metadata (call_hash, category, subfields, created_at, updated_at)
                values (?, ?, ?, ?, ?)
                on conflict (call_hash)
                do update set
                    category = excluded.category,
                    subfields = excluded.subfields,
                    updated_at = excluded.updated_at
                returning *"#;

        let time = format_time(now);
        let mut rec = sqlx::query_as::<_, TransactionMetadataEntity>(sql)
            .bind(call_hash)
            .bind(category)
            .bind(Json(subfields))
            .bind(&time)
            .bind(&time)
            .fetch_all(exec)
            .await?;

        rec.pop().ok_or(crate::DatabaseError::ReturningNone)
    }

    pub async fn upsert_token_amount<'a, E>(
        call_hash: &str,
        token_amount: Option<&str>,
        now: &DateTime<Utc>,
        exec: E,
    ) -> Result<TransactionMetadataEntity, crate::DatabaseError>
    where
        E: Executor<'a, Database = Sqlite>,
    {
        let sql = r#"insert into transaction_metadata (call_hash, token_amount, created_at, updated_at)
                values (?, ?, ?, ?)
                on conflict (call_hash)
                do update set
                    token_amount = excluded.token_amount,
                    updated_at = excluded.updated_at
                returning *"#;

        let time = format_time(now);
        let mut rec = sqlx::query_as::<_, TransactionMetadataEntity>(sql)
            .bind(call_hash)
            .bind(token_amount)
            .bind(&time)
            .bind(&time)
            .fetch_all(exec)
            .await?;

        rec.pop().ok_or(crate::DatabaseError::ReturningNone)
    }

    /// Sets one signatory's entry of the notification map in a single statement,
    /// other entries are left as stored.
    pub async fn merge_notification<'a, E>(
        call_hash: &str,
        address: &str,
        at: &StoredTimestamp,
        now: &DateTime<Utc>,
        exec: E,
    ) -> Result<TransactionMetadataEntity, crate::DatabaseError>
    where
        E: Executor<'a, Database = Sqlite>,
    {
        let sql = r#"insert into transaction_metadata (call_hash, notifications, created_at, updated_at)
                values (?1, json_object(?2, json(?3)), ?4, ?4)
                on conflict (call_hash)
                do update set
                    notifications = json_patch(
                        coalesce(transaction_metadata.notifications, '{}'),
                        json_object(?2, json(?3))
                    ),
                    updated_at = excluded.updated_at
                returning *"#;

        let time = format_time(now);
        let mut rec = sqlx::query_as::<_, TransactionMetadataEntity>(sql)
            .bind(call_hash)
            .bind(address)
            .bind(Json(at))
            .bind(&time)
            .fetch_all(exec)
            .await?;

        rec.pop().ok_or(crate::DatabaseError::ReturningNone)
    }
}
