use super::timestamp::StoredTimestamp;
use chrono::{DateTime, Utc};
use sqlx::types::Json;
use std::collections::BTreeMap;

pub const DEFAULT_CATEGORY: &str = "none";

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct TransactionMetadataEntity {
    pub call_hash: String,
    pub note: Option<String>,
    pub category: Option<String>,
    pub subfields: Option<Json<BTreeMap<String, String>>>,
    pub token_amount: Option<String>,
    pub notifications: Json<BTreeMap<String, StoredTimestamp>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionFields {
    pub category: String,
    #[serde(default)]
    pub subfields: BTreeMap<String, String>,
}

impl Default for TransactionFields {
    fn default() -> Self {
        Self {
            category: DEFAULT_CATEGORY.to_string(),
            subfields: BTreeMap::new(),
        }
    }
}

/// Off-chain data attached to a multisig call, keyed by call hash.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionMetadata {
    pub call_hash: String,
    pub note: Option<String>,
    pub transaction_fields: Option<TransactionFields>,
    pub token_amount: Option<String>,
    pub notifications: BTreeMap<String, DateTime<Utc>>,
}

impl TryFrom<TransactionMetadataEntity> for TransactionMetadata {
    type Error = crate::Error;

    fn try_from(entity: TransactionMetadataEntity) -> Result<Self, Self::Error> {
        let notifications = entity
            .notifications
            .0
            .into_iter()
            .map(|(address, at)| at.into_datetime().map(|at| (address, at)))
            .collect::<Result<BTreeMap<_, _>, multisig_utils::Error>>()?;

        let subfields = entity.subfields.map(|s| s.0).unwrap_or_default();
        let transaction_fields = entity.category.map(|category| TransactionFields {
            category,
            subfields,
        });

        Ok(Self {
            call_hash: entity.call_hash,
            note: entity.note,
            transaction_fields,
            token_amount: entity.token_amount,
            notifications,
        })
    }
}
