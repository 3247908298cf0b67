use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct CongregationRow {
    pub id: Uuid,
    pub name: String,
    pub language: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct PublisherRow {
    pub id: Uuid,
    pub congregation_id: Uuid,
    pub username: Option<String>,
    pub firstname: String,
    pub lastname: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct TerritoryRow {
    pub id: Uuid,
    pub congregation_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub checked_out_to: Option<Uuid>,
    pub checked_out_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TerritoryRow {
    /// A territory is checked out iff a publisher holds it; the two checkout
    /// columns are kept in lockstep by a table constraint.
    pub fn is_checked_out(&self) -> bool {
        self.checked_out_to.is_some()
    }
}

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct AddressRow {
    pub id: Uuid,
    pub territory_id: Uuid,
    pub addr1: String,
    pub addr2: Option<String>,
    pub city: String,
    pub state_province: Option<String>,
    pub postal_code: Option<String>,
    pub phone: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct ActivityLogRow {
    pub id: Uuid,
    pub address_id: Uuid,
    pub publisher_id: Uuid,
    pub value: String,
    pub notes: Option<String>,
    pub logged_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
