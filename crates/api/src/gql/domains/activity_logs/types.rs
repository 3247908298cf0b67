use async_graphql::{InputObject, SimpleObject, ID};
use chrono::{DateTime, Utc};

use infra::models::ActivityLogRow;

/// A record of one visit attempt at an address. `value` carries the visit
/// outcome code the congregation uses (e.g. "NH" for not home).
#[derive(SimpleObject, Clone, Debug)]
pub struct ActivityLog {
    pub id: ID,
    pub address_id: ID,
    pub publisher_id: ID,
    pub value: String,
    pub notes: Option<String>,
    pub timestamp: DateTime<Utc>,
}

impl From<ActivityLogRow> for ActivityLog {
    fn from(row: ActivityLogRow) -> Self {
        Self {
            id: row.id.into(),
            address_id: row.address_id.into(),
            publisher_id: row.publisher_id.into(),
            value: row.value,
            notes: row.notes,
            timestamp: row.logged_at,
        }
    }
}

#[derive(InputObject, Clone)]
pub struct ActivityLogInput {
    pub address_id: ID,
    pub publisher_id: ID,
    pub value: String,
    pub notes: Option<String>,
    /// Defaults to the server clock when absent.
    pub timestamp: Option<DateTime<Utc>>,
}

#[derive(InputObject, Clone)]
pub struct UpdateActivityLogInput {
    pub value: Option<String>,
    pub notes: Option<String>,
}

/// One page of log entries, newest first.
#[derive(SimpleObject, Clone)]
pub struct ActivityLogPage {
    pub items: Vec<ActivityLog>,
    pub total_count: i32,
    pub page_size: i32,
    pub offset: i32,
    pub has_next_page: bool,
}
